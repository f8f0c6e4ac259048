//! Main application entry point (API server binary).
//!
//! This is a thin wrapper around the `domain_probe` library that
//! handles:
//! - Command-line argument parsing (with environment fallbacks)
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Wiring the checks and running the server loop

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use domain_probe::initialization::{init_logger_with, init_resolver};
use domain_probe::{start_api_server, Checks, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file in the working directory is optional.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let checks = Arc::new(Checks::new(init_resolver()));

    if let Err(e) = start_api_server(&config, checks).await {
        eprintln!("domain_probe error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}
