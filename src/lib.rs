//! domain_probe library: domain-inspection checks over a
//! bounded-concurrency network prober.
//!
//! The core of this crate is the [`probe`] module: a fan-out engine
//! that runs many independent network probes under a concurrency cap
//! and a hard wall-clock deadline, and always returns a complete,
//! deterministically ordered result set. The [`checks`] module builds
//! the blocklist-resolver and open-port checks on top of it, and
//! [`api_server`] serves them as JSON endpoints.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use clap::Parser;
//! use domain_probe::initialization::init_resolver;
//! use domain_probe::{start_api_server, Checks, ServerConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::parse_from(["domain_probe"]);
//! let checks = Arc::new(Checks::new(init_resolver()));
//! start_api_server(&config, checks).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an
//! async context.

#![warn(missing_docs)]

pub mod api_server;
pub mod checks;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod probe;

// Re-export public API
pub use api_server::start_api_server;
pub use checks::Checks;
pub use config::{LogFormat, LogLevel, ServerConfig};
