//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom
//! formatting.

use std::io::Write;

use colored::Colorize;
use log::LevelFilter;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. The logger reads
/// `RUST_LOG` by default; the provided `level` overrides it, so
/// `RUST_LOG=debug` works for quick debugging while `--log-level`
/// keeps explicit control.
///
/// # Errors
///
/// Returns [`InitializationError::LoggerError`] if the logger was
/// already initialized (e.g. in tests that set one up twice).
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("hyper", LevelFilter::Info);
    // hickory logs a warning per malformed upstream DNS message; those
    // are routine when probing public resolvers.
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Info);
    builder.filter_module("domain_probe", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logger_does_not_panic_for_any_format() {
        // env_logger can only be initialized once per process; later
        // calls return an error instead of panicking, which is all we
        // can assert here.
        let first = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(first.is_ok() || first.is_err());

        let second = init_logger_with(LevelFilter::Debug, LogFormat::Json);
        assert!(second.is_err(), "second initialization must be rejected");
    }
}
