//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and service configuration.

use clap::{Parser, ValueEnum};

/// Logging level for the service.
///
/// Controls the verbosity of log output, from most restrictive (Error)
/// to most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration, from CLI flags with environment fallbacks.
///
/// Every flag falls back to an environment variable where the original
/// deployment expects one (`HOST`, `PORT`, `ALLOWED_ORIGINS`), so the
/// binary runs unchanged under both styles.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_probe",
    about = "Domain-inspection API: blocklist resolvers, open ports, IP resolution"
)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Origins allowed by the CORS middleware (comma separated)
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',', default_value = "*")]
    pub allowed_origins: Vec<String>,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_override_everything() {
        let config = ServerConfig::parse_from([
            "domain_probe",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--log-level",
            "debug",
        ]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert!(matches!(config.log_level, LogLevel::Debug));
    }

    #[test]
    fn allowed_origins_split_on_commas() {
        let config = ServerConfig::parse_from([
            "domain_probe",
            "--allowed-origins",
            "http://a.local:3000,https://b.local",
        ]);
        assert_eq!(
            config.allowed_origins,
            vec!["http://a.local:3000".to_string(), "https://b.local".to_string()]
        );
    }

    #[test]
    fn log_level_converts_to_level_filter() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
    }
}
