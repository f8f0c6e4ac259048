//! Error type definitions.
//!
//! This module defines the typed errors for process initialization and
//! probe-run configuration.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Precondition violations in a probe-run configuration.
///
/// These indicate a programming error at the call site, not a runtime
/// condition -- the engine refuses to start rather than guessing at a
/// usable configuration. Individual probe failures are never reported
/// through this type; they are absorbed into per-target statuses.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSetupError {
    /// The concurrency limit was zero.
    #[error("concurrency limit must be at least 1")]
    InvalidConcurrencyLimit,

    /// The per-probe timeout was zero.
    #[error("per-probe timeout must be non-zero")]
    ZeroProbeTimeout,

    /// The overall run deadline was zero.
    #[error("overall deadline must be non-zero")]
    ZeroDeadline,
}
