//! Service configuration and constants.
//!
//! This module provides:
//! - Configuration constants (check timeouts, concurrency limits)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, ServerConfig};
