//! Error handling.
//!
//! Error types are split by when they can occur:
//! - **Initialization errors**: failures while setting up process-wide
//!   resources (logger)
//! - **Probe setup errors**: malformed run configurations handed to the
//!   prober engine
//!
//! Per-probe network failures are deliberately absent here: they are
//! expected output, recorded as per-target statuses, never errors.

mod types;

// Re-export public API
pub use types::{InitializationError, ProbeSetupError};
