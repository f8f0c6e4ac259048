//! Process-wide resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (with custom formatting)
//! - System DNS resolver (for single-shot checks)
//!
//! Everything here is built once at startup and shared read-only by
//! request handlers.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
