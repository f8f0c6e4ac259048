//! Bounded-concurrency network prober.
//!
//! The shared fan-out pattern behind the blocklist-resolver check and
//! the open-port scanner: many independent network probes, a cap on
//! concurrent in-flight work, a hard wall-clock deadline for the whole
//! run, and a complete, deterministically ordered result set even when
//! the deadline cuts probes off mid-flight.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use domain_probe::probe::{run_probes, ProbeRunOptions, ProbeStatus, ProbeTarget};
//!
//! #[derive(Clone)]
//! struct Port(u16);
//!
//! impl ProbeTarget for Port {
//!     type Id = u16;
//!     fn id(&self) -> u16 { self.0 }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let targets = vec![Port(22), Port(80), Port(443)];
//! let results = run_probes(
//!     &targets,
//!     |port: Port| async move {
//!         match tokio::net::TcpStream::connect(("example.com", port.0)).await {
//!             Ok(_) => ProbeStatus::Success,
//!             Err(_) => ProbeStatus::Failure,
//!         }
//!     },
//!     ProbeRunOptions::new(8, Duration::from_millis(1500), Duration::from_secs(9)),
//! )
//! .await?;
//! assert_eq!(results.len(), 3);
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod engine;
mod types;

// Re-export public API
pub use aggregate::{complete, partition_sorted, sort_results, Completion};
pub use engine::run_probes;
pub use types::{ProbeResult, ProbeRunOptions, ProbeStatus, ProbeTarget};
