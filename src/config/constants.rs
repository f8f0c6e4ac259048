//! Configuration constants.
//!
//! Timeouts and limits for the probe-backed checks. The blocklist and
//! port-scan figures are paired: a per-probe bound on the single
//! network call, and a run-wide deadline that caps the whole fan-out.

use std::time::Duration;

/// Simultaneous blocklist resolver probes.
pub const BLOCKLIST_CONCURRENCY: usize = 5;
/// Bound on a single blocklist DNS query.
pub const BLOCKLIST_PROBE_TIMEOUT: Duration = Duration::from_secs(3);
/// Hard wall-clock bound on one blocklist run.
pub const BLOCKLIST_DEADLINE: Duration = Duration::from_secs(5);

/// Bound on a single TCP connect attempt.
pub const PORT_PROBE_TIMEOUT: Duration = Duration::from_millis(1500);
/// Hard wall-clock bound on one port scan.
pub const PORT_SCAN_DEADLINE: Duration = Duration::from_millis(9000);

/// Plain DNS port used when dialing a specific resolver.
pub const DNS_PORT: u16 = 53;
/// System resolver query timeout in seconds.
/// Most queries complete in under a second; 3s fails fast on slow or
/// unresponsive upstream servers without stalling a check request.
pub const DNS_TIMEOUT_SECS: u64 = 3;
