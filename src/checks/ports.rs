//! Open-port scanner check.
//!
//! TCP-connects to a fixed list of well-known ports. A completed
//! connect is the only signal for "open"; closed and filtered are not
//! distinguished -- the ambiguity is the signal.

use std::sync::Arc;

use serde::Serialize;

use crate::config::{PORT_PROBE_TIMEOUT, PORT_SCAN_DEADLINE};
use crate::error_handling::ProbeSetupError;
use crate::probe::{
    partition_sorted, run_probes, ProbeResult, ProbeRunOptions, ProbeStatus, ProbeTarget,
};

/// Well-known ports probed by default.
#[rustfmt::skip]
pub const WELL_KNOWN_PORTS: &[u16] = &[
    20, 21, 22, 23, 25, 53, 80, 67, 68, 69,
    110, 119, 123, 143, 156, 161, 162, 179, 194,
    389, 443, 587, 993, 995,
    3000, 3306, 3389, 5060, 5900, 8000, 8080, 8888,
];

/// One TCP port to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortTarget {
    /// The port number, also the target's identity.
    pub port: u16,
}

impl PortTarget {
    /// Wraps a port number.
    pub fn new(port: u16) -> Self {
        Self { port }
    }
}

impl ProbeTarget for PortTarget {
    type Id = u16;

    fn id(&self) -> u16 {
        self.port
    }
}

/// Scan outcome, bucketed and ascending-sorted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortScanReport {
    /// Ports that accepted a TCP connection.
    pub open_ports: Vec<u16>,
    /// Everything else: refused, timed out, or cut off by the run
    /// deadline.
    pub failed_ports: Vec<u16>,
}

impl PortScanReport {
    /// Presentation policy for this check: a port is open only on a
    /// completed connect; refused, timed-out and deadline-missed ports
    /// all land in the failed bucket.
    fn from_results(results: Vec<ProbeResult<PortTarget>>) -> Self {
        let (open, failed) = partition_sorted(
            results,
            |result| result.status == ProbeStatus::Success,
            |result| result.target.port,
        );
        Self {
            open_ports: open.iter().map(|result| result.target.port).collect(),
            failed_ports: failed.iter().map(|result| result.target.port).collect(),
        }
    }
}

/// The open-port scanner.
pub struct PortScan;

impl PortScan {
    /// Creates the scanner; it carries no state of its own.
    pub fn new() -> Self {
        Self
    }

    /// Probes the default well-known ports on `host`.
    pub async fn scan(&self, host: &str) -> Result<PortScanReport, ProbeSetupError> {
        let targets: Vec<PortTarget> = WELL_KNOWN_PORTS
            .iter()
            .copied()
            .map(PortTarget::new)
            .collect();
        // One unit of work per port; the target set is small and fixed.
        let options =
            ProbeRunOptions::new(targets.len(), PORT_PROBE_TIMEOUT, PORT_SCAN_DEADLINE);
        self.scan_ports(host, &targets, options).await
    }

    /// Probes an explicit target list, for callers (and tests) that
    /// need non-default ports or timings.
    pub async fn scan_ports(
        &self,
        host: &str,
        targets: &[PortTarget],
        options: ProbeRunOptions,
    ) -> Result<PortScanReport, ProbeSetupError> {
        let host: Arc<str> = Arc::from(host);
        let results = run_probes(
            targets,
            move |target: PortTarget| {
                let host = Arc::clone(&host);
                async move { connect(&host, target.port).await }
            },
            options,
        )
        .await?;
        Ok(PortScanReport::from_results(results))
    }
}

impl Default for PortScan {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-probe policy: any connect error is a definitive "not open".
async fn connect(host: &str, port: u16) -> ProbeStatus {
    match tokio::net::TcpStream::connect((host, port)).await {
        Ok(_) => ProbeStatus::Success,
        Err(_) => ProbeStatus::Failure,
    }
}
