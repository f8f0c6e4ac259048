//! Probe engine data types.

use std::hash::Hash;
use std::time::Duration;

use crate::error_handling::ProbeSetupError;

/// Terminal classification of one probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeStatus {
    /// The probe answered definitively in the affirmative for its call
    /// site (domain sinkholed by the resolver, port open).
    Success,
    /// The probe answered definitively in the negative (domain not
    /// blocked, connection refused).
    Failure,
    /// The probe never produced a definitive answer before the run
    /// ended: per-probe timeout, abandoned on the semaphore, or cut
    /// off by the overall deadline.
    Undetermined,
}

/// One unit to probe: a DNS server, a TCP port.
///
/// Implementations are immutable identities constructed from static
/// configuration tables and shared read-only across all probes of a
/// run. Cloning must be cheap -- the engine clones one copy per
/// spawned unit of work.
pub trait ProbeTarget: Clone + Send + Sync + 'static {
    /// Stable identity used for deduplication and sorting.
    type Id: Eq + Hash + Clone + Send + Sync + 'static;

    /// Returns the target's stable identity.
    fn id(&self) -> Self::Id;

    /// Human-readable name, where one exists.
    fn label(&self) -> Option<&str> {
        None
    }
}

/// Output of one probe, paired back to its target.
#[derive(Debug, Clone)]
pub struct ProbeResult<T> {
    /// The probed target.
    pub target: T,
    /// Terminal classification for this run.
    pub status: ProbeStatus,
    /// Wall time the probe took; `None` when it never reported.
    pub elapsed: Option<Duration>,
}

/// Execution parameters for a single probe run.
///
/// A run is request-scoped: it owns its result collection and shares
/// nothing with other runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeRunOptions {
    /// Maximum probes in flight at any instant. A limit of 1
    /// degenerates to sequential execution.
    pub concurrency_limit: usize,
    /// Bound on a single probe's network call.
    pub per_probe_timeout: Duration,
    /// Hard wall-clock bound on the entire run.
    pub overall_deadline: Duration,
}

impl ProbeRunOptions {
    /// Bundles the three run parameters.
    pub fn new(
        concurrency_limit: usize,
        per_probe_timeout: Duration,
        overall_deadline: Duration,
    ) -> Self {
        Self {
            concurrency_limit,
            per_probe_timeout,
            overall_deadline,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ProbeSetupError> {
        if self.concurrency_limit == 0 {
            return Err(ProbeSetupError::InvalidConcurrencyLimit);
        }
        if self.per_probe_timeout.is_zero() {
            return Err(ProbeSetupError::ZeroProbeTimeout);
        }
        if self.overall_deadline.is_zero() {
            return Err(ProbeSetupError::ZeroDeadline);
        }
        Ok(())
    }
}
