//! Deterministic assembly of a complete result set.
//!
//! Completion order of concurrent probes is inherently racy; nothing
//! of it may leak into observable output. The helpers here rebuild the
//! presentation from the (unordered) completion map and the (ordered)
//! target list alone.

use std::collections::HashMap;
use std::time::Duration;

use super::types::{ProbeResult, ProbeStatus, ProbeTarget};

/// A status reported by a finished probe, with its wall time.
#[derive(Debug, Clone, Copy)]
pub struct Completion {
    /// Terminal status the probe reported.
    pub status: ProbeStatus,
    /// How long the probe ran.
    pub elapsed: Duration,
}

/// Produces exactly one result per input target, in target order.
///
/// Targets with no completion entry -- never scheduled, or cut off by
/// the run deadline -- are recorded as [`ProbeStatus::Undetermined`].
/// The caller never sees a partial list.
pub fn complete<T: ProbeTarget>(
    targets: &[T],
    completed: &HashMap<T::Id, Completion>,
) -> Vec<ProbeResult<T>> {
    targets
        .iter()
        .map(|target| match completed.get(&target.id()) {
            Some(completion) => ProbeResult {
                target: target.clone(),
                status: completion.status,
                elapsed: Some(completion.elapsed),
            },
            None => ProbeResult {
                target: target.clone(),
                status: ProbeStatus::Undetermined,
                elapsed: None,
            },
        })
        .collect()
}

/// Sorts results in place by a caller-supplied key.
pub fn sort_results<T, K, F>(results: &mut [ProbeResult<T>], key: F)
where
    T: ProbeTarget,
    K: Ord,
    F: Fn(&ProbeResult<T>) -> K,
{
    results.sort_by(|a, b| key(a).cmp(&key(b)));
}

/// Splits results into `(matching, rest)` by `predicate`, each bucket
/// independently sorted by `key`.
///
/// Both prober-backed checks present their output this way: the port
/// scanner buckets open versus not-open, the blocklist check is the
/// degenerate single-bucket case.
pub fn partition_sorted<T, K, P, F>(
    results: Vec<ProbeResult<T>>,
    predicate: P,
    key: F,
) -> (Vec<ProbeResult<T>>, Vec<ProbeResult<T>>)
where
    T: ProbeTarget,
    K: Ord,
    P: Fn(&ProbeResult<T>) -> bool,
    F: Fn(&ProbeResult<T>) -> K,
{
    let (mut matching, mut rest): (Vec<_>, Vec<_>) =
        results.into_iter().partition(|result| predicate(result));
    sort_results(&mut matching, &key);
    sort_results(&mut rest, &key);
    (matching, rest)
}
