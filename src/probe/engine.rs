//! Bounded fan-out probe execution.
//!
//! One tokio task per target, admission gated by a semaphore, each
//! probe under its own timeout inside a run-wide cancellation scope.
//! Workers report to a single collecting loop over an mpsc channel, so
//! aggregation stays single-threaded and lock-free.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio::time::{timeout, timeout_at, Instant};
use tokio_util::sync::CancellationToken;

use crate::error_handling::ProbeSetupError;

use super::aggregate::{complete, Completion};
use super::types::{ProbeResult, ProbeRunOptions, ProbeStatus, ProbeTarget};

/// Probes every target concurrently and returns one result per target.
///
/// At most `options.concurrency_limit` probes are in flight at any
/// instant. Each probe is bounded by `options.per_probe_timeout`; the
/// whole run by `options.overall_deadline`. When the deadline fires,
/// in-flight probes are cancelled, queued units are abandoned before
/// their network call starts, and every unreported target comes back
/// as [`ProbeStatus::Undetermined`] -- the returned list is always
/// complete and in deterministic target order.
///
/// The probe closure owns the per-call-site error policy: it maps
/// whatever its network call yields (answers, refusals, lookup errors)
/// onto a terminal [`ProbeStatus`]. The engine never interprets probe
/// failures; its only contribution is `Undetermined` for probes that
/// ran out of time.
///
/// # Errors
///
/// Returns [`ProbeSetupError`] for malformed run parameters (zero
/// concurrency limit or zero timeouts). "Some probes failed" is normal
/// output, never an error.
pub async fn run_probes<T, P, Fut>(
    targets: &[T],
    probe: P,
    options: ProbeRunOptions,
) -> Result<Vec<ProbeResult<T>>, ProbeSetupError>
where
    T: ProbeTarget,
    P: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ProbeStatus> + Send + 'static,
{
    options.validate()?;
    if targets.is_empty() {
        return Ok(Vec::new());
    }

    let deadline = Instant::now() + options.overall_deadline;
    let cancel = CancellationToken::new();
    let semaphore = Arc::new(Semaphore::new(options.concurrency_limit));
    let probe = Arc::new(probe);
    let (report_tx, mut report_rx) = mpsc::channel::<(T::Id, Completion)>(targets.len());

    for target in targets.iter().cloned() {
        let cancel = cancel.clone();
        let semaphore = Arc::clone(&semaphore);
        let probe = Arc::clone(&probe);
        let report_tx = report_tx.clone();
        let per_probe_timeout = options.per_probe_timeout;

        tokio::spawn(async move {
            // A unit still queued on the semaphore when the run ends is
            // abandoned without ever starting its network call.
            let _permit = tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                permit = Arc::clone(&semaphore).acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(_) => return,
                },
            };

            let started = Instant::now();
            let status = tokio::select! {
                biased;
                _ = cancel.cancelled() => return,
                outcome = timeout(per_probe_timeout, (*probe)(target.clone())) => {
                    outcome.unwrap_or(ProbeStatus::Undetermined)
                }
            };

            // The collector closes the channel at the deadline; a late
            // report has nowhere to land and is dropped here.
            let _ = report_tx
                .send((
                    target.id(),
                    Completion {
                        status,
                        elapsed: started.elapsed(),
                    },
                ))
                .await;
        });
    }
    drop(report_tx);

    let mut completed: HashMap<T::Id, Completion> = HashMap::with_capacity(targets.len());
    loop {
        match timeout_at(deadline, report_rx.recv()).await {
            Ok(Some((id, completion))) => {
                // First terminal status per target wins; a duplicate
                // report for the same id is ignored.
                completed.entry(id).or_insert(completion);
            }
            // Every worker reported or gave up.
            Ok(None) => break,
            Err(_) => {
                log::debug!(
                    "probe run hit its overall deadline with {} of {} targets reported",
                    completed.len(),
                    targets.len()
                );
                break;
            }
        }
    }
    cancel.cancel();
    report_rx.close();

    Ok(complete(targets, &completed))
}
