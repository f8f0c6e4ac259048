//! System DNS resolver initialization.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_TIMEOUT_SECS;

/// Initializes the resolver used by single-shot checks.
///
/// Uses the default upstream configuration with short timeouts so a
/// slow or unresponsive DNS server fails the lookup instead of
/// stalling a check request.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing
/// across requests.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = 2;
    // Never append search domains to probe targets.
    opts.ndots = 0;

    Arc::new(TokioAsyncResolver::tokio(ResolverConfig::default(), opts))
}
