//! Resolver plumbing behind the check seams.
//!
//! Checks depend on these traits instead of concrete resolvers so
//! tests can substitute canned answers and forced errors.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_PORT;

/// IPv4 resolution against one specific DNS server.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// Resolves `host`'s A records by querying `server` directly,
    /// bypassing the system resolver.
    async fn lookup_ipv4(&self, host: &str, server: IpAddr) -> Result<Vec<Ipv4Addr>>;
}

/// Forward resolution through the system resolver.
#[async_trait]
pub trait IpLookup: Send + Sync {
    /// Resolves `host` to all of its addresses, both families.
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>>;
}

/// [`DnsLookup`] backed by a one-shot hickory resolver per query.
///
/// Building a resolver per call keeps the query pinned to exactly one
/// upstream server, with no fallback to other nameservers and no
/// cross-request caching.
pub struct HickoryDnsLookup {
    timeout: Duration,
}

impl HickoryDnsLookup {
    /// Creates a lookup whose single UDP query is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl DnsLookup for HickoryDnsLookup {
    async fn lookup_ipv4(&self, host: &str, server: IpAddr) -> Result<Vec<Ipv4Addr>> {
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(
            SocketAddr::new(server, DNS_PORT),
            Protocol::Udp,
        ));

        let mut opts = ResolverOpts::default();
        opts.timeout = self.timeout;
        // Single attempt: the probe is one-shot by contract.
        opts.attempts = 1;
        opts.ndots = 0;

        let resolver = TokioAsyncResolver::tokio(config, opts);
        let response = resolver
            .ipv4_lookup(host)
            .await
            .with_context(|| format!("A-record lookup for {host} via {server} failed"))?;
        Ok(response.iter().map(|record| record.0).collect())
    }
}

/// [`IpLookup`] backed by the shared system resolver.
pub struct SystemIpLookup {
    resolver: Arc<TokioAsyncResolver>,
}

impl SystemIpLookup {
    /// Wraps the process-wide resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl IpLookup for SystemIpLookup {
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>> {
        let response = self
            .resolver
            .lookup_ip(host)
            .await
            .with_context(|| format!("IP lookup for {host} failed"))?;
        Ok(response.iter().collect())
    }
}
