//! Blocklist-resolver check.
//!
//! Probes a domain against a fixed set of public filtering resolvers.
//! A resolver that answers with one of the known sinkhole addresses is
//! blocking the domain; anything else -- a normal answer, NXDOMAIN, a
//! dead resolver -- counts as not blocked.

use std::net::IpAddr;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::config::{BLOCKLIST_CONCURRENCY, BLOCKLIST_DEADLINE, BLOCKLIST_PROBE_TIMEOUT};
use crate::error_handling::ProbeSetupError;
use crate::probe::{
    run_probes, sort_results, ProbeResult, ProbeRunOptions, ProbeStatus, ProbeTarget,
};

use super::lookup::DnsLookup;

/// One public resolver to probe.
#[derive(Debug, Clone)]
pub struct DnsServer {
    /// Provider name, the stable identity for sorting and output.
    pub name: &'static str,
    /// The resolver's address, dialed directly on port 53.
    pub ip: IpAddr,
}

impl DnsServer {
    fn new(name: &'static str, ip: &str) -> Self {
        Self {
            name,
            ip: ip.parse().expect("static DNS server address"),
        }
    }
}

impl ProbeTarget for DnsServer {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        self.name
    }

    fn label(&self) -> Option<&str> {
        Some(self.name)
    }
}

/// Public DNS servers with family/security filtering, probed on every
/// blocklist request.
pub static DNS_SERVERS: Lazy<Vec<DnsServer>> = Lazy::new(|| {
    vec![
        DnsServer::new("AdGuard", "176.103.130.130"),
        DnsServer::new("AdGuard Family", "176.103.130.132"),
        DnsServer::new("CleanBrowsing Adult", "185.228.168.10"),
        DnsServer::new("CleanBrowsing Family", "185.228.168.168"),
        DnsServer::new("CleanBrowsing Security", "185.228.168.9"),
        DnsServer::new("CloudFlare", "1.1.1.1"),
        DnsServer::new("CloudFlare Family", "1.1.1.3"),
        DnsServer::new("Comodo Secure", "8.26.56.26"),
        DnsServer::new("Google DNS", "8.8.8.8"),
        DnsServer::new("Neustar Family", "156.154.70.3"),
        DnsServer::new("Neustar Protection", "156.154.70.2"),
        DnsServer::new("Norton Family", "199.85.126.20"),
        DnsServer::new("OpenDNS", "208.67.222.222"),
        DnsServer::new("OpenDNS Family", "208.67.222.123"),
        DnsServer::new("Quad9", "9.9.9.9"),
        DnsServer::new("Yandex Family", "77.88.8.7"),
        DnsServer::new("Yandex Safe", "77.88.8.88"),
    ]
});

/// Addresses the resolvers above answer with when they sinkhole a
/// domain. The IPv6 sinkholes are listed even though the probe only
/// asks for A records today.
pub static KNOWN_BLOCK_IPS: Lazy<Vec<IpAddr>> = Lazy::new(|| {
    [
        "146.112.61.106",
        "185.228.168.10",
        "8.26.56.26",
        "9.9.9.9",
        "208.69.38.170",
        "208.69.39.170",
        "208.67.222.222",
        "208.67.222.123",
        "199.85.126.10",
        "199.85.126.20",
        "156.154.70.22",
        "77.88.8.7",
        "77.88.8.8",
        "::1",
        "2a02:6b8::feed:0ff",
        "2a02:6b8::feed:bad",
        "2a02:6b8::feed:a11",
        "2620:119:35::35",
        "2620:119:53::53",
        "2606:4700:4700::1111",
        "2606:4700:4700::1001",
        "2001:4860:4860::8888",
        "2a0d:2a00:1::",
        "2a0d:2a00:2::",
    ]
    .iter()
    .map(|ip| ip.parse().expect("static sinkhole address"))
    .collect()
});

/// One resolver's verdict, serialized for the check response.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlocklistEntry {
    /// Provider name.
    pub server: String,
    /// Resolver address that was probed.
    pub server_ip: String,
    /// Whether this resolver blocks the domain.
    pub is_blocked: bool,
}

impl BlocklistEntry {
    /// Presentation policy for this check: only a definitive sinkhole
    /// answer counts as blocked; resolution failures and probes the
    /// deadline cut off are both reported as not blocked.
    fn from_result(result: &ProbeResult<DnsServer>) -> Self {
        let is_blocked = match result.status {
            ProbeStatus::Success => true,
            ProbeStatus::Failure | ProbeStatus::Undetermined => false,
        };
        Self {
            server: result.target.name.to_string(),
            server_ip: result.target.ip.to_string(),
            is_blocked,
        }
    }
}

/// The blocklist check.
pub struct BlockList {
    lookup: Arc<dyn DnsLookup>,
}

impl BlockList {
    /// Creates the check on top of a resolver seam.
    pub fn new(lookup: Arc<dyn DnsLookup>) -> Self {
        Self { lookup }
    }

    /// Probes `domain` against every server in the static resolver
    /// table and reports each verdict, sorted by server name.
    ///
    /// Always returns one entry per resolver: servers the run deadline
    /// cut off appear as not blocked rather than being omitted.
    pub async fn blocked_servers(
        &self,
        domain: &str,
    ) -> Result<Vec<BlocklistEntry>, ProbeSetupError> {
        let lookup = Arc::clone(&self.lookup);
        let domain: Arc<str> = Arc::from(domain);

        let mut results = run_probes(
            DNS_SERVERS.as_slice(),
            move |server: DnsServer| {
                let lookup = Arc::clone(&lookup);
                let domain = Arc::clone(&domain);
                async move { domain_blocked(lookup.as_ref(), &domain, &server).await }
            },
            ProbeRunOptions::new(
                BLOCKLIST_CONCURRENCY,
                BLOCKLIST_PROBE_TIMEOUT,
                BLOCKLIST_DEADLINE,
            ),
        )
        .await?;

        sort_results(&mut results, |result| result.target.name);
        Ok(results.iter().map(BlocklistEntry::from_result).collect())
    }
}

/// Per-probe policy: a resolution error means the resolver gave no
/// answer to match against the sinkhole table, count it as not
/// blocked.
async fn domain_blocked(lookup: &dyn DnsLookup, domain: &str, server: &DnsServer) -> ProbeStatus {
    match lookup.lookup_ipv4(domain, server.ip).await {
        Ok(ips) => {
            if ips
                .iter()
                .any(|ip| KNOWN_BLOCK_IPS.contains(&IpAddr::V4(*ip)))
            {
                ProbeStatus::Success
            } else {
                ProbeStatus::Failure
            }
        }
        Err(err) => {
            log::debug!("blocklist probe via {} failed: {err:#}", server.name);
            ProbeStatus::Failure
        }
    }
}
