//! Domain-inspection checks.
//!
//! Each check is an independent inspection of one aspect of a domain.
//! The blocklist and port-scan checks fan out over the bounded prober
//! (see [`crate::probe`]); get-ip is a single resolver call. All of
//! them take their network seams as injected traits so tests can run
//! without touching the network.

mod blocklist;
mod ip;
mod lookup;
mod ports;

// Re-export public API
pub use blocklist::{BlockList, BlocklistEntry, DnsServer, DNS_SERVERS, KNOWN_BLOCK_IPS};
pub use ip::{IpAddressCheck, ResolvedIp};
pub use lookup::{DnsLookup, HickoryDnsLookup, IpLookup, SystemIpLookup};
pub use ports::{PortScan, PortScanReport, PortTarget, WELL_KNOWN_PORTS};

use std::sync::Arc;

use hickory_resolver::TokioAsyncResolver;

use crate::config::BLOCKLIST_PROBE_TIMEOUT;

/// Request-independent wiring of every check, shared by the API
/// server. Built once per process; individual requests never mutate
/// it.
pub struct Checks {
    /// Blocklist-resolver check.
    pub block_list: BlockList,
    /// Open-port scanner.
    pub ports: PortScan,
    /// Forward IP resolution.
    pub ip_address: IpAddressCheck,
}

impl Checks {
    /// Wires every check to its production lookup.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self {
            block_list: BlockList::new(Arc::new(HickoryDnsLookup::new(BLOCKLIST_PROBE_TIMEOUT))),
            ports: PortScan::new(),
            ip_address: IpAddressCheck::new(Arc::new(SystemIpLookup::new(resolver))),
        }
    }
}
