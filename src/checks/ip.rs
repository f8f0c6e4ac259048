//! Forward IP resolution check.

use std::net::IpAddr;
use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use super::lookup::IpLookup;

/// One resolved address with its IP family.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResolvedIp {
    /// The resolved address.
    #[serde(rename = "ip")]
    pub address: IpAddr,
    /// 4 or 6.
    pub family: u8,
}

/// The get-ip check: a single forward resolution, no prober involved.
pub struct IpAddressCheck {
    lookup: Arc<dyn IpLookup>,
}

impl IpAddressCheck {
    /// Creates the check on top of a resolver seam.
    pub fn new(lookup: Arc<dyn IpLookup>) -> Self {
        Self { lookup }
    }

    /// Resolves `host` and reports every address with its family.
    ///
    /// # Errors
    ///
    /// Unlike the prober-backed checks, a failed lookup here surfaces
    /// as an error for the handler to map to a 5xx.
    pub async fn resolve(&self, host: &str) -> Result<Vec<ResolvedIp>> {
        let ips = self.lookup.lookup_ip(host).await?;
        Ok(ips
            .into_iter()
            .map(|address| ResolvedIp {
                family: if address.is_ipv4() { 4 } else { 6 },
                address,
            })
            .collect())
    }
}
