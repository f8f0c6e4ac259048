//! Blocklist check scenarios with canned resolver answers.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use domain_probe::checks::{BlockList, BlocklistEntry, DnsLookup, DNS_SERVERS};

/// Fake resolver seam: answers are a pure function of the server
/// being dialed.
struct CannedLookup {
    answers: fn(IpAddr) -> Result<Vec<Ipv4Addr>>,
}

#[async_trait]
impl DnsLookup for CannedLookup {
    async fn lookup_ipv4(&self, _host: &str, server: IpAddr) -> Result<Vec<Ipv4Addr>> {
        (self.answers)(server)
    }
}

async fn run_with(answers: fn(IpAddr) -> Result<Vec<Ipv4Addr>>) -> Vec<BlocklistEntry> {
    BlockList::new(Arc::new(CannedLookup { answers }))
        .blocked_servers("example.com")
        .await
        .expect("valid run options")
}

#[tokio::test]
async fn all_clear_reports_every_server_unblocked_and_sorted() {
    let list = run_with(|_server| Ok(vec![Ipv4Addr::new(93, 184, 216, 34)])).await;

    assert_eq!(list.len(), 17);
    assert_eq!(list.len(), DNS_SERVERS.len());
    assert!(list.iter().all(|entry| !entry.is_blocked));

    let names: Vec<&str> = list.iter().map(|entry| entry.server.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "entries must be sorted by server name");
    assert_eq!(names.first(), Some(&"AdGuard"));
    let adguard = names.iter().position(|name| *name == "AdGuard").unwrap();
    let cleanbrowsing = names
        .iter()
        .position(|name| *name == "CleanBrowsing Adult")
        .unwrap();
    assert!(adguard < cleanbrowsing);
}

#[tokio::test]
async fn sinkhole_answer_marks_only_that_server_blocked() {
    let list = run_with(|server| {
        if server == IpAddr::V4(Ipv4Addr::new(176, 103, 130, 130)) {
            // AdGuard answers with a known sinkhole address.
            Ok(vec![Ipv4Addr::new(146, 112, 61, 106)])
        } else {
            Ok(vec![Ipv4Addr::new(93, 184, 216, 34)])
        }
    })
    .await;

    let adguard = list.iter().find(|entry| entry.server == "AdGuard").unwrap();
    assert!(adguard.is_blocked);
    assert_eq!(adguard.server_ip, "176.103.130.130");
    assert_eq!(list.iter().filter(|entry| entry.is_blocked).count(), 1);
}

#[tokio::test]
async fn resolution_errors_count_as_not_blocked() {
    let list = run_with(|_server| Err(anyhow!("NXDOMAIN"))).await;

    assert_eq!(list.len(), DNS_SERVERS.len());
    assert!(list.iter().all(|entry| !entry.is_blocked));
}

#[tokio::test]
async fn every_server_appears_exactly_once() {
    let list = run_with(|_server| Ok(Vec::new())).await;

    let mut names: Vec<&str> = list.iter().map(|entry| entry.server.as_str()).collect();
    names.dedup();
    assert_eq!(names.len(), DNS_SERVERS.len());
}
