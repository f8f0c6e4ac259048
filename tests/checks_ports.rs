//! Port scan scenarios against loopback listeners.
//!
//! Real TCP, no fakes: listeners bound on ephemeral ports play the
//! open ports, a freed ephemeral port plays the closed one. This keeps
//! the scenarios deterministic without touching the network.

use std::time::Duration;

use tokio::net::TcpListener;

use domain_probe::checks::{PortScan, PortTarget, WELL_KNOWN_PORTS};
use domain_probe::probe::ProbeRunOptions;

async fn bind_open_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    (listener, port)
}

/// Grabs a free port number, then drops the listener so nothing
/// accepts on it.
async fn reserve_closed_port() -> u16 {
    let (listener, port) = bind_open_port().await;
    drop(listener);
    port
}

fn options_for(targets: &[PortTarget]) -> ProbeRunOptions {
    ProbeRunOptions::new(
        targets.len(),
        Duration::from_millis(1500),
        Duration::from_secs(9),
    )
}

#[tokio::test]
async fn mixed_open_and_closed_ports_are_bucketed_and_sorted() {
    let (_keep_a, port_a) = bind_open_port().await;
    let (_keep_b, port_b) = bind_open_port().await;
    let closed = reserve_closed_port().await;

    let targets: Vec<PortTarget> = [port_a, port_b, closed]
        .iter()
        .copied()
        .map(PortTarget::new)
        .collect();

    let report = PortScan::new()
        .scan_ports("127.0.0.1", &targets, options_for(&targets))
        .await
        .expect("valid run options");

    let mut expected_open = vec![port_a, port_b];
    expected_open.sort_unstable();
    assert_eq!(report.open_ports, expected_open);
    assert_eq!(report.failed_ports, vec![closed]);
}

#[tokio::test]
async fn all_closed_ports_fold_into_the_failed_bucket() {
    let first = reserve_closed_port().await;
    let second = reserve_closed_port().await;

    let targets = vec![PortTarget::new(first), PortTarget::new(second)];
    let report = PortScan::new()
        .scan_ports("127.0.0.1", &targets, options_for(&targets))
        .await
        .expect("valid run options");

    assert!(report.open_ports.is_empty());
    assert_eq!(report.failed_ports.len(), 2);
    let mut expected = vec![first, second];
    expected.sort_unstable();
    assert_eq!(report.failed_ports, expected);
}

#[tokio::test]
async fn every_target_lands_in_exactly_one_bucket() {
    let (_keep, open) = bind_open_port().await;
    let closed = reserve_closed_port().await;

    let targets = vec![PortTarget::new(open), PortTarget::new(closed)];
    let report = PortScan::new()
        .scan_ports("127.0.0.1", &targets, options_for(&targets))
        .await
        .expect("valid run options");

    assert_eq!(report.open_ports.len() + report.failed_ports.len(), targets.len());
    assert!(report
        .open_ports
        .iter()
        .all(|port| !report.failed_ports.contains(port)));
}

#[test]
fn default_target_table_matches_the_documented_scan() {
    assert_eq!(WELL_KNOWN_PORTS.len(), 32);
    assert!(WELL_KNOWN_PORTS.contains(&22));
    assert!(WELL_KNOWN_PORTS.contains(&80));
    assert!(WELL_KNOWN_PORTS.contains(&443));
}
