//! Handler contract tests: status codes, envelopes, response shapes.
//!
//! Handlers are invoked directly with fake-backed state, so nothing
//! here opens a socket or performs a real lookup.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::body::to_bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use domain_probe::api_server::{
    blocklist_handler, get_ip_handler, health_handler, ports_handler, AppState, UrlQuery,
};
use domain_probe::checks::{
    BlockList, Checks, DnsLookup, IpAddressCheck, IpLookup, PortScan,
};

struct FakeDns;

#[async_trait]
impl DnsLookup for FakeDns {
    async fn lookup_ipv4(&self, _host: &str, _server: IpAddr) -> Result<Vec<Ipv4Addr>> {
        Ok(vec![Ipv4Addr::new(93, 184, 216, 34)])
    }
}

struct FakeIp {
    fail: bool,
}

#[async_trait]
impl IpLookup for FakeIp {
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>> {
        if self.fail {
            return Err(anyhow!("IP lookup for {host} failed"));
        }
        Ok(vec![
            "93.184.216.34".parse().unwrap(),
            "2606:2800:220:1:248:1893:25c8:1946".parse().unwrap(),
        ])
    }
}

fn fake_state(fail_ip: bool) -> AppState {
    AppState {
        checks: Arc::new(Checks {
            block_list: BlockList::new(Arc::new(FakeDns)),
            ports: PortScan::new(),
            ip_address: IpAddressCheck::new(Arc::new(FakeIp { fail: fail_ip })),
        }),
        allowed_origins: Arc::new(vec!["*".to_string()]),
    }
}

fn query(url: &str) -> Query<UrlQuery> {
    Query(UrlQuery {
        url: Some(url.to_string()),
    })
}

async fn body_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = serde_json::from_slice(&bytes).expect("JSON body");
    (status, value)
}

#[tokio::test]
async fn health_answers_ok() {
    let (status, body) = body_json(health_handler().await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn missing_url_parameter_is_a_400_with_envelope() {
    for response in [
        blocklist_handler(State(fake_state(false)), Query(UrlQuery { url: None })).await,
        ports_handler(State(fake_state(false)), Query(UrlQuery { url: None })).await,
        get_ip_handler(State(fake_state(false)), Query(UrlQuery { url: None })).await,
    ] {
        let (status, body) = body_json(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing URL parameter");
    }
}

#[tokio::test]
async fn invalid_url_is_a_400() {
    let response = get_ip_handler(State(fake_state(false)), query("http://exa mple.com")).await;
    let (status, body) = body_json(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid URL");
}

#[tokio::test]
async fn blocklist_answers_complete_sorted_list() {
    let response = blocklist_handler(State(fake_state(false)), query("example.com")).await;
    let (status, body) = body_json(response).await;

    assert_eq!(status, StatusCode::OK);
    let entries = body["blocklists"].as_array().expect("blocklists array");
    assert_eq!(entries.len(), 17);
    assert_eq!(entries[0]["server"], "AdGuard");
    assert!(entries
        .iter()
        .all(|entry| entry["isBlocked"] == Value::Bool(false)));
    // Scheme and path are stripped before probing.
    let with_scheme =
        blocklist_handler(State(fake_state(false)), query("https://example.com/page")).await;
    let (status, _body) = body_json(with_scheme).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn get_ip_reports_each_address_with_family() {
    let response = get_ip_handler(State(fake_state(false)), query("example.com")).await;
    let (status, body) = body_json(response).await;

    assert_eq!(status, StatusCode::OK);
    let addresses = body.as_array().expect("address array");
    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0]["ip"], "93.184.216.34");
    assert_eq!(addresses[0]["family"], 4);
    assert_eq!(addresses[1]["family"], 6);
}

#[tokio::test]
async fn get_ip_lookup_failure_is_a_500() {
    let response = get_ip_handler(State(fake_state(true)), query("example.com")).await;
    let (status, body) = body_json(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("IP lookup"));
}
