//! `GET /api/block-lists` handler.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::checks::BlocklistEntry;

use super::super::types::{require_host, ApiError, AppState, UrlQuery};

/// Response wrapper for the blocklist check.
#[derive(Debug, Serialize)]
pub struct BlocklistResponse {
    /// One verdict per resolver, sorted by server name.
    pub blocklists: Vec<BlocklistEntry>,
}

/// Probes the domain against every blocklist resolver.
///
/// The body is always a complete list: resolvers the run deadline cut
/// off are reported as not blocked rather than omitted, so this
/// endpoint answers 200 even in the worst case.
pub async fn blocklist_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let host = match require_host(&query) {
        Ok(host) => host,
        Err(err) => return err.into_response(),
    };

    match state.checks.block_list.blocked_servers(&host).await {
        Ok(blocklists) => Json(BlocklistResponse { blocklists }).into_response(),
        Err(err) => ApiError::internal(err).into_response(),
    }
}
