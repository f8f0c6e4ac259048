//! `GET /api/get-ip` handler.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::super::types::{require_host, ApiError, AppState, UrlQuery};

/// Resolves the requested host and reports each address with its
/// family.
pub async fn get_ip_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let host = match require_host(&query) {
        Ok(host) => host,
        Err(err) => return err.into_response(),
    };

    match state.checks.ip_address.resolve(&host).await {
        Ok(addresses) => Json(addresses).into_response(),
        Err(err) => ApiError::internal(err).into_response(),
    }
}
