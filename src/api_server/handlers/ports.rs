//! `GET /api/ports` handler.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::super::types::{require_host, ApiError, AppState, UrlQuery};

/// Scans the well-known ports on the requested host.
///
/// Ports the run deadline cut off are folded into `failedPorts`, so
/// the body is always fully formed.
pub async fn ports_handler(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Response {
    let host = match require_host(&query) {
        Ok(host) => host,
        Err(err) => return err.into_response(),
    };

    match state.checks.ports.scan(&host).await {
        Ok(report) => Json(report).into_response(),
        Err(err) => ApiError::internal(err).into_response(),
    }
}
