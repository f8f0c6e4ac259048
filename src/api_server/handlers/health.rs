//! `GET /health` handler.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Liveness endpoint.
pub async fn health_handler() -> Response {
    Json(json!({ "status": "ok" })).into_response()
}
