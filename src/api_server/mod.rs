//! HTTP API server exposing the checks as JSON endpoints.
//!
//! Routes:
//! - `GET /health` - liveness
//! - `GET /api/block-lists?url=` - blocklist-resolver verdicts
//! - `GET /api/ports?url=` - open/failed port buckets
//! - `GET /api/get-ip?url=` - forward resolution
//!
//! The server runs until ctrl-c and then drains in-flight requests.

mod handlers;
mod types;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use crate::checks::Checks;
use crate::config::ServerConfig;

// Re-export public API
pub use handlers::{
    blocklist_handler, get_ip_handler, health_handler, ports_handler, BlocklistResponse,
};
pub use types::{ApiError, AppState, ErrorBody, UrlQuery};

/// Builds the router with all check routes and middleware attached.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/block-lists", get(blocklist_handler))
        .route("/api/ports", get(ports_handler))
        .route("/api/get-ip", get(get_ip_handler))
        .layer(middleware::from_fn_with_state(state.clone(), cors))
        .with_state(state)
}

/// Creates and starts the API server; blocks until shutdown.
pub async fn start_api_server(
    config: &ServerConfig,
    checks: Arc<Checks>,
) -> Result<(), anyhow::Error> {
    let state = AppState {
        checks,
        allowed_origins: Arc::new(config.allowed_origins.clone()),
    };
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}: {}", addr, e))?;

    log::info!("API server listening on http://{}/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown signal received, draining connections"),
        Err(err) => log::warn!("Failed to listen for shutdown signal: {err}"),
    }
}

/// Sets the CORS headers for the configured origins; `OPTIONS`
/// preflight short-circuits with the headers already set.
async fn cors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        Response::new(axum::body::Body::empty())
    } else {
        next.run(request).await
    };

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&state.allowed_origins.join(",")) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Origin, Content-Type, Accept"),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static("86400"),
    );
    response
}
