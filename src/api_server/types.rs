//! API server state and request/response plumbing.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::checks::Checks;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide check registry.
    pub checks: Arc<Checks>,
    /// Origins the CORS middleware answers for.
    pub allowed_origins: Arc<Vec<String>>,
}

/// Query parameters common to all check endpoints.
#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    /// The URL (or bare hostname) to inspect.
    pub url: Option<String>,
}

/// JSON error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable description.
    pub error: String,
}

/// An error response with its HTTP status.
#[derive(Debug)]
pub struct ApiError {
    /// Status code to answer with.
    pub status: StatusCode,
    /// Message placed in the JSON envelope.
    pub message: String,
}

impl ApiError {
    /// A 400 with the given message.
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }

    /// A 500 carrying the error's display form.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Extracts the hostname from the `url` query parameter.
///
/// Scheme-less input is accepted by prepending `http://` before
/// parsing, so `example.com` and `https://example.com/page` both
/// yield `example.com`.
pub fn require_host(query: &UrlQuery) -> Result<String, ApiError> {
    let raw = query
        .url
        .as_deref()
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .ok_or_else(|| ApiError::bad_request("missing URL parameter"))?;

    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    Url::parse(&candidate)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .ok_or_else(|| ApiError::bad_request("invalid URL"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(url: &str) -> UrlQuery {
        UrlQuery {
            url: Some(url.to_string()),
        }
    }

    #[test]
    fn missing_parameter_is_rejected() {
        let err = require_host(&UrlQuery { url: None }).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "missing URL parameter");

        let err = require_host(&query("  ")).unwrap_err();
        assert_eq!(err.message, "missing URL parameter");
    }

    #[test]
    fn full_url_yields_its_host() {
        assert_eq!(
            require_host(&query("https://example.com/page?x=1")).unwrap(),
            "example.com"
        );
    }

    #[test]
    fn bare_hostname_is_accepted() {
        assert_eq!(require_host(&query("example.com")).unwrap(), "example.com");
        assert_eq!(
            require_host(&query("sub.example.com:8443")).unwrap(),
            "sub.example.com"
        );
    }

    #[test]
    fn unparsable_input_is_invalid() {
        let err = require_host(&query("http://exa mple.com")).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "invalid URL");
    }
}
