//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Most failures
//! never reach an HTTP client: upstream and persistence errors are absorbed
//! at the fetch and cache boundaries and only logged. The variants that do
//! surface (currently just [`GatewayError::NotFound`]) map to a flat JSON
//! error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Flat JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// { "error": "Not Found" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// No route matched the request path.
    #[error("Not Found")]
    NotFound,

    /// Upstream page retrieval failed (DNS, connection, TLS, non-2xx).
    ///
    /// Absorbed at the [`crate::scrape::PageFetcher`] boundary and converted
    /// to an empty record set; never surfaced to HTTP clients.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Durable cache tier read/write failure.
    ///
    /// Treated as a cache miss (read) or skipped (write) by the serving
    /// path; never surfaced to HTTP clients.
    #[error("persistence error: {0}")]
    PersistenceError(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::PersistenceError(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
