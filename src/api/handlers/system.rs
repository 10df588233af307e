//! System endpoints: service description, health check, not-found fallback.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;
use crate::error::GatewayError;

/// Informational response for the service root.
#[derive(Debug, Serialize, ToSchema)]
struct ServiceInfo {
    message: String,
    endpoint: String,
}

/// `GET /` — Describes the service and points at the data endpoint.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Service description",
    description = "Informational only; the earthquake feed lives at /api/earthquakes.",
    responses(
        (status = 200, description = "Service description", body = ServiceInfo),
    )
)]
pub async fn root_handler() -> impl IntoResponse {
    Json(ServiceInfo {
        message: "PHIVOLCS earthquake feed (latest + previous month)".to_string(),
        endpoint: "/api/earthquakes".to_string(),
    })
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Fallback for unmatched paths: `{"error": "Not Found"}` with 404.
pub async fn not_found_handler() -> GatewayError {
    GatewayError::NotFound
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}
