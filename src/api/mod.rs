//! REST API layer: route handlers, DTOs, and router composition.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router, including the not-found fallback.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .fallback(handlers::system::not_found_handler)
}
