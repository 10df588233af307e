//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::QuakeService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Snapshot service backing the earthquake feed.
    pub service: Arc<QuakeService>,
}
