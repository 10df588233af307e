//! Earthquake feed endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::EarthquakeFeedResponse;
use crate::app_state::AppState;

/// `GET /api/earthquakes` — Combined latest + previous-month feed.
///
/// Serves from the snapshot cache; a populated cache answers immediately
/// and triggers a background revalidation. Upstream scraping failures are
/// never surfaced here — the worst case is a 200 with an empty array.
#[utoipa::path(
    get,
    path = "/api/earthquakes",
    tag = "Earthquakes",
    summary = "Earthquake feed",
    description = "Combined latest and previous-month PHIVOLCS events, newest first.",
    responses(
        (status = 200, description = "Current feed snapshot", body = EarthquakeFeedResponse),
    )
)]
pub async fn earthquakes_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.service.snapshot().await;
    Json(EarthquakeFeedResponse::from_snapshot(&snapshot))
}

/// Earthquake routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/earthquakes", get(earthquakes_handler))
}
