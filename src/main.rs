//! quake-gateway server entry point.
//!
//! Starts the Axum HTTP server and the background refresh loop.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use quake_gateway::api;
use quake_gateway::app_state::AppState;
use quake_gateway::config::GatewayConfig;
use quake_gateway::persistence::{PostgresSnapshotStore, SnapshotStore};
use quake_gateway::scrape::{FetchPage, PageFetcher};
use quake_gateway::service::QuakeService;
use quake_gateway::service::scheduler::spawn_refresh_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting quake-gateway");

    // Outbound HTTP capability (relaxed trust for the upstream's
    // incomplete certificate chain)
    let fetcher: Arc<dyn FetchPage> = Arc::new(PageFetcher::from_config(&config)?);

    // Optional durable cache tier; unavailable storage degrades to the
    // in-process tier instead of refusing to start
    let store: Option<Arc<dyn SnapshotStore>> = if config.persistence_enabled {
        match PostgresSnapshotStore::connect(&config.database_url, config.database_max_connections)
            .await
        {
            Ok(store) => Some(Arc::new(store)),
            Err(error) => {
                tracing::warn!(%error, "durable cache tier unavailable; running in-process only");
                None
            }
        }
    } else {
        None
    };

    // Build service and start the fixed-cadence refresh loop
    let service = Arc::new(QuakeService::new(fetcher, store));
    let _refresh_loop = spawn_refresh_loop(
        Arc::clone(&service),
        Duration::from_secs(config.refresh_interval_secs),
    );

    let app_state = AppState { service };

    // Build router. The request timeout only bounds the handler side; a
    // cold-start synchronous refresh fits comfortably inside it.
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
