//! Fixed-cadence background refresh loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::QuakeService;

/// Spawns the background task that refreshes the snapshot cache for the
/// process lifetime.
///
/// The first tick fires immediately, so the cache is warm shortly after
/// startup. Ticks do not exclude each other: a slow refresh may overlap
/// the next one, and the last writer wins — the same contract the serving
/// path's stale-while-revalidate refreshes follow.
pub fn spawn_refresh_loop(service: Arc<QuakeService>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let snapshot = service.refresh().await;
            tracing::debug!(
                count = snapshot.events.len(),
                "scheduled refresh completed"
            );
        }
    })
}
