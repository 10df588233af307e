//! Aggregation and two-tier snapshot caching.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use tokio::sync::RwLock;

use crate::domain::{Snapshot, previous_month, sort_newest_first};
use crate::persistence::SnapshotStore;
use crate::scrape::{FetchPage, PageSource};

/// Orchestrates fetching, merging, and caching of earthquake listings.
///
/// Single logical writer (the refresh path), many concurrent readers.
/// The fast tier is an `Arc` swap behind a `RwLock`, so a reader observes
/// either the previous snapshot or the fully new one, never a mix. The
/// optional durable tier carries the last snapshot across restarts.
///
/// Refresh never fails: each of the two page fetches absorbs its own
/// errors into an empty record set, and durable-tier write failures are
/// logged and skipped. Overlapping refreshes are permitted; the last
/// writer wins.
#[derive(Debug)]
pub struct QuakeService {
    fetcher: Arc<dyn FetchPage>,
    cache: RwLock<Option<Arc<Snapshot>>>,
    store: Option<Arc<dyn SnapshotStore>>,
}

impl QuakeService {
    /// Creates a service with an empty in-process cache.
    #[must_use]
    pub fn new(fetcher: Arc<dyn FetchPage>, store: Option<Arc<dyn SnapshotStore>>) -> Self {
        Self {
            fetcher,
            cache: RwLock::new(None),
            store,
        }
    }

    /// Fetches both sources, merges, sorts, and installs a new snapshot.
    ///
    /// The two fetches run concurrently; a failed source contributes zero
    /// records and the refresh still completes. The resulting snapshot
    /// replaces the fast tier atomically and is then persisted to the
    /// durable tier on a best-effort basis.
    pub async fn refresh(&self) -> Arc<Snapshot> {
        let now = Utc::now();
        let (year, month0) = previous_month(now.year(), now.month0());
        let archive_source = PageSource::Archive { year, month0 };

        let (latest, archive) = tokio::join!(
            self.fetcher.fetch_page(&PageSource::Latest),
            self.fetcher.fetch_page(&archive_source),
        );

        let mut events = latest;
        events.extend(archive);
        sort_newest_first(&mut events);

        let snapshot = Arc::new(Snapshot {
            events,
            last_updated: Utc::now(),
        });

        *self.cache.write().await = Some(Arc::clone(&snapshot));
        tracing::info!(
            count = snapshot.events.len(),
            "combined latest + previous month events"
        );

        self.persist(&snapshot).await;
        snapshot
    }

    /// Serves the current snapshot, refreshing as needed.
    ///
    /// Tier order: fast in-process cache (serve and revalidate in the
    /// background), then durable tier (promote to fast tier, serve,
    /// revalidate), then a synchronous refresh on cold start. Never fails;
    /// the cold-start worst case is an empty snapshot.
    pub async fn snapshot(self: &Arc<Self>) -> Arc<Snapshot> {
        if let Some(cached) = self.cache.read().await.as_ref().map(Arc::clone) {
            self.spawn_revalidate();
            return cached;
        }

        if let Some(persisted) = self.load_durable().await {
            let snapshot = Arc::new(persisted);
            *self.cache.write().await = Some(Arc::clone(&snapshot));
            tracing::info!(
                count = snapshot.events.len(),
                "promoted durable cache entry to fast tier"
            );
            self.spawn_revalidate();
            return snapshot;
        }

        self.refresh().await
    }

    /// Detached stale-while-revalidate refresh; the triggering request
    /// never waits on it.
    fn spawn_revalidate(self: &Arc<Self>) {
        let service = Arc::clone(self);
        tokio::spawn(async move {
            let _ = service.refresh().await;
        });
    }

    /// Reads the durable tier, treating every failure as a miss.
    async fn load_durable(&self) -> Option<Snapshot> {
        let store = self.store.as_ref()?;
        match store.load().await {
            Ok(Some(body)) => match serde_json::from_str(&body) {
                Ok(snapshot) => Some(snapshot),
                Err(error) => {
                    tracing::warn!(%error, "durable cache entry is corrupt; ignoring");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                tracing::warn!(%error, "durable cache read failed; treating as miss");
                None
            }
        }
    }

    /// Best-effort write-through to the durable tier.
    async fn persist(&self, snapshot: &Snapshot) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        match serde_json::to_string(snapshot) {
            Ok(body) => {
                if let Err(error) = store.save(&body).await {
                    tracing::warn!(%error, "durable cache write failed; continuing");
                }
            }
            Err(error) => tracing::warn!(%error, "snapshot serialization failed"),
        }
    }
}
