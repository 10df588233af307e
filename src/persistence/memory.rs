//! In-memory [`SnapshotStore`] for tests and database-less deployments.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::SnapshotStore;
use crate::error::GatewayError;

/// Process-local [`SnapshotStore`]; contents vanish on restart.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    inner: RwLock<Option<String>>,
}

impl MemorySnapshotStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn load(&self) -> Result<Option<String>, GatewayError> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, body: &str) -> Result<(), GatewayError> {
        *self.inner.write().await = Some(body.to_string());
        Ok(())
    }
}
