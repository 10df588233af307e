//! Persistence layer: durable cache tier behind a key-value contract.
//!
//! Provides the [`SnapshotStore`] trait for storing the last serialized
//! snapshot across restarts and instances. The concrete implementation
//! uses `sqlx::PgPool`; an in-memory store backs tests and single-tier
//! deployments. Store failures are always survivable: the service treats
//! a failed load as a cache miss and a failed save as skipped.

pub mod memory;
pub mod postgres;

pub use memory::MemorySnapshotStore;
pub use postgres::PostgresSnapshotStore;

use async_trait::async_trait;

use crate::error::GatewayError;

/// Fixed key under which the serialized snapshot is stored.
pub const SNAPSHOT_KEY: &str = "earthquakes:combined";

/// Durable key-value capability for the serialized snapshot.
#[async_trait]
pub trait SnapshotStore: Send + Sync + std::fmt::Debug {
    /// Loads the stored snapshot body, or `None` if nothing was persisted.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure; the
    /// caller treats that as a cache miss.
    async fn load(&self) -> Result<Option<String>, GatewayError>;

    /// Overwrites the stored snapshot body.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::PersistenceError`] on storage failure; the
    /// caller logs and continues.
    async fn save(&self, body: &str) -> Result<(), GatewayError>;
}
