//! PostgreSQL implementation of the durable cache tier.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::{SNAPSHOT_KEY, SnapshotStore};
use crate::error::GatewayError;

/// PostgreSQL-backed [`SnapshotStore`] using a single-row key-value table.
#[derive(Debug, Clone)]
pub struct PostgresSnapshotStore {
    pool: PgPool,
}

impl PostgresSnapshotStore {
    /// Connects to the database and ensures the cache table exists.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError::PersistenceError`] if the connection or
    /// schema setup fails.
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
    ) -> Result<Self, GatewayError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Creates the `kv_cache` table if missing.
    async fn ensure_schema(&self) -> Result<(), GatewayError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS kv_cache (\
             key TEXT PRIMARY KEY, \
             value TEXT NOT NULL, \
             updated_at TIMESTAMPTZ NOT NULL DEFAULT now())",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl SnapshotStore for PostgresSnapshotStore {
    async fn load(&self) -> Result<Option<String>, GatewayError> {
        sqlx::query_scalar::<_, String>("SELECT value FROM kv_cache WHERE key = $1")
            .bind(SNAPSHOT_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| GatewayError::PersistenceError(e.to_string()))
    }

    async fn save(&self, body: &str) -> Result<(), GatewayError> {
        sqlx::query(
            "INSERT INTO kv_cache (key, value, updated_at) VALUES ($1, $2, now()) \
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = now()",
        )
        .bind(SNAPSHOT_KEY)
        .bind(body)
        .execute(&self.pool)
        .await
        .map_err(|e| GatewayError::PersistenceError(e.to_string()))?;
        Ok(())
    }
}
