use std::str::FromStr;

use super::KeyValueStore;
use crate::StorageError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};

const IN_MEMORY: &str = ":memory:";

/// Key-value pairs in a single `kv` table.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// `path` is a filename or `:memory:`. An in-memory database lives on a
    /// single pinned connection, since each new connection would get its own.
    pub async fn connect(path: &str, pool_size: u32) -> Result<Self, StorageError> {
        let (options, pool_options) = if path == IN_MEMORY {
            let options = SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| StorageError::Config(e.to_string()))?;
            let pool_options = SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<std::time::Duration>)
                .max_lifetime(None::<std::time::Duration>);
            (options, pool_options)
        } else {
            let options = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true);
            (options, SqlitePoolOptions::new().max_connections(pool_size.max(1)))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| StorageError::unavailable(path, e))?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::query("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value BLOB NOT NULL)")
            .execute(&pool)
            .await
            .map_err(|e| StorageError::unavailable("kv", e))?;
        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::unavailable(key, e))?;

        match row {
            Some(r) => {
                let value: Vec<u8> = r
                    .try_get("value")
                    .map_err(|e| StorageError::unavailable(key, e))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?, ?) ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::unavailable(key, e))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::unavailable(key, e))?;
        Ok(())
    }
}
