//! # Key-Value Repository
//!
//! Raw access to the `kv_store` table. Values are opaque text; callers
//! own the encoding.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// Repository for key-value operations.
#[derive(Debug, Clone)]
pub struct KvRepository {
    pool: SqlitePool,
}

impl KvRepository {
    /// Creates a new KvRepository.
    pub fn new(pool: SqlitePool) -> Self {
        KvRepository { pool }
    }

    /// Reads the value stored under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - Key is present
    /// * `Ok(None)` - Key was never written or has been removed
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        debug!(key = %key, bytes = value.len(), "Writing key");

        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// ## Returns
    /// `true` if a row was deleted.
    pub async fn remove(&self, key: &str) -> DbResult<bool> {
        debug!(key = %key, "Removing key");

        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes several keys in one transaction.
    ///
    /// Either every key is removed or none is.
    pub async fn remove_many(&self, keys: &[&str]) -> DbResult<u64> {
        debug!(count = keys.len(), "Removing keys");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let mut removed = 0;
        for key in keys {
            let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
                .bind(*key)
                .execute(&mut *tx)
                .await?;
            removed += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(removed)
    }

    /// Lists every key currently stored, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }

    /// Number of stored keys.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv_store")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
