//! # Local Storage Pool
//!
//! Connection pool creation and typed key access for the device-local
//! key-value area.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Local Storage                                      │
//! │                                                                         │
//! │  Storefront::open                                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageConfig::new(path) ← Configure pool settings                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LocalStorage::open(config).await ← Create pool + run migrations       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │            SqlitePool                    │                           │
//! │  │  ┌─────┐ ┌─────┐                         │  (max_connections)        │
//! │  │  │Conn1│ │Conn2│ ...                     │                           │
//! │  │  └─────┘ └─────┘                         │                           │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ├── store loads read   (get)                                     │
//! │       └── writer task writes (set / remove / clear_all)                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! SQLite WAL mode is enabled so loads never wait on the writer task.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::keys::StorageKey;
use crate::migrations;
use crate::repository::kv::KvRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Storage configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StorageConfig::new("/path/to/storefront.db")
///     .max_connections(2);
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 4 (one writer plus a few loads)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on open.
    /// Default: true
    pub run_migrations: bool,
}

impl StorageConfig {
    /// Creates a new storage configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Created if missing.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StorageConfig {
            database_path: path.into(),
            max_connections: 4,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on open.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory storage configuration (for testing).
    ///
    /// Each pool gets its own private database. Clones of the same
    /// [`LocalStorage`] share it.
    pub fn in_memory() -> Self {
        StorageConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }
}

// =============================================================================
// LocalStorage
// =============================================================================

/// Handle to the device-local key-value area.
///
/// Cheap to clone; clones share the pool.
///
/// ## Usage
/// ```rust,ignore
/// let storage = LocalStorage::open(StorageConfig::new("./storefront.db")).await?;
/// storage.set(StorageKey::AuthToken, "mock_jwt_token_1").await?;
/// storage.clear_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct LocalStorage {
    pool: SqlitePool,
}

impl LocalStorage {
    /// Opens the storage pool.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Enables WAL mode with NORMAL synchronous
    /// 3. Creates the connection pool
    /// 4. Runs migrations (if enabled)
    ///
    /// ## Returns
    /// * `Ok(LocalStorage)` - Ready-to-use handle
    /// * `Err(DbError)` - Connection or migration failed
    pub async fn open(config: StorageConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening local storage"
        );

        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());

        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Storage pool created"
        );

        let storage = LocalStorage { pool };

        if config.run_migrations {
            storage.run_migrations().await?;
        }

        Ok(storage)
    }

    /// Runs database migrations. Idempotent.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running storage migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns `(total, applied)` migration counts.
    pub async fn migration_status(&self) -> DbResult<(usize, usize)> {
        migrations::migration_status(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the raw key-value repository.
    pub fn kv(&self) -> KvRepository {
        KvRepository::new(self.pool.clone())
    }

    // =========================================================================
    // Typed Key Access
    // =========================================================================

    /// Reads the value stored under `key`.
    pub async fn get(&self, key: StorageKey) -> DbResult<Option<String>> {
        self.kv().get(key.as_str()).await
    }

    /// Replaces the value stored under `key`.
    pub async fn set(&self, key: StorageKey, value: &str) -> DbResult<()> {
        self.kv().set(key.as_str(), value).await
    }

    /// Removes `key`.
    pub async fn remove(&self, key: StorageKey) -> DbResult<()> {
        self.kv().remove(key.as_str()).await?;
        Ok(())
    }

    /// Removes the given keys in one transaction.
    pub async fn remove_many(&self, keys: &[StorageKey]) -> DbResult<()> {
        let names: Vec<&str> = keys.iter().map(StorageKey::as_str).collect();
        let removed = self.kv().remove_many(&names).await?;
        debug!(removed, "Keys removed");
        Ok(())
    }

    /// Removes all five storefront keys.
    pub async fn clear_all(&self) -> DbResult<()> {
        info!("Clearing all storefront keys");
        self.remove_many(&StorageKey::ALL).await
    }

    /// Closes the pool. Every later operation fails.
    pub async fn close(&self) {
        info!("Closing local storage");
        self.pool.close().await;
    }

    /// Checks if the storage can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
