//! # nexa-store: Local Key-Value Storage for the ShopNexa Storefront
//!
//! This crate provides the device-local key-value area the stores mirror
//! their collections into. It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  CartStore mutation ──► writer task (nexa-state)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    nexa-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ LocalStorage  │    │ KvRepository  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │   (kv.rs)     │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ get/set/      │    │ 001_kv_store │  │   │
//! │  │   │ StorageKey    │    │ remove        │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   SQLite file: ~/.local/share/shopnexa-storefront/storefront.db │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and typed key access
//! - [`keys`] - The five storage keys
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Raw key-value repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use nexa_store::{LocalStorage, StorageConfig, StorageKey};
//!
//! let storage = LocalStorage::open(StorageConfig::new("storefront.db")).await?;
//! storage.set(StorageKey::CartItems, "[]").await?;
//! assert_eq!(storage.get(StorageKey::CartItems).await?.as_deref(), Some("[]"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod keys;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use keys::StorageKey;
pub use pool::{LocalStorage, StorageConfig};
pub use repository::kv::KvRepository;
