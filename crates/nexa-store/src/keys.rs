//! # Storage Keys
//!
//! The fixed set of keys the storefront writes into the key-value area.
//!
//! ```text
//! ┌───────────────────┬──────────────────┬───────────────────────────────┐
//! │ Key               │ Owner            │ Value                          │
//! ├───────────────────┼──────────────────┼───────────────────────────────┤
//! │ auth_token        │ SessionStore     │ opaque token string            │
//! │ auth_user         │ SessionStore     │ JSON user record               │
//! │ cart_items        │ CartStore        │ JSON array of cart entries     │
//! │ wishlist_items    │ WishlistStore    │ JSON array of products         │
//! │ order_history     │ OrderStore       │ JSON array of invoices         │
//! └───────────────────┴──────────────────┴───────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A key in the local key-value area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKey {
    AuthToken,
    AuthUser,
    CartItems,
    WishlistItems,
    OrderHistory,
}

impl StorageKey {
    /// Every key, in the order logout clears them.
    pub const ALL: [StorageKey; 5] = [
        StorageKey::AuthToken,
        StorageKey::AuthUser,
        StorageKey::CartItems,
        StorageKey::WishlistItems,
        StorageKey::OrderHistory,
    ];

    /// Returns the key as stored in the `kv_store.key` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::AuthToken => "auth_token",
            StorageKey::AuthUser => "auth_user",
            StorageKey::CartItems => "cart_items",
            StorageKey::WishlistItems => "wishlist_items",
            StorageKey::OrderHistory => "order_history",
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
