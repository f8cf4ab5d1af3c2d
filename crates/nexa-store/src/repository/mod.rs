//! # Repository Module
//!
//! Database repository implementations for the storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Writer task (nexa-state)                                              │
//! │       │                                                                 │
//! │       │  storage.kv().set("cart_items", json)                          │
//! │       ▼                                                                 │
//! │  KvRepository                                                          │
//! │  ├── get(&self, key)                                                   │
//! │  ├── set(&self, key, value)                                            │
//! │  ├── remove(&self, key)                                                │
//! │  └── remove_many(&self, keys)                                          │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  kv_store table                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`kv::KvRepository`] - Raw text blobs by key

pub mod kv;
