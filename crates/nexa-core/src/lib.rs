//! # nexa-core: Pure Domain Logic for the ShopNexa Storefront
//!
//! This crate contains the storefront's domain logic as plain data types
//! and pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     ShopNexa Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Mobile UI (screens)                        │   │
//! │  │   Catalog ──► Product ──► Cart ──► Checkout ──► Order History   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        nexa-state (stores, session, storefront facade)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ nexa-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │  money   │ │   cart   │ │ wishlist │ │ orders / auth /  │  │   │
//! │  │   │  Money   │ │   Cart   │ │ Wishlist │ │ catalog          │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, User, Session, Invoice
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart collection and totals
//! - [`wishlist`] - Liked products
//! - [`orders`] - Order history and invoice creation
//! - [`auth`] - Mock credential check
//! - [`catalog`] - Product list, search and admin edits
//! - [`error`] - Domain error types
//! - [`validation`] - Form validation
//!
//! ## Example Usage
//!
//! ```rust
//! use nexa_core::{Cart, Money, Product};
//!
//! let speaker = Product {
//!     id: "7".to_string(),
//!     title: "JBL Charge 5 Bluetooth Speaker".to_string(),
//!     brand: "JBL".to_string(),
//!     price: Money::from_major(14_999),
//!     original_price: Money::from_major(18_999),
//!     discount: 21,
//!     images: vec![],
//!     category: "Audio".to_string(),
//!     sizes: vec![],
//!     description: String::new(),
//!     stock: 12,
//!     rating: 4.6,
//!     review_count: 5400,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add(&speaker);
//! cart.add(&speaker);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(), Money::from_major(29_998));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod orders;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEntry, CartTotals};
pub use catalog::{Catalog, CatalogStats, ProductDraft};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use orders::OrderHistory;
pub use types::*;
pub use wishlist::Wishlist;
