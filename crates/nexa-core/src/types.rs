//! # Domain Types
//!
//! Core domain types shared by every store.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Invoice     │   │     Session     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  order_id       │   │  user (User)    │       │
//! │  │  title, brand   │   │  items (lines)  │   │  token          │       │
//! │  │  price (Money)  │   │  total_amount   │   └────────┬────────┘       │
//! │  │  stock, rating  │   │  date           │            │                │
//! │  └─────────────────┘   └─────────────────┘   ┌────────▼────────┐       │
//! │                                              │      Role       │       │
//! │                                              │  User | Admin   │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart and wishlist entries hold a full copy of the [`Product`]. Invoices
//! go further and freeze only the fields a receipt needs ([`InvoiceLine`]),
//! so later catalog edits never rewrite order history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Stores treat products as read-only values; only the catalog's admin
/// operations produce modified copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: String,

    /// Display title, e.g. "iPhone 15 Pro Max 256GB".
    pub title: String,

    pub brand: String,

    /// Current selling price.
    pub price: Money,

    /// List price before discount.
    pub original_price: Money,

    /// Discount percent (0-100), derived from the two prices.
    pub discount: u32,

    /// Image URLs, first one is the thumbnail.
    pub images: Vec<String>,

    /// Category name (see [`CATEGORIES`]).
    pub category: String,

    /// Size or configuration variants ("128GB", "RTX 4070", ...).
    pub sizes: Vec<String>,

    pub description: String,

    /// Units in stock.
    pub stock: u32,

    /// Average rating, 0.0-5.0.
    pub rating: f32,

    pub review_count: u32,
}

impl Product {
    /// Checks if the product has any stock left.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Categories the storefront knows about.
pub const CATEGORIES: [&str; 6] = ["Mobiles", "Laptops", "Audio", "TV", "Wearables", "Cameras"];

// =============================================================================
// Role / User / Session
// =============================================================================

/// Role attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Wire name of the role (`"user"` / `"admin"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

/// The signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Always stored lowercased.
    pub email: String,
    pub role: Role,
}

impl User {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authenticated identity plus the opaque token issued for it.
///
/// ## Lifecycle
/// ```text
/// login / register ──► Session ──► logout (dropped, storage wiped)
/// ```
/// Sessions are never restored on startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    pub user: User,
    pub token: String,
}

// =============================================================================
// Invoice
// =============================================================================

/// One line of an invoice, frozen at purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceLine {
    pub title: String,
    pub brand: String,
    pub quantity: u32,
    /// Unit price at time of purchase (frozen).
    pub unit_price: Money,
    /// unit_price × quantity.
    pub total: Money,
}

/// An immutable record of a completed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Invoice {
    /// Caller-generated, unique order id (e.g. `ORD_1718000000000_3f2a9c`).
    pub order_id: String,
    pub items: Vec<InvoiceLine>,
    pub subtotal: Money,
    /// Delivery fee charged on top of the subtotal.
    pub delivery: Money,
    pub total_amount: Money,
    /// Payment method label shown on the receipt, e.g. "Razorpay".
    pub payment_method: String,
    /// Serialized as an RFC 3339 / ISO 8601 timestamp.
    #[ts(as = "String")]
    pub date: DateTime<Utc>,
    pub customer_name: String,
    pub customer_email: String,
}

impl Invoice {
    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_default_and_names() {
        assert_eq!(Role::default(), Role::User);
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(
            serde_json::to_string(&Role::Admin).unwrap(),
            "\"admin\""
        );
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product {
            id: "1".to_string(),
            title: "AirPods Pro 2 (USB-C)".to_string(),
            brand: "Apple".to_string(),
            price: Money::from_major(24_900),
            original_price: Money::from_major(26_900),
            discount: 7,
            images: vec![],
            category: "Audio".to_string(),
            sizes: vec![],
            description: String::new(),
            stock: 0,
            rating: 4.7,
            review_count: 12,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["originalPrice"], 2_690_000);
        assert_eq!(json["reviewCount"], 12);
        assert!(!product.in_stock());
    }
}
