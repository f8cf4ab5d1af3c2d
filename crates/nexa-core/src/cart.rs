//! # Cart
//!
//! The shopping cart collection and its derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action               Operation               Collection Change      │
//! │  ─────────               ─────────               ─────────────────      │
//! │                                                                         │
//! │  "Add to cart" ────────► add(product) ─────────► qty += 1 or push      │
//! │                                                                         │
//! │  +/- stepper ──────────► set_quantity(id, n) ──► qty = n (n ≤ 0: drop) │
//! │                                                                         │
//! │  Trash icon ───────────► remove(id) ───────────► retain != id          │
//! │                                                                         │
//! │  Checkout done ────────► clear() ──────────────► empty                 │
//! │                                                                         │
//! │  Badge / summary ──────► item_count(), total() (recomputed per read)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these operations fail: unknown ids are no-ops.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{InvoiceLine, Product};

/// Discount granted by any coupon code, in basis points (10%).
pub const COUPON_DISCOUNT_BPS: u32 = 1000;

/// A product in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartEntry {
    pub product: Product,

    /// Always ≥ 1 while the entry exists.
    pub quantity: u32,
}

impl CartEntry {
    /// Line total (price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }

    /// Freezes this entry into an invoice line.
    pub fn to_invoice_line(&self) -> InvoiceLine {
        InvoiceLine {
            title: self.product.title.clone(),
            brand: self.product.brand.clone(),
            quantity: self.quantity,
            unit_price: self.product.price,
            total: self.line_total(),
        }
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by product id (adding again increases quantity)
/// - Quantity is ≥ 1 (setting it to 0 or below removes the entry)
/// - Insertion order is preserved for display
///
/// Serializes as a bare JSON array of entries. Deserializing goes through
/// [`Cart::from_entries`], so a stored array with repeats or zero
/// quantities still yields a valid cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<CartEntry>::deserialize(deserializer).map(Cart::from_entries)
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Builds a cart from raw entries.
    ///
    /// Zero-quantity entries are dropped and repeats of a product id are
    /// merged into the first occurrence (quantities added, saturating).
    pub fn from_entries(entries: impl IntoIterator<Item = CartEntry>) -> Self {
        let mut cart = Cart::new();
        for entry in entries {
            if entry.quantity == 0 {
                continue;
            }
            match cart.entry_mut(&entry.product.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(entry.quantity)
                }
                None => cart.entries.push(entry),
            }
        }
        cart
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1
    /// - Product not in cart: new entry with quantity 1
    pub fn add(&mut self, product: &Product) {
        if let Some(entry) = self.entry_mut(&product.id) {
            entry.quantity = entry.quantity.saturating_add(1);
            return;
        }

        self.entries.push(CartEntry {
            product: product.clone(),
            quantity: 1,
        });
    }

    /// Removes the entry for `product_id`, if any.
    pub fn remove(&mut self, product_id: &str) {
        self.entries.retain(|e| e.product.id != product_id);
    }

    /// Sets the quantity of an entry.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove`]
    /// - Product not in cart: no-op
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(entry) = self.entry_mut(product_id) {
            entry.quantity = quantity;
        }
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Looks up the entry for a product.
    pub fn get(&self, product_id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.product.id == product_id)
    }

    /// Returns true if the product is in the cart.
    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of units (sum of quantities). This is the badge count.
    /// Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |count, e| count.saturating_add(e.quantity))
    }

    /// Total price (sum of price × quantity).
    pub fn total(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Quotes the cart total with a coupon applied.
    ///
    /// Any non-blank code is accepted and takes [`COUPON_DISCOUNT_BPS`] off.
    /// Returns `None` for a blank code.
    pub fn quote_with_coupon(&self, code: &str) -> Option<Money> {
        if code.trim().is_empty() {
            return None;
        }

        Some(self.total().apply_percentage_discount(COUPON_DISCOUNT_BPS))
    }

    fn entry_mut(&mut self, product_id: &str) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| e.product.id == product_id)
    }
}

/// Cart totals summary for the cart badge and summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub distinct_items: usize,
    pub item_count: u32,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            distinct_items: cart.len(),
            item_count: cart.item_count(),
            total: cart.total(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_product(id: &str, price_major: i64) -> Product {
        Product {
            id: id.to_string(),
            title: format!("Product {}", id),
            brand: "Acme".to_string(),
            price: Money::from_major(price_major),
            original_price: Money::from_major(price_major),
            discount: 0,
            images: vec![],
            category: "Audio".to_string(),
            sizes: vec![],
            description: String::new(),
            stock: 10,
            rating: 4.5,
            review_count: 3,
        }
    }

    #[test]
    fn test_add_same_product_twice_increments() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        cart.add(&product);
        cart.add(&product);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("1").map(|e| e.quantity), Some(2));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_set_quantity_non_positive_removes() {
        for q in [0, -1, -50] {
            let mut cart = Cart::new();
            cart.add(&test_product("1", 10));
            cart.add(&test_product("2", 20));

            cart.set_quantity("1", q);

            assert!(!cart.contains("1"), "quantity {} should remove", q);
            assert!(cart.contains("2"));
        }
    }

    #[test]
    fn test_set_quantity_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 10));

        cart.set_quantity("missing", 4);
        cart.remove("missing");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_total_tracks_mutations() {
        let mut cart = Cart::new();
        let phone = test_product("1", 64_999);
        let mouse = test_product("2", 8_995);

        cart.add(&phone);
        cart.add(&mouse);
        cart.set_quantity("2", 3);
        assert_eq!(cart.total(), Money::from_major(64_999 + 3 * 8_995));

        cart.add(&phone);
        cart.remove("2");
        assert_eq!(cart.total(), Money::from_major(2 * 64_999));

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut cart = Cart::new();
        let tv = test_product("1", 64_999);
        let soundbar = test_product("2", 8_995);
        cart.add(&tv);
        cart.add(&soundbar);

        cart.set_quantity("1", i64::MAX);
        cart.add(&tv);
        assert_eq!(cart.get("1").map(|e| e.quantity), Some(u32::MAX));

        cart.set_quantity("1", 3_000_000_000);
        cart.set_quantity("2", 3_000_000_000);
        assert_eq!(cart.item_count(), u32::MAX);

        let mut pricey = test_product("3", 0);
        pricey.price = Money::from_minor(i64::MAX / 2);
        cart.add(&pricey);
        cart.set_quantity("3", 4);
        assert_eq!(cart.total(), Money::from_minor(i64::MAX));
        assert_eq!(CartTotals::from(&cart).item_count, u32::MAX);
    }

    #[test]
    fn test_stored_entries_are_normalized() {
        let entry = |id: &str, quantity: u32| CartEntry {
            product: test_product(id, 10),
            quantity,
        };
        let raw = vec![entry("a", 2), entry("b", 0), entry("c", 1), entry("a", 3)];
        let json = serde_json::to_string(&raw).unwrap();

        let cart: Cart = serde_json::from_str(&json).unwrap();

        let ids: Vec<&str> = cart.entries().iter().map(|e| e.product.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert_eq!(cart.get("a").map(|e| e.quantity), Some(5));
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&test_product("b", 1));
        cart.add(&test_product("a", 1));
        cart.add(&test_product("b", 1));

        let ids: Vec<&str> = cart.entries().iter().map(|e| e.product.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_coupon_quote() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 1000));

        assert_eq!(cart.quote_with_coupon("NEXA10"), Some(Money::from_major(900)));
        assert_eq!(cart.quote_with_coupon("   "), None);
    }

    #[test]
    fn test_serializes_as_array() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 5));

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["quantity"], 1);

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 100));
        cart.set_quantity("1", 2);

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.distinct_items, 1);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total, Money::from_major(200));
    }
}
