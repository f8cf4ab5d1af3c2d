//! # Order History
//!
//! Completed-order invoices, newest first, plus invoice creation from a cart.
//!
//! ## Checkout Flow
//! ```text
//! Cart ──► Invoice::from_cart(...) ──► OrderHistory::add ──► Cart::clear
//!            │
//!            └── lines frozen: title, brand, qty, unit price, line total
//! ```
//!
//! Invoices are write-once: the history exposes append and clear-all only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Invoice, User};

/// Name on invoices created without a session.
pub const GUEST_CUSTOMER_NAME: &str = "Guest";

/// Generates a unique order id: `ORD_<unix millis>_<random hex>`.
pub fn generate_order_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("ORD_{}_{}", now.timestamp_millis(), &suffix[..8])
}

impl Invoice {
    /// Builds an invoice from the current cart contents.
    ///
    /// ## Arguments
    /// * `order_id` - caller-generated unique id
    /// * `cart` - must not be empty
    /// * `delivery` - delivery fee added to the subtotal
    /// * `payment_method` - label shown on the receipt
    /// * `customer` - signed-in user, `None` for a guest checkout
    /// * `now` - purchase timestamp
    ///
    /// ## Errors
    /// `CoreError::EmptyCart` if the cart has no entries.
    pub fn from_cart(
        order_id: impl Into<String>,
        cart: &Cart,
        delivery: Money,
        payment_method: impl Into<String>,
        customer: Option<&User>,
        now: DateTime<Utc>,
    ) -> CoreResult<Self> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let subtotal = cart.total();

        Ok(Invoice {
            order_id: order_id.into(),
            items: cart.entries().iter().map(|e| e.to_invoice_line()).collect(),
            subtotal,
            delivery,
            total_amount: subtotal + delivery,
            payment_method: payment_method.into(),
            date: now,
            customer_name: customer
                .map(|u| u.name.clone())
                .unwrap_or_else(|| GUEST_CUSTOMER_NAME.to_string()),
            customer_email: customer.map(|u| u.email.clone()).unwrap_or_default(),
        })
    }
}

/// Order history, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderHistory {
    orders: Vec<Invoice>,
}

impl OrderHistory {
    pub fn new() -> Self {
        OrderHistory::default()
    }

    /// Prepends an invoice.
    pub fn add(&mut self, invoice: Invoice) {
        self.orders.insert(0, invoice);
    }

    /// Looks up an invoice by order id.
    pub fn get(&self, order_id: &str) -> Option<&Invoice> {
        self.orders.iter().find(|o| o.order_id == order_id)
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }

    /// Invoices, newest first.
    pub fn orders(&self) -> &[Invoice] {
        &self.orders
    }

    pub fn count(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Sum of all invoice totals.
    pub fn total_spent(&self) -> Money {
        self.orders.iter().map(|o| o.total_amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::tests::test_product;
    use crate::types::Role;

    fn invoice(order_id: &str, total_major: i64) -> Invoice {
        let mut cart = Cart::new();
        cart.add(&test_product(order_id, total_major));
        Invoice::from_cart(order_id, &cart, Money::zero(), "Razorpay", None, Utc::now()).unwrap()
    }

    #[test]
    fn test_add_prepends() {
        let mut history = OrderHistory::new();
        history.add(invoice("I1", 10));
        history.add(invoice("I2", 20));

        let ids: Vec<&str> = history.orders().iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, ["I2", "I1"]);
    }

    #[test]
    fn test_get_and_miss() {
        let mut history = OrderHistory::new();
        history.add(invoice("I1", 10));

        assert_eq!(history.get("I1").map(|o| o.total_amount), Some(Money::from_major(10)));
        assert!(history.get("nope").is_none());
    }

    #[test]
    fn test_derived_values() {
        let mut history = OrderHistory::new();
        assert!(history.total_spent().is_zero());

        history.add(invoice("I1", 10));
        history.add(invoice("I2", 25));

        assert_eq!(history.count(), 2);
        assert_eq!(history.total_spent(), Money::from_major(35));

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_invoice_snapshots_cart() {
        let mut cart = Cart::new();
        let speaker = test_product("7", 14_999);
        cart.add(&speaker);
        cart.add(&speaker);

        let user = User {
            id: "user_001".to_string(),
            name: "Olivia".to_string(),
            email: "olivia@example.com".to_string(),
            role: Role::User,
        };
        let invoice = Invoice::from_cart(
            "ORD_1",
            &cart,
            Money::from_major(40),
            "Razorpay",
            Some(&user),
            Utc::now(),
        )
        .unwrap();

        assert_eq!(invoice.items.len(), 1);
        assert_eq!(invoice.items[0].quantity, 2);
        assert_eq!(invoice.items[0].unit_price, Money::from_major(14_999));
        assert_eq!(invoice.items[0].total, Money::from_major(29_998));
        assert_eq!(invoice.subtotal, Money::from_major(29_998));
        assert_eq!(invoice.total_amount, Money::from_major(30_038));
        assert_eq!(invoice.customer_name, "Olivia");
        assert_eq!(invoice.item_count(), 2);
    }

    #[test]
    fn test_invoice_guest_and_empty_cart() {
        let mut cart = Cart::new();
        let err = Invoice::from_cart("X", &cart, Money::zero(), "Razorpay", None, Utc::now());
        assert!(matches!(err, Err(CoreError::EmptyCart)));

        cart.add(&test_product("1", 1));
        let invoice =
            Invoice::from_cart("X", &cart, Money::zero(), "Razorpay", None, Utc::now()).unwrap();
        assert_eq!(invoice.customer_name, GUEST_CUSTOMER_NAME);
        assert_eq!(invoice.customer_email, "");
    }

    #[test]
    fn test_generate_order_id() {
        let now = Utc::now();
        let a = generate_order_id(now);
        let b = generate_order_id(now);

        assert!(a.starts_with(&format!("ORD_{}_", now.timestamp_millis())));
        assert_ne!(a, b);
    }
}
