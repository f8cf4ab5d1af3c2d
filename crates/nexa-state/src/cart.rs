//! # Cart Store
//!
//! The shopping cart, mirrored into `cart_items`.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Screen Action            CartStore                Cart Change          │
//! │  ─────────────            ─────────                ───────────          │
//! │                                                                         │
//! │  Add to cart ───────────► add(&product) ─────────► qty += 1 or push    │
//! │                                                                         │
//! │  Stepper +/- ───────────► set_quantity(id, n) ───► qty = n (≤0 drops)  │
//! │                                                                         │
//! │  Remove ────────────────► remove(id) ────────────► entry dropped       │
//! │                                                                         │
//! │  Order placed ──────────► clear() ───────────────► entries emptied     │
//! │                                                                         │
//! │  Badge / summary ───────► item_count() / total() ► (read only)         │
//! │                                                                         │
//! │  Every mutation queues a write of the whole cart once loaded.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use nexa_core::{Cart, CartEntry, CartTotals, Money, Product};
use nexa_store::{LocalStorage, StorageKey};
use tracing::debug;

use crate::persisted::{LoadPhase, PersistedCell};
use crate::writer::WriterHandle;

/// Shared handle to the cart. Clones see the same cart.
#[derive(Clone)]
pub struct CartStore {
    cell: Arc<PersistedCell<Cart>>,
}

impl CartStore {
    /// Creates an empty, unloaded cart store.
    pub fn new(writer: WriterHandle) -> Self {
        CartStore {
            cell: Arc::new(PersistedCell::new(StorageKey::CartItems, writer)),
        }
    }

    /// Loads the persisted cart, replacing what is in memory.
    pub async fn load(&self, storage: &LocalStorage) {
        self.cell.load(storage).await;
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.phase() == LoadPhase::Loaded
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `product`.
    pub fn add(&self, product: &Product) {
        debug!(product_id = %product.id, "Cart add");
        self.cell.update(|cart| cart.add(product));
    }

    /// Removes a product's entry. No-op if absent.
    pub fn remove(&self, product_id: &str) {
        debug!(product_id = %product_id, "Cart remove");
        self.cell.update(|cart| cart.remove(product_id));
    }

    /// Sets a product's quantity. `quantity <= 0` removes the entry.
    pub fn set_quantity(&self, product_id: &str, quantity: i64) {
        debug!(product_id = %product_id, quantity, "Cart set quantity");
        self.cell.update(|cart| cart.set_quantity(product_id, quantity));
    }

    pub fn clear(&self) {
        debug!("Cart clear");
        self.cell.update(Cart::clear);
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn entries(&self) -> Vec<CartEntry> {
        self.cell.read(|cart| cart.entries().to_vec())
    }

    /// Quantity of a product in the cart, if present.
    pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
        self.cell.read(|cart| cart.get(product_id).map(|e| e.quantity))
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.cell.read(|cart| cart.contains(product_id))
    }

    pub fn is_empty(&self) -> bool {
        self.cell.read(Cart::is_empty)
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u32 {
        self.cell.read(Cart::item_count)
    }

    /// Sum of price × quantity.
    pub fn total(&self) -> Money {
        self.cell.read(Cart::total)
    }

    pub fn totals(&self) -> CartTotals {
        self.cell.read(|cart| CartTotals::from(cart))
    }

    /// Total with a coupon applied, `None` for a blank code. Informational
    /// only; checkout charges [`CartStore::total`].
    pub fn quote_with_coupon(&self, code: &str) -> Option<Money> {
        self.cell.read(|cart| cart.quote_with_coupon(code))
    }

    /// Copy of the cart as it is now.
    pub fn snapshot(&self) -> Cart {
        self.cell.read(Cart::clone)
    }

    pub(crate) fn reset(&self) {
        self.cell.reset();
    }
}
