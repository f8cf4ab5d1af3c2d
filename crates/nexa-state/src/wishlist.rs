//! # Wishlist Store
//!
//! Liked products, mirrored into `wishlist_items`. Same load-then-persist
//! lifecycle as the cart.

use std::sync::Arc;

use nexa_core::{Product, Wishlist};
use nexa_store::{LocalStorage, StorageKey};
use tracing::debug;

use crate::persisted::{LoadPhase, PersistedCell};
use crate::writer::WriterHandle;

/// Shared handle to the wishlist.
#[derive(Clone)]
pub struct WishlistStore {
    cell: Arc<PersistedCell<Wishlist>>,
}

impl WishlistStore {
    pub fn new(writer: WriterHandle) -> Self {
        WishlistStore {
            cell: Arc::new(PersistedCell::new(StorageKey::WishlistItems, writer)),
        }
    }

    pub async fn load(&self, storage: &LocalStorage) {
        self.cell.load(storage).await;
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.phase() == LoadPhase::Loaded
    }

    /// Likes `product` if absent, unlikes it if present.
    ///
    /// ## Returns
    /// `true` if the product is liked afterwards.
    pub fn toggle(&self, product: &Product) -> bool {
        let liked = self.cell.update(|wishlist| wishlist.toggle(product));
        debug!(product_id = %product.id, liked, "Wishlist toggle");
        liked
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.cell.read(|wishlist| wishlist.contains(product_id))
    }

    pub fn remove(&self, product_id: &str) {
        debug!(product_id = %product_id, "Wishlist remove");
        self.cell.update(|wishlist| wishlist.remove(product_id));
    }

    pub fn clear(&self) {
        self.cell.update(Wishlist::clear);
    }

    pub fn items(&self) -> Vec<Product> {
        self.cell.read(|wishlist| wishlist.items().to_vec())
    }

    pub fn count(&self) -> usize {
        self.cell.read(Wishlist::len)
    }

    pub(crate) fn reset(&self) {
        self.cell.reset();
    }
}
