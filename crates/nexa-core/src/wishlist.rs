//! # Wishlist
//!
//! Set of liked products, keyed by product id, kept in the order they were
//! liked.

use serde::{Deserialize, Serialize};

use crate::types::Product;

/// The wishlist.
///
/// ## Invariants
/// - At most one entry per product id
///
/// Serializes as a bare JSON array of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Likes or unlikes a product.
    ///
    /// ## Returns
    /// `true` if the product is now in the wishlist.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            self.remove(&product.id);
            return false;
        }

        self.items.push(product.clone());
        true
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Removes a product; no-op when absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|p| p.id != product_id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::tests::test_product;

    #[test]
    fn test_toggle_twice_restores_empty() {
        let mut wishlist = Wishlist::new();
        let product = test_product("7", 14_999);

        assert!(wishlist.toggle(&product));
        assert!(wishlist.contains("7"));

        assert!(!wishlist.toggle(&product));
        assert!(wishlist.is_empty());
        assert_eq!(wishlist, Wishlist::new());
    }

    #[test]
    fn test_set_semantics() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&test_product("1", 1));
        wishlist.toggle(&test_product("2", 1));
        wishlist.toggle(&test_product("1", 1));
        wishlist.toggle(&test_product("1", 1));

        assert_eq!(wishlist.len(), 2);
        let ids: Vec<&str> = wishlist.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&test_product("1", 1));
        wishlist.toggle(&test_product("2", 1));

        wishlist.remove("missing");
        assert_eq!(wishlist.len(), 2);

        wishlist.remove("1");
        assert!(!wishlist.contains("1"));

        wishlist.clear();
        assert!(wishlist.is_empty());
    }
}
