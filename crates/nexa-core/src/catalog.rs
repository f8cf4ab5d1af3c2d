//! # Catalog
//!
//! The in-memory product list the storefront browses and the admin panel
//! edits. The catalog is not persisted; it is rebuilt from seed data at
//! every launch.
//!
//! ## Admin Edits
//! ```text
//! ProductDraft ──► validate ──► derive discount ──► add / update
//!                                  │
//!                                  └── round((original - price) / original × 100)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::{discount_percent, Money};
use crate::types::Product;
use crate::validation::{
    normalize_search_query, validate_category, validate_price, validate_required,
    ValidationResult,
};

/// Category filter value that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Fields an admin fills in on the product form.
///
/// `original_price` defaults to `price` when absent. Rating and review
/// count are never set from the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    pub title: String,
    pub brand: String,
    pub price: Money,
    pub original_price: Option<Money>,
    pub category: String,
    pub description: String,
    pub stock: u32,
    pub sizes: Vec<String>,
    /// Empty keeps the existing images on update.
    pub images: Vec<String>,
}

impl ProductDraft {
    /// Validates the draft.
    ///
    /// ## Rules
    /// - title and brand required
    /// - prices non-negative
    /// - category one of the known categories
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("title", &self.title)?;
        validate_required("brand", &self.brand)?;
        validate_price("price", self.price)?;
        if let Some(original) = self.original_price {
            validate_price("originalPrice", original)?;
        }
        validate_category(&self.category)?;
        Ok(())
    }

    fn original_price_or_price(&self) -> Money {
        self.original_price.unwrap_or(self.price)
    }

    fn clean_sizes(&self) -> Vec<String> {
        self.sizes
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogStats {
    pub total: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

/// In-memory product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from seed products.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Products in a category. `"All"` or an empty string matches all.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        if category.is_empty() || category == ALL_CATEGORIES {
            return self.products.iter().collect();
        }

        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Case-insensitive substring search over title, brand and category.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = normalize_search_query(query);

        self.products
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&query)
                    || p.brand.to_lowercase().contains(&query)
                    || p.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let in_stock = self.products.iter().filter(|p| p.in_stock()).count();
        CatalogStats {
            total: self.products.len(),
            in_stock,
            out_of_stock: self.products.len() - in_stock,
        }
    }

    /// Adds a new product from a draft and returns it.
    pub fn add(&mut self, draft: ProductDraft) -> CoreResult<Product> {
        draft.validate()?;

        let original_price = draft.original_price_or_price();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            discount: discount_percent(original_price, draft.price),
            sizes: draft.clean_sizes(),
            title: draft.title.trim().to_string(),
            brand: draft.brand.trim().to_string(),
            price: draft.price,
            original_price,
            images: draft.images,
            category: draft.category,
            description: draft.description,
            stock: draft.stock,
            rating: 0.0,
            review_count: 0,
        };

        self.products.push(product.clone());
        Ok(product)
    }

    /// Overwrites a product's form fields with a draft.
    ///
    /// Id, rating and review count are kept. Images are kept when the
    /// draft has none.
    pub fn update(&mut self, product_id: &str, draft: ProductDraft) -> CoreResult<Product> {
        draft.validate()?;

        let original_price = draft.original_price_or_price();
        let sizes = draft.clean_sizes();
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        product.title = draft.title.trim().to_string();
        product.brand = draft.brand.trim().to_string();
        product.price = draft.price;
        product.original_price = original_price;
        product.discount = discount_percent(original_price, draft.price);
        product.category = draft.category;
        product.description = draft.description;
        product.stock = draft.stock;
        product.sizes = sizes;
        if !draft.images.is_empty() {
            product.images = draft.images;
        }

        Ok(product.clone())
    }

    /// Deletes a product and returns it.
    pub fn delete(&mut self, product_id: &str) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))?;

        Ok(self.products.remove(index))
    }
}
