//! # Storefront
//!
//! The handle screens are given. Bundles the stores, the catalog, the
//! storage writer and configuration, and implements the flows that span
//! more than one store: checkout, logout and admin catalog edits.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront::open                                  │
//! │                                                                         │
//! │  1. Open Local Storage ───────────────────────────────────────────────► │
//! │     • SQLite file at config.storage_path (WAL)                          │
//! │     • Run pending migrations                                            │
//! │                                                                         │
//! │  2. Spawn Storage Writer ─────────────────────────────────────────────► │
//! │     • One tokio task, ordered writes                                    │
//! │                                                                         │
//! │  3. Create Stores ────────────────────────────────────────────────────► │
//! │     • Cart, wishlist, orders: Uninitialized                             │
//! │     • Session: signed out                                               │
//! │                                                                         │
//! │  4. Load Persisted Stores ────────────────────────────────────────────► │
//! │     • cart_items, wishlist_items, order_history read concurrently       │
//! │     • Each store becomes Loaded and starts persisting                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout
//! ```text
//! cart snapshot ──► Invoice::from_cart ──► orders.add_order ──► cart.clear
//!                     (EmptyCart if empty)
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use nexa_core::orders::generate_order_id;
use nexa_core::{Catalog, CatalogStats, Invoice, Money, Product, ProductDraft, Session};
use nexa_store::{LocalStorage, StorageConfig};
use tracing::info;

use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::orders::OrderStore;
use crate::session::SessionStore;
use crate::wishlist::WishlistStore;
use crate::writer::{StorageWriter, WriterHandle};

/// Payment method recorded on invoices when the screen does not pick one.
pub const DEFAULT_PAYMENT_METHOD: &str = "Razorpay";

/// The storefront state layer. Cheap to clone; clones share all state.
#[derive(Clone)]
pub struct Storefront {
    config: Arc<StorefrontConfig>,
    storage: LocalStorage,
    writer: WriterHandle,
    cart: CartStore,
    wishlist: WishlistStore,
    orders: OrderStore,
    session: SessionStore,
    catalog: Arc<Mutex<Catalog>>,
}

impl Storefront {
    /// Opens storage at `config.storage_path` and loads the stores.
    ///
    /// ## Arguments
    /// * `config` - Storefront configuration
    /// * `catalog` - Seed products for this launch
    ///
    /// ## Returns
    /// * `Ok(Storefront)` - Loaded and ready
    /// * `Err(ApiError)` - Storage could not be opened (`STORAGE_ERROR`)
    pub async fn open(config: StorefrontConfig, catalog: Catalog) -> ApiResult<Self> {
        info!(path = %config.storage_path.display(), "Opening storefront");

        if let Some(dir) = config.storage_path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    ApiError::new(
                        ErrorCode::StorageError,
                        format!("Could not create data directory: {}", e),
                    )
                })?;
            }
        }

        let storage = LocalStorage::open(StorageConfig::new(config.storage_path.clone())).await?;
        Ok(Storefront::with_storage(config, storage, catalog).await)
    }

    /// Builds a storefront over an already-open storage handle.
    pub async fn with_storage(
        config: StorefrontConfig,
        storage: LocalStorage,
        catalog: Catalog,
    ) -> Self {
        let writer = StorageWriter::spawn(storage.clone());

        let storefront = Storefront {
            config: Arc::new(config),
            cart: CartStore::new(writer.clone()),
            wishlist: WishlistStore::new(writer.clone()),
            orders: OrderStore::new(writer.clone()),
            session: SessionStore::new(writer.clone()),
            catalog: Arc::new(Mutex::new(catalog)),
            storage,
            writer,
        };

        tokio::join!(
            storefront.cart.load(&storefront.storage),
            storefront.wishlist.load(&storefront.storage),
            storefront.orders.load(&storefront.storage),
        );

        info!(
            cart_items = storefront.cart.item_count(),
            wishlist_items = storefront.wishlist.count(),
            orders = storefront.orders.count(),
            "Storefront ready"
        );

        storefront
    }

    // =========================================================================
    // Store Access
    // =========================================================================

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn wishlist(&self) -> &WishlistStore {
        &self.wishlist
    }

    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Formats an amount with the configured currency symbol.
    pub fn format_price(&self, amount: Money) -> String {
        self.config.format_currency(amount)
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn login(&self, email: &str, password: &str) -> ApiResult<Session> {
        self.session.login(email, password)
    }

    pub fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<Session> {
        self.session.register(name, email, password)
    }

    /// Signs out and wipes local state.
    ///
    /// Cart, wishlist and orders are emptied in memory first, then the
    /// session store queues removal of every key, so no earlier queued
    /// write can survive the logout.
    pub fn logout(&self) {
        self.cart.reset();
        self.wishlist.reset();
        self.orders.reset();
        self.session.logout();
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Turns the cart into an order.
    ///
    /// ## Returns
    /// The new invoice, already prepended to order history. The cart is
    /// empty afterwards.
    ///
    /// ## Errors
    /// `EMPTY_CART` if there is nothing to buy.
    pub fn checkout(&self, payment_method: &str) -> ApiResult<Invoice> {
        let now = Utc::now();
        let customer = self.session.user();
        let cart = self.cart.snapshot();

        let invoice = Invoice::from_cart(
            generate_order_id(now),
            &cart,
            self.config.delivery_fee,
            payment_method,
            customer.as_ref(),
            now,
        )?;

        self.orders.add_order(invoice.clone());
        self.cart.clear();

        info!(
            order_id = %invoice.order_id,
            items = invoice.item_count(),
            total = %invoice.total_amount,
            "Order placed"
        );

        Ok(invoice)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn products(&self) -> Vec<Product> {
        self.catalog().list().to_vec()
    }

    pub fn product(&self, product_id: &str) -> Option<Product> {
        self.catalog().get(product_id).cloned()
    }

    /// Products in `category`; `"All"` returns everything.
    pub fn products_in_category(&self, category: &str) -> Vec<Product> {
        self.catalog()
            .by_category(category)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<Product> {
        self.catalog().search(query).into_iter().cloned().collect()
    }

    pub fn catalog_stats(&self) -> CatalogStats {
        self.catalog().stats()
    }

    /// Adds a product. Admin only.
    pub fn add_product(&self, draft: ProductDraft) -> ApiResult<Product> {
        self.require_admin()?;
        let product = self.catalog().add(draft)?;
        info!(product_id = %product.id, "Product added");
        Ok(product)
    }

    /// Updates a product. Admin only.
    pub fn update_product(&self, product_id: &str, draft: ProductDraft) -> ApiResult<Product> {
        self.require_admin()?;
        let product = self.catalog().update(product_id, draft)?;
        info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Deletes a product. Admin only.
    pub fn delete_product(&self, product_id: &str) -> ApiResult<Product> {
        self.require_admin()?;
        let product = self.catalog().delete(product_id)?;
        info!(product_id = %product.id, "Product deleted");
        Ok(product)
    }

    fn require_admin(&self) -> ApiResult<()> {
        match self.session.current() {
            None => Err(ApiError::unauthenticated()),
            Some(session) if session.user.is_admin() => Ok(()),
            Some(_) => Err(ApiError::forbidden()),
        }
    }

    fn catalog(&self) -> MutexGuard<'_, Catalog> {
        self.catalog.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Shutdown
    // =========================================================================

    /// Waits for every queued write to reach storage.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    /// Flushes pending writes and closes storage.
    pub async fn shutdown(&self) {
        info!("Shutting down storefront");
        self.flush().await;
        self.storage.close().await;
    }
}
