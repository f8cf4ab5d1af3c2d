//! # nexa-state: Storefront State Layer
//!
//! Client-side state for the ShopNexa mobile storefront: the cart,
//! wishlist and order history stores mirrored into local storage, the mock
//! session, and the [`Storefront`] facade that ties them together.
//!
//! ## Module Organization
//! ```text
//! nexa_state/
//! ├── lib.rs          ◄─── You are here (exports, logging setup)
//! ├── storefront.rs   ◄─── Facade: startup, checkout, logout, admin catalog
//! ├── cart.rs         ◄─── CartStore
//! ├── wishlist.rs     ◄─── WishlistStore
//! ├── orders.rs       ◄─── OrderStore
//! ├── session.rs      ◄─── SessionStore (mock auth)
//! ├── persisted.rs    ◄─── Load-gated in-memory cell behind each store
//! ├── writer.rs       ◄─── Background storage writer task
//! ├── config.rs       ◄─── StorefrontConfig
//! └── error.rs        ◄─── ApiError returned to screens
//! ```
//!
//! ## Separate Stores
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │  CartStore   │ │WishlistStore │ │  OrderStore  │ │ SessionStore │   │
//! │  │ cart_items   │ │wishlist_items│ │order_history │ │ auth_token   │   │
//! │  │              │ │              │ │              │ │ auth_user    │   │
//! │  └──────┬───────┘ └──────┬───────┘ └──────┬───────┘ └──────┬───────┘   │
//! │         └────────────────┴───────┬────────┴────────────────┘           │
//! │                                  ▼                                      │
//! │                      WriterHandle ──► StorageWriter ──► LocalStorage   │
//! │                                                                         │
//! │  Each screen takes only the store it needs. Mutations return at once;  │
//! │  storage catches up in the background.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! nexa_state::init_tracing();
//!
//! let storefront = Storefront::open(StorefrontConfig::from_env(), seed_catalog()).await?;
//! storefront.cart().add(&product);
//! let invoice = storefront.checkout(DEFAULT_PAYMENT_METHOD)?;
//! storefront.shutdown().await;
//! ```

pub mod cart;
pub mod config;
pub mod error;
pub mod orders;
pub mod persisted;
pub mod session;
pub mod storefront;
pub mod wishlist;
pub mod writer;

use tracing_subscriber::EnvFilter;

pub use cart::CartStore;
pub use config::StorefrontConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use orders::OrderStore;
pub use persisted::LoadPhase;
pub use session::SessionStore;
pub use storefront::{Storefront, DEFAULT_PAYMENT_METHOD};
pub use wishlist::WishlistStore;
pub use writer::{StorageWriter, WriterHandle};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=nexa_state=trace` - Trace for this crate only
/// - Default: `info,nexa=debug,sqlx=warn`
///
/// Calling it again after a subscriber is installed does nothing.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nexa=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
