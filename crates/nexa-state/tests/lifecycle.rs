//! End-to-end storefront lifecycle: persistence across restarts, the load
//! gate, logout and checkout.

use chrono::Utc;
use nexa_core::{auth, Catalog, Money, Product, Role};
use nexa_state::{
    CartStore, ErrorCode, Storefront, StorefrontConfig, StorageWriter, DEFAULT_PAYMENT_METHOD,
};
use nexa_store::{LocalStorage, StorageConfig, StorageKey};

fn product(id: &str, title: &str, price_major: i64) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        brand: "Sony".to_string(),
        price: Money::from_major(price_major),
        original_price: Money::from_major(price_major + 1_000),
        discount: 0,
        images: vec![format!("https://img.example/{}.jpg", id)],
        category: "Audio".to_string(),
        sizes: vec![],
        description: String::new(),
        stock: 10,
        rating: 4.4,
        review_count: 2_100,
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        product("1", "WH-1000XM5", 26_990),
        product("2", "WF-1000XM5", 19_990),
        product("3", "SRS-XB100", 3_990),
    ])
}

async fn memory_storage() -> LocalStorage {
    LocalStorage::open(StorageConfig::in_memory()).await.unwrap()
}

async fn launch(storage: &LocalStorage) -> Storefront {
    Storefront::with_storage(StorefrontConfig::default(), storage.clone(), catalog()).await
}

#[tokio::test]
async fn cart_rules_hold_across_mutations() {
    let store = launch(&memory_storage().await).await;
    let headphones = store.product("1").unwrap();
    let earbuds = store.product("2").unwrap();
    let speaker = store.product("3").unwrap();

    store.cart().add(&headphones);
    store.cart().add(&headphones);
    assert_eq!(store.cart().entries().len(), 1);
    assert_eq!(store.cart().quantity_of("1"), Some(2));

    store.cart().add(&earbuds);
    store.cart().add(&speaker);
    store.cart().set_quantity("3", 4);
    store.cart().set_quantity("2", 0);
    store.cart().remove("404");

    let expected = headphones.price * 2 + speaker.price * 4;
    assert_eq!(store.cart().total(), expected);
    assert_eq!(store.cart().item_count(), 6);
    assert!(!store.cart().contains("2"));
}

#[tokio::test]
async fn state_survives_restart() {
    let storage = memory_storage().await;

    let first = launch(&storage).await;
    let headphones = first.product("1").unwrap();
    let speaker = first.product("3").unwrap();
    first.cart().add(&headphones);
    first.wishlist().toggle(&speaker);
    first.cart().add(&speaker);
    let invoice = first.checkout(DEFAULT_PAYMENT_METHOD).unwrap();
    first.cart().add(&speaker);
    first.flush().await;

    let second = launch(&storage).await;

    assert_eq!(second.cart().entries(), first.cart().entries());
    assert_eq!(second.cart().quantity_of("3"), Some(1));
    assert!(second.wishlist().contains("3"));
    assert_eq!(second.orders().orders(), vec![invoice]);
    // sessions are never restored
    assert!(!second.session().is_authenticated());
}

#[tokio::test]
async fn no_write_before_load() {
    let storage = memory_storage().await;
    storage
        .set(StorageKey::CartItems, r#"[{"product":{"id":"1","title":"WH-1000XM5","brand":"Sony","price":2699000,"originalPrice":2799000,"discount":4,"images":[],"category":"Audio","sizes":[],"description":"","stock":10,"rating":4.4,"reviewCount":2100},"quantity":3}]"#)
        .await
        .unwrap();

    let writer = StorageWriter::spawn(storage.clone());
    let cart = CartStore::new(writer.clone());

    cart.add(&product("2", "WF-1000XM5", 19_990));
    cart.clear();
    writer.flush().await;

    let before = storage.get(StorageKey::CartItems).await.unwrap().unwrap();
    assert!(before.contains(r#""quantity":3"#));

    cart.load(&storage).await;
    assert!(cart.is_loaded());
    assert_eq!(cart.quantity_of("1"), Some(3));
    assert!(!cart.contains("2"));
}

#[tokio::test]
async fn corrupt_blobs_load_empty() {
    let storage = memory_storage().await;
    storage.set(StorageKey::CartItems, "not json").await.unwrap();
    storage.set(StorageKey::WishlistItems, "{\"a\":1}").await.unwrap();
    storage.set(StorageKey::OrderHistory, "[{\"orderId\":").await.unwrap();

    let store = launch(&storage).await;

    assert!(store.cart().is_loaded());
    assert!(store.cart().is_empty());
    assert_eq!(store.wishlist().count(), 0);
    assert_eq!(store.orders().count(), 0);

    // the next mutation overwrites the bad blob
    store.cart().add(&store.product("3").unwrap());
    store.flush().await;
    let raw = storage.get(StorageKey::CartItems).await.unwrap().unwrap();
    assert!(raw.starts_with('['));
}

#[tokio::test]
async fn failed_write_keeps_memory() {
    let storage = memory_storage().await;
    let store = launch(&storage).await;
    let speaker = store.product("3").unwrap();

    storage.close().await;
    store.cart().add(&speaker);
    store.wishlist().toggle(&speaker);
    store.flush().await;

    assert_eq!(store.cart().quantity_of("3"), Some(1));
    assert!(store.wishlist().contains("3"));
}

#[tokio::test]
async fn wishlist_toggle_twice_is_empty() {
    let store = launch(&memory_storage().await).await;
    let earbuds = store.product("2").unwrap();

    store.wishlist().toggle(&earbuds);
    store.wishlist().toggle(&earbuds);

    assert_eq!(store.wishlist().count(), 0);
}

#[tokio::test]
async fn orders_newest_first() {
    let store = launch(&memory_storage().await).await;

    store.cart().add(&store.product("1").unwrap());
    let first = store.checkout(DEFAULT_PAYMENT_METHOD).unwrap();
    store.cart().add(&store.product("2").unwrap());
    let second = store.checkout(DEFAULT_PAYMENT_METHOD).unwrap();

    let ids: Vec<String> = store.orders().orders().into_iter().map(|o| o.order_id).collect();
    assert_eq!(ids, [second.order_id.clone(), first.order_id.clone()]);
    assert_ne!(first.order_id, second.order_id);
    assert_eq!(store.orders().total_spent(), first.total_amount + second.total_amount);
}

#[tokio::test]
async fn login_rules() {
    let store = launch(&memory_storage().await).await;

    let admin = store.login(auth::ADMIN_EMAIL, auth::ADMIN_PASSWORD).unwrap();
    assert_eq!(admin.user.role, Role::Admin);

    let err = store.login(auth::ADMIN_EMAIL, "wrong").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidCredentials);

    let user = store.login("shopper@example.com", "whatever").unwrap();
    assert_eq!(user.user.role, Role::User);
}

#[tokio::test]
async fn logout_then_restart_is_empty() {
    let storage = memory_storage().await;

    let first = launch(&storage).await;
    first.login("shopper@example.com", "pw").unwrap();
    let headphones = first.product("1").unwrap();
    first.wishlist().toggle(&headphones);
    first.cart().add(&headphones);
    first.checkout(DEFAULT_PAYMENT_METHOD).unwrap();
    first.cart().add(&headphones);
    first.logout();
    first.flush().await;

    assert!(first.cart().is_empty());
    assert_eq!(first.wishlist().count(), 0);
    assert_eq!(first.orders().count(), 0);

    for key in StorageKey::ALL {
        assert_eq!(storage.get(key).await.unwrap(), None, "{} survived logout", key);
    }

    let second = launch(&storage).await;
    assert!(second.cart().is_empty());
    assert_eq!(second.wishlist().count(), 0);
    assert_eq!(second.orders().count(), 0);
}

#[tokio::test]
async fn checkout_snapshots_prices() {
    let store = launch(&memory_storage().await).await;
    let mut headphones = store.product("1").unwrap();

    store.cart().add(&headphones);
    store.cart().add(&headphones);
    let invoice = store.checkout(DEFAULT_PAYMENT_METHOD).unwrap();

    assert!(store.cart().is_empty());
    assert_eq!(invoice.subtotal, Money::from_major(53_980));
    assert_eq!(invoice.delivery, Money::zero());
    assert_eq!(invoice.total_amount, invoice.subtotal);
    assert_eq!(invoice.items[0].unit_price, Money::from_major(26_990));
    assert_eq!(invoice.items[0].title, "WH-1000XM5");

    // later price changes do not touch the stored invoice
    headphones.price = Money::from_major(1);
    store.cart().add(&headphones);
    let stored = store.orders().get_order(&invoice.order_id).unwrap();
    assert_eq!(stored.items[0].unit_price, Money::from_major(26_990));
    assert_eq!(stored.total_amount, Money::from_major(53_980));
}

#[tokio::test]
async fn open_on_disk_and_reopen() {
    let dir = std::env::temp_dir().join(format!(
        "nexa-lifecycle-{}-{}",
        std::process::id(),
        Utc::now().timestamp_micros()
    ));
    let config = StorefrontConfig::default().with_storage_path(dir.join("storefront.db"));

    let first = Storefront::open(config.clone(), catalog()).await.unwrap();
    first.cart().add(&first.product("2").unwrap());
    first.shutdown().await;

    let second = Storefront::open(config, catalog()).await.unwrap();
    assert_eq!(second.cart().quantity_of("2"), Some(1));
    second.shutdown().await;

    let _ = std::fs::remove_dir_all(&dir);
}
