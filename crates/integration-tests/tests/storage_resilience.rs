//! Damaged or foreign storage never prevents the storefront from starting.

#![allow(clippy::unwrap_used)]

use maysa_integration_tests::TestContext;
use maysa_storefront::storage::keys;

#[test]
fn test_malformed_files_load_as_empty() {
    let ctx = TestContext::new();
    for key in keys::ALL {
        ctx.write_key(key, "{not json");
    }

    let shop = ctx.open();
    assert!(shop.cart().is_empty());
    assert!(shop.wishlist().items().is_empty());
    assert!(shop.comparison().items().is_empty());
    assert!(shop.addresses().is_empty());
    assert!(shop.recently_viewed().items().is_empty());
    assert!(shop.orders().orders().is_empty());
    assert!(shop.orders().last_order().is_none());
}

#[test]
fn test_malformed_file_is_not_rewritten_on_load() {
    let ctx = TestContext::new();
    ctx.write_key(keys::WISHLIST, "garbage");

    let _shop = ctx.open();
    assert_eq!(ctx.read_key(keys::WISHLIST).unwrap(), "garbage");
}

#[test]
fn test_first_mutation_replaces_malformed_file() {
    let ctx = TestContext::new();
    ctx.write_key(keys::CART, "[1, 2, 3]");

    let mut shop = ctx.open();
    let gel = shop.catalog().find_by_slug("aloe-gel").unwrap();
    shop.cart_mut().add_to_cart(&gel, 1);

    let raw = ctx.read_key(keys::CART).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn test_oversized_lists_are_trimmed() {
    let ctx = TestContext::new();
    let products = maysa_integration_tests::sample_products();
    ctx.write_key(keys::COMPARISON, &serde_json::to_string(&products).unwrap());

    let shop = ctx.open();
    assert_eq!(shop.comparison().items().len(), 4);
}

#[test]
fn test_missing_catalog_is_an_error() {
    let ctx = TestContext::new();
    let mut config = ctx.config();
    config.catalog_path = Some(ctx.storage_dir().join("nope.json"));

    let result = maysa_storefront::Storefront::from_config(&config, ctx.notifier.clone());
    assert!(matches!(
        result,
        Err(maysa_storefront::AppError::Catalog(_))
    ));
}
