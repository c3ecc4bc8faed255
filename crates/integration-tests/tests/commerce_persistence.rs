//! Containers written by one storefront are read back by the next.

#![allow(clippy::unwrap_used)]

use maysa_core::ProductId;
use maysa_integration_tests::{TestContext, valid_address};
use maysa_storefront::commerce::AddOutcome;
use maysa_storefront::storage::keys;

#[test]
fn test_cart_survives_restart() {
    let ctx = TestContext::new();
    {
        let mut shop = ctx.open();
        let serum = shop.catalog().find_by_slug("rose-face-serum").unwrap();
        let soap = shop.catalog().find_by_slug("saffron-soap").unwrap();
        shop.cart_mut().add_to_cart(&serum, 1);
        shop.cart_mut().add_to_cart(&soap, 3);
        shop.cart_mut().add_one(&serum);
    }

    let shop = ctx.open();
    let cart = shop.cart();
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 2);
    assert_eq!(cart.total_price().to_string(), "2785000");
    assert_eq!(cart.total_savings().to_string(), "500000");
}

#[test]
fn test_cart_file_layout() {
    let ctx = TestContext::new();
    {
        let mut shop = ctx.open();
        let gel = shop.catalog().find_by_slug("aloe-gel").unwrap();
        shop.cart_mut().add_to_cart(&gel, 2);
    }

    let raw = ctx.read_key(keys::CART).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["quantity"], 2);
    assert_eq!(value[0]["product"]["slug"], "aloe-gel");
    assert_eq!(value[0]["product"]["price"], 220_000);
    assert_eq!(value[0]["product"]["inStock"], true);
}

#[test]
fn test_lists_survive_restart() {
    let ctx = TestContext::new();
    {
        let mut shop = ctx.open();
        for slug in ["aloe-gel", "saffron-soap", "green-tea-toner"] {
            shop.view_product(slug).unwrap();
        }
        let oil = shop.catalog().find_by_slug("argan-hair-oil").unwrap();
        shop.wishlist_mut().add_to_wishlist(&oil);
        shop.comparison_mut().add_to_comparison(&oil);
    }

    let shop = ctx.open();
    let recent: Vec<&str> = shop
        .recently_viewed()
        .items()
        .iter()
        .map(|p| p.slug.as_str())
        .collect();
    assert_eq!(recent, ["green-tea-toner", "saffron-soap", "aloe-gel"]);
    assert!(shop.wishlist().is_in_wishlist(ProductId::new(2)));
    assert!(shop.comparison().is_in_comparison(ProductId::new(2)));
}

#[test]
fn test_comparison_limit_across_restart() {
    let ctx = TestContext::new();
    let products = maysa_integration_tests::sample_products();
    {
        let mut shop = ctx.open();
        for product in &products[..4] {
            assert_eq!(
                shop.comparison_mut().add_to_comparison(product),
                AddOutcome::Added
            );
        }
    }

    let mut shop = ctx.open();
    assert!(!shop.comparison().can_add_more());
    assert_eq!(
        shop.comparison_mut().add_to_comparison(&products[4]),
        AddOutcome::Full
    );
    assert_eq!(shop.comparison().items().len(), 4);
}

#[test]
fn test_address_default_survives_restart() {
    let ctx = TestContext::new();
    let work_id = {
        let mut shop = ctx.open();
        shop.addresses_mut().add_address(valid_address("خانه"));
        let work = shop.addresses_mut().add_address(valid_address("محل کار"));
        shop.addresses_mut().set_default_address(work);
        work
    };

    let mut shop = ctx.open();
    assert_eq!(shop.addresses().get_default_address().unwrap().id, work_id);

    shop.addresses_mut().delete_address(work_id);
    let shop = ctx.open();
    let remaining = shop.addresses().addresses();
    assert_eq!(remaining.len(), 1);
    assert!(remaining[0].is_default);
}

#[test]
fn test_config_and_direct_store_agree() {
    let ctx = TestContext::new();
    {
        let mut shop = ctx.open_with_store();
        let toner = shop.catalog().find_by_slug("green-tea-toner").unwrap();
        shop.wishlist_mut().add_to_wishlist(&toner);
    }

    let shop = ctx.open();
    assert_eq!(shop.wishlist().total_items(), 1);
}
