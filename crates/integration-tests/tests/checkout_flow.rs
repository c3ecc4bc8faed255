//! End-to-end ordering: cart, address, checkout, and order lookup.

#![allow(clippy::unwrap_used)]

use maysa_core::{OrderStatus, Price};
use maysa_integration_tests::{TestContext, valid_address};
use maysa_storefront::checkout::CheckoutError;
use maysa_storefront::notify::Tone;
use maysa_storefront::storage::keys;

#[test]
fn test_checkout_records_order_and_clears_cart() {
    let ctx = TestContext::new();
    let order_number = {
        let mut shop = ctx.open();
        shop.addresses_mut().add_address(valid_address("خانه"));
        let oil = shop.catalog().find_by_slug("argan-hair-oil").unwrap();
        shop.cart_mut().add_to_cart(&oil, 1);

        let order = shop.checkout().unwrap();
        assert_eq!(order.subtotal, Price::toman(480_000));
        assert_eq!(order.shipping_cost, Price::toman(50_000));
        assert_eq!(order.total, Price::toman(530_000));
        assert_eq!(order.status, OrderStatus::Pending);
        order.order_number
    };

    assert!(ctx.read_key(keys::ORDERS).is_some());
    assert!(ctx.read_key(keys::LAST_ORDER).is_some());

    let shop = ctx.open();
    assert!(shop.cart().is_empty());
    let found = shop.orders().find(&order_number.to_lowercase()).unwrap();
    assert_eq!(found.order_number, order_number);
    assert_eq!(
        shop.orders().last_order().unwrap().order_number,
        order_number
    );
}

#[test]
fn test_checkout_over_threshold_ships_free() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    shop.addresses_mut().add_address(valid_address("خانه"));
    let serum = shop.catalog().find_by_slug("rose-face-serum").unwrap();
    shop.cart_mut().add_to_cart(&serum, 1);

    let order = shop.checkout().unwrap();
    assert!(order.shipping_cost.is_zero());
    assert_eq!(order.total, order.subtotal);
}

#[test]
fn test_checkout_without_address_keeps_cart() {
    let ctx = TestContext::new();
    let mut shop = ctx.open();
    let gel = shop.catalog().find_by_slug("aloe-gel").unwrap();
    shop.cart_mut().add_to_cart(&gel, 2);
    let _ = ctx.notifier.take();

    let err = shop.checkout().unwrap_err();
    assert!(matches!(err, CheckoutError::MissingAddress));
    assert_eq!(ctx.notifier.last().unwrap().tone, Tone::Error);

    let shop = ctx.open();
    assert_eq!(shop.cart().total_items(), 2);
    assert!(shop.orders().orders().is_empty());
}

#[test]
fn test_clearing_history_keeps_last_order() {
    let ctx = TestContext::new();
    {
        let mut shop = ctx.open();
        shop.addresses_mut().add_address(valid_address("خانه"));
        let soap = shop.catalog().find_by_slug("saffron-soap").unwrap();
        shop.cart_mut().add_to_cart(&soap, 1);
        shop.checkout().unwrap();
        shop.orders_mut().clear_history();
    }

    let shop = ctx.open();
    assert!(shop.orders().orders().is_empty());
    assert!(shop.orders().last_order().is_some());
}
