//! Cart commands.

use maysa_storefront::Storefront;
use maysa_storefront::format::{format_toman, to_persian_numbers};

use super::{CommandError, product_by_slug, product_line};

/// Print every cart line and the cart totals.
pub fn show(shop: &Storefront) {
    let cart = shop.cart();
    if cart.is_empty() {
        println!("سبد خرید خالی است");
        return;
    }

    for item in cart.items() {
        println!(
            "{} × {} = {}",
            to_persian_numbers(item.quantity),
            product_line(&item.product),
            format_toman(item.line_total())
        );
    }
    println!("تعداد اقلام: {}", to_persian_numbers(cart.total_items()));
    if !cart.total_savings().is_zero() {
        println!("سود شما از خرید: {}", format_toman(cart.total_savings()));
    }

    let shipping = shop.shipping().cost_for(cart.total_price());
    println!("جمع کل: {}", format_toman(cart.total_price()));
    if shipping.is_zero() {
        println!("هزینه ارسال: رایگان");
    } else {
        println!("هزینه ارسال: {}", format_toman(shipping));
    }
}

pub fn add(shop: &mut Storefront, slug: &str, quantity: u32) -> Result<(), CommandError> {
    let product = product_by_slug(shop, slug)?;
    shop.cart_mut().add_to_cart(&product, quantity);
    Ok(())
}

pub fn remove(shop: &mut Storefront, slug: &str) -> Result<(), CommandError> {
    let product = product_by_slug(shop, slug)?;
    shop.cart_mut().remove_from_cart(product.id);
    Ok(())
}

pub fn set(shop: &mut Storefront, slug: &str, quantity: i64) -> Result<(), CommandError> {
    let product = product_by_slug(shop, slug)?;
    shop.cart_mut().update_quantity(product.id, quantity);
    Ok(())
}
