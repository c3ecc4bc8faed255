//! Checkout and order history commands.

use maysa_core::OrderSummary;
use maysa_storefront::Storefront;
use maysa_storefront::format::{format_date_persian, format_toman, to_persian_numbers};

use super::CommandError;

/// Place an order and print its summary.
pub fn checkout(shop: &mut Storefront) -> Result<(), maysa_storefront::AppError> {
    let order = shop.checkout()?;
    print_order(&order);
    Ok(())
}

pub fn list(shop: &Storefront) {
    let orders = shop.orders().orders();
    if orders.is_empty() {
        println!("سفارشی ثبت نشده است");
        return;
    }
    for order in orders {
        println!(
            "{}  {}  {}  {}",
            order.order_number,
            format_date_persian(&order.created_at),
            format_toman(order.total),
            order.status.label_fa()
        );
    }
}

pub fn last(shop: &Storefront) -> Result<(), CommandError> {
    let order = shop
        .orders()
        .last_order()
        .ok_or_else(|| CommandError::OrderNotFound("last order".to_owned()))?;
    print_order(order);
    Ok(())
}

pub fn track(shop: &Storefront, number: &str) -> Result<(), CommandError> {
    let order = shop
        .orders()
        .find(number)
        .ok_or_else(|| CommandError::OrderNotFound(number.to_owned()))?;
    print_order(order);
    Ok(())
}

fn print_order(order: &OrderSummary) {
    println!("شماره سفارش: {}", order.order_number);
    println!("تاریخ: {}", format_date_persian(&order.created_at));
    println!("وضعیت: {}", order.status.label_fa());
    for item in &order.items {
        println!(
            "  {} × {} = {}",
            to_persian_numbers(item.quantity),
            item.product.name,
            format_toman(item.line_total())
        );
    }
    println!("جمع اقلام: {}", format_toman(order.subtotal));
    if order.shipping_cost.is_zero() {
        println!("هزینه ارسال: رایگان");
    } else {
        println!("هزینه ارسال: {}", format_toman(order.shipping_cost));
    }
    println!("مبلغ قابل پرداخت: {}", format_toman(order.total));
    println!("ارسال به: {} - {}", order.address.full_name, order.address.one_line());
}
