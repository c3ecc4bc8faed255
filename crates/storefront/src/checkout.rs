//! Order placement.
//!
//! Prices are taken from the cart snapshots as they are; the catalog is not
//! consulted again at checkout.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::instrument;

use maysa_core::{AddressError, OrderSummary};

use crate::commerce::{AddressBook, Cart, OrderHistory};
use crate::config::ShippingConfig;
use crate::notify::{Notifier, Tone};

/// Reasons an order cannot be placed.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("No default shipping address")]
    MissingAddress,

    #[error("Shipping address is invalid: {0}")]
    InvalidAddress(#[from] AddressError),
}

impl CheckoutError {
    /// Message shown to the customer.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyCart => "سبد خرید شما خالی است",
            Self::MissingAddress => "لطفا یک آدرس برای ارسال انتخاب کنید",
            Self::InvalidAddress(_) => "اطلاعات آدرس کامل نیست",
        }
    }
}

/// Place an order for everything in `cart`, shipped to the default address.
///
/// On success the order is recorded in `orders`, the cart is emptied, and the
/// placed order is returned. On failure nothing changes and an error toast is
/// shown.
///
/// # Errors
///
/// Returns `CheckoutError` if the cart is empty, no default address exists,
/// or the default address fails validation.
#[instrument(skip_all, fields(lines = cart.items().len()))]
pub fn place_order(
    cart: &mut Cart,
    addresses: &AddressBook,
    orders: &mut OrderHistory,
    shipping: &ShippingConfig,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<OrderSummary, CheckoutError> {
    let result = build_order(cart, addresses, shipping, now);
    let order = match result {
        Ok(order) => order,
        Err(e) => {
            tracing::warn!(error = %e, "Checkout rejected");
            notifier.notify(e.user_message(), Tone::Error, None);
            return Err(e);
        }
    };

    orders.record(order.clone());
    cart.clear_cart();

    tracing::info!(
        order_number = %order.order_number,
        total = %order.total,
        "Order placed"
    );
    notifier.notify("سفارش شما با موفقیت ثبت شد", Tone::Success, Some("✅"));

    Ok(order)
}

fn build_order(
    cart: &Cart,
    addresses: &AddressBook,
    shipping: &ShippingConfig,
    now: DateTime<Utc>,
) -> Result<OrderSummary, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let address = addresses
        .get_default_address()
        .ok_or(CheckoutError::MissingAddress)?;
    address.to_draft().validate()?;

    let shipping_cost = shipping.cost_for(cart.total_price());
    Ok(OrderSummary::new(
        cart.items().to_vec(),
        shipping_cost,
        address.clone(),
        now,
    ))
}
