//! Order summary type.
//!
//! An order summary is what the confirmation page and the order history view
//! read back from local storage. It carries its own copy of the cart lines
//! and the shipping address, so it stays readable after the cart is cleared
//! or the address is edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::cart::CartItem;
use super::id::OrderId;
use super::price::Price;
use super::status::OrderStatus;

/// Prefix of human-readable order numbers.
pub const ORDER_NUMBER_PREFIX: &str = "MYS-";

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    /// Short code the customer quotes for tracking (e.g., `MYS-3F2A9C01`).
    pub order_number: String,
    pub items: Vec<CartItem>,
    pub subtotal: Price,
    pub shipping_cost: Price,
    pub total: Price,
    pub address: Address,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl OrderSummary {
    /// Build a pending order from cart lines, computing the totals.
    #[must_use]
    pub fn new(
        items: Vec<CartItem>,
        shipping_cost: Price,
        address: Address,
        created_at: DateTime<Utc>,
    ) -> Self {
        let id = OrderId::generate();
        let subtotal: Price = items.iter().map(CartItem::line_total).sum();
        Self {
            id,
            order_number: order_number_for(&id),
            items,
            subtotal,
            shipping_cost,
            total: subtotal + shipping_cost,
            address,
            status: OrderStatus::Pending,
            created_at,
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |acc, item| acc.saturating_add(item.quantity))
    }
}

/// Derive the customer-facing order number from an order ID.
#[must_use]
pub fn order_number_for(id: &OrderId) -> String {
    let simple = id.as_uuid().simple().to_string().to_uppercase();
    let short: String = simple.chars().take(8).collect();
    format!("{ORDER_NUMBER_PREFIX}{short}")
}
