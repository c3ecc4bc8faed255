//! Placed orders.
//!
//! Orders live under two keys: the full history (newest first) read by the
//! order-history page, and the single latest order read by the confirmation
//! page. Clearing the history leaves the latest order in place.

use std::sync::Arc;

use tracing::instrument;

use maysa_core::OrderSummary;
use maysa_core::digits;
use maysa_core::types::order::ORDER_NUMBER_PREFIX;

use crate::storage::{KeyValueStore, Persisted, keys};

/// Order history and the most recent order.
#[derive(Debug)]
pub struct OrderHistory {
    orders: Vec<OrderSummary>,
    last_order: Option<OrderSummary>,
    orders_bridge: Persisted<Vec<OrderSummary>>,
    last_order_bridge: Persisted<Option<OrderSummary>>,
}

impl OrderHistory {
    /// Create an empty history that has not read storage yet.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            orders: Vec::new(),
            last_order: None,
            orders_bridge: Persisted::new(store.clone(), keys::ORDERS),
            last_order_bridge: Persisted::new(store, keys::LAST_ORDER),
        }
    }

    /// Create a history and load it from storage.
    #[must_use]
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let mut history = Self::new(store);
        history.hydrate();
        history
    }

    /// Replace the in-memory orders with the stored ones.
    pub fn hydrate(&mut self) {
        self.orders = self.orders_bridge.hydrate();
        self.last_order = self.last_order_bridge.hydrate();
    }

    /// Record a newly placed order.
    #[instrument(skip(self, order), fields(order_number = %order.order_number))]
    pub fn record(&mut self, order: OrderSummary) {
        self.orders.insert(0, order.clone());
        self.last_order = Some(order);
        self.orders_bridge.commit(&self.orders);
        self.last_order_bridge.commit(&self.last_order);
    }

    /// Look up an order by its customer-facing number.
    ///
    /// Matching ignores case, surrounding whitespace, and the `MYS-` prefix,
    /// and accepts Persian digits.
    #[must_use]
    pub fn find(&self, order_number: &str) -> Option<&OrderSummary> {
        let wanted = normalize_order_number(order_number);
        self.orders
            .iter()
            .find(|o| normalize_order_number(&o.order_number) == wanted)
    }

    /// Remove every order from the history.
    #[instrument(skip(self))]
    pub fn clear_history(&mut self) {
        self.orders.clear();
        self.orders_bridge.commit(&self.orders);
    }

    /// Orders, newest first.
    #[must_use]
    pub fn orders(&self) -> &[OrderSummary] {
        &self.orders
    }

    #[must_use]
    pub const fn last_order(&self) -> Option<&OrderSummary> {
        self.last_order.as_ref()
    }
}

fn normalize_order_number(raw: &str) -> String {
    let upper = digits::to_western(raw.trim()).to_uppercase();
    upper
        .strip_prefix(ORDER_NUMBER_PREFIX)
        .map_or_else(|| upper.clone(), str::to_owned)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use maysa_core::{Address, AddressDraft, AddressId, CartItem, Price};

    use super::*;
    use crate::commerce::test_support::{product, store};

    fn order(product_id: i32) -> OrderSummary {
        OrderSummary::new(
            vec![CartItem {
                product: product(product_id, 100_000),
                quantity: 1,
            }],
            Price::ZERO,
            Address::from_draft(AddressId::generate(), AddressDraft::default()),
            Utc::now(),
        )
    }

    #[test]
    fn test_record_prepends_and_sets_last() {
        let mut history = OrderHistory::open(store());
        let first = order(1);
        let second = order(2);

        history.record(first.clone());
        history.record(second.clone());

        assert_eq!(history.orders(), &[second.clone(), first]);
        assert_eq!(history.last_order(), Some(&second));
    }

    #[test]
    fn test_find_normalizes_input() {
        let mut history = OrderHistory::open(store());
        let placed = order(1);
        let number = placed.order_number.clone();
        history.record(placed);

        assert!(history.find(&number).is_some());
        assert!(history.find(&number.to_lowercase()).is_some());
        assert!(history.find(&format!("  {}  ", &number[4..])).is_some());
        assert!(history.find(&digits::to_persian(&number)).is_some());
        assert!(history.find("MYS-00000000").is_none());
    }

    #[test]
    fn test_clear_keeps_last_order() {
        let store = store();
        let mut history = OrderHistory::open(store.clone());
        history.record(order(1));

        history.clear_history();

        let reloaded = OrderHistory::open(store);
        assert!(reloaded.orders().is_empty());
        assert!(reloaded.last_order().is_some());
    }

    #[test]
    fn test_persists_and_reloads() {
        let store = store();
        let mut history = OrderHistory::open(store.clone());
        history.record(order(1));
        history.record(order(2));

        let reloaded = OrderHistory::open(store);
        assert_eq!(reloaded.orders(), history.orders());
        assert_eq!(reloaded.last_order(), history.last_order());
    }
}
