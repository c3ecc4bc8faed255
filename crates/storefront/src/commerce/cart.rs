//! Shopping cart.

use std::sync::Arc;

use tracing::instrument;

use maysa_core::{CartItem, Price, Product, ProductId};

use crate::notify::{Notifier, Tone};
use crate::storage::{KeyValueStore, Persisted, keys};

/// Cart lines keyed by product, at most one line per product.
pub struct Cart {
    items: Vec<CartItem>,
    bridge: Persisted<Vec<CartItem>>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for Cart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cart")
            .field("items", &self.items.len())
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}

impl Cart {
    /// Create an empty cart that has not read storage yet.
    ///
    /// Changes made before [`Cart::hydrate`] are not written.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            items: Vec::new(),
            bridge: Persisted::new(store, keys::CART),
            notifier,
        }
    }

    /// Create a cart and load it from storage.
    #[must_use]
    pub fn open(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        let mut cart = Self::new(store, notifier);
        cart.hydrate();
        cart
    }

    /// Replace the in-memory lines with the stored ones.
    ///
    /// Stored lines with a zero quantity are dropped and repeated lines for
    /// one product are merged into the first, quantities summed.
    pub fn hydrate(&mut self) {
        let stored: Vec<CartItem> = self.bridge.hydrate();
        let mut items: Vec<CartItem> = Vec::with_capacity(stored.len());
        for line in stored.into_iter().filter(|line| line.quantity > 0) {
            match items.iter_mut().find(|i| i.product.id == line.product.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(line.quantity);
                }
                None => items.push(line),
            }
        }
        self.items = items;
        tracing::debug!(lines = self.items.len(), "Cart hydrated");
    }

    /// Add `quantity` units of `product`.
    ///
    /// An existing line for the same product has its quantity increased;
    /// otherwise a new line holding a snapshot of `product` is appended.
    /// Adding zero units does nothing.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity,
            });
        }

        self.bridge.commit(&self.items);
        self.notifier.notify(
            &format!("«{}» به سبد خرید اضافه شد", product.name),
            Tone::Success,
            Some("🛒"),
        );
    }

    /// Add a single unit of `product`.
    pub fn add_one(&mut self, product: &Product) {
        self.add_to_cart(product, 1);
    }

    /// Remove the line for `product_id`, if any.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        let before = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        if self.items.len() != before {
            self.bridge.commit(&self.items);
        }
    }

    /// Set the quantity of the line for `product_id` exactly.
    ///
    /// A quantity of zero or less removes the line. Unknown products are ignored.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(line) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            line.quantity = quantity;
            self.bridge.commit(&self.items);
        }
    }

    /// Remove every line.
    #[instrument(skip(self))]
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.bridge.commit(&self.items);
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line for `product_id`.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of snapshot unit price times quantity.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Amount saved against original prices across all lines.
    #[must_use]
    pub fn total_savings(&self) -> Price {
        self.items.iter().map(CartItem::line_savings).sum()
    }
}
