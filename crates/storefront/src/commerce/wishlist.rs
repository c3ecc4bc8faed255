//! Wishlist of saved products.

use std::sync::Arc;

use tracing::instrument;

use maysa_core::{Product, ProductId};

use super::Cart;
use crate::notify::{Notifier, Tone};
use crate::storage::{KeyValueStore, Persisted, keys};

/// Saved products, at most one entry per product.
pub struct Wishlist {
    items: Vec<Product>,
    bridge: Persisted<Vec<Product>>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for Wishlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wishlist")
            .field("items", &self.items.len())
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}

impl Wishlist {
    /// Create an empty wishlist that has not read storage yet.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            items: Vec::new(),
            bridge: Persisted::new(store, keys::WISHLIST),
            notifier,
        }
    }

    /// Create a wishlist and load it from storage.
    #[must_use]
    pub fn open(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        let mut wishlist = Self::new(store, notifier);
        wishlist.hydrate();
        wishlist
    }

    /// Replace the in-memory entries with the stored ones.
    ///
    /// Repeated stored entries for one product keep only the first.
    pub fn hydrate(&mut self) {
        self.items = super::dedupe_products(self.bridge.hydrate());
    }

    /// Save `product`. Saving a product twice only shows a notice.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_wishlist(&mut self, product: &Product) {
        if self.is_in_wishlist(product.id) {
            self.notifier.notify(
                "این محصول قبلاً در لیست علاقه‌مندی‌ها وجود دارد",
                Tone::Info,
                None,
            );
            return;
        }

        self.items.push(product.clone());
        self.bridge.commit(&self.items);
        self.notifier.notify(
            &format!("«{}» به علاقه‌مندی‌ها اضافه شد", product.name),
            Tone::Success,
            Some("❤️"),
        );
    }

    /// Remove the entry for `product_id`. Unknown products are ignored silently.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, product_id: ProductId) {
        let Some(pos) = self.items.iter().position(|p| p.id == product_id) else {
            return;
        };

        let removed = self.items.remove(pos);
        self.bridge.commit(&self.items);
        self.notifier.notify(
            &format!("«{}» از علاقه‌مندی‌ها حذف شد", removed.name),
            Tone::Success,
            None,
        );
    }

    /// Add `product` if absent, remove it if present.
    ///
    /// Returns whether the product is in the wishlist afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.is_in_wishlist(product.id) {
            self.remove_from_wishlist(product.id);
            false
        } else {
            self.add_to_wishlist(product);
            true
        }
    }

    /// Move a saved product into `cart` with a quantity of one.
    ///
    /// Returns `false` if the product is not in the wishlist.
    pub fn move_to_cart(&mut self, product_id: ProductId, cart: &mut Cart) -> bool {
        let Some(product) = self.items.iter().find(|p| p.id == product_id).cloned() else {
            return false;
        };
        cart.add_one(&product);
        self.remove_from_wishlist(product_id);
        true
    }

    /// Remove every entry.
    #[instrument(skip(self))]
    pub fn clear_wishlist(&mut self) {
        self.items.clear();
        self.bridge.commit(&self.items);
        self.notifier
            .notify("لیست علاقه‌مندی‌ها پاک شد", Tone::Success, None);
    }

    #[must_use]
    pub fn is_in_wishlist(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Saved products in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }
}
