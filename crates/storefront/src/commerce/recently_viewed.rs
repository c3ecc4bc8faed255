//! Recently viewed products, most recent first.

use std::sync::Arc;

use tracing::instrument;

use maysa_core::Product;

use crate::storage::{KeyValueStore, Persisted, keys};

/// The last [`RecentlyViewed::MAX_ITEMS`] distinct products viewed.
#[derive(Debug)]
pub struct RecentlyViewed {
    items: Vec<Product>,
    bridge: Persisted<Vec<Product>>,
}

impl RecentlyViewed {
    /// Number of products remembered.
    pub const MAX_ITEMS: usize = 12;

    /// Create an empty history that has not read storage yet.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            items: Vec::new(),
            bridge: Persisted::new(store, keys::RECENTLY_VIEWED),
        }
    }

    /// Create a history and load it from storage.
    #[must_use]
    pub fn open(store: Arc<dyn KeyValueStore>) -> Self {
        let mut recent = Self::new(store);
        recent.hydrate();
        recent
    }

    /// Replace the in-memory entries with the stored ones.
    ///
    /// Repeated stored entries keep only the first (most recent), and the
    /// list is cut down to [`RecentlyViewed::MAX_ITEMS`].
    pub fn hydrate(&mut self) {
        let mut items = super::dedupe_products(self.bridge.hydrate());
        items.truncate(Self::MAX_ITEMS);
        self.items = items;
    }

    /// Move `product` to the front, dropping the oldest entry past the limit.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_recently_viewed(&mut self, product: &Product) {
        self.items.retain(|p| p.id != product.id);
        self.items.insert(0, product.clone());
        self.items.truncate(Self::MAX_ITEMS);
        self.bridge.commit(&self.items);
    }

    #[instrument(skip(self))]
    pub fn clear_recently_viewed(&mut self) {
        self.items.clear();
        self.bridge.commit(&self.items);
    }

    /// Viewed products, most recent first.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }
}
