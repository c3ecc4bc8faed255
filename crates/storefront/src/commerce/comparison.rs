//! Product comparison list.
//!
//! Column order in the comparison table follows insertion order, so entries
//! are appended and never re-sorted.

use std::sync::Arc;

use tracing::instrument;

use maysa_core::{Product, ProductId};

use crate::notify::{Notifier, Tone};
use crate::storage::{KeyValueStore, Persisted, keys};

/// Result of [`Comparison::add_to_comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was appended.
    Added,
    /// The product was already being compared; nothing changed.
    AlreadyPresent,
    /// The list already holds [`Comparison::MAX_ITEMS`] products.
    Full,
}

/// Up to four products compared side by side.
pub struct Comparison {
    items: Vec<Product>,
    bridge: Persisted<Vec<Product>>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Comparison")
            .field("items", &self.items.len())
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}

impl Comparison {
    /// Maximum number of products compared at once.
    pub const MAX_ITEMS: usize = 4;

    /// Create an empty comparison list that has not read storage yet.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            items: Vec::new(),
            bridge: Persisted::new(store, keys::COMPARISON),
            notifier,
        }
    }

    /// Create a comparison list and load it from storage.
    #[must_use]
    pub fn open(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        let mut comparison = Self::new(store, notifier);
        comparison.hydrate();
        comparison
    }

    /// Replace the in-memory entries with the stored ones.
    ///
    /// Repeated stored entries keep only the first, and a stored list longer
    /// than [`Comparison::MAX_ITEMS`] is cut down to the first entries.
    pub fn hydrate(&mut self) {
        let mut items = super::dedupe_products(self.bridge.hydrate());
        items.truncate(Self::MAX_ITEMS);
        self.items = items;
    }

    /// Append `product` unless the list is full or already holds it.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_comparison(&mut self, product: &Product) -> AddOutcome {
        if !self.can_add_more() {
            self.notifier.notify(
                "حداکثر ۴ محصول را می‌توانید مقایسه کنید",
                Tone::Warning,
                None,
            );
            return AddOutcome::Full;
        }
        if self.is_in_comparison(product.id) {
            return AddOutcome::AlreadyPresent;
        }

        self.items.push(product.clone());
        self.bridge.commit(&self.items);
        AddOutcome::Added
    }

    #[instrument(skip(self))]
    pub fn remove_from_comparison(&mut self, product_id: ProductId) {
        let before = self.items.len();
        self.items.retain(|p| p.id != product_id);
        if self.items.len() != before {
            self.bridge.commit(&self.items);
        }
    }

    #[instrument(skip(self))]
    pub fn clear_comparison(&mut self) {
        self.items.clear();
        self.bridge.commit(&self.items);
    }

    /// Whether another product fits.
    #[must_use]
    pub fn can_add_more(&self) -> bool {
        self.items.len() < Self::MAX_ITEMS
    }

    #[must_use]
    pub fn is_in_comparison(&self, product_id: ProductId) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Compared products in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }
}
