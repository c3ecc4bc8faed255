//! Storefront state shared across commands.
//!
//! [`Storefront`] is the composition root: it owns one of each container and
//! wires them to a single store and a single notifier. A container cannot be
//! obtained without both, so there is no "used outside its provider" failure
//! mode to handle at runtime.

use std::sync::Arc;

use chrono::Utc;

use maysa_core::{OrderSummary, Product, ProductId};

use crate::catalog::{Catalog, InMemoryCatalog};
use crate::checkout::{self, CheckoutError};
use crate::commerce::{AddressBook, Cart, Comparison, OrderHistory, RecentlyViewed, Wishlist};
use crate::config::{ShippingConfig, StorefrontConfig};
use crate::error::Result;
use crate::notify::Notifier;
use crate::storage::{FileStore, KeyValueStore};

/// Every commerce container, hydrated from one store.
pub struct Storefront {
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    catalog: Arc<dyn Catalog>,
    shipping: ShippingConfig,
    cart: Cart,
    wishlist: Wishlist,
    comparison: Comparison,
    addresses: AddressBook,
    recently_viewed: RecentlyViewed,
    orders: OrderHistory,
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("shipping", &self.shipping)
            .field("cart", &self.cart)
            .field("wishlist", &self.wishlist)
            .field("comparison", &self.comparison)
            .field("addresses", &self.addresses)
            .field("recently_viewed", &self.recently_viewed)
            .field("orders", &self.orders)
            .finish_non_exhaustive()
    }
}

impl Storefront {
    /// Build the storefront and hydrate every container from `store`.
    #[must_use]
    pub fn open(
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        catalog: Arc<dyn Catalog>,
        shipping: ShippingConfig,
    ) -> Self {
        let storefront = Self {
            cart: Cart::open(store.clone(), notifier.clone()),
            wishlist: Wishlist::open(store.clone(), notifier.clone()),
            comparison: Comparison::open(store.clone(), notifier.clone()),
            addresses: AddressBook::open(store.clone()),
            recently_viewed: RecentlyViewed::open(store.clone()),
            orders: OrderHistory::open(store.clone()),
            store,
            notifier,
            catalog,
            shipping,
        };
        tracing::debug!(
            cart_lines = storefront.cart.items().len(),
            wishlist = storefront.wishlist.total_items(),
            addresses = storefront.addresses.addresses().len(),
            orders = storefront.orders.orders().len(),
            "Storefront hydrated"
        );
        storefront
    }

    /// Build the storefront described by `config`: a file-backed store and,
    /// if configured, a catalog loaded from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage directory cannot be created or the
    /// catalog file cannot be loaded.
    pub fn from_config(config: &StorefrontConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        let store = FileStore::open(&config.storage_dir)?;
        let catalog = match &config.catalog_path {
            Some(path) => InMemoryCatalog::load(path)?,
            None => {
                tracing::warn!("MAYSA_CATALOG_PATH not set, catalog is empty");
                InMemoryCatalog::default()
            }
        };
        tracing::info!(storage_dir = %config.storage_dir.display(), "Opening storefront");

        Ok(Self::open(
            Arc::new(store),
            notifier,
            Arc::new(catalog),
            config.shipping,
        ))
    }

    /// Look up a product by slug and record it as recently viewed.
    pub fn view_product(&mut self, slug: &str) -> Option<Product> {
        let product = self.catalog.find_by_slug(slug)?;
        self.recently_viewed.add_to_recently_viewed(&product);
        Some(product)
    }

    /// Place an order for the current cart, shipped to the default address.
    ///
    /// # Errors
    ///
    /// See [`checkout::place_order`].
    pub fn checkout(&mut self) -> std::result::Result<OrderSummary, CheckoutError> {
        checkout::place_order(
            &mut self.cart,
            &self.addresses,
            &mut self.orders,
            &self.shipping,
            self.notifier.as_ref(),
            Utc::now(),
        )
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    #[must_use]
    pub fn catalog(&self) -> &dyn Catalog {
        self.catalog.as_ref()
    }

    #[must_use]
    pub const fn shipping(&self) -> &ShippingConfig {
        &self.shipping
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    pub const fn wishlist_mut(&mut self) -> &mut Wishlist {
        &mut self.wishlist
    }

    /// Move a wishlist item into the cart.
    ///
    /// Returns `false` if the product is not in the wishlist.
    pub fn move_to_cart(&mut self, product_id: ProductId) -> bool {
        self.wishlist.move_to_cart(product_id, &mut self.cart)
    }

    #[must_use]
    pub const fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    pub const fn comparison_mut(&mut self) -> &mut Comparison {
        &mut self.comparison
    }

    #[must_use]
    pub const fn addresses(&self) -> &AddressBook {
        &self.addresses
    }

    pub const fn addresses_mut(&mut self) -> &mut AddressBook {
        &mut self.addresses
    }

    #[must_use]
    pub const fn recently_viewed(&self) -> &RecentlyViewed {
        &self.recently_viewed
    }

    pub const fn recently_viewed_mut(&mut self) -> &mut RecentlyViewed {
        &mut self.recently_viewed
    }

    #[must_use]
    pub const fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    pub const fn orders_mut(&mut self) -> &mut OrderHistory {
        &mut self.orders
    }
}
