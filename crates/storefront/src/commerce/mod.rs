//! Commerce state containers.
//!
//! Each container is an in-memory collection bound to one storage key through
//! a [`Persisted`](crate::storage::Persisted) bridge:
//!
//! - [`Cart`] - products with quantities
//! - [`Wishlist`] - saved products
//! - [`Comparison`] - up to four products compared side by side
//! - [`AddressBook`] - shipping addresses with a single default
//! - [`RecentlyViewed`] - the last twelve products looked at
//! - [`OrderHistory`] - placed orders and the latest order
//!
//! Containers are built with `open`, which hydrates them from storage before
//! returning. Every mutation afterwards rewrites the container's key.
//!
//! Products are stored as snapshots: an entry keeps the name and price the
//! product had when it was added.

mod addresses;
mod cart;
mod comparison;
mod orders;
mod recently_viewed;
mod wishlist;

pub use addresses::AddressBook;
pub use cart::Cart;
pub use comparison::{AddOutcome, Comparison};
pub use orders::OrderHistory;
pub use recently_viewed::RecentlyViewed;
pub use wishlist::Wishlist;

use std::collections::HashSet;

use maysa_core::Product;

/// Keep the first occurrence of each product ID, preserving order.
fn dedupe_products(products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::new();
    products.into_iter().filter(|p| seen.insert(p.id)).collect()
}
