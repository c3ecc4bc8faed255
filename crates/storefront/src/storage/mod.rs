//! Local key-value persistence for commerce state.
//!
//! # Layout
//!
//! Every commerce container owns exactly one key and stores its whole
//! collection under it as a JSON document:
//!
//! | Key | Value |
//! |---|---|
//! | `maysa-cart` | array of cart items |
//! | `maysa-wishlist` | array of products |
//! | `maysa-comparison` | array of products |
//! | `maysa-addresses` | array of addresses |
//! | `maysa-recently-viewed` | array of products |
//! | `maysa-orders` | array of order summaries |
//! | `last-order` | single order summary |
//!
//! Containers never touch each other's keys, so writes from different
//! containers cannot race. Two processes sharing the same store resolve
//! conflicts by last write wins.
//!
//! # Backends
//!
//! - [`MemoryStore`] - ephemeral, for tests and throwaway sessions
//! - [`FileStore`] - one file per key inside a directory

mod file;
mod memory;
mod persisted;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use persisted::{Persisted, Phase};

/// Errors raised by a [`KeyValueStore`] or while encoding a collection.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The key cannot be mapped onto the backend.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// A string-keyed store of string values, shaped like browser local storage.
///
/// All methods take `&self`; implementations use interior mutability so one
/// store can be shared by every container through an `Arc`.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`.
    ///
    /// Returns `Ok(())` even if the key did not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage keys owned by each container.
pub mod keys {
    /// Cart lines.
    pub const CART: &str = "maysa-cart";

    /// Wishlist products.
    pub const WISHLIST: &str = "maysa-wishlist";

    /// Products selected for side-by-side comparison.
    pub const COMPARISON: &str = "maysa-comparison";

    /// Saved shipping addresses.
    pub const ADDRESSES: &str = "maysa-addresses";

    /// Recently viewed products, most recent first.
    pub const RECENTLY_VIEWED: &str = "maysa-recently-viewed";

    /// Placed orders, newest first.
    pub const ORDERS: &str = "maysa-orders";

    /// The most recently placed order, read by the confirmation page.
    pub const LAST_ORDER: &str = "last-order";

    /// Every key, in the order containers are hydrated.
    pub const ALL: [&str; 7] = [
        CART,
        WISHLIST,
        COMPARISON,
        ADDRESSES,
        RECENTLY_VIEWED,
        ORDERS,
        LAST_ORDER,
    ];
}
