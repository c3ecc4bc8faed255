//! Unified error handling.
//!
//! Provides a unified `AppError` type for callers that drive the storefront
//! as a whole (the composition root and the CLI). Container operations never
//! fail; only setup, catalog loading, and checkout return errors.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The persistent store could not be opened.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The product catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// An order could not be placed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// A product, address, or order was not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias using `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
