//! Product lookup.
//!
//! The catalog is owned by the product API; the commerce layer only needs to
//! resolve a product by ID or slug before taking a snapshot of it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use maysa_core::{Product, ProductId};

/// Errors loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode catalog {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only product source.
pub trait Catalog: Send + Sync {
    fn find_by_id(&self, id: ProductId) -> Option<Product>;

    fn find_by_slug(&self, slug: &str) -> Option<Product>;

    /// Every product, in catalog order.
    fn all(&self) -> Vec<Product>;
}

/// A catalog held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or decoded.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), products = products.len(), "Catalog loaded");
        Ok(Self { products })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Catalog for InMemoryCatalog {
    fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    fn find_by_slug(&self, slug: &str) -> Option<Product> {
        self.products.iter().find(|p| p.slug == slug).cloned()
    }

    fn all(&self) -> Vec<Product> {
        self.products.clone()
    }
}
