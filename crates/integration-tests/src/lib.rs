//! Integration tests for the Maysa storefront state.
//!
//! Each test builds a [`TestContext`] around a temporary storage directory and
//! reopens the storefront from it to check what survives a restart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p maysa-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use maysa_core::{AddressDraft, Price, Product, ProductId};
use maysa_storefront::Storefront;
use maysa_storefront::catalog::InMemoryCatalog;
use maysa_storefront::config::{ShippingConfig, StorefrontConfig};
use maysa_storefront::notify::RecordingNotifier;
use maysa_storefront::storage::FileStore;

/// A temporary storage directory with a catalog file.
pub struct TestContext {
    dir: tempfile::TempDir,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestContext {
    /// Create an empty storage directory and write the sample catalog.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("catalog.json"),
            serde_json::to_string_pretty(&sample_products()).unwrap(),
        )
        .unwrap();
        Self {
            dir,
            notifier: Arc::new(RecordingNotifier::new()),
        }
    }

    #[must_use]
    pub fn storage_dir(&self) -> PathBuf {
        self.dir.path().join("state")
    }

    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        StorefrontConfig {
            storage_dir: self.storage_dir(),
            catalog_path: Some(self.dir.path().join("catalog.json")),
            shipping: ShippingConfig::default(),
        }
    }

    /// Open a storefront over the directory, as a fresh process would.
    #[must_use]
    pub fn open(&self) -> Storefront {
        Storefront::from_config(&self.config(), self.notifier.clone()).unwrap()
    }

    /// Open a storefront directly over a `FileStore`, bypassing configuration.
    #[must_use]
    pub fn open_with_store(&self) -> Storefront {
        let store = FileStore::open(self.storage_dir()).unwrap();
        Storefront::open(
            Arc::new(store),
            self.notifier.clone(),
            Arc::new(InMemoryCatalog::new(sample_products())),
            ShippingConfig::default(),
        )
    }

    /// Raw contents of the file behind a storage key.
    #[must_use]
    pub fn read_key(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(key_path(&self.storage_dir(), key)).ok()
    }

    /// Overwrite the file behind a storage key.
    pub fn write_key(&self, key: &str, contents: &str) {
        std::fs::create_dir_all(self.storage_dir()).unwrap();
        std::fs::write(key_path(&self.storage_dir(), key), contents).unwrap();
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

/// Six products, the first two discounted and the last out of stock.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    let names = [
        ("rose-face-serum", "سرم صورت گل رز", 1_250_000, Some(1_500_000)),
        ("argan-hair-oil", "روغن موی آرگان", 480_000, Some(600_000)),
        ("aloe-gel", "ژل آلوئه‌ورا", 220_000, None),
        ("saffron-soap", "صابون زعفران", 95_000, None),
        ("green-tea-toner", "تونر چای سبز", 310_000, None),
        ("vitamin-c-cream", "کرم ویتامین سی", 760_000, None),
    ];
    names
        .into_iter()
        .zip(1..)
        .map(|((slug, name, price, original), id)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            slug: slug.to_string(),
            price: Price::toman(price),
            original_price: original.map(Price::toman),
            category: "skincare".to_string(),
            images: vec![format!("/uploads/{slug}.jpg")],
            in_stock: id != 6,
            rating: Some(4.5),
            review_count: Some(12),
        })
        .collect()
}

/// A complete address that passes validation.
#[must_use]
pub fn valid_address(title: &str) -> AddressDraft {
    AddressDraft {
        title: title.to_string(),
        full_name: "سارا احمدی".to_string(),
        phone: "۰۹۱۲۱۲۳۴۵۶۷".to_string(),
        province: "تهران".to_string(),
        city: "تهران".to_string(),
        address: "خیابان ولیعصر، کوچه بهار، پلاک ۱۲".to_string(),
        postal_code: "1234567890".to_string(),
        is_default: false,
    }
}
