//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MAYSA_STORAGE_DIR` - Directory holding the persisted containers (default: .maysa)
//! - `MAYSA_CATALOG_PATH` - JSON file with the product catalog
//! - `MAYSA_FREE_SHIPPING_THRESHOLD` - Subtotal in Toman from which shipping is free (default: 500000)
//! - `MAYSA_SHIPPING_COST` - Flat shipping cost in Toman below the threshold (default: 50000)

use std::path::PathBuf;

use thiserror::Error;

use maysa_core::Price;

const DEFAULT_STORAGE_DIR: &str = ".maysa";
const DEFAULT_FREE_SHIPPING_THRESHOLD: &str = "500000";
const DEFAULT_SHIPPING_COST: &str = "50000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory of the file-backed store
    pub storage_dir: PathBuf,
    /// Product catalog file, if one is configured
    pub catalog_path: Option<PathBuf>,
    /// Shipping rules applied at checkout
    pub shipping: ShippingConfig,
}

/// Shipping cost rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingConfig {
    /// Orders with a subtotal at or above this ship for free
    pub free_shipping_threshold: Price,
    /// Cost charged below the threshold
    pub shipping_cost: Price,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Price::toman(500_000),
            shipping_cost: Price::toman(50_000),
        }
    }
}

impl ShippingConfig {
    /// Shipping charged for an order with the given subtotal.
    #[must_use]
    pub fn cost_for(&self, subtotal: Price) -> Price {
        if subtotal >= self.free_shipping_threshold {
            Price::ZERO
        } else {
            self.shipping_cost
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            catalog_path: None,
            shipping: ShippingConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` for non-numeric or negative amounts.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_dir = PathBuf::from(
            lookup("MAYSA_STORAGE_DIR").unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_string()),
        );
        let catalog_path = lookup("MAYSA_CATALOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let shipping = ShippingConfig {
            free_shipping_threshold: get_toman(
                &lookup,
                "MAYSA_FREE_SHIPPING_THRESHOLD",
                DEFAULT_FREE_SHIPPING_THRESHOLD,
            )?,
            shipping_cost: get_toman(&lookup, "MAYSA_SHIPPING_COST", DEFAULT_SHIPPING_COST)?,
        };

        Ok(Self {
            storage_dir,
            catalog_path,
            shipping,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a whole-Toman amount, falling back to `default` when unset.
fn get_toman(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<Price, ConfigError> {
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    maysa_core::digits::to_western(raw.trim())
        .replace(',', "")
        .parse::<u64>()
        .map(Price::toman)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.storage_dir, PathBuf::from(".maysa"));
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("MAYSA_STORAGE_DIR", "/tmp/maysa"),
            ("MAYSA_CATALOG_PATH", "catalog.json"),
            ("MAYSA_FREE_SHIPPING_THRESHOLD", "1,000,000"),
            ("MAYSA_SHIPPING_COST", "۳۵۰۰۰"),
        ])
        .unwrap();

        assert_eq!(config.storage_dir, PathBuf::from("/tmp/maysa"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
        assert_eq!(config.shipping.free_shipping_threshold, Price::toman(1_000_000));
        assert_eq!(config.shipping.shipping_cost, Price::toman(35_000));
    }

    #[test]
    fn test_invalid_amount() {
        let err = config_from(&[("MAYSA_SHIPPING_COST", "-5")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "MAYSA_SHIPPING_COST"));
    }

    #[test]
    fn test_blank_catalog_path_is_none() {
        let config = config_from(&[("MAYSA_CATALOG_PATH", "  ")]).unwrap();
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_shipping_cost_for() {
        let shipping = ShippingConfig::default();
        assert_eq!(shipping.cost_for(Price::toman(499_999)), Price::toman(50_000));
        assert_eq!(shipping.cost_for(Price::toman(500_000)), Price::ZERO);
    }
}
