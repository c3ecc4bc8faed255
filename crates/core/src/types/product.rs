//! Product snapshot type.
//!
//! Products are supplied by the catalog and copied by value into every
//! commerce container. A stored copy reflects the product as it was when it
//! was added; later catalog changes to price or name are not seen until the
//! entry is removed and added again.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: String,
    pub price: Price,
    /// Pre-discount price, present only for discounted products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    /// Category tag (e.g., "skincare").
    pub category: String,
    /// Image URLs, primary image first.
    #[serde(default)]
    pub images: Vec<String>,
    pub in_stock: bool,
    /// Average rating on a 0-5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}

impl Product {
    /// Whether the product is sold below its original price.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Discount as a whole percentage of the original price.
    ///
    /// Returns `None` when there is no original price or it does not exceed
    /// the current price.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u8> {
        let original = self.original_price?.amount();
        let price = self.price.amount();
        if original <= price || original.is_zero() {
            return None;
        }
        ((original - price) * Decimal::ONE_HUNDRED / original)
            .round()
            .to_u8()
    }

    /// Amount saved per unit compared to the original price.
    #[must_use]
    pub fn savings(&self) -> Price {
        self.original_price
            .map_or(Price::ZERO, |original| original.saturating_sub(self.price))
    }

    /// The first image, used for thumbnails.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(price: u64, original: Option<u64>) -> Product {
        Product {
            id: ProductId::new(1),
            name: "کرم مرطوب کننده".to_string(),
            slug: "moisturizer".to_string(),
            price: Price::toman(price),
            original_price: original.map(Price::toman),
            category: "skincare".to_string(),
            images: vec!["/images/moisturizer.jpg".to_string()],
            in_stock: true,
            rating: Some(4.5),
            review_count: Some(12),
        }
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(product(750_000, Some(1_000_000)).discount_percent(), Some(25));
        assert_eq!(product(666_000, Some(999_000)).discount_percent(), Some(33));
        assert_eq!(product(100, None).discount_percent(), None);
        assert_eq!(product(100, Some(100)).discount_percent(), None);
        assert_eq!(product(200, Some(100)).discount_percent(), None);
    }

    #[test]
    fn test_savings() {
        assert_eq!(product(750_000, Some(1_000_000)).savings(), Price::toman(250_000));
        assert_eq!(product(750_000, None).savings(), Price::ZERO);
        assert!(product(750_000, Some(1_000_000)).is_discounted());
    }

    #[test]
    fn test_camel_case_storage_format() {
        let json = serde_json::to_value(product(750_000, Some(1_000_000))).unwrap();
        assert_eq!(json["originalPrice"], 1_000_000);
        assert_eq!(json["inStock"], true);
        assert_eq!(json["reviewCount"], 12);
    }

    #[test]
    fn test_decodes_minimal_record() {
        let json = r#"{"id":7,"name":"n","slug":"s","price":1000,"category":"c","inStock":false}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert!(product.images.is_empty());
        assert!(product.primary_image().is_none());
        assert!(product.original_price.is_none());
    }
}
