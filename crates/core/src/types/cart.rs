//! Cart line type.

use serde::{Deserialize, Serialize};

use super::price::Price;
use super::product::Product;

/// A product snapshot with a quantity of at least one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }

    /// Savings against the original price across the whole line.
    #[must_use]
    pub fn line_savings(&self) -> Price {
        self.product.savings() * self.quantity
    }
}
