//! Type-safe price representation using decimal arithmetic.
//!
//! All storefront prices are whole Toman amounts. The amount is stored as a
//! [`Decimal`] so that line totals and order totals never pass through
//! floating point, and is serialized as a plain JSON number to match the
//! persisted storage format.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul, Sub};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price in Toman.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(
    #[serde(
        serialize_with = "serialize_amount",
        deserialize_with = "deserialize_amount"
    )]
    Decimal,
);

/// Whole amounts are written as JSON integers, fractional ones as floats.
fn serialize_amount<S: serde::Serializer>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    use rust_decimal::prelude::ToPrimitive;

    if amount.fract().is_zero() {
        if let Some(whole) = amount.to_i64() {
            return serializer.serialize_i64(whole);
        }
    }
    rust_decimal::serde::float::serialize(amount, serializer)
}

/// Negative amounts are rejected, as in [`Price::new`].
fn deserialize_amount<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    let amount = rust_decimal::serde::float::deserialize(deserializer)?;
    Price::new(amount)
        .map(|p| p.amount())
        .ok_or_else(|| serde::de::Error::custom(format!("price cannot be negative: {amount}")))
}

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// Returns `None` for negative amounts.
    #[must_use]
    pub fn new(amount: Decimal) -> Option<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return None;
        }
        Some(Self(amount))
    }

    /// Create a price from a whole number of Toman.
    #[must_use]
    pub fn toman(amount: u64) -> Self {
        Self(Decimal::from(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Subtract without going below zero.
    #[must_use]
    pub fn saturating_sub(self, other: Self) -> Self {
        if other.0 >= self.0 {
            Self::ZERO
        } else {
            Self(self.0 - other.0)
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Saturates at [`Decimal::MAX`].
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

/// Saturates at [`Decimal::MAX`].
impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(
            self.0
                .checked_mul(Decimal::from(quantity))
                .unwrap_or(Decimal::MAX),
        )
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative() {
        assert!(Price::new(Decimal::from(-1)).is_none());
        assert!(Price::new(Decimal::ZERO).is_some());
    }

    #[test]
    fn test_arithmetic() {
        let unit = Price::toman(125_000);
        assert_eq!(unit * 3, Price::toman(375_000));
        assert_eq!(unit + Price::toman(5_000), Price::toman(130_000));
        assert_eq!(Price::toman(10) - Price::toman(20), Price::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::toman(1), Price::toman(2), Price::toman(3)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::toman(6));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Price::toman(1_250_000)).unwrap();
        assert_eq!(json, "1250000");

        let parsed: Price = serde_json::from_str("1250000").unwrap();
        assert_eq!(parsed, Price::toman(1_250_000));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Price::toman(u64::MAX) * u32::MAX;
        assert_eq!(huge + huge, Price::new(Decimal::MAX).unwrap());
        assert_eq!(
            Price::new(Decimal::MAX).unwrap() * 2,
            Price::new(Decimal::MAX).unwrap()
        );

        let total: Price = [huge, huge, huge].into_iter().sum();
        assert_eq!(total.amount(), Decimal::MAX);
    }

    #[test]
    fn test_rejects_negative_json() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
        assert_eq!(serde_json::from_str::<Price>("0").unwrap(), Price::ZERO);
    }
}
