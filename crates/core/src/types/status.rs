//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, awaiting payment confirmation.
    #[default]
    Pending,
    /// Paid and being prepared.
    Processing,
    /// Handed to the courier.
    Shipped,
    /// Received by the customer.
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Label shown on the order tracking page.
    #[must_use]
    pub const fn label_fa(&self) -> &'static str {
        match self {
            Self::Pending => "در انتظار پرداخت",
            Self::Processing => "در حال پردازش",
            Self::Shipped => "ارسال شده",
            Self::Delivered => "تحویل داده شده",
            Self::Cancelled => "لغو شده",
        }
    }

    /// Whether the order can no longer change.
    #[must_use]
    pub const fn is_final(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Processing => write!(f, "processing"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}
