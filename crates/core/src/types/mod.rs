//! Core types for Maysa.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod address;
pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod status;

pub use address::{Address, AddressDraft, AddressError};
pub use cart::CartItem;
pub use id::*;
pub use order::OrderSummary;
pub use price::Price;
pub use product::Product;
pub use status::OrderStatus;
