//! Maysa storefront library.
//!
//! Client-side commerce state for the Maysa storefront: the cart, wishlist,
//! product comparison, address book, recently viewed products, and order
//! history, each persisted through a key-value store, plus Persian display
//! formatting.
//!
//! [`state::Storefront`] wires every container to one store and one notifier.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod commerce;
pub mod config;
pub mod error;
pub mod format;
pub mod notify;
pub mod state;
pub mod storage;

pub use error::{AppError, Result};
pub use state::Storefront;
