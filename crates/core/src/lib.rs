//! Maysa Core - Shared types library.
//!
//! This crate provides common types used across all Maysa components:
//! - `storefront` - Commerce state containers and Persian formatting
//! - `cli` - Command-line driver for a local storefront session
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no storage
//! access, no logging. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, prices, products, addresses, and orders
//! - [`digits`] - Persian/Western digit transliteration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod digits;
pub mod types;

pub use types::*;
