//! Command implementations.
//!
//! Every command prints to stdout; logs go to stderr.

#![allow(clippy::print_stdout)]

pub mod address;
pub mod cart;
pub mod format;
pub mod lists;
pub mod orders;

use thiserror::Error;

use maysa_core::Product;
use maysa_storefront::Storefront;
use maysa_storefront::format::format_toman;
use maysa_storefront::notify::{Toast, Tone};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No product in the catalog has this slug.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The argument is not an address ID.
    #[error("Invalid address ID: {0}")]
    InvalidAddressId(String),

    /// No saved address has this ID.
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// No placed order has this number.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// The address fields failed validation.
    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] maysa_core::AddressError),
}

/// Resolve a product slug through the catalog.
pub fn product_by_slug(shop: &Storefront, slug: &str) -> Result<Product, CommandError> {
    shop.catalog()
        .find_by_slug(slug)
        .ok_or_else(|| CommandError::ProductNotFound(slug.to_owned()))
}

/// One line describing a product, with its price and any discount.
pub fn product_line(product: &Product) -> String {
    let mut line = format!(
        "{} ({}) - {}",
        product.name,
        product.slug,
        format_toman(product.price)
    );
    if let Some(percent) = product.discount_percent() {
        line.push_str(&format!(
            " [{}٪ تخفیف]",
            maysa_storefront::format::to_persian_numbers(percent)
        ));
    }
    if !product.in_stock {
        line.push_str(" [ناموجود]");
    }
    line
}

/// Print a list of products, or `empty` if there are none.
pub fn print_products(products: &[Product], empty: &str) {
    if products.is_empty() {
        println!("{empty}");
        return;
    }
    for (i, product) in products.iter().enumerate() {
        println!("{}. {}", i + 1, product_line(product));
    }
}

/// Print the notifications raised while the command ran.
pub fn print_toasts(toasts: &[Toast]) {
    for toast in toasts {
        let marker = match toast.tone {
            Tone::Success => "✓",
            Tone::Error => "✗",
            Tone::Info => "i",
            Tone::Warning => "!",
        };
        match &toast.icon {
            Some(icon) => println!("[{marker}] {icon} {}", toast.message),
            None => println!("[{marker}] {}", toast.message),
        }
    }
}
