//! Wishlist, comparison, and recently viewed commands.

use maysa_storefront::Storefront;
use maysa_storefront::commerce::{AddOutcome, Comparison};
use maysa_storefront::format::to_persian_numbers;

use super::{CommandError, print_products, product_by_slug, product_line};

pub fn show_wishlist(shop: &Storefront) {
    print_products(shop.wishlist().items(), "لیست علاقه‌مندی‌ها خالی است");
}

pub fn add_to_wishlist(shop: &mut Storefront, slug: &str) -> Result<(), CommandError> {
    let product = product_by_slug(shop, slug)?;
    shop.wishlist_mut().add_to_wishlist(&product);
    Ok(())
}

pub fn remove_from_wishlist(shop: &mut Storefront, slug: &str) -> Result<(), CommandError> {
    let product = product_by_slug(shop, slug)?;
    shop.wishlist_mut().remove_from_wishlist(product.id);
    Ok(())
}

pub fn move_to_cart(shop: &mut Storefront, slug: &str) -> Result<(), CommandError> {
    let product = product_by_slug(shop, slug)?;
    if !shop.move_to_cart(product.id) {
        println!("این محصول در لیست علاقه‌مندی‌ها نیست");
    }
    Ok(())
}

pub fn show_comparison(shop: &Storefront) {
    let comparison = shop.comparison();
    print_products(comparison.items(), "لیست مقایسه خالی است");
    println!(
        "{} از {}",
        to_persian_numbers(comparison.items().len()),
        to_persian_numbers(Comparison::MAX_ITEMS)
    );
}

pub fn add_to_comparison(shop: &mut Storefront, slug: &str) -> Result<(), CommandError> {
    let product = product_by_slug(shop, slug)?;
    match shop.comparison_mut().add_to_comparison(&product) {
        AddOutcome::Added => tracing::debug!(slug, "Added to comparison"),
        AddOutcome::AlreadyPresent => println!("این محصول قبلا به مقایسه اضافه شده است"),
        AddOutcome::Full => tracing::debug!(slug, "Comparison is full"),
    }
    Ok(())
}

pub fn remove_from_comparison(shop: &mut Storefront, slug: &str) -> Result<(), CommandError> {
    let product = product_by_slug(shop, slug)?;
    shop.comparison_mut().remove_from_comparison(product.id);
    Ok(())
}

/// Show a product and record the visit.
pub fn view(shop: &mut Storefront, slug: &str) -> Result<(), CommandError> {
    let product = shop
        .view_product(slug)
        .ok_or_else(|| CommandError::ProductNotFound(slug.to_owned()))?;

    println!("{}", product_line(&product));
    println!("دسته‌بندی: {}", product.category);
    if let Some(rating) = product.rating {
        let reviews = product.review_count.unwrap_or(0);
        println!(
            "امتیاز: {} ({} نظر)",
            to_persian_numbers(format!("{rating:.1}")),
            to_persian_numbers(reviews)
        );
    }
    if let Some(image) = product.primary_image() {
        println!("تصویر: {image}");
    }
    Ok(())
}

pub fn show_recent(shop: &Storefront) {
    print_products(shop.recently_viewed().items(), "محصولی مشاهده نشده است");
}
