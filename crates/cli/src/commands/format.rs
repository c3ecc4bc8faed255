//! Formatting helpers.

use maysa_core::Price;
use maysa_storefront::format::{
    format_date_persian, format_date_persian_long, format_number_persian, format_toman,
};

pub fn number(value: i64) {
    println!("{}", format_number_persian(value));
}

pub fn price(value: u64) {
    println!("{}", format_toman(Price::toman(value)));
}

pub fn date(value: &str, long: bool) {
    let formatted = if long {
        format_date_persian_long(value)
    } else {
        format_date_persian(value)
    };
    println!("{formatted}");
}
