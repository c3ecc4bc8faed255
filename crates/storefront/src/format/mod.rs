//! Persian display formatting.
//!
//! Numbers are shown with Persian digit glyphs, prices are grouped by
//! thousands before transliteration (`1250000` becomes `۱,۲۵۰,۰۰۰`), and dates
//! are shown in the Jalali calendar as seen from Tehran.

pub mod jalali;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};

use maysa_core::{Price, digits};

pub use jalali::{JalaliDate, gregorian_to_jalali};

/// Text produced for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Iran Standard Time, UTC+03:30 (no daylight saving since 2022).
const TEHRAN_OFFSET_SECS: i32 = 3 * 3600 + 30 * 60;

/// Toman currency suffix.
const TOMAN: &str = "تومان";

/// Replace each Western digit in `value` with its Persian glyph.
///
/// Works on anything displayable: `to_persian_numbers(1400)` and
/// `to_persian_numbers("abc123")` both transliterate digit by digit and leave
/// other characters alone.
#[must_use]
pub fn to_persian_numbers(value: impl std::fmt::Display) -> String {
    digits::to_persian(&value.to_string())
}

/// Replace each Persian or Arabic-Indic digit in `value` with a Western digit.
#[must_use]
pub fn to_western_numbers(value: &str) -> String {
    digits::to_western(value)
}

/// Group an integer by thousands with `,` and transliterate it.
#[must_use]
pub fn format_number_persian(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    let signed = if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    };
    digits::to_persian(&signed)
}

/// Format a price as grouped Persian digits, e.g. `۱,۲۵۰,۰۰۰`.
///
/// Prices are whole Toman; any fractional part is rounded away.
#[must_use]
pub fn format_price_persian(price: Price) -> String {
    let whole = price.amount().round().normalize().to_string();
    let (sign, magnitude) = whole
        .strip_prefix('-')
        .map_or(("", whole.as_str()), |rest| ("-", rest));
    digits::to_persian(&format!("{sign}{}", group_thousands(magnitude)))
}

/// [`format_price_persian`] followed by the Toman suffix.
#[must_use]
pub fn format_toman(price: Price) -> String {
    format!("{} {TOMAN}", format_price_persian(price))
}

/// Values that can be shown as a Persian date.
pub trait DateInput {
    /// The calendar date in Tehran, or `None` if the value is not a date.
    fn tehran_date(&self) -> Option<NaiveDate>;
}

impl DateInput for NaiveDate {
    fn tehran_date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl DateInput for NaiveDateTime {
    fn tehran_date(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> DateInput for DateTime<Tz> {
    fn tehran_date(&self) -> Option<NaiveDate> {
        let tehran = FixedOffset::east_opt(TEHRAN_OFFSET_SECS)?;
        Some(self.with_timezone(&tehran).date_naive())
    }
}

impl DateInput for str {
    fn tehran_date(&self) -> Option<NaiveDate> {
        parse_date(self)
    }
}

impl DateInput for String {
    fn tehran_date(&self) -> Option<NaiveDate> {
        parse_date(self)
    }
}

impl<T: DateInput + ?Sized> DateInput for &T {
    fn tehran_date(&self) -> Option<NaiveDate> {
        (**self).tehran_date()
    }
}

/// Format a date as a short Jalali date with Persian digits, e.g. `۱۴۰۲/۱۰/۵`.
///
/// Strings are parsed as RFC 3339 timestamps, `YYYY-MM-DD`, or
/// `YYYY-MM-DD HH:MM:SS`. Anything else yields [`INVALID_DATE`].
#[must_use]
pub fn format_date_persian<D: DateInput + ?Sized>(date: &D) -> String {
    date.tehran_date().map_or_else(
        || INVALID_DATE.to_string(),
        |d| gregorian_to_jalali(d).short_form(),
    )
}

/// Format a date as a long Jalali date, e.g. `۵ دی ۱۴۰۲`.
#[must_use]
pub fn format_date_persian_long<D: DateInput + ?Sized>(date: &D) -> String {
    date.tehran_date().map_or_else(
        || INVALID_DATE.to_string(),
        |d| gregorian_to_jalali(d).long_form(),
    )
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.tehran_date();
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Insert `,` every three digits from the right of an ASCII digit string.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_to_persian_numbers() {
        assert_eq!(to_persian_numbers(1400), "۱۴۰۰");
        assert_eq!(to_persian_numbers("abc123"), "abc۱۲۳");
        assert_eq!(to_persian_numbers("سفارش #42"), "سفارش #۴۲");
    }

    #[test]
    fn test_to_western_numbers() {
        assert_eq!(to_western_numbers("۱۴۰۰"), "1400");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1250000"), "1,250,000");
        assert_eq!(group_thousands("123456789"), "123,456,789");
    }

    #[test]
    fn test_format_price_persian() {
        assert_eq!(format_price_persian(Price::toman(1_250_000)), "۱,۲۵۰,۰۰۰");
        assert_eq!(format_price_persian(Price::toman(0)), "۰");
        assert_eq!(format_price_persian(Price::toman(950)), "۹۵۰");

        let fractional = Price::new(Decimal::new(123_456, 1)).unwrap();
        assert_eq!(format_price_persian(fractional), "۱۲,۳۴۶");
    }

    #[test]
    fn test_format_number_persian_negative() {
        assert_eq!(format_number_persian(-1_500), "-۱,۵۰۰");
        assert_eq!(format_number_persian(i64::MIN), "-۹,۲۲۳,۳۷۲,۰۳۶,۸۵۴,۷۷۵,۸۰۸");
    }

    #[test]
    fn test_format_toman() {
        assert_eq!(format_toman(Price::toman(50_000)), "۵۰,۰۰۰ تومان");
    }

    #[test]
    fn test_format_date_from_values() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(format_date_persian(&date), "۱۴۰۳/۱/۱");

        // 21:00 UTC is already the next day in Tehran
        let evening = Utc.with_ymd_and_hms(2024, 3, 19, 21, 0, 0).unwrap();
        assert_eq!(format_date_persian(&evening), "۱۴۰۳/۱/۱");
    }

    #[test]
    fn test_format_date_from_strings() {
        assert_eq!(format_date_persian("2023-12-26"), "۱۴۰۲/۱۰/۵");
        assert_eq!(format_date_persian("2023-12-26T08:15:00Z"), "۱۴۰۲/۱۰/۵");
        assert_eq!(format_date_persian("2023-12-26 23:59:59"), "۱۴۰۲/۱۰/۵");
        assert_eq!(format_date_persian(&"2023-12-26".to_string()), "۱۴۰۲/۱۰/۵");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date_persian("not a date"), INVALID_DATE);
        assert_eq!(format_date_persian("2023-13-45"), INVALID_DATE);
        assert_eq!(format_date_persian(""), INVALID_DATE);
    }

    #[test]
    fn test_format_date_long() {
        assert_eq!(format_date_persian_long("2023-12-26"), "۵ دی ۱۴۰۲");
        assert_eq!(format_date_persian_long("garbage"), INVALID_DATE);
    }
}
