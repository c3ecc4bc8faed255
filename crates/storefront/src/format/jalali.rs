//! Gregorian to Jalali (Solar Hijri) calendar conversion.
//!
//! Uses the arithmetic 33-year leap cycle, which agrees with the astronomical
//! calendar for present-day dates.

use chrono::{Datelike, NaiveDate};

use maysa_core::digits;

/// Persian month names, Farvardin first.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Cumulative day count at the start of each Gregorian month (non-leap year).
const GREGORIAN_MONTH_OFFSETS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A date in the Jalali calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JalaliDate {
    pub year: i32,
    /// 1 (Farvardin) through 12 (Esfand).
    pub month: u32,
    pub day: u32,
}

impl JalaliDate {
    /// Name of the month in Persian.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        usize::try_from(self.month.saturating_sub(1))
            .ok()
            .and_then(|idx| MONTH_NAMES.get(idx))
            .copied()
            .unwrap_or("")
    }

    /// Short form with Persian digits, e.g. `۱۴۰۲/۱۰/۵`.
    #[must_use]
    pub fn short_form(&self) -> String {
        digits::to_persian(&format!("{}/{}/{}", self.year, self.month, self.day))
    }

    /// Long form with Persian digits, e.g. `۵ دی ۱۴۰۲`.
    #[must_use]
    pub fn long_form(&self) -> String {
        digits::to_persian(&format!("{} {} {}", self.day, self.month_name(), self.year))
    }
}

/// Convert a Gregorian date to the Jalali calendar.
#[must_use]
pub fn gregorian_to_jalali(date: NaiveDate) -> JalaliDate {
    let gy = i64::from(date.year());
    let gm = date.month();
    let gd = i64::from(date.day());

    let month_offset = usize::try_from(gm.saturating_sub(1))
        .ok()
        .and_then(|idx| GREGORIAN_MONTH_OFFSETS.get(idx))
        .copied()
        .unwrap_or(0);
    let gy2 = if gm > 2 { gy + 1 } else { gy };

    let mut days = 355_666 + 365 * gy + (gy2 + 3) / 4 - (gy2 + 99) / 100 + (gy2 + 399) / 400
        + gd
        + month_offset;

    let mut jy = -1595 + 33 * (days / 12_053);
    days %= 12_053;
    jy += 4 * (days / 1461);
    days %= 1461;
    if days > 365 {
        jy += (days - 1) / 365;
        days = (days - 1) % 365;
    }

    let (jm, jd) = if days < 186 {
        (1 + days / 31, 1 + days % 31)
    } else {
        (7 + (days - 186) / 30, 1 + (days - 186) % 30)
    };

    JalaliDate {
        year: i32::try_from(jy).unwrap_or(i32::MAX),
        month: u32::try_from(jm).unwrap_or(1),
        day: u32::try_from(jd).unwrap_or(1),
    }
}
