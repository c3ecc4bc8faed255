//! Persian digit transliteration.
//!
//! Persian text uses the Extended Arabic-Indic digits (`۰`-`۹`, U+06F0..U+06F9).
//! Input typed on Arabic keyboards may instead contain the Arabic-Indic digits
//! (`٠`-`٩`, U+0660..U+0669), so normalization back to ASCII accepts both.

/// Persian digit glyphs indexed by their numeric value.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Map a single ASCII digit to its Persian glyph. Other characters pass through.
#[must_use]
pub const fn to_persian_digit(c: char) -> char {
    match c {
        '0' => '۰',
        '1' => '۱',
        '2' => '۲',
        '3' => '۳',
        '4' => '۴',
        '5' => '۵',
        '6' => '۶',
        '7' => '۷',
        '8' => '۸',
        '9' => '۹',
        other => other,
    }
}

/// Map a Persian or Arabic-Indic digit back to ASCII. Other characters pass through.
#[must_use]
pub fn to_western_digit(c: char) -> char {
    let offset = match c {
        '۰'..='۹' => u32::from(c) - u32::from('۰'),
        '٠'..='٩' => u32::from(c) - u32::from('٠'),
        _ => return c,
    };
    char::from_digit(offset, 10).unwrap_or(c)
}

/// Replace every ASCII digit in `s` with its Persian glyph.
#[must_use]
pub fn to_persian(s: &str) -> String {
    s.chars().map(to_persian_digit).collect()
}

/// Replace every Persian or Arabic-Indic digit in `s` with its ASCII digit.
#[must_use]
pub fn to_western(s: &str) -> String {
    s.chars().map(to_western_digit).collect()
}
