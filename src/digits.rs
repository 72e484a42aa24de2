//! Latin and Persian digit scripts.

use crate::consts::PERSIAN_DIGITS;

/// Replaces ASCII digits with Persian digits: `1402` becomes `۱۴۰۲`.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Replaces Persian digits with ASCII digits: `۱۴۰۲` becomes `1402`.
pub fn to_latin_digits(text: &str) -> String {
    text.chars()
        .map(|c| {
            PERSIAN_DIGITS
                .iter()
                .position(|&p| p == c)
                .and_then(|d| char::from_digit(d as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}
