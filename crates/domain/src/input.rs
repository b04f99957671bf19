//! Numeric parsing for free-text amount and price fields.
//!
//! Two flavours are provided. [`parse_amount`] is lenient: it reads the
//! leading number of the text, ignores trailing characters and falls back to
//! `0` when nothing usable is found, so a half-typed field never blocks a
//! recalculation. [`parse_strict`] accepts a complete finite number only.

use crate::error::InputError;

const INFINITY_LITERAL: &str = "Infinity";

/// Leniently parses a numeric field, falling back to `0.0`.
///
/// Leading whitespace is skipped and the longest numeric prefix is used
/// (`"12.5abc"` is `12.5`). A signed `Infinity` literal is honoured. Empty,
/// unparseable, NaN and negative-zero results all become `0.0`.
pub fn parse_amount(text: &str) -> f64 {
    let text = text.trim_start();

    let value = if let Some(sign) = infinity_sign(text) {
        sign * f64::INFINITY
    } else {
        numeric_prefix(text)
            .and_then(|prefix| prefix.parse::<f64>().ok())
            .unwrap_or(0.0)
    };

    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Parses a complete, finite number.
///
/// # Errors
///
/// Returns [`InputError`] when the text is blank, not a number, or parses to
/// NaN or an infinity.
pub fn parse_strict(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::NotFinite(trimmed.to_string()));
    }

    Ok(value)
}

/// Returns `Some(±1.0)` when the text starts with an optionally signed
/// `Infinity` literal.
fn infinity_sign(text: &str) -> Option<f64> {
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    rest.starts_with(INFINITY_LITERAL).then_some(sign)
}

/// Longest prefix of the form `[sign] digits [. digits] [e [sign] digits]`
/// with at least one mantissa digit.
fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        // A dangling exponent marker is not part of the number.
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&text[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
