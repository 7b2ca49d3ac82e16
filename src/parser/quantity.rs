//! Hex quantity decoding.
//!
//! Big-integer fields are read through [`decode_big_int_field`] so that the
//! canonical `hex` spelling and the legacy `_hex` spelling are interchangeable.
//! Decoding is strict: an empty digit string or any non-hex character is an
//! error rather than a partial parse.

use super::schema::BigNumber;
use crate::utils::config::{MAX_EXACT_HEX_DIGITS, WEI_PER_UNIT};
use crate::utils::error::DecodeError;

/// Resolve the hex string of a big-integer field
///
/// **Public** - the single accessor for `hex` / `_hex` fields
///
/// The canonical spelling wins; an empty canonical string falls through to
/// the legacy one. Returns `None` when neither carries a value.
pub fn decode_big_int_field(field: Option<&BigNumber>) -> Option<&str> {
    match field? {
        BigNumber::Raw(hex) => non_empty(hex),
        BigNumber::Object {
            hex, legacy_hex, ..
        } => hex
            .as_deref()
            .and_then(non_empty)
            .or_else(|| legacy_hex.as_deref().and_then(non_empty)),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Strip an optional `0x`/`0X` prefix and validate the remaining digits
///
/// **Private** - shared by the decoders below
fn hex_digits<'a>(field: &str, value: &'a str) -> Result<&'a str, DecodeError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidHex {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    Ok(digits)
}

/// Decode a hex quantity into the nearest `f64`
///
/// **Public** - raw magnitude, no scaling
///
/// Up to 32 significant digits are decoded exactly through `u128` before the
/// single rounding to `f64`. Longer quantities keep their 32 leading digits
/// and are scaled by the remaining power of 16.
pub fn hex_to_f64(field: &str, value: &str) -> Result<f64, DecodeError> {
    let digits = hex_digits(field, value)?;
    let significant = digits.trim_start_matches('0');

    if significant.is_empty() {
        return Ok(0.0);
    }

    let (head, tail_len) = if significant.len() <= MAX_EXACT_HEX_DIGITS {
        (significant, 0)
    } else {
        (
            &significant[..MAX_EXACT_HEX_DIGITS],
            significant.len() - MAX_EXACT_HEX_DIGITS,
        )
    };

    let head = u128::from_str_radix(head, 16).map_err(|_| DecodeError::InvalidHex {
        field: field.to_string(),
        value: value.to_string(),
    })?;

    let exponent = i32::try_from(tail_len.saturating_mul(4)).unwrap_or(i32::MAX);
    Ok(head as f64 * 2f64.powi(exponent))
}

/// Decode a hex quantity and scale it by 10^18
///
/// **Public** - wei to decimal units
///
/// # Example
/// ```
/// use eth_block_humanizer::parser::hex_to_decimal;
/// assert_eq!(hex_to_decimal("value", "0x0de0b6b3a7640000").unwrap(), 1.0);
/// ```
pub fn hex_to_decimal(field: &str, value: &str) -> Result<f64, DecodeError> {
    Ok(hex_to_f64(field, value)? / WEI_PER_UNIT)
}

/// Whether a hex quantity is a valid, nonzero integer
///
/// **Public** - used by the value-transfer rule; malformed input is not nonzero
pub fn is_nonzero_hex(value: &str) -> bool {
    hex_digits("value", value)
        .map(|digits| digits.chars().any(|c| c != '0'))
        .unwrap_or(false)
}
