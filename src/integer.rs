//! Overflow-checked decimal parsing for untrusted text.
//!
//! Accepts exactly an optional `-` followed by one or more ASCII digits.
//! Unlike [`str::parse`], a leading `+` is rejected.

/// Why a string could not be read as an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntegerError {
    /// A byte outside `0`-`9` where a digit was required, or no digits at all.
    #[error("expected a decimal digit")]
    InvalidDigit,

    /// The magnitude does not fit in an `i32`.
    #[error("value is out of range for a 32-bit integer")]
    Overflow,
}

const NEGATIVE_SIGN: u8 = b'-';

/// Parses an optionally negative decimal string into an `i32`.
///
/// The value is accumulated digit by digit and checked against the signed
/// bound after every step, so `i32::MIN` parses while `2147483648` does not.
///
/// # Errors
/// - [`IntegerError::InvalidDigit`] if the string is empty, is a lone `-`, or
///   contains any non-digit after the optional sign.
/// - [`IntegerError::Overflow`] as soon as the magnitude leaves the `i32` range.
///
/// # Examples
/// ```
/// use mdy_dates::{IntegerError, parse_int};
///
/// assert_eq!(parse_int("2000"), Ok(2000));
/// assert_eq!(parse_int("-2147483648"), Ok(i32::MIN));
/// assert_eq!(parse_int("1a"), Err(IntegerError::InvalidDigit));
/// assert_eq!(parse_int("99999999999999999999"), Err(IntegerError::Overflow));
/// ```
pub fn parse_int(s: &str) -> Result<i32, IntegerError> {
    let bytes = s.as_bytes();
    let (negative, digits) = match bytes.split_first() {
        Some((&NEGATIVE_SIGN, rest)) => (true, rest),
        _ => (false, bytes),
    };

    if digits.is_empty() {
        return Err(IntegerError::InvalidDigit);
    }

    // i32::MIN has one more unit of magnitude than i32::MAX
    let limit = i64::from(i32::MAX) + i64::from(negative);
    let mut magnitude: i64 = 0;

    for &byte in digits {
        if !byte.is_ascii_digit() {
            return Err(IntegerError::InvalidDigit);
        }
        magnitude = magnitude * 10 + i64::from(byte - b'0');
        if magnitude > limit {
            return Err(IntegerError::Overflow);
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).map_err(|_| IntegerError::Overflow)
}
