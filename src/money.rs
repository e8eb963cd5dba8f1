//! Conversion between decimal currency text and integer minor units.
//!
//! The engine only ever handles whole cents; these helpers sit at the
//! boundary where a presentation layer reads or prints amounts.

use alloc::format;
use alloc::string::String;

use crate::error::MoneyError;

/// Parses a non-negative decimal amount such as `"12"`, `"12.5"` or `"$12.34"`
/// into cents.
///
/// Digits past the second decimal place round half up.
///
/// # Errors
///
/// Returns an error if the input is empty, not a plain decimal number, or
/// too large for a `u64` of cents.
///
/// # Example
///
/// ```
/// use bjtable::money::parse_amount;
///
/// assert_eq!(parse_amount("50"), Ok(5_000));
/// assert_eq!(parse_amount("$12.5"), Ok(1_250));
/// assert_eq!(parse_amount("0.125"), Ok(13));
/// ```
pub fn parse_amount(input: &str) -> Result<u64, MoneyError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(MoneyError::Empty);
    }

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if whole.is_empty() && fraction.is_empty() {
        return Err(MoneyError::Invalid);
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        return Err(MoneyError::Invalid);
    }

    let mut cents: u64 = 0;
    for digit in whole.bytes() {
        cents = cents
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
            .ok_or(MoneyError::Overflow)?;
    }

    let mut fraction_digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    for _ in 0..2 {
        let digit = fraction_digits.next().unwrap_or(0);
        cents = cents
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .ok_or(MoneyError::Overflow)?;
    }
    if fraction_digits.next().is_some_and(|digit| digit >= 5) {
        cents = cents.checked_add(1).ok_or(MoneyError::Overflow)?;
    }

    Ok(cents)
}

/// Formats cents as `$D.CC`.
///
/// ```
/// use bjtable::money::format_amount;
///
/// assert_eq!(format_amount(2_500), "$25.00");
/// assert_eq!(format_amount(7), "$0.07");
/// ```
#[must_use]
pub fn format_amount(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Formats a signed amount of cents as `$D.CC` or `-$D.CC`.
#[must_use]
pub fn format_signed(cents: i64) -> String {
    if cents < 0 {
        format!("-{}", format_amount(cents.unsigned_abs()))
    } else {
        format_amount(cents.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_inputs() {
        assert_eq!(parse_amount(" 10 "), Ok(1_000));
        assert_eq!(parse_amount("10."), Ok(1_000));
        assert_eq!(parse_amount(".5"), Ok(50));
        assert_eq!(parse_amount("0.994"), Ok(99));
        assert_eq!(parse_amount("0.995"), Ok(100));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_amount(""), Err(MoneyError::Empty));
        assert_eq!(parse_amount("$"), Err(MoneyError::Empty));
        assert_eq!(parse_amount("."), Err(MoneyError::Invalid));
        assert_eq!(parse_amount("-5"), Err(MoneyError::Invalid));
        assert_eq!(parse_amount("1e3"), Err(MoneyError::Invalid));
        assert_eq!(parse_amount("1.2.3"), Err(MoneyError::Invalid));
        assert_eq!(
            parse_amount("999999999999999999999"),
            Err(MoneyError::Overflow)
        );
    }

    #[test]
    fn formats_signed_amounts() {
        assert_eq!(format_signed(-1_550), "-$15.50");
        assert_eq!(format_signed(0), "$0.00");
        assert_eq!(format_signed(i64::MIN), "-$92233720368547758.08");
    }
}
