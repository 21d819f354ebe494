//! Decimal amount handling
//!
//! Every numeric comparison in the swap form goes through `parse_amount`, and
//! every balance shown to the user goes through `format_amount`, so the value
//! the "Max" link writes into the input compares equal to the balance it came
//! from.

use crate::error::SwapError;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::str::FromStr;

/// Decimals of the base currency (wei per ether)
pub const BASE_DECIMALS: u32 = 18;

/// Parse a user-entered decimal string
pub fn parse_amount(input: &str) -> Result<BigDecimal, SwapError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SwapError::InvalidAmount("Enter an amount".to_string()));
    }

    BigDecimal::from_str(trimmed)
        .map_err(|_| SwapError::InvalidAmount(format!("'{}' is not a number", trimmed)))
}

/// Parse an amount that is about to be sent to a callback: must be > 0
pub fn parse_positive_amount(input: &str) -> Result<BigDecimal, SwapError> {
    let value = parse_amount(input)?;
    if value <= BigDecimal::zero() {
        return Err(SwapError::InvalidAmount(
            "Amount must be greater than zero".to_string(),
        ));
    }
    Ok(value)
}

/// Convert a smallest-unit integer (wei and friends) into a decimal amount
pub fn from_smallest_units(value: u128, decimals: u32) -> BigDecimal {
    BigDecimal::new(BigInt::from(value), decimals as i64)
}

/// Render an amount as plain decimal text: no exponent, no trailing zeros
pub fn format_amount(value: &BigDecimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }

    let (digits, scale) = value.as_bigint_and_exponent();
    let sign = if digits.is_negative() { "-" } else { "" };
    let mut text = digits.abs().to_string();

    if scale <= 0 {
        text.push_str(&"0".repeat(scale.unsigned_abs() as usize));
        return format!("{}{}", sign, text);
    }

    let scale = scale as usize;
    if text.len() <= scale {
        text = format!("{}{}", "0".repeat(scale - text.len() + 1), text);
    }

    let (whole, fraction) = text.split_at(text.len() - scale);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{}{}", sign, whole)
    } else {
        format!("{}{}.{}", sign, whole, fraction)
    }
}

/// Parse a `0x`-prefixed hex quantity as returned by JSON-RPC nodes
pub fn parse_hex_quantity(hex: &str) -> Result<u128, String> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .ok_or_else(|| format!("Quantity '{}' is missing the 0x prefix", hex))?;

    if digits.is_empty() {
        return Ok(0);
    }

    u128::from_str_radix(digits, 16).map_err(|e| format!("Invalid hex quantity '{}': {}", hex, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1.5").unwrap(), BigDecimal::from_str("1.50").unwrap());
        assert_eq!(parse_amount(" 2 ").unwrap(), BigDecimal::from_str("2").unwrap());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("1.2.3").is_err());
    }

    #[test]
    fn test_positive_amount() {
        assert!(parse_positive_amount("0.001").is_ok());
        assert!(matches!(parse_positive_amount("0"), Err(SwapError::InvalidAmount(_))));
        assert!(matches!(parse_positive_amount("-1"), Err(SwapError::InvalidAmount(_))));
    }

    #[test]
    fn test_smallest_units_match_parsed_decimal() {
        let balance = from_smallest_units(16_224_000_000_000_000_000, 18);
        assert_eq!(balance, parse_amount("16.224").unwrap());
        assert_eq!(from_smallest_units(1_500_000, 6), parse_amount("1.5").unwrap());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(&from_smallest_units(16_224_000_000_000_000_000, 18)), "16.224");
        assert_eq!(format_amount(&from_smallest_units(2_000_000_000_000_000_000, 18)), "2");
        assert_eq!(format_amount(&from_smallest_units(1, 18)), "0.000000000000000001");
        assert_eq!(format_amount(&from_smallest_units(0, 18)), "0");
        assert_eq!(format_amount(&parse_amount("1e2").unwrap()), "100");
        assert_eq!(format_amount(&parse_amount("0.50").unwrap()), "0.5");
        assert_eq!(format_amount(&parse_amount("-1.50").unwrap()), "-1.5");
    }

    #[test]
    fn test_formatted_balance_parses_back_to_itself() {
        let balance = from_smallest_units(123_456_789_000_000_000_001, 18);
        assert_eq!(parse_amount(&format_amount(&balance)).unwrap(), balance);
    }

    #[test]
    fn test_parse_hex_quantity() {
        assert_eq!(parse_hex_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0x").unwrap(), 0);
        assert_eq!(parse_hex_quantity("0xde0b6b3a7640000").unwrap(), 1_000_000_000_000_000_000);
        assert!(parse_hex_quantity("1234").is_err());
        assert!(parse_hex_quantity("0xzz").is_err());
    }
}
