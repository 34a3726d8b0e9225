use crate::error::{Result, StallError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Accepts only one or more ASCII digits: no sign, point or whitespace.
pub fn validate(raw: &str) -> Result<()> {
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(StallError::NonNumeric)
    }
}

/// Parses a validated whole-number count.
pub fn parse_count(raw: &str) -> Result<u32> {
    validate(raw)?;
    raw.parse().map_err(|_| StallError::NonNumeric)
}

/// Parses a payment amount. The text still has to be a whole number.
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    validate(raw)?;
    Decimal::from_str(raw).map_err(|_| StallError::NonNumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_accepts_digits() {
        for raw in ["0", "7", "42", "0007", "123456789012345678901234567890"] {
            assert!(validate(raw).is_ok(), "{raw} should be accepted");
        }
    }

    #[test]
    fn test_validate_rejects_everything_else() {
        for raw in ["", " ", "-1", "+1", "1.5", "abc", "1a", " 1", "1 ", "١٢"] {
            assert!(
                matches!(validate(raw), Err(StallError::NonNumeric)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3").unwrap(), 3);
        assert_eq!(parse_count("0").unwrap(), 0);
        assert!(parse_count("99999999999").is_err());
        assert!(parse_count("2.0").is_err());
    }

    #[test]
    fn test_parse_amount_whole_numbers_only() {
        assert_eq!(parse_amount("50000").unwrap(), dec!(50000));
        assert!(parse_amount("50000.50").is_err());
    }
}
