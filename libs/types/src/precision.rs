//! 18-decimal fixed-point parse/format boundary
//!
//! All internal arithmetic stays in raw `U256` units; this module is the
//! only place amounts cross between human-entered strings and wei-scale
//! integers. User input is validated here, before any call is planned.

use ethers::types::U256;
use ethers::utils::{format_units, parse_units, ParseUnits};
use thiserror::Error;

/// One whole token at 18-decimal scale (10^18).
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Display precision for every token in the pair (both mock tokens and the
/// LP token are 18-decimal).
pub const DISPLAY_DECIMALS: u32 = 18;

#[derive(Debug, Error)]
pub enum PrecisionError {
    #[error("Empty amount")]
    Empty,

    #[error("Invalid amount {input:?}: {reason}")]
    Invalid { input: String, reason: String },

    #[error("Negative amount {0:?}")]
    Negative(String),
}

/// Parse a user-entered decimal string into raw 18-decimal units.
///
/// Rejects empty, non-numeric, and negative input so malformed amounts
/// never reach a call planner.
pub fn parse_amount(input: &str) -> Result<U256, PrecisionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PrecisionError::Empty);
    }

    match parse_units(trimmed, DISPLAY_DECIMALS) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(_)) => Err(PrecisionError::Negative(trimmed.to_string())),
        Err(e) => Err(PrecisionError::Invalid {
            input: trimmed.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Render a raw 18-decimal amount for display.
pub fn format_amount(value: U256) -> String {
    format_units(value, DISPLAY_DECIMALS).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(parse_amount("1").unwrap(), U256::from(WAD));
        assert_eq!(parse_amount("1.5").unwrap(), U256::from(WAD) * 3 / 2);
        assert_eq!(parse_amount("0.000000000000000001").unwrap(), U256::one());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_amount(""), Err(PrecisionError::Empty)));
        assert!(matches!(parse_amount("   "), Err(PrecisionError::Empty)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_amount("abc"),
            Err(PrecisionError::Invalid { .. })
        ));
        assert!(matches!(
            parse_amount("1.2.3"),
            Err(PrecisionError::Invalid { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            parse_amount("-5"),
            Err(PrecisionError::Negative(_))
        ));
    }

    #[test]
    fn test_format_round_trip() {
        let raw = parse_amount("2.25").unwrap();
        let rendered = format_amount(raw);
        assert_eq!(parse_amount(&rendered).unwrap(), raw);
    }
}
