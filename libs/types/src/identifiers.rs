//! Pool and token identifiers
//!
//! Thin newtypes over chain addresses plus the two orientation enums used
//! throughout quoting and call planning.

use ethers::types::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one constant-product pair contract.
///
/// Wraps the full 20-byte pair address; scoped cache invalidation is keyed
/// by this, so it must never be truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolId(pub Address);

impl PoolId {
    pub fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for PoolId {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0.as_bytes()))
    }
}

/// Which side of the pair an amount refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSide {
    X,
    Y,
}

impl TokenSide {
    /// The opposite side of the pair.
    pub fn other(self) -> Self {
        match self {
            TokenSide::X => TokenSide::Y,
            TokenSide::Y => TokenSide::X,
        }
    }
}

/// Swap direction through the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    XToY,
    YToX,
}

impl SwapDirection {
    /// Side the input amount is denominated in.
    pub fn input_side(self) -> TokenSide {
        match self {
            SwapDirection::XToY => TokenSide::X,
            SwapDirection::YToX => TokenSide::Y,
        }
    }

    /// Side the quoted output is denominated in.
    pub fn output_side(self) -> TokenSide {
        self.input_side().other()
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDirection::XToY => write!(f, "X→Y"),
            SwapDirection::YToX => write!(f, "Y→X"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_are_involutive() {
        assert_eq!(TokenSide::X.other(), TokenSide::Y);
        assert_eq!(TokenSide::X.other().other(), TokenSide::X);
    }

    #[test]
    fn test_direction_sides() {
        assert_eq!(SwapDirection::XToY.input_side(), TokenSide::X);
        assert_eq!(SwapDirection::XToY.output_side(), TokenSide::Y);
        assert_eq!(SwapDirection::YToX.input_side(), TokenSide::Y);
        assert_eq!(SwapDirection::YToX.output_side(), TokenSide::X);
    }

    #[test]
    fn test_pool_id_display_is_full_address() {
        let pool = PoolId(Address::from_low_u64_be(0xabcd));
        let rendered = pool.to_string();
        assert!(rendered.starts_with("0x"));
        // 2 chars of prefix + 40 hex chars for the full 20 bytes
        assert_eq!(rendered.len(), 42);
    }
}
