//! Pool trait for a unified quoting interface

use crate::consistency::{classify, PoolClassification};
use crate::error::AmmError;
use crate::{liquidity, swap};
use ethers::types::U256;
use types::{PoolSnapshot, SwapDirection, TokenSide};

/// Unified quoting interface over one pool reading.
///
/// Presentation layers program against this seam rather than the free
/// functions so every tab (add-liquidity, swap) shares one quoting core.
pub trait PoolQuoter {
    /// Health classification of the underlying reading.
    fn classification(&self) -> PoolClassification;

    /// Swap output for a given input, net of fee.
    fn amount_out(&self, amount_in: U256, direction: SwapDirection) -> Result<U256, AmmError>;

    /// Paired deposit amount preserving the current ratio.
    fn paired_deposit(&self, primary_amount: U256, primary_side: TokenSide)
        -> Result<U256, AmmError>;

    /// Fee tier in basis points.
    fn fee_bps(&self) -> u32 {
        30
    }
}

impl PoolQuoter for PoolSnapshot {
    fn classification(&self) -> PoolClassification {
        classify(self)
    }

    fn amount_out(&self, amount_in: U256, direction: SwapDirection) -> Result<U256, AmmError> {
        swap::quote(amount_in, direction, self)
    }

    fn paired_deposit(
        &self,
        primary_amount: U256,
        primary_side: TokenSide,
    ) -> Result<U256, AmmError> {
        liquidity::required_paired(primary_amount, primary_side, self)
    }
}
