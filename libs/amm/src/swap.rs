//! Fee-adjusted constant-product swap quotes
//!
//! The 0.3% fee comes off the input before the invariant is applied. The
//! output formula is expressed through the published `k` rather than the
//! reserve product so the quote stays consistent with the contract even
//! when fee accrual has nudged `k` away from `x * y`:
//!
//! `output = floor((reserve_out * (reserve_in + effective) - k) / (reserve_in + effective))`

use crate::consistency::ensure_established;
use crate::error::AmmError;
use ethers::types::U256;
use types::{PoolSnapshot, SwapDirection};

/// Swap fee: 3/1000 (0.3%) of the input amount.
pub const FEE_NUMERATOR: u64 = 3;
pub const FEE_DENOMINATOR: u64 = 1000;

/// Input amount net of the proportional fee.
///
/// The fee floors, so inputs below `FEE_DENOMINATOR / FEE_NUMERATOR` raw
/// units pay no fee at all — visible only far below 18-decimal scale.
pub fn effective_input(input_amount: U256) -> Result<U256, AmmError> {
    let fee = input_amount
        .checked_mul(U256::from(FEE_NUMERATOR))
        .ok_or(AmmError::NumericDomain("fee product overflow"))?
        / U256::from(FEE_DENOMINATOR);
    // fee <= input for any 3/1000 split
    Ok(input_amount - fee)
}

/// Quote the output amount for swapping `input_amount` through the pool in
/// `direction`, net of the 0.3% fee. Advisory only — no minimum-output or
/// slippage bound is derived from it.
///
/// Only valid against an `Established` snapshot. A zero denominator is a
/// numeric-domain error, never a silent zero: with both reserves nonzero it
/// cannot occur, so reaching it means the classification gate was bypassed.
pub fn quote(
    input_amount: U256,
    direction: SwapDirection,
    snapshot: &PoolSnapshot,
) -> Result<U256, AmmError> {
    ensure_established(snapshot)?;

    let reserve_in = snapshot.reserve(direction.input_side());
    let reserve_out = snapshot.reserve(direction.output_side());

    let effective = effective_input(input_amount)?;
    let denominator = reserve_in
        .checked_add(effective)
        .ok_or(AmmError::NumericDomain("input overflows reserve sum"))?;
    if denominator.is_zero() {
        return Err(AmmError::NumericDomain("zero divisor in swap quote"));
    }

    let grown = reserve_out
        .checked_mul(denominator)
        .ok_or(AmmError::NumericDomain("reserve product overflow"))?;
    // k above the grown product would mean the snapshot's k belongs to a
    // different pool state than its reserves; surface it, don't clamp.
    let numerator = grown
        .checked_sub(snapshot.k)
        .ok_or(AmmError::NumericDomain("k exceeds grown reserve product"))?;

    Ok(numerator / denominator)
}
