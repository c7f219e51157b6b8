//! Paired-deposit ratio derivation
//!
//! Adding liquidity to an established pool must not move the price, so the
//! second deposit amount is derived from the first at the current reserve
//! ratio. Floor division makes the derived amount conservative: never more
//! than the exact ratio requires, matching the contract's own division.

use crate::consistency::ensure_established;
use crate::error::AmmError;
use ethers::types::U256;
use types::{PoolSnapshot, TokenSide};

/// Paired amount required to deposit `primary_amount` of `primary_side`
/// without changing the pool ratio:
/// `floor(primary_amount * other_reserve / primary_reserve)`.
///
/// Only valid against an `Established` snapshot; `Uninitialized` and
/// `Inconsistent` pools take caller-chosen amounts instead and are rejected
/// here rather than trusted to the caller's guard.
pub fn required_paired(
    primary_amount: U256,
    primary_side: TokenSide,
    snapshot: &PoolSnapshot,
) -> Result<U256, AmmError> {
    ensure_established(snapshot)?;

    let primary_reserve = snapshot.reserve(primary_side);
    let other_reserve = snapshot.other_reserve(primary_side);

    // Established guarantees nonzero reserves; a zero here means the
    // classification gate was bypassed.
    debug_assert!(!primary_reserve.is_zero());
    if primary_reserve.is_zero() {
        return Err(AmmError::NumericDomain(
            "zero primary reserve past establishment gate",
        ));
    }

    let scaled = primary_amount
        .checked_mul(other_reserve)
        .ok_or(AmmError::NumericDomain("paired-amount product overflow"))?;

    Ok(scaled / primary_reserve)
}
