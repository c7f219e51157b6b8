//! Quoting Engine Property Tests
//!
//! These validate mathematical properties that must hold for every
//! established pool, regardless of specific reserve values: ratio fidelity,
//! quote monotonicity, and the reserve bound on swap output.

use ethers::types::{Address, U256};
use miniamm_amm::{classify, quote, required_paired, PoolClassification};
use proptest::prelude::*;
use types::{PoolId, PoolSnapshot, SwapDirection, TokenSide};

/// Established snapshot with `k` exactly equal to the reserve product.
fn established(x: u128, y: u128) -> PoolSnapshot {
    let x = U256::from(x);
    let y = U256::from(y);
    PoolSnapshot {
        pool_id: PoolId(Address::zero()),
        x_reserve: x,
        y_reserve: y,
        k: x * y,
        lp_total_supply: U256::zero(),
        captured_at_ns: 0,
    }
}

proptest! {
    /// required_paired is exactly the floor of the reserve-ratio product.
    #[test]
    fn paired_deposit_matches_floor_formula(
        x in 1u128..1_000_000_000_000_000_000u128,
        y in 1u128..1_000_000_000_000_000_000u128,
        amount in 0u128..1_000_000_000_000_000_000u128,
    ) {
        let snap = established(x, y);
        let paired = required_paired(U256::from(amount), TokenSide::X, &snap).unwrap();
        let expected = U256::from(amount) * U256::from(y) / U256::from(x);
        prop_assert_eq!(paired, expected);
    }

    /// A larger primary deposit never requires a smaller paired deposit.
    #[test]
    fn paired_deposit_is_non_decreasing(
        x in 1u128..1_000_000_000_000u128,
        y in 1u128..1_000_000_000_000u128,
        amount in 0u128..1_000_000_000_000u128,
        bump in 1u128..1_000_000u128,
    ) {
        let snap = established(x, y);
        let smaller = required_paired(U256::from(amount), TokenSide::Y, &snap).unwrap();
        let larger = required_paired(U256::from(amount + bump), TokenSide::Y, &snap).unwrap();
        prop_assert!(larger >= smaller);
    }

    /// A larger input never quotes a smaller output, in either direction.
    #[test]
    fn quote_is_non_decreasing_in_input(
        x in 1u128..1_000_000_000_000u128,
        y in 1u128..1_000_000_000_000u128,
        amount in 0u128..1_000_000_000_000u128,
        bump in 1u128..1_000_000u128,
    ) {
        let snap = established(x, y);
        for direction in [SwapDirection::XToY, SwapDirection::YToX] {
            let smaller = quote(U256::from(amount), direction, &snap).unwrap();
            let larger = quote(U256::from(amount + bump), direction, &snap).unwrap();
            prop_assert!(larger >= smaller);
        }
    }

    /// No quote can drain the opposing reserve.
    #[test]
    fn quote_is_bounded_by_opposing_reserve(
        x in 1u128..1_000_000_000_000u128,
        y in 1u128..1_000_000_000_000u128,
        amount in 0u128..u128::MAX / 2,
    ) {
        let snap = established(x, y);
        let out = quote(U256::from(amount), SwapDirection::XToY, &snap).unwrap();
        prop_assert!(out < snap.y_reserve);
        let out = quote(U256::from(amount), SwapDirection::YToX, &snap).unwrap();
        prop_assert!(out < snap.x_reserve);
    }

    /// Classification is a pure function of the snapshot values.
    #[test]
    fn classification_depends_only_on_values(
        x in 0u128..1_000_000u128,
        y in 0u128..1_000_000u128,
        k in 0u128..1_000_000_000_000u128,
    ) {
        let snap = PoolSnapshot {
            pool_id: PoolId(Address::zero()),
            x_reserve: U256::from(x),
            y_reserve: U256::from(y),
            k: U256::from(k),
            lp_total_supply: U256::zero(),
            captured_at_ns: 0,
        };
        let first = classify(&snap);
        prop_assert_eq!(first, classify(&snap.clone()));

        let expected = if k == 0 {
            PoolClassification::Uninitialized
        } else if x > 0 && y > 0 {
            PoolClassification::Established
        } else {
            PoolClassification::Inconsistent
        };
        prop_assert_eq!(first, expected);
    }
}
