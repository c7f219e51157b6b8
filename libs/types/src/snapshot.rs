//! Immutable pool-state and balance readings
//!
//! A [`PoolSnapshot`] is one observation of a pair contract's published
//! state. The three reserve/k reads behind it are independent RPC calls with
//! no atomicity guarantee, so a snapshot may be internally inconsistent —
//! classification of that is the quoting crate's job, not this struct's.

use crate::identifiers::{PoolId, TokenSide};
use ethers::types::U256;
use serde::{Deserialize, Serialize};

/// Point-in-time reading of a constant-product pair's state.
///
/// Immutable once captured; a later read produces a new snapshot that
/// supersedes this one. Healthy pools satisfy `k == x_reserve * y_reserve`
/// (modulo fee accrual) and have both reserves zero or both nonzero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub pool_id: PoolId,
    pub x_reserve: U256,
    pub y_reserve: U256,
    /// Constant-product invariant as published by the contract. Read
    /// directly from chain state, not recomputed from the reserves.
    pub k: U256,
    pub lp_total_supply: U256,
    /// Capture time in nanoseconds, assigned by the provider.
    pub captured_at_ns: u64,
}

impl PoolSnapshot {
    /// Reserve on the given side.
    pub fn reserve(&self, side: TokenSide) -> U256 {
        match side {
            TokenSide::X => self.x_reserve,
            TokenSide::Y => self.y_reserve,
        }
    }

    /// Reserve on the opposite side.
    pub fn other_reserve(&self, side: TokenSide) -> U256 {
        self.reserve(side.other())
    }

    /// Current pool ratio `(x_reserve, y_reserve)` for display.
    ///
    /// Advisory only; quoting always goes through the fee-adjusted formulas.
    pub fn spot_ratio(&self) -> (U256, U256) {
        (self.x_reserve, self.y_reserve)
    }
}

/// Point-in-time reading of one token balance for one account.
///
/// Cached per `(token, account)` pair and superseded, never mutated,
/// exactly like pool snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReading {
    pub amount: U256,
    pub captured_at_ns: u64,
}
