//! Snapshot classification and the stale-read anomaly
//!
//! The provider's reserve/k reads are independent RPC calls that may land on
//! different blocks, so a snapshot can report `k > 0` alongside a zero
//! reserve — a state the contract invariant `k == x * y` makes impossible.
//! Classification is how that anomaly is detected before any formula runs.

use crate::error::AmmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;
use types::PoolSnapshot;

/// Derived health classification of one snapshot. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolClassification {
    /// `k == 0`: first liquidity provision is legal at any ratio.
    Uninitialized,
    /// `k > 0` with both reserves nonzero: the quoting formulas apply.
    Established,
    /// `k > 0` with a zero reserve: stale-read anomaly. Treated like
    /// `Uninitialized` for accepting user-supplied ratios, but the caller
    /// must force a fresh read before trusting any derived quote.
    Inconsistent,
}

impl PoolClassification {
    /// Whether the established-pool formulas may run against the snapshot.
    pub fn is_quotable(self) -> bool {
        matches!(self, PoolClassification::Established)
    }

    /// Whether the caller supplies both deposit amounts directly.
    pub fn accepts_caller_ratio(self) -> bool {
        matches!(
            self,
            PoolClassification::Uninitialized | PoolClassification::Inconsistent
        )
    }
}

impl fmt::Display for PoolClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolClassification::Uninitialized => write!(f, "uninitialized"),
            PoolClassification::Established => write!(f, "established"),
            PoolClassification::Inconsistent => write!(f, "inconsistent"),
        }
    }
}

/// Classify a snapshot. Pure and idempotent: the same snapshot always
/// yields the same classification.
pub fn classify(snapshot: &PoolSnapshot) -> PoolClassification {
    if snapshot.k.is_zero() {
        PoolClassification::Uninitialized
    } else if !snapshot.x_reserve.is_zero() && !snapshot.y_reserve.is_zero() {
        PoolClassification::Established
    } else {
        PoolClassification::Inconsistent
    }
}

/// Gate for the established-pool formulas.
///
/// `Inconsistent` must never silently fall through to a formula that would
/// divide by a zero reserve, so it is rejected here with a distinct
/// diagnostic rather than at the division site.
pub(crate) fn ensure_established(snapshot: &PoolSnapshot) -> Result<(), AmmError> {
    match classify(snapshot) {
        PoolClassification::Established => Ok(()),
        PoolClassification::Uninitialized => Err(AmmError::Uninitialized),
        PoolClassification::Inconsistent => {
            warn!(
                pool = %snapshot.pool_id,
                k = %snapshot.k,
                x_reserve = %snapshot.x_reserve,
                y_reserve = %snapshot.y_reserve,
                "inconsistent snapshot: k > 0 with a zero reserve, forcing re-read"
            );
            Err(AmmError::StaleState {
                k: snapshot.k,
                x_reserve: snapshot.x_reserve,
                y_reserve: snapshot.y_reserve,
            })
        }
    }
}
