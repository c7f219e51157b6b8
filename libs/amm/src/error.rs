//! Quoting error taxonomy

use ethers::types::U256;
use thiserror::Error;

/// Errors surfaced by the quoting engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// Impossible on-chain state observed: `k > 0` while a reserve reads
    /// zero. A stale-read anomaly — recover by re-reading chain state,
    /// never by quoting against the snapshot.
    #[error(
        "stale pool state: k = {k} with reserves ({x_reserve}, {y_reserve}); re-read required"
    )]
    StaleState {
        k: U256,
        x_reserve: U256,
        y_reserve: U256,
    },

    /// Pool has no liquidity yet (`k == 0`); the caller chooses both
    /// amounts directly instead of deriving one.
    #[error("pool is uninitialized (k = 0); no ratio to derive")]
    Uninitialized,

    /// Zero divisor or checked-arithmetic failure in a derived formula.
    /// Must not be mapped to a zero result — that would hide an invariant
    /// violation.
    #[error("numeric domain violation: {0}")]
    NumericDomain(&'static str),
}
