//! Sequencer errors

use miniamm_amm::AmmError;
use thiserror::Error;
use types::PrecisionError;

#[derive(Debug, Error)]
pub enum SequencerError {
    /// Zero or otherwise unusable amount; rejected before any call is
    /// planned, so no partial plan is ever submitted.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Malformed user input caught at the parse boundary.
    #[error(transparent)]
    MalformedInput(#[from] PrecisionError),

    /// Ratio/quote derivation failed for the current snapshot.
    #[error(transparent)]
    Quote(#[from] AmmError),

    /// The submitter rejected a call or the chain reverted it. Does not
    /// alter snapshot state and triggers no invalidation.
    #[error("submission failed: {0}")]
    Submission(String),

    /// The action never reached a terminal status within the configured
    /// window.
    #[error("confirmation timeout after {0}s")]
    ConfirmationTimeout(u64),
}
