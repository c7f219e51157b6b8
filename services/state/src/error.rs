//! State management errors

use thiserror::Error;
use types::PoolId;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("chain read failed: {reason}")]
    ReadFailed { reason: String },

    #[error("no snapshot captured yet for pool {0}")]
    SnapshotMissing(PoolId),
}
