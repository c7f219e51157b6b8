//! Transaction submitter seam

use crate::calls::{CallHandle, CallStatus, ContractCall};
use crate::error::SequencerError;
use async_trait::async_trait;

/// Write seam over the wallet/RPC layer.
///
/// `submit` is fire-and-forget: it returns once the call is accepted into
/// the mempool (hash assigned), not once it is mined. Status is observed
/// separately through `status`, which may report `Pending` any number of
/// times before a terminal `Confirmed` or `Failed`.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    /// Sign and broadcast one call.
    async fn submit(&self, call: &ContractCall) -> Result<CallHandle, SequencerError>;

    /// Current status of a previously submitted call.
    async fn status(&self, handle: CallHandle) -> Result<CallStatus, SequencerError>;
}
