//! Scoped cache invalidation messages
//!
//! Confirmed operations invalidate exactly what they touched: the pool's
//! snapshot and the balance readings for the tokens involved. Messages
//! travel over a channel from the sequencer to the store, keyed per pool
//! and per `(token, account)` pair — never a global flush.

use crossbeam_channel::{unbounded, Receiver, Sender};
use ethers::types::Address;
use tracing::{debug, warn};
use types::PoolId;

/// One invalidation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidationScope {
    /// Drop the snapshot for this pool.
    Pool(PoolId),
    /// Drop one `(token, account)` balance reading.
    Balance { token: Address, account: Address },
}

/// Sending half of the invalidation channel, held by the sequencer.
#[derive(Debug, Clone)]
pub struct InvalidationSender {
    tx: Sender<InvalidationScope>,
}

impl InvalidationSender {
    /// Send one scope. A disconnected store is logged, not fatal — the
    /// confirmation that triggered the send already happened on-chain.
    pub fn send(&self, scope: InvalidationScope) {
        debug!(?scope, "sending invalidation");
        if self.tx.send(scope).is_err() {
            warn!(?scope, "invalidation receiver dropped, scope discarded");
        }
    }
}

/// Create the sequencer→store invalidation channel.
pub fn invalidation_channel() -> (InvalidationSender, Receiver<InvalidationScope>) {
    let (tx, rx) = unbounded();
    (InvalidationSender { tx }, rx)
}
