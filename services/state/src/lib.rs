//! # Pool State Management - Snapshot Tracking with Scoped Invalidation
//!
//! ## Purpose
//!
//! Holds the latest observed chain state for the MiniAMM pair: pool
//! snapshots and per-account token balances, each immutable once captured
//! and superseded by later reads. A polling loop refreshes state on a fixed
//! interval; confirmed operations invalidate exactly the keys they touched
//! via a message channel, so the next read is fresh without a global flush.
//!
//! ## Integration Points
//!
//! - **Input Sources**: a [`ChainStateProvider`] implementation (RPC-backed
//!   in production, mocked in tests) polled by [`SnapshotPoller`]
//! - **Output Destinations**: the quoting engine reads snapshots from
//!   [`SnapshotStore`]; presentation layers read balances
//! - **Invalidation**: the operation sequencer sends [`InvalidationScope`]
//!   messages keyed by pool id and `(token, account)` pairs
//! - **Anomaly Handling**: inconsistent snapshots (`k > 0`, zero reserve)
//!   are recorded but flagged, and the poller re-reads them out of band
//!
//! ## Architecture Role
//!
//! ```text
//! Chain State Provider → [SnapshotPoller] → [SnapshotStore] → Quoting Engine
//!        ↑ poll (5s)           ↓                  ↑
//!        └── forced re-read on anomaly      InvalidationScope messages
//!                                           from the OperationSequencer
//! ```
//!
//! Snapshots may be stale relative to an in-flight, unconfirmed
//! transaction; nothing here synchronizes reads with submissions. Quoting
//! stays pure and lock-free because snapshots are shared as `Arc` values
//! and swapped whole.

pub mod error;
pub mod invalidation;
pub mod provider;
pub mod store;

pub use error::StateError;
pub use invalidation::{invalidation_channel, InvalidationScope, InvalidationSender};
pub use provider::{ChainStateProvider, PollerConfig, ReserveReading, SnapshotPoller};
pub use store::{SnapshotStore, StoreStats};
