//! # Operation Sequencer - Approve-Then-Act Call Planning and Lifecycle
//!
//! ## Purpose
//!
//! Turns user intents (add liquidity, swap, remove liquidity, mint test
//! tokens) into ordered contract-call plans, submits them through the
//! transaction-submitter seam, and drives the single post-confirmation side
//! effect: scoped invalidation of the pool snapshot and the touched balance
//! readings.
//!
//! ## Integration Points
//!
//! - **Input Sources**: validated amounts (raw `U256` or user strings
//!   rejected at the parse boundary), pool snapshots for ratio derivation
//! - **Output Destinations**: a [`TransactionSubmitter`] implementation
//!   (wallet/RPC in production, mocked in tests); invalidation messages to
//!   the `state-pool` store
//! - **Ordering**: approvals are submitted before their dependent action,
//!   in plan order, but the action is **not** held for approval
//!   confirmation — see the race note on
//!   [`OperationSequencer::submit_operation`]
//!
//! ## Architecture Role
//!
//! ```text
//! User Intent → [plan_*] → Vec<ContractCall> → [submit_operation] → Submitter
//!                                                      ↓
//!                                            [await_completion]
//!                                  Confirmed ↓                ↓ Failed
//!                        scoped invalidations to store   error reported,
//!                        + operation cleared             nothing invalidated
//! ```
//!
//! There is no retry, no timeout wrapping a submitted call, and no
//! cancellation: once submitted, an operation runs to Confirmed or Failed
//! and is observed asynchronously.

pub mod calls;
pub mod config;
pub mod error;
pub mod sequencer;
pub mod submitter;

pub use calls::{CallHandle, CallStatus, ContractCall, PoolFunction};
pub use config::SequencerConfig;
pub use error::SequencerError;
pub use sequencer::{OperationKind, OperationSequencer, OperationStatus, PendingOperation};
pub use submitter::TransactionSubmitter;
