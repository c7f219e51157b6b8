//! # MiniAMM Shared Types
//!
//! ## Purpose
//!
//! Unified type system for the MiniAMM workspace: pool and token identifiers,
//! immutable pool-state snapshots, balance readings, and 18-decimal fixed-point
//! precision helpers. Every other crate in the workspace builds on these types,
//! so they carry no business logic beyond derived accessors.
//!
//! ## Integration Points
//!
//! - **Producers**: the chain-state provider seam in `state-pool` constructs
//!   [`PoolSnapshot`] and [`BalanceReading`] values from RPC reads
//! - **Consumers**: `miniamm-amm` quotes against snapshots; the sequencer
//!   plans contract calls keyed by [`PoolId`] and token addresses
//! - **Precision**: all amounts are `U256` at 18-decimal fixed-point scale;
//!   see [`precision`] for the parse/format boundary
//!
//! ## Critical Rules
//!
//! 1. **NO FLOATING POINT**: amounts, reserves, and `k` never touch f32/f64
//! 2. **Snapshots are immutable**: later chain reads supersede a snapshot,
//!    they never mutate it
//! 3. **Nanosecond timestamps**: capture times are u64 nanoseconds, never
//!    truncated to milliseconds

pub mod identifiers;
pub mod precision;
pub mod snapshot;

pub use identifiers::{PoolId, SwapDirection, TokenSide};
pub use precision::{format_amount, parse_amount, PrecisionError, WAD};
pub use snapshot::{BalanceReading, PoolSnapshot};

// Chain-native scalar types come from the execution stack so every crate
// agrees on one U256/Address definition.
pub use ethers::types::{Address, H256, U256};
