//! # MiniAMM Quoting Engine - Constant-Product Pool Mathematics
//!
//! ## Purpose
//!
//! Pure mathematical core for the MiniAMM pair: snapshot classification,
//! paired-deposit ratio derivation, and fee-adjusted constant-product swap
//! quotes. All arithmetic is unsigned 256-bit integer with floor rounding,
//! matching the pair contract's own integer division exactly — no floating
//! point, no precision loss, no hidden rounding.
//!
//! ## Integration Points
//!
//! - **Input Sources**: [`PoolSnapshot`](types::PoolSnapshot) readings from
//!   the `state-pool` provider seam
//! - **Output Destinations**: quote displays and the operation sequencer's
//!   amount derivation
//! - **Fee Model**: fixed 0.3% (3/1000) taken from the input amount before
//!   the invariant is applied
//! - **Safety**: every derived division is guarded; an inconsistent snapshot
//!   (`k > 0` with a zero reserve) is rejected as a stale-read anomaly and
//!   never reaches the established-pool formulas
//!
//! ## Concurrency
//!
//! Every function here is a pure, synchronous, side-effect-free function of
//! one snapshot plus request parameters. Quotes are safe to recompute on
//! every snapshot update or keystroke without locking.

pub mod consistency;
pub mod error;
pub mod liquidity;
pub mod pool_traits;
pub mod swap;

pub use consistency::{classify, PoolClassification};
pub use error::AmmError;
pub use liquidity::required_paired;
pub use pool_traits::PoolQuoter;
pub use swap::{effective_input, quote, FEE_DENOMINATOR, FEE_NUMERATOR};
