//! Contract call descriptions and submission results
//!
//! A [`ContractCall`] names a target contract and one pair/token function
//! with typed arguments; the submitter owns ABI encoding and signing.

use ethers::types::{Address, H256, U256};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Functions the external contract layer must expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolFunction {
    /// ERC-20 approval for the pair to pull a deposit or swap input.
    Approve { spender: Address, amount: U256 },
    /// Deposit both tokens; mints LP proportional to share contributed.
    AddLiquidity { x_amount: U256, y_amount: U256 },
    /// Burn LP for the underlying reserves.
    RemoveLiquidity { lp_amount: U256 },
    /// Swap through the pair; exactly one input is nonzero.
    Swap { x_amount_in: U256, y_amount_in: U256 },
    /// Test-token faucet; no approval required.
    FreeMintToSender { amount: U256 },
}

impl PoolFunction {
    /// Contract-side function name.
    pub fn name(&self) -> &'static str {
        match self {
            PoolFunction::Approve { .. } => "approve",
            PoolFunction::AddLiquidity { .. } => "addLiquidity",
            PoolFunction::RemoveLiquidity { .. } => "removeLiquidity",
            PoolFunction::Swap { .. } => "swap",
            PoolFunction::FreeMintToSender { .. } => "freeMintToSender",
        }
    }

    /// Whether this call is an approval prerequisite rather than the
    /// operation's action.
    pub fn is_approval(&self) -> bool {
        matches!(self, PoolFunction::Approve { .. })
    }
}

/// One call destined for the transaction submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    pub target: Address,
    pub function: PoolFunction,
}

impl fmt::Display for ContractCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@0x{}",
            self.function.name(),
            hex::encode(self.target.as_bytes())
        )
    }
}

/// Handle to a submitted call, identified by its transaction hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallHandle {
    pub tx_hash: H256,
}

/// Status reported by the submitter for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallStatus {
    Pending,
    Confirmed,
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_names_match_contract_abi() {
        let spender = Address::zero();
        let amount = U256::one();
        assert_eq!(PoolFunction::Approve { spender, amount }.name(), "approve");
        assert_eq!(
            PoolFunction::AddLiquidity {
                x_amount: amount,
                y_amount: amount
            }
            .name(),
            "addLiquidity"
        );
        assert_eq!(
            PoolFunction::RemoveLiquidity { lp_amount: amount }.name(),
            "removeLiquidity"
        );
        assert_eq!(
            PoolFunction::Swap {
                x_amount_in: amount,
                y_amount_in: U256::zero()
            }
            .name(),
            "swap"
        );
        assert_eq!(
            PoolFunction::FreeMintToSender { amount }.name(),
            "freeMintToSender"
        );
    }

    #[test]
    fn test_only_approve_is_approval() {
        let amount = U256::one();
        assert!(PoolFunction::Approve {
            spender: Address::zero(),
            amount
        }
        .is_approval());
        assert!(!PoolFunction::Swap {
            x_amount_in: amount,
            y_amount_in: U256::zero()
        }
        .is_approval());
    }
}
