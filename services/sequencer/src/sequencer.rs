//! Operation planning, submission, and confirmation handling

use crate::calls::{CallHandle, CallStatus, ContractCall, PoolFunction};
use crate::config::SequencerConfig;
use crate::error::SequencerError;
use crate::submitter::TransactionSubmitter;
use dashmap::DashMap;
use ethers::types::{Address, H256, U256};
use miniamm_amm::required_paired;
use state_pool::{InvalidationScope, InvalidationSender};
use std::sync::Arc;
use tokio::time::{sleep, Duration, Instant};
use tracing::{debug, error, info};
use types::{parse_amount, PoolId, PoolSnapshot, SwapDirection, TokenSide};

/// User-level operation families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    AddLiquidity,
    Swap,
    RemoveLiquidity,
    Mint,
}

/// Lifecycle of one planned operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Building,
    Submitted,
    Confirmed,
    Failed(String),
}

/// One approve-then-act plan moving through its lifecycle. Identified by
/// the action call's transaction hash once the submitter assigns one.
#[derive(Debug, Clone)]
pub struct PendingOperation {
    pub kind: OperationKind,
    pub calls: Vec<ContractCall>,
    pub action_hash: Option<H256>,
    pub status: OperationStatus,
}

/// Plans call sequences and drives them through the submitter seam.
pub struct OperationSequencer {
    config: SequencerConfig,
    submitter: Arc<dyn TransactionSubmitter>,
    invalidations: InvalidationSender,
    /// Operations submitted but not yet terminal, keyed by action hash.
    in_flight: DashMap<H256, OperationKind>,
}

impl OperationSequencer {
    pub fn new(
        config: SequencerConfig,
        submitter: Arc<dyn TransactionSubmitter>,
        invalidations: InvalidationSender,
    ) -> Self {
        Self {
            config,
            submitter,
            invalidations,
            in_flight: DashMap::new(),
        }
    }

    fn token_for(&self, side: TokenSide) -> Address {
        match side {
            TokenSide::X => self.config.token_x,
            TokenSide::Y => self.config.token_y,
        }
    }

    fn ensure_nonzero(amount: U256, what: &str) -> Result<(), SequencerError> {
        if amount.is_zero() {
            return Err(SequencerError::InvalidAmount(format!("{what} is zero")));
        }
        Ok(())
    }

    /// Plan an add-liquidity: approve both deposits, then the action.
    pub fn plan_add_liquidity(
        &self,
        x_amount: U256,
        y_amount: U256,
    ) -> Result<Vec<ContractCall>, SequencerError> {
        Self::ensure_nonzero(x_amount, "x deposit")?;
        Self::ensure_nonzero(y_amount, "y deposit")?;
        Ok(vec![
            ContractCall {
                target: self.config.token_x,
                function: PoolFunction::Approve {
                    spender: self.config.pair_address,
                    amount: x_amount,
                },
            },
            ContractCall {
                target: self.config.token_y,
                function: PoolFunction::Approve {
                    spender: self.config.pair_address,
                    amount: y_amount,
                },
            },
            ContractCall {
                target: self.config.pair_address,
                function: PoolFunction::AddLiquidity { x_amount, y_amount },
            },
        ])
    }

    /// Plan an add-liquidity with the paired amount derived from the
    /// current reserve ratio. Only valid for an established snapshot; an
    /// uninitialized or inconsistent pool takes caller-chosen amounts
    /// through [`plan_add_liquidity`](Self::plan_add_liquidity) instead.
    pub fn plan_add_liquidity_at_ratio(
        &self,
        primary_amount: U256,
        primary_side: TokenSide,
        snapshot: &PoolSnapshot,
    ) -> Result<Vec<ContractCall>, SequencerError> {
        Self::ensure_nonzero(primary_amount, "primary deposit")?;
        let paired = required_paired(primary_amount, primary_side, snapshot)?;
        let (x_amount, y_amount) = match primary_side {
            TokenSide::X => (primary_amount, paired),
            TokenSide::Y => (paired, primary_amount),
        };
        self.plan_add_liquidity(x_amount, y_amount)
    }

    /// Plan a swap: approve the input token, then the action with exactly
    /// one nonzero input.
    pub fn plan_swap(
        &self,
        amount_in: U256,
        direction: SwapDirection,
    ) -> Result<Vec<ContractCall>, SequencerError> {
        Self::ensure_nonzero(amount_in, "swap input")?;
        let (x_amount_in, y_amount_in) = match direction {
            SwapDirection::XToY => (amount_in, U256::zero()),
            SwapDirection::YToX => (U256::zero(), amount_in),
        };
        Ok(vec![
            ContractCall {
                target: self.token_for(direction.input_side()),
                function: PoolFunction::Approve {
                    spender: self.config.pair_address,
                    amount: amount_in,
                },
            },
            ContractCall {
                target: self.config.pair_address,
                function: PoolFunction::Swap {
                    x_amount_in,
                    y_amount_in,
                },
            },
        ])
    }

    /// Plan a swap from raw user input, rejecting malformed amounts before
    /// anything is planned.
    pub fn plan_swap_input(
        &self,
        input: &str,
        direction: SwapDirection,
    ) -> Result<Vec<ContractCall>, SequencerError> {
        let amount_in = parse_amount(input)?;
        self.plan_swap(amount_in, direction)
    }

    /// Plan a remove-liquidity. The pair is its own LP token, so there is
    /// no approval step.
    pub fn plan_remove_liquidity(
        &self,
        lp_amount: U256,
    ) -> Result<Vec<ContractCall>, SequencerError> {
        Self::ensure_nonzero(lp_amount, "lp amount")?;
        Ok(vec![ContractCall {
            target: self.config.pair_address,
            function: PoolFunction::RemoveLiquidity { lp_amount },
        }])
    }

    /// Plan a test-token mint against one side's token.
    pub fn plan_mint(
        &self,
        side: TokenSide,
        amount: U256,
    ) -> Result<Vec<ContractCall>, SequencerError> {
        Self::ensure_nonzero(amount, "mint amount")?;
        Ok(vec![ContractCall {
            target: self.token_for(side),
            function: PoolFunction::FreeMintToSender { amount },
        }])
    }

    /// Submit a plan's calls in order.
    ///
    /// Fire-and-forget: each call is handed to the submitter as soon as
    /// the previous one is accepted, with no wait for approval
    /// confirmation before the dependent action goes out. Known race: an
    /// action mined before its approval can fail on-chain; submission
    /// order is the only guarantee made here.
    pub async fn submit_operation(
        &self,
        kind: OperationKind,
        calls: Vec<ContractCall>,
    ) -> Result<PendingOperation, SequencerError> {
        if calls.is_empty() {
            return Err(SequencerError::InvalidAmount("empty plan".to_string()));
        }

        let mut operation = PendingOperation {
            kind,
            calls,
            action_hash: None,
            status: OperationStatus::Building,
        };

        for call in &operation.calls {
            let handle = self.submitter.submit(call).await?;
            debug!(call = %call, tx_hash = ?handle.tx_hash, "call submitted");
            operation.action_hash = Some(handle.tx_hash);
        }

        // last call in the plan is the action; its hash identifies the op
        let action_hash = operation.action_hash.ok_or_else(|| {
            SequencerError::Submission("plan yielded no action hash".to_string())
        })?;
        operation.status = OperationStatus::Submitted;
        self.in_flight.insert(action_hash, kind);
        info!(
            ?kind,
            tx_hash = ?action_hash,
            calls = operation.calls.len(),
            "⚡ operation submitted"
        );

        Ok(operation)
    }

    /// Watch a submitted operation until the submitter reports a terminal
    /// status, then apply the single post-confirmation side effect.
    ///
    /// On `Confirmed`, the pool snapshot and both `(token, account)`
    /// balance readings are invalidated by scope so the next read is
    /// fresh, and the operation leaves the in-flight table (the caller's
    /// tied inputs reset off that transition). On `Failed`, the error is
    /// reported on the returned operation and nothing is invalidated.
    pub async fn await_completion(
        &self,
        mut operation: PendingOperation,
    ) -> Result<PendingOperation, SequencerError> {
        let action_hash = operation.action_hash.ok_or_else(|| {
            SequencerError::Submission("operation was never submitted".to_string())
        })?;
        let handle = CallHandle {
            tx_hash: action_hash,
        };

        let timeout = Duration::from_secs(self.config.confirmation_timeout_secs);
        let poll_interval = Duration::from_millis(self.config.status_poll_interval_ms);
        let started = Instant::now();

        loop {
            match self.submitter.status(handle).await? {
                CallStatus::Pending => {
                    if started.elapsed() > timeout {
                        return Err(SequencerError::ConfirmationTimeout(
                            self.config.confirmation_timeout_secs,
                        ));
                    }
                    sleep(poll_interval).await;
                }
                CallStatus::Confirmed => {
                    self.invalidate_scopes();
                    self.in_flight.remove(&action_hash);
                    operation.status = OperationStatus::Confirmed;
                    info!(
                        kind = ?operation.kind,
                        tx_hash = ?action_hash,
                        "✅ operation confirmed, scoped state invalidated"
                    );
                    return Ok(operation);
                }
                CallStatus::Failed(reason) => {
                    self.in_flight.remove(&action_hash);
                    operation.status = OperationStatus::Failed(reason.clone());
                    error!(
                        kind = ?operation.kind,
                        tx_hash = ?action_hash,
                        reason = %reason,
                        "❌ operation failed, state untouched"
                    );
                    return Ok(operation);
                }
            }
        }
    }

    /// Exactly the keys a confirmed operation can have touched: the pool's
    /// snapshot and both token balances for the operating account.
    fn invalidate_scopes(&self) {
        self.invalidations
            .send(InvalidationScope::Pool(PoolId(self.config.pair_address)));
        for token in [self.config.token_x, self.config.token_y] {
            self.invalidations.send(InvalidationScope::Balance {
                token,
                account: self.config.account,
            });
        }
    }

    /// Number of submitted, not-yet-terminal operations.
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }
}
