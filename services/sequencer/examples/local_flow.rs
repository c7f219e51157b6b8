//! End-to-end local flow demonstration
//!
//! Wires the full pipeline against an in-memory chain simulation:
//! poll → classify → quote → plan → submit → confirm → scoped
//! invalidation → fresh read.
//!
//! Run with: `cargo run -p operation-sequencer --example local_flow`

use async_trait::async_trait;
use ethers::types::{Address, H256, U256};
use miniamm_amm::{quote, PoolQuoter};
use operation_sequencer::{
    CallHandle, CallStatus, ContractCall, OperationKind, OperationSequencer, PoolFunction,
    SequencerConfig, SequencerError, TransactionSubmitter,
};
use parking_lot::Mutex;
use state_pool::{
    invalidation_channel, ChainStateProvider, PollerConfig, ReserveReading, SnapshotPoller,
    SnapshotStore, StateError,
};
use std::sync::Arc;
use types::{format_amount, parse_amount, BalanceReading, PoolId, SwapDirection, TokenSide};

/// Simulated pair contract state.
struct ChainSim {
    x_reserve: U256,
    y_reserve: U256,
    k: U256,
    lp_supply: U256,
    clock_ns: u64,
    tx_counter: u64,
}

/// In-memory chain playing both external roles: state provider and
/// transaction submitter.
struct LocalChain {
    sim: Mutex<ChainSim>,
}

impl LocalChain {
    fn new(x: U256, y: U256) -> Self {
        Self {
            sim: Mutex::new(ChainSim {
                x_reserve: x,
                y_reserve: y,
                k: x * y,
                lp_supply: x,
                clock_ns: 1,
                tx_counter: 0,
            }),
        }
    }

    fn snapshot_reading(&self) -> ReserveReading {
        let mut sim = self.sim.lock();
        sim.clock_ns += 1;
        ReserveReading {
            x_reserve: sim.x_reserve,
            y_reserve: sim.y_reserve,
            k: sim.k,
            lp_total_supply: sim.lp_supply,
            captured_at_ns: sim.clock_ns,
        }
    }
}

#[async_trait]
impl ChainStateProvider for LocalChain {
    async fn read_reserves(&self, _pool: PoolId) -> Result<ReserveReading, StateError> {
        Ok(self.snapshot_reading())
    }

    async fn read_balance(
        &self,
        _token: Address,
        _account: Address,
    ) -> Result<BalanceReading, StateError> {
        let sim = self.sim.lock();
        Ok(BalanceReading {
            amount: parse_amount("1000000").unwrap(),
            captured_at_ns: sim.clock_ns,
        })
    }
}

#[async_trait]
impl TransactionSubmitter for LocalChain {
    async fn submit(&self, call: &ContractCall) -> Result<CallHandle, SequencerError> {
        let mut sim = self.sim.lock();
        match call.function {
            PoolFunction::AddLiquidity { x_amount, y_amount } => {
                sim.x_reserve += x_amount;
                sim.y_reserve += y_amount;
                sim.k = sim.x_reserve * sim.y_reserve;
                sim.lp_supply += x_amount;
            }
            PoolFunction::Swap {
                x_amount_in,
                y_amount_in,
            } => {
                let reading = ReserveReading {
                    x_reserve: sim.x_reserve,
                    y_reserve: sim.y_reserve,
                    k: sim.k,
                    lp_total_supply: sim.lp_supply,
                    captured_at_ns: sim.clock_ns,
                };
                let snap = reading.into_snapshot(PoolId(call.target));
                if x_amount_in > U256::zero() {
                    let out = quote(x_amount_in, SwapDirection::XToY, &snap).unwrap();
                    sim.x_reserve += x_amount_in;
                    sim.y_reserve -= out;
                } else {
                    let out = quote(y_amount_in, SwapDirection::YToX, &snap).unwrap();
                    sim.y_reserve += y_amount_in;
                    sim.x_reserve -= out;
                }
            }
            PoolFunction::RemoveLiquidity { lp_amount } => {
                let x_out = sim.x_reserve * lp_amount / sim.lp_supply;
                let y_out = sim.y_reserve * lp_amount / sim.lp_supply;
                sim.x_reserve -= x_out;
                sim.y_reserve -= y_out;
                sim.lp_supply -= lp_amount;
                sim.k = sim.x_reserve * sim.y_reserve;
            }
            PoolFunction::Approve { .. } | PoolFunction::FreeMintToSender { .. } => {}
        }
        sim.tx_counter += 1;
        Ok(CallHandle {
            tx_hash: H256::from_low_u64_be(sim.tx_counter),
        })
    }

    async fn status(&self, _handle: CallHandle) -> Result<CallStatus, SequencerError> {
        Ok(CallStatus::Confirmed)
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    println!("🚀 MiniAMM local flow demo");

    let config = SequencerConfig {
        pair_address: Address::from_low_u64_be(1),
        token_x: Address::from_low_u64_be(2),
        token_y: Address::from_low_u64_be(3),
        account: Address::from_low_u64_be(4),
        confirmation_timeout_secs: 5,
        status_poll_interval_ms: 10,
    };
    let pool = PoolId(config.pair_address);

    let chain = Arc::new(LocalChain::new(
        parse_amount("1000").unwrap(),
        parse_amount("2000").unwrap(),
    ));

    let (invalidations, rx) = invalidation_channel();
    let store = Arc::new(SnapshotStore::new(rx));
    let poller = SnapshotPoller::new(
        chain.clone(),
        store.clone(),
        pool,
        PollerConfig::default(),
    );

    // 1. First poll captures the pool state
    poller.poll_once().await.unwrap();
    let snap = store.latest(&pool).unwrap();
    let (x, y) = snap.spot_ratio();
    println!("📊 pool {}: {} X / {} Y", snap.classification(), format_amount(x), format_amount(y));

    // 2. Quote a swap against the snapshot
    let amount_in = parse_amount("100").unwrap();
    let out = snap.amount_out(amount_in, SwapDirection::XToY).unwrap();
    println!(
        "🔄 swapping {} X quotes {} Y (0.3% fee applied)",
        format_amount(amount_in),
        format_amount(out)
    );

    // 3. Derive the paired deposit for add-liquidity
    let primary = parse_amount("10").unwrap();
    let paired = snap.paired_deposit(primary, TokenSide::X).unwrap();
    println!(
        "➕ depositing {} X requires {} Y at the current ratio",
        format_amount(primary),
        format_amount(paired)
    );

    // 4. Plan, submit, and confirm the swap
    let sequencer = OperationSequencer::new(config, chain.clone(), invalidations);
    let plan = sequencer.plan_swap(amount_in, SwapDirection::XToY).unwrap();
    let operation = sequencer
        .submit_operation(OperationKind::Swap, plan)
        .await
        .unwrap();
    let operation = sequencer.await_completion(operation).await.unwrap();
    println!("✅ swap {:?}: {:?}", operation.action_hash.unwrap(), operation.status);

    // 5. Confirmation invalidated the snapshot; next poll is fresh
    store.apply_invalidations();
    assert!(store.latest(&pool).is_none());
    poller.poll_once().await.unwrap();
    let fresh = store.latest(&pool).unwrap();
    let (x, y) = fresh.spot_ratio();
    println!("📈 fresh reserves: {} X / {} Y", format_amount(x), format_amount(y));
}
