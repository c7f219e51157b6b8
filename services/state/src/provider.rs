//! Chain state provider seam and polling loop
//!
//! The provider supplies reserve/k/balance readings; each field may reflect
//! a different block since no atomicity is assumed between the underlying
//! calls. That lack of atomicity is exactly what produces the inconsistent
//! snapshots the store flags for re-read.

use crate::error::StateError;
use crate::store::SnapshotStore;
use async_trait::async_trait;
use ethers::types::Address;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing::{debug, info, warn};
use types::{BalanceReading, PoolId, PoolSnapshot, U256};

/// One combined reserve/k/supply reading for a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveReading {
    pub x_reserve: U256,
    pub y_reserve: U256,
    pub k: U256,
    pub lp_total_supply: U256,
    /// Capture time in nanoseconds, assigned by the provider.
    pub captured_at_ns: u64,
}

impl ReserveReading {
    pub fn into_snapshot(self, pool: PoolId) -> PoolSnapshot {
        PoolSnapshot {
            pool_id: pool,
            x_reserve: self.x_reserve,
            y_reserve: self.y_reserve,
            k: self.k,
            lp_total_supply: self.lp_total_supply,
            captured_at_ns: self.captured_at_ns,
        }
    }
}

/// Read seam over the chain node. Production backends wrap an RPC client;
/// tests substitute an in-memory mock.
#[async_trait]
pub trait ChainStateProvider: Send + Sync {
    /// Read the pool's published reserves, k, and LP supply.
    async fn read_reserves(&self, pool: PoolId) -> Result<ReserveReading, StateError>;

    /// Read one token balance for one account.
    async fn read_balance(
        &self,
        token: Address,
        account: Address,
    ) -> Result<BalanceReading, StateError>;
}

/// Polling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Fixed poll interval in milliseconds.
    pub poll_interval_ms: u64,
    /// `(token, account)` balances refreshed alongside the pool reading.
    pub watched_balances: Vec<(Address, Address)>,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 5_000,
            watched_balances: Vec::new(),
        }
    }
}

/// Fixed-interval snapshot poller for one pool.
///
/// Not synchronized with in-flight operations: a polled snapshot may be
/// stale relative to a just-submitted, unconfirmed transaction. Scoped
/// invalidations and the next tick converge the store afterwards.
pub struct SnapshotPoller {
    provider: Arc<dyn ChainStateProvider>,
    store: Arc<SnapshotStore>,
    pool: PoolId,
    config: PollerConfig,
}

impl SnapshotPoller {
    pub fn new(
        provider: Arc<dyn ChainStateProvider>,
        store: Arc<SnapshotStore>,
        pool: PoolId,
        config: PollerConfig,
    ) -> Self {
        Self {
            provider,
            store,
            pool,
            config,
        }
    }

    /// One poll pass: apply pending invalidations, then refresh the pool
    /// snapshot and every watched balance.
    pub async fn poll_once(&self) -> Result<(), StateError> {
        self.store.apply_invalidations();

        let reading = self.provider.read_reserves(self.pool).await?;
        let classification = self.store.record_snapshot(reading.into_snapshot(self.pool));
        debug!(pool = %self.pool, %classification, "snapshot refreshed");

        for (token, account) in &self.config.watched_balances {
            let balance = self.provider.read_balance(*token, *account).await?;
            self.store.record_balance(*token, *account, balance);
        }

        Ok(())
    }

    /// Poll forever at the configured interval. An inconsistent reading
    /// triggers one immediate out-of-band re-read instead of waiting a
    /// full interval with a flagged snapshot.
    pub async fn run(self) {
        info!(
            pool = %self.pool,
            interval_ms = self.config.poll_interval_ms,
            "🔄 snapshot poller started"
        );
        let mut ticker = interval(Duration::from_millis(self.config.poll_interval_ms));
        loop {
            ticker.tick().await;
            if let Err(e) = self.poll_once().await {
                warn!(pool = %self.pool, error = %e, "poll failed, will retry next tick");
                continue;
            }
            if self.store.take_refresh_request(&self.pool) {
                info!(pool = %self.pool, "forcing re-read after inconsistent snapshot");
                if let Err(e) = self.poll_once().await {
                    warn!(pool = %self.pool, error = %e, "forced re-read failed");
                }
            }
        }
    }

    /// Run on the tokio runtime.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(self.run())
    }
}
