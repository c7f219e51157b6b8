//! Snapshot and balance store
//!
//! Latest-value store for pool snapshots and balance readings. Entries are
//! `Arc`-shared and replaced whole on newer reads; invalidation removes the
//! entry so the next access misses and the poller refreshes it.

use crate::invalidation::InvalidationScope;
use crossbeam_channel::Receiver;
use dashmap::DashMap;
use ethers::types::Address;
use miniamm_amm::{classify, PoolClassification};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use types::{BalanceReading, PoolId, PoolSnapshot};

/// Store counters, exported for observability.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StoreStats {
    pub snapshots_recorded: u64,
    pub inconsistent_reads: u64,
    pub invalidations_applied: u64,
    pub snapshot_hits: u64,
    pub snapshot_misses: u64,
}

/// Latest observed chain state, keyed for scoped invalidation.
pub struct SnapshotStore {
    /// Latest snapshot per pool. Superseded, never mutated in place.
    snapshots: DashMap<PoolId, Arc<PoolSnapshot>>,
    /// Latest balance reading per `(token, account)` pair.
    balances: DashMap<(Address, Address), BalanceReading>,
    /// Pools whose last reading was inconsistent and need an out-of-band
    /// re-read before any derived quote is trusted.
    refresh_requests: DashMap<PoolId, ()>,
    /// Scoped invalidation messages from the sequencer.
    invalidations: Receiver<InvalidationScope>,
    stats: RwLock<StoreStats>,
}

impl SnapshotStore {
    pub fn new(invalidations: Receiver<InvalidationScope>) -> Self {
        Self {
            snapshots: DashMap::new(),
            balances: DashMap::new(),
            refresh_requests: DashMap::new(),
            invalidations,
            stats: RwLock::new(StoreStats::default()),
        }
    }

    /// Record a new snapshot, superseding any previous one for the pool.
    ///
    /// An inconsistent reading is still stored (callers may fall back to
    /// user-supplied ratios against it) but flagged for forced refresh,
    /// with a distinct diagnostic.
    pub fn record_snapshot(&self, snapshot: PoolSnapshot) -> PoolClassification {
        let classification = classify(&snapshot);
        let pool = snapshot.pool_id;

        {
            let mut stats = self.stats.write();
            stats.snapshots_recorded += 1;
            if classification == PoolClassification::Inconsistent {
                stats.inconsistent_reads += 1;
            }
        }

        match classification {
            PoolClassification::Inconsistent => {
                warn!(
                    %pool,
                    k = %snapshot.k,
                    x_reserve = %snapshot.x_reserve,
                    y_reserve = %snapshot.y_reserve,
                    "⚠️ inconsistent snapshot recorded, requesting re-read"
                );
                self.refresh_requests.insert(pool, ());
            }
            _ => {
                // A clean reading resolves any earlier anomaly.
                self.refresh_requests.remove(&pool);
            }
        }

        self.snapshots.insert(pool, Arc::new(snapshot));
        classification
    }

    /// Latest snapshot for a pool, if one has been captured.
    pub fn latest(&self, pool: &PoolId) -> Option<Arc<PoolSnapshot>> {
        let entry = self.snapshots.get(pool).map(|e| e.value().clone());
        let mut stats = self.stats.write();
        match entry {
            Some(_) => stats.snapshot_hits += 1,
            None => stats.snapshot_misses += 1,
        }
        entry
    }

    /// Record a balance reading, superseding any previous one for the pair.
    pub fn record_balance(&self, token: Address, account: Address, reading: BalanceReading) {
        self.balances.insert((token, account), reading);
    }

    /// Latest balance reading for a `(token, account)` pair.
    pub fn balance(&self, token: Address, account: Address) -> Option<BalanceReading> {
        self.balances.get(&(token, account)).map(|e| *e.value())
    }

    /// Whether the pool's last reading was anomalous and awaits re-read.
    pub fn needs_refresh(&self, pool: &PoolId) -> bool {
        self.refresh_requests.contains_key(pool)
    }

    /// Consume a pending refresh request, if any.
    pub fn take_refresh_request(&self, pool: &PoolId) -> bool {
        self.refresh_requests.remove(pool).is_some()
    }

    /// Drain and apply all pending invalidation messages.
    ///
    /// Called by the poller each tick; safe to call from anywhere since
    /// removal of an already-absent key is a no-op.
    pub fn apply_invalidations(&self) -> usize {
        let mut applied = 0;
        while let Ok(scope) = self.invalidations.try_recv() {
            match scope {
                InvalidationScope::Pool(pool) => {
                    self.snapshots.remove(&pool);
                    debug!(%pool, "snapshot invalidated");
                }
                InvalidationScope::Balance { token, account } => {
                    self.balances.remove(&(token, account));
                    debug!(?token, ?account, "balance invalidated");
                }
            }
            applied += 1;
        }
        if applied > 0 {
            self.stats.write().invalidations_applied += applied as u64;
            info!(count = applied, "✅ applied scoped invalidations");
        }
        applied
    }

    pub fn stats(&self) -> StoreStats {
        self.stats.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invalidation::invalidation_channel;
    use ethers::types::U256;

    fn snapshot(pool: PoolId, x: u64, y: u64, k: u64, at: u64) -> PoolSnapshot {
        PoolSnapshot {
            pool_id: pool,
            x_reserve: U256::from(x),
            y_reserve: U256::from(y),
            k: U256::from(k),
            lp_total_supply: U256::zero(),
            captured_at_ns: at,
        }
    }

    #[test]
    fn test_later_snapshot_supersedes() {
        let (_sender, rx) = invalidation_channel();
        let store = SnapshotStore::new(rx);
        let pool = PoolId(Address::from_low_u64_be(1));

        store.record_snapshot(snapshot(pool, 1000, 2000, 2_000_000, 1));
        store.record_snapshot(snapshot(pool, 1100, 1819, 2_000_900, 2));

        let latest = store.latest(&pool).unwrap();
        assert_eq!(latest.captured_at_ns, 2);
        assert_eq!(latest.x_reserve, U256::from(1100u64));
    }

    #[test]
    fn test_inconsistent_reading_flags_refresh() {
        let (_sender, rx) = invalidation_channel();
        let store = SnapshotStore::new(rx);
        let pool = PoolId(Address::from_low_u64_be(1));

        let class = store.record_snapshot(snapshot(pool, 0, 0, 500, 1));
        assert_eq!(class, PoolClassification::Inconsistent);
        assert!(store.needs_refresh(&pool));
        assert_eq!(store.stats().inconsistent_reads, 1);

        // a clean follow-up read clears the flag
        store.record_snapshot(snapshot(pool, 1000, 2000, 2_000_000, 2));
        assert!(!store.needs_refresh(&pool));
    }

    #[test]
    fn test_pool_invalidation_is_scoped() {
        let (sender, rx) = invalidation_channel();
        let store = SnapshotStore::new(rx);
        let pool_a = PoolId(Address::from_low_u64_be(1));
        let pool_b = PoolId(Address::from_low_u64_be(2));

        store.record_snapshot(snapshot(pool_a, 1000, 2000, 2_000_000, 1));
        store.record_snapshot(snapshot(pool_b, 5000, 5000, 25_000_000, 1));

        sender.send(InvalidationScope::Pool(pool_a));
        assert_eq!(store.apply_invalidations(), 1);

        assert!(store.latest(&pool_a).is_none());
        assert!(store.latest(&pool_b).is_some());
    }

    #[test]
    fn test_balance_invalidation_is_scoped() {
        let (sender, rx) = invalidation_channel();
        let store = SnapshotStore::new(rx);
        let token_x = Address::from_low_u64_be(10);
        let token_y = Address::from_low_u64_be(11);
        let account = Address::from_low_u64_be(99);
        let reading = BalanceReading {
            amount: U256::from(42u64),
            captured_at_ns: 1,
        };

        store.record_balance(token_x, account, reading);
        store.record_balance(token_y, account, reading);

        sender.send(InvalidationScope::Balance {
            token: token_x,
            account,
        });
        store.apply_invalidations();

        assert!(store.balance(token_x, account).is_none());
        assert!(store.balance(token_y, account).is_some());
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let (_sender, rx) = invalidation_channel();
        let store = SnapshotStore::new(rx);
        let pool = PoolId(Address::from_low_u64_be(1));

        assert!(store.latest(&pool).is_none());
        store.record_snapshot(snapshot(pool, 1, 1, 1, 1));
        assert!(store.latest(&pool).is_some());

        let stats = store.stats();
        assert_eq!(stats.snapshot_misses, 1);
        assert_eq!(stats.snapshot_hits, 1);
        assert_eq!(stats.snapshots_recorded, 1);
    }
}
