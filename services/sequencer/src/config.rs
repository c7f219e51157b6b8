//! Sequencer configuration
//!
//! Deployment addresses and confirmation-watch parameters, loadable from a
//! JSON file with environment-variable overrides so nothing is hardcoded
//! into the planners.

use ethers::types::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Pair contract (also the LP token, so remove-liquidity needs no
    /// approval).
    pub pair_address: Address,
    /// Deployed token on the pair's X side.
    pub token_x: Address,
    /// Deployed token on the pair's Y side.
    pub token_y: Address,
    /// Account whose balances the operations touch.
    pub account: Address,
    /// How long to watch an action for a terminal status.
    pub confirmation_timeout_secs: u64,
    /// Interval between status polls while watching.
    pub status_poll_interval_ms: u64,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            pair_address: Address::zero(),
            token_x: Address::zero(),
            token_y: Address::zero(),
            account: Address::zero(),
            confirmation_timeout_secs: 60,
            status_poll_interval_ms: 500,
        }
    }
}

impl SequencerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load defaults with environment-variable overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(pair) = std::env::var("MINIAMM_PAIR_ADDRESS") {
            if let Ok(address) = pair.parse() {
                config.pair_address = address;
            }
        }
        if let Ok(token) = std::env::var("MINIAMM_TOKEN_X_ADDRESS") {
            if let Ok(address) = token.parse() {
                config.token_x = address;
            }
        }
        if let Ok(token) = std::env::var("MINIAMM_TOKEN_Y_ADDRESS") {
            if let Ok(address) = token.parse() {
                config.token_y = address;
            }
        }
        if let Ok(account) = std::env::var("MINIAMM_ACCOUNT_ADDRESS") {
            if let Ok(address) = account.parse() {
                config.account = address;
            }
        }
        if let Ok(timeout) = std::env::var("MINIAMM_CONFIRMATION_TIMEOUT_SECS") {
            if let Ok(value) = timeout.parse() {
                config.confirmation_timeout_secs = value;
            }
        }

        config
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.pair_address == Address::zero() {
            anyhow::bail!("pair_address must be set");
        }
        if self.token_x == Address::zero() || self.token_y == Address::zero() {
            anyhow::bail!("both token addresses must be set");
        }
        if self.token_x == self.token_y {
            anyhow::bail!("token_x and token_y must differ");
        }
        if self.confirmation_timeout_secs == 0 {
            anyhow::bail!("confirmation_timeout_secs must be positive");
        }
        if self.status_poll_interval_ms == 0 {
            anyhow::bail!("status_poll_interval_ms must be positive");
        }
        Ok(())
    }
}
