//! Ledger configuration
//!
//! Constants are read from the environment with safe defaults. The defaults
//! match the deployed contract parameters: a 3-unit (10^18 denomination)
//! registration cost, a 10^14 minimum deposit, and a 10^12 token supply.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_REGISTRATION_COST: u128 = 3_000_000_000_000_000_000;
pub const DEFAULT_MIN_DEPOSIT: u128 = 100_000_000_000_000;
pub const DEFAULT_INITIAL_SUPPLY: u128 = 1_000_000_000_000;

/// Recognized configuration options for a ledger instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Fee required to register a domain name
    pub registration_cost: u128,
    /// Deposits must strictly exceed this threshold
    pub min_deposit: u128,
    /// Token supply minted once at genesis
    pub initial_supply: u128,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            registration_cost: DEFAULT_REGISTRATION_COST,
            min_deposit: DEFAULT_MIN_DEPOSIT,
            initial_supply: DEFAULT_INITIAL_SUPPLY,
        }
    }
}

impl LedgerConfig {
    /// Load configuration from the environment (.env aware), falling back to
    /// defaults for unset options
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let config = Self {
            registration_cost: read_amount("LEDGERPAY_REGISTRATION_COST", DEFAULT_REGISTRATION_COST)?,
            min_deposit: read_amount("LEDGERPAY_MIN_DEPOSIT", DEFAULT_MIN_DEPOSIT)?,
            initial_supply: read_amount("LEDGERPAY_INITIAL_SUPPLY", DEFAULT_INITIAL_SUPPLY)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_supply == 0 {
            return Err(anyhow!("LEDGERPAY_INITIAL_SUPPLY must be greater than zero"));
        }
        if self.registration_cost == 0 {
            return Err(anyhow!("LEDGERPAY_REGISTRATION_COST must be greater than zero"));
        }
        Ok(())
    }
}

fn read_amount(name: &str, default: u128) -> Result<u128> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<u128>()
            .map_err(|_| anyhow!("{} must be an unsigned integer, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_contract_parameters() {
        let config = LedgerConfig::default();

        assert_eq!(config.registration_cost, 3_000_000_000_000_000_000);
        assert_eq!(config.min_deposit, 100_000_000_000_000);
        assert_eq!(config.initial_supply, 1_000_000_000_000);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(LedgerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_supply_is_invalid() {
        let config = LedgerConfig {
            initial_supply: 0,
            ..LedgerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
