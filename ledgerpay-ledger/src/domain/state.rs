//! The authoritative ledger state
//!
//! `LedgerState` owns every account, domain record, and wallet entry. The
//! rule-sets mutate it only through the guarded primitives below, and the
//! processor serializes all mutation behind a single write lock.

use crate::domain::error::{LedgerError, LedgerResult};
use crate::infrastructure::config::LedgerConfig;
use chrono::{DateTime, Utc};
use ledgerpay_wallet_core::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Token account: balance plus replay-guard nonce
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub balance: u128,
    pub nonce: u64,
}

/// A name-to-owner binding in the registry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DomainRecord {
    pub owner: Address,
    pub registered_at: DateTime<Utc>,
}

/// The wallet contract: one administrative owner, one balance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletAccount {
    pub owner: Address,
    pub balance: u128,
}

/// The registry contract: its owner and the registration fees it has collected
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryAccount {
    pub owner: Address,
    pub collected_fees: u128,
}

/// The single authoritative ledger state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerState {
    accounts: HashMap<Address, Account>,
    domains: HashMap<String, DomainRecord>,
    wallet: WalletAccount,
    registry: RegistryAccount,
    native_balances: HashMap<Address, u128>,
}

impl LedgerState {
    /// Create the genesis state
    ///
    /// The entire fixed token supply is minted to the deploying address
    /// exactly once; no minting operation exists afterwards. The deployer
    /// also becomes the wallet and registry owner.
    pub fn genesis(deployer: Address, config: &LedgerConfig) -> Self {
        let deployer = normalize(&deployer);
        let mut accounts = HashMap::new();
        accounts.insert(
            deployer.clone(),
            Account { balance: config.initial_supply, nonce: 0 },
        );

        Self {
            accounts,
            domains: HashMap::new(),
            wallet: WalletAccount { owner: deployer.clone(), balance: 0 },
            registry: RegistryAccount { owner: deployer, collected_fees: 0 },
            native_balances: HashMap::new(),
        }
    }

    // --- Read accessors ---

    /// Token balance of an address; absent accounts read as zero
    pub fn balance_of(&self, address: &str) -> u128 {
        self.accounts
            .get(&normalize(address))
            .map(|a| a.balance)
            .unwrap_or(0)
    }

    /// The account entry itself; `None` means the address was never seen
    pub fn account(&self, address: &str) -> Option<&Account> {
        self.accounts.get(&normalize(address))
    }

    /// Current owner of a domain name; `None` means unregistered
    pub fn owner_of(&self, domain: &str) -> Option<Address> {
        self.domains.get(domain).map(|r| r.owner.clone())
    }

    /// Full domain record
    pub fn domain(&self, name: &str) -> Option<&DomainRecord> {
        self.domains.get(name)
    }

    pub fn wallet_balance(&self) -> u128 {
        self.wallet.balance
    }

    pub fn wallet_owner(&self) -> &str {
        &self.wallet.owner
    }

    pub fn registry_owner(&self) -> &str {
        &self.registry.owner
    }

    pub fn registry_fees(&self) -> u128 {
        self.registry.collected_fees
    }

    /// Funds paid out of the ledger to an address
    pub fn native_balance_of(&self, address: &str) -> u128 {
        self.native_balances
            .get(&normalize(address))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all token balances; equals the initial supply at all times
    pub fn total_token_supply(&self) -> u128 {
        self.accounts.values().map(|a| a.balance).sum()
    }

    /// Next nonce the processor will accept from an address
    pub fn expected_nonce(&self, address: &str) -> u64 {
        self.accounts
            .get(&normalize(address))
            .map(|a| a.nonce)
            .unwrap_or(0)
    }

    // --- Mutation primitives (processor-only, behind the write lock) ---

    /// Credit tokens to an address, creating the account if absent
    pub fn credit(&mut self, address: &str, amount: u128) {
        let account = self.accounts.entry(normalize(address)).or_default();
        account.balance = account.balance.saturating_add(amount);
    }

    /// Debit tokens from an address; never allows a negative balance
    pub fn debit(&mut self, address: &str, amount: u128) -> LedgerResult<()> {
        let key = normalize(address);
        let balance = self.accounts.get(&key).map(|a| a.balance).unwrap_or(0);
        if amount > balance {
            return Err(LedgerError::InsufficientBalance { balance, requested: amount });
        }
        let account = self.accounts.entry(key).or_default();
        account.balance -= amount;
        Ok(())
    }

    /// Register a domain to an owner; names are registered at most once
    pub fn register_domain(&mut self, domain: &str, owner: &str) -> LedgerResult<()> {
        if self.domains.contains_key(domain) {
            return Err(LedgerError::DomainAlreadyRegistered(domain.to_string()));
        }
        self.domains.insert(
            domain.to_string(),
            DomainRecord { owner: normalize(owner), registered_at: Utc::now() },
        );
        Ok(())
    }

    /// Replace the owner of an existing domain
    pub fn set_domain_owner(&mut self, domain: &str, new_owner: &str) -> LedgerResult<()> {
        match self.domains.get_mut(domain) {
            Some(record) => {
                record.owner = normalize(new_owner);
                Ok(())
            }
            None => Err(LedgerError::invalid_transaction(format!(
                "Domain not registered: {}",
                domain
            ))),
        }
    }

    pub fn credit_wallet(&mut self, amount: u128) {
        self.wallet.balance = self.wallet.balance.saturating_add(amount);
    }

    pub fn debit_wallet(&mut self, amount: u128) -> LedgerResult<()> {
        if amount > self.wallet.balance {
            return Err(LedgerError::InsufficientBalance {
                balance: self.wallet.balance,
                requested: amount,
            });
        }
        self.wallet.balance -= amount;
        Ok(())
    }

    /// Accrue a registration fee to the registry
    pub fn accrue_registration_fee(&mut self, amount: u128) {
        self.registry.collected_fees = self.registry.collected_fees.saturating_add(amount);
    }

    /// Drain the registry's collected fees
    pub fn take_registry_fees(&mut self) -> u128 {
        std::mem::take(&mut self.registry.collected_fees)
    }

    /// Credit funds paid out of the ledger to an address
    pub fn credit_native(&mut self, address: &str, amount: u128) {
        let entry = self.native_balances.entry(normalize(address)).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Advance an address's replay-guard nonce
    pub fn bump_nonce(&mut self, address: &str) {
        let account = self.accounts.entry(normalize(address)).or_default();
        account.nonce += 1;
    }
}

/// Addresses are keyed case-insensitively
fn normalize(address: &str) -> Address {
    address.to_ascii_lowercase()
}
