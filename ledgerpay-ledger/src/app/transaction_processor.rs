//! The transaction processor
//!
//! Validates and applies one transaction at a time against the ledger
//! state. A transaction moves `Received -> Verified -> Applied` or
//! `Received -> Rejected`; every check happens before any mutation, so a
//! rejection leaves the state byte-identical.
//!
//! Signature verification is stateless and may fan out across a batch;
//! the apply stage runs strictly sequentially under the state write lock.

use crate::domain::error::LedgerError;
use crate::domain::events::{Event, EventKind, EventLog};
use crate::domain::state::{Account, LedgerState};
use crate::domain::transaction::{Receipt, SignedTransaction, TransactionKind, TransactionOutcome};
use crate::infrastructure::config::LedgerConfig;
use crate::rulesets::{domain_registry, simple_wallet, token_ledger};
use crate::validators::TransactionValidator;
use chrono::{DateTime, Utc};
use ledgerpay_wallet_core::{Address, SignatureManager};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Processing counters, observable alongside the ledger queries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessorMetrics {
    pub transactions_received: u64,
    pub transactions_applied: u64,
    pub transactions_rejected: u64,
    pub last_processed_at: Option<DateTime<Utc>>,
}

/// Sequential transaction processor over a single ledger state
pub struct TransactionProcessor {
    state: Arc<RwLock<LedgerState>>,
    config: Arc<LedgerConfig>,
    verifier: Arc<SignatureManager>,
    validator: TransactionValidator,
    events: Arc<EventLog>,
    metrics: Arc<RwLock<ProcessorMetrics>>,
}

impl TransactionProcessor {
    /// Create a processor over a fresh genesis state
    ///
    /// The deployer receives the full token supply and owns the wallet and
    /// the registry.
    pub fn new(config: LedgerConfig, deployer: Address) -> Self {
        let state = LedgerState::genesis(deployer, &config);
        Self {
            state: Arc::new(RwLock::new(state)),
            config: Arc::new(config),
            verifier: Arc::new(SignatureManager::new()),
            validator: TransactionValidator::new(),
            events: Arc::new(EventLog::new()),
            metrics: Arc::new(RwLock::new(ProcessorMetrics::default())),
        }
    }

    /// Submit one signed transaction
    ///
    /// Returns synchronously with the outcome; there is no retry or
    /// suspension inside the core.
    pub async fn submit(&self, signed: &SignedTransaction) -> TransactionOutcome {
        self.process(signed, None).await
    }

    /// Submit a batch
    ///
    /// Signatures are verified concurrently before the batch enters the
    /// sequential apply stage in submission order.
    pub async fn submit_batch(&self, batch: &[SignedTransaction]) -> Vec<TransactionOutcome> {
        let checks = batch.iter().map(|signed| {
            let verifier = self.verifier.clone();
            let signed = signed.clone();
            tokio::task::spawn_blocking(move || verify_signature(&verifier, &signed))
        });
        let verified: Vec<bool> = futures::future::join_all(checks)
            .await
            .into_iter()
            .map(|joined| joined.unwrap_or(false))
            .collect();

        let mut outcomes = Vec::with_capacity(batch.len());
        for (signed, signature_ok) in batch.iter().zip(verified) {
            outcomes.push(self.process(signed, Some(signature_ok)).await);
        }
        outcomes
    }

    async fn process(
        &self,
        signed: &SignedTransaction,
        preverified: Option<bool>,
    ) -> TransactionOutcome {
        {
            let mut metrics = self.metrics.write().await;
            metrics.transactions_received += 1;
        }

        // Received: shape checks
        let validation = self.validator.validate_transaction(signed);
        for warning in &validation.warnings {
            tracing::warn!(tx = %signed.hash, "{warning}");
        }
        if !validation.valid {
            let reason = LedgerError::invalid_transaction(validation.errors.join("; "));
            return self.reject(signed, reason).await;
        }

        // Received -> Verified
        let signature_ok = match preverified {
            Some(ok) => ok,
            None => verify_signature(&self.verifier, signed),
        };
        if !signature_ok {
            return self.reject(signed, LedgerError::InvalidSignature).await;
        }

        // Verified -> Applied | Rejected, sequential under the write lock
        let tx = &signed.transaction;
        let mut state = self.state.write().await;

        let expected = state.expected_nonce(&tx.sender);
        if tx.nonce != expected {
            drop(state);
            let reason = LedgerError::InvalidNonce { expected, got: tx.nonce };
            return self.reject(signed, reason).await;
        }

        let applied = match &tx.kind {
            TransactionKind::RegisterDomain { domain } => {
                domain_registry::register(&mut state, &self.config, &tx.sender, domain, tx.value)
                    .map(|_| None)
            }
            TransactionKind::TransferDomain { domain, recipient } => {
                domain_registry::transfer(&mut state, &tx.sender, domain, recipient).map(|_| None)
            }
            TransactionKind::TransferToken { recipient, amount } => {
                token_ledger::transfer(&mut state, &tx.sender, recipient, *amount).map(|_| None)
            }
            TransactionKind::Deposit => simple_wallet::deposit(&mut state, &self.config, tx.value)
                .map(|_| Some((EventKind::Deposit, tx.value))),
            TransactionKind::Withdraw { amount } => {
                simple_wallet::withdraw(&mut state, &tx.sender, *amount)
                    .map(|_| Some((EventKind::Withdrawal, *amount)))
            }
            TransactionKind::SweepRegistryFees => domain_registry::sweep_fees(&mut state, &tx.sender)
                .map(|amount| Some((EventKind::Withdrawal, amount))),
        };

        let event = match applied {
            Ok(event) => event,
            Err(reason) => {
                drop(state);
                return self.reject(signed, reason).await;
            }
        };

        state.bump_nonce(&tx.sender);
        if let Some((kind, amount)) = event {
            self.events.append(kind, amount, &tx.sender);
        }

        let receipt = Receipt {
            transaction_id: signed.hash.clone(),
            sender: tx.sender.clone(),
            operation: tx.kind.name().to_string(),
            sender_token_balance: state.balance_of(&tx.sender),
            wallet_balance: state.wallet_balance(),
            domain_owner: match &tx.kind {
                TransactionKind::RegisterDomain { domain }
                | TransactionKind::TransferDomain { domain, .. } => {
                    state.owner_of(domain).map(|owner| (domain.clone(), owner))
                }
                _ => None,
            },
            applied_at: Utc::now(),
        };
        drop(state);

        {
            let mut metrics = self.metrics.write().await;
            metrics.transactions_applied += 1;
            metrics.last_processed_at = Some(Utc::now());
        }
        tracing::info!(tx = %signed.hash, operation = tx.kind.name(), "transaction applied");
        TransactionOutcome::Applied(receipt)
    }

    async fn reject(&self, signed: &SignedTransaction, reason: LedgerError) -> TransactionOutcome {
        {
            let mut metrics = self.metrics.write().await;
            metrics.transactions_rejected += 1;
            metrics.last_processed_at = Some(Utc::now());
        }
        tracing::warn!(tx = %signed.hash, %reason, "transaction rejected");
        TransactionOutcome::Rejected { reason }
    }

    // --- Query interface: consistent snapshots, never a half-applied tx ---

    pub async fn balance_of(&self, address: &str) -> u128 {
        self.state.read().await.balance_of(address)
    }

    pub async fn account(&self, address: &str) -> Option<Account> {
        self.state.read().await.account(address).cloned()
    }

    pub async fn owner_of(&self, domain: &str) -> Option<Address> {
        self.state.read().await.owner_of(domain)
    }

    pub async fn wallet_balance(&self) -> u128 {
        self.state.read().await.wallet_balance()
    }

    pub async fn native_balance_of(&self, address: &str) -> u128 {
        self.state.read().await.native_balance_of(address)
    }

    pub async fn registry_fees(&self) -> u128 {
        self.state.read().await.registry_fees()
    }

    pub async fn total_token_supply(&self) -> u128 {
        self.state.read().await.total_token_supply()
    }

    pub async fn expected_nonce(&self, address: &str) -> u64 {
        self.state.read().await.expected_nonce(address)
    }

    /// Snapshot of the append-only event stream
    pub fn events(&self) -> Vec<Event> {
        self.events.snapshot()
    }

    pub async fn metrics(&self) -> ProcessorMetrics {
        self.metrics.read().await.clone()
    }
}

fn verify_signature(verifier: &SignatureManager, signed: &SignedTransaction) -> bool {
    match signed.transaction.signing_payload() {
        Ok(payload) => {
            verifier.verify_payload(&signed.transaction.sender, &payload, &signed.signature)
        }
        Err(_) => false,
    }
}
