//! Error handling for the ledger
//!
//! Every rejection surfaces as a specific kind; none of them crash the
//! ledger or leave it in an inconsistent state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ledger rejection and failure kinds
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerError {
    #[error("Signature does not verify against the claimed sender")]
    InvalidSignature,

    #[error("Insufficient funds: required {required}, provided {provided}")]
    InsufficientFunds { required: u128, provided: u128 },

    #[error("Insufficient balance: have {balance}, requested {requested}")]
    InsufficientBalance { balance: u128, requested: u128 },

    #[error("Domain name already registered: {0}")]
    DomainAlreadyRegistered(String),

    #[error("Not the owner: {0}")]
    NotOwner(String),

    #[error("Invalid nonce: expected {expected}, got {got}")]
    InvalidNonce { expected: u64, got: u64 },

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
}

impl LedgerError {
    /// Create a not-owner error
    pub fn not_owner(message: impl Into<String>) -> Self {
        Self::NotOwner(message.into())
    }

    /// Create an invalid transaction error
    pub fn invalid_transaction(message: impl Into<String>) -> Self {
        Self::InvalidTransaction(message.into())
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
