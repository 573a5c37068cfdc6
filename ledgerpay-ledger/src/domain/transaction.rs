//! Transaction types and canonical signing payloads
//!
//! A transaction is immutable once signed: the signature covers an RLP
//! encoding of every field, and the Keccak-256 hash of that encoding is the
//! transaction id.

use crate::domain::error::{LedgerError, LedgerResult};
use chrono::{DateTime, Utc};
use ledgerpay_wallet_core::{Address, SecurePrivateKey, SignatureManager};
use rlp::RlpStream;
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

/// Transaction kinds understood by the processor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    RegisterDomain { domain: String },
    TransferDomain { domain: String, recipient: Address },
    TransferToken { recipient: Address, amount: u128 },
    Deposit,
    Withdraw { amount: u128 },
    SweepRegistryFees,
}

impl TransactionKind {
    /// Stable tag used in the signing payload
    fn tag(&self) -> u8 {
        match self {
            TransactionKind::RegisterDomain { .. } => 0,
            TransactionKind::TransferDomain { .. } => 1,
            TransactionKind::TransferToken { .. } => 2,
            TransactionKind::Deposit => 3,
            TransactionKind::Withdraw { .. } => 4,
            TransactionKind::SweepRegistryFees => 5,
        }
    }

    /// Operation name for receipts and logs
    pub fn name(&self) -> &'static str {
        match self {
            TransactionKind::RegisterDomain { .. } => "register-domain",
            TransactionKind::TransferDomain { .. } => "transfer-domain",
            TransactionKind::TransferToken { .. } => "transfer-token",
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdraw { .. } => "withdraw",
            TransactionKind::SweepRegistryFees => "sweep-registry-fees",
        }
    }

    fn domain(&self) -> Option<&str> {
        match self {
            TransactionKind::RegisterDomain { domain }
            | TransactionKind::TransferDomain { domain, .. } => Some(domain),
            _ => None,
        }
    }

    fn recipient(&self) -> Option<&str> {
        match self {
            TransactionKind::TransferDomain { recipient, .. }
            | TransactionKind::TransferToken { recipient, .. } => Some(recipient),
            _ => None,
        }
    }

    fn amount(&self) -> u128 {
        match self {
            TransactionKind::TransferToken { amount, .. }
            | TransactionKind::Withdraw { amount } => *amount,
            _ => 0,
        }
    }
}

/// A ledger transaction before signing
///
/// `value` models the payment attached to the transaction (registration
/// fees, deposits), in the smallest denomination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub sender: Address,
    pub kind: TransactionKind,
    pub value: u128,
    pub nonce: u64,
}

impl Transaction {
    /// Canonical RLP signing payload covering every field
    pub fn signing_payload(&self) -> LedgerResult<Vec<u8>> {
        let sender_bytes = hex::decode(self.sender.trim_start_matches("0x"))
            .map_err(|_| LedgerError::invalid_transaction("Sender address is not valid hex"))?;

        let mut s = RlpStream::new_list(7);
        s.append(&sender_bytes.as_slice());
        s.append(&self.kind.tag());
        match self.kind.domain() {
            Some(domain) => s.append(&domain.as_bytes()),
            None => s.append_empty_data(),
        };
        match self.kind.recipient() {
            Some(recipient) => {
                let recipient_bytes = hex::decode(recipient.trim_start_matches("0x"))
                    .map_err(|_| LedgerError::invalid_transaction("Recipient address is not valid hex"))?;
                s.append(&recipient_bytes.as_slice())
            }
            None => s.append_empty_data(),
        };
        s.append(&amount_to_bytes_be(self.kind.amount()).as_slice());
        s.append(&amount_to_bytes_be(self.value).as_slice());
        s.append(&self.nonce);
        Ok(s.out().to_vec())
    }

    /// Keccak-256 hash of the signing payload, used as the transaction id
    pub fn hash(&self) -> LedgerResult<String> {
        let payload = self.signing_payload()?;
        let mut hasher = Keccak256::new();
        hasher.update(&payload);
        Ok(format!("0x{}", hex::encode(hasher.finalize())))
    }

    /// Sign the transaction, producing the immutable submission record
    pub fn sign(
        &self,
        private_key: &SecurePrivateKey,
        signer: &SignatureManager,
    ) -> LedgerResult<SignedTransaction> {
        let payload = self.signing_payload()?;
        let signature = signer
            .sign_payload(&payload, private_key)
            .map_err(|e| LedgerError::invalid_transaction(format!("Signing failed: {}", e)))?;
        let hash = self.hash()?;
        Ok(SignedTransaction {
            transaction: self.clone(),
            signature,
            hash,
        })
    }
}

/// Minimal big-endian byte encoding of an amount; empty for zero
fn amount_to_bytes_be(val: u128) -> Vec<u8> {
    if val == 0 {
        return Vec::new();
    }
    let buf = val.to_be_bytes();
    let first_non_zero = buf.iter().position(|&b| b != 0).unwrap_or(buf.len() - 1);
    buf[first_non_zero..].to_vec()
}

/// A signed, submittable transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedTransaction {
    pub transaction: Transaction,
    pub signature: String,
    pub hash: String,
}

/// Per-transaction processing states
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionStatus {
    Received,
    Verified,
    Applied,
    Rejected,
}

/// Result record for an applied transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub transaction_id: String,
    pub sender: Address,
    pub operation: String,
    pub sender_token_balance: u128,
    pub wallet_balance: u128,
    pub domain_owner: Option<(String, Address)>,
    pub applied_at: DateTime<Utc>,
}

/// Outcome of a submission: fully applied or fully rejected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TransactionOutcome {
    Applied(Receipt),
    Rejected { reason: LedgerError },
}

impl TransactionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, TransactionOutcome::Applied(_))
    }

    /// Terminal state this outcome represents
    pub fn status(&self) -> TransactionStatus {
        match self {
            TransactionOutcome::Applied(_) => TransactionStatus::Applied,
            TransactionOutcome::Rejected { .. } => TransactionStatus::Rejected,
        }
    }

    pub fn rejection(&self) -> Option<&LedgerError> {
        match self {
            TransactionOutcome::Rejected { reason } => Some(reason),
            TransactionOutcome::Applied(_) => None,
        }
    }
}
