//! Shape validation for submitted transactions
//!
//! All checks here are stateless: address and signature formats, field
//! presence, and integrity of the transaction hash. Balance, ownership, and
//! nonce checks belong to the rule-sets and the processor.

use crate::domain::transaction::{SignedTransaction, TransactionKind};
use ledgerpay_wallet_core::shared::utils::{validate_address, validate_signature};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct TransactionValidator;

impl TransactionValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_transaction(&self, signed: &SignedTransaction) -> ValidationResult {
        let mut result = ValidationResult {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        };
        let tx = &signed.transaction;

        if let Err(e) = validate_address(&tx.sender) {
            result.valid = false;
            result.errors.push(format!("Invalid sender address: {e}"));
        }
        if let Err(e) = validate_signature(&signed.signature) {
            result.valid = false;
            result.errors.push(format!("Invalid signature format: {e}"));
        }
        if let Err(e) = self.validate_kind(tx) {
            result.valid = false;
            result.errors.push(e);
        }
        if let Err(e) = self.validate_hash(signed) {
            result.valid = false;
            result.errors.push(e);
        }

        // Non-fatal oddities surface as warnings
        if let TransactionKind::TransferToken { amount: 0, .. } = tx.kind {
            result.warnings.push("Token transfer of zero amount".to_string());
        }
        if tx.value > 0 && !self.is_payable(&tx.kind) {
            result.warnings.push(format!(
                "Attached value {} is ignored by {}",
                tx.value,
                tx.kind.name()
            ));
        }

        result
    }

    fn validate_kind(&self, tx: &crate::domain::transaction::Transaction) -> Result<(), String> {
        match &tx.kind {
            TransactionKind::RegisterDomain { domain } => {
                if domain.is_empty() {
                    return Err("Domain name cannot be empty".to_string());
                }
            }
            TransactionKind::TransferDomain { domain, recipient } => {
                if domain.is_empty() {
                    return Err("Domain name cannot be empty".to_string());
                }
                validate_address(recipient)
                    .map_err(|e| format!("Invalid recipient address: {e}"))?;
            }
            TransactionKind::TransferToken { recipient, .. } => {
                validate_address(recipient)
                    .map_err(|e| format!("Invalid recipient address: {e}"))?;
            }
            TransactionKind::Deposit
            | TransactionKind::Withdraw { .. }
            | TransactionKind::SweepRegistryFees => {}
        }
        Ok(())
    }

    fn validate_hash(&self, signed: &SignedTransaction) -> Result<(), String> {
        match signed.transaction.hash() {
            Ok(hash) if hash == signed.hash => Ok(()),
            Ok(_) => Err("Transaction hash does not match its contents".to_string()),
            Err(e) => Err(format!("Transaction cannot be encoded: {e}")),
        }
    }

    fn is_payable(&self, kind: &TransactionKind) -> bool {
        matches!(
            kind,
            TransactionKind::RegisterDomain { .. } | TransactionKind::Deposit
        )
    }
}

impl Default for TransactionValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::Transaction;

    const SENDER: &str = "0x742d35cc6634c0532925a3b8d4c9db96c4b4d8b6";
    const RECIPIENT: &str = "0x8ba1f109551bd432803012645ac136ddd64dba72";

    fn signed(tx: Transaction) -> SignedTransaction {
        let hash = tx.hash().unwrap_or_else(|_| "0x00".to_string());
        SignedTransaction {
            transaction: tx,
            signature: "ab".repeat(65),
            hash,
        }
    }

    #[test]
    fn test_valid_transfer_passes() {
        let validator = TransactionValidator::new();
        let result = validator.validate_transaction(&signed(Transaction {
            sender: SENDER.to_string(),
            kind: TransactionKind::TransferToken {
                recipient: RECIPIENT.to_string(),
                amount: 100,
            },
            value: 0,
            nonce: 0,
        }));

        assert!(result.valid, "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_bad_sender_address_fails() {
        let validator = TransactionValidator::new();
        let result = validator.validate_transaction(&signed(Transaction {
            sender: "0xshort".to_string(),
            kind: TransactionKind::Deposit,
            value: 1,
            nonce: 0,
        }));

        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("sender address")));
    }

    #[test]
    fn test_empty_domain_fails() {
        let validator = TransactionValidator::new();
        let result = validator.validate_transaction(&signed(Transaction {
            sender: SENDER.to_string(),
            kind: TransactionKind::RegisterDomain { domain: String::new() },
            value: 0,
            nonce: 0,
        }));

        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("Domain name")));
    }

    #[test]
    fn test_short_signature_fails() {
        let validator = TransactionValidator::new();
        let tx = Transaction {
            sender: SENDER.to_string(),
            kind: TransactionKind::Deposit,
            value: 1,
            nonce: 0,
        };
        let hash = tx.hash().expect("Failed to hash");
        let result = validator.validate_transaction(&SignedTransaction {
            transaction: tx,
            signature: "abcd".to_string(),
            hash,
        });

        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("signature format")));
    }

    #[test]
    fn test_tampered_hash_fails() {
        let validator = TransactionValidator::new();
        let tx = Transaction {
            sender: SENDER.to_string(),
            kind: TransactionKind::Deposit,
            value: 1,
            nonce: 0,
        };
        let result = validator.validate_transaction(&SignedTransaction {
            transaction: tx,
            signature: "ab".repeat(65),
            hash: format!("0x{}", "00".repeat(32)),
        });

        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("hash")));
    }

    #[test]
    fn test_zero_amount_transfer_warns() {
        let validator = TransactionValidator::new();
        let result = validator.validate_transaction(&signed(Transaction {
            sender: SENDER.to_string(),
            kind: TransactionKind::TransferToken {
                recipient: RECIPIENT.to_string(),
                amount: 0,
            },
            value: 0,
            nonce: 0,
        }));

        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_stray_value_warns() {
        let validator = TransactionValidator::new();
        let result = validator.validate_transaction(&signed(Transaction {
            sender: SENDER.to_string(),
            kind: TransactionKind::Withdraw { amount: 10 },
            value: 5,
            nonce: 0,
        }));

        assert!(result.valid);
        assert!(result.warnings.iter().any(|w| w.contains("ignored")));
    }
}
