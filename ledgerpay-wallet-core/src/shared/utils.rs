//! Utility functions for the wallet core
//!
//! This module contains common validation helpers used throughout the wallet core.

use crate::shared::constants::{ADDRESS_LENGTH, RECOVERABLE_SIGNATURE_SIZE};
use crate::shared::error::WalletError;
use bip39::Mnemonic;

/// Validate ledger address format
pub fn validate_address(address: &str) -> Result<(), WalletError> {
    if !address.starts_with("0x") {
        return Err(WalletError::validation("Address must start with 0x"));
    }

    if address.len() != ADDRESS_LENGTH {
        return Err(WalletError::validation("Address must be 42 characters long"));
    }

    if !address[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WalletError::validation("Address contains invalid hex characters"));
    }

    Ok(())
}

/// Validate a recoverable signature in hex form
pub fn validate_signature(signature: &str) -> Result<(), WalletError> {
    let clean = signature.strip_prefix("0x").unwrap_or(signature);

    if clean.len() != RECOVERABLE_SIGNATURE_SIZE * 2 {
        return Err(WalletError::validation("Signature must encode 65 bytes"));
    }

    if !clean.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(WalletError::validation("Signature contains invalid hex characters"));
    }

    Ok(())
}

/// Validate a BIP-39 seed phrase
pub fn validate_seed_phrase(seed_phrase: &str) -> Result<(), WalletError> {
    match Mnemonic::parse_in_normalized(bip39::Language::English, seed_phrase) {
        Ok(_) => Ok(()),
        Err(e) => Err(WalletError::invalid_seed_phrase(format!("{}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_address() {
        assert!(validate_address("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6").is_ok());
        assert!(validate_address("742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6").is_err());
        assert!(validate_address("0x742d35").is_err());
        assert!(validate_address("0xzzzz35Cc6634C0532925a3b8D4C9db96C4b4d8b6").is_err());
    }

    #[test]
    fn test_validate_signature() {
        let valid = "ab".repeat(65);
        assert!(validate_signature(&valid).is_ok());
        assert!(validate_signature(&format!("0x{}", valid)).is_ok());
        assert!(validate_signature("ab").is_err());
        assert!(validate_signature(&"zz".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_seed_phrase() {
        let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
        assert!(validate_seed_phrase(phrase).is_ok());
        assert!(validate_seed_phrase("definitely not a mnemonic").is_err());
    }
}
