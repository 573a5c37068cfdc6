//! LedgerPay Wallet Core
//!
//! Key material and signature core for LedgerPay.
//! Handles key derivation, address computation, and transaction signing in Rust.
//!
//! ## Architecture
//!
//! This library follows a simplified architecture focused on core functionality:
//!
//! - **Core**: Key management and digital signatures
//! - **Shared**: Common types, constants, and utilities
//!
//! ## Security Features
//!
//! - Zero memory exposure for private keys (zeroized on drop)
//! - Private keys are never persisted or logged
//! - Industry-standard cryptographic algorithms (secp256k1, Keccak-256)
//!
//! ## Usage
//!
//! ```rust
//! use ledgerpay_wallet_core::{KeyManager, SignatureManager};
//!
//! let key_manager = KeyManager::new();
//! let signer = SignatureManager::new();
//!
//! let keypair = key_manager.generate_random()?;
//! let signature = signer.sign_payload(b"payload", &keypair.private_key)?;
//! assert!(signer.verify_payload(&keypair.address, b"payload", &signature));
//! # Ok::<(), ledgerpay_wallet_core::WalletError>(())
//! ```

// Re-export main modules for easy access
pub mod core;
pub mod shared;

// Re-export specific components
pub use crate::core::crypto::keys::{KeyManager, KeyPair, SecurePrivateKey, SecureSeedPhrase};
pub use crate::core::crypto::signatures::SignatureManager;

// Re-export shared types
pub use shared::error::WalletError;
pub use shared::types::{Address, PublicKey, SignatureHex, WalletResult};

/// Initialize logging for standalone use of the wallet core
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init()?;
    log::info!("LedgerPay wallet core initialized");
    Ok(())
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify_roundtrip() {
        let key_manager = KeyManager::new();
        let signer = SignatureManager::new();

        let keypair = key_manager.generate_random()
            .expect("Failed to generate keypair");
        let signature = signer.sign_payload(b"ledger payload", &keypair.private_key)
            .expect("Failed to sign payload");

        assert!(signer.verify_payload(&keypair.address, b"ledger payload", &signature));
    }

    #[test]
    fn test_verify_rejects_foreign_address() {
        let key_manager = KeyManager::new();
        let signer = SignatureManager::new();

        let signing_keypair = key_manager.generate_random()
            .expect("Failed to generate signing keypair");
        let other_keypair = key_manager.generate_random()
            .expect("Failed to generate other keypair");
        let signature = signer.sign_payload(b"ledger payload", &signing_keypair.private_key)
            .expect("Failed to sign payload");

        assert!(!signer.verify_payload(&other_keypair.address, b"ledger payload", &signature));
    }
}
