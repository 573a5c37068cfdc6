//! Key generation and management
//!
//! This module contains key generation, derivation, and address computation
//! for cryptographic operations in the wallet core.

use crate::shared::constants::{ACCOUNT_DERIVATION_PATH, ADDRESS_BYTES};
use crate::shared::error::WalletError;
use crate::shared::types::{Address, PublicKey as PublicKeyHex};
use secp256k1::{PublicKey, Secp256k1, SecretKey};
use super::SecurePrivateKey;
use bip32::{DerivationPath, XPrv};
use std::str::FromStr;

/// A signing keypair: private key, public key, and the derived address
pub struct KeyPair {
    pub private_key: SecurePrivateKey,
    pub public_key: PublicKeyHex,
    pub address: Address,
}

/// Key manager for cryptographic key operations
pub struct KeyManager {
    secp256k1: Secp256k1<secp256k1::All>,
}

impl KeyManager {
    /// Create a new key manager
    pub fn new() -> Self {
        Self {
            secp256k1: Secp256k1::new(),
        }
    }

    /// Generate a new keypair from cryptographically secure entropy
    pub fn generate_random(&self) -> Result<KeyPair, WalletError> {
        let private_key = SecurePrivateKey::generate()?;
        self.keypair_from_private(private_key)
    }

    /// Derive a keypair from a BIP-39 seed phrase
    ///
    /// Deterministic: the same phrase always yields the same keypair.
    pub fn derive_from_seed_phrase(&self, seed_phrase: &str) -> Result<KeyPair, WalletError> {
        use bip39::Mnemonic;

        // Parse the mnemonic
        let mnemonic = Mnemonic::parse_in_normalized(bip39::Language::English, seed_phrase)
            .map_err(|e| WalletError::invalid_seed_phrase(format!("{}", e)))?;

        let seed = bip32::Seed::new(mnemonic.to_seed_normalized("")); // No passphrase

        // Derive the BIP32 root key
        let xprv = XPrv::new(seed.as_bytes())
            .map_err(|e| WalletError::crypto(format!("Failed to create XPrv: {}", e)))?;

        let derivation_path = DerivationPath::from_str(ACCOUNT_DERIVATION_PATH)
            .map_err(|e| WalletError::crypto(format!("Invalid derivation path: {}", e)))?;

        let mut child_xprv = xprv;
        for child_number in derivation_path.into_iter() {
            child_xprv = child_xprv.derive_child(child_number)
                .map_err(|e| WalletError::crypto(format!("Failed to derive child XPrv: {}", e)))?;
        }

        let private_key_bytes = child_xprv.private_key().to_bytes();
        let private_key = SecurePrivateKey::from_bytes(&private_key_bytes)?;
        self.keypair_from_private(private_key)
    }

    /// Build a full keypair from a held private key
    pub fn keypair_from_private(&self, private_key: SecurePrivateKey) -> Result<KeyPair, WalletError> {
        let public_key = self.get_public_key(&private_key)?;
        let address = self.address_of(&public_key)?;
        Ok(KeyPair { private_key, public_key, address })
    }

    /// Generate a public key from a private key
    pub fn get_public_key(&self, private_key: &SecurePrivateKey) -> Result<PublicKeyHex, WalletError> {
        private_key.with_key(|key_bytes| {
            let secret_key = SecretKey::from_byte_array(key_bytes.try_into().map_err(|_| WalletError::crypto("Invalid private key length".to_string()))?)
                .map_err(|e| WalletError::crypto(format!("Invalid private key: {}", e)))?;

            let public_key = PublicKey::from_secret_key(&self.secp256k1, &secret_key);
            let public_key_bytes = public_key.serialize_uncompressed();

            Ok(hex::encode(public_key_bytes))
        })
    }

    /// Derive a ledger address from a public key
    ///
    /// One-way: Keccak-256 of the uncompressed key, last 20 bytes.
    pub fn address_of(&self, public_key: &str) -> Result<Address, WalletError> {
        let public_key_bytes = hex::decode(public_key)
            .map_err(|_| WalletError::validation("Invalid hex format".to_string()))?;

        let public_key = PublicKey::from_slice(&public_key_bytes)
            .map_err(|e| WalletError::crypto(format!("Invalid public key: {}", e)))?;

        // Drop the 0x04 prefix before hashing
        let public_key_bytes = public_key.serialize_uncompressed();
        let keccak_hash = self.keccak256(&public_key_bytes[1..]);

        // The address is the last 20 bytes of the hash
        let address_bytes = &keccak_hash[keccak_hash.len() - ADDRESS_BYTES..];
        let address = hex::encode(address_bytes);

        Ok(format!("0x{}", address))
    }

    /// Keccak256 hash function
    fn keccak256(&self, data: &[u8]) -> Vec<u8> {
        use sha3::{Digest, Keccak256};
        let mut hasher = Keccak256::new();
        hasher.update(data);
        hasher.finalize().to_vec()
    }
}

impl Default for KeyManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utils::validate_address;

    const TEST_SEED_PHRASE: &str =
        "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_random_keypair_generation() {
        let manager = KeyManager::new();
        let keypair = manager.generate_random()
            .expect("Failed to generate keypair");
        assert_eq!(keypair.public_key.len(), 130); // 65 bytes * 2 for hex
        validate_address(&keypair.address)
            .expect("Generated address has invalid format");
    }

    #[test]
    fn test_random_keypairs_are_distinct() {
        let manager = KeyManager::new();
        let a = manager.generate_random().expect("Failed to generate keypair");
        let b = manager.generate_random().expect("Failed to generate keypair");
        assert_ne!(a.address, b.address);
    }

    #[test]
    fn test_seed_phrase_derivation_is_deterministic() {
        let manager = KeyManager::new();
        let first = manager.derive_from_seed_phrase(TEST_SEED_PHRASE)
            .expect("Failed to derive keypair from seed");
        let second = manager.derive_from_seed_phrase(TEST_SEED_PHRASE)
            .expect("Failed to derive keypair from seed");
        assert_eq!(first.address, second.address);
        assert_eq!(first.public_key, second.public_key);
    }

    #[test]
    fn test_different_seed_phrases_yield_different_addresses() {
        let manager = KeyManager::new();
        let first = manager.derive_from_seed_phrase(TEST_SEED_PHRASE)
            .expect("Failed to derive keypair from seed");
        let second = manager.derive_from_seed_phrase(
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
        ).expect("Failed to derive keypair from seed");
        assert_ne!(first.address, second.address);
    }

    #[test]
    fn test_invalid_seed_phrase_is_rejected() {
        let manager = KeyManager::new();
        let result = manager.derive_from_seed_phrase("not a valid mnemonic at all");
        assert!(matches!(result, Err(WalletError::InvalidSeedPhrase(_))));
    }

    #[test]
    fn test_address_generation() {
        let manager = KeyManager::new();
        let keypair = manager.generate_random()
            .expect("Failed to generate keypair");
        let address = manager.address_of(&keypair.public_key)
            .expect("Failed to derive address");
        assert!(address.starts_with("0x"));
        assert_eq!(address.len(), 42); // 0x + 40 hex chars
        assert_eq!(address, keypair.address);
    }
}
