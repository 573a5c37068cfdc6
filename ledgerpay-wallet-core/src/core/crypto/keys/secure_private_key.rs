use crate::shared::constants::PRIVATE_KEY_SIZE;
use crate::shared::error::WalletError;
use zeroize::{Zeroize, Zeroizing};

/// Secure private key wrapper
///
/// Key bytes live only in zeroized memory and are wiped when the holder
/// drops the value. The core never persists or logs private keys.
pub struct SecurePrivateKey {
    key_bytes: Zeroizing<[u8; PRIVATE_KEY_SIZE]>,
}

impl SecurePrivateKey {
    /// Perform cryptographic operations without exposing the key
    /// This method takes a closure that receives the key bytes temporarily
    pub fn with_key<F, T>(&self, f: F) -> Result<T, WalletError>
    where
        F: FnOnce(&[u8]) -> Result<T, WalletError>,
    {
        f(&self.key_bytes[..])
    }

    /// Create a SecurePrivateKey from existing key bytes
    /// Callers are responsible for zeroizing their own copy of the input
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(WalletError::crypto("Invalid private key length".to_string()));
        }

        let mut key_bytes = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        key_bytes.copy_from_slice(bytes);

        // Validate the key is a valid secp256k1 private key
        let _secret_key = secp256k1::SecretKey::from_byte_array(*key_bytes)
            .map_err(|_| WalletError::crypto("Invalid private key".to_string()))?;

        Ok(SecurePrivateKey { key_bytes })
    }

    /// Generate a new private key from cryptographically secure randomness
    pub fn generate() -> Result<Self, WalletError> {
        use rand_core::{OsRng, RngCore};
        use secp256k1::SecretKey;

        let mut rng = OsRng;
        let mut key_bytes = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        rng.try_fill_bytes(&mut *key_bytes)
            .map_err(|e| WalletError::entropy_unavailable(format!("{}", e)))?;

        // Ensure the key is valid for secp256k1
        let _secret_key = SecretKey::from_byte_array(*key_bytes)
            .map_err(|_| WalletError::crypto("Generated invalid private key".to_string()))?;

        Ok(SecurePrivateKey { key_bytes })
    }
}

// No Debug implementation to prevent key exposure in logs
// No Clone implementation to prevent accidental key duplication
// No Default implementation to prevent accidental key creation

impl Zeroize for SecurePrivateKey {
    fn zeroize(&mut self) {
        self.key_bytes.zeroize();
    }
}
