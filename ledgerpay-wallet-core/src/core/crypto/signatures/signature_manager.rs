use crate::shared::constants::{ADDRESS_BYTES, RECOVERABLE_SIGNATURE_SIZE, SIGNATURE_SIZE};
use crate::shared::error::WalletError;
use crate::shared::types::{Address, SignatureHex, WalletResult};
use crate::core::crypto::keys::SecurePrivateKey;
use secp256k1::{Message, Secp256k1, SecretKey};
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use sha3::{Digest, Keccak256};

/// Digital signature manager
///
/// Signs transaction payloads with recoverable ECDSA and verifies signatures
/// against a claimed sender address by recovering the signing key.
pub struct SignatureManager {
    secp: Secp256k1<secp256k1::All>,
}

impl SignatureManager {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// Sign a transaction payload with a private key
    ///
    /// Output is a 65-byte recoverable signature in hex: 64 compact bytes
    /// plus one recovery byte.
    pub fn sign_payload(&self, payload: &[u8], private_key: &SecurePrivateKey) -> WalletResult<SignatureHex> {
        private_key.with_key(|key_bytes| {
            let secret_key = SecretKey::from_byte_array(key_bytes.try_into().map_err(|_| WalletError::crypto("Invalid private key length".to_string()))?)
                .map_err(|e| WalletError::crypto(format!("Invalid private key: {}", e)))?;

            // Hash the payload
            let mut hasher = Keccak256::new();
            hasher.update(payload);
            let payload_hash = hasher.finalize();

            // Create secp256k1 message
            let secp_message = Message::from_digest(payload_hash.as_slice().try_into().map_err(|_| WalletError::crypto("Invalid payload hash length".to_string()))?);

            // Sign with a recoverable signature so verifiers only need the address
            let rec_sig: RecoverableSignature = self.secp.sign_ecdsa_recoverable(secp_message, &secret_key);
            let (rec_id, compact) = rec_sig.serialize_compact();

            let mut signature_bytes = compact.to_vec();
            signature_bytes.push(i32::from(rec_id) as u8);
            Ok(hex::encode(signature_bytes))
        })
    }

    /// Verify a signature against a claimed sender address
    ///
    /// Returns true iff the signature was produced by the private key behind
    /// `address` over exactly this payload. Wrong key, tampered payload, and
    /// malformed signatures all yield false, never an error.
    pub fn verify_payload(&self, address: &str, payload: &[u8], signature: &str) -> bool {
        match self.recover_address(payload, signature) {
            Ok(recovered) => {
                let claimed = address.strip_prefix("0x").unwrap_or(address);
                let recovered = recovered.strip_prefix("0x").unwrap_or(&recovered).to_string();
                claimed.eq_ignore_ascii_case(&recovered)
            }
            Err(_) => false,
        }
    }

    /// Recover the signer address from a payload and recoverable signature
    pub fn recover_address(&self, payload: &[u8], signature: &str) -> WalletResult<Address> {
        let clean = signature.strip_prefix("0x").unwrap_or(signature);
        let signature_bytes = hex::decode(clean)
            .map_err(|_| WalletError::validation("Invalid signature hex".to_string()))?;

        if signature_bytes.len() != RECOVERABLE_SIGNATURE_SIZE {
            return Err(WalletError::validation("Signature must be 65 bytes".to_string()));
        }

        let rec_id = RecoveryId::try_from(signature_bytes[SIGNATURE_SIZE] as i32)
            .map_err(|e| WalletError::crypto(format!("Invalid recovery id: {}", e)))?;
        let rec_sig = RecoverableSignature::from_compact(&signature_bytes[..SIGNATURE_SIZE], rec_id)
            .map_err(|e| WalletError::crypto(format!("Invalid signature format: {}", e)))?;

        // Hash the payload
        let mut hasher = Keccak256::new();
        hasher.update(payload);
        let payload_hash = hasher.finalize();

        let secp_message = Message::from_digest(payload_hash.as_slice().try_into().map_err(|_| WalletError::crypto("Invalid payload hash length".to_string()))?);

        let public_key = self.secp.recover_ecdsa(secp_message, &rec_sig)
            .map_err(|e| WalletError::crypto(format!("Signature recovery failed: {}", e)))?;

        // Address derivation mirrors KeyManager::address_of
        let public_key_bytes = public_key.serialize_uncompressed();
        let mut hasher = Keccak256::new();
        hasher.update(&public_key_bytes[1..]);
        let keccak_hash = hasher.finalize();

        let address_bytes = &keccak_hash[keccak_hash.len() - ADDRESS_BYTES..];
        Ok(format!("0x{}", hex::encode(address_bytes)))
    }
}

impl Default for SignatureManager {
    fn default() -> Self {
        Self::new()
    }
}
