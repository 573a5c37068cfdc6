//! Cryptographic functionality for the wallet core
//!
//! This module provides key management, address derivation, and digital signatures.
//!
//! SECURITY: This module implements hardened cryptographic operations with:
//! - Memory zeroization for all private key material
//! - No persistence of private keys anywhere in the core
//! - Cryptographic parameter validation on every input

pub mod keys;
pub mod signatures;

// Re-export all public items from submodules
pub use keys::*;
pub use signatures::*;
