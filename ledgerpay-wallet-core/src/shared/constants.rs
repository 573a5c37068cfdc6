//! Constants for the wallet core
//!
//! This module contains all constants used throughout the wallet core.

// Security constants
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const PUBLIC_KEY_SIZE: usize = 65;
pub const HASH_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 64;
// Compact signature plus one recovery byte
pub const RECOVERABLE_SIGNATURE_SIZE: usize = 65;

// Address layout: 0x prefix plus 20 bytes of Keccak-256 output
pub const ADDRESS_BYTES: usize = 20;
pub const ADDRESS_LENGTH: usize = 42;

// Key derivation
pub const ACCOUNT_DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";
pub const SEED_PHRASE_WORD_COUNTS: &[usize] = &[12, 15, 18, 21, 24];

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
