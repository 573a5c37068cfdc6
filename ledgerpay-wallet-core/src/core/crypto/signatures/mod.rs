//! Digital signature functionality for the wallet core
//!
//! This module handles ECDSA signatures over ledger transaction payloads.

pub mod signature_manager;

// Re-export all public items from submodules
pub use signature_manager::*;
