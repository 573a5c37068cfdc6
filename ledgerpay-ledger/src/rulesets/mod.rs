//! Transition rule-sets
//!
//! Three thin rule-sets define the legal ledger transitions. Each operates
//! only through `LedgerState`'s guarded primitives and performs every check
//! before any mutation, so a rejected transition leaves the state untouched.

pub mod domain_registry;
pub mod simple_wallet;
pub mod token_ledger;
