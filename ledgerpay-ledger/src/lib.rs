//! LedgerPay ledger core
//!
//! A single authoritative, account-based ledger state machine. Signed
//! transactions are verified, then applied strictly sequentially against
//! [`domain::state::LedgerState`] by the [`app::TransactionProcessor`];
//! three rule-sets (domain registry, token ledger, simple wallet) define
//! the legal transitions.

pub mod domain;
pub mod rulesets;
pub mod validators;
pub mod app;
pub mod infrastructure;

// Re-export the public surface
pub use app::{ProcessorMetrics, TransactionProcessor};
pub use domain::error::{LedgerError, LedgerResult};
pub use domain::events::{Event, EventKind, EventLog};
pub use domain::state::{Account, DomainRecord, LedgerState};
pub use domain::transaction::{
    Receipt, SignedTransaction, Transaction, TransactionKind, TransactionOutcome,
    TransactionStatus,
};
pub use infrastructure::config::LedgerConfig;
pub use validators::{TransactionValidator, ValidationResult};
