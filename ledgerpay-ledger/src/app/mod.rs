//! Application layer - the transaction processor

pub mod transaction_processor;

pub use transaction_processor::*;
