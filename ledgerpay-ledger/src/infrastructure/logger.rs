//! Tracing setup for the ledger
//!
//! Initialization is Once-guarded so tests and embedders can call it freely.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the supplied default level.
pub fn init_tracing(default_level: &str) {
    let default_level = default_level.to_string();
    INIT.call_once(move || {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .init();
    });
}
