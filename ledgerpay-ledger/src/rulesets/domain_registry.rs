//! Domain-name ownership registry
//!
//! Names are registered against a fee, transferred only by their current
//! owner, and never deleted. Fees accrue to the registry until its owner
//! sweeps them.

use crate::domain::error::{LedgerError, LedgerResult};
use crate::domain::state::LedgerState;
use crate::infrastructure::config::LedgerConfig;

/// Register an unowned domain name to the sender
///
/// The attached value must cover the registration cost; it is kept by the
/// registry as a fee.
pub fn register(
    state: &mut LedgerState,
    config: &LedgerConfig,
    sender: &str,
    domain: &str,
    value: u128,
) -> LedgerResult<()> {
    if value < config.registration_cost {
        return Err(LedgerError::InsufficientFunds {
            required: config.registration_cost,
            provided: value,
        });
    }
    state.register_domain(domain, sender)?;
    state.accrue_registration_fee(value);
    Ok(())
}

/// Transfer a domain name to a recipient
///
/// Only the current owner may transfer; an unregistered name has no owner
/// and rejects the same way.
pub fn transfer(
    state: &mut LedgerState,
    sender: &str,
    domain: &str,
    recipient: &str,
) -> LedgerResult<()> {
    match state.owner_of(domain) {
        Some(owner) if owner.eq_ignore_ascii_case(sender) => {
            state.set_domain_owner(domain, recipient)
        }
        _ => Err(LedgerError::not_owner(
            "Only the domain name owner can transfer",
        )),
    }
}

/// Pay the registry's collected fees out to its owner
pub fn sweep_fees(state: &mut LedgerState, sender: &str) -> LedgerResult<u128> {
    if !state.registry_owner().eq_ignore_ascii_case(sender) {
        return Err(LedgerError::not_owner(
            "Only the registry owner can sweep fees",
        ));
    }
    let amount = state.take_registry_fees();
    state.credit_native(sender, amount);
    Ok(amount)
}
