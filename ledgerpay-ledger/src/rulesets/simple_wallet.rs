//! Balance-holding wallet
//!
//! Any address may deposit above the configured minimum; only the wallet's
//! administrative owner may withdraw. Both operations emit events through
//! the processor.

use crate::domain::error::{LedgerError, LedgerResult};
use crate::domain::state::LedgerState;
use crate::infrastructure::config::LedgerConfig;

/// Deposit the attached value into the wallet
///
/// The value must strictly exceed the minimum deposit.
pub fn deposit(state: &mut LedgerState, config: &LedgerConfig, value: u128) -> LedgerResult<()> {
    if value <= config.min_deposit {
        return Err(LedgerError::InsufficientFunds {
            required: config.min_deposit,
            provided: value,
        });
    }
    state.credit_wallet(value);
    Ok(())
}

/// Withdraw from the wallet to the sender
///
/// Owner-only; the withdrawn amount is credited to the sender's native
/// balance.
pub fn withdraw(state: &mut LedgerState, sender: &str, amount: u128) -> LedgerResult<()> {
    if !state.wallet_owner().eq_ignore_ascii_case(sender) {
        return Err(LedgerError::not_owner(
            "Only the owner of this wallet can withdraw",
        ));
    }
    state.debit_wallet(amount)?;
    state.credit_native(sender, amount);
    Ok(())
}
