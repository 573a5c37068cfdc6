//! Fixed-supply token ledger
//!
//! The entire supply is minted to the deploying address at genesis; no
//! minting operation exists. Transfers debit the sender and credit the
//! recipient atomically under the processor's write lock.

use crate::domain::error::LedgerResult;
use crate::domain::state::LedgerState;

/// Transfer tokens between addresses
///
/// The debit guard runs before any mutation, so an overdraft rejects with
/// both balances untouched.
pub fn transfer(
    state: &mut LedgerState,
    sender: &str,
    recipient: &str,
    amount: u128,
) -> LedgerResult<()> {
    state.debit(sender, amount)?;
    state.credit(recipient, amount);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::LedgerError;
    use crate::infrastructure::config::LedgerConfig;

    const DEPLOYER: &str = "0x742d35cc6634c0532925a3b8d4c9db96c4b4d8b6";
    const ALICE: &str = "0x8ba1f109551bd432803012645ac136ddd64dba72";
    const BOB: &str = "0x26c59cd738df90604ebb13ed8db76657cfd51f40";

    fn setup() -> (LedgerState, LedgerConfig) {
        let config = LedgerConfig::default();
        let state = LedgerState::genesis(DEPLOYER.to_string(), &config);
        (state, config)
    }

    #[test]
    fn test_transfer_moves_tokens() {
        let (mut state, config) = setup();
        transfer(&mut state, DEPLOYER, ALICE, 100)
            .expect("Failed to transfer tokens");

        assert_eq!(state.balance_of(DEPLOYER), config.initial_supply - 100);
        assert_eq!(state.balance_of(ALICE), 100);
    }

    #[test]
    fn test_transfer_overdraft_is_rejected() {
        let (mut state, config) = setup();
        let result = transfer(&mut state, ALICE, BOB, 1);

        assert_eq!(
            result,
            Err(LedgerError::InsufficientBalance { balance: 0, requested: 1 })
        );
        assert_eq!(state.balance_of(ALICE), 0);
        assert_eq!(state.balance_of(BOB), 0);
        assert_eq!(state.total_token_supply(), config.initial_supply);
    }

    #[test]
    fn test_transfer_to_self() {
        let (mut state, config) = setup();
        transfer(&mut state, DEPLOYER, DEPLOYER, 500)
            .expect("Failed to transfer tokens");

        assert_eq!(state.balance_of(DEPLOYER), config.initial_supply);
    }

    #[test]
    fn test_exact_balance_transfer() {
        let (mut state, _) = setup();
        transfer(&mut state, DEPLOYER, ALICE, 100)
            .expect("Failed to transfer tokens");
        transfer(&mut state, ALICE, BOB, 100)
            .expect("Failed to transfer tokens");

        assert_eq!(state.balance_of(ALICE), 0);
        assert_eq!(state.balance_of(BOB), 100);
    }

    proptest::proptest! {
        /// For every sequence of transfers, applied or rejected, the sum of
        /// all balances equals the initial supply.
        #[test]
        fn prop_supply_is_conserved(
            transfers in proptest::collection::vec((0usize..3, 0usize..3, 0u128..2_000_000_000_000), 1..64)
        ) {
            let addresses = [DEPLOYER, ALICE, BOB];
            let (mut state, config) = setup();

            for (from, to, amount) in transfers {
                let _ = transfer(&mut state, addresses[from], addresses[to], amount);
                proptest::prop_assert_eq!(state.total_token_supply(), config.initial_supply);
            }
        }
    }
}
