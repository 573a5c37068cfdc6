//! End-to-end walkthrough of the ledger
//!
//! Derives keys, signs transactions, submits them, and prints the resulting
//! balances, ownership, and event log.
//!
//! Run with: cargo run --example end_to_end

use anyhow::Result;
use ledgerpay_ledger::{
    infrastructure::logger, LedgerConfig, Transaction, TransactionKind, TransactionProcessor,
};
use ledgerpay_wallet_core::{KeyManager, SignatureManager};

#[tokio::main]
async fn main() -> Result<()> {
    logger::init_tracing("info");

    let key_manager = KeyManager::new();
    let signer = SignatureManager::new();

    // The deployer receives the full token supply and owns wallet + registry
    let deployer = key_manager
        .derive_from_seed_phrase(
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
        )?;
    let alice = key_manager.generate_random()?;

    let config = LedgerConfig::from_env()?;
    let processor = TransactionProcessor::new(config.clone(), deployer.address.clone());

    println!("=== Genesis ===");
    println!("deployer {} holds {}", deployer.address, processor.balance_of(&deployer.address).await);

    println!("\n=== Token transfer ===");
    let transfer = Transaction {
        sender: deployer.address.clone(),
        kind: TransactionKind::TransferToken { recipient: alice.address.clone(), amount: 2_500 },
        value: 0,
        nonce: 0,
    }
    .sign(&deployer.private_key, &signer)?;
    let outcome = processor.submit(&transfer).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    println!("\n=== Domain registration ===");
    let register = Transaction {
        sender: alice.address.clone(),
        kind: TransactionKind::RegisterDomain { domain: "alice.eth".to_string() },
        value: config.registration_cost,
        nonce: 0,
    }
    .sign(&alice.private_key, &signer)?;
    let outcome = processor.submit(&register).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    println!("alice.eth is owned by {:?}", processor.owner_of("alice.eth").await);

    println!("\n=== Wallet deposit and withdrawal ===");
    let deposit = Transaction {
        sender: alice.address.clone(),
        kind: TransactionKind::Deposit,
        value: config.min_deposit + 50_000,
        nonce: 1,
    }
    .sign(&alice.private_key, &signer)?;
    processor.submit(&deposit).await;

    let withdraw = Transaction {
        sender: deployer.address.clone(),
        kind: TransactionKind::Withdraw { amount: 25_000 },
        value: 0,
        nonce: 1,
    }
    .sign(&deployer.private_key, &signer)?;
    processor.submit(&withdraw).await;

    println!("wallet balance: {}", processor.wallet_balance().await);
    println!("deployer native balance: {}", processor.native_balance_of(&deployer.address).await);

    println!("\n=== Event log ===");
    for event in processor.events() {
        println!("{}", serde_json::to_string(&event)?);
    }

    println!("\n=== Metrics ===");
    println!("{}", serde_json::to_string_pretty(&processor.metrics().await)?);

    Ok(())
}
