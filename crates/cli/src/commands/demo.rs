//! The scripted demo economy.

use super::report;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use microledger_chain::{Ledger, LedgerConfig, DEFAULT_THRESHOLD};
use microledger_core::{AccountId, BLOCK_ENCODED_LEN, MINT_ACCOUNT, PAYLOAD_LEN, TX_ENCODED_LEN};

#[derive(Args)]
pub struct DemoArgs {
    /// Mining difficulty: accept block hashes at or below this value
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u32,

    /// Emit the chain as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

/// Four mints to account 1, four self-sends (all rejected), four transfers to
/// account 2 (funds run out after the second).
const SCRIPT: [(AccountId, AccountId, u32); 12] = [
    (MINT_ACCOUNT, 1, 50),
    (MINT_ACCOUNT, 1, 50),
    (MINT_ACCOUNT, 1, 50),
    (MINT_ACCOUNT, 1, 50),
    (1, 1, 50),
    (1, 1, 50),
    (1, 1, 50),
    (1, 1, 50),
    (1, 2, 75),
    (1, 2, 75),
    (1, 2, 75),
    (1, 2, 75),
];

pub fn run(args: DemoArgs) -> Result<()> {
    println!("Blank size: {}", PAYLOAD_LEN);
    println!("Trans size: {}", TX_ENCODED_LEN);
    println!("Block size: {}", BLOCK_ENCODED_LEN);

    let mut ledger = Ledger::with_config(LedgerConfig {
        threshold: args.threshold,
    });

    for (sender, receiver, amount) in SCRIPT {
        match ledger.send_amount(sender, receiver, amount) {
            Ok(()) => println!(
                "{} send {} -> {} ({})",
                "ok".green(),
                sender,
                receiver,
                amount
            ),
            Err(e) => println!(
                "{} send {} -> {} ({}): {}",
                "rejected".red(),
                sender,
                receiver,
                amount,
                e
            ),
        }
    }

    report::print_chain(&ledger, args.json)
}
