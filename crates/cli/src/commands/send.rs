//! Ad-hoc sends against a fresh ledger.

use super::report;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use microledger_chain::{Ledger, LedgerConfig, DEFAULT_THRESHOLD};
use microledger_core::AccountId;

#[derive(Args)]
pub struct SendArgs {
    /// Sends to execute in order, each as SENDER:RECEIVER:AMOUNT
    /// (sender 0 mints new coins)
    #[arg(required = true)]
    sends: Vec<String>,

    /// Mining difficulty: accept block hashes at or below this value
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u32,

    /// Emit the chain as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn parse_send(spec: &str) -> Result<(AccountId, AccountId, u32)> {
    let parts: Vec<&str> = spec.split(':').collect();
    anyhow::ensure!(
        parts.len() == 3,
        "expected SENDER:RECEIVER:AMOUNT, got '{spec}'"
    );
    let sender = parts[0]
        .parse()
        .with_context(|| format!("bad sender in '{spec}'"))?;
    let receiver = parts[1]
        .parse()
        .with_context(|| format!("bad receiver in '{spec}'"))?;
    let amount = parts[2]
        .parse()
        .with_context(|| format!("bad amount in '{spec}'"))?;
    Ok((sender, receiver, amount))
}

pub fn run(args: SendArgs) -> Result<()> {
    let sends = args
        .sends
        .iter()
        .map(|spec| parse_send(spec))
        .collect::<Result<Vec<_>>>()?;

    let mut ledger = Ledger::with_config(LedgerConfig {
        threshold: args.threshold,
    });

    // Rejected sends are reported but do not stop the run.
    for (sender, receiver, amount) in sends {
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
