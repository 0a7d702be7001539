//! Chain reporting shared by the CLI commands.

use anyhow::Result;
use colored::Colorize;
use microledger_chain::Ledger;
use microledger_core::Transaction;

/// Print the whole chain, one line per block, or the serde model as JSON.
pub fn print_chain(ledger: &Ledger, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ledger.blocks())?);
        return Ok(());
    }

    println!();
    println!("{}", "Chain:".bold().cyan());
    for block in ledger.iter() {
        let line = match &block.transaction {
            Transaction::Invalid => "INVALID".red().to_string(),
            Transaction::Blank { data } => {
                format!("{} {}", "BLANK".dimmed(), hex::encode(data))
            }
            Transaction::Transfer(t) if t.is_mint() => format!(
                "{} {} received {}",
                "GENERATE".green(),
                t.receiver,
                t.amount
            ),
            Transaction::Transfer(t) => format!(
                "{} {} sent {} to {}",
                "TRANSFER".yellow(),
                t.sender,
                t.amount,
                t.receiver
            ),
            Transaction::Receipt(r) => format!(
                "{} {} now has {}",
                "RECEIPT".blue(),
                r.account,
                r.balance
            ),
        };
        println!("{} ({}): {}", block.index, block.prev_hash, line);
    }
    Ok(())
}
