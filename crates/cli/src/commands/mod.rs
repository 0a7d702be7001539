//! CLI commands module.

use anyhow::Result;
use clap::Subcommand;

mod demo;
mod report;
mod send;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scripted demo economy and report the resulting chain
    Demo(demo::DemoArgs),
    /// Run ad-hoc sends against a fresh ledger and report the resulting chain
    Send(send::SendArgs),
}

pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Demo(args) => demo::run(args),
        Commands::Send(args) => send::run(args),
    }
}
