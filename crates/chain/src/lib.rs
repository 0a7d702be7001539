//! Chain orchestration for microledger.
//!
//! This crate drives the ledger core end to end:
//! - **Miner**: brute-force nonce search against a difficulty threshold
//! - **Factory**: pure transaction construction and validation
//! - **Ledger**: the append-only chain and the send pipeline
//!   (transfer → receipt → optional change-return)
//!
//! # Example
//!
//! ```rust
//! use microledger_chain::Ledger;
//! use microledger_core::MINT_ACCOUNT;
//!
//! let mut ledger = Ledger::new();
//!
//! // Mint 100 coins to account 1, then move 75 of them to account 2.
//! ledger.send_amount(MINT_ACCOUNT, 1, 100).unwrap();
//! ledger.send_amount(1, 2, 75).unwrap();
//!
//! assert_eq!(ledger.balance_of(1), 25);
//! assert_eq!(ledger.balance_of(2), 75);
//! ```

pub mod factory;
pub mod ledger;
pub mod miner;

// Re-export commonly used types
pub use factory::{make_receipt, make_return, make_transfer};
pub use ledger::{Ledger, LedgerConfig, SendError};
pub use miner::{mine, DEFAULT_THRESHOLD};
