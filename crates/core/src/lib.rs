//! Core ledger primitives for microledger.
//!
//! This crate provides the fundamental types used throughout the ledger:
//! - FNV-1a hashing over raw block images
//! - The fixed-width transaction union (mint/transfer, receipt, blank)
//! - Blocks and their canonical byte encoding

pub mod block;
pub mod hash;
pub mod transaction;

// Re-export commonly used types at the crate root
pub use block::{Block, BLOCK_ENCODED_LEN, GENESIS_PREV_HASH};
pub use hash::{fnv1a, Hash, FNV_OFFSET_BASIS, FNV_PRIME};
pub use transaction::{
    AccountId, Receipt, Transaction, TransactionKind, Transfer, TransferKind, MINT_ACCOUNT,
    PAYLOAD_LEN, TX_ENCODED_LEN,
};
