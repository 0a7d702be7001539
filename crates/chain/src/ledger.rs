//! The append-only chain and its send orchestration.
//!
//! This module brings the miner and the transaction factory together: one
//! end-user "send" builds and mines a transfer block, a receipt block, and an
//! optional change-return block, then appends the lot atomically.

use crate::factory;
use crate::miner::{self, DEFAULT_THRESHOLD};
use microledger_core::{AccountId, Block};
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced by [`Ledger::send_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SendError {
    /// Self-transfer, zero-address receiver, or insufficient sender balance.
    #[error("invalid transfer")]
    InvalidTransfer,

    /// The receipt candidate failed validation. Defensive: cannot arise once
    /// the transfer validated.
    #[error("invalid receipt")]
    InvalidReceipt,
}

pub type Result<T> = std::result::Result<T, SendError>;

/// Ledger configuration.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Mining difficulty: accept hashes at or below this value.
    pub threshold: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// The single-node ledger: an ordered, append-only sequence of blocks.
///
/// Holds the chain-wide index counter as explicit state; the counter advances
/// only for blocks that are actually appended, so indices stay contiguous.
pub struct Ledger {
    blocks: Vec<Block>,
    next_index: u32,
    config: LedgerConfig,
}

impl Ledger {
    /// Create a ledger with the default difficulty, seeded with genesis.
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default())
    }

    /// Create a ledger with the given configuration, seeded with genesis.
    pub fn with_config(config: LedgerConfig) -> Self {
        Self {
            blocks: vec![Block::genesis()],
            next_index: 1,
            config,
        }
    }

    /// Number of blocks in the chain, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// A chain is never empty; genesis is appended at construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The whole chain in index order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate over blocks in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Get a block by chain index.
    pub fn get(&self, index: u32) -> Option<&Block> {
        self.blocks.get(index as usize)
    }

    /// The current chain tip.
    pub fn tip(&self) -> &Block {
        self.blocks.last().expect("ledger always holds genesis")
    }

    /// The account's latest recorded balance, 0 if it has no receipt yet.
    ///
    /// Backward linear scan; the chain keeps no per-account index.
    pub fn balance_of(&self, account: AccountId) -> u32 {
        factory::find_latest_receipt(&self.blocks, account)
            .map(|(_, balance)| balance)
            .unwrap_or(0)
    }

    /// Execute one send: transfer, receipt, and optional change-return.
    ///
    /// On success the chain gains two blocks (a mint produces no return) or
    /// three, in that fixed order, and the index counter advances to match.
    /// On failure nothing is appended and the counter does not move.
    ///
    /// Mining happens on each block as it is about to serve as a predecessor,
    /// so the chain tip is re-mined in place here before the transfer block
    /// can reference its hash.
    pub fn send_amount(
        &mut self,
        sender: AccountId,
        receiver: AccountId,
        amount: u32,
    ) -> Result<()> {
        let threshold = self.config.threshold;

        let transfer_tx = factory::make_transfer(&self.blocks, sender, receiver, amount);
        if transfer_tx.is_invalid() {
            warn!(sender, receiver, amount, "transfer rejected");
            return Err(SendError::InvalidTransfer);
        }

        let tip = self.blocks.last_mut().expect("ledger always holds genesis");
        let prev_hash = miner::mine(tip, threshold);
        let mut transfer_block = Block::new(self.next_index, prev_hash, transfer_tx);

        let receipt_tx = factory::make_receipt(&self.blocks, &transfer_block);
        if receipt_tx.is_invalid() {
            warn!(sender, receiver, amount, "receipt rejected");
            return Err(SendError::InvalidReceipt);
        }

        let transfer_hash = miner::mine(&mut transfer_block, threshold);
        let mut receipt_block = Block::new(self.next_index + 1, transfer_hash, receipt_tx);
        let receipt_hash = miner::mine(&mut receipt_block, threshold);

        let return_tx = factory::make_return(&self.blocks, &transfer_block, &receipt_block);

        self.blocks.push(transfer_block);
        self.blocks.push(receipt_block);
        self.next_index += 2;

        // Mints legitimately produce no return; that is not a failure.
        if !return_tx.is_invalid() {
            let return_block = Block::new(self.next_index, receipt_hash, return_tx);
            self.blocks.push(return_block);
            self.next_index += 1;
        }

        info!(
            sender,
            receiver,
            amount,
            height = self.next_index - 1,
            "send appended"
        );
        Ok(())
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
