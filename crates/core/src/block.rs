//! Fixed-layout blocks and their canonical byte image.

use crate::hash::Hash;
use crate::transaction::{Transaction, TransactionKind, PAYLOAD_LEN, TX_ENCODED_LEN};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Canonical encoded block length: all fields little-endian, no gaps.
pub const BLOCK_ENCODED_LEN: usize = 4 + 4 + 8 + TX_ENCODED_LEN + 4 + 4;

/// Previous-hash value carried by the genesis block.
pub const GENESIS_PREV_HASH: Hash = Hash(42);

const GENESIS_PAYLOAD: [u8; PAYLOAD_LEN] = *b"microledger 2026";

/// One record in the ledger: a transaction plus chain-linkage and mining
/// metadata.
///
/// `nonce` and `threshold` record the *last* nonce search performed on this
/// block, which happens whenever it is about to serve as a predecessor; they
/// are not fixed at append time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Chain-assigned position, 0 for genesis.
    pub index: u32,
    /// Mined hash of the preceding block (arbitrary for genesis).
    pub prev_hash: Hash,
    /// Unix timestamp in nanoseconds, fixed at construction.
    pub timestamp: u64,
    /// The transaction this block carries.
    pub transaction: Transaction,
    /// Nonce found by the last mining pass.
    pub nonce: u32,
    /// Difficulty threshold in force at the last mining pass.
    pub threshold: u32,
}

impl Block {
    /// Create a new, not-yet-mined block.
    pub fn new(index: u32, prev_hash: Hash, transaction: Transaction) -> Self {
        Self {
            index,
            prev_hash,
            timestamp: Self::current_timestamp(),
            transaction,
            nonce: 0,
            threshold: 0,
        }
    }

    /// Create the genesis block (blank transaction, fixed previous hash).
    pub fn genesis() -> Self {
        Self::new(0, GENESIS_PREV_HASH, Transaction::blank(GENESIS_PAYLOAD))
    }

    /// Get the current Unix timestamp in nanoseconds.
    pub fn current_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos() as u64
    }

    /// The wire discriminant of the carried transaction.
    pub fn kind(&self) -> TransactionKind {
        self.transaction.kind()
    }

    /// Check if this is the genesis block.
    pub fn is_genesis(&self) -> bool {
        self.index == 0 && matches!(self.transaction, Transaction::Blank { .. })
    }

    /// Encode into the canonical 44-byte image used for hashing.
    ///
    /// Layout: index[0..4] prev_hash[4..8] timestamp[8..16] transaction[16..36]
    /// nonce[36..40] threshold[40..44].
    pub fn to_bytes(&self) -> [u8; BLOCK_ENCODED_LEN] {
        let mut buf = [0u8; BLOCK_ENCODED_LEN];
        buf[0..4].copy_from_slice(&self.index.to_le_bytes());
        buf[4..8].copy_from_slice(&self.prev_hash.0.to_le_bytes());
        buf[8..16].copy_from_slice(&self.timestamp.to_le_bytes());
        let mut tx = [0u8; TX_ENCODED_LEN];
        self.transaction.encode_into(&mut tx);
        buf[16..36].copy_from_slice(&tx);
        buf[36..40].copy_from_slice(&self.nonce.to_le_bytes());
        buf[40..44].copy_from_slice(&self.threshold.to_le_bytes());
        buf
    }
}
