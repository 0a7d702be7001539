//! Transaction variants and their fixed wire image.
//!
//! Every variant encodes to the same 20-byte span (4-byte tag plus a 16-byte
//! payload) so that blocks hash over a stable, gap-free layout regardless of
//! which transaction they carry.

use serde::{Deserialize, Serialize};

/// Identifier of an account in the ledger economy.
pub type AccountId = u32;

/// The mint sentinel: transfers sent from this account create new coins.
pub const MINT_ACCOUNT: AccountId = 0;

/// Payload width shared by all variants.
pub const PAYLOAD_LEN: usize = 16;

/// Encoded transaction length: 4-byte tag + payload.
pub const TX_ENCODED_LEN: usize = 4 + PAYLOAD_LEN;

const TAG_INVALID: u32 = u32::MAX;
const TAG_GENERATE: u32 = 0;
const TAG_TRANSFER: u32 = 1;
const TAG_RECEIPT: u32 = 2;

/// Wire encoding of a missing receipt link.
const NO_RECEIPT: u32 = u32::MAX;

/// The discriminant of a transaction as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Sentinel for failed validation; persisted only as the genesis blank.
    Invalid,
    /// A mint: coins created from the mint account, no balance check.
    Generate,
    /// A balance-checked transfer between two accounts.
    Transfer,
    /// A balance snapshot for one account.
    Receipt,
}

impl TransactionKind {
    fn tag(self) -> u32 {
        match self {
            TransactionKind::Invalid => TAG_INVALID,
            TransactionKind::Generate => TAG_GENERATE,
            TransactionKind::Transfer => TAG_TRANSFER,
            TransactionKind::Receipt => TAG_RECEIPT,
        }
    }
}

/// Whether a transfer mints new coins or moves existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferKind {
    Generate,
    Transfer,
}

/// A mint or transfer payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Generate for mints (sender == 0), Transfer otherwise.
    pub kind: TransferKind,
    /// Sending account; [`MINT_ACCOUNT`] for mints.
    pub sender: AccountId,
    /// Receiving account; never the mint sentinel.
    pub receiver: AccountId,
    /// Block index of the sender's latest receipt at authoring time.
    pub prev_receipt: Option<u32>,
    /// Amount moved.
    pub amount: u32,
}

impl Transfer {
    /// Whether this transfer mints new coins.
    pub fn is_mint(&self) -> bool {
        self.kind == TransferKind::Generate
    }
}

/// A balance snapshot payload.
///
/// Receipts for one account form a singly linked list threaded through the
/// shared chain via `prev_receipt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Account whose balance this snapshot records.
    pub account: AccountId,
    /// Block index of the account's previous receipt.
    pub prev_receipt: Option<u32>,
    /// Block index of the transfer (or paired receipt, for returns) that
    /// caused this balance change.
    pub source_block: u32,
    /// The account's balance as of this block.
    pub balance: u32,
}

/// A tagged transaction payload carried by one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transaction {
    /// Validation-failure sentinel; callers must branch on this.
    Invalid,
    /// Opaque genesis payload; shares the Invalid wire tag.
    Blank { data: [u8; PAYLOAD_LEN] },
    /// Mint or transfer.
    Transfer(Transfer),
    /// Balance snapshot.
    Receipt(Receipt),
}

impl Transaction {
    /// Create a genesis blank carrying the given payload.
    pub fn blank(data: [u8; PAYLOAD_LEN]) -> Self {
        Transaction::Blank { data }
    }

    /// The wire discriminant of this transaction.
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Invalid | Transaction::Blank { .. } => TransactionKind::Invalid,
            Transaction::Transfer(t) => match t.kind {
                TransferKind::Generate => TransactionKind::Generate,
                TransferKind::Transfer => TransactionKind::Transfer,
            },
            Transaction::Receipt(_) => TransactionKind::Receipt,
        }
    }

    /// Whether this transaction failed validation.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Transaction::Invalid)
    }

    /// Encode into the fixed 20-byte wire image.
    ///
    /// Layout: tag at [0..4], then four little-endian u32 fields (or the raw
    /// blank payload) at [4..20]; unused payload bytes are zero.
    pub fn encode_into(&self, buf: &mut [u8; TX_ENCODED_LEN]) {
        buf.fill(0);
        buf[0..4].copy_from_slice(&self.kind().tag().to_le_bytes());
        match self {
            Transaction::Invalid => {}
            Transaction::Blank { data } => {
                buf[4..20].copy_from_slice(data);
            }
            Transaction::Transfer(t) => {
                buf[4..8].copy_from_slice(&t.sender.to_le_bytes());
                buf[8..12].copy_from_slice(&t.receiver.to_le_bytes());
                buf[12..16].copy_from_slice(&encode_link(t.prev_receipt).to_le_bytes());
                buf[16..20].copy_from_slice(&t.amount.to_le_bytes());
            }
            Transaction::Receipt(r) => {
                buf[4..8].copy_from_slice(&r.account.to_le_bytes());
                buf[8..12].copy_from_slice(&encode_link(r.prev_receipt).to_le_bytes());
                buf[12..16].copy_from_slice(&r.source_block.to_le_bytes());
                buf[16..20].copy_from_slice(&r.balance.to_le_bytes());
            }
        }
    }
}

fn encode_link(link: Option<u32>) -> u32 {
    link.unwrap_or(NO_RECEIPT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(tx: &Transaction) -> [u8; TX_ENCODED_LEN] {
        let mut buf = [0u8; TX_ENCODED_LEN];
        tx.encode_into(&mut buf);
        buf
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(Transaction::Invalid.kind(), TransactionKind::Invalid);
        assert_eq!(
            Transaction::blank([0u8; PAYLOAD_LEN]).kind(),
            TransactionKind::Invalid
        );

        let mint = Transaction::Transfer(Transfer {
            kind: TransferKind::Generate,
            sender: MINT_ACCOUNT,
            receiver: 1,
            prev_receipt: None,
            amount: 50,
        });
        assert_eq!(mint.kind(), TransactionKind::Generate);

        let receipt = Transaction::Receipt(Receipt {
            account: 1,
            prev_receipt: None,
            source_block: 1,
            balance: 50,
        });
        assert_eq!(receipt.kind(), TransactionKind::Receipt);
    }

    #[test]
    fn test_invalid_encodes_all_ones_tag() {
        let buf = encode(&Transaction::Invalid);
        assert_eq!(&buf[0..4], &[0xff, 0xff, 0xff, 0xff]);
        assert!(buf[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_blank_carries_payload() {
        let data = *b"0123456789abcdef";
        let buf = encode(&Transaction::blank(data));
        assert_eq!(&buf[0..4], &[0xff, 0xff, 0xff, 0xff]);
        assert_eq!(&buf[4..20], &data);
    }

    #[test]
    fn test_transfer_layout() {
        let tx = Transaction::Transfer(Transfer {
            kind: TransferKind::Transfer,
            sender: 1,
            receiver: 2,
            prev_receipt: Some(7),
            amount: 75,
        });
        let buf = encode(&tx);
        assert_eq!(u32::from_le_bytes(buf[0..4].try_into().unwrap()), 1);
        assert_eq!(u32::from_le_bytes(buf[4..8].try_into().unwrap()), 1);
        assert_eq!(u32::from_le_bytes(buf[8..12].try_into().unwrap()), 2);
        assert_eq!(u32::from_le_bytes(buf[12..16].try_into().unwrap()), 7);
        assert_eq!(u32::from_le_bytes(buf[16..20].try_into().unwrap()), 75);
    }

    #[test]
    fn test_missing_link_encodes_as_sentinel() {
        let tx = Transaction::Transfer(Transfer {
            kind: TransferKind::Generate,
            sender: MINT_ACCOUNT,
            receiver: 1,
            prev_receipt: None,
            amount: 50,
        });
        let buf = encode(&tx);
        assert_eq!(&buf[12..16], &[0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn test_receipt_layout() {
        let tx = Transaction::Receipt(Receipt {
            account: 2,
            prev_receipt: Some(3),
            source_block: 5,
            balance: 125,
        });
        let buf = encode(&tx);
        assert_eq!(u32::from_le_bytes(buf[0..4].try_into().unwrap()), 2);
        assert_eq!(u32::from_le_bytes(buf[4..8].try_into().unwrap()), 2);
        assert_eq!(u32::from_le_bytes(buf[8..12].try_into().unwrap()), 3);
        assert_eq!(u32::from_le_bytes(buf[12..16].try_into().unwrap()), 5);
        assert_eq!(u32::from_le_bytes(buf[16..20].try_into().unwrap()), 125);
    }
}
