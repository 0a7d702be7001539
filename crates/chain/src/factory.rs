//! Transaction construction and validation.
//!
//! Each constructor is a total function over a read-only snapshot of the
//! chain: it never appends and never fails with an error. Rejected candidates
//! come back as [`Transaction::Invalid`], which the caller must branch on.

use microledger_core::{
    AccountId, Block, Receipt, Transaction, Transfer, TransferKind, MINT_ACCOUNT,
};

/// Find the newest receipt belonging to `account`, scanning backward from the
/// chain tip. Returns the receipt's block index and recorded balance.
pub(crate) fn find_latest_receipt(blocks: &[Block], account: AccountId) -> Option<(u32, u32)> {
    blocks.iter().rev().find_map(|block| match &block.transaction {
        Transaction::Receipt(r) if r.account == account => Some((block.index, r.balance)),
        _ => None,
    })
}

/// Build a mint or transfer of `amount` from `sender` to `receiver`.
///
/// Invalid when the transfer is a self-send or addresses the mint sentinel,
/// or when a non-mint sender's latest receipt cannot cover the amount.
pub fn make_transfer(
    blocks: &[Block],
    sender: AccountId,
    receiver: AccountId,
    amount: u32,
) -> Transaction {
    if sender == receiver || receiver == MINT_ACCOUNT {
        return Transaction::Invalid;
    }

    // Mints skip the balance check entirely.
    let (balance, prev_receipt) = if sender == MINT_ACCOUNT {
        (0, None)
    } else {
        match find_latest_receipt(blocks, sender) {
            Some((index, balance)) => (balance, Some(index)),
            None => (0, None),
        }
    };

    if sender != MINT_ACCOUNT && balance < amount {
        return Transaction::Invalid;
    }

    Transaction::Transfer(Transfer {
        kind: if sender == MINT_ACCOUNT {
            TransferKind::Generate
        } else {
            TransferKind::Transfer
        },
        sender,
        receiver,
        prev_receipt,
        amount,
    })
}

/// Build the receiver-side receipt for a mined transfer block.
///
/// Invalid unless the block carries a mint or transfer. The new balance is
/// the receiver's latest recorded balance (0 if none) plus the amount.
pub fn make_receipt(blocks: &[Block], transfer_block: &Block) -> Transaction {
    let Transaction::Transfer(transfer) = &transfer_block.transaction else {
        return Transaction::Invalid;
    };

    let (balance, prev_receipt) = match find_latest_receipt(blocks, transfer.receiver) {
        Some((index, balance)) => (balance, Some(index)),
        None => (0, None),
    };

    Transaction::Receipt(Receipt {
        account: transfer.receiver,
        prev_receipt,
        source_block: transfer_block.index,
        balance: balance.saturating_add(transfer.amount),
    })
}

/// Build the change-return receipt closing out the sender's prior balance.
///
/// Invalid unless the pair is a mint/transfer plus a receipt, or when the
/// transfer records no prior sender receipt (a pure mint has no balance to
/// return change from). The prior balance is read from the block at the
/// transfer's *recorded* receipt index, never by re-scanning.
pub fn make_return(blocks: &[Block], transfer_block: &Block, receipt_block: &Block) -> Transaction {
    let Transaction::Transfer(transfer) = &transfer_block.transaction else {
        return Transaction::Invalid;
    };
    if !matches!(receipt_block.transaction, Transaction::Receipt(_)) {
        return Transaction::Invalid;
    }
    let Some(prev_index) = transfer.prev_receipt else {
        return Transaction::Invalid;
    };

    // Indices are contiguous, so the recorded index is a direct lookup.
    let prior_balance = match blocks
        .get(prev_index as usize)
        .map(|block| &block.transaction)
    {
        Some(Transaction::Receipt(prior)) => prior.balance,
        _ => return Transaction::Invalid,
    };

    Transaction::Receipt(Receipt {
        account: transfer.sender,
        prev_receipt: Some(prev_index),
        source_block: receipt_block.index,
        balance: prior_balance.saturating_sub(transfer.amount),
    })
}
