use microledger_chain::{Ledger, SendError};
use microledger_core::{fnv1a, Transaction, MINT_ACCOUNT};

/// Every non-genesis block must reference the hash of its predecessor as of
/// that hash's last computation. The nonce search is deterministic and the
/// recomputed hash is persisted, so hashing the stored predecessor image
/// reproduces exactly the referenced value.
fn assert_chain_integrity(ledger: &Ledger) {
    let blocks = ledger.blocks();
    for pair in blocks.windows(2) {
        let hash = fnv1a(&pair[0].to_bytes());
        assert_eq!(hash, pair[1].prev_hash, "broken link after block {}", pair[0].index);
        assert!(hash.meets(pair[0].threshold));
    }
}

#[test]
fn test_mint_always_succeeds_without_return() {
    let mut ledger = Ledger::new();

    // No balance anywhere, arbitrary amounts: mints never fail.
    ledger.send_amount(MINT_ACCOUNT, 1, 1).unwrap();
    ledger.send_amount(MINT_ACCOUNT, 7, 4_000_000).unwrap();

    // Two blocks per mint: no change-return is produced.
    assert_eq!(ledger.len(), 5);
    assert_chain_integrity(&ledger);
}

#[test]
fn test_insufficient_funds_rejected() {
    let mut ledger = Ledger::new();
    ledger.send_amount(MINT_ACCOUNT, 1, 50).unwrap();
    let len_before = ledger.len();

    assert_eq!(ledger.send_amount(1, 2, 51), Err(SendError::InvalidTransfer));
    assert_eq!(ledger.len(), len_before);
    assert_eq!(ledger.balance_of(1), 50);
}

#[test]
fn test_self_and_zero_receiver_rejected() {
    let mut ledger = Ledger::new();
    ledger.send_amount(MINT_ACCOUNT, 1, 100).unwrap();

    assert_eq!(ledger.send_amount(1, 1, 10), Err(SendError::InvalidTransfer));
    assert_eq!(
        ledger.send_amount(1, MINT_ACCOUNT, 10),
        Err(SendError::InvalidTransfer)
    );
    assert_eq!(ledger.len(), 3);
}

#[test]
fn test_balance_conservation() {
    let mut ledger = Ledger::new();
    ledger.send_amount(MINT_ACCOUNT, 1, 60).unwrap();
    ledger.send_amount(MINT_ACCOUNT, 2, 40).unwrap();

    let before_1 = ledger.balance_of(1);
    let before_2 = ledger.balance_of(2);

    ledger.send_amount(1, 2, 35).unwrap();

    assert_eq!(ledger.balance_of(1), before_1 - 35);
    assert_eq!(ledger.balance_of(2), before_2 + 35);
    assert_chain_integrity(&ledger);
}

#[test]
fn test_end_to_end_scenario() {
    let mut ledger = Ledger::new();

    // Two mints of 50 to account 1.
    ledger.send_amount(MINT_ACCOUNT, 1, 50).unwrap();
    ledger.send_amount(MINT_ACCOUNT, 1, 50).unwrap();
    assert_eq!(ledger.balance_of(1), 100);

    // Account 1 sending to itself is a self-transfer, rejected regardless of
    // its balance.
    assert_eq!(ledger.send_amount(1, 1, 50), Err(SendError::InvalidTransfer));

    // 100 >= 75, so this transfer clears.
    ledger.send_amount(1, 2, 75).unwrap();

    assert_eq!(ledger.balance_of(1), 25);
    assert_eq!(ledger.balance_of(2), 75);

    // Chain shape: genesis + 2 mints (2 blocks each) + 1 transfer (3 blocks).
    assert_eq!(ledger.len(), 8);
    assert_chain_integrity(&ledger);
}

#[test]
fn test_receipt_chain_threads_through_blocks() {
    let mut ledger = Ledger::new();
    ledger.send_amount(MINT_ACCOUNT, 1, 50).unwrap();
    ledger.send_amount(MINT_ACCOUNT, 1, 50).unwrap();

    // Account 1's snapshots: block 2 (balance 50) then block 4 (balance 100),
    // with block 4 linking back to block 2.
    let Transaction::Receipt(first) = &ledger.get(2).unwrap().transaction else {
        panic!("expected a receipt at block 2");
    };
    let Transaction::Receipt(second) = &ledger.get(4).unwrap().transaction else {
        panic!("expected a receipt at block 4");
    };

    assert_eq!(first.balance, 50);
    assert_eq!(first.prev_receipt, None);
    assert_eq!(second.balance, 100);
    assert_eq!(second.prev_receipt, Some(2));
    assert_eq!(second.source_block, 3);
}

#[test]
fn test_drain_to_zero_then_reject() {
    let mut ledger = Ledger::new();
    ledger.send_amount(MINT_ACCOUNT, 1, 75).unwrap();

    // Spend the whole balance; the return snapshot records zero.
    ledger.send_amount(1, 2, 75).unwrap();
    assert_eq!(ledger.balance_of(1), 0);

    assert_eq!(ledger.send_amount(1, 2, 1), Err(SendError::InvalidTransfer));
    assert_chain_integrity(&ledger);
}
