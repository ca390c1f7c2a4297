//! Ledger integration tests
//!
//! Exercises the chain engine through its public API: pooling, block creation,
//! deterministic hashing, mining, cancellation, and integrity scanning.

use ledger_chain::{Blockchain, CancelToken, LedgerError, ProofOfWork, SealState, Transaction};
use std::thread;
use std::time::Duration;

#[test]
fn test_fresh_chain_starts_empty() {
    let chain = Blockchain::new();
    assert_eq!(chain.len(), 0);
    assert!(chain.pending_transactions().is_empty());
    assert!(chain.last_block().is_none());
}

#[test]
fn test_create_block_on_empty_chain() {
    let mut chain = Blockchain::new();
    let block = chain
        .create_block(2389, "OIUOEREDHKHKD", "78s97d4x6dsf")
        .unwrap();

    assert_eq!(block.get_index(), 1);
    assert_eq!(block.get_nonce(), 2389);
    assert_eq!(block.get_pre_block_hash(), "OIUOEREDHKHKD");
    assert_eq!(block.get_hash(), "78s97d4x6dsf");
    assert_eq!(block.seal_state(), SealState::Unsealed);
    assert!(block.get_transactions().is_empty());
    assert_eq!(chain.len(), 1);
}

#[test]
fn test_last_block_tracks_the_tip() {
    let mut chain = Blockchain::new();
    assert!(chain.last_block().is_none());

    chain.create_block(2389, "OIUOEREDHKHKD", "78s97d4x6dsf").unwrap();
    chain.create_block(2899, "UINIUN90ANSDF", "99889HBAIUSBDF").unwrap();

    let tip = chain.last_block().unwrap();
    assert_eq!(tip.get_index(), 2);
    assert_eq!(tip.get_nonce(), 2899);
    assert_eq!(tip.get_pre_block_hash(), "UINIUN90ANSDF");
    assert_eq!(tip.get_hash(), "99889HBAIUSBDF");
}

#[test]
fn test_submitted_transactions_move_into_the_next_block() {
    let mut chain = Blockchain::new();
    let hint = chain.submit_transaction(100, "ALEXHT854", "JENN5BG");
    assert_eq!(hint, 1);
    assert_eq!(chain.pending_transactions().len(), 1);
    assert_eq!(
        chain.pending_transactions()[0],
        Transaction::new(100, "ALEXHT854", "JENN5BG")
    );

    let block = chain.create_block(2389, "OIUOEREDHKHKD", "78s97d4x6dsf").unwrap();
    assert_eq!(block.get_transactions().len(), 1);
    let tx = &block.get_transactions()[0];
    assert_eq!(tx.get_amount(), 100);
    assert_eq!(tx.get_sender(), "ALEXHT854");
    assert_eq!(tx.get_recipient(), "JENN5BG");
    assert!(chain.pending_transactions().is_empty());
}

#[test]
fn test_hash_block_bounds_and_storage() {
    let mut chain = Blockchain::new();
    chain.submit_transaction(100, "ALEXHT854", "JENN5BG");
    chain.create_block(2389, "OIUOEREDHKHKD", "78s97d4x6dsf").unwrap();

    assert!(matches!(
        chain.hash_block(1),
        Err(LedgerError::IndexOutOfRange { .. })
    ));

    let hash = chain.hash_block(0).unwrap();
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    assert_eq!(chain.block(0).unwrap().get_hash(), hash);
    assert_eq!(chain.block(0).unwrap().seal_state(), SealState::Sealed);
}

#[test]
fn test_hashing_is_deterministic_across_identically_built_chains() {
    let build = || {
        let mut chain = Blockchain::new();
        chain.submit_transaction(100, "ALEXHT854", "JENN5BG");
        chain.submit_transaction(7, "JENN5BG", "ALEXHT854");
        chain.create_block(2389, "OIUOEREDHKHKD", "78s97d4x6dsf").unwrap();
        chain
    };

    let mut a = build();
    let mut b = build();
    // Timestamps differ between the two chains; the hash must not.
    assert_eq!(a.hash_block(0).unwrap(), b.hash_block(0).unwrap());
}

#[test]
fn test_mining_meets_the_difficulty_target() {
    let mut chain = Blockchain::new();
    chain.submit_transaction(100, "ALEXHT854", "JENN5BG");
    chain.create_block(0, "OIUOEREDHKHKD", "78s97d4x6dsf").unwrap();

    assert!(matches!(
        chain.mine_block_with_difficulty(1, 2),
        Err(LedgerError::IndexOutOfRange { .. })
    ));

    let nonce = chain.mine_block_with_difficulty(0, 2).unwrap();
    let block = chain.block(0).unwrap();
    assert_eq!(block.get_nonce(), nonce);
    assert!(block.get_hash().starts_with("00"));
    assert_eq!(block.seal_state(), SealState::Sealed);
    assert_eq!(block.content_hash_hex().unwrap(), block.get_hash());

    let pow = ProofOfWork::new(2).unwrap();
    assert_eq!(pow.get_difficulty(), 2);
    assert!(pow.is_satisfied_by(block).unwrap());
}

#[test]
fn test_mining_at_reference_difficulty() {
    let mut chain = Blockchain::new();
    chain.submit_transaction(100, "ALEXHT854", "JENN5BG");
    chain.create_block(0, "OIUOEREDHKHKD", "78s97d4x6dsf").unwrap();

    // Default difficulty is 4 leading zero hex characters.
    chain.mine_block(0).unwrap();
    assert!(chain.block(0).unwrap().get_hash().starts_with("0000"));
}

#[test]
fn test_mining_restarts_from_zero_and_finds_the_same_nonce() {
    let mut chain = Blockchain::new();
    chain.submit_transaction(33, "s", "r");
    chain.create_block(9999, "prev", "").unwrap();

    // The starting nonce supplied at creation is irrelevant: the search
    // always begins at 0, so re-mining unchanged content is reproducible and
    // the result is the smallest qualifying nonce.
    let first = chain.mine_block_with_difficulty(0, 2).unwrap();
    let second = chain.mine_block_with_difficulty(0, 2).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_stricter_difficulty_never_lowers_the_winning_nonce() {
    let build = || {
        let mut chain = Blockchain::new();
        chain.submit_transaction(1, "a", "b");
        chain.create_block(0, "prev", "").unwrap();
        chain
    };

    let easy = build().mine_block_with_difficulty(0, 1).unwrap();
    let hard = build().mine_block_with_difficulty(0, 2).unwrap();
    assert!(hard >= easy);
}

#[test]
fn test_mining_can_be_cancelled_from_another_thread() {
    let mut chain = Blockchain::new();
    chain.create_block(0, "prev", "").unwrap();

    let token = CancelToken::new();
    let remote = token.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        remote.cancel();
    });

    // At the maximum difficulty no nonce will be found in 50ms, so only the
    // token can end the search.
    let result = chain.mine_block_with_cancel(0, 16, &token);
    canceller.join().unwrap();
    assert!(matches!(result, Err(LedgerError::Mining(_))));
}

#[test]
fn test_integrity_scan_accepts_a_properly_linked_chain() {
    let mut chain = Blockchain::new();

    chain.submit_transaction(10, "a", "b");
    chain.create_block(0, "0", "").unwrap();
    chain.mine_block_with_difficulty(0, 1).unwrap();

    let tip_hash = chain.last_block().unwrap().get_hash().to_string();
    chain.submit_transaction(20, "b", "c");
    chain.create_block(0, &tip_hash, "").unwrap();
    chain.mine_block_with_difficulty(1, 1).unwrap();

    assert!(chain.verify_chain_integrity().unwrap());
}

#[test]
fn test_integrity_scan_rejects_a_broken_link() {
    let mut chain = Blockchain::new();
    chain.create_block(0, "0", "").unwrap();
    chain.mine_block_with_difficulty(0, 1).unwrap();

    chain.create_block(0, "not-the-tip-hash", "").unwrap();
    chain.mine_block_with_difficulty(1, 1).unwrap();

    assert!(!chain.verify_chain_integrity().unwrap());
}
