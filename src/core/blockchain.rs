// This is the core ledger engine: an in-memory, single-writer chain of blocks
// plus the pool of transactions waiting for the next block. All mutation goes
// through &mut self, so exclusive access is enforced by the borrow checker
// rather than by locks.

use crate::core::{
    Block, CancelToken, ProofOfWork, Transaction, TransactionPool, DEFAULT_DIFFICULTY,
};
use crate::error::{LedgerError, Result};
use log::{info, warn};

/// Append-only chain of blocks and its transaction pool.
///
/// Block indices are 1-based chain positions (stored on the block); the
/// `index` arguments of [`hash_block`](Blockchain::hash_block) and the mining
/// operations are 0-based offsets into the chain, rejected with
/// [`LedgerError::IndexOutOfRange`] when `index >= len`.
#[derive(Debug, Default)]
pub struct Blockchain {
    chain: Vec<Block>,
    pending: TransactionPool,
}

impl Blockchain {
    pub fn new() -> Blockchain {
        Blockchain {
            chain: Vec::new(),
            pending: TransactionPool::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        self.chain.as_slice()
    }

    pub fn pending_transactions(&self) -> &[Transaction] {
        self.pending.transactions()
    }

    /// Stages a transaction for the next block. Returns the 1-based index that
    /// block would get if created right now - a hint, not a guarantee, since
    /// more transactions may arrive before the block is sealed. Values are not
    /// validated; zero amounts and empty identifiers are accepted.
    pub fn submit_transaction(&mut self, amount: u64, sender: &str, recipient: &str) -> u64 {
        self.pending.push(Transaction::new(amount, sender, recipient));
        self.chain.len() as u64 + 1
    }

    /// Appends a new block holding the entire pool (drained, in submission
    /// order). `pre_block_hash` is trusted as supplied - callers maintaining a
    /// real chain must pass the previous block's stored hash. The supplied
    /// `hash` is a placeholder: the block starts unsealed and only a later
    /// [`hash_block`](Blockchain::hash_block) or mine makes its hash
    /// meaningful.
    pub fn create_block(
        &mut self,
        nonce: u64,
        pre_block_hash: &str,
        hash: &str,
    ) -> Result<&Block> {
        let index = self.chain.len() as u64 + 1;
        let transactions = self.pending.drain();
        let block = Block::new_block(index, transactions, nonce, pre_block_hash, hash)?;
        info!(
            "Created block {} with {} transactions",
            index,
            block.get_transactions().len()
        );
        self.chain.push(block);
        Ok(self
            .chain
            .last()
            .expect("Chain cannot be empty right after a push"))
    }

    /// The most recently appended block, or `None` on a fresh chain.
    pub fn last_block(&self) -> Option<&Block> {
        self.chain.last()
    }

    /// Bounds-checked read access to a block by 0-based chain offset.
    pub fn block(&self, index: u64) -> Result<&Block> {
        let chain_len = self.chain.len() as u64;
        if index >= chain_len {
            return Err(LedgerError::IndexOutOfRange { index, chain_len });
        }
        Ok(&self.chain[index as usize])
    }

    fn block_mut(&mut self, index: u64) -> Result<&mut Block> {
        let chain_len = self.chain.len() as u64;
        if index >= chain_len {
            return Err(LedgerError::IndexOutOfRange { index, chain_len });
        }
        Ok(&mut self.chain[index as usize])
    }

    /// Recomputes the block's content hash, stores it on the block (sealing
    /// it), and returns it. Deterministic: identical pre_block_hash, nonce,
    /// and transaction sequence always produce the same 64-char lowercase hex
    /// string.
    pub fn hash_block(&mut self, index: u64) -> Result<String> {
        self.block_mut(index)?.compute_hash()
    }

    /// Mines at [`DEFAULT_DIFFICULTY`].
    pub fn mine_block(&mut self, index: u64) -> Result<u64> {
        self.mine(index, DEFAULT_DIFFICULTY, None)
    }

    /// Mines at an explicit difficulty (leading zero hex characters required).
    pub fn mine_block_with_difficulty(&mut self, index: u64, difficulty: u32) -> Result<u64> {
        self.mine(index, difficulty, None)
    }

    /// Mines with a cancellation token checked once per nonce attempt. On
    /// cancellation the search stops with [`LedgerError::Mining`]; the block
    /// keeps the last attempted nonce and its (sealed) hash for that nonce.
    pub fn mine_block_with_cancel(
        &mut self,
        index: u64,
        difficulty: u32,
        cancel: &CancelToken,
    ) -> Result<u64> {
        self.mine(index, difficulty, Some(cancel))
    }

    // Brute-force sequential search from nonce 0. Every attempt overwrites the
    // block's nonce and stored hash, so on success the block holds the winning
    // nonce and its qualifying digest. The found nonce is the smallest one
    // satisfying the target.
    fn mine(&mut self, index: u64, difficulty: u32, cancel: Option<&CancelToken>) -> Result<u64> {
        let pow = ProofOfWork::new(difficulty)?;
        let chain_len = self.chain.len() as u64;
        if index >= chain_len {
            return Err(LedgerError::IndexOutOfRange { index, chain_len });
        }

        let block = &mut self.chain[index as usize];
        info!(
            "Mining block {} at difficulty {} with {} transactions",
            block.get_index(),
            difficulty,
            block.get_transactions().len()
        );

        let mut nonce: u64 = 0;
        loop {
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    warn!(
                        "Mining of block {} cancelled at nonce {}",
                        block.get_index(),
                        nonce
                    );
                    return Err(LedgerError::Mining(format!(
                        "Mining of block {} cancelled at nonce {nonce}",
                        block.get_index()
                    )));
                }
            }

            block.set_nonce(nonce);
            let digest = block.content_digest()?;
            let hash = block.store_digest(&digest);
            if pow.meets_target(&digest) {
                info!(
                    "Mined block {}: nonce {}, hash {}",
                    block.get_index(),
                    nonce,
                    hash
                );
                return Ok(nonce);
            }
            nonce += 1;
        }
    }

    /// Read-only integrity scan: every non-genesis block must reference its
    /// predecessor's stored hash, and every sealed block's stored hash must
    /// match a fresh recomputation of its content. The genesis block's
    /// `pre_block_hash` is caller-supplied and has nothing to be checked
    /// against, so it is skipped.
    pub fn verify_chain_integrity(&self) -> Result<bool> {
        for pair in self.chain.windows(2) {
            let (prev, cur) = (&pair[0], &pair[1]);
            if cur.get_pre_block_hash() != prev.get_hash() {
                warn!(
                    "Broken link: block {} does not reference the hash of block {}",
                    cur.get_index(),
                    prev.get_index()
                );
                return Ok(false);
            }
        }

        for block in &self.chain {
            if block.is_sealed() && block.content_hash_hex()? != block.get_hash() {
                warn!(
                    "Stale hash: sealed block {} does not match its content",
                    block.get_index()
                );
                return Ok(false);
            }
        }

        Ok(true)
    }
}
