use crate::core::Transaction;
use crate::error::Result;
use crate::utils::{current_timestamp, sha256_digest};
use data_encoding::HEXLOWER;
use serde::{Deserialize, Serialize};

/// Whether a block's stored hash is known to match its current content.
///
/// A block starts `Unsealed`, and any nonce mutation drops it back to
/// `Unsealed`; computing the hash (directly or through mining) moves it to
/// `Sealed`. This makes hash staleness inspectable instead of implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SealState {
    Unsealed,
    Sealed,
}

/// One record in the append-only chain.
///
/// `index` is the block's 1-based chain position, fixed at creation.
/// `pre_block_hash` is caller-supplied and never verified by the engine; a
/// higher layer (or [`Blockchain::verify_chain_integrity`](crate::core::Blockchain::verify_chain_integrity))
/// is responsible for linkage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    index: u64,
    timestamp: i64,
    transactions: Vec<Transaction>,
    nonce: u64,
    hash: String,
    pre_block_hash: String,
    seal: SealState,
}

impl Block {
    pub(crate) fn new_block(
        index: u64,
        transactions: Vec<Transaction>,
        nonce: u64,
        pre_block_hash: &str,
        hash: &str,
    ) -> Result<Block> {
        Ok(Block {
            index,
            timestamp: current_timestamp()?,
            transactions,
            nonce,
            hash: hash.to_string(),
            pre_block_hash: pre_block_hash.to_string(),
            seal: SealState::Unsealed,
        })
    }

    pub fn get_index(&self) -> u64 {
        self.index
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn get_nonce(&self) -> u64 {
        self.nonce
    }

    /// The stored hash. Only meaningful when `seal_state()` is `Sealed`;
    /// right after creation this is whatever placeholder the caller supplied.
    pub fn get_hash(&self) -> &str {
        self.hash.as_str()
    }

    pub fn get_pre_block_hash(&self) -> &str {
        self.pre_block_hash.as_str()
    }

    pub fn seal_state(&self) -> SealState {
        self.seal
    }

    pub fn is_sealed(&self) -> bool {
        self.seal == SealState::Sealed
    }

    pub(crate) fn set_nonce(&mut self, nonce: u64) {
        self.nonce = nonce;
        self.seal = SealState::Unsealed;
    }

    /// The byte string the block hash is computed over:
    /// `pre_block_hash` ++ decimal nonce ++ the canonical JSON of each
    /// transaction in order, with no separators anywhere.
    pub fn hash_payload(&self) -> Result<Vec<u8>> {
        let mut content = self.pre_block_hash.clone();
        content.push_str(&self.nonce.to_string());
        for tx in &self.transactions {
            content.push_str(&tx.canonical_json()?);
        }
        Ok(content.into_bytes())
    }

    /// SHA-256 over the hash payload. Pure: does not touch the stored hash.
    pub fn content_digest(&self) -> Result<Vec<u8>> {
        Ok(sha256_digest(&self.hash_payload()?))
    }

    /// Lowercase-hex form of [`content_digest`](Block::content_digest),
    /// again without mutating the block.
    pub fn content_hash_hex(&self) -> Result<String> {
        Ok(HEXLOWER.encode(&self.content_digest()?))
    }

    /// Overwrites the stored hash with the given digest and seals the block.
    pub(crate) fn store_digest(&mut self, digest: &[u8]) -> String {
        self.hash = HEXLOWER.encode(digest);
        self.seal = SealState::Sealed;
        self.hash.clone()
    }

    /// Recomputes the content digest, stores it, and seals the block.
    pub(crate) fn compute_hash(&mut self) -> Result<String> {
        let digest = self.content_digest()?;
        Ok(self.store_digest(&digest))
    }
}
