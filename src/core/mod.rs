//! Core ledger functionality
//!
//! This module contains the fundamental ledger components: blocks, the
//! transaction pool, the chain engine, and the proof-of-work nonce search.

pub mod block;
pub mod blockchain;
pub mod pool;
pub mod proof_of_work;
pub mod transaction;

pub use block::{Block, SealState};
pub use blockchain::Blockchain;
pub use pool::TransactionPool;
pub use proof_of_work::{
    CancelToken, ProofOfWork, DEFAULT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY,
};
pub use transaction::Transaction;
