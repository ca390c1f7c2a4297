//! # Ledger Chain - a single-writer append-only ledger core
//!
//! An in-memory chain of blocks, each bound to its predecessor by a hash
//! reference, carrying a batch of pooled transactions and sealed by a
//! proof-of-work nonce search. This crate is the reusable core a networked or
//! persisted system would wrap; it deliberately has no peer-to-peer layer, no
//! consensus, no signature verification, and no storage.
//!
//! ## How the pieces fit together
//! - `core/`: the chain engine (blocks, transactions, pool, mining)
//! - `config/`: environment-variable settings for the demo binary
//! - `utils/`: SHA-256 digest and timestamp helpers
//! - `cli/`: the demo command-line surface
//!
//! ## The contract in one paragraph
//! Callers submit transactions into the pool, seal the pool into a new block
//! with [`Blockchain::create_block`], and then mine it. A block's hash is only
//! meaningful while it is [`SealState::Sealed`]; mutating the nonce unseals
//! it. The engine trusts the caller-supplied previous-block hash and offers
//! [`Blockchain::verify_chain_integrity`] as an explicit, read-only check
//! instead of silently enforcing linkage.
//!
//! All access is single-threaded by design: every mutating operation takes
//! `&mut self`, and an embedding system must serialize access to a given
//! [`Blockchain`]. The one concession to concurrency is [`CancelToken`],
//! which lets another thread bound the otherwise unbounded mining search.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use cli::{Command, Opt};
pub use config::{Config, GLOBAL_CONFIG};
pub use core::{
    Block, Blockchain, CancelToken, ProofOfWork, SealState, Transaction, TransactionPool,
    DEFAULT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY,
};
pub use error::{LedgerError, Result};
