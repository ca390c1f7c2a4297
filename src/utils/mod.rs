//! Utility functions
//!
//! Cryptographic digest and timestamp helpers used throughout the ledger.

pub mod crypto;

pub use crypto::{current_timestamp, sha256_digest};
