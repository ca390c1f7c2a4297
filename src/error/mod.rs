//! Error handling for the ledger engine
//!
//! This module provides the error types for all ledger operations.

use std::fmt;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Error types for ledger operations
#[derive(Debug, Clone)]
pub enum LedgerError {
    /// A block index outside the current chain bounds was referenced
    IndexOutOfRange { index: u64, chain_len: u64 },
    /// A transaction could not be encoded into its canonical form
    Serialization(String),
    /// Mining was interrupted before a qualifying nonce was found
    Mining(String),
    /// Configuration errors
    Config(String),
    /// Clock / I/O errors
    Io(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::IndexOutOfRange { index, chain_len } => {
                write!(
                    f,
                    "Block index out of range: index {index}, chain length {chain_len}"
                )
            }
            LedgerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            LedgerError::Mining(msg) => write!(f, "Mining error: {msg}"),
            LedgerError::Config(msg) => write!(f, "Configuration error: {msg}"),
            LedgerError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}
