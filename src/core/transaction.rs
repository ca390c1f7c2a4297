// A transaction is the unit of value transfer recorded by the ledger.
// Transactions carry no identity beyond their fields and are never mutated
// once created: they sit in the pool until a block creation moves them, by
// value, into exactly one block.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A transfer of `amount` from `sender` to `recipient`.
///
/// The serde field names are PascalCase on purpose: the canonical JSON form
/// (`{"Amount":…,"Sender":"…","Recipient":"…"}`) feeds the block hash, and any
/// persistence or wire layer built on top must reuse this exact encoding to
/// keep hashes reproducible across implementations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    amount: u64,
    sender: String,
    recipient: String,
}

impl Transaction {
    /// Any values are accepted, including a zero amount or empty identifiers.
    /// Validation is the concern of whatever system wraps this ledger.
    pub fn new(amount: u64, sender: &str, recipient: &str) -> Transaction {
        Transaction {
            amount,
            sender: sender.to_string(),
            recipient: recipient.to_string(),
        }
    }

    pub fn get_amount(&self) -> u64 {
        self.amount
    }

    pub fn get_sender(&self) -> &str {
        self.sender.as_str()
    }

    pub fn get_recipient(&self) -> &str {
        self.recipient.as_str()
    }

    /// Canonical encoding contributing to a block's hash: a JSON object with
    /// the fields in declaration order (Amount, Sender, Recipient).
    pub fn canonical_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
