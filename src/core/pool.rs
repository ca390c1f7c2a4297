use crate::core::Transaction;

/// Staging area for transactions not yet committed to a block.
///
/// Insertion order is preserved; block creation drains the whole pool in that
/// order. The pool is owned exclusively by the [`Blockchain`](crate::core::Blockchain),
/// which is single-threaded by contract, so no internal locking is needed.
#[derive(Debug, Default)]
pub struct TransactionPool {
    inner: Vec<Transaction>,
}

impl TransactionPool {
    pub fn new() -> TransactionPool {
        TransactionPool { inner: Vec::new() }
    }

    pub fn push(&mut self, tx: Transaction) {
        self.inner.push(tx);
    }

    /// Moves every pooled transaction out, leaving the pool empty.
    /// This is the only operation that removes transactions.
    pub fn drain(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.inner)
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.inner.as_slice()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
