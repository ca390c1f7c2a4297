use crate::core::Block;
use crate::error::{LedgerError, Result};
use num_bigint::{BigInt, Sign};
use std::ops::ShlAssign;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Difficulty used when the caller does not supply one, expressed as the
/// required count of leading `'0'` hex characters in a block hash.
pub const DEFAULT_DIFFICULTY: u32 = 4;
pub const MIN_DIFFICULTY: u32 = 1;
pub const MAX_DIFFICULTY: u32 = 16;

/// Difficulty target for the nonce search.
///
/// A digest has `difficulty` leading zero hex characters exactly when, read as
/// a big-endian integer, it is below `2^(256 - 4 * difficulty)`; the miner
/// compares against that target instead of rendering hex per attempt.
pub struct ProofOfWork {
    target: BigInt,
    difficulty: u32,
}

impl ProofOfWork {
    pub fn new(difficulty: u32) -> Result<ProofOfWork> {
        Self::validate_difficulty(difficulty)?;
        let mut target = BigInt::from(1);
        target.shl_assign((256 - 4 * difficulty) as usize);
        Ok(ProofOfWork { target, difficulty })
    }

    pub fn get_difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn meets_target(&self, digest: &[u8]) -> bool {
        let digest_int = BigInt::from_bytes_be(Sign::Plus, digest);
        digest_int < self.target
    }

    /// Checks a block's current content against the target without mutating it.
    pub fn is_satisfied_by(&self, block: &Block) -> Result<bool> {
        Ok(self.meets_target(&block.content_digest()?))
    }

    pub fn validate_difficulty(difficulty: u32) -> Result<()> {
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(LedgerError::Config(format!(
                "Difficulty {difficulty} is outside valid range [{MIN_DIFFICULTY}, {MAX_DIFFICULTY}]"
            )));
        }
        Ok(())
    }
}

/// Cooperative cancellation signal for the mining loop.
///
/// Clone the token, hand one copy to the miner's owner, and call `cancel` from
/// any thread to make an in-flight [`Blockchain::mine_block_with_cancel`](crate::core::Blockchain::mine_block_with_cancel)
/// return early.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken {
            inner: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}
