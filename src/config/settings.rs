use crate::core::{DEFAULT_DIFFICULTY, MAX_DIFFICULTY, MIN_DIFFICULTY};
use crate::error::{LedgerError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

const MINING_DIFFICULTY_KEY: &str = "MINING_DIFFICULTY";

/// Process-level settings, seeded from environment variables. Consumed by the
/// demo binary; the core engine takes difficulty explicitly per call.
pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut map = HashMap::new();
        if let Ok(difficulty) = env::var(MINING_DIFFICULTY_KEY) {
            map.insert(String::from(MINING_DIFFICULTY_KEY), difficulty);
        }

        Config {
            inner: RwLock::new(map),
        }
    }

    /// The configured mining difficulty, falling back to
    /// [`DEFAULT_DIFFICULTY`] when unset. Fails on unparsable or out-of-range
    /// values rather than silently mining at the wrong cost.
    pub fn get_mining_difficulty(&self) -> Result<u32> {
        let inner = self
            .inner
            .read()
            .expect("Failed to acquire read lock on config - this should never happen");

        match inner.get(MINING_DIFFICULTY_KEY) {
            None => Ok(DEFAULT_DIFFICULTY),
            Some(raw) => {
                let difficulty: u32 = raw.parse().map_err(|_| {
                    LedgerError::Config(format!("Invalid {MINING_DIFFICULTY_KEY} value: {raw}"))
                })?;
                if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
                    return Err(LedgerError::Config(format!(
                        "{MINING_DIFFICULTY_KEY} {difficulty} is outside valid range [{MIN_DIFFICULTY}, {MAX_DIFFICULTY}]"
                    )));
                }
                Ok(difficulty)
            }
        }
    }

    pub fn set_mining_difficulty(&self, difficulty: u32) {
        let mut inner = self
            .inner
            .write()
            .expect("Failed to acquire write lock on config - this should never happen");
        inner.insert(String::from(MINING_DIFFICULTY_KEY), difficulty.to_string());
    }
}
