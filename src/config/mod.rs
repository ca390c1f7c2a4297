//! Configuration management
//!
//! Process-level settings for the demo binary, read from environment
//! variables. The core engine never reads global state.

pub mod settings;

pub use settings::{Config, GLOBAL_CONFIG};
