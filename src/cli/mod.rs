//! Command-line interface for the demo binary

pub mod commands;

pub use commands::{Command, Opt};
