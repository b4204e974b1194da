//! erstats library root.
//!
//! Re-exports the CLI modules so integration tests can exercise the config
//! layer directly without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
