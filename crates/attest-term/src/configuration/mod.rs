//! Configuration management for the console.
//!
//! Defaults, an optional `config.toml`, and command-line flags merge into a
//! single process-wide store, with later sources winning.

mod config;

pub use config::*;
