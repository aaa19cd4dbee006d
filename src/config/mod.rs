//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, timeouts, placeholder values)
//! - The library `Config` struct and the CLI options that build it

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{parse_sleep_seconds, Config, LogFormat, LogLevel, Opt};
