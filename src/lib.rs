//! ip_reputation library: cached batch lookups against AbuseIPDB
//!
//! Reads IP addresses from a CSV file, answers each from a local JSON cache
//! when possible and from the AbuseIPDB `check` endpoint otherwise, and
//! prints the addresses with a nonzero abuse confidence score that are not
//! excluded by ISP/domain keywords.
//!
//! # Example
//!
//! ```no_run
//! use ip_reputation::{run_check, Config};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input: std::path::PathBuf::from("ips.csv"),
//!     api_key: std::env::var("ABUSEIPDB_API_KEY")?,
//!     exclude: vec!["example".to_string()],
//!     ..Default::default()
//! };
//!
//! let report = run_check(config).await?;
//! println!("{} of {} IPs answered from cache", report.skipped_cached, report.total);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Lookups run one at a time; the
//! runtime only drives the HTTP client and the pacing sleep.

mod app;
pub mod cache;
pub mod config;
mod error_handling;
pub mod filter;
pub mod initialization;
pub mod input;
pub mod lookup;
mod models;
mod run;

// Re-export public API
pub use cache::{CacheEntry, ReputationCache};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FailureKind, FailureStats, InitializationError, RunError};
pub use filter::ExclusionFilter;
pub use lookup::{LookupClient, LookupOutcome};
pub use models::LookupResult;
pub use run::{run_check, run_check_with_output, FlaggedIp, RunReport};
