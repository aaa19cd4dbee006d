//! Configuration constants.
//!
//! Defaults used by `Config::default()` and the CLI.

use std::time::Duration;

/// Reputation lookup endpoint (AbuseIPDB v2 `check`).
pub const DEFAULT_API_URL: &str = "https://api.abuseipdb.com/api/v2/check";

/// Local cache file, overwritten at the end of every run.
pub const DEFAULT_CACHE_PATH: &str = "checked_ips.json";

/// Lookback window in days the service considers when computing the score.
pub const DEFAULT_MAX_AGE_DAYS: u32 = 90;

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Pause after each live lookup. Zero disables pacing.
pub const DEFAULT_SLEEP: Duration = Duration::from_secs(0);

/// Log progress every N processed IPs
pub const LOGGING_INTERVAL: usize = 50;

/// Environment variable holding the API key (also read from `.env`).
pub const API_KEY_ENV: &str = "ABUSEIPDB_API_KEY";

// Response fields
/// Value substituted for any field the service omits.
pub const MISSING_FIELD: &str = "N/A";
/// Value recorded for every field of a failed lookup.
pub const FAILURE_FIELD: &str = "Error";
