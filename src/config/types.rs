//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    API_KEY_ENV, DEFAULT_API_URL, DEFAULT_CACHE_PATH, DEFAULT_MAX_AGE_DAYS, DEFAULT_SLEEP,
    DEFAULT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// Everything the driver needs is passed in here; nothing is read from
/// globals once a run has started.
///
/// # Examples
///
/// ```no_run
/// use ip_reputation::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: PathBuf::from("ips.csv"),
///     api_key: "my-key".to_string(),
///     exclude: vec!["cloudflare".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file with one IP per row (first column)
    pub input: PathBuf,

    /// JSON cache file
    pub cache_path: PathBuf,

    /// AbuseIPDB API key, sent in the `Key` header
    pub api_key: String,

    /// Reputation lookup endpoint
    pub api_url: String,

    /// Lookback window in days (`maxAgeInDays`)
    pub max_age_days: u32,

    /// Pause after every live lookup
    pub sleep: Duration,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Case-insensitive keywords matched against ISP and domain; matches are not printed
    pub exclude: Vec<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("ips.csv"),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            max_age_days: DEFAULT_MAX_AGE_DAYS,
            sleep: DEFAULT_SLEEP,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            exclude: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Key from the environment or a .env file
/// ABUSEIPDB_API_KEY=... ip_reputation ips.csv
///
/// # Skip hosting providers, pause one second between live lookups
/// ip_reputation ips.csv --exclude amazon,google --sleep-seconds 1
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ip_reputation",
    about = "Checks a list of IP addresses against AbuseIPDB and prints the ones with a nonzero abuse score."
)]
pub struct Opt {
    /// CSV file with IP addresses (first column)
    #[arg(value_parser)]
    pub input: PathBuf,

    /// JSON cache of previous lookups
    #[arg(long, value_parser, default_value = DEFAULT_CACHE_PATH)]
    pub cache_path: PathBuf,

    /// AbuseIPDB API key
    #[arg(long, env = API_KEY_ENV, default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Reputation lookup endpoint
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: url::Url,

    /// Lookback window in days
    #[arg(long, default_value_t = DEFAULT_MAX_AGE_DAYS)]
    pub max_age_days: u32,

    /// Seconds to sleep after each live lookup (fractions allowed)
    #[arg(long = "sleep-seconds", default_value = "0", value_parser = parse_sleep_seconds)]
    pub sleep: Duration,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Keywords to ignore in ISP/domain (repeatable or comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            cache_path: opt.cache_path,
            api_key: opt.api_key,
            api_url: opt.api_url.to_string(),
            max_age_days: opt.max_age_days,
            sleep: opt.sleep,
            timeout_seconds: opt.timeout_seconds,
            exclude: opt.exclude,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

/// Parses `--sleep-seconds` into a `Duration`.
///
/// Rejects negative, non-finite, and out-of-range values instead of clamping them.
pub fn parse_sleep_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid number of seconds '{}': {}", s, e))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("sleep must be a non-negative number, got '{}'", s));
    }
    Duration::try_from_secs_f64(secs).map_err(|e| format!("sleep '{}' is out of range: {}", s, e))
}
