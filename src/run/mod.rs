//! The batch lookup driver.
//!
//! Reads the input, consults the cache for every IP, falls back to a live
//! lookup, prints the IPs that pass the filter, and persists the cache.

mod finalize;

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use log::{debug, info};

use crate::app::{log_progress, write_result_line};
use crate::cache::ReputationCache;
use crate::config::{Config, LOGGING_INTERVAL};
use crate::error_handling::{FailureStats, RunError};
use crate::filter::ExclusionFilter;
use crate::input::read_ips;
use crate::lookup::{LookupClient, LookupOutcome};
use crate::models::LookupResult;

use finalize::finalize_run;

/// An IP that passed the filter and was printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedIp {
    pub ip: String,
    pub result: LookupResult,
    /// Served from the cache rather than a live lookup
    pub cached: bool,
}

/// Results of a lookup run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Rows read from the input, empty ones included
    pub total: usize,
    /// IPs answered from the cache
    pub skipped_cached: usize,
    /// IPs sent to the lookup service
    pub checked_live: usize,
    /// Printed lines, in input order
    pub flagged: Vec<FlaggedIp>,
    /// Failed live lookups by category
    pub failures: FailureStats,
    /// Where the cache was saved
    pub cache_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Counters accumulated by the loop and handed to finalization.
struct RunTally {
    total: usize,
    skipped_cached: usize,
    checked_live: usize,
    flagged: Vec<FlaggedIp>,
    failures: FailureStats,
}

/// Runs a lookup over the configured input, printing to stdout.
///
/// # Errors
///
/// Returns [`RunError::InputMissing`] if the input file does not exist, and
/// [`RunError::Other`] if the input cannot be parsed, the client cannot be
/// built, or the cache cannot be saved. Failed lookups are not errors.
///
/// # Example
///
/// ```no_run
/// use ip_reputation::{run_check, Config};
/// use std::path::PathBuf;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     input: PathBuf::from("ips.csv"),
///     api_key: "my-key".to_string(),
///     ..Default::default()
/// };
/// let report = run_check(config).await?;
/// println!("{} IPs flagged", report.flagged.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_check(config: Config) -> Result<RunReport, RunError> {
    let mut stdout = std::io::stdout();
    run_check_with_output(config, &mut stdout).await
}

/// Same as [`run_check`], writing flagged lines and the summary to `out`.
pub async fn run_check_with_output<W: Write>(
    config: Config,
    out: &mut W,
) -> Result<RunReport, RunError> {
    if !config.input.exists() {
        return Err(RunError::InputMissing(config.input));
    }

    let start_time = Instant::now();
    let ips = read_ips(&config.input)?;
    info!("Total IPs in file: {}", ips.len());

    let mut cache = ReputationCache::load(&config.cache_path);
    let filter = ExclusionFilter::new(&config.exclude);
    let client = LookupClient::new(&config)?;

    let mut tally = RunTally {
        total: ips.len(),
        skipped_cached: 0,
        checked_live: 0,
        flagged: Vec::new(),
        failures: FailureStats::new(),
    };
    let mut processed = 0usize;

    for ip in ips.iter().filter(|ip| !ip.is_empty()) {
        processed += 1;
        if processed % LOGGING_INTERVAL == 0 {
            log_progress(start_time, processed, tally.total);
        }

        if let Some(entry) = cache.get(ip) {
            tally.skipped_cached += 1;
            let result = LookupResult::from(entry);
            debug!("{} served from cache (score {})", ip, result.score);
            if filter.should_print(&result) {
                write_result_line(out, ip, &result, true).context("Failed to write output")?;
                tally.flagged.push(FlaggedIp {
                    ip: ip.clone(),
                    result,
                    cached: true,
                });
            }
            continue;
        }

        let outcome = client.check_ip(ip, &mut cache).await;
        tally.checked_live += 1;
        if let LookupOutcome::Failure { kind, .. } = &outcome {
            tally.failures.increment(*kind);
        }

        let result = outcome.result();
        if filter.should_print(&result) {
            write_result_line(out, ip, &result, false).context("Failed to write output")?;
            tally.flagged.push(FlaggedIp {
                ip: ip.clone(),
                result,
                cached: false,
            });
        }

        if !config.sleep.is_zero() {
            tokio::time::sleep(config.sleep).await;
        }
    }

    finalize_run(out, &cache, &config.cache_path, tally, start_time)
}
