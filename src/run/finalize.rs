//! Run finalization.
//!
//! Persists the cache, prints the summary, and builds the report once the
//! loop is done.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use log::info;

use crate::app::{log_failure_statistics, write_summary};
use crate::cache::ReputationCache;
use crate::error_handling::RunError;

use super::{RunReport, RunTally};

/// Finalize a run and produce the report.
///
/// 1. Save the cache (unconditionally, the whole mapping)
/// 2. Write the summary block
/// 3. Log failure statistics
///
/// # Errors
///
/// Returns an error if the cache cannot be written or the summary cannot be printed.
pub(super) fn finalize_run<W: Write>(
    out: &mut W,
    cache: &ReputationCache,
    cache_path: &Path,
    tally: RunTally,
    start_time: Instant,
) -> Result<RunReport, RunError> {
    cache.save(cache_path)?;

    write_summary(out, tally.total, tally.skipped_cached, tally.checked_live)
        .context("Failed to write summary")?;
    out.flush().context("Failed to flush output")?;

    log_failure_statistics(&tally.failures);

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    info!(
        "Run finished in {:.1}s: {} cached, {} live, {} flagged",
        elapsed_seconds,
        tally.skipped_cached,
        tally.checked_live,
        tally.flagged.len()
    );

    Ok(RunReport {
        total: tally.total,
        skipped_cached: tally.skipped_cached,
        checked_live: tally.checked_live,
        flagged: tally.flagged,
        failures: tally.failures,
        cache_path: cache_path.to_path_buf(),
        elapsed_seconds,
    })
}
