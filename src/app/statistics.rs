//! End-of-run summary and failure statistics.

use std::io::{self, Write};

use log::{info, warn};

use crate::error_handling::FailureStats;

/// Writes the three-line summary block, preceded by a blank line.
pub fn write_summary<W: Write>(
    out: &mut W,
    total: usize,
    skipped_cached: usize,
    checked_live: usize,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "─── Summary ───")?;
    writeln!(out, "Total IPs in CSV: {}", total)?;
    writeln!(out, "Skipped (already cached): {}", skipped_cached)?;
    writeln!(out, "Checked via API: {}", checked_live)?;
    Ok(())
}

/// Logs failed live lookups by category. Silent when nothing failed.
pub fn log_failure_statistics(stats: &FailureStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    warn!(
        "{} live lookup{} failed and {} cached as \"Error\"",
        total,
        if total == 1 { "" } else { "s" },
        if total == 1 { "was" } else { "were" }
    );
    for (kind, count) in stats.nonzero() {
        info!("   {}: {}", kind.as_str(), count);
    }
}
