//! Progress logging utilities.

use log::info;
use std::time::Instant;

/// Logs progress information about IP processing.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `processed` - IPs handled so far (cached and live)
/// * `total` - IPs read from the input
pub fn log_progress(start_time: Instant, processed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {}/{} IPs in {:.2} seconds (~{:.2} IPs/sec)",
        processed, total, elapsed_secs, rate
    );
}
