//! Main application modules.
//!
//! Console output for flagged IPs, progress logging, and the end-of-run
//! summary used by the driver.

pub mod logging;
pub mod output;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use output::write_result_line;
pub use statistics::{log_failure_statistics, write_summary};
