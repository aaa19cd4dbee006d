//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions (`InitializationError`, `RunError`)
//! - Categorization of failed lookups into `FailureKind`
//! - Per-run failure counters

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_lookup_error, categorize_reqwest_error};
pub use stats::FailureStats;
pub use types::{FailureKind, InitializationError, LookupError, RunError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_failure_stats_initialization() {
        let stats = FailureStats::new();
        for kind in FailureKind::iter() {
            assert_eq!(stats.get_count(kind), 0);
        }
        assert_eq!(stats.total(), 0);
        assert!(stats.nonzero().is_empty());
    }

    #[test]
    fn test_failure_stats_increment() {
        let mut stats = FailureStats::new();
        stats.increment(FailureKind::HttpRequestTimeoutError);
        stats.increment(FailureKind::HttpRequestTimeoutError);
        stats.increment(FailureKind::HttpRequestUnauthorized);

        assert_eq!(stats.get_count(FailureKind::HttpRequestTimeoutError), 2);
        assert_eq!(stats.get_count(FailureKind::HttpRequestUnauthorized), 1);
        assert_eq!(stats.total(), 3);
        assert_eq!(
            stats.nonzero(),
            vec![
                (FailureKind::HttpRequestTimeoutError, 2),
                (FailureKind::HttpRequestUnauthorized, 1),
            ]
        );
    }

    #[test]
    fn test_failure_kind_labels_are_unique() {
        let mut labels: Vec<&str> = FailureKind::iter().map(|k| k.as_str()).collect();
        let count = labels.len();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), count);
    }

    #[test]
    fn test_input_missing_message() {
        let err = RunError::InputMissing(std::path::PathBuf::from("ips.csv"));
        assert_eq!(err.to_string(), "CSV path not set or file missing: ips.csv");
    }
}
