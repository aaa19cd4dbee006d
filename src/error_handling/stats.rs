//! Lookup failure statistics.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Per-run failure counters.
///
/// Every `FailureKind` is present from construction, so reads never miss.
/// The run is sequential, so plain counters are enough.
#[derive(Debug, Clone)]
pub struct FailureStats {
    failures: HashMap<FailureKind, usize>,
}

impl FailureStats {
    pub fn new() -> Self {
        let failures = FailureKind::iter().map(|kind| (kind, 0)).collect();
        FailureStats { failures }
    }

    /// Increment a failure counter.
    pub fn increment(&mut self, kind: FailureKind) {
        *self.failures.entry(kind).or_insert(0) += 1;
    }

    pub fn get_count(&self, kind: FailureKind) -> usize {
        self.failures.get(&kind).copied().unwrap_or(0)
    }

    /// Total failed lookups across all categories.
    pub fn total(&self) -> usize {
        self.failures.values().sum()
    }

    /// Nonzero counters in declaration order.
    pub fn nonzero(&self) -> Vec<(FailureKind, usize)> {
        FailureKind::iter()
            .map(|kind| (kind, self.get_count(kind)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Default for FailureStats {
    fn default() -> Self {
        Self::new()
    }
}
