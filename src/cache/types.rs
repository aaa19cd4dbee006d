//! Cache data structures.

use serde::{Deserialize, Serialize};

use crate::models::{lenient_string, missing_field, LookupResult};

/// Last-known lookup result for one IP, as stored in the cache file.
///
/// Fields that are missing or `null` in the file load as `"N/A"`; older
/// cache files have no `domain` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    #[serde(default = "missing_field", deserialize_with = "lenient_string")]
    pub score: String,
    #[serde(default = "missing_field", deserialize_with = "lenient_string")]
    pub country: String,
    #[serde(default = "missing_field", deserialize_with = "lenient_string")]
    pub isp: String,
    #[serde(default = "missing_field", deserialize_with = "lenient_string")]
    pub domain: String,
}

impl From<&LookupResult> for CacheEntry {
    fn from(result: &LookupResult) -> Self {
        CacheEntry {
            score: result.score.clone(),
            country: result.country.clone(),
            isp: result.isp.clone(),
            domain: result.domain.clone(),
        }
    }
}

impl From<&CacheEntry> for LookupResult {
    fn from(entry: &CacheEntry) -> Self {
        LookupResult {
            score: entry.score.clone(),
            country: entry.country.clone(),
            isp: entry.isp.clone(),
            domain: entry.domain.clone(),
        }
    }
}
