//! Shared lookup data types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::{FAILURE_FIELD, MISSING_FIELD};

/// The four fields reported for an IP, from a live query or the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    /// Abuse confidence score as reported (`"0"`..`"100"`), or a placeholder
    pub score: String,
    /// ISO 3166-1 alpha-2 country code
    pub country: String,
    pub isp: String,
    pub domain: String,
}

impl LookupResult {
    /// The placeholder recorded for a failed lookup: `"Error"` in every field.
    pub fn failure_placeholder() -> Self {
        LookupResult {
            score: FAILURE_FIELD.to_string(),
            country: FAILURE_FIELD.to_string(),
            isp: FAILURE_FIELD.to_string(),
            domain: FAILURE_FIELD.to_string(),
        }
    }

    /// A result with every field missing (`"N/A"`).
    pub fn missing() -> Self {
        LookupResult {
            score: MISSING_FIELD.to_string(),
            country: MISSING_FIELD.to_string(),
            isp: MISSING_FIELD.to_string(),
            domain: MISSING_FIELD.to_string(),
        }
    }
}

pub(crate) fn missing_field() -> String {
    MISSING_FIELD.to_string()
}

/// Deserializes a JSON scalar into its display string.
///
/// `null` becomes `"N/A"` and numbers keep their decimal form, so a score
/// written as `10` or `"10"` reads back the same.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => missing_field(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
