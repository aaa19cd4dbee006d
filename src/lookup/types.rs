//! Lookup outcome and wire types.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error_handling::FailureKind;
use crate::models::{lenient_string, missing_field, LookupResult};

/// Result of one live lookup.
///
/// `Failure` carries the reason; callers that only need the four fields get
/// the `"Error"` placeholder from [`LookupOutcome::result`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The service answered with a parseable body.
    Success(LookupResult),
    /// Network, HTTP status, or body failure.
    Failure {
        /// Category used for the end-of-run statistics
        kind: FailureKind,
        /// Human-readable cause, including the error chain
        reason: String,
    },
}

impl LookupOutcome {
    /// The four fields to print and cache.
    pub fn result(&self) -> LookupResult {
        match self {
            LookupOutcome::Success(result) => result.clone(),
            LookupOutcome::Failure { .. } => LookupResult::failure_placeholder(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success(_))
    }
}

/// Body of a `check` response. Only `data` is read.
///
/// `data` stays `None` only when the key is absent; an explicit `null`
/// arrives as `Some(Value::Null)`.
#[derive(Debug, Deserialize)]
pub(crate) struct CheckResponse {
    #[serde(default, deserialize_with = "present")]
    data: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckData {
    #[serde(default = "missing_field", deserialize_with = "lenient_string")]
    abuse_confidence_score: String,
    #[serde(default = "missing_field", deserialize_with = "lenient_string")]
    country_code: String,
    #[serde(default = "missing_field", deserialize_with = "lenient_string")]
    isp: String,
    #[serde(default = "missing_field", deserialize_with = "lenient_string")]
    domain: String,
}

impl CheckResponse {
    /// The four fields, `"N/A"` for anything absent.
    ///
    /// # Errors
    ///
    /// Fails when `data` is present but not an object (`null` included).
    pub(crate) fn into_result(self) -> Result<LookupResult, serde_json::Error> {
        let data: CheckData = match self.data {
            None => return Ok(LookupResult::missing()),
            Some(object @ Value::Object(_)) => serde_json::from_value(object)?,
            Some(other) => {
                return Err(serde_json::Error::custom(format!(
                    "expected `data` to be an object, found {}",
                    other
                )))
            }
        };
        Ok(LookupResult {
            score: data.abuse_confidence_score,
            country: data.country_code,
            isp: data.isp,
            domain: data.domain,
        })
    }
}
