//! Live reputation lookups against the AbuseIPDB `check` endpoint.

mod types;

use log::{debug, warn};
use reqwest::header::ACCEPT;
use url::Url;

use crate::cache::{CacheEntry, ReputationCache};
use crate::config::Config;
use crate::error_handling::{categorize_lookup_error, InitializationError, LookupError};
use crate::initialization::init_client;
use crate::models::LookupResult;

pub use types::LookupOutcome;
use types::CheckResponse;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "Key";

/// Client for the reputation service.
///
/// One GET per call; no retries and no backoff. Every failure is turned into
/// [`LookupOutcome::Failure`] so the caller can keep going.
#[derive(Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    api_url: Url,
    api_key: String,
    max_age_days: String,
}

impl std::fmt::Debug for LookupClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupClient")
            .field("api_url", &self.api_url.as_str())
            .field("api_key", &"<redacted>")
            .field("max_age_days", &self.max_age_days)
            .finish()
    }
}

impl LookupClient {
    /// Builds a client from the endpoint, key, max-age and timeout in `config`.
    ///
    /// # Errors
    ///
    /// Fails if the endpoint is not a valid URL or the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, InitializationError> {
        let api_url = Url::parse(&config.api_url).map_err(|source| {
            InitializationError::InvalidApiUrlError {
                url: config.api_url.clone(),
                source,
            }
        })?;
        if config.api_key.is_empty() {
            warn!("No API key configured; live lookups will be rejected by the service");
        }

        Ok(LookupClient {
            client: init_client(config)?,
            api_url,
            api_key: config.api_key.clone(),
            max_age_days: config.max_age_days.to_string(),
        })
    }

    /// Queries the service for `ip`.
    pub async fn lookup(&self, ip: &str) -> LookupOutcome {
        match self.fetch(ip).await {
            Ok(result) => {
                debug!("Checked {}: score {}", ip, result.score);
                LookupOutcome::Success(result)
            }
            Err(e) => {
                let kind = categorize_lookup_error(&e);
                let reason = format!("{:#}", anyhow::Error::from(e));
                warn!("Error while checking {}: {}", ip, reason);
                LookupOutcome::Failure { kind, reason }
            }
        }
    }

    /// Queries the service for `ip` and records the result in `cache`,
    /// placeholder included when the lookup fails.
    pub async fn check_ip(&self, ip: &str, cache: &mut ReputationCache) -> LookupOutcome {
        let outcome = self.lookup(ip).await;
        cache.insert(ip, CacheEntry::from(&outcome.result()));
        outcome
    }

    async fn fetch(&self, ip: &str) -> Result<LookupResult, LookupError> {
        let response = self
            .client
            .get(self.api_url.clone())
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("ipAddress", ip), ("maxAgeInDays", self.max_age_days.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: CheckResponse = response.json().await?;
        Ok(body.into_result()?)
    }
}
