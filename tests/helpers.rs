// Shared test helpers for input files, cache files, and mock server set-up.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ip_reputation::{CacheEntry, Config, LogFormat, LogLevel, ReputationCache};
use serde_json::json;
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock server answers on, mirroring the real endpoint.
#[allow(dead_code)]
pub const CHECK_PATH: &str = "/api/v2/check";

/// Writes IPs (or arbitrary CSV rows) to a temporary input file.
#[allow(dead_code)]
pub fn write_input(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for row in rows {
        writeln!(file, "{}", row).expect("Failed to write row");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Builds a cache entry with a fixed country and domain.
#[allow(dead_code)]
pub fn cache_entry(score: &str, isp: &str) -> CacheEntry {
    CacheEntry {
        score: score.to_string(),
        country: "AU".to_string(),
        isp: isp.to_string(),
        domain: "acme.example".to_string(),
    }
}

/// Writes a cache file containing `entries` and returns its path.
#[allow(dead_code)]
pub fn write_cache(dir: &TempDir, entries: &[(&str, CacheEntry)]) -> PathBuf {
    let cache_path = dir.path().join("checked_ips.json");
    let mut cache = ReputationCache::new();
    for (ip, entry) in entries {
        cache.insert(*ip, entry.clone());
    }
    cache.save(&cache_path).expect("Failed to write cache");
    cache_path
}

/// Config pointing at the mock server, with logging quiet and no pacing.
#[allow(dead_code)]
pub fn create_test_config(server: &MockServer, input: &Path, cache_path: &Path) -> Config {
    Config {
        input: input.to_path_buf(),
        cache_path: cache_path.to_path_buf(),
        api_key: "test-key".to_string(),
        api_url: format!("{}{}", server.uri(), CHECK_PATH),
        max_age_days: 90,
        sleep: Duration::ZERO,
        timeout_seconds: 5,
        exclude: Vec::new(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}

/// A successful `check` response body.
#[allow(dead_code)]
pub fn check_body(ip: &str, score: u32, isp: &str, domain: &str) -> serde_json::Value {
    json!({
        "data": {
            "ipAddress": ip,
            "isPublic": true,
            "ipVersion": 4,
            "isWhitelisted": false,
            "abuseConfidenceScore": score,
            "countryCode": "US",
            "usageType": "Data Center/Web Hosting/Transit",
            "isp": isp,
            "domain": domain,
            "hostnames": [],
            "totalReports": score,
            "numDistinctUsers": 1,
            "lastReportedAt": null
        }
    })
}

/// Mounts a mock answering `ip` with `template`, expecting `times` calls.
#[allow(dead_code)]
pub async fn mount_ip(server: &MockServer, ip: &str, template: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path(CHECK_PATH))
        .and(query_param("ipAddress", ip))
        .respond_with(template)
        .expect(times)
        .mount(server)
        .await;
}

/// Runs a check capturing stdout into a string.
#[allow(dead_code)]
pub async fn run_captured(
    config: Config,
) -> (Result<ip_reputation::RunReport, ip_reputation::RunError>, String) {
    let mut out = Vec::new();
    let result = ip_reputation::run_check_with_output(config, &mut out).await;
    (result, String::from_utf8(out).expect("Output should be UTF-8"))
}

/// Lines printed before the summary block.
#[allow(dead_code)]
pub fn flagged_lines(output: &str) -> Vec<&str> {
    output
        .split("\n─── Summary ───")
        .next()
        .unwrap_or_default()
        .lines()
        .filter(|line| !line.is_empty())
        .collect()
}
