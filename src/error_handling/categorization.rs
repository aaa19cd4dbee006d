//! Error categorization.

use super::types::{FailureKind, LookupError};

/// Categorizes a failed lookup into a `FailureKind`.
pub fn categorize_lookup_error(error: &LookupError) -> FailureKind {
    match error {
        LookupError::Http(e) => categorize_reqwest_error(e),
        LookupError::Body(_) => FailureKind::HttpRequestDecodeError,
    }
}

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Status codes are checked first so that an `error_for_status()` failure
/// lands in the most specific bucket; transport errors fall through to the
/// `reqwest` error predicates.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if let Some(status) = error.status() {
        match status.as_u16() {
            401 => return FailureKind::HttpRequestUnauthorized,
            403 => return FailureKind::HttpRequestForbidden,
            429 => return FailureKind::HttpRequestTooManyRequests,
            _ if status.is_server_error() => return FailureKind::HttpRequestServerError,
            _ if status.is_client_error() => return FailureKind::HttpRequestStatusError,
            _ => {}
        }
    }

    if error.is_builder() {
        FailureKind::HttpRequestBuilderError
    } else if error.is_timeout() {
        FailureKind::HttpRequestTimeoutError
    } else if error.is_connect() {
        FailureKind::HttpRequestConnectError
    } else if error.is_status() {
        FailureKind::HttpRequestStatusError
    } else if error.is_body() {
        FailureKind::HttpRequestBodyError
    } else if error.is_decode() {
        FailureKind::HttpRequestDecodeError
    } else {
        FailureKind::HttpRequestOtherError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Nothing listens on port 1 of the loopback interface
        let client = reqwest::Client::new();
        let error = client
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("Connection should be refused");
        assert_eq!(
            categorize_reqwest_error(&error),
            FailureKind::HttpRequestConnectError
        );
    }

    #[tokio::test]
    async fn test_categorize_builder_error() {
        let client = reqwest::Client::new();
        let error = client
            .get("not a url")
            .send()
            .await
            .expect_err("Invalid URL should fail to build");
        assert_eq!(
            categorize_reqwest_error(&error),
            FailureKind::HttpRequestBuilderError
        );
    }

    #[test]
    fn test_categorize_unexpected_body() {
        let error: LookupError = serde_json::from_str::<u32>("null").unwrap_err().into();
        assert_eq!(
            categorize_lookup_error(&error),
            FailureKind::HttpRequestDecodeError
        );
    }

    // Status-code categories are covered in tests/lookup_client.rs against a mock server.
}
