//! stitchwise-client — HTTP client for the external ethics analyzer service.
//!
//! The analyzer exposes two endpoints:
//!   POST /analyze  — body {"url": ...}; returns the analysis record, or a
//!                    failure payload with a human-readable "Error" string
//!   GET  /status   — liveness probe
//!
//! One attempt per submission, no retry. Failure is terminal for the attempt
//! and requires explicit resubmission upstream.

use std::time::Duration;

use serde_json::Value;
use stitchwise_common::record::{keys, RawAnalysisRecord};
use thiserror::Error;
use tracing::debug;

/// Shown when a failure payload carries no "Error" string.
pub const GENERIC_SERVICE_ERROR: &str = "An error occurred.";

/// Shown when the transport itself fails.
pub const CONNECT_ERROR: &str = "Failed to connect to server.";

const STATUS_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("analyzer error: {0}")]
    Service(String),
}

impl ClientError {
    /// The inline message surfaced on the submission view. Transport errors
    /// collapse to one fixed string; service errors keep their own message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(_) => CONNECT_ERROR.to_string(),
            ClientError::Service(message) => message.clone(),
        }
    }
}

pub struct AnalyzerClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl AnalyzerClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Submit a product URL for analysis. Exactly one request; the caller
    /// decides whether the user resubmits after a failure.
    pub async fn analyze(&self, product_url: &str) -> Result<RawAnalysisRecord, ClientError> {
        let url = format!("{}/analyze", self.base_url);
        debug!(%url, product_url, "submitting analysis request");

        let body = serde_json::json!({ "url": product_url });
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await?;

        let ok = resp.status().is_success();
        let payload: Value = resp.json().await?;
        interpret_response(ok, payload)
    }

    /// Reachability probe against GET /status. Informational only.
    pub async fn status(&self) -> bool {
        let url = format!("{}/status", self.base_url);
        match self
            .client
            .get(&url)
            .timeout(STATUS_PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(err) => {
                debug!(%url, %err, "analyzer status probe failed");
                false
            }
        }
    }
}

/// Interpret an analyzer response body.
///
/// The HTTP status is the failure indication: a non-success status maps to
/// the "Error" string in the body (or the generic fallback). A success body
/// is taken as the record whatever its shape — a 2xx payload that happens to
/// carry an "Error" key still normalizes downstream rather than failing here.
pub fn interpret_response(http_ok: bool, body: Value) -> Result<RawAnalysisRecord, ClientError> {
    if http_ok {
        Ok(RawAnalysisRecord::from_value(body))
    } else {
        let message = body
            .get(keys::ERROR)
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_SERVICE_ERROR)
            .to_string();
        Err(ClientError::Service(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_body_becomes_record() {
        let record = interpret_response(true, json!({"Brand": "Acme"})).unwrap();
        assert_eq!(record.text(keys::BRAND), Some("Acme"));
    }

    #[test]
    fn test_failure_uses_service_message() {
        let err = interpret_response(false, json!({"Error": "Scraping failed"})).unwrap_err();
        assert_eq!(err.user_message(), "Scraping failed");
    }

    #[test]
    fn test_failure_without_message_uses_generic() {
        let err = interpret_response(false, json!({})).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_SERVICE_ERROR);
    }

    #[test]
    fn test_success_with_error_key_is_still_a_record() {
        // The service sometimes returns 200 with an Error body; the record
        // then normalizes to the all-default report downstream.
        let record = interpret_response(true, json!({"Error": "Invalid JSON"})).unwrap();
        assert!(!record.is_empty());
    }

    #[test]
    fn test_non_object_success_body_is_empty_record() {
        let record = interpret_response(true, json!("oops")).unwrap();
        assert!(record.is_empty());
    }
}
