//! HTTP client for the WordPress lead intake endpoint

use super::models::LeadPayload;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

pub const GENERIC_FAILURE: &str = "Submission failed";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Transport(String),
}

impl SubmissionError {
    pub fn message(&self) -> &str {
        match self {
            SubmissionError::Rejected { message, .. } => message,
            SubmissionError::Transport(message) => message,
        }
    }
}

/// Anything that can deliver a lead. The production implementation is [`LeadClient`].
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    async fn submit(&self, payload: &LeadPayload) -> Result<Value, SubmissionError>;
}

#[derive(Clone)]
pub struct LeadClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl LeadClient {
    /// No timeout and no retries: a request resolves on the transport's own terms.
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }
}

#[async_trait]
impl LeadSubmitter for LeadClient {
    async fn submit(&self, payload: &LeadPayload) -> Result<Value, SubmissionError> {
        let body = serde_json::to_vec(payload).map_err(|e| {
            warn!("Failed to serialize {} lead: {}", payload.lead_type, e);
            SubmissionError::Transport(GENERIC_FAILURE.to_string())
        })?;

        debug!(lead_type = %payload.lead_type, endpoint = %self.endpoint, "Submitting lead");

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
            .map_err(|e| {
                warn!(lead_type = %payload.lead_type, error = %e, "Lead submission transport failure");
                SubmissionError::Transport(GENERIC_FAILURE.to_string())
            })?;

        let status = response.status();
        let json = match response.bytes().await {
            Ok(bytes) => parse_body(&bytes),
            Err(e) => {
                debug!("Failed to read lead response body: {}", e);
                empty_object()
            }
        };

        if !status.is_success() {
            let message = failure_message(&json);
            warn!(
                lead_type = %payload.lead_type,
                status = status.as_u16(),
                message = %message,
                "Lead rejected by intake endpoint"
            );
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        info!(lead_type = %payload.lead_type, status = status.as_u16(), "Lead accepted");
        Ok(json)
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

/// Unparsable bodies become `{}` so message extraction falls back cleanly.
pub fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| empty_object())
}

/// Prefers the body's `error` string, then `message`, then the generic text.
pub fn failure_message(body: &Value) -> String {
    ["error", "message"]
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_message_prefers_error_field() {
        let body = json!({"error": "duplicate", "message": "ignored"});
        assert_eq!(failure_message(&body), "duplicate");
    }

    #[test]
    fn test_failure_message_falls_back_to_message_field() {
        let body = json!({"code": "rest_invalid", "message": "Invalid captcha"});
        assert_eq!(failure_message(&body), "Invalid captcha");

        let body = json!({"error": "", "message": "Invalid captcha"});
        assert_eq!(failure_message(&body), "Invalid captcha");
    }

    #[test]
    fn test_failure_message_generic_fallback() {
        assert_eq!(failure_message(&json!({})), GENERIC_FAILURE);
        assert_eq!(failure_message(&json!({"error": 42})), GENERIC_FAILURE);
        assert_eq!(failure_message(&json!(["error"])), GENERIC_FAILURE);
    }

    #[test]
    fn test_parse_body_degrades_to_empty_object() {
        assert_eq!(parse_body(b"<html>502 Bad Gateway</html>"), json!({}));
        assert_eq!(parse_body(b""), json!({}));
        assert_eq!(parse_body(br#"{"ok":true}"#), json!({"ok": true}));
    }

    #[test]
    fn test_submission_error_display_is_the_message() {
        let err = SubmissionError::Rejected {
            status: 409,
            message: "duplicate".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate");
        assert_eq!(err.message(), "duplicate");
    }
}
