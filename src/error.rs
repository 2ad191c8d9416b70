//! Error types for the Scout MCP server.
//!
//! This module defines `ScoutError`, the unified error type returned by both
//! API clients. The tool layer converts every `ScoutError` into a failure
//! envelope; nothing here is ever retried.
//!
//! # Security
//!
//! Error bodies returned by Help Scout are passed through verbatim, so any
//! message that may leave the process goes through `sanitized_display()`
//! first to strip configured credentials.

use std::time::Duration;
use thiserror::Error;

/// Unified error type for all Scout operations.
#[derive(Error, Debug)]
pub enum ScoutError {
    /// Configuration error - invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// A tool was invoked for an API whose credentials are absent.
    #[error("{api} is not configured. {hint}")]
    NotConfigured {
        /// Human name of the API, e.g. "Help Scout Docs API".
        api: &'static str,
        /// Which environment variables enable it.
        hint: &'static str,
    },

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {duration:?} ({operation})")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// The API answered with a non-2xx status.
    #[error("Help Scout API error {status}: {body}")]
    Api {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// The OAuth2 token exchange answered with a non-2xx status.
    #[error("OAuth token request failed {status}: {body}")]
    OAuth {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response body text.
        body: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input validation failed before any request was made.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ScoutError {
    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ScoutError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ScoutError::Validation(message.into())
    }

    /// Error for Docs tools invoked without `HELPSCOUT_DOCS_API_KEY`.
    pub fn docs_not_configured() -> Self {
        ScoutError::NotConfigured {
            api: "Help Scout Docs API",
            hint: "Set HELPSCOUT_DOCS_API_KEY to enable docs_* tools.",
        }
    }

    /// Error for Inbox tools invoked without OAuth app credentials.
    pub fn inbox_not_configured() -> Self {
        ScoutError::NotConfigured {
            api: "Help Scout Inbox API",
            hint: "Set HELPSCOUT_APP_ID and HELPSCOUT_APP_SECRET to enable inbox_* tools.",
        }
    }

    /// Returns the HTTP status carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ScoutError::Api { status, .. } | ScoutError::OAuth { status, .. } => Some(*status),
            ScoutError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Replaces every occurrence of each secret in `message` with `[REDACTED]`.
    ///
    /// Empty secrets are ignored.
    #[must_use]
    pub fn sanitize_message(message: &str, secrets: &[&str]) -> String {
        secrets
            .iter()
            .filter(|s| !s.is_empty())
            .fold(message.to_string(), |acc, secret| acc.replace(secret, "[REDACTED]"))
    }

    /// Display message with every secret redacted.
    #[must_use]
    pub fn sanitized_display(&self, secrets: &[&str]) -> String {
        Self::sanitize_message(&self.to_string(), secrets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status_and_body() {
        let err = ScoutError::Api {
            status: 404,
            body: r#"{"error":"Not Found"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not Found"));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_oauth_error_carries_status_and_body() {
        let err = ScoutError::OAuth {
            status: 401,
            body: "invalid_client".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "OAuth token request failed 401: invalid_client"
        );
    }

    #[test]
    fn test_not_configured_messages() {
        let docs = ScoutError::docs_not_configured().to_string();
        assert!(docs.contains("not configured"));
        assert!(docs.contains("HELPSCOUT_DOCS_API_KEY"));

        let inbox = ScoutError::inbox_not_configured().to_string();
        assert!(inbox.contains("not configured"));
        assert!(inbox.contains("HELPSCOUT_APP_SECRET"));
    }

    #[test]
    fn test_validation_error() {
        let err = ScoutError::validation("categories must not be empty");
        assert_eq!(
            err.to_string(),
            "validation error: categories must not be empty"
        );
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_timeout_error() {
        let err = ScoutError::Timeout {
            duration: Duration::from_secs(30),
            operation: "GET /sites".to_string(),
        };
        assert!(err.to_string().contains("30s"));
    }

    #[test]
    fn test_sanitize_message_removes_every_secret() {
        let message = "key=docs_key_123 secret=app_secret_456";
        let sanitized =
            ScoutError::sanitize_message(message, &["docs_key_123", "app_secret_456"]);
        assert!(!sanitized.contains("docs_key_123"));
        assert!(!sanitized.contains("app_secret_456"));
        assert_eq!(sanitized.matches("[REDACTED]").count(), 2);
    }

    #[test]
    fn test_sanitize_message_ignores_empty_secret() {
        let message = "Some error message";
        assert_eq!(ScoutError::sanitize_message(message, &[""]), message);
        assert_eq!(ScoutError::sanitize_message(message, &[]), message);
    }
}
