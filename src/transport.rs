//! Request execution shared by the Docs and Inbox clients.
//!
//! One `ApiRequest` in, one HTTP call out. Non-2xx statuses become
//! `ScoutError::Api`; a 204 or an empty body becomes an empty JSON object.
//! Nothing is retried.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::ScoutError;
use crate::models::ApiRequest;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Authorization attached to a request.
#[derive(Clone, Copy)]
pub enum Auth<'a> {
    /// HTTP Basic credentials.
    Basic {
        username: &'a str,
        password: &'a str,
    },
    /// OAuth2 bearer token.
    Bearer(&'a str),
}

/// Builds the shared HTTP client with the default timeout.
pub fn build_http_client() -> Result<Client, ScoutError> {
    Client::builder()
        .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        .build()
        .map_err(ScoutError::HttpClient)
}

/// Executes `request` against `base_url` and returns the parsed body.
pub async fn send(
    http: &Client,
    base_url: &str,
    request: ApiRequest,
    auth: Auth<'_>,
) -> Result<Value, ScoutError> {
    let ApiRequest {
        method,
        path,
        body,
        query,
    } = request;
    let url = format!("{}{}", base_url, path);

    tracing::debug!(method = %method, path = %path, "Making Help Scout API request");

    let mut req = http
        .request(method.clone(), &url)
        .header("Accept", "application/json");

    req = match auth {
        Auth::Basic { username, password } => req.basic_auth(username, Some(password)),
        Auth::Bearer(token) => req.bearer_auth(token),
    };

    if !query.is_empty() {
        req = req.query(query.pairs());
    }

    if let Some(body) = body {
        req = req.json(&body);
    }

    let response = req
        .send()
        .await
        .map_err(|e| send_error(e, format!("{} {}", method, path)))?;

    let status = response.status();
    let text = response.text().await.map_err(ScoutError::Http)?;

    if !status.is_success() {
        tracing::warn!(method = %method, path = %path, status = status.as_u16(), "Help Scout API returned an error");
        return Err(ScoutError::Api {
            status: status.as_u16(),
            body: text,
        });
    }

    parse_body(status, &text)
}

/// Maps a failed send to `Timeout` when the client timeout fired, `Http` otherwise.
pub(crate) fn send_error(error: reqwest::Error, operation: impl Into<String>) -> ScoutError {
    if error.is_timeout() {
        return ScoutError::Timeout {
            duration: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            operation: operation.into(),
        };
    }
    ScoutError::Http(error)
}

/// Parses a successful response body; no content maps to `{}`.
pub fn parse_body(status: StatusCode, text: &str) -> Result<Value, ScoutError> {
    if status == StatusCode::NO_CONTENT || text.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    tracing::trace!(body = %text, "Help Scout API response");
    serde_json::from_str(text).map_err(ScoutError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_is_empty_object() {
        let value = parse_body(StatusCode::NO_CONTENT, "").unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_empty_body_on_ok_is_empty_object() {
        assert_eq!(parse_body(StatusCode::OK, "").unwrap(), serde_json::json!({}));
        assert_eq!(parse_body(StatusCode::CREATED, "\n").unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_json_body_is_parsed() {
        let value = parse_body(StatusCode::OK, r#"{"site":{"id":"abc"}}"#).unwrap();
        assert_eq!(value["site"]["id"], "abc");
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        let err = parse_body(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, ScoutError::Serialization(_)));
    }
}
