//! Configuration management for the Scout MCP server.
//!
//! Credentials for the two Help Scout APIs are independent: either set, both,
//! or neither may be present. A missing credential set disables the matching
//! tools instead of failing startup.

use std::env;

use url::Url;

use crate::error::ScoutError;

/// Default base URL of the Help Scout Docs API.
pub const DEFAULT_DOCS_BASE_URL: &str = "https://docsapi.helpscout.net/v1";

/// Default base URL of the Help Scout Inbox (Mailbox) API.
pub const DEFAULT_INBOX_BASE_URL: &str = "https://api.helpscout.net/v2";

/// Credentials for the Docs API.
#[derive(Clone)]
pub struct DocsConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Docs API key, sent as the Basic Auth username.
    /// This value must never be logged or included in error messages.
    pub api_key: String,
}

/// OAuth2 app credentials for the Inbox API.
#[derive(Clone)]
pub struct InboxConfig {
    /// Base URL without trailing slash; the token endpoint lives under it.
    pub base_url: String,
    /// OAuth application id.
    pub app_id: String,
    /// OAuth application secret.
    /// This value must never be logged or included in error messages.
    pub app_secret: String,
}

/// Process configuration, read once at startup.
#[derive(Clone, Default)]
pub struct Config {
    /// Present when `HELPSCOUT_DOCS_API_KEY` is set.
    pub docs: Option<DocsConfig>,
    /// Present when both `HELPSCOUT_APP_ID` and `HELPSCOUT_APP_SECRET` are set.
    pub inbox: Option<InboxConfig>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `HELPSCOUT_DOCS_API_KEY`: enables the Docs tools
    /// - `HELPSCOUT_APP_ID`, `HELPSCOUT_APP_SECRET`: enable the Inbox tools
    /// - `HELPSCOUT_DOCS_BASE_URL`, `HELPSCOUT_INBOX_BASE_URL`: optional endpoint overrides
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Config` if a base URL override is malformed or a
    /// credential is an obvious placeholder. Missing credentials are not errors.
    pub fn from_env() -> Result<Self, ScoutError> {
        let docs_base = Self::base_url_from_env("HELPSCOUT_DOCS_BASE_URL", DEFAULT_DOCS_BASE_URL)?;
        let inbox_base =
            Self::base_url_from_env("HELPSCOUT_INBOX_BASE_URL", DEFAULT_INBOX_BASE_URL)?;

        let docs = match Self::get_optional_env("HELPSCOUT_DOCS_API_KEY") {
            Some(api_key) => {
                Self::validate_credential("HELPSCOUT_DOCS_API_KEY", &api_key)?;
                Some(DocsConfig {
                    base_url: docs_base,
                    api_key,
                })
            }
            None => None,
        };

        let app_id = Self::get_optional_env("HELPSCOUT_APP_ID");
        let app_secret = Self::get_optional_env("HELPSCOUT_APP_SECRET");
        let inbox = match (app_id, app_secret) {
            (Some(app_id), Some(app_secret)) => {
                Self::validate_credential("HELPSCOUT_APP_ID", &app_id)?;
                Self::validate_credential("HELPSCOUT_APP_SECRET", &app_secret)?;
                Some(InboxConfig {
                    base_url: inbox_base,
                    app_id,
                    app_secret,
                })
            }
            (None, None) => None,
            _ => {
                tracing::warn!(
                    "Only one of HELPSCOUT_APP_ID / HELPSCOUT_APP_SECRET is set; Inbox tools stay disabled"
                );
                None
            }
        };

        Ok(Config { docs, inbox })
    }

    /// Gets an environment variable, treating empty values as absent.
    fn get_optional_env(name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn base_url_from_env(name: &str, default: &str) -> Result<String, ScoutError> {
        match Self::get_optional_env(name) {
            Some(url) => Self::validate_base_url(name, url),
            None => Ok(default.to_string()),
        }
    }

    /// Validates and normalizes a base URL override.
    fn validate_base_url(name: &str, url: String) -> Result<String, ScoutError> {
        let url = url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&url)
            .map_err(|e| ScoutError::invalid_config(format!("{} is not a valid URL: {}", name, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ScoutError::invalid_config(format!(
                "{} must start with http:// or https://",
                name
            )));
        }

        Ok(url)
    }

    /// Rejects credentials that are obviously copied from a template.
    fn validate_credential(name: &str, value: &str) -> Result<(), ScoutError> {
        let lower = value.to_lowercase();
        let placeholder_patterns = [
            "your_api_key",
            "your_app_id",
            "your_app_secret",
            "placeholder",
            "changeme",
        ];

        if placeholder_patterns.iter().any(|p| lower.contains(p)) {
            return Err(ScoutError::invalid_config(format!(
                "{} appears to be a placeholder value",
                name
            )));
        }

        Ok(())
    }
}
