//! OAuth2 access token for the Inbox API.

use serde::Deserialize;

/// Seconds shaved off the server-declared lifetime before a token is stored.
pub const EXPIRY_MARGIN_SECS: u64 = 60;

/// A cached bearer token and the instant it stops being used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// Bearer token value.
    pub token: String,
    /// Milliseconds since the Unix epoch after which the token is not reused.
    pub expires_at_ms: u64,
}

impl AccessToken {
    /// Builds a token acquired at `now_ms` with a lifetime of `expires_in_secs`.
    ///
    /// A lifetime of 60 seconds or less yields an already-expired token.
    pub fn from_grant(token: impl Into<String>, expires_in_secs: u64, now_ms: u64) -> Self {
        let lifetime_ms = expires_in_secs.saturating_mul(1000);
        let margin_ms = EXPIRY_MARGIN_SECS * 1000;
        Self {
            token: token.into(),
            expires_at_ms: now_ms.saturating_add(lifetime_ms).saturating_sub(margin_ms),
        }
    }

    /// True iff `now_ms` is strictly before the stored expiry.
    pub fn is_usable_at(&self, now_ms: u64) -> bool {
        now_ms < self.expires_at_ms
    }
}

/// Body of a successful `client_credentials` token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// The bearer token.
    pub access_token: String,
    /// Lifetime in seconds as declared by the server.
    pub expires_in: u64,
}
