//! HTTP client for the Help Scout Inbox (Mailbox) API.
//!
//! Requests carry an OAuth2 bearer token obtained with the
//! `client_credentials` grant. The token is cached until 60 seconds before
//! its declared expiry and renewed transparently by the next call that
//! needs it.
//!
//! # Concurrency
//!
//! The cache lock is held only to read or overwrite the slot, never across
//! the token exchange. Two callers that both find no usable token will both
//! exchange and both store; either token is valid, so the last write wins.
//!
//! # Security
//!
//! The app secret and the bearer token are never logged.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::Client;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::config::InboxConfig;
use crate::error::ScoutError;
use crate::models::{insert_opt, AccessToken, ApiRequest, QueryParams, TokenResponse};
use crate::tools::{
    CreateConversationInput, CreateCustomerInput, CreateNoteInput, CreatePhoneThreadInput,
    CreateReplyInput, GetConversationInput, ListConversationsInput, ListCustomersInput,
    ListThreadsInput, ListUsersInput, UpdateConversationInput, UpdateConversationTagsInput,
};
use crate::transport::{self, Auth};

/// Milliseconds since the Unix epoch.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Client for the Help Scout Inbox API.
///
/// Clones share the token cache.
#[derive(Clone)]
pub struct InboxClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL, e.g. `https://api.helpscout.net/v2`.
    base_url: String,

    /// OAuth application id.
    app_id: String,

    /// OAuth application secret.
    /// SECURITY: Never log this value!
    app_secret: String,

    /// Cached bearer token; `None` until the first authenticated call.
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl InboxClient {
    /// Creates an Inbox client from configuration. No token is fetched yet.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &InboxConfig) -> Result<Self, ScoutError> {
        Ok(Self {
            http: transport::build_http_client()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Returns the app secret for redacting error messages. Never log it.
    pub(crate) fn secret_for_sanitization(&self) -> &str {
        &self.app_secret
    }

    /// Token endpoint derived from the base URL.
    fn token_url(&self) -> String {
        format!("{}/oauth2/token", self.base_url)
    }

    /// Returns a usable bearer token, exchanging credentials if needed.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::OAuth` if the token endpoint answers non-2xx.
    /// The failure is not cached; the next call starts a fresh exchange.
    pub async fn access_token(&self) -> Result<String, ScoutError> {
        if let Some(token) = self.token.read().await.as_ref() {
            if token.is_usable_at(now_ms()) {
                return Ok(token.token.clone());
            }
        }

        let token = self.exchange_credentials().await?;
        let value = token.token.clone();
        *self.token.write().await = Some(token);
        Ok(value)
    }

    /// Performs the `client_credentials` grant.
    async fn exchange_credentials(&self) -> Result<AccessToken, ScoutError> {
        tracing::debug!("Requesting Help Scout OAuth token");

        let response = self
            .http
            .post(self.token_url())
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.app_id.as_str()),
                ("client_secret", self.app_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| transport::send_error(e, "POST /oauth2/token"))?;

        let status = response.status();
        let body = response.text().await.map_err(ScoutError::Http)?;

        if !status.is_success() {
            let body = ScoutError::sanitize_message(&body, &[&self.app_secret]);
            tracing::warn!(status = status.as_u16(), "OAuth token request rejected");
            return Err(ScoutError::OAuth {
                status: status.as_u16(),
                body,
            });
        }

        let grant: TokenResponse = serde_json::from_str(&body)?;
        tracing::info!(expires_in = grant.expires_in, "Acquired Help Scout OAuth token");

        Ok(AccessToken::from_grant(
            grant.access_token,
            grant.expires_in,
            now_ms(),
        ))
    }

    /// Sends one request with a bearer token.
    async fn send(&self, request: ApiRequest) -> Result<Value, ScoutError> {
        let token = self.access_token().await?;
        transport::send(&self.http, &self.base_url, request, Auth::Bearer(&token)).await
    }

    // ========================================================================
    // Conversations
    // ========================================================================

    /// Lists conversations matching the given filters (one page).
    pub async fn list_conversations(
        &self,
        input: &ListConversationsInput,
    ) -> Result<Value, ScoutError> {
        let query = QueryParams::new()
            .with("mailbox", input.mailbox)
            .with_enum("status", input.status.as_ref())?
            .with("tag", input.tag.as_deref())
            .with("assigned_to", input.assigned_to)
            .with("modifiedSince", input.modified_since.as_deref())
            .with_enum("sortField", input.sort_field.as_ref())?
            .with_enum("sortOrder", input.sort_order.as_ref())?
            .with("query", input.query.as_deref())
            .with("page", input.page)
            .with("embed", input.embed_threads.filter(|e| *e).map(|_| "threads"));
        self.send(ApiRequest::get("/conversations").with_query(query))
            .await
    }

    /// Gets one conversation.
    pub async fn get_conversation(
        &self,
        input: &GetConversationInput,
    ) -> Result<Value, ScoutError> {
        let path = format!("/conversations/{}", input.conversation_id);
        let query = QueryParams::new()
            .with("embed", input.embed_threads.filter(|e| *e).map(|_| "threads"));
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    /// Creates a conversation. The API answers 201 with an empty body.
    pub async fn create_conversation(
        &self,
        input: &CreateConversationInput,
    ) -> Result<Value, ScoutError> {
        let body = serde_json::to_value(input)?;
        self.send(ApiRequest::post("/conversations").with_body(body))
            .await
    }

    /// Applies one JSON-Patch operation to a conversation.
    pub async fn update_conversation(
        &self,
        input: &UpdateConversationInput,
    ) -> Result<Value, ScoutError> {
        let path = format!("/conversations/{}", input.conversation_id);
        let body = serde_json::to_value(input.patch())?;
        self.send(ApiRequest::patch(path).with_body(body)).await
    }

    /// Deletes a conversation.
    pub async fn delete_conversation(&self, conversation_id: u64) -> Result<Value, ScoutError> {
        self.send(ApiRequest::delete(format!(
            "/conversations/{}",
            conversation_id
        )))
        .await
    }

    /// Replaces the tag set of a conversation.
    pub async fn update_conversation_tags(
        &self,
        input: &UpdateConversationTagsInput,
    ) -> Result<Value, ScoutError> {
        let path = format!("/conversations/{}/tags", input.conversation_id);
        let body = serde_json::json!({ "tags": input.tags });
        self.send(ApiRequest::put(path).with_body(body)).await
    }

    // ========================================================================
    // Threads
    // ========================================================================

    /// Lists the threads of a conversation.
    pub async fn list_threads(&self, input: &ListThreadsInput) -> Result<Value, ScoutError> {
        let path = format!("/conversations/{}/threads", input.conversation_id);
        let query = QueryParams::new().with("page", input.page);
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    /// Adds a reply thread.
    pub async fn create_reply(&self, input: &CreateReplyInput) -> Result<Value, ScoutError> {
        let mut body = serde_json::Map::new();
        body.insert("text".to_string(), Value::String(input.text.clone()));
        insert_opt(
            &mut body,
            "customer",
            input.customer_id.map(|id| serde_json::json!({ "id": id })),
        )?;
        insert_opt(&mut body, "user", input.user)?;
        insert_opt(&mut body, "draft", input.draft)?;
        insert_opt(&mut body, "status", input.status)?;
        insert_opt(&mut body, "cc", input.cc.as_ref())?;
        insert_opt(&mut body, "bcc", input.bcc.as_ref())?;

        let path = format!("/conversations/{}/reply", input.conversation_id);
        self.send(ApiRequest::post(path).with_body(Value::Object(body)))
            .await
    }

    /// Adds an internal note thread.
    pub async fn create_note(&self, input: &CreateNoteInput) -> Result<Value, ScoutError> {
        let mut body = serde_json::Map::new();
        body.insert("text".to_string(), Value::String(input.text.clone()));
        insert_opt(&mut body, "user", input.user)?;
        insert_opt(&mut body, "status", input.status)?;

        let path = format!("/conversations/{}/notes", input.conversation_id);
        self.send(ApiRequest::post(path).with_body(Value::Object(body)))
            .await
    }

    /// Adds a phone thread.
    pub async fn create_phone_thread(
        &self,
        input: &CreatePhoneThreadInput,
    ) -> Result<Value, ScoutError> {
        let mut body = serde_json::Map::new();
        body.insert("text".to_string(), Value::String(input.text.clone()));
        body.insert(
            "customer".to_string(),
            serde_json::json!({ "id": input.customer_id }),
        );
        insert_opt(&mut body, "status", input.status)?;

        let path = format!("/conversations/{}/phones", input.conversation_id);
        self.send(ApiRequest::post(path).with_body(Value::Object(body)))
            .await
    }

    // ========================================================================
    // Customers
    // ========================================================================

    /// Lists customers matching the given filters (one page).
    pub async fn list_customers(&self, input: &ListCustomersInput) -> Result<Value, ScoutError> {
        let query = QueryParams::new()
            .with("mailbox", input.mailbox)
            .with("firstName", input.first_name.as_deref())
            .with("lastName", input.last_name.as_deref())
            .with("modifiedSince", input.modified_since.as_deref())
            .with_enum("sortField", input.sort_field.as_ref())?
            .with_enum("sortOrder", input.sort_order.as_ref())?
            .with("query", input.query.as_deref())
            .with("page", input.page);
        self.send(ApiRequest::get("/customers").with_query(query))
            .await
    }

    /// Gets one customer.
    pub async fn get_customer(&self, customer_id: u64) -> Result<Value, ScoutError> {
        self.send(ApiRequest::get(format!("/customers/{}", customer_id)))
            .await
    }

    /// Creates a customer.
    pub async fn create_customer(&self, input: &CreateCustomerInput) -> Result<Value, ScoutError> {
        let body = serde_json::to_value(input)?;
        self.send(ApiRequest::post("/customers").with_body(body))
            .await
    }

    // ========================================================================
    // Mailboxes, users, tags
    // ========================================================================

    /// Lists mailboxes.
    pub async fn list_mailboxes(&self, page: Option<u32>) -> Result<Value, ScoutError> {
        let query = QueryParams::new().with("page", page);
        self.send(ApiRequest::get("/mailboxes").with_query(query))
            .await
    }

    /// Gets one mailbox.
    pub async fn get_mailbox(&self, mailbox_id: u64) -> Result<Value, ScoutError> {
        self.send(ApiRequest::get(format!("/mailboxes/{}", mailbox_id)))
            .await
    }

    /// Lists users.
    pub async fn list_users(&self, input: &ListUsersInput) -> Result<Value, ScoutError> {
        let query = QueryParams::new()
            .with("email", input.email.as_deref())
            .with("mailbox", input.mailbox)
            .with("page", input.page);
        self.send(ApiRequest::get("/users").with_query(query)).await
    }

    /// Gets the user that owns the OAuth app.
    pub async fn get_current_user(&self) -> Result<Value, ScoutError> {
        self.send(ApiRequest::get("/users/me")).await
    }

    /// Lists tags.
    pub async fn list_tags(&self, page: Option<u32>) -> Result<Value, ScoutError> {
        let query = QueryParams::new().with("page", page);
        self.send(ApiRequest::get("/tags").with_query(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> InboxClient {
        InboxClient::new(&InboxConfig {
            base_url: "https://api.helpscout.net/v2/".to_string(),
            app_id: "app".to_string(),
            app_secret: "secret".to_string(),
        })
        .expect("client")
    }

    #[test]
    fn test_token_url_derives_from_base() {
        assert_eq!(
            test_client().token_url(),
            "https://api.helpscout.net/v2/oauth2/token"
        );
    }

    #[tokio::test]
    async fn test_cached_token_is_reused_without_network() {
        let client = test_client();
        *client.token.write().await = Some(AccessToken::from_grant("cached", 7200, now_ms()));

        // The base URL is unreachable in tests; a usable cache must short-circuit.
        assert_eq!(client.access_token().await.unwrap(), "cached");
    }

    #[tokio::test]
    async fn test_clones_share_token_cache() {
        let client = test_client();
        let clone = client.clone();
        *client.token.write().await = Some(AccessToken::from_grant("shared", 7200, now_ms()));
        assert_eq!(clone.access_token().await.unwrap(), "shared");
    }

    #[tokio::test]
    async fn test_token_exchange_timeout_is_reported_as_timeout() {
        use std::time::Duration;
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"access_token": "late", "expires_in": 7200}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock)
            .await;

        let client = InboxClient {
            http: Client::builder()
                .timeout(Duration::from_millis(50))
                .build()
                .unwrap(),
            ..InboxClient::new(&InboxConfig {
                base_url: mock.uri(),
                app_id: "app".to_string(),
                app_secret: "secret".to_string(),
            })
            .unwrap()
        };

        let err = client.access_token().await.unwrap_err();
        match err {
            ScoutError::Timeout { operation, .. } => {
                assert_eq!(operation, "POST /oauth2/token")
            }
            other => panic!("expected timeout, got {other:?}"),
        }
        assert!(client.token.read().await.is_none());
    }
}
