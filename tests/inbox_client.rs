//! Inbox client tests against a mock Help Scout Inbox API and token endpoint.

use pretty_assertions::assert_eq;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{
    bearer_token, body_json, body_string_contains, header, method, path, query_param,
    query_param_is_missing,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scout::config::InboxConfig;
use scout::error::ScoutError;
use scout::inbox_client::InboxClient;
use scout::tools::{
    CreateReplyInput, ListConversationsInput, UpdateConversationInput,
    UpdateConversationTagsInput,
};

const APP_SECRET: &str = "app-secret-456";

fn client(server: &MockServer) -> InboxClient {
    InboxClient::new(&InboxConfig {
        base_url: server.uri(),
        app_id: "app-id-123".to_string(),
        app_secret: APP_SECRET.to_string(),
    })
    .unwrap()
}

fn input<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap()
}

async fn mount_token(server: &MockServer, token: &str, expires_in: u64, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=app-id-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": token,
            "token_type": "bearer",
            "expires_in": expires_in
        })))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn token_is_exchanged_once_and_reused() {
    let server = MockServer::start().await;
    mount_token(&server, "tok-1", 7200, 1).await;
    Mock::given(method("GET"))
        .and(path("/mailboxes"))
        .and(bearer_token("tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_embedded": {}})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    assert_ok!(client.list_mailboxes(None).await);
    assert_ok!(client.list_mailboxes(None).await);
}

#[tokio::test]
async fn token_inside_expiry_margin_is_renewed() {
    let server = MockServer::start().await;
    // A 60 second lifetime is already within the refresh margin.
    mount_token(&server, "short", 60, 2).await;

    let client = client(&server);
    assert_eq!(assert_ok!(client.access_token().await), "short");
    assert_eq!(assert_ok!(client.access_token().await), "short");
}

#[tokio::test]
async fn oauth_failure_is_reported_and_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(format!("invalid_client for secret {}", APP_SECRET)),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client(&server);
    let err = assert_err!(client.get_current_user().await);
    assert!(matches!(err, ScoutError::OAuth { status: 401, .. }));
    let message = err.to_string();
    assert!(message.contains("invalid_client"));
    assert!(!message.contains(APP_SECRET));

    assert_err!(client.get_current_user().await);
}

#[tokio::test]
async fn list_conversations_forwards_only_present_filters() {
    let server = MockServer::start().await;
    mount_token(&server, "tok", 7200, 1).await;
    Mock::given(method("GET"))
        .and(path("/conversations"))
        .and(query_param("mailbox", "7"))
        .and(query_param("status", "closed"))
        .and(query_param("embed", "threads"))
        .and(query_param_is_missing("tag"))
        .and(query_param_is_missing("query"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"page": {"number": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let filters: ListConversationsInput = input(json!({
        "mailbox": 7,
        "status": "closed",
        "embedThreads": true
    }));
    assert_ok!(client(&server).list_conversations(&filters).await);
}

#[tokio::test]
async fn reply_with_text_only_sends_minimal_body() {
    let server = MockServer::start().await;
    mount_token(&server, "tok", 7200, 1).await;
    Mock::given(method("POST"))
        .and(path("/conversations/42/reply"))
        .and(bearer_token("tok"))
        .and(body_json(json!({"text": "hello"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let reply: CreateReplyInput = input(json!({"conversationId": 42, "text": "hello"}));
    let value = assert_ok!(client(&server).create_reply(&reply).await);
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn update_conversation_sends_single_patch_operation() {
    let server = MockServer::start().await;
    mount_token(&server, "tok", 7200, 1).await;
    Mock::given(method("PATCH"))
        .and(path("/conversations/42"))
        .and(body_json(json!({"op": "replace", "path": "/status", "value": "closed"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let update: UpdateConversationInput = input(json!({
        "conversationId": 42,
        "op": "replace",
        "path": "/status",
        "value": "closed"
    }));
    assert_ok!(client(&server).update_conversation(&update).await);
}

#[tokio::test]
async fn update_tags_replaces_full_set() {
    let server = MockServer::start().await;
    mount_token(&server, "tok", 7200, 1).await;
    Mock::given(method("PUT"))
        .and(path("/conversations/42/tags"))
        .and(body_json(json!({"tags": []})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let tags: UpdateConversationTagsInput = input(json!({"conversationId": 42, "tags": []}));
    assert_ok!(client(&server).update_conversation_tags(&tags).await);
}

#[tokio::test]
async fn api_error_carries_status_and_body() {
    let server = MockServer::start().await;
    mount_token(&server, "tok", 7200, 1).await;
    Mock::given(method("GET"))
        .and(path("/customers/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Customer not found"))
        .mount(&server)
        .await;

    let err = assert_err!(client(&server).get_customer(9).await);
    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Customer not found"));
}
