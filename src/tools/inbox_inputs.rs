//! Input parameter structs for the `inbox_*` tools.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::models::{
    ContactEntry, ConversationSortField, ConversationStatus, ConversationType, CustomerRef,
    CustomerSortField, NewThread, PatchOp, PatchOperation, SortDirection,
};

// ============================================================================
// Conversations
// ============================================================================

/// Input for inbox_list_conversations. All filters are optional.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListConversationsInput {
    /// Mailbox id.
    #[serde(default)]
    pub mailbox: Option<u64>,
    /// active, pending, closed, spam, open or all.
    #[serde(default)]
    pub status: Option<ConversationStatus>,
    /// Tag name.
    #[serde(default)]
    pub tag: Option<String>,
    /// User id of the assignee.
    #[serde(default)]
    pub assigned_to: Option<u64>,
    /// Only conversations modified at or after this ISO 8601 timestamp.
    #[serde(default)]
    pub modified_since: Option<String>,
    /// createdAt, customerEmail, customerName, mailboxid, modifiedAt, number, score, status, subject or waitingSince.
    #[serde(default)]
    pub sort_field: Option<ConversationSortField>,
    /// asc or desc.
    #[serde(default)]
    pub sort_order: Option<SortDirection>,
    /// Advanced search query, e.g. `(subject:"refund")`.
    #[serde(default)]
    pub query: Option<String>,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
    /// Embed the threads of each conversation.
    #[serde(default)]
    pub embed_threads: Option<bool>,
}

/// Identifies a conversation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationIdInput {
    /// Conversation id.
    pub conversation_id: u64,
}

/// Input for inbox_get_conversation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConversationInput {
    /// Conversation id.
    pub conversation_id: u64,
    /// Embed the conversation's threads.
    #[serde(default)]
    pub embed_threads: Option<bool>,
}

/// Input for inbox_create_conversation. Serialized as the request body.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationInput {
    /// Conversation subject.
    pub subject: String,
    /// Primary customer (id or email).
    pub customer: CustomerRef,
    /// Mailbox the conversation is created in.
    pub mailbox_id: u64,
    /// email, phone or chat.
    #[serde(rename = "type")]
    pub kind: ConversationType,
    /// active, pending or closed.
    pub status: ConversationStatus,
    /// Initial threads, newest first.
    pub threads: Vec<NewThread>,
    /// Tag names to apply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// User id to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_to: Option<u64>,
    /// User id the conversation is created on behalf of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<u64>,
}

/// Input for inbox_update_conversation: one patch operation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConversationInput {
    /// Conversation id.
    pub conversation_id: u64,
    /// add, move, remove or replace.
    pub op: PatchOp,
    /// Target field, e.g. `/subject`, `/status`, `/assignTo`, `/mailboxId`.
    pub path: String,
    /// New value for the field.
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl UpdateConversationInput {
    /// The single patch operation carried by this input.
    pub fn patch(&self) -> PatchOperation {
        PatchOperation {
            op: self.op,
            path: self.path.clone(),
            value: self.value.clone(),
        }
    }
}

/// Input for inbox_update_conversation_tags. Replaces the full tag set.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConversationTagsInput {
    /// Conversation id.
    pub conversation_id: u64,
    /// Tag names; an empty list clears all tags.
    pub tags: Vec<String>,
}

// ============================================================================
// Threads
// ============================================================================

/// Input for inbox_list_threads.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListThreadsInput {
    /// Conversation id.
    pub conversation_id: u64,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Input for inbox_create_reply.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReplyInput {
    /// Conversation id.
    pub conversation_id: u64,
    /// Reply body (HTML allowed).
    pub text: String,
    /// Customer the reply is addressed to.
    #[serde(default)]
    pub customer_id: Option<u64>,
    /// User id the reply is sent as.
    #[serde(default)]
    pub user: Option<u64>,
    /// Save as draft instead of sending.
    #[serde(default)]
    pub draft: Option<bool>,
    /// Conversation status after the reply.
    #[serde(default)]
    pub status: Option<ConversationStatus>,
    /// Email addresses copied on the reply.
    #[serde(default)]
    pub cc: Option<Vec<String>>,
    /// Email addresses blind-copied on the reply.
    #[serde(default)]
    pub bcc: Option<Vec<String>>,
}

/// Input for inbox_create_note.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteInput {
    /// Conversation id.
    pub conversation_id: u64,
    /// Note body (HTML allowed).
    pub text: String,
    /// Author user id.
    #[serde(default)]
    pub user: Option<u64>,
    /// Conversation status after the note.
    #[serde(default)]
    pub status: Option<ConversationStatus>,
}

/// Input for inbox_create_phone_thread.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhoneThreadInput {
    /// Conversation id.
    pub conversation_id: u64,
    /// Call summary.
    pub text: String,
    /// Customer on the call.
    pub customer_id: u64,
    /// Conversation status after the call.
    #[serde(default)]
    pub status: Option<ConversationStatus>,
}

// ============================================================================
// Customers, mailboxes, users, tags
// ============================================================================

/// Input for inbox_list_customers. All filters are optional.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersInput {
    /// Mailbox id.
    #[serde(default)]
    pub mailbox: Option<u64>,
    /// Exact first name match.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Exact last name match.
    #[serde(default)]
    pub last_name: Option<String>,
    /// ISO 8601 lower bound on modification date.
    #[serde(default)]
    pub modified_since: Option<String>,
    /// score, firstName, lastName or modifiedAt.
    #[serde(default)]
    pub sort_field: Option<CustomerSortField>,
    /// asc or desc.
    #[serde(default)]
    pub sort_order: Option<SortDirection>,
    /// Advanced search query, e.g. `(email:"jo@example.com")`.
    #[serde(default)]
    pub query: Option<String>,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Identifies a customer.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerIdInput {
    /// Customer id.
    pub customer_id: u64,
}

/// Input for inbox_create_customer. Serialized as the request body.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerInput {
    /// First name (required).
    pub first_name: String,
    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email addresses, each with a type (home, work, other).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<ContactEntry>>,
    /// Phone numbers, each with a type (home, work, mobile, fax, pager, other).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<ContactEntry>>,
    /// Company the customer works for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Free-form notes about the customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Identifies a mailbox.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MailboxIdInput {
    /// Mailbox id.
    pub mailbox_id: u64,
}

/// Input for inbox_list_users.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersInput {
    /// Exact email match.
    #[serde(default)]
    pub email: Option<String>,
    /// Only users with access to this mailbox.
    #[serde(default)]
    pub mailbox: Option<u64>,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_conversation_builds_single_patch() {
        let input: UpdateConversationInput = serde_json::from_value(serde_json::json!({
            "conversationId": 42,
            "op": "replace",
            "path": "/status",
            "value": "closed"
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(input.patch()).unwrap(),
            serde_json::json!({"op": "replace", "path": "/status", "value": "closed"})
        );
    }

    #[test]
    fn test_create_conversation_body_shape() {
        let input: CreateConversationInput = serde_json::from_value(serde_json::json!({
            "subject": "Refund",
            "customer": {"email": "jo@example.com"},
            "mailboxId": 7,
            "type": "email",
            "status": "active",
            "threads": [{"type": "customer", "text": "Please refund"}]
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({
                "subject": "Refund",
                "customer": {"email": "jo@example.com"},
                "mailboxId": 7,
                "type": "email",
                "status": "active",
                "threads": [{"type": "customer", "text": "Please refund"}]
            })
        );
    }

    #[test]
    fn test_reply_requires_numeric_conversation_id() {
        let result: Result<CreateReplyInput, _> =
            serde_json::from_value(serde_json::json!({"conversationId": "abc", "text": "hi"}));
        assert!(result.is_err());
    }
}
