//! Enumerations and nested payload types for the Help Scout Inbox API.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Conversation status, used both as a filter and as a write value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConversationStatus {
    /// Active (open) conversations.
    Active,
    /// Alias of `active` accepted by the list endpoint.
    Open,
    /// Pending.
    Pending,
    /// Closed.
    Closed,
    /// Marked as spam.
    Spam,
    /// Every status (filter only).
    All,
}

/// Sort field for conversation listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ConversationSortField {
    CreatedAt,
    CustomerEmail,
    CustomerName,
    #[serde(rename = "mailboxid")]
    MailboxId,
    ModifiedAt,
    Number,
    Score,
    Status,
    Subject,
    WaitingSince,
}

/// Sort field for customer listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CustomerSortField {
    Score,
    FirstName,
    LastName,
    ModifiedAt,
}

/// Sort direction for Inbox listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Channel of a new conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConversationType {
    Email,
    Phone,
    Chat,
}

/// Kind of the initial threads of a new conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ThreadType {
    Customer,
    Reply,
    Note,
    Phone,
    Chat,
}

/// JSON-Patch verb accepted by `PATCH /conversations/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Move,
    Remove,
    Replace,
}

/// A single conversation patch: `{op, path, value}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PatchOperation {
    /// Patch verb.
    pub op: PatchOp,
    /// Target field, e.g. `/subject`, `/status`, `/assignTo`, `/mailboxId`.
    pub path: String,
    /// New value; omitted for `remove`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// A customer reference or inline customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    /// Existing customer id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Email; creates the customer if unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Initial thread of a new conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NewThread {
    /// Thread kind.
    #[serde(rename = "type")]
    pub kind: ThreadType,
    /// Thread body (HTML allowed).
    pub text: String,
    /// Author for customer threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerRef>,
    /// Author user id for reply/note threads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<u64>,
}

/// An email address or phone number of a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContactEntry {
    /// Label such as `work`, `home` or `mobile`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// The address or number.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_patch_operation_omits_absent_value() {
        let patch = PatchOperation {
            op: PatchOp::Remove,
            path: "/assignTo".to_string(),
            value: None,
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({"op": "remove", "path": "/assignTo"})
        );
    }

    #[test]
    fn test_new_thread_wire_shape() {
        let thread = NewThread {
            kind: ThreadType::Customer,
            text: "My printer is on fire".to_string(),
            customer: Some(CustomerRef {
                email: Some("jo@example.com".to_string()),
                ..Default::default()
            }),
            user: None,
        };
        assert_eq!(
            serde_json::to_value(&thread).unwrap(),
            serde_json::json!({
                "type": "customer",
                "text": "My printer is on fire",
                "customer": {"email": "jo@example.com"}
            })
        );
    }

    #[test]
    fn test_sort_field_wire_names() {
        assert_eq!(
            serde_json::to_value(ConversationSortField::MailboxId).unwrap(),
            "mailboxid"
        );
        assert_eq!(
            serde_json::to_value(ConversationSortField::WaitingSince).unwrap(),
            "waitingSince"
        );
        assert_eq!(
            serde_json::to_value(CustomerSortField::FirstName).unwrap(),
            "firstName"
        );
    }
}
