//! Enumerations and identifiers for the Help Scout Docs API.
//!
//! Remote resources themselves stay opaque `serde_json::Value`s; only the
//! values this crate puts on the wire are typed.

use std::fmt;

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// Visibility of a collection or category. `all` is only meaningful as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Any visibility (filter only).
    All,
    /// Visible on the public site.
    Public,
    /// Visible only to signed-in users.
    Private,
}

/// Publication status of an article. `all` is only meaningful as a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Any status (filter only).
    All,
    /// Published.
    Published,
    /// Draft, never published.
    #[serde(rename = "notpublished")]
    NotPublished,
}

/// Sort field for collection listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CollectionSort {
    Number,
    Visibility,
    Order,
    Name,
    CreatedAt,
    UpdatedAt,
}

/// Sort field for category listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CategorySort {
    Number,
    Order,
    Name,
    ArticleCount,
    CreatedAt,
    UpdatedAt,
}

/// Default ordering of articles inside a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum CategoryDefaultSort {
    Popularity,
    Name,
    UpdatedAt,
}

/// Sort field for article listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ArticleSort {
    Order,
    Number,
    Status,
    Name,
    Popularity,
    CreatedAt,
    UpdatedAt,
}

/// Which hierarchy an article listing walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParentKind {
    /// List the articles of a collection.
    Collection,
    /// List the articles of a category.
    Category,
}

/// The container whose articles are listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleParent {
    Collection(String),
    Category(String),
}

impl ArticleParent {
    /// Pairs an explicit discriminant with an id.
    pub fn new(kind: ParentKind, id: impl Into<String>) -> Self {
        match kind {
            ParentKind::Collection => ArticleParent::Collection(id.into()),
            ParentKind::Category => ArticleParent::Category(id.into()),
        }
    }

    /// Path of the article listing for this parent.
    pub fn articles_path(&self) -> String {
        match self {
            ArticleParent::Collection(id) => {
                format!("/collections/{}/articles", super::segment(id))
            }
            ArticleParent::Category(id) => {
                format!("/categories/{}/articles", super::segment(id))
            }
        }
    }
}

/// An article addressed either by id or by its site-wide number.
///
/// The API resolves both forms through the same path slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ArticleRef {
    /// Article number as shown in the UI.
    Number(u64),
    /// Opaque article id.
    Id(String),
}

impl fmt::Display for ArticleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArticleRef::Number(n) => write!(f, "{}", n),
            ArticleRef::Id(id) => f.write_str(id),
        }
    }
}

/// One entry of a batch category reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryOrder {
    /// Category id.
    pub id: String,
    /// New position (1-based).
    pub order: u32,
}
