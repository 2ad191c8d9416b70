//! Input parameter structs for the `docs_*` tools.
//!
//! Write inputs double as request bodies: path identifiers are skipped on
//! serialization and absent optional fields are never sent.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::models::{
    ArticleRef, ArticleSort, ArticleStatus, CategoryDefaultSort, CategoryOrder, CategorySort,
    CollectionSort, ParentKind, SortOrder, Visibility,
};

/// Input for tools that only take a page number.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct PageInput {
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

// ============================================================================
// Sites
// ============================================================================

/// Identifies a Docs site.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteIdInput {
    /// Site id.
    pub site_id: String,
}

/// Input for docs_create_site.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteInput {
    /// Subdomain under docs.helpscout.net.
    pub subdomain: String,
    /// Site title.
    pub title: String,
    /// Custom domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    /// Whether the site is publicly reachable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_public_site: Option<bool>,
    /// Company name shown in the site header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Link target for the company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    /// Support email shown on the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Contact page URL shown on the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_url: Option<String>,
    /// URL of a custom CSS file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_sheet_url: Option<String>,
    /// HTML injected into the page head.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_code: Option<String>,
}

/// Input for docs_update_site. Only supplied fields are changed.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSiteInput {
    /// Site id.
    #[serde(skip_serializing)]
    pub site_id: String,
    /// Subdomain under helpscoutdocs.com.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdomain: Option<String>,
    /// Site title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Custom domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    /// Whether the site is publicly reachable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_public_site: Option<bool>,
    /// Company name shown in the site header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Link target for the company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    /// Support email shown on the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// Contact page URL shown on the site.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_url: Option<String>,
    /// URL of a custom CSS file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_sheet_url: Option<String>,
    /// HTML injected into the page head.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_code: Option<String>,
}

// ============================================================================
// Collections
// ============================================================================

/// Input for docs_list_collections. All filters are optional.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCollectionsInput {
    /// Only collections of this site.
    #[serde(default)]
    pub site_id: Option<String>,
    /// Visibility filter: all, public or private.
    #[serde(default)]
    pub visibility: Option<Visibility>,
    /// number, visibility, order, name, createdAt or updatedAt.
    #[serde(default)]
    pub sort: Option<CollectionSort>,
    /// asc or desc.
    #[serde(default)]
    pub order: Option<SortOrder>,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Identifies a collection.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionIdInput {
    /// Collection id.
    pub collection_id: String,
}

/// Input for docs_create_collection.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionInput {
    /// Owning site id.
    pub site_id: String,
    /// Collection name.
    pub name: String,
    /// public or private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Position among the site's collections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Collection description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input for docs_update_collection.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionInput {
    /// Collection id.
    #[serde(skip_serializing)]
    pub collection_id: String,
    /// New collection name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// public or private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Position among the site's collections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Collection description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// Categories
// ============================================================================

/// Input for docs_list_categories.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesInput {
    /// Collection whose categories are listed.
    pub collection_id: String,
    /// number, order, name, articleCount, createdAt or updatedAt.
    #[serde(default)]
    pub sort: Option<CategorySort>,
    /// asc or desc.
    #[serde(default)]
    pub order: Option<SortOrder>,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Identifies a category.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryIdInput {
    /// Category id.
    pub category_id: String,
}

/// Input for docs_create_category.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    /// Owning collection id.
    pub collection_id: String,
    /// Category name.
    pub name: String,
    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// public or private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Position within the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// How articles inside the category are ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<CategoryDefaultSort>,
}

/// Input for docs_update_category.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryInput {
    /// Category id.
    #[serde(skip_serializing)]
    pub category_id: String,
    /// New category name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// public or private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    /// Position within the collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    /// Default article sort: popularity, name or updatedAt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<CategoryDefaultSort>,
}

/// Input for docs_update_category_order.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryOrderInput {
    /// Collection whose categories are reordered.
    pub collection_id: String,
    /// New `(id, order)` pairs, submitted as one batch.
    pub categories: Vec<CategoryOrder>,
}

// ============================================================================
// Articles
// ============================================================================

/// Input for docs_list_articles.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListArticlesInput {
    /// Whether `parentId` names a collection or a category.
    pub parent_type: ParentKind,
    /// Collection or category id.
    pub parent_id: String,
    /// all, published or notpublished.
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    /// order, number, status, name, popularity, createdAt or updatedAt.
    #[serde(default)]
    pub sort: Option<ArticleSort>,
    /// asc or desc.
    #[serde(default)]
    pub order: Option<SortOrder>,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
    /// Results per page (server default 50, max 100).
    #[serde(default)]
    pub page_size: Option<u32>,
}

/// Input for docs_search_articles.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchArticlesInput {
    /// Free-text search query.
    pub query: String,
    /// Restrict to one collection.
    #[serde(default)]
    pub collection_id: Option<String>,
    /// Restrict to one site.
    #[serde(default)]
    pub site_id: Option<String>,
    /// all, published or notpublished.
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    /// all, public or private.
    #[serde(default)]
    pub visibility: Option<Visibility>,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Input for docs_get_article.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetArticleInput {
    /// Article id (string) or article number (integer).
    pub article_id_or_number: ArticleRef,
    /// Fetch the unpublished draft instead of the published version.
    #[serde(default)]
    pub draft: Option<bool>,
}

/// Identifies an article.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleIdInput {
    /// Article id.
    pub article_id: String,
}

/// Input for docs_create_article.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleInput {
    /// Owning collection id.
    pub collection_id: String,
    /// Article title.
    pub name: String,
    /// Article body (HTML).
    pub text: String,
    /// published or notpublished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Category ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Related article ids.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<String>>,
    /// Search keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Input for docs_update_article.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleInput {
    /// Article id.
    #[serde(skip_serializing)]
    pub article_id: String,
    /// New article title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New article body (HTML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// published or notpublished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    /// URL slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Category ids the article belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Ids of related articles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<Vec<String>>,
    /// Search keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

/// Input for docs_list_related_articles.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRelatedArticlesInput {
    /// Article id.
    pub article_id: String,
    /// all, published or notpublished.
    #[serde(default)]
    pub status: Option<ArticleStatus>,
    /// order, number, status, name, popularity, createdAt or updatedAt.
    #[serde(default)]
    pub sort: Option<ArticleSort>,
    /// asc or desc.
    #[serde(default)]
    pub order: Option<SortOrder>,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Input for docs_list_article_revisions.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRevisionsInput {
    /// Article id.
    pub article_id: String,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Identifies an article revision.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevisionIdInput {
    /// Revision id.
    pub revision_id: String,
}

// ============================================================================
// Redirects
// ============================================================================

/// Input for docs_list_redirects.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListRedirectsInput {
    /// Site id.
    pub site_id: String,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<u32>,
}

/// Identifies a redirect.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RedirectIdInput {
    /// Redirect id.
    pub redirect_id: String,
}

/// Input for docs_find_redirect.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FindRedirectInput {
    /// The old URL path to resolve.
    pub url: String,
    /// Site id.
    pub site_id: String,
}

/// Input for docs_create_redirect.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRedirectInput {
    /// Site id.
    pub site_id: String,
    /// Relative path being redirected, e.g. `/old-article`.
    pub url_mapping: String,
    /// Destination URL.
    pub redirect: String,
}

/// Input for docs_update_redirect. The API replaces all three fields.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRedirectInput {
    /// Redirect id.
    #[serde(skip_serializing)]
    pub redirect_id: String,
    /// Site the redirect belongs to.
    pub site_id: String,
    /// Source path, relative to the site root.
    pub url_mapping: String,
    /// Destination URL.
    pub redirect: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_body_skips_path_id_and_absent_fields() {
        let input: UpdateCollectionInput = serde_json::from_value(serde_json::json!({
            "collectionId": "c1",
            "name": "Billing",
            "description": null
        }))
        .unwrap();

        assert_eq!(input.collection_id, "c1");
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({"name": "Billing"})
        );
    }

    #[test]
    fn test_create_article_accepts_null_arrays() {
        let input: CreateArticleInput = serde_json::from_value(serde_json::json!({
            "collectionId": "c1",
            "name": "Resetting your password",
            "text": "<p>Click reset.</p>",
            "categories": null,
            "keywords": ["password", "login"]
        }))
        .unwrap();

        assert_eq!(input.categories, None);
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({
                "collectionId": "c1",
                "name": "Resetting your password",
                "text": "<p>Click reset.</p>",
                "keywords": ["password", "login"]
            })
        );
    }

    #[test]
    fn test_list_articles_requires_parent_type() {
        let result: Result<ListArticlesInput, _> =
            serde_json::from_value(serde_json::json!({"parentId": "X"}));
        assert!(result.is_err());

        let input: ListArticlesInput = serde_json::from_value(serde_json::json!({
            "parentType": "category",
            "parentId": "X"
        }))
        .unwrap();
        assert_eq!(input.parent_type, ParentKind::Category);
    }
}
