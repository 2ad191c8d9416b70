//! HTTP client for the Help Scout Docs API.
//!
//! Authenticates every request with HTTP Basic Auth: the API key is the
//! username and the password is the fixed placeholder `X`. The client holds
//! no mutable state.
//!
//! Creates and updates append `?reload=true` so the API answers with the
//! full resource instead of an empty acknowledgement.
//!
//! # Security
//!
//! The API key is never logged.

use reqwest::Client;
use serde_json::Value;

use crate::config::DocsConfig;
use crate::error::ScoutError;
use crate::models::{segment, ApiRequest, ArticleParent, QueryParams};
use crate::tools::{
    CreateArticleInput, CreateCategoryInput, CreateCollectionInput, CreateRedirectInput,
    CreateSiteInput, FindRedirectInput, GetArticleInput, ListArticlesInput, ListCategoriesInput,
    ListCollectionsInput, ListRedirectsInput, ListRelatedArticlesInput, ListRevisionsInput,
    SearchArticlesInput, UpdateArticleInput, UpdateCategoryInput, UpdateCategoryOrderInput,
    UpdateCollectionInput, UpdateRedirectInput, UpdateSiteInput,
};
use crate::transport::{self, Auth};

/// Basic Auth password expected by the Docs API.
const BASIC_AUTH_PASSWORD: &str = "X";

/// Appends the `reload=true` flag used by every create and update.
fn reload(path: String) -> String {
    format!("{}?reload=true", path)
}

/// Client for the Help Scout Docs API.
///
/// # Example
///
/// ```ignore
/// let client = DocsClient::new(&docs_config)?;
/// let sites = client.list_sites(None).await?;
/// ```
#[derive(Clone)]
pub struct DocsClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL, e.g. `https://docsapi.helpscout.net/v1`.
    base_url: String,

    /// API key, sent as the Basic Auth username.
    /// SECURITY: Never log this value!
    api_key: String,
}

impl DocsClient {
    /// Creates a Docs client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &DocsConfig) -> Result<Self, ScoutError> {
        Ok(Self {
            http: transport::build_http_client()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Returns the API key for redacting error messages. Never log it.
    pub(crate) fn api_key_for_sanitization(&self) -> &str {
        &self.api_key
    }

    /// Sends one request with Basic Auth.
    async fn send(&self, request: ApiRequest) -> Result<Value, ScoutError> {
        let auth = Auth::Basic {
            username: &self.api_key,
            password: BASIC_AUTH_PASSWORD,
        };
        transport::send(&self.http, &self.base_url, request, auth).await
    }

    fn body<T: serde::Serialize>(input: &T) -> Result<Value, ScoutError> {
        serde_json::to_value(input).map_err(ScoutError::Serialization)
    }

    // ========================================================================
    // Sites
    // ========================================================================

    /// Lists Docs sites.
    pub async fn list_sites(&self, page: Option<u32>) -> Result<Value, ScoutError> {
        let query = QueryParams::new().with("page", page);
        self.send(ApiRequest::get("/sites").with_query(query)).await
    }

    /// Gets a single site.
    pub async fn get_site(&self, site_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::get(format!("/sites/{}", segment(site_id))))
            .await
    }

    /// Creates a site.
    pub async fn create_site(&self, input: &CreateSiteInput) -> Result<Value, ScoutError> {
        let request = ApiRequest::post(reload("/sites".to_string())).with_body(Self::body(input)?);
        self.send(request).await
    }

    /// Updates a site.
    pub async fn update_site(&self, input: &UpdateSiteInput) -> Result<Value, ScoutError> {
        let path = reload(format!("/sites/{}", segment(&input.site_id)));
        self.send(ApiRequest::put(path).with_body(Self::body(input)?))
            .await
    }

    /// Deletes a site.
    pub async fn delete_site(&self, site_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::delete(format!("/sites/{}", segment(site_id))))
            .await
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// Lists collections, optionally restricted to one site.
    pub async fn list_collections(
        &self,
        input: &ListCollectionsInput,
    ) -> Result<Value, ScoutError> {
        let query = QueryParams::new()
            .with("siteId", input.site_id.as_deref())
            .with_enum("visibility", input.visibility.as_ref())?
            .with_enum("sort", input.sort.as_ref())?
            .with_enum("order", input.order.as_ref())?
            .with("page", input.page);
        self.send(ApiRequest::get("/collections").with_query(query))
            .await
    }

    /// Gets a single collection.
    pub async fn get_collection(&self, collection_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::get(format!(
            "/collections/{}",
            segment(collection_id)
        )))
        .await
    }

    /// Creates a collection.
    pub async fn create_collection(
        &self,
        input: &CreateCollectionInput,
    ) -> Result<Value, ScoutError> {
        let request =
            ApiRequest::post(reload("/collections".to_string())).with_body(Self::body(input)?);
        self.send(request).await
    }

    /// Updates a collection.
    pub async fn update_collection(
        &self,
        input: &UpdateCollectionInput,
    ) -> Result<Value, ScoutError> {
        let path = reload(format!("/collections/{}", segment(&input.collection_id)));
        self.send(ApiRequest::put(path).with_body(Self::body(input)?))
            .await
    }

    /// Deletes a collection and everything in it.
    pub async fn delete_collection(&self, collection_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::delete(format!(
            "/collections/{}",
            segment(collection_id)
        )))
        .await
    }

    // ========================================================================
    // Categories
    // ========================================================================

    /// Lists the categories of a collection.
    pub async fn list_categories(&self, input: &ListCategoriesInput) -> Result<Value, ScoutError> {
        let path = format!("/collections/{}/categories", segment(&input.collection_id));
        let query = QueryParams::new()
            .with_enum("sort", input.sort.as_ref())?
            .with_enum("order", input.order.as_ref())?
            .with("page", input.page);
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    /// Gets a single category.
    pub async fn get_category(&self, category_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::get(format!(
            "/categories/{}",
            segment(category_id)
        )))
        .await
    }

    /// Creates a category.
    pub async fn create_category(&self, input: &CreateCategoryInput) -> Result<Value, ScoutError> {
        let request =
            ApiRequest::post(reload("/categories".to_string())).with_body(Self::body(input)?);
        self.send(request).await
    }

    /// Updates a category.
    pub async fn update_category(&self, input: &UpdateCategoryInput) -> Result<Value, ScoutError> {
        let path = reload(format!("/categories/{}", segment(&input.category_id)));
        self.send(ApiRequest::put(path).with_body(Self::body(input)?))
            .await
    }

    /// Reorders categories of a collection in a single batch request.
    ///
    /// # Errors
    ///
    /// Returns `ScoutError::Validation` without calling the API if the list is empty.
    pub async fn update_category_order(
        &self,
        input: &UpdateCategoryOrderInput,
    ) -> Result<Value, ScoutError> {
        if input.categories.is_empty() {
            return Err(ScoutError::validation(
                "categories must contain at least one (id, order) pair",
            ));
        }

        let path = format!("/collections/{}/categories", segment(&input.collection_id));
        let body = serde_json::json!({ "categories": input.categories });
        self.send(ApiRequest::put(path).with_body(body)).await
    }

    /// Deletes a category. Its articles are kept.
    pub async fn delete_category(&self, category_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::delete(format!(
            "/categories/{}",
            segment(category_id)
        )))
        .await
    }

    // ========================================================================
    // Articles
    // ========================================================================

    /// Lists the articles of a collection or a category.
    pub async fn list_articles(&self, input: &ListArticlesInput) -> Result<Value, ScoutError> {
        let parent = ArticleParent::new(input.parent_type, input.parent_id.as_str());
        let query = QueryParams::new()
            .with_enum("status", input.status.as_ref())?
            .with_enum("sort", input.sort.as_ref())?
            .with_enum("order", input.order.as_ref())?
            .with("page", input.page)
            .with("pageSize", input.page_size);
        self.send(ApiRequest::get(parent.articles_path()).with_query(query))
            .await
    }

    /// Full-text article search.
    pub async fn search_articles(&self, input: &SearchArticlesInput) -> Result<Value, ScoutError> {
        let query = QueryParams::new()
            .with("query", Some(input.query.as_str()))
            .with("collectionId", input.collection_id.as_deref())
            .with("siteId", input.site_id.as_deref())
            .with_enum("status", input.status.as_ref())?
            .with_enum("visibility", input.visibility.as_ref())?
            .with("page", input.page);
        self.send(ApiRequest::get("/search/articles").with_query(query))
            .await
    }

    /// Gets an article by id or number, optionally its unpublished draft.
    pub async fn get_article(&self, input: &GetArticleInput) -> Result<Value, ScoutError> {
        let path = format!("/articles/{}", segment(&input.article_id_or_number));
        let query = QueryParams::new().with("draft", input.draft.filter(|d| *d));
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    /// Creates an article.
    pub async fn create_article(&self, input: &CreateArticleInput) -> Result<Value, ScoutError> {
        let request =
            ApiRequest::post(reload("/articles".to_string())).with_body(Self::body(input)?);
        self.send(request).await
    }

    /// Updates an article.
    pub async fn update_article(&self, input: &UpdateArticleInput) -> Result<Value, ScoutError> {
        let path = reload(format!("/articles/{}", segment(&input.article_id)));
        self.send(ApiRequest::put(path).with_body(Self::body(input)?))
            .await
    }

    /// Deletes an article.
    pub async fn delete_article(&self, article_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::delete(format!(
            "/articles/{}",
            segment(article_id)
        )))
        .await
    }

    /// Lists articles related to an article.
    pub async fn list_related_articles(
        &self,
        input: &ListRelatedArticlesInput,
    ) -> Result<Value, ScoutError> {
        let path = format!("/articles/{}/related", segment(&input.article_id));
        let query = QueryParams::new()
            .with_enum("status", input.status.as_ref())?
            .with_enum("sort", input.sort.as_ref())?
            .with_enum("order", input.order.as_ref())?
            .with("page", input.page);
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    /// Lists the saved revisions of an article.
    pub async fn list_article_revisions(
        &self,
        input: &ListRevisionsInput,
    ) -> Result<Value, ScoutError> {
        let path = format!("/articles/{}/revisions", segment(&input.article_id));
        let query = QueryParams::new().with("page", input.page);
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    /// Gets one article revision.
    pub async fn get_article_revision(&self, revision_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::get(format!(
            "/revisions/{}",
            segment(revision_id)
        )))
        .await
    }

    // ========================================================================
    // Redirects
    // ========================================================================

    /// Lists the URL redirects of a site.
    pub async fn list_redirects(&self, input: &ListRedirectsInput) -> Result<Value, ScoutError> {
        let path = format!("/redirects/site/{}", segment(&input.site_id));
        let query = QueryParams::new().with("page", input.page);
        self.send(ApiRequest::get(path).with_query(query)).await
    }

    /// Gets a single redirect.
    pub async fn get_redirect(&self, redirect_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::get(format!(
            "/redirects/{}",
            segment(redirect_id)
        )))
        .await
    }

    /// Resolves the redirect configured for a URL path.
    pub async fn find_redirect(&self, input: &FindRedirectInput) -> Result<Value, ScoutError> {
        let query = QueryParams::new()
            .with("url", Some(input.url.as_str()))
            .with("siteId", Some(input.site_id.as_str()));
        self.send(ApiRequest::get("/redirects").with_query(query))
            .await
    }

    /// Creates a redirect.
    pub async fn create_redirect(&self, input: &CreateRedirectInput) -> Result<Value, ScoutError> {
        let request =
            ApiRequest::post(reload("/redirects".to_string())).with_body(Self::body(input)?);
        self.send(request).await
    }

    /// Updates a redirect.
    pub async fn update_redirect(&self, input: &UpdateRedirectInput) -> Result<Value, ScoutError> {
        let path = reload(format!("/redirects/{}", segment(&input.redirect_id)));
        self.send(ApiRequest::put(path).with_body(Self::body(input)?))
            .await
    }

    /// Deletes a redirect.
    pub async fn delete_redirect(&self, redirect_id: &str) -> Result<Value, ScoutError> {
        self.send(ApiRequest::delete(format!(
            "/redirects/{}",
            segment(redirect_id)
        )))
        .await
    }
}
