//! MCP server implementation for Scout.
//!
//! This module defines the `ScoutServer` struct that implements the MCP
//! `ServerHandler` trait, exposing Help Scout Docs and Inbox operations as
//! tools. Every tool returns the same envelope: `Ok` carries the API's JSON
//! response pretty-printed, `Err` becomes an `isError` tool result whose text
//! starts with `Error:`.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use serde_json::Value;

use crate::docs_client::DocsClient;
use crate::error::ScoutError;
use crate::inbox_client::InboxClient;
use crate::tools::{
    ArticleIdInput, CategoryIdInput, CollectionIdInput, ConversationIdInput,
    CreateArticleInput, CreateCategoryInput, CreateCollectionInput, CreateConversationInput,
    CreateCustomerInput, CreateNoteInput, CreatePhoneThreadInput, CreateRedirectInput,
    CreateReplyInput, CreateSiteInput, CustomerIdInput, FindRedirectInput, GetArticleInput,
    GetConversationInput, ListArticlesInput, ListCategoriesInput, ListCollectionsInput,
    ListConversationsInput, ListCustomersInput, ListRedirectsInput, ListRelatedArticlesInput,
    ListRevisionsInput, ListThreadsInput, ListUsersInput, MailboxIdInput, PageInput,
    RedirectIdInput, RevisionIdInput, SearchArticlesInput, SiteIdInput, UpdateArticleInput,
    UpdateCategoryInput, UpdateCategoryOrderInput, UpdateCollectionInput,
    UpdateConversationInput, UpdateConversationTagsInput, UpdateRedirectInput, UpdateSiteInput,
};

/// Prefix that marks a failure envelope.
const ERROR_PREFIX: &str = "Error:";

/// The Scout MCP server.
///
/// Either client may be absent; its tools then answer with a
/// "not configured" failure without touching the network.
#[derive(Clone)]
pub struct ScoutServer {
    /// Docs API client, present when a Docs key is configured.
    docs: Option<DocsClient>,
    /// Inbox API client, present when OAuth app credentials are configured.
    inbox: Option<InboxClient>,
    /// Tool router for MCP tool dispatch.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ScoutServer {
    /// Creates a new Scout server instance.
    pub fn new(docs: Option<DocsClient>, inbox: Option<InboxClient>) -> Self {
        Self {
            docs,
            inbox,
            tool_router: Self::tool_router(),
        }
    }

    /// Verifies the server is running and reports which APIs are enabled.
    #[tool(description = "Test connectivity to the Scout MCP server. Returns 'pong' and which Help Scout APIs are configured.")]
    fn ping(&self) -> String {
        tracing::debug!("ping tool called");
        let state = |enabled: bool| if enabled { "configured" } else { "not configured" };
        format!(
            "pong (docs: {}, inbox: {})",
            state(self.docs.is_some()),
            state(self.inbox.is_some())
        )
    }

    // ========================================================================
    // Docs: sites
    // ========================================================================

    #[tool(description = "List Help Scout Docs sites. Returns one page of results.")]
    async fn docs_list_sites(
        &self,
        Parameters(input): Parameters<PageInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "docs_list_sites tool called");
        let result = self.docs()?.list_sites(input.page).await;
        self.respond("docs_list_sites", result)
    }

    #[tool(description = "Get a single Docs site by id.")]
    async fn docs_get_site(
        &self,
        Parameters(input): Parameters<SiteIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(site_id = %input.site_id, "docs_get_site tool called");
        let result = self.docs()?.get_site(&input.site_id).await;
        self.respond("docs_get_site", result)
    }

    #[tool(description = "Create a Docs site. Subdomain and title are required. Returns the created site.")]
    async fn docs_create_site(
        &self,
        Parameters(input): Parameters<CreateSiteInput>,
    ) -> Result<String, String> {
        tracing::debug!(subdomain = %input.subdomain, "docs_create_site tool called");
        let result = self.docs()?.create_site(&input).await;
        self.respond("docs_create_site", result)
    }

    #[tool(description = "Update a Docs site. Only the supplied fields change. Returns the updated site.")]
    async fn docs_update_site(
        &self,
        Parameters(input): Parameters<UpdateSiteInput>,
    ) -> Result<String, String> {
        tracing::debug!(site_id = %input.site_id, "docs_update_site tool called");
        let result = self.docs()?.update_site(&input).await;
        self.respond("docs_update_site", result)
    }

    #[tool(description = "Delete a Docs site.")]
    async fn docs_delete_site(
        &self,
        Parameters(input): Parameters<SiteIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(site_id = %input.site_id, "docs_delete_site tool called");
        let result = self.docs()?.delete_site(&input.site_id).await;
        self.respond("docs_delete_site", result)
    }

    // ========================================================================
    // Docs: collections
    // ========================================================================

    #[tool(description = "List Docs collections. Filter by site and visibility; sort and paginate (1-based page).")]
    async fn docs_list_collections(
        &self,
        Parameters(input): Parameters<ListCollectionsInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "docs_list_collections tool called");
        let result = self.docs()?.list_collections(&input).await;
        self.respond("docs_list_collections", result)
    }

    #[tool(description = "Get a single Docs collection by id.")]
    async fn docs_get_collection(
        &self,
        Parameters(input): Parameters<CollectionIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(collection_id = %input.collection_id, "docs_get_collection tool called");
        let result = self.docs()?.get_collection(&input.collection_id).await;
        self.respond("docs_get_collection", result)
    }

    #[tool(description = "Create a Docs collection in a site. siteId and name are required. Returns the created collection.")]
    async fn docs_create_collection(
        &self,
        Parameters(input): Parameters<CreateCollectionInput>,
    ) -> Result<String, String> {
        tracing::debug!(site_id = %input.site_id, name = %input.name, "docs_create_collection tool called");
        let result = self.docs()?.create_collection(&input).await;
        self.respond("docs_create_collection", result)
    }

    #[tool(description = "Update a Docs collection. Only the supplied fields change. Returns the updated collection.")]
    async fn docs_update_collection(
        &self,
        Parameters(input): Parameters<UpdateCollectionInput>,
    ) -> Result<String, String> {
        tracing::debug!(collection_id = %input.collection_id, "docs_update_collection tool called");
        let result = self.docs()?.update_collection(&input).await;
        self.respond("docs_update_collection", result)
    }

    #[tool(description = "Delete a Docs collection together with its categories and articles.")]
    async fn docs_delete_collection(
        &self,
        Parameters(input): Parameters<CollectionIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(collection_id = %input.collection_id, "docs_delete_collection tool called");
        let result = self.docs()?.delete_collection(&input.collection_id).await;
        self.respond("docs_delete_collection", result)
    }

    // ========================================================================
    // Docs: categories
    // ========================================================================

    #[tool(description = "List the categories of a Docs collection.")]
    async fn docs_list_categories(
        &self,
        Parameters(input): Parameters<ListCategoriesInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "docs_list_categories tool called");
        let result = self.docs()?.list_categories(&input).await;
        self.respond("docs_list_categories", result)
    }

    #[tool(description = "Get a single Docs category by id.")]
    async fn docs_get_category(
        &self,
        Parameters(input): Parameters<CategoryIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(category_id = %input.category_id, "docs_get_category tool called");
        let result = self.docs()?.get_category(&input.category_id).await;
        self.respond("docs_get_category", result)
    }

    #[tool(description = "Create a category in a Docs collection. collectionId and name are required.")]
    async fn docs_create_category(
        &self,
        Parameters(input): Parameters<CreateCategoryInput>,
    ) -> Result<String, String> {
        tracing::debug!(collection_id = %input.collection_id, name = %input.name, "docs_create_category tool called");
        let result = self.docs()?.create_category(&input).await;
        self.respond("docs_create_category", result)
    }

    #[tool(description = "Update a Docs category. Only the supplied fields change.")]
    async fn docs_update_category(
        &self,
        Parameters(input): Parameters<UpdateCategoryInput>,
    ) -> Result<String, String> {
        tracing::debug!(category_id = %input.category_id, "docs_update_category tool called");
        let result = self.docs()?.update_category(&input).await;
        self.respond("docs_update_category", result)
    }

    #[tool(description = "Reorder the categories of a collection. Takes a list of {id, order} pairs submitted as one batch.")]
    async fn docs_update_category_order(
        &self,
        Parameters(input): Parameters<UpdateCategoryOrderInput>,
    ) -> Result<String, String> {
        tracing::debug!(collection_id = %input.collection_id, count = input.categories.len(), "docs_update_category_order tool called");
        let result = self.docs()?.update_category_order(&input).await;
        self.respond("docs_update_category_order", result)
    }

    #[tool(description = "Delete a Docs category. Articles in it are kept.")]
    async fn docs_delete_category(
        &self,
        Parameters(input): Parameters<CategoryIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(category_id = %input.category_id, "docs_delete_category tool called");
        let result = self.docs()?.delete_category(&input.category_id).await;
        self.respond("docs_delete_category", result)
    }

    // ========================================================================
    // Docs: articles
    // ========================================================================

    #[tool(description = "List articles of a collection or a category. parentType selects which ('collection' or 'category'); parentId is its id.")]
    async fn docs_list_articles(
        &self,
        Parameters(input): Parameters<ListArticlesInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "docs_list_articles tool called");
        let result = self.docs()?.list_articles(&input).await;
        self.respond("docs_list_articles", result)
    }

    #[tool(description = "Search Docs articles by text. Optionally narrow by collection, site, status or visibility.")]
    async fn docs_search_articles(
        &self,
        Parameters(input): Parameters<SearchArticlesInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "docs_search_articles tool called");
        let result = self.docs()?.search_articles(&input).await;
        self.respond("docs_search_articles", result)
    }

    #[tool(description = "Get a Docs article by id or article number. Set draft=true to fetch the unpublished draft.")]
    async fn docs_get_article(
        &self,
        Parameters(input): Parameters<GetArticleInput>,
    ) -> Result<String, String> {
        tracing::debug!(article = %input.article_id_or_number, draft = ?input.draft, "docs_get_article tool called");
        let result = self.docs()?.get_article(&input).await;
        self.respond("docs_get_article", result)
    }

    #[tool(description = "Create a Docs article. collectionId, name and text are required. Returns the created article.")]
    async fn docs_create_article(
        &self,
        Parameters(input): Parameters<CreateArticleInput>,
    ) -> Result<String, String> {
        tracing::debug!(collection_id = %input.collection_id, name = %input.name, "docs_create_article tool called");
        let result = self.docs()?.create_article(&input).await;
        self.respond("docs_create_article", result)
    }

    #[tool(description = "Update a Docs article. Only the supplied fields change. Returns the updated article.")]
    async fn docs_update_article(
        &self,
        Parameters(input): Parameters<UpdateArticleInput>,
    ) -> Result<String, String> {
        tracing::debug!(article_id = %input.article_id, "docs_update_article tool called");
        let result = self.docs()?.update_article(&input).await;
        self.respond("docs_update_article", result)
    }

    #[tool(description = "Delete a Docs article.")]
    async fn docs_delete_article(
        &self,
        Parameters(input): Parameters<ArticleIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(article_id = %input.article_id, "docs_delete_article tool called");
        let result = self.docs()?.delete_article(&input.article_id).await;
        self.respond("docs_delete_article", result)
    }

    #[tool(description = "List articles related to a Docs article.")]
    async fn docs_list_related_articles(
        &self,
        Parameters(input): Parameters<ListRelatedArticlesInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "docs_list_related_articles tool called");
        let result = self.docs()?.list_related_articles(&input).await;
        self.respond("docs_list_related_articles", result)
    }

    #[tool(description = "List saved revisions of a Docs article.")]
    async fn docs_list_article_revisions(
        &self,
        Parameters(input): Parameters<ListRevisionsInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "docs_list_article_revisions tool called");
        let result = self.docs()?.list_article_revisions(&input).await;
        self.respond("docs_list_article_revisions", result)
    }

    #[tool(description = "Get a single Docs article revision by id.")]
    async fn docs_get_article_revision(
        &self,
        Parameters(input): Parameters<RevisionIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(revision_id = %input.revision_id, "docs_get_article_revision tool called");
        let result = self.docs()?.get_article_revision(&input.revision_id).await;
        self.respond("docs_get_article_revision", result)
    }

    // ========================================================================
    // Docs: redirects
    // ========================================================================

    #[tool(description = "List the URL redirects of a Docs site.")]
    async fn docs_list_redirects(
        &self,
        Parameters(input): Parameters<ListRedirectsInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "docs_list_redirects tool called");
        let result = self.docs()?.list_redirects(&input).await;
        self.respond("docs_list_redirects", result)
    }

    #[tool(description = "Get a single Docs redirect by id.")]
    async fn docs_get_redirect(
        &self,
        Parameters(input): Parameters<RedirectIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(redirect_id = %input.redirect_id, "docs_get_redirect tool called");
        let result = self.docs()?.get_redirect(&input.redirect_id).await;
        self.respond("docs_get_redirect", result)
    }

    #[tool(description = "Find the redirect configured for a URL path on a Docs site.")]
    async fn docs_find_redirect(
        &self,
        Parameters(input): Parameters<FindRedirectInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "docs_find_redirect tool called");
        let result = self.docs()?.find_redirect(&input).await;
        self.respond("docs_find_redirect", result)
    }

    #[tool(description = "Create a Docs redirect from urlMapping to redirect on a site.")]
    async fn docs_create_redirect(
        &self,
        Parameters(input): Parameters<CreateRedirectInput>,
    ) -> Result<String, String> {
        tracing::debug!(site_id = %input.site_id, "docs_create_redirect tool called");
        let result = self.docs()?.create_redirect(&input).await;
        self.respond("docs_create_redirect", result)
    }

    #[tool(description = "Update a Docs redirect. siteId, urlMapping and redirect are all required.")]
    async fn docs_update_redirect(
        &self,
        Parameters(input): Parameters<UpdateRedirectInput>,
    ) -> Result<String, String> {
        tracing::debug!(redirect_id = %input.redirect_id, "docs_update_redirect tool called");
        let result = self.docs()?.update_redirect(&input).await;
        self.respond("docs_update_redirect", result)
    }

    #[tool(description = "Delete a Docs redirect.")]
    async fn docs_delete_redirect(
        &self,
        Parameters(input): Parameters<RedirectIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(redirect_id = %input.redirect_id, "docs_delete_redirect tool called");
        let result = self.docs()?.delete_redirect(&input.redirect_id).await;
        self.respond("docs_delete_redirect", result)
    }

    // ========================================================================
    // Inbox: conversations
    // ========================================================================

    #[tool(description = "List Inbox conversations. Filter by mailbox, status, tag, assignee, modifiedSince or search query; sort and paginate (1-based page).")]
    async fn inbox_list_conversations(
        &self,
        Parameters(input): Parameters<ListConversationsInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "inbox_list_conversations tool called");
        let result = self.inbox()?.list_conversations(&input).await;
        self.respond("inbox_list_conversations", result)
    }

    #[tool(description = "Get a single Inbox conversation. Set embedThreads=true to include its threads.")]
    async fn inbox_get_conversation(
        &self,
        Parameters(input): Parameters<GetConversationInput>,
    ) -> Result<String, String> {
        tracing::debug!(conversation_id = input.conversation_id, "inbox_get_conversation tool called");
        let result = self.inbox()?.get_conversation(&input).await;
        self.respond("inbox_get_conversation", result)
    }

    #[tool(description = "Create an Inbox conversation with its initial threads.")]
    async fn inbox_create_conversation(
        &self,
        Parameters(input): Parameters<CreateConversationInput>,
    ) -> Result<String, String> {
        tracing::debug!(mailbox_id = input.mailbox_id, "inbox_create_conversation tool called");
        let result = self.inbox()?.create_conversation(&input).await;
        self.respond("inbox_create_conversation", result)
    }

    #[tool(description = "Update an Inbox conversation with one patch operation {op, path, value}, e.g. op=replace path=/status value=closed.")]
    async fn inbox_update_conversation(
        &self,
        Parameters(input): Parameters<UpdateConversationInput>,
    ) -> Result<String, String> {
        tracing::debug!(conversation_id = input.conversation_id, path = %input.path, "inbox_update_conversation tool called");
        let result = self.inbox()?.update_conversation(&input).await;
        self.respond("inbox_update_conversation", result)
    }

    #[tool(description = "Delete an Inbox conversation.")]
    async fn inbox_delete_conversation(
        &self,
        Parameters(input): Parameters<ConversationIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(conversation_id = input.conversation_id, "inbox_delete_conversation tool called");
        let result = self.inbox()?.delete_conversation(input.conversation_id).await;
        self.respond("inbox_delete_conversation", result)
    }

    #[tool(description = "Replace the tags of an Inbox conversation. An empty list removes all tags.")]
    async fn inbox_update_conversation_tags(
        &self,
        Parameters(input): Parameters<UpdateConversationTagsInput>,
    ) -> Result<String, String> {
        tracing::debug!(conversation_id = input.conversation_id, "inbox_update_conversation_tags tool called");
        let result = self.inbox()?.update_conversation_tags(&input).await;
        self.respond("inbox_update_conversation_tags", result)
    }

    // ========================================================================
    // Inbox: threads
    // ========================================================================

    #[tool(description = "List the threads of an Inbox conversation.")]
    async fn inbox_list_threads(
        &self,
        Parameters(input): Parameters<ListThreadsInput>,
    ) -> Result<String, String> {
        tracing::debug!(conversation_id = input.conversation_id, "inbox_list_threads tool called");
        let result = self.inbox()?.list_threads(&input).await;
        self.respond("inbox_list_threads", result)
    }

    #[tool(description = "Send a reply on an Inbox conversation. conversationId and text are required.")]
    async fn inbox_create_reply(
        &self,
        Parameters(input): Parameters<CreateReplyInput>,
    ) -> Result<String, String> {
        tracing::debug!(conversation_id = input.conversation_id, "inbox_create_reply tool called");
        let result = self.inbox()?.create_reply(&input).await;
        self.respond("inbox_create_reply", result)
    }

    #[tool(description = "Add an internal note to an Inbox conversation. conversationId and text are required.")]
    async fn inbox_create_note(
        &self,
        Parameters(input): Parameters<CreateNoteInput>,
    ) -> Result<String, String> {
        tracing::debug!(conversation_id = input.conversation_id, "inbox_create_note tool called");
        let result = self.inbox()?.create_note(&input).await;
        self.respond("inbox_create_note", result)
    }

    #[tool(description = "Log a phone call on an Inbox conversation. conversationId, text and customerId are required.")]
    async fn inbox_create_phone_thread(
        &self,
        Parameters(input): Parameters<CreatePhoneThreadInput>,
    ) -> Result<String, String> {
        tracing::debug!(conversation_id = input.conversation_id, "inbox_create_phone_thread tool called");
        let result = self.inbox()?.create_phone_thread(&input).await;
        self.respond("inbox_create_phone_thread", result)
    }

    // ========================================================================
    // Inbox: customers, mailboxes, users, tags
    // ========================================================================

    #[tool(description = "List Inbox customers. Filter by mailbox, name, modifiedSince or search query; sort and paginate.")]
    async fn inbox_list_customers(
        &self,
        Parameters(input): Parameters<ListCustomersInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "inbox_list_customers tool called");
        let result = self.inbox()?.list_customers(&input).await;
        self.respond("inbox_list_customers", result)
    }

    #[tool(description = "Get a single Inbox customer by id.")]
    async fn inbox_get_customer(
        &self,
        Parameters(input): Parameters<CustomerIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(customer_id = input.customer_id, "inbox_get_customer tool called");
        let result = self.inbox()?.get_customer(input.customer_id).await;
        self.respond("inbox_get_customer", result)
    }

    #[tool(description = "Create an Inbox customer. firstName is required.")]
    async fn inbox_create_customer(
        &self,
        Parameters(input): Parameters<CreateCustomerInput>,
    ) -> Result<String, String> {
        tracing::debug!("inbox_create_customer tool called");
        let result = self.inbox()?.create_customer(&input).await;
        self.respond("inbox_create_customer", result)
    }

    #[tool(description = "List Inbox mailboxes.")]
    async fn inbox_list_mailboxes(
        &self,
        Parameters(input): Parameters<PageInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "inbox_list_mailboxes tool called");
        let result = self.inbox()?.list_mailboxes(input.page).await;
        self.respond("inbox_list_mailboxes", result)
    }

    #[tool(description = "Get a single Inbox mailbox by id.")]
    async fn inbox_get_mailbox(
        &self,
        Parameters(input): Parameters<MailboxIdInput>,
    ) -> Result<String, String> {
        tracing::debug!(mailbox_id = input.mailbox_id, "inbox_get_mailbox tool called");
        let result = self.inbox()?.get_mailbox(input.mailbox_id).await;
        self.respond("inbox_get_mailbox", result)
    }

    #[tool(description = "List Inbox users. Filter by email or mailbox access.")]
    async fn inbox_list_users(
        &self,
        Parameters(input): Parameters<ListUsersInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "inbox_list_users tool called");
        let result = self.inbox()?.list_users(&input).await;
        self.respond("inbox_list_users", result)
    }

    #[tool(description = "Get the Inbox user the configured OAuth app acts as.")]
    async fn inbox_get_current_user(&self) -> Result<String, String> {
        tracing::debug!("inbox_get_current_user tool called");
        let result = self.inbox()?.get_current_user().await;
        self.respond("inbox_get_current_user", result)
    }

    #[tool(description = "List Inbox tags.")]
    async fn inbox_list_tags(
        &self,
        Parameters(input): Parameters<PageInput>,
    ) -> Result<String, String> {
        tracing::debug!(?input, "inbox_list_tags tool called");
        let result = self.inbox()?.list_tags(input.page).await;
        self.respond("inbox_list_tags", result)
    }
}

impl ScoutServer {
    /// Docs client, or the "not configured" failure envelope.
    fn docs(&self) -> Result<&DocsClient, String> {
        self.docs
            .as_ref()
            .ok_or_else(|| failure(&ScoutError::docs_not_configured().to_string()))
    }

    /// Inbox client, or the "not configured" failure envelope.
    fn inbox(&self) -> Result<&InboxClient, String> {
        self.inbox
            .as_ref()
            .ok_or_else(|| failure(&ScoutError::inbox_not_configured().to_string()))
    }

    /// Converts a client result into the tool envelope.
    fn respond(&self, tool: &str, result: Result<Value, ScoutError>) -> Result<String, String> {
        match result {
            Ok(value) => serde_json::to_string_pretty(&value)
                .map_err(|e| failure(&format!("failed to serialize response: {}", e))),
            Err(e) => {
                let sanitized = self.sanitize_error(&e);
                tracing::error!(tool = tool, error = %sanitized, "Tool call failed");
                Err(failure(&sanitized))
            }
        }
    }

    /// Sanitizes an error message to remove any configured credential.
    fn sanitize_error(&self, error: &ScoutError) -> String {
        let docs_key = self
            .docs
            .as_ref()
            .map(|c| c.api_key_for_sanitization())
            .unwrap_or_default();
        let app_secret = self
            .inbox
            .as_ref()
            .map(|c| c.secret_for_sanitization())
            .unwrap_or_default();
        error.sanitized_display(&[docs_key, app_secret])
    }
}

/// Builds the failure envelope text.
fn failure(message: &str) -> String {
    format!("{} {}", ERROR_PREFIX, message)
}

#[tool_handler]
impl ServerHandler for ScoutServer {
    /// Returns server information for the MCP initialize handshake.
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Scout exposes the Help Scout Docs API (docs_* tools: sites, collections, \
                 categories, articles, redirects) and the Help Scout Inbox API (inbox_* tools: \
                 conversations, threads, customers, mailboxes, users, tags). Each call returns \
                 one page of raw API JSON; pass 'page' to fetch more. Use 'ping' to see which \
                 APIs are configured."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> ScoutServer {
        ScoutServer::new(None, None)
    }

    #[test]
    fn test_server_info_has_tools_capability() {
        let info = unconfigured().get_info();
        assert!(info.instructions.is_some());
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn test_every_tool_is_prefixed() {
        let server = unconfigured();
        let tools = server.tool_router.list_all();
        let docs = tools.iter().filter(|t| t.name.starts_with("docs_")).count();
        let inbox = tools.iter().filter(|t| t.name.starts_with("inbox_")).count();

        assert_eq!(docs, 31);
        assert_eq!(inbox, 18);
        assert_eq!(tools.len(), docs + inbox + 1);
    }

    #[test]
    fn test_ping_reports_configuration() {
        assert_eq!(
            unconfigured().ping(),
            "pong (docs: not configured, inbox: not configured)"
        );
    }

    #[tokio::test]
    async fn test_docs_tool_without_key_is_not_configured() {
        let result = unconfigured()
            .docs_get_site(Parameters(SiteIdInput {
                site_id: "abc123".to_string(),
            }))
            .await;

        let message = result.unwrap_err();
        assert!(message.starts_with("Error:"));
        assert!(message.contains("not configured"));
    }

    #[tokio::test]
    async fn test_inbox_tool_without_credentials_is_not_configured() {
        let result = unconfigured()
            .inbox_list_conversations(Parameters(ListConversationsInput::default()))
            .await;

        let message = result.unwrap_err();
        assert!(message.starts_with("Error:"));
        assert!(message.contains("Help Scout Inbox API is not configured"));

        let message = unconfigured().inbox_get_current_user().await.unwrap_err();
        assert!(message.contains("not configured"));
    }

    #[test]
    fn test_respond_success_is_pretty_json() {
        let result = unconfigured().respond("t", Ok(serde_json::json!({"id": "abc"})));
        assert_eq!(result.unwrap(), "{\n  \"id\": \"abc\"\n}");
    }

    #[test]
    fn test_respond_empty_object_is_success() {
        let result = unconfigured().respond("t", Ok(serde_json::json!({})));
        assert_eq!(result.unwrap(), "{}");
    }

    #[test]
    fn test_respond_error_carries_status_and_body() {
        let result = unconfigured().respond(
            "t",
            Err(ScoutError::Api {
                status: 404,
                body: "Not Found".to_string(),
            }),
        );
        let message = result.unwrap_err();
        assert!(message.starts_with("Error:"));
        assert!(message.contains("404"));
        assert!(message.contains("Not Found"));
    }

    mod end_to_end {
        use super::*;
        use crate::config::{DocsConfig, InboxConfig};
        use serde_json::json;
        use wiremock::matchers::{basic_auth, bearer_token, body_json, method, path, query_param};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        fn docs_server(mock: &MockServer, api_key: &str) -> ScoutServer {
            let docs = DocsClient::new(&DocsConfig {
                base_url: mock.uri(),
                api_key: api_key.to_string(),
            })
            .unwrap();
            ScoutServer::new(Some(docs), None)
        }

        #[tokio::test]
        async fn test_create_collection_returns_created_resource() {
            let mock = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/collections"))
                .and(query_param("reload", "true"))
                .and(basic_auth("key", "X"))
                .and(body_json(json!({"siteId": "s1", "name": "Guides"})))
                .respond_with(
                    ResponseTemplate::new(201).set_body_json(json!({"collection": {"id": "c1"}})),
                )
                .expect(1)
                .mount(&mock)
                .await;

            let input = serde_json::from_value(json!({"siteId": "s1", "name": "Guides"})).unwrap();
            let text = docs_server(&mock, "key")
                .docs_create_collection(Parameters(input))
                .await
                .unwrap();

            let value: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(value, json!({"collection": {"id": "c1"}}));
        }

        #[tokio::test]
        async fn test_api_failure_is_redacted() {
            let mock = MockServer::start().await;
            Mock::given(method("GET"))
                .and(path("/sites/s1"))
                .respond_with(ResponseTemplate::new(403).set_body_string("bad key secret-key"))
                .mount(&mock)
                .await;

            let message = docs_server(&mock, "secret-key")
                .docs_get_site(Parameters(SiteIdInput {
                    site_id: "s1".to_string(),
                }))
                .await
                .unwrap_err();

            assert!(message.starts_with("Error:"));
            assert!(message.contains("403"));
            assert!(message.contains("[REDACTED]"));
            assert!(!message.contains("secret-key"));
        }

        #[tokio::test]
        async fn test_reply_on_empty_response_is_empty_object() {
            let mock = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/oauth2/token"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({"access_token": "tok", "expires_in": 7200})),
                )
                .expect(1)
                .mount(&mock)
                .await;
            Mock::given(method("POST"))
                .and(path("/conversations/42/reply"))
                .and(bearer_token("tok"))
                .and(body_json(json!({"text": "hello"})))
                .respond_with(ResponseTemplate::new(201))
                .expect(1)
                .mount(&mock)
                .await;

            let inbox = InboxClient::new(&InboxConfig {
                base_url: mock.uri(),
                app_id: "id".to_string(),
                app_secret: "secret".to_string(),
            })
            .unwrap();
            let server = ScoutServer::new(None, Some(inbox));

            let input =
                serde_json::from_value(json!({"conversationId": 42, "text": "hello"})).unwrap();
            let text = server.inbox_create_reply(Parameters(input)).await.unwrap();
            assert_eq!(text, "{}");
            assert_eq!(server.ping(), "pong (docs: not configured, inbox: configured)");
        }
    }
}
