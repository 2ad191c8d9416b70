//! Scout - MCP server for Help Scout
//!
//! This binary runs as an MCP server using stdio transport, exposing the
//! Help Scout Docs and Inbox APIs as tools.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `HELPSCOUT_DOCS_API_KEY`: enables the `docs_*` tools
//! - `HELPSCOUT_APP_ID`, `HELPSCOUT_APP_SECRET`: enable the `inbox_*` tools
//!
//! # Usage
//!
//! ```bash
//! HELPSCOUT_DOCS_API_KEY=xxx ./scout
//! ```

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use scout::{config, docs_client::DocsClient, inbox_client::InboxClient, server};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout is reserved for MCP JSON-RPC messages
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scout=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting Scout MCP server v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env().context("Failed to load configuration")?;

    let docs = match &config.docs {
        Some(docs) => {
            tracing::debug!(base_url = %docs.base_url, "Docs API configured");
            Some(DocsClient::new(docs).context("Failed to create Docs client")?)
        }
        None => {
            tracing::warn!("HELPSCOUT_DOCS_API_KEY not set; docs_* tools will return errors");
            None
        }
    };

    let inbox = match &config.inbox {
        Some(inbox) => {
            tracing::debug!(base_url = %inbox.base_url, "Inbox API configured");
            Some(InboxClient::new(inbox).context("Failed to create Inbox client")?)
        }
        None => {
            tracing::warn!(
                "HELPSCOUT_APP_ID/HELPSCOUT_APP_SECRET not set; inbox_* tools will return errors"
            );
            None
        }
    };

    let server = server::ScoutServer::new(docs, inbox);

    tracing::info!("Server initialized, starting stdio transport");

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })
        .context("Failed to start server")?;

    tracing::info!("Server running, waiting for requests");

    service
        .waiting()
        .await
        .context("Server error during operation")?;

    tracing::info!("Server shutting down");

    Ok(())
}
