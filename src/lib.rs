//! # Scout - MCP Server for Help Scout
//!
//! Scout is a Model Context Protocol (MCP) server that lets AI assistants
//! work with Help Scout: the Docs knowledge base (sites, collections,
//! categories, articles, redirects) and the Inbox help desk (conversations,
//! threads, customers, mailboxes, users, tags).
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error types and secret redaction
//! - [`transport`] - Shared HTTP request execution and response decoding
//! - [`docs_client`] - Docs API client (HTTP Basic Auth)
//! - [`inbox_client`] - Inbox API client (OAuth2 client credentials)
//! - [`server`] - MCP server implementation with tool routing
//! - [`models`] - Request descriptors, enums and token state
//! - [`tools`] - Tool input parameter structs
//!
//! ## Configuration
//!
//! Both APIs are optional; tools for an unconfigured API answer with an
//! error instead of calling the network.
//!
//! - `HELPSCOUT_DOCS_API_KEY`: Docs API key
//! - `HELPSCOUT_APP_ID` / `HELPSCOUT_APP_SECRET`: Inbox OAuth app credentials
//! - `HELPSCOUT_DOCS_BASE_URL` / `HELPSCOUT_INBOX_BASE_URL`: endpoint overrides
//! - `RUST_LOG`: Log level (e.g., `scout=debug`)
//!
//! ## Security Considerations
//!
//! The Docs key and Inbox app secret are kept in memory only. They are never
//! logged and are redacted from every error message returned to a client.
//!
//! ## Example
//!
//! ```ignore
//! use scout::config::Config;
//! use scout::docs_client::DocsClient;
//!
//! async fn example() -> Result<(), scout::error::ScoutError> {
//!     let config = Config::from_env()?;
//!     if let Some(docs) = &config.docs {
//!         let client = DocsClient::new(docs)?;
//!         let sites = client.list_sites(None).await?;
//!         println!("{sites:#}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod docs_client;
pub mod error;
pub mod inbox_client;
pub mod models;
pub mod server;
pub mod tools;
pub mod transport;
