//! MCP tool inputs for Scout.
//!
//! This module defines the input types for each MCP tool, with JSON Schema
//! derivation for MCP tool discovery. Argument shape validation happens in
//! the rmcp `Parameters` extractor before a handler runs.

mod docs_inputs;
mod inbox_inputs;

pub use docs_inputs::*;
pub use inbox_inputs::*;
