//! Data models for the Help Scout APIs.
//!
//! Remote resources are passed through as opaque JSON. This module holds the
//! request descriptor, the OAuth token, and the enums and nested payloads the
//! clients put on the wire.

mod common;
mod docs;
mod inbox;
mod token;

pub use common::*;
pub use docs::*;
pub use inbox::*;
pub use token::*;
