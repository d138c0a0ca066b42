//! Snippet catalog module
//!
//! This module provides the `SnippetCatalog`, the in-memory snippet collection
//! rebuilt from the remote store and filtered by file type.

mod manager;

pub use manager::SnippetCatalog;
