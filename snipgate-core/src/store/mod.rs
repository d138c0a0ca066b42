//! Remote snippet store access
//!
//! This module defines the `SnippetStore` seam used by the catalog and the
//! `HttpSnippetStore` implementation that talks JSON over HTTP(S).

mod client;

pub use client::{HttpSnippetStore, SnippetStore};
