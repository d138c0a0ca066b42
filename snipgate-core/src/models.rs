//! Core data models for `Snipgate`
//!
//! This module defines the primary data structures used throughout `Snipgate`,
//! including snippets, raw store records, and the edits handed to the host.

mod edit;
mod remote;
mod snippet;

pub use edit::{Position, Range, SnippetEdit};
pub use remote::{NewRemoteSnippet, RemoteSnippet, SnippetsResponse};
pub use snippet::{Snippet, TriggerDetector, TriggerKind};
