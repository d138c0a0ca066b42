//! `Snipgate` Core Library
//!
//! This crate resolves which text-expansion snippets apply at a cursor
//! position and which range each would replace. Snippets come from a remote
//! store, are kept in an in-memory catalog filtered by file type, and may be
//! gated by host-evaluated context expressions.

pub mod catalog;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod filetype;
pub mod matcher;
pub mod models;
pub mod store;

pub use catalog::SnippetCatalog;
pub use config::{AppSettings, ConfigManager};
pub use context::{ContextValidator, RejectAllContexts, StaticContextValidator};
pub use engine::{EditorHost, SnippetEngine};
pub use error::{
    ConfigError, ConfigResult, ContextError, MatchError, SnipgateError, StoreError, ValidationError,
};
pub use filetype::{FileTypeAliases, WILDCARD_FILETYPE};
pub use matcher::{DefaultWordClassifier, MatchRequest, TriggerMatcher, WordClassifier};
pub use models::{
    NewRemoteSnippet, Position, Range, RemoteSnippet, Snippet, SnippetEdit, TriggerDetector,
    TriggerKind,
};
pub use store::{HttpSnippetStore, SnippetStore};
