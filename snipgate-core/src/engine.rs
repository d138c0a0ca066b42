//! Snippet engine
//!
//! `SnippetEngine` owns the catalog and wires it to the remote store, the
//! host editor and the context validator. It is the entry point hosts use for
//! matching requests and for creating new snippets.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::catalog::SnippetCatalog;
use crate::config::AppSettings;
use crate::context::ContextValidator;
use crate::error::{ContextResult, Result, StoreResult, ValidationError};
use crate::filetype::FileTypeAliases;
use crate::matcher::{DefaultWordClassifier, MatchRequest, TriggerMatcher};
use crate::models::{NewRemoteSnippet, Snippet, SnippetEdit};
use crate::store::SnippetStore;

/// Prompt shown when asking for a new snippet's name
pub const NAME_PROMPT: &str = "Snippet name";

/// Capabilities the host editor lends to the engine
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Asks the user for a line of input; `None` when dismissed
    async fn prompt(&self, title: &str) -> Option<String>;

    /// Shows an informational message to the user
    fn show_message(&self, message: &str);
}

/// Snippet resolution engine bound to one store, validator and host
pub struct SnippetEngine<S, V, H> {
    store: S,
    validator: V,
    host: H,
    catalog: SnippetCatalog,
    aliases: FileTypeAliases,
    matcher: TriggerMatcher,
}

impl<S, V, H> std::fmt::Debug for SnippetEngine<S, V, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnippetEngine")
            .field("catalog", &self.catalog)
            .field("aliases", &self.aliases)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

impl<S, V, H> SnippetEngine<S, V, H>
where
    S: SnippetStore,
    V: ContextValidator,
    H: EditorHost,
{
    /// Creates an engine with an empty catalog and default matching rules
    pub fn new(store: S, validator: V, host: H) -> Self {
        Self {
            store,
            validator,
            host,
            catalog: SnippetCatalog::new(),
            aliases: FileTypeAliases::default(),
            matcher: TriggerMatcher::default(),
        }
    }

    /// Creates an engine using the matching and file-type sections of `settings`
    pub fn from_settings(store: S, validator: V, host: H, settings: &AppSettings) -> Self {
        let classifier = DefaultWordClassifier::with_extra(&settings.matching.extra_word_chars);
        Self::new(store, validator, host)
            .with_aliases(FileTypeAliases::with_overrides(&settings.filetypes.aliases))
            .with_matcher(
                TriggerMatcher::new(classifier)
                    .with_auto_trigger(settings.matching.allow_auto_trigger),
            )
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: FileTypeAliases) -> Self {
        self.aliases = aliases;
        self
    }

    #[must_use]
    pub fn with_matcher(mut self, matcher: TriggerMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    /// Loads the catalog for the first time
    ///
    /// # Errors
    ///
    /// Returns the store error; the catalog stays empty and matching yields nothing.
    pub async fn initialize(&mut self) -> StoreResult<usize> {
        self.refresh().await
    }

    /// Rebuilds the catalog from the store
    ///
    /// # Errors
    ///
    /// Returns the store error; the previous catalog is kept.
    pub async fn refresh(&mut self) -> StoreResult<usize> {
        self.catalog.refresh(&self.store).await
    }

    /// Edits offered for the request's cursor position
    ///
    /// # Errors
    ///
    /// Returns the context validator's error if a context check fails.
    pub async fn trigger_snippets(&self, request: &MatchRequest) -> ContextResult<Vec<SnippetEdit>> {
        self.matcher
            .trigger_snippets(&self.catalog, &self.aliases, request, &self.validator)
            .await
    }

    /// Creates a snippet for `filetype` with `content`, asking the host for its name
    ///
    /// The catalog is refreshed first so the duplicate-name check sees the
    /// store's current state. A dismissed prompt or a duplicate name ends the
    /// flow with `Ok(None)` and nothing is submitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is empty, or if the refresh or the
    /// submission fails.
    pub async fn create_snippet(&mut self, filetype: &str, content: &str) -> Result<Option<Snippet>> {
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyContent.into());
        }

        self.refresh().await?;

        let Some(name) = self.host.prompt(NAME_PROMPT).await else {
            debug!("Snippet creation dismissed");
            return Ok(None);
        };
        let name = name.trim();
        if name.is_empty() {
            debug!("Snippet creation dismissed with empty name");
            return Ok(None);
        }

        if self.catalog.find_by_name(name, filetype, &self.aliases).is_some() {
            let rejection = ValidationError::DuplicateName {
                name: name.to_string(),
                filetype: filetype.to_string(),
            };
            warn!(snippet_name = name, filetype, "Rejected duplicate snippet name");
            self.host.show_message(&rejection.to_string());
            return Ok(None);
        }

        let created = self
            .store
            .create(&NewRemoteSnippet::new(name, content, filetype))
            .await?;
        let snippet = self.catalog.append_one(&created).clone();

        info!(snippet_name = name, filetype, location = %snippet.location, "Created snippet");
        self.host
            .show_message(&format!("Created snippet \"{}\"", snippet.description));
        Ok(Some(snippet))
    }

    /// Snippets applying to `filetype`, in catalog order
    pub fn snippets_for(&self, filetype: &str) -> Vec<&Snippet> {
        self.catalog.filter_by_file_type(filetype, &self.aliases)
    }

    /// Snippet file names associated with `filetype`
    pub fn snippet_file_names(&self, filetype: &str) -> Vec<String> {
        self.aliases.snippet_file_names(filetype)
    }

    pub const fn catalog(&self) -> &SnippetCatalog {
        &self.catalog
    }

    pub const fn aliases(&self) -> &FileTypeAliases {
        &self.aliases
    }

    pub const fn host(&self) -> &H {
        &self.host
    }
}
