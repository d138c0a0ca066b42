//! Trigger matching
//!
//! Given a line and a cursor, the `TriggerMatcher` decides which catalog
//! snippets may expand and which range each would replace. Candidates are
//! found by trigger text, filtered by trigger kind, ordered so that
//! context-bearing snippets come first, and then gated by context: once any
//! context holds, plain snippets are suppressed.

mod classifier;
mod trigger;

use tracing::debug;

use crate::catalog::SnippetCatalog;
use crate::context::ContextValidator;
use crate::error::ContextResult;
use crate::filetype::FileTypeAliases;
use crate::models::{Position, Range, Snippet, SnippetEdit};

pub use classifier::{DefaultWordClassifier, WordClassifier};
pub use trigger::{find_trigger, is_eligible, TriggerMatch};

/// A matching request for one buffer line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRequest {
    /// Zero-based line number, copied into emitted ranges
    pub line_number: u32,
    /// Full text of the current line
    pub line: String,
    /// Cursor offset within the line, in characters
    pub character: u32,
    /// Active file type
    pub filetype: String,
    /// As-you-type request rather than an explicit one
    pub automatic: bool,
}

impl MatchRequest {
    /// Creates an explicit request
    #[must_use]
    pub fn new(
        line_number: u32,
        line: impl Into<String>,
        character: u32,
        filetype: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            line: line.into(),
            character,
            filetype: filetype.into(),
            automatic: false,
        }
    }

    /// Marks the request as automatic
    #[must_use]
    pub const fn automatic(mut self) -> Self {
        self.automatic = true;
        self
    }

    /// Cursor column, clamped to the end of the line
    fn cursor(&self) -> u32 {
        let len = self.line.chars().count();
        self.character.min(u32::try_from(len).unwrap_or(u32::MAX))
    }

    /// Line text up to the cursor
    fn before_cursor(&self) -> &str {
        match self.line.char_indices().nth(self.character as usize) {
            Some((byte, _)) => &self.line[..byte],
            None => &self.line,
        }
    }
}

/// A snippet whose trigger matched, before context gating
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    snippet: &'a Snippet,
    trigger_len: usize,
}

/// Resolves catalog snippets into edits for a cursor position
pub struct TriggerMatcher {
    classifier: Box<dyn WordClassifier>,
    allow_auto_trigger: bool,
}

impl std::fmt::Debug for TriggerMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriggerMatcher")
            .field("allow_auto_trigger", &self.allow_auto_trigger)
            .finish_non_exhaustive()
    }
}

impl Default for TriggerMatcher {
    fn default() -> Self {
        Self::new(DefaultWordClassifier::new())
    }
}

impl TriggerMatcher {
    /// Creates a matcher using `classifier` for word-boundary triggers
    #[must_use]
    pub fn new(classifier: impl WordClassifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
            allow_auto_trigger: false,
        }
    }

    /// Lets automatic requests resolve `auto_trigger` snippets
    #[must_use]
    pub const fn with_auto_trigger(mut self, allow: bool) -> Self {
        self.allow_auto_trigger = allow;
        self
    }

    /// Computes the edits offered at the request's cursor
    ///
    /// Context checks run one at a time in candidate order.
    ///
    /// # Errors
    ///
    /// Returns the validator's error if a context check fails; the rest of
    /// the walk is abandoned.
    pub async fn trigger_snippets<V>(
        &self,
        catalog: &SnippetCatalog,
        aliases: &FileTypeAliases,
        request: &MatchRequest,
        validator: &V,
    ) -> ContextResult<Vec<SnippetEdit>>
    where
        V: ContextValidator + ?Sized,
    {
        if request.line.is_empty() || (request.automatic && !self.allow_auto_trigger) {
            return Ok(Vec::new());
        }

        let mut candidates = self.candidates(catalog, aliases, request);
        // Stable: catalog order is kept within each group.
        candidates.sort_by_key(|c| c.snippet.context.is_none());
        debug!(
            filetype = %request.filetype,
            candidates = candidates.len(),
            "Trigger candidates collected"
        );

        let mut edits = Vec::new();
        let mut has_context = false;
        for candidate in candidates {
            match &candidate.snippet.context {
                Some(expression) => {
                    if !validator.check(expression).await? {
                        debug!(context = %expression, "Context rejected snippet");
                        continue;
                    }
                    has_context = true;
                }
                None if has_context => break,
                None => {}
            }
            edits.push(Self::edit_for(request, candidate));
        }

        Ok(edits)
    }

    fn candidates<'a>(
        &self,
        catalog: &'a SnippetCatalog,
        aliases: &FileTypeAliases,
        request: &MatchRequest,
    ) -> Vec<Candidate<'a>> {
        let before_cursor = request.before_cursor();

        catalog
            .filter_by_file_type(&request.filetype, aliases)
            .into_iter()
            .filter(|snippet| !request.automatic || snippet.auto_trigger)
            .filter_map(|snippet| {
                let found = find_trigger(&snippet.detector, &request.line, before_cursor)?;
                is_eligible(snippet.trigger_kind, found.pre, self.classifier.as_ref()).then(|| {
                    Candidate {
                        snippet,
                        trigger_len: found.char_len(),
                    }
                })
            })
            .collect()
    }

    fn edit_for(request: &MatchRequest, candidate: Candidate<'_>) -> SnippetEdit {
        let snippet = candidate.snippet;
        let end = request.cursor();
        let start = end.saturating_sub(candidate.trigger_len as u32);

        SnippetEdit {
            range: Range::new(
                Position::new(request.line_number, start),
                Position::new(request.line_number, end),
            ),
            new_text: snippet.body.clone(),
            description: snippet.description.clone(),
            location: snippet.location.clone(),
            priority: snippet.priority,
            origin_regex: snippet.origin_regex().map(str::to_string),
            context: snippet.context.clone(),
        }
    }
}
