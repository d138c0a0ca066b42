//! Snippet model for text-expansion templates.

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{MatchError, MatchResult};

use super::RemoteSnippet;

/// Positional rule deciding whether a matched trigger may fire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Fires anywhere, even in the middle of a word
    InWord,
    /// Fires only when nothing but whitespace precedes the trigger
    LineBegin,
    /// Fires at line start or after whitespace
    SpaceBefore,
    /// Fires at line start or after a non-word character
    #[default]
    WordBoundary,
}

/// How a snippet recognises its trigger text on the current line
#[derive(Debug, Clone)]
pub enum TriggerDetector {
    /// Text before the cursor must end with this literal
    Literal(String),
    /// First match of the pattern anywhere on the line
    Pattern {
        /// Compiled matcher
        regex: Regex,
        /// Pattern as written, kept for display
        source: String,
    },
}

impl TriggerDetector {
    /// Creates a literal prefix detector
    #[must_use]
    pub fn literal(prefix: impl Into<String>) -> Self {
        Self::Literal(prefix.into())
    }

    /// Compiles a pattern detector
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidPattern` if the pattern does not compile.
    pub fn pattern(source: impl Into<String>) -> MatchResult<Self> {
        let source = source.into();
        let regex = Regex::new(&source).map_err(|e| MatchError::InvalidPattern {
            pattern: source.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self::Pattern { regex, source })
    }

    /// Returns the literal prefix, if this is a literal detector
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        match self {
            Self::Literal(prefix) => Some(prefix),
            Self::Pattern { .. } => None,
        }
    }

    /// Returns the uncompiled pattern, if this is a pattern detector
    #[must_use]
    pub fn origin_regex(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Pattern { source, .. } => Some(source),
        }
    }
}

impl PartialEq for TriggerDetector {
    fn eq(&self, other: &Self) -> bool {
        self.prefix() == other.prefix() && self.origin_regex() == other.origin_regex()
    }
}

impl Eq for TriggerDetector {}

impl Serialize for TriggerDetector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "snake_case")]
        enum Repr<'a> {
            Literal(&'a str),
            Pattern(&'a str),
        }

        match self {
            Self::Literal(prefix) => Repr::Literal(prefix),
            Self::Pattern { source, .. } => Repr::Pattern(source),
        }
        .serialize(serializer)
    }
}

/// A text-expansion template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Store identifier, referenced by emitted edits
    pub location: String,
    /// Display order within the catalog
    pub index: usize,
    /// Trigger recognition rule
    pub detector: TriggerDetector,
    /// Template content, opaque to the matcher
    pub body: String,
    /// Human-readable label
    pub description: String,
    /// Positional rule for the trigger
    pub trigger_kind: TriggerKind,
    /// Whether the snippet may fire on as-you-type requests
    pub auto_trigger: bool,
    /// Host-evaluated precondition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Tie-break hint for the host
    pub priority: i32,
    /// File type, or `all`
    pub filetype: String,
}

impl Snippet {
    /// Creates a literal-prefix snippet with word-boundary triggering
    #[must_use]
    pub fn new(
        prefix: impl Into<String>,
        body: impl Into<String>,
        filetype: impl Into<String>,
    ) -> Self {
        let prefix = prefix.into();
        Self {
            location: String::new(),
            index: 0,
            description: prefix.clone(),
            detector: TriggerDetector::Literal(prefix),
            body: body.into(),
            trigger_kind: TriggerKind::default(),
            auto_trigger: false,
            context: None,
            priority: 0,
            filetype: filetype.into(),
        }
    }

    /// Converts a raw store record
    ///
    /// The record name becomes both prefix and description.
    #[must_use]
    pub fn from_remote(record: &RemoteSnippet, index: usize) -> Self {
        Self {
            location: record.id.clone(),
            index,
            ..Self::new(
                record.name.clone(),
                record.content.clone(),
                record.language.clone(),
            )
        }
    }

    /// Replaces the literal prefix with a compiled pattern
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidPattern` if the pattern does not compile.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> MatchResult<Self> {
        self.detector = TriggerDetector::pattern(pattern)?;
        Ok(self)
    }

    #[must_use]
    pub const fn with_trigger_kind(mut self, trigger_kind: TriggerKind) -> Self {
        self.trigger_kind = trigger_kind;
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    #[must_use]
    pub const fn with_auto_trigger(mut self, auto_trigger: bool) -> Self {
        self.auto_trigger = auto_trigger;
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Literal prefix, if the snippet is not pattern-triggered
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.detector.prefix()
    }

    /// Pattern as written, if the snippet is pattern-triggered
    #[must_use]
    pub fn origin_regex(&self) -> Option<&str> {
        self.detector.origin_regex()
    }
}
