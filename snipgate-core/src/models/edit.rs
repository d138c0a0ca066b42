//! Edit proposals handed back to the host editor.

use serde::{Deserialize, Serialize};

/// Zero-based line/character position, characters counted as Unicode scalars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Half-open range between two positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// A proposed snippet expansion over a buffer range
///
/// The engine does not render `new_text`; placeholder expansion is left to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetEdit {
    /// Range covering the trigger text, ending at the cursor
    pub range: Range,
    /// Template body to insert
    pub new_text: String,
    /// Label shown by the host
    pub description: String,
    /// Store identifier of the source snippet
    pub location: String,
    /// Tie-break hint, passed through untouched
    pub priority: i32,
    /// Trigger pattern as written, for regex snippets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_regex: Option<String>,
    /// Context expression that gated this edit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}
