//! Property-based tests for trigger detection
//!
//! Literal prefixes match exactly when the text before the cursor ends with
//! them, and line-begin snippets fire only after leading whitespace.

use proptest::prelude::*;
use snipgate_core::{
    FileTypeAliases, MatchRequest, Snippet, SnippetCatalog, SnippetEdit, StaticContextValidator,
    TriggerKind, TriggerMatcher,
};

// ========== Strategies ==========

fn arb_prefix() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_map(|s| s)
}

/// Arbitrary text that may precede a trigger
fn arb_lead() -> impl Strategy<Value = String> {
    "[a-zA-Z (.,]{0,20}".prop_map(|s| s)
}

fn arb_indent() -> impl Strategy<Value = String> {
    "[ \t]{0,6}".prop_map(|s| s)
}

// ========== Helpers ==========

fn match_line(snippet: Snippet, line: &str) -> Vec<SnippetEdit> {
    let mut catalog = SnippetCatalog::new();
    catalog.push(snippet);
    let character = line.chars().count() as u32;
    let request = MatchRequest::new(0, line, character, "text");

    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(TriggerMatcher::default().trigger_snippets(
            &catalog,
            &FileTypeAliases::default(),
            &request,
            &StaticContextValidator::new(),
        ))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A line ending in the prefix at the cursor yields exactly one edit
    /// covering the prefix.
    #[test]
    fn prefix_at_cursor_matches(prefix in arb_prefix(), lead in arb_lead()) {
        let snippet = Snippet::new(prefix.clone(), "body", "text")
            .with_trigger_kind(TriggerKind::InWord);
        let line = format!("{lead}{prefix}");

        let edits = match_line(snippet, &line);

        prop_assert_eq!(edits.len(), 1);
        let end = line.chars().count() as u32;
        prop_assert_eq!(edits[0].range.end.character, end);
        prop_assert_eq!(edits[0].range.start.character, end - prefix.len() as u32);
    }

    /// One extra trailing character breaks the suffix match.
    #[test]
    fn trailing_character_prevents_match(
        prefix in arb_prefix(),
        lead in arb_lead(),
        extra in "[0-9]",
    ) {
        let snippet = Snippet::new(prefix.clone(), "body", "text")
            .with_trigger_kind(TriggerKind::InWord);
        let line = format!("{lead}{prefix}{extra}");

        prop_assert!(match_line(snippet, &line).is_empty());
    }

    /// Line-begin snippets fire after any amount of leading whitespace.
    #[test]
    fn line_begin_after_indent(indent in arb_indent()) {
        let snippet = Snippet::new("//", "// comment", "all")
            .with_trigger_kind(TriggerKind::LineBegin);
        let line = format!("{indent}//");

        prop_assert_eq!(match_line(snippet, &line).len(), 1);
    }

    /// Line-begin snippets never fire after other text on the line.
    #[test]
    fn line_begin_rejects_code_before(word in "[a-z]{1,6}", indent in arb_indent()) {
        let snippet = Snippet::new("//", "// comment", "all")
            .with_trigger_kind(TriggerKind::LineBegin);
        let line = format!("{indent}{word} //");

        prop_assert!(match_line(snippet, &line).is_empty());
    }
}
