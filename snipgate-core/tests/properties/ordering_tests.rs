//! Property-based tests for candidate ordering and context gating

use proptest::prelude::*;
use snipgate_core::{
    FileTypeAliases, MatchRequest, Snippet, SnippetCatalog, StaticContextValidator, TriggerMatcher,
};

const CONTEXT: &str = "in_scope";

/// Builds a catalog where every snippet triggers on `fn`; `true` entries carry a context
fn catalog_for(with_context: &[bool]) -> SnippetCatalog {
    let mut catalog = SnippetCatalog::new();
    for (i, has_context) in with_context.iter().enumerate() {
        let snippet = Snippet::new("fn", format!("body {i}"), "go").with_location(i.to_string());
        catalog.push(if *has_context {
            snippet.with_context(CONTEXT)
        } else {
            snippet
        });
    }
    catalog
}

fn matched_locations(catalog: &SnippetCatalog, validator: &StaticContextValidator) -> Vec<String> {
    let request = MatchRequest::new(0, "fn", 2, "go");
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(TriggerMatcher::default().trigger_snippets(
            catalog,
            &FileTypeAliases::default(),
            &request,
            validator,
        ))
        .unwrap()
        .into_iter()
        .map(|edit| edit.location)
        .collect()
}

fn locations_where(with_context: &[bool], wanted: bool) -> Vec<String> {
    with_context
        .iter()
        .enumerate()
        .filter(|(_, has)| **has == wanted)
        .map(|(i, _)| i.to_string())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// When contexts hold, only context-bearing snippets are offered, in catalog order.
    #[test]
    fn passing_context_takes_precedence(with_context in prop::collection::vec(any::<bool>(), 0..12)) {
        let catalog = catalog_for(&with_context);
        let validator = StaticContextValidator::new().with_truth(CONTEXT);

        let got = matched_locations(&catalog, &validator);

        if with_context.contains(&true) {
            prop_assert_eq!(got, locations_where(&with_context, true));
        } else {
            prop_assert_eq!(got, locations_where(&with_context, false));
        }
    }

    /// When no context holds, plain snippets are offered in catalog order.
    #[test]
    fn failing_context_keeps_plain_order(with_context in prop::collection::vec(any::<bool>(), 0..12)) {
        let catalog = catalog_for(&with_context);

        let got = matched_locations(&catalog, &StaticContextValidator::new());

        prop_assert_eq!(got, locations_where(&with_context, false));
    }
}

#[test]
fn context_snippet_sorts_ahead_of_earlier_plain_snippets() {
    // A(no context), B(context), C(no context) sorts to B, A, C; B holding suppresses A and C.
    let catalog = catalog_for(&[false, true, false]);
    let validator = StaticContextValidator::new().with_truth(CONTEXT);

    assert_eq!(matched_locations(&catalog, &validator), vec!["1"]);
}
