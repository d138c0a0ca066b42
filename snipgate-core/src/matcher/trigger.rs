//! Trigger text detection and positional eligibility

use crate::models::{TriggerDetector, TriggerKind};

use super::classifier::WordClassifier;

/// Trigger text found on a line, with the text preceding it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMatch<'a> {
    /// The matched trigger text
    pub text: &'a str,
    /// Line text before the trigger
    pub pre: &'a str,
}

impl TriggerMatch<'_> {
    /// Length of the trigger in characters
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Finds the trigger text for `detector`
///
/// `before_cursor` is the line up to the cursor. Literal prefixes must end it;
/// patterns are matched against the whole `line` regardless of cursor position.
#[must_use]
pub fn find_trigger<'a>(
    detector: &'a TriggerDetector,
    line: &'a str,
    before_cursor: &'a str,
) -> Option<TriggerMatch<'a>> {
    match detector {
        TriggerDetector::Literal(prefix) => {
            if prefix.is_empty() || !before_cursor.ends_with(prefix.as_str()) {
                return None;
            }
            let split = before_cursor.len() - prefix.len();
            Some(TriggerMatch {
                text: &before_cursor[split..],
                pre: &before_cursor[..split],
            })
        }
        TriggerDetector::Pattern { regex, .. } => regex.find(line).map(|m| TriggerMatch {
            text: m.as_str(),
            pre: &line[..m.start()],
        }),
    }
}

/// Whether a trigger preceded by `pre` may fire under `kind`
#[must_use]
pub fn is_eligible(kind: TriggerKind, pre: &str, classifier: &dyn WordClassifier) -> bool {
    match kind {
        TriggerKind::InWord => true,
        TriggerKind::LineBegin => pre.trim().is_empty(),
        TriggerKind::SpaceBefore => pre.chars().next_back().is_none_or(char::is_whitespace),
        TriggerKind::WordBoundary => pre
            .chars()
            .next_back()
            .is_none_or(|ch| !classifier.is_word_char(ch)),
    }
}
