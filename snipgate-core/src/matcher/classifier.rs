//! Word-character classification used by word-boundary triggers

/// Decides which characters belong to a word
pub trait WordClassifier: Send + Sync {
    fn is_word_char(&self, ch: char) -> bool;
}

/// Alphanumerics and `_`, plus any configured extra characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultWordClassifier {
    extra: Vec<char>,
}

impl DefaultWordClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Treats every character of `extra` as a word character too
    #[must_use]
    pub fn with_extra(extra: &str) -> Self {
        Self {
            extra: extra.chars().collect(),
        }
    }
}

impl WordClassifier for DefaultWordClassifier {
    fn is_word_char(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || self.extra.contains(&ch)
    }
}

impl<F> WordClassifier for F
where
    F: Fn(char) -> bool + Send + Sync,
{
    fn is_word_char(&self, ch: char) -> bool {
        self(ch)
    }
}
