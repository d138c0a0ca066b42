//! Context validation seam
//!
//! Snippets may carry an opaque context expression. Whether it holds is decided
//! by the host through a `ContextValidator`; the matcher never parses it.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::ContextResult;

/// Host-provided evaluator for snippet context expressions
#[async_trait]
pub trait ContextValidator: Send + Sync {
    /// Evaluates `expression` against the current buffer
    ///
    /// # Errors
    /// Returns `ContextError` if the host cannot evaluate the expression
    async fn check(&self, expression: &str) -> ContextResult<bool>;
}

/// Validator with a fixed set of expressions that hold
///
/// Every expression outside the set evaluates to `false`.
#[derive(Debug, Clone, Default)]
pub struct StaticContextValidator {
    truths: HashSet<String>,
}

impl StaticContextValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `expression` as holding
    #[must_use]
    pub fn with_truth(mut self, expression: impl Into<String>) -> Self {
        self.truths.insert(expression.into());
        self
    }
}

impl<S: Into<String>> FromIterator<S> for StaticContextValidator {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            truths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl ContextValidator for StaticContextValidator {
    async fn check(&self, expression: &str) -> ContextResult<bool> {
        Ok(self.truths.contains(expression))
    }
}

/// Validator for hosts that cannot evaluate contexts; nothing holds
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectAllContexts;

#[async_trait]
impl ContextValidator for RejectAllContexts {
    async fn check(&self, _expression: &str) -> ContextResult<bool> {
        Ok(false)
    }
}
