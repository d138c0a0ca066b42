//! In-memory snippet catalog

use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::filetype::FileTypeAliases;
use crate::models::{RemoteSnippet, Snippet};
use crate::store::SnippetStore;

/// Insertion-ordered snippet collection
///
/// Rebuilt in full by `refresh`/`replace_all`; `append_one` adds a single
/// record without a round trip to the store.
#[derive(Debug, Clone, Default)]
pub struct SnippetCatalog {
    snippets: Vec<Snippet>,
    /// Display index handed to the next converted snippet
    next_index: usize,
}

impl SnippetCatalog {
    /// Creates an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog with the store's current contents
    ///
    /// The fetch completes before anything is replaced, so a failed refresh
    /// leaves the previous contents intact.
    ///
    /// # Errors
    ///
    /// Returns the store error if the fetch fails.
    pub async fn refresh<S>(&mut self, store: &S) -> StoreResult<usize>
    where
        S: SnippetStore + ?Sized,
    {
        match store.fetch_all().await {
            Ok(records) => {
                self.replace_all(&records);
                debug!(count = self.snippets.len(), "Snippet catalog refreshed");
                Ok(self.snippets.len())
            }
            Err(e) => {
                warn!(error = %e, kept = self.snippets.len(), "Snippet catalog refresh failed");
                Err(e)
            }
        }
    }

    /// Replaces every snippet with conversions of `records`, preserving order
    pub fn replace_all(&mut self, records: &[RemoteSnippet]) {
        self.snippets = records
            .iter()
            .enumerate()
            .map(|(index, record)| Snippet::from_remote(record, index))
            .collect();
        self.next_index = self.snippets.len();
    }

    /// Appends one store record without refetching
    pub fn append_one(&mut self, record: &RemoteSnippet) -> &Snippet {
        let snippet = Snippet::from_remote(record, self.next_index);
        self.push(snippet)
    }

    /// Appends an already-built snippet, assigning it the next display index
    pub fn push(&mut self, mut snippet: Snippet) -> &Snippet {
        snippet.index = self.next_index;
        self.next_index += 1;
        self.snippets.push(snippet);
        &self.snippets[self.snippets.len() - 1]
    }

    /// Snippets applying to `filetype`, in catalog order
    #[must_use]
    pub fn filter_by_file_type(&self, filetype: &str, aliases: &FileTypeAliases) -> Vec<&Snippet> {
        self.snippets
            .iter()
            .filter(|s| aliases.applies(&s.filetype, filetype))
            .collect()
    }

    /// Finds a snippet named `name` in the pool for `filetype`
    #[must_use]
    pub fn find_by_name(
        &self,
        name: &str,
        filetype: &str,
        aliases: &FileTypeAliases,
    ) -> Option<&Snippet> {
        self.filter_by_file_type(filetype, aliases)
            .into_iter()
            .find(|s| s.description == name || s.prefix() == Some(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snippet> {
        self.snippets.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
