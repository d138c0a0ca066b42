//! File-type aliasing
//!
//! Closely related file types share snippet pools: a `typescriptreact` buffer
//! also sees `typescript` snippets, and every file type sees the `all` pool.

use std::collections::BTreeMap;

/// File type whose snippets apply everywhere
pub const WILDCARD_FILETYPE: &str = "all";

/// Extension used for associated snippet file names
const SNIPPET_FILE_EXTENSION: &str = "snippets";

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("javascriptreact", "javascript"),
    ("typescriptreact", "typescript"),
    ("sh", "bash"),
    ("zsh", "bash"),
];

/// Maps a file type to the additional pools it draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTypeAliases {
    aliases: BTreeMap<String, Vec<String>>,
}

impl Default for FileTypeAliases {
    fn default() -> Self {
        let mut aliases: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (filetype, alias) in BUILTIN_ALIASES {
            aliases
                .entry((*filetype).to_string())
                .or_default()
                .push((*alias).to_string());
        }
        Self { aliases }
    }
}

impl FileTypeAliases {
    /// An alias table with no entries; only the wildcard pool is shared
    #[must_use]
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// Built-in table with configured entries merged on top
    #[must_use]
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut table = Self::default();
        for (filetype, aliases) in overrides {
            for alias in aliases {
                table.add(filetype, alias);
            }
        }
        table
    }

    /// Lets `filetype` also draw from `alias`'s pool
    pub fn add(&mut self, filetype: &str, alias: &str) {
        let entry = self.aliases.entry(filetype.to_string()).or_default();
        if !entry.iter().any(|a| a == alias) {
            entry.push(alias.to_string());
        }
    }

    /// File types whose pools apply to `filetype`
    ///
    /// Order: the file type itself, its aliases, then the wildcard. No duplicates.
    #[must_use]
    pub fn resolve(&self, filetype: &str) -> Vec<String> {
        let mut resolved = vec![filetype.to_string()];
        let aliases = self.aliases.get(filetype).into_iter().flatten();
        for name in aliases.map(String::as_str).chain([WILDCARD_FILETYPE]) {
            if !resolved.iter().any(|r| r == name) {
                resolved.push(name.to_string());
            }
        }
        resolved
    }

    /// Whether a snippet declared for `snippet_filetype` applies to `filetype`
    #[must_use]
    pub fn applies(&self, snippet_filetype: &str, filetype: &str) -> bool {
        snippet_filetype == filetype
            || snippet_filetype == WILDCARD_FILETYPE
            || self
                .aliases
                .get(filetype)
                .is_some_and(|aliases| aliases.iter().any(|a| a == snippet_filetype))
    }

    /// Snippet file names associated with `filetype`, in resolution order
    #[must_use]
    pub fn snippet_file_names(&self, filetype: &str) -> Vec<String> {
        self.resolve(filetype)
            .into_iter()
            .map(|name| format!("{name}.{SNIPPET_FILE_EXTENSION}"))
            .collect()
    }
}
