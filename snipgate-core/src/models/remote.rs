//! Raw snippet records exchanged with the remote store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `GET {base}/snippets`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetsResponse {
    /// Catalog records in store order
    #[serde(default)]
    pub snippets: Vec<RemoteSnippet>,
}

/// A snippet record as stored remotely
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSnippet {
    /// Store identifier; numeric ids are normalised to strings
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Snippet name, doubles as the literal trigger
    pub name: String,
    /// Template body
    pub content: String,
    /// File type the snippet belongs to
    pub language: String,
    /// Whether the record is publicly visible
    #[serde(default)]
    pub public: bool,
    /// Creation time reported by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time reported by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST {base}/snippets`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRemoteSnippet {
    /// Template body
    pub content: String,
    /// Snippet name
    pub name: String,
    /// Always `true` for snippets created by the engine
    pub public: bool,
    /// File type the snippet belongs to
    pub language: String,
}

impl NewRemoteSnippet {
    /// Creates a public snippet record ready for submission
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            name: name.into(),
            public: true,
            language: language.into(),
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
