//! Wire types for the web-search API.

use serde::{Deserialize, Serialize};

/// Top-level search response. Only the `web` block is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub web: Option<WebResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WebResults {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// One web result. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    /// The result snippet.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub age: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}
