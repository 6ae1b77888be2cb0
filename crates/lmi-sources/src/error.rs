use thiserror::Error;

/// Errors that make a whole source unavailable for one request.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No search API key is configured.
    #[error("search API key is not configured (set BRAVE_SEARCH_API_KEY)")]
    MissingApiKey,

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode PDF {locator}: {reason}")]
    Pdf { locator: String, reason: String },

    #[error("document {locator} is neither a PDF nor UTF-8 text")]
    NotUtf8 { locator: String },

    #[error("document contains no text")]
    EmptyDocument,
}
