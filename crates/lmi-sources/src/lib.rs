//! Source adapters that turn external material into [`lmi_core::PartialReport`]s,
//! and the deep-dive pipeline that merges them.
//!
//! - [`DocumentSource`]: a report document (PDF or plain text, local or remote)
//!   run through every field extractor.
//! - [`SearchSource`]: vacancy snippets from a web-search API, aggregated.
//!
//! A failing source never aborts a deep dive; it is recorded as a
//! [`SourceFailure`] and the remaining sources are synthesized.

pub mod document;
pub mod error;
pub mod pipeline;
pub mod search;
pub mod types;

pub use document::{DocumentConfig, DocumentSource};
pub use error::SourceError;
pub use pipeline::{deep_dive, DeepDiveOutcome, DeepDiveRequest, SourceFailure, Sources};
pub use search::{SearchConfig, SearchSource};
pub use types::SearchResult;
