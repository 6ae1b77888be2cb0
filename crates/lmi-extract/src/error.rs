use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("malformed number \"{raw}\" in {field}: {source}")]
    MalformedNumber {
        field: &'static str,
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

impl ExtractError {
    /// Name of the field whose extractor failed.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ExtractError::MalformedNumber { field, .. } => field,
        }
    }
}
