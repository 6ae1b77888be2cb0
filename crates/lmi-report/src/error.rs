use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("unknown report tier \"{0}\" (expected minimal, standard, extensive or action-plan)")]
    UnknownTier(String),
}
