//! Shared domain types and configuration for the labour-market intelligence
//! workspace.
//!
//! Everything here is plain data: the typed shapes the field extractors
//! produce, the per-source [`PartialReport`], the merged [`CanonicalReport`],
//! and the environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod fields;
pub mod report;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use fields::{LabelledPercentage, PercentageMap, RankedEntry, SalaryBands, TimeToFill};
pub use report::{
    CanonicalReport, EmployerFrequency, PartialReport, ReportFields, ReportMetadata,
    ReportSubject, SalaryRange, SearchAggregate, SearchVacancy, SourceKind, TalentPool,
    TALENT_POOL_NOTE,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
