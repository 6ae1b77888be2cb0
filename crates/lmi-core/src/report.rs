//! Partial and canonical report records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fields::{LabelledPercentage, PercentageMap, RankedEntry, SalaryBands, TimeToFill};

/// Kind of data source a [`PartialReport`] came from.
///
/// Declaration order is merge priority: earlier variants win when two
/// sources both carry a value. New sources are appended at the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    StructuredDocument,
    SearchAggregate,
}

impl SourceKind {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            SourceKind::StructuredDocument => "structured-document",
            SourceKind::SearchAggregate => "search-aggregate",
        }
    }

    /// Points this source adds to the overall confidence score.
    #[must_use]
    pub const fn confidence_weight(self) -> u8 {
        match self {
            SourceKind::StructuredDocument => 50,
            SourceKind::SearchAggregate => 35,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// One slot per semantic field. `None` / empty means "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFields {
    pub vacancy_count: Option<u64>,
    pub related_titles: Vec<RankedEntry>,
    pub salary: SalaryBands,
    pub experience_split: PercentageMap,
    pub education_levels: PercentageMap,
    pub top_skills: Vec<LabelledPercentage>,
    pub soft_skills: Vec<LabelledPercentage>,
    pub certificates: Vec<LabelledPercentage>,
    pub languages: PercentageMap,
    pub employment_type: PercentageMap,
    pub top_employers: Vec<RankedEntry>,
    pub top_intermediaries: Vec<RankedEntry>,
    pub job_boards: Vec<LabelledPercentage>,
    pub time_to_fill: TimeToFill,
}

/// A single search hit after snippet extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchVacancy {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub age: String,
    pub employer: Option<String>,
    pub salary: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

/// How often an employer appeared across search snippets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerFrequency {
    pub name: String,
    pub count: u64,
}

/// Aggregates only the search source can produce. The synthesizer maps
/// these onto canonical fields when no higher-priority source has them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchAggregate {
    pub total_found: u64,
    pub avg_salary: Option<u64>,
    pub salary_range: SalaryRange,
    pub sample_vacancies: Vec<SearchVacancy>,
    pub employers: Vec<EmployerFrequency>,
}

/// Everything one data source contributed before merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialReport {
    pub source: SourceKind,
    #[serde(default)]
    pub fields: ReportFields,
    #[serde(default)]
    pub aggregate: Option<SearchAggregate>,
    /// Fields whose extractor hit a malformed number and were left empty.
    #[serde(default)]
    pub failed_fields: Vec<String>,
}

impl PartialReport {
    #[must_use]
    pub fn new(source: SourceKind, fields: ReportFields) -> Self {
        Self {
            source,
            fields,
            aggregate: None,
            failed_fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn confidence_weight(&self) -> u8 {
        self.source.confidence_weight()
    }
}

/// What the report is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSubject {
    pub job_title: String,
    pub location: String,
}

impl ReportSubject {
    pub fn new(job_title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            location: location.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub job_title: String,
    pub location: String,
    pub generated_at: DateTime<Utc>,
    /// Tags of the sources that contributed, in priority order.
    pub data_sources: Vec<String>,
    /// Summed source weights, capped at 95.
    pub confidence_overall: u8,
}

pub const TALENT_POOL_NOTE: &str =
    "Talent pool estimation requires CBS + UWV data (pending implementation)";

/// Reserved block for talent-pool figures no integrated source provides yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalentPool {
    pub note: String,
    pub active: Option<u64>,
    pub latent: Option<u64>,
    pub not_seeking: Option<u64>,
}

impl TalentPool {
    #[must_use]
    pub fn pending() -> Self {
        Self {
            note: TALENT_POOL_NOTE.to_string(),
            active: None,
            latent: None,
            not_seeking: None,
        }
    }
}

/// The merged result handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalReport {
    pub metadata: ReportMetadata,
    pub insights: ReportFields,
    pub talent_pool: TalentPool,
    #[serde(default)]
    pub source_reports: Vec<PartialReport>,
}
