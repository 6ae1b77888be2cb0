//! Deep dive: gather every available source and synthesize one report.

use chrono::Utc;
use lmi_core::{AppConfig, CanonicalReport, PartialReport, ReportSubject, SourceKind};
use serde::{Deserialize, Serialize};

use crate::document::{DocumentConfig, DocumentSource};
use crate::error::SourceError;
use crate::search::{SearchConfig, SearchSource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepDiveRequest {
    pub subject: ReportSubject,
    /// Path or URL of a structured report document, if one was supplied.
    #[serde(default)]
    pub document: Option<String>,
}

/// A source that contributed nothing because it failed outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFailure {
    pub source: SourceKind,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepDiveOutcome {
    pub report: CanonicalReport,
    pub failures: Vec<SourceFailure>,
}

/// The set of source adapters a deep dive draws from.
pub struct Sources {
    pub document: DocumentSource,
    pub search: SearchSource,
}

impl Sources {
    /// # Errors
    ///
    /// Returns an error if either adapter's HTTP client cannot be built or the
    /// search base URL is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, SourceError> {
        Ok(Self {
            document: DocumentSource::new(&DocumentConfig::from(config))?,
            search: SearchSource::new(&SearchConfig::from(config))?,
        })
    }

    /// Run every applicable source and synthesize the results.
    ///
    /// The document source runs only when the request names one; the search
    /// source always runs. Failing sources are logged, recorded in
    /// [`DeepDiveOutcome::failures`] and left out of the synthesis.
    pub async fn deep_dive(&self, request: &DeepDiveRequest) -> DeepDiveOutcome {
        let subject = &request.subject;
        let mut partials: Vec<PartialReport> = Vec::new();
        let mut failures: Vec<SourceFailure> = Vec::new();

        if let Some(locator) = request.document.as_deref() {
            record(
                SourceKind::StructuredDocument,
                self.document.parse(locator).await,
                &mut partials,
                &mut failures,
            );
        }

        record(
            SourceKind::SearchAggregate,
            self.search
                .collect(&subject.job_title, &subject.location)
                .await,
            &mut partials,
            &mut failures,
        );

        let report = lmi_report::synthesize(subject, Utc::now(), &partials);
        tracing::info!(
            job_title = %subject.job_title,
            location = %subject.location,
            sources = partials.len(),
            failed = failures.len(),
            confidence = report.metadata.confidence_overall,
            "deep dive complete"
        );

        DeepDiveOutcome { report, failures }
    }
}

/// Build the sources from `config` and run a deep dive.
///
/// # Errors
///
/// Only adapter construction can fail; source failures during the run are
/// reported in the outcome instead.
pub async fn deep_dive(
    config: &AppConfig,
    request: &DeepDiveRequest,
) -> Result<DeepDiveOutcome, SourceError> {
    let sources = Sources::from_config(config)?;
    Ok(sources.deep_dive(request).await)
}

fn record(
    kind: SourceKind,
    result: Result<PartialReport, SourceError>,
    partials: &mut Vec<PartialReport>,
    failures: &mut Vec<SourceFailure>,
) {
    match result {
        Ok(partial) => {
            tracing::debug!(
                source = %kind,
                failed_fields = partial.failed_fields.len(),
                "source contributed"
            );
            partials.push(partial);
        }
        Err(e) => {
            tracing::warn!(source = %kind, error = %e, "source unavailable");
            failures.push(SourceFailure {
                source: kind,
                error: e.to_string(),
            });
        }
    }
}
