//! Running every extractor over one document.

use lmi_core::ReportFields;

use crate::error::ExtractError;

/// Fields extracted from one text, plus the extractors that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionOutcome {
    pub fields: ReportFields,
    /// Names of fields left empty because their number did not parse.
    pub failed_fields: Vec<String>,
}

/// Run every field extractor over `text`. A failing extractor only blanks
/// its own field.
#[must_use]
pub fn extract_all(text: &str) -> ExtractionOutcome {
    let mut failed = Vec::new();

    let fields = ReportFields {
        vacancy_count: or_blank(crate::vacancy_count(text), &mut failed),
        related_titles: or_blank(crate::related_titles(text), &mut failed),
        salary: or_blank(crate::salary(text), &mut failed),
        experience_split: or_blank(crate::experience_split(text), &mut failed),
        education_levels: or_blank(crate::education_levels(text), &mut failed),
        top_skills: or_blank(crate::top_skills(text), &mut failed),
        soft_skills: or_blank(crate::soft_skills(text), &mut failed),
        certificates: or_blank(crate::certificates(text), &mut failed),
        languages: or_blank(crate::languages(text), &mut failed),
        employment_type: or_blank(crate::employment_type(text), &mut failed),
        top_employers: or_blank(crate::top_employers(text), &mut failed),
        top_intermediaries: or_blank(crate::top_intermediaries(text), &mut failed),
        job_boards: or_blank(crate::job_boards(text), &mut failed),
        time_to_fill: or_blank(crate::time_to_fill(text), &mut failed),
    };

    ExtractionOutcome {
        fields,
        failed_fields: failed,
    }
}

fn or_blank<T: Default>(result: Result<T, ExtractError>, failed: &mut Vec<String>) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(field = e.field(), error = %e, "field extraction failed");
        failed.push(e.field().to_string());
        T::default()
    })
}
