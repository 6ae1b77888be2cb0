//! Merge zero or more partial reports into one [`CanonicalReport`].

use chrono::{DateTime, Utc};
use lmi_core::{
    CanonicalReport, PartialReport, PercentageMap, RankedEntry, ReportFields, ReportMetadata,
    ReportSubject, SalaryBands, SearchAggregate, SourceKind, TalentPool, TimeToFill,
};

/// Upper bound for the overall confidence score, however many sources agree.
pub const CONFIDENCE_CAP: u8 = 95;

/// Whether a collection-valued field carries anything.
trait Presence {
    fn is_present(&self) -> bool;
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for PercentageMap {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// Merge `partials` into a canonical report for `subject`.
///
/// Partials are ranked by [`lmi_core::SourceKind`] priority (stable, so two
/// partials of the same kind keep the caller's order). For every field the
/// first ranked partial with a value wins. When no structured document is
/// among the partials, three fields are filled from the search aggregate:
///
/// - `vacancy_count` ← `total_found`
/// - `salary.median` ← `avg_salary`
/// - `top_employers` ← ranked employer frequencies
///
/// Confidence is the sum of the contributing sources' weights, capped at
/// [`CONFIDENCE_CAP`]. No partials is valid and yields empty fields and a
/// confidence of 0.
#[must_use]
pub fn synthesize(
    subject: &ReportSubject,
    generated_at: DateTime<Utc>,
    partials: &[PartialReport],
) -> CanonicalReport {
    let mut ranked: Vec<&PartialReport> = partials.iter().collect();
    ranked.sort_by_key(|partial| partial.source);

    let insights = merge_fields(&ranked);

    let weight_sum: u32 = ranked
        .iter()
        .map(|partial| u32::from(partial.confidence_weight()))
        .sum();
    let confidence_overall =
        u8::try_from(weight_sum.min(u32::from(CONFIDENCE_CAP))).unwrap_or(CONFIDENCE_CAP);

    let mut data_sources: Vec<String> = ranked
        .iter()
        .map(|partial| partial.source.tag().to_string())
        .collect();
    data_sources.dedup();

    tracing::debug!(
        job_title = %subject.job_title,
        location = %subject.location,
        sources = ranked.len(),
        confidence = confidence_overall,
        "synthesized canonical report"
    );

    CanonicalReport {
        metadata: ReportMetadata {
            job_title: subject.job_title.clone(),
            location: subject.location.clone(),
            generated_at,
            data_sources,
            confidence_overall,
        },
        insights,
        talent_pool: TalentPool::pending(),
        source_reports: ranked.into_iter().cloned().collect(),
    }
}

fn merge_fields(ranked: &[&PartialReport]) -> ReportFields {
    // Search data only stands in for a missing document, never for a field
    // the document lacks.
    let has_document = ranked
        .iter()
        .any(|partial| partial.source == SourceKind::StructuredDocument);
    let aggregate = if has_document {
        None
    } else {
        ranked.iter().find_map(|partial| partial.aggregate.as_ref())
    };

    let vacancy_count = first_some(ranked, |f| f.vacancy_count)
        .or_else(|| aggregate.map(|a| a.total_found));

    let salary = SalaryBands {
        junior: first_some(ranked, |f| f.salary.junior),
        medior: first_some(ranked, |f| f.salary.medior),
        senior: first_some(ranked, |f| f.salary.senior),
        median: first_some(ranked, |f| f.salary.median).or_else(|| aggregate.and_then(|a| a.avg_salary)),
    };

    let mut top_employers = first_present(ranked, |f| &f.top_employers);
    if top_employers.is_empty() {
        top_employers = aggregate.map(employers_from_aggregate).unwrap_or_default();
    }

    ReportFields {
        vacancy_count,
        related_titles: first_present(ranked, |f| &f.related_titles),
        salary,
        experience_split: first_present(ranked, |f| &f.experience_split),
        education_levels: first_present(ranked, |f| &f.education_levels),
        top_skills: first_present(ranked, |f| &f.top_skills),
        soft_skills: first_present(ranked, |f| &f.soft_skills),
        certificates: first_present(ranked, |f| &f.certificates),
        languages: first_present(ranked, |f| &f.languages),
        employment_type: first_present(ranked, |f| &f.employment_type),
        top_employers,
        top_intermediaries: first_present(ranked, |f| &f.top_intermediaries),
        job_boards: first_present(ranked, |f| &f.job_boards),
        time_to_fill: TimeToFill {
            intermediary_days: first_some(ranked, |f| f.time_to_fill.intermediary_days),
            direct_days: first_some(ranked, |f| f.time_to_fill.direct_days),
        },
    }
}

fn first_some<T>(ranked: &[&PartialReport], pick: impl Fn(&ReportFields) -> Option<T>) -> Option<T> {
    ranked.iter().find_map(|partial| pick(&partial.fields))
}

fn first_present<T>(ranked: &[&PartialReport], pick: impl Fn(&ReportFields) -> &T) -> T
where
    T: Presence + Clone + Default,
{
    ranked
        .iter()
        .map(|partial| pick(&partial.fields))
        .find(|value| value.is_present())
        .cloned()
        .unwrap_or_default()
}

fn employers_from_aggregate(aggregate: &SearchAggregate) -> Vec<RankedEntry> {
    aggregate
        .employers
        .iter()
        .zip(1u32..)
        .map(|(employer, rank)| RankedEntry {
            rank,
            label: employer.name.clone(),
            count: employer.count,
        })
        .collect()
}

#[cfg(test)]
#[path = "synthesize_test.rs"]
mod tests;
