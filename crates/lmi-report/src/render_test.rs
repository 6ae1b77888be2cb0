use chrono::{TimeZone, Utc};
use lmi_core::{
    LabelledPercentage, PartialReport, RankedEntry, ReportSubject, SalaryBands, SourceKind,
};

use super::*;
use crate::synthesize;

fn report_from(fields: ReportFields) -> CanonicalReport {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    let subject = ReportSubject::new("Allround Monteur", "Arnhem");
    let partial = PartialReport::new(SourceKind::StructuredDocument, fields);
    synthesize(&subject, at, &[partial])
}

fn full_fields() -> ReportFields {
    ReportFields {
        vacancy_count: Some(26_735),
        salary: SalaryBands {
            junior: Some(30_000),
            medior: Some(40_000),
            senior: Some(50_000),
            median: None,
        },
        experience_split: [("junior", 41), ("senior", 20)].into_iter().collect(),
        education_levels: [("MBO", 40), ("HBO", 25)].into_iter().collect(),
        top_skills: vec![
            LabelledPercentage::new("Onderhoudswerkzaamheden", 52),
            LabelledPercentage::new("Technisch tekenen", 31),
        ],
        top_employers: vec![RankedEntry {
            rank: 1,
            label: "Tata Steel".to_string(),
            count: 254,
        }],
        ..ReportFields::default()
    }
}

fn empty_report() -> CanonicalReport {
    let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
    synthesize(&ReportSubject::new("Lasser", "Utrecht"), at, &[])
}

const ALL_TIERS: [ReportTier; 4] = [
    ReportTier::Minimal,
    ReportTier::Standard,
    ReportTier::Extensive,
    ReportTier::ActionPlan,
];

#[test]
fn header_lists_subject_confidence_and_sources() {
    let rendered = render(&report_from(full_fields()), ReportTier::Minimal);
    let md = &rendered.markdown;

    assert!(md.starts_with("# Labour Market Intelligence Report\n"));
    assert!(md.contains("## Allround Monteur | Arnhem"));
    assert!(md.contains("**Generated:** 2026-03-01T09:30:00Z"));
    assert!(md.contains("**Confidence:** 50%"));
    assert!(md.contains("**Data Sources:** structured-document"));
    assert!(md.contains("- **Total Vacatures:** 26735"));
    assert!(md.contains("- **Top Skills:** 2 identified"));
}

#[test]
fn standard_tier_contains_salary_row() {
    let rendered = render(&report_from(full_fields()), ReportTier::Standard);
    assert!(rendered.markdown.contains("| Junior | €30,000 |"));
    assert!(rendered.markdown.contains("| Mediaan | N/A |"));
    assert!(rendered.markdown.contains("- **Onderhoudswerkzaamheden**: 52%"));
    assert!(rendered.markdown.contains("1. **Tata Steel** - 254 vacatures"));
    assert!(rendered.markdown.contains("- Medior: 0%"));
}

#[test]
fn minimal_tier_stops_after_key_metrics() {
    let md = render(&report_from(full_fields()), ReportTier::Minimal).markdown;
    assert!(md.contains("### Key Metrics"));
    assert!(!md.contains("Salary Benchmarks"));
    assert!(!md.contains("Top Employers"));
}

#[test]
fn education_only_from_extensive_up() {
    let report = report_from(full_fields());
    assert!(!render(&report, ReportTier::Standard)
        .markdown
        .contains("Education Requirements"));

    let extensive = render(&report, ReportTier::Extensive).markdown;
    assert!(extensive.contains("## 📈 Education Requirements"));
    assert!(extensive.contains("- MBO: 40%"));
    assert!(!extensive.contains("Recruitment Action Plan"));
}

#[test]
fn action_plan_appends_static_template() {
    let md = render(&report_from(full_fields()), ReportTier::ActionPlan).markdown;
    assert!(md.contains("## 🎯 Recruitment Action Plan"));
    assert!(md.contains("- **Total: €1.000/month**"));
    assert!(md.contains("- LinkedIn: €300/month  \n"));
}

#[test]
fn each_tier_extends_the_previous_one() {
    let report = report_from(full_fields());
    let rendered: Vec<String> = ALL_TIERS
        .iter()
        .map(|tier| render(&report, *tier).markdown)
        .collect();

    for pair in rendered.windows(2) {
        assert!(
            pair[1].starts_with(&pair[0]),
            "higher tier must only append sections"
        );
        assert!(pair[1].len() > pair[0].len());
    }
}

#[test]
fn rendering_is_deterministic() {
    let report = report_from(full_fields());
    for tier in ALL_TIERS {
        assert_eq!(render(&report, tier), render(&report, tier));
    }
}

#[test]
fn word_count_matches_whitespace_tokens() {
    for report in [report_from(full_fields()), empty_report()] {
        for tier in ALL_TIERS {
            let rendered = render(&report, tier);
            assert_eq!(
                rendered.word_count,
                rendered.markdown.split_whitespace().count()
            );
            assert_eq!(rendered.tier, tier);
        }
    }
}

#[test]
fn empty_report_renders_placeholders() {
    let report = empty_report();
    assert_eq!(report.metadata.confidence_overall, 0);

    let md = render(&report, ReportTier::Extensive).markdown;
    assert!(md.contains("## Lasser | Utrecht"));
    assert!(md.contains("**Confidence:** 0%"));
    assert!(md.contains("**Data Sources:** N/A"));
    assert!(md.contains("- **Total Vacatures:** N/A"));
    assert!(md.contains("- **Mediaan Salaris:** N/A"));
    assert!(md.contains("- **Time-to-Fill:** N/A"));
    assert!(!md.contains("Salary Benchmarks"));
    assert!(!md.contains("Experience Levels"));
    assert!(md.contains("## 🏢 Top Employers\n\n- N/A\n"));
}

#[test]
fn median_and_time_to_fill_are_formatted() {
    let mut fields = full_fields();
    fields.salary.median = Some(41_250);
    fields.time_to_fill.intermediary_days = Some(42);

    let md = render(&report_from(fields), ReportTier::Minimal).markdown;
    assert!(md.contains("- **Mediaan Salaris:** €41,250 per jaar"));
    assert!(md.contains("- **Time-to-Fill:** 42 days (avg)"));
}

#[test]
fn only_top_five_employers_are_listed() {
    let mut fields = full_fields();
    fields.top_employers = (1..=7)
        .map(|rank| RankedEntry {
            rank,
            label: format!("Werkgever {rank}"),
            count: u64::from(100 - rank),
        })
        .collect();

    let md = render(&report_from(fields), ReportTier::Standard).markdown;
    assert!(md.contains("5. **Werkgever 5**"));
    assert!(!md.contains("6. **Werkgever 6**"));
}
