//! Markdown rendering of a [`CanonicalReport`].

use std::fmt::Write;

use chrono::SecondsFormat;
use lmi_core::{CanonicalReport, ReportFields, ReportMetadata};
use serde::{Deserialize, Serialize};

use crate::format::{currency, or_na, NOT_AVAILABLE};
use crate::tier::ReportTier;

const TOP_SKILLS_SHOWN: usize = 10;
const TOP_EMPLOYERS_SHOWN: usize = 5;

/// Fixed recruitment plan appended to [`ReportTier::ActionPlan`] reports.
/// It is boilerplate and does not depend on the report data.
const ACTION_PLAN: &str = "
---

## 🎯 Recruitment Action Plan

### Sourcing Strategy

**Primary Channels (80% effort):**
1. **Indeed Sponsored Ads** - Target junior/medior levels
2. **Direct Search** - LinkedIn/Notion database
3. **Referral Program** - Incentivize current employees

### Budget Allocation
- Indeed: €500/month
- LinkedIn: €300/month  
- Referrals: €200/month
- **Total: €1.000/month**

### Timeline
- Week 1-2: Setup campaigns
- Week 3-6: Active sourcing (target: 20 candidates)
- Week 7-8: Interviews + offers

### KPIs
- Applicants/week: >5
- Qualification rate: >60%
- Time-to-hire: <8 weeks
";

/// Rendered markdown plus the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedReport {
    pub markdown: String,
    /// Number of whitespace-delimited tokens in `markdown`.
    pub word_count: usize,
    pub tier: ReportTier,
}

impl RenderedReport {
    fn new(markdown: String, tier: ReportTier) -> Self {
        let word_count = markdown.split_whitespace().count();
        Self {
            markdown,
            word_count,
            tier,
        }
    }
}

/// Render `report` at the requested verbosity `tier`.
///
/// Sections appear in a fixed order; higher tiers only append. Missing values
/// render as `N/A`, so an empty report still produces a complete document.
#[must_use]
pub fn render(report: &CanonicalReport, tier: ReportTier) -> RenderedReport {
    let insights = &report.insights;
    let mut md = String::new();

    push_header(&mut md, &report.metadata);
    push_key_metrics(&mut md, insights);

    if tier >= ReportTier::Standard {
        push_salary_table(&mut md, insights);
        push_top_skills(&mut md, insights);
        push_experience(&mut md, insights);
        push_top_employers(&mut md, insights);
    }

    if tier >= ReportTier::Extensive {
        push_education(&mut md, insights);
    }

    if tier == ReportTier::ActionPlan {
        md.push_str(ACTION_PLAN);
    }

    RenderedReport::new(md, tier)
}

fn push_header(md: &mut String, meta: &ReportMetadata) {
    let sources = if meta.data_sources.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        meta.data_sources.join(", ")
    };

    let _ = writeln!(md, "# Labour Market Intelligence Report\n");
    let _ = writeln!(md, "## {} | {}\n", meta.job_title, meta.location);
    let _ = writeln!(
        md,
        "**Generated:** {}  ",
        meta.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    let _ = writeln!(md, "**Confidence:** {}%  ", meta.confidence_overall);
    let _ = writeln!(md, "**Data Sources:** {sources}\n");
    md.push_str("---\n\n");
}

fn push_key_metrics(md: &mut String, insights: &ReportFields) {
    let median = insights
        .salary
        .median
        .map_or_else(|| NOT_AVAILABLE.to_string(), |m| {
            format!("{} per jaar", currency(Some(m)))
        });
    let time_to_fill = insights
        .time_to_fill
        .intermediary_days
        .map_or_else(|| NOT_AVAILABLE.to_string(), |d| format!("{d} days (avg)"));

    md.push_str("## 📊 Executive Summary\n\n");
    md.push_str("### Key Metrics\n");
    let _ = writeln!(md, "- **Total Vacatures:** {}", or_na(insights.vacancy_count));
    let _ = writeln!(md, "- **Mediaan Salaris:** {median}");
    let _ = writeln!(md, "- **Top Skills:** {} identified", insights.top_skills.len());
    let _ = writeln!(md, "- **Time-to-Fill:** {time_to_fill}");
    md.push_str("\n---\n");
}

fn push_salary_table(md: &mut String, insights: &ReportFields) {
    let salary = &insights.salary;
    if salary.is_empty() {
        return;
    }

    md.push_str("\n## 💰 Salary Benchmarks\n\n");
    md.push_str("| Level | Salary |\n");
    md.push_str("|-------|--------|\n");
    for (level, amount) in [
        ("Junior", salary.junior),
        ("Medior", salary.medior),
        ("Senior", salary.senior),
        ("Mediaan", salary.median),
    ] {
        let _ = writeln!(md, "| {level} | {} |", currency(amount));
    }
}

fn push_top_skills(md: &mut String, insights: &ReportFields) {
    md.push_str("\n## 🎯 Top 10 Skills\n\n");
    if insights.top_skills.is_empty() {
        let _ = writeln!(md, "- {NOT_AVAILABLE}");
        return;
    }
    for skill in insights.top_skills.iter().take(TOP_SKILLS_SHOWN) {
        let _ = writeln!(md, "- **{}**: {}%", skill.label, skill.percentage);
    }
}

fn push_experience(md: &mut String, insights: &ReportFields) {
    let split = &insights.experience_split;
    if split.is_empty() {
        return;
    }

    md.push_str("\n## 👔 Experience Levels\n\n");
    for (key, label) in [("junior", "Junior"), ("medior", "Medior"), ("senior", "Senior")] {
        let _ = writeln!(md, "- {label}: {}%", split.get(key).unwrap_or(0));
    }
}

fn push_top_employers(md: &mut String, insights: &ReportFields) {
    md.push_str("\n## 🏢 Top Employers\n\n");
    if insights.top_employers.is_empty() {
        let _ = writeln!(md, "- {NOT_AVAILABLE}");
        return;
    }
    for employer in insights.top_employers.iter().take(TOP_EMPLOYERS_SHOWN) {
        let _ = writeln!(
            md,
            "{}. **{}** - {} vacatures",
            employer.rank, employer.label, employer.count
        );
    }
}

fn push_education(md: &mut String, insights: &ReportFields) {
    md.push_str("\n## 📈 Education Requirements\n\n");
    if insights.education_levels.is_empty() {
        let _ = writeln!(md, "- {NOT_AVAILABLE}");
        return;
    }
    for (level, pct) in insights.education_levels.iter() {
        let _ = writeln!(md, "- {level}: {pct}%");
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
