//! Percentage-keyed fields driven by a fixed vocabulary.
//!
//! Vocabulary terms are matched verbatim (case-sensitive, no word
//! boundaries); a term that does not appear is simply absent from the result.

use std::sync::LazyLock;

use lmi_core::{LabelledPercentage, PercentageMap};
use regex::Regex;

use crate::error::ExtractError;
use crate::number::parse_plain;

pub const EDUCATION_LEVELS: &[&str] = &["MBO", "VMBO", "HBO", "WO", "HAVO", "VWO", "LBO"];

pub const SOFT_SKILLS: &[&str] = &[
    "Verantwoordelijkheid",
    "Servicegericht",
    "Gastvriendelijkheid",
    "Flexibel",
    "Leergierig",
    "Stressbestendig",
    "Oplossingsgericht",
    "Proactief",
    "Bevlogenheid",
    "Ambitieus",
];

pub const CERTIFICATES: &[&str] = &[
    "Rijbewijs B",
    "VCA basis certificaat",
    "VCA",
    "Middelbare Technische School",
    "MTS",
    "Verklaring Omtrent het Gedrag",
    "VOG",
];

pub const LANGUAGES: &[&str] = &["Nederlands", "Engels", "Duits", "Frans"];

type TermPatterns = Vec<(&'static str, Regex)>;

static EDUCATION_PATTERNS: LazyLock<TermPatterns> =
    LazyLock::new(|| term_patterns(EDUCATION_LEVELS, r"\s+(\d+)%"));
static SOFT_SKILL_PATTERNS: LazyLock<TermPatterns> =
    LazyLock::new(|| term_patterns(SOFT_SKILLS, r"\s+(\d+)%"));
// Certificates are often followed by a description before the share.
static CERTIFICATE_PATTERNS: LazyLock<TermPatterns> =
    LazyLock::new(|| term_patterns(CERTIFICATES, r".*?(\d+)%"));
static LANGUAGE_PATTERNS: LazyLock<TermPatterns> =
    LazyLock::new(|| term_patterns(LANGUAGES, r"\s+(\d+)%"));

static EXPERIENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(junior|medior|senior)\s+(\d+)%").expect("valid regex"));
static EMPLOYMENT_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(vast|tijdelijk|stage|zzp|interim)\s*:\s*(\d+)%").expect("valid regex")
});

fn term_patterns(terms: &[&'static str], suffix: &str) -> TermPatterns {
    terms
        .iter()
        .map(|term| {
            let pattern = format!("{}{suffix}", regex::escape(term));
            (*term, Regex::new(&pattern).expect("valid regex"))
        })
        .collect()
}

/// First percentage found for each vocabulary term, in vocabulary order.
fn match_terms(
    patterns: &TermPatterns,
    field: &'static str,
    text: &str,
) -> Result<Vec<(&'static str, u32)>, ExtractError> {
    let mut found = Vec::new();
    for (term, re) in patterns {
        if let Some(caps) = re.captures(text) {
            found.push((*term, parse_plain(field, &caps[1])?));
        }
    }
    Ok(found)
}

fn sorted_by_share(found: Vec<(&'static str, u32)>) -> Vec<LabelledPercentage> {
    let mut list: Vec<LabelledPercentage> = found
        .into_iter()
        .map(|(term, pct)| LabelledPercentage::new(term, pct))
        .collect();
    list.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    list
}

/// Matches that repeat over a closed set of keys; a later match overwrites
/// the earlier value but keeps its position.
fn keyed_matches(
    re: &Regex,
    field: &'static str,
    text: &str,
) -> Result<PercentageMap, ExtractError> {
    let mut map = PercentageMap::new();
    for caps in re.captures_iter(text) {
        map.insert(caps[1].to_lowercase(), parse_plain(field, &caps[2])?);
    }
    Ok(map)
}

/// Share of vacancies per experience level (`junior 41%`), keys lowercased.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a percentage overflows.
pub fn experience_split(text: &str) -> Result<PercentageMap, ExtractError> {
    keyed_matches(&EXPERIENCE_RE, "experience_split", text)
}

/// Share of vacancies per education level (`MBO 40%`).
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a percentage overflows.
pub fn education_levels(text: &str) -> Result<PercentageMap, ExtractError> {
    Ok(match_terms(&EDUCATION_PATTERNS, "education_levels", text)?
        .into_iter()
        .collect())
}

/// Soft skills from the fixed vocabulary, highest share first.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a percentage overflows.
pub fn soft_skills(text: &str) -> Result<Vec<LabelledPercentage>, ExtractError> {
    Ok(sorted_by_share(match_terms(
        &SOFT_SKILL_PATTERNS,
        "soft_skills",
        text,
    )?))
}

/// Required certificates, highest share first.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a percentage overflows.
pub fn certificates(text: &str) -> Result<Vec<LabelledPercentage>, ExtractError> {
    Ok(sorted_by_share(match_terms(
        &CERTIFICATE_PATTERNS,
        "certificates",
        text,
    )?))
}

/// Required languages (`Engels 23%`).
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a percentage overflows.
pub fn languages(text: &str) -> Result<PercentageMap, ExtractError> {
    Ok(match_terms(&LANGUAGE_PATTERNS, "languages", text)?
        .into_iter()
        .collect())
}

/// Contract types (`vast: 79%`), keys lowercased.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a percentage overflows.
pub fn employment_type(text: &str) -> Result<PercentageMap, ExtractError> {
    keyed_matches(&EMPLOYMENT_TYPE_RE, "employment_type", text)
}

#[cfg(test)]
#[path = "percentages_test.rs"]
mod tests;
