//! Lightweight extractors for search-result snippets.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExtractError;
use crate::number::parse_grouped;

// Both employer patterns are case-insensitive, so the "capitalised" first
// character is not enforced.
static EMPLOYER_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)bij\s+([A-Z][A-Za-z\s&]+?)(?:\s+zoekt|\s+in\s+)").expect("valid regex"),
        Regex::new(r"(?i)^([A-Z][A-Za-z\s&]+?)\s+zoekt").expect("valid regex"),
    ]
});
static SNIPPET_SALARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"€\s*([\d.]+)").expect("valid regex"));

/// Employer named in a snippet: `"... bij <Employer> zoekt/in ..."` or
/// `"<Employer> zoekt ..."` at the start. The first pattern takes precedence.
#[must_use]
pub fn employer_from_snippet(snippet: &str) -> Option<String> {
    EMPLOYER_PATTERNS.iter().find_map(|re| {
        re.captures(snippet)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}

/// First euro amount in a snippet, thousands separators removed.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] when the amount has no digits (`"€..."`).
pub fn salary_from_snippet(snippet: &str) -> Result<Option<u64>, ExtractError> {
    SNIPPET_SALARY_RE
        .captures(snippet)
        .map(|caps| parse_grouped("snippet_salary", &caps[1]))
        .transpose()
}
