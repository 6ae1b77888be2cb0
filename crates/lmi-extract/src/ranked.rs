//! Ranked tables of the form `"<rank> <count> x <label>"`.

use std::sync::LazyLock;

use lmi_core::RankedEntry;
use regex::{Captures, Regex};

use crate::error::ExtractError;
use crate::number::{parse_grouped, parse_plain};
use crate::MAX_RANKED;

static RELATED_TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+([\d.]+)\s*x\s+([A-Za-z\s]+)").expect("valid regex")
});

// The label must be terminated by a newline or a run of two or more
// whitespace characters, which is how the employer tables are laid out.
static EMPLOYER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+([\d.]+)\s*x\s+([A-Za-z\s&\-\.]+?)(?:\n|\s{2,})").expect("valid regex")
});

/// Related job titles, e.g. `"1 5.763 x Monteur"`. First 10 rows in document order.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a rank or count does not parse.
pub fn related_titles(text: &str) -> Result<Vec<RankedEntry>, ExtractError> {
    collect_ranked(&RELATED_TITLE_RE, "related_titles", text)
}

/// Top direct employers, e.g. `"1 254 x Tata Steel"`. First 10 rows in document order.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a rank or count does not parse.
pub fn top_employers(text: &str) -> Result<Vec<RankedEntry>, ExtractError> {
    collect_ranked(&EMPLOYER_RE, "top_employers", text)
}

/// Top recruitment agencies.
///
/// Report documents give no marker separating the agency table from the
/// employer table, so this is the employer extractor run a second time.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a rank or count does not parse.
pub fn top_intermediaries(text: &str) -> Result<Vec<RankedEntry>, ExtractError> {
    collect_ranked(&EMPLOYER_RE, "top_intermediaries", text)
}

fn collect_ranked(
    re: &Regex,
    field: &'static str,
    text: &str,
) -> Result<Vec<RankedEntry>, ExtractError> {
    re.captures_iter(text)
        .take(MAX_RANKED)
        .map(|caps| ranked_entry(field, &caps))
        .collect()
}

fn ranked_entry(field: &'static str, caps: &Captures<'_>) -> Result<RankedEntry, ExtractError> {
    Ok(RankedEntry {
        rank: parse_plain(field, &caps[1])?,
        label: caps[3].trim().to_string(),
        count: parse_grouped(field, &caps[2])?,
    })
}
