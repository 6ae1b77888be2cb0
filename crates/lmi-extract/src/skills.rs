//! Open-vocabulary `"<label> <n>%"` lists: hard skills and job boards.

use std::collections::HashSet;
use std::sync::LazyLock;

use lmi_core::LabelledPercentage;
use regex::Regex;

use crate::error::ExtractError;
use crate::number::parse_plain;
use crate::{MAX_RANKED, MAX_SKILLS};

static SKILL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z/\s\-]+?)\s+(\d+)%").expect("valid regex"));
static JOB_BOARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((?:www\.)?[\w\-\.]+\.(?:nl|com|co))\s+(\d+)%").expect("valid regex")
});

/// Lowercased labels that are table noise rather than skills.
const SKILL_STOPLIST: &[&str] = &["geen", "totaal", "parttime", "fulltime"];

/// Skills of four characters or more, deduplicated by exact label, highest
/// share first, at most [`MAX_SKILLS`].
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a kept skill's percentage overflows.
pub fn top_skills(text: &str) -> Result<Vec<LabelledPercentage>, ExtractError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut skills = Vec::new();

    for caps in SKILL_RE.captures_iter(text) {
        let Some(label) = caps.get(1).map(|m| m.as_str().trim()) else {
            continue;
        };
        if label.chars().count() <= 3
            || seen.contains(label)
            || SKILL_STOPLIST.contains(&label.to_lowercase().as_str())
        {
            continue;
        }
        let percentage = parse_plain("top_skills", &caps[2])?;
        seen.insert(label);
        skills.push(LabelledPercentage::new(label, percentage));
    }

    skills.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    skills.truncate(MAX_SKILLS);
    Ok(skills)
}

/// Job boards such as `"www.jobbird.com 9%"`.
///
/// Only `.nl`, `.com` and `.co` domains are recognised. The first
/// [`MAX_RANKED`] rows are kept, then ordered by share.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a percentage overflows.
pub fn job_boards(text: &str) -> Result<Vec<LabelledPercentage>, ExtractError> {
    let mut boards = JOB_BOARD_RE
        .captures_iter(text)
        .take(MAX_RANKED)
        .map(|caps| {
            Ok(LabelledPercentage::new(
                &caps[1],
                parse_plain("job_boards", &caps[2])?,
            ))
        })
        .collect::<Result<Vec<_>, ExtractError>>()?;

    boards.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    Ok(boards)
}
