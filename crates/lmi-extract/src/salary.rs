//! Salary bands per experience level.

use std::sync::LazyLock;

use lmi_core::SalaryBands;
use regex::Regex;

use crate::error::ExtractError;
use crate::number::parse_grouped;

static JUNIOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Junior.*?€\s*([\d.]+)").expect("valid regex"));
static MEDIOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Medior.*?€\s*([\d.]+)").expect("valid regex"));
static SENIOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Senior.*?€\s*([\d.]+)").expect("valid regex"));
static MEDIAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Gemiddeld[:\s]*€\s*([\d.]+)").expect("valid regex"));

/// Junior, medior, senior and average salary.
///
/// Each band is searched for independently: the label, then the first euro
/// amount after it on the same line. Any band may be missing.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] if a matched amount has no digits.
pub fn salary(text: &str) -> Result<SalaryBands, ExtractError> {
    let band = |re: &Regex| {
        re.captures(text)
            .map(|caps| parse_grouped("salary", &caps[1]))
            .transpose()
    };

    Ok(SalaryBands {
        junior: band(&JUNIOR_RE)?,
        medior: band(&MEDIOR_RE)?,
        senior: band(&SENIOR_RE)?,
        median: band(&MEDIAN_RE)?,
    })
}
