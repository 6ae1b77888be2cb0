//! Scalar count fields: published vacancies and time-to-fill.

use std::sync::LazyLock;

use lmi_core::TimeToFill;
use regex::Regex;

use crate::error::ExtractError;
use crate::number::{parse_grouped, parse_plain};

static VACANCY_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Totaal:\s*([\d.]+)\s*gepubliceerde vacatures").expect("valid regex")
});
static INTERMEDIARY_DAYS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)intermediair[:\s]+(\d+)\s*dagen").expect("valid regex")
});
static DIRECT_DAYS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)directe werkgever[:\s]+(\d+)\s*dagen").expect("valid regex")
});

/// Total published vacancies, e.g. `"Totaal: 26.735 gepubliceerde vacatures"`.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] when the matched amount is not an
/// integer once separators are removed (e.g. `"Totaal: . gepubliceerde vacatures"`).
pub fn vacancy_count(text: &str) -> Result<Option<u64>, ExtractError> {
    VACANCY_COUNT_RE
        .captures(text)
        .map(|caps| parse_grouped("vacancy_count", &caps[1]))
        .transpose()
}

/// Average days-to-fill for intermediaries and direct employers.
///
/// Both halves are matched case-insensitively and independently.
///
/// # Errors
///
/// Returns [`ExtractError::MalformedNumber`] when a matched day count overflows.
pub fn time_to_fill(text: &str) -> Result<TimeToFill, ExtractError> {
    let days = |re: &Regex| {
        re.captures(text)
            .map(|caps| parse_plain("time_to_fill", &caps[1]))
            .transpose()
    };

    Ok(TimeToFill {
        intermediary_days: days(&INTERMEDIARY_DAYS_RE)?,
        direct_days: days(&DIRECT_DAYS_RE)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacancy_count_strips_thousands_separator() {
        let text = "Overzicht\nTotaal: 12.345 gepubliceerde vacatures in de regio";
        assert_eq!(vacancy_count(text), Ok(Some(12_345)));
    }

    #[test]
    fn vacancy_count_without_separator() {
        assert_eq!(
            vacancy_count("Totaal:812 gepubliceerde vacatures"),
            Ok(Some(812))
        );
    }

    #[test]
    fn vacancy_count_first_match_wins() {
        let text = "Totaal: 10 gepubliceerde vacatures ... Totaal: 20 gepubliceerde vacatures";
        assert_eq!(vacancy_count(text), Ok(Some(10)));
    }

    #[test]
    fn vacancy_count_absent_phrase() {
        assert_eq!(vacancy_count("Geen gegevens beschikbaar"), Ok(None));
        assert_eq!(vacancy_count(""), Ok(None));
    }

    #[test]
    fn vacancy_count_only_separators_is_malformed() {
        let err = vacancy_count("Totaal: ... gepubliceerde vacatures").unwrap_err();
        assert_eq!(err.field(), "vacancy_count");
    }

    #[test]
    fn time_to_fill_reads_both_channels() {
        let text = "Gemiddelde invultijd Intermediair: 30 dagen\nDirecte werkgever 42 dagen";
        assert_eq!(
            time_to_fill(text),
            Ok(TimeToFill {
                intermediary_days: Some(30),
                direct_days: Some(42),
            })
        );
    }

    #[test]
    fn time_to_fill_partial_and_absent() {
        let only_direct = time_to_fill("directe werkgever: 12 dagen").unwrap();
        assert_eq!(only_direct.intermediary_days, None);
        assert_eq!(only_direct.direct_days, Some(12));

        assert!(time_to_fill("nothing here").unwrap().is_empty());
    }
}
