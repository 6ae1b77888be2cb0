//! Integer parsing shared by the extractors.
//!
//! Report documents use `.` as the thousands separator (`26.735`), so grouped
//! amounts are stripped of dots before parsing.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::ExtractError;

/// Parses an integer that may contain `.` thousands separators.
pub(crate) fn parse_grouped<T>(field: &'static str, raw: &str) -> Result<T, ExtractError>
where
    T: FromStr<Err = ParseIntError>,
{
    let digits: String = raw.chars().filter(|c| *c != '.').collect();
    digits
        .parse::<T>()
        .map_err(|source| ExtractError::MalformedNumber {
            field,
            raw: raw.to_string(),
            source,
        })
}

/// Parses a plain run of digits.
pub(crate) fn parse_plain<T>(field: &'static str, raw: &str) -> Result<T, ExtractError>
where
    T: FromStr<Err = ParseIntError>,
{
    raw.parse::<T>()
        .map_err(|source| ExtractError::MalformedNumber {
            field,
            raw: raw.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_strips_separators() {
        assert_eq!(parse_grouped::<u64>("f", "26.735"), Ok(26_735));
        assert_eq!(parse_grouped::<u64>("f", "1.234.567"), Ok(1_234_567));
        assert_eq!(parse_grouped::<u64>("f", "42"), Ok(42));
    }

    #[test]
    fn grouped_only_dots_is_malformed() {
        let err = parse_grouped::<u64>("vacancy_count", "...").unwrap_err();
        assert_eq!(err.field(), "vacancy_count");
    }

    #[test]
    fn plain_overflow_is_malformed() {
        assert!(parse_plain::<u32>("f", "99999999999").is_err());
    }
}
