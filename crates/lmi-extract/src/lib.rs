//! Field extractors for loosely formatted labour-market report text.
//!
//! Every extractor is an independent pure function from raw text to one
//! typed field. A pattern that does not match yields `None` or an empty
//! collection; only a matched number that fails to parse is an error
//! ([`ExtractError::MalformedNumber`]), and callers decide how to degrade.

pub mod counts;
pub mod error;
pub mod outcome;
pub mod percentages;
pub mod ranked;
pub mod salary;
pub mod skills;
pub mod snippet;

mod number;

pub use counts::{time_to_fill, vacancy_count};
pub use error::ExtractError;
pub use outcome::{extract_all, ExtractionOutcome};
pub use percentages::{
    certificates, education_levels, employment_type, experience_split, languages, soft_skills,
};
pub use ranked::{related_titles, top_employers, top_intermediaries};
pub use salary::salary;
pub use skills::{job_boards, top_skills};
pub use snippet::{employer_from_snippet, salary_from_snippet};

/// Upper bound for ranked tables (titles, employers, job boards).
pub const MAX_RANKED: usize = 10;

/// Upper bound for the open-vocabulary skill list.
pub const MAX_SKILLS: usize = 20;
