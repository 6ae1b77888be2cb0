//! Decoding of form-builder webhook submissions.
//!
//! The form builder posts a flat form body; the interesting part is the
//! `rawRequest` field, a JSON blob with submission metadata and an `answers`
//! object keyed by question id. Question sets differ per form, so answers are
//! kept as an open `name → value` record.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("rawRequest is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("rawRequest is not a JSON object")]
    NotAnObject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub submission_id: Option<String>,
    pub submission_date: Option<String>,
    pub form_id: Option<String>,
    /// Answer per question, keyed by the question's `name` or `question_<id>`.
    pub answers: BTreeMap<String, String>,
}

impl Submission {
    /// Decode the `rawRequest` blob.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] when `raw` is not a JSON object.
    pub fn from_raw_request(raw: &str) -> Result<Self, SubmissionError> {
        let value: Value = serde_json::from_str(raw)?;
        let Value::Object(object) = value else {
            return Err(SubmissionError::NotAnObject);
        };

        let answers = object
            .get("answers")
            .and_then(Value::as_object)
            .map(collect_answers)
            .unwrap_or_default();

        Ok(Self {
            submission_id: object.get("submissionID").and_then(as_text),
            submission_date: object.get("created_at").and_then(as_text),
            form_id: object.get("formID").and_then(as_text),
            answers,
        })
    }

    /// Flat view of the submission: the three metadata keys followed by every
    /// answer. An answer whose name collides with a metadata key replaces it.
    #[must_use]
    pub fn data_received(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert("submission_id".to_string(), optional(self.submission_id.as_deref()));
        data.insert("submission_date".to_string(), optional(self.submission_date.as_deref()));
        data.insert("form_id".to_string(), optional(self.form_id.as_deref()));
        for (name, answer) in &self.answers {
            data.insert(name.clone(), Value::String(answer.clone()));
        }
        data
    }
}

fn collect_answers(answers: &Map<String, Value>) -> BTreeMap<String, String> {
    let mut record = BTreeMap::new();
    for (question_id, question) in answers {
        let Some(question) = question.as_object() else {
            tracing::debug!(question_id = %question_id, "skipping answer that is not an object");
            continue;
        };

        let name = question
            .get("name")
            .and_then(Value::as_str)
            .map_or_else(|| format!("question_{question_id}"), str::to_string);
        let answer = question
            .get("answer")
            .or_else(|| question.get("text"))
            .and_then(as_text)
            .unwrap_or_default();

        record.insert(name, answer);
    }
    record
}

/// Strings pass through; other non-null values are rendered as JSON text.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn optional(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |v| Value::String(v.to_string()))
}
