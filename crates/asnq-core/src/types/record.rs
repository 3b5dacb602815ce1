use std::fmt;

use serde::{Deserialize, Serialize};

use super::candidate::CandidateSpan;
use crate::error::{AsnqError, Result};

/// Fields every input record must carry, in schema order.
pub const REQUIRED_FIELDS: [&str; 4] = [
    "example_id",
    "question_text",
    "document_text",
    "long_answer_candidates",
];

/// Example identifier as it appears in the dump.
///
/// Natural Questions releases encode ids either as strings or as
/// (possibly negative) 64-bit integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for ExampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(id) => write!(f, "{id}"),
            Self::Number(id) => write!(f, "{id}"),
        }
    }
}

/// Optional per-record label copied into the third output column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Annotation {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    /// Any other JSON value (object, array), rendered as compact JSON.
    Json(serde_json::Value),
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(label) => write!(f, "{label}"),
            Self::Number(label) => write!(f, "{label}"),
            Self::Flag(label) => write!(f, "{label}"),
            Self::Json(label) => write!(f, "{label}"),
        }
    }
}

/// One input line as parsed, before any presence checks.
///
/// Every field is optional so that a line with absent keys still parses and
/// can be reported as incomplete instead of malformed. A JSON `null` is
/// treated the same as an absent key. Unknown keys are ignored. A structured
/// `annotation` (object or array) is kept and written out as compact JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawRecord {
    pub example_id: Option<ExampleId>,
    pub question_text: Option<String>,
    pub document_text: Option<String>,
    pub long_answer_candidates: Option<Vec<CandidateSpan>>,
    pub annotation: Option<Annotation>,
}

impl RawRecord {
    /// Names of the required fields absent from this record, in schema order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.example_id.is_some(),
            self.question_text.is_some(),
            self.document_text.is_some(),
            self.long_answer_candidates.is_some(),
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Converts into a validated [`Record`].
    ///
    /// # Errors
    ///
    /// Returns `AsnqError::MissingFields` listing every absent required field.
    pub fn validate(self, line: usize) -> Result<Record> {
        match self {
            Self {
                example_id: Some(example_id),
                question_text: Some(question_text),
                document_text: Some(document_text),
                long_answer_candidates: Some(candidates),
                annotation,
            } => Ok(Record {
                example_id: example_id.to_string(),
                question_text,
                document_text,
                candidates,
                annotation,
            }),
            incomplete => Err(AsnqError::MissingFields {
                line,
                fields: incomplete.missing_fields(),
            }),
        }
    }
}

/// A validated input record: one question, its document and candidate spans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Example identifier, normalized to a string.
    pub example_id: String,

    /// The question text.
    pub question_text: String,

    /// The full document, whitespace-tokenizable.
    pub document_text: String,

    /// Candidate long-answer spans in input order.
    pub candidates: Vec<CandidateSpan>,

    /// Optional label for every row produced from this record.
    pub annotation: Option<Annotation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn complete_record_validates() {
        let raw = parse(
            r#"{"example_id": "1", "question_text": "q", "document_text": "a b c d",
                "long_answer_candidates": [{"start_token": 1, "end_token": 3, "top_level": true}]}"#,
        );
        assert!(raw.missing_fields().is_empty());

        let record = raw.validate(1).unwrap();
        assert_eq!(record.example_id, "1");
        assert_eq!(record.question_text, "q");
        assert_eq!(record.document_text, "a b c d");
        assert_eq!(record.candidates, vec![CandidateSpan::new(1, 3)]);
        assert_eq!(record.annotation, None);
    }

    #[test]
    fn numeric_example_id_is_normalized() {
        let raw = parse(
            r#"{"example_id": -7853356005143141653, "question_text": "q",
                "document_text": "d", "long_answer_candidates": []}"#,
        );
        let record = raw.validate(1).unwrap();
        assert_eq!(record.example_id, "-7853356005143141653");
    }

    #[test]
    fn missing_fields_are_reported_in_schema_order() {
        let raw = parse(r#"{"document_text": "d", "example_id": "9"}"#);
        assert_eq!(
            raw.missing_fields(),
            vec!["question_text", "long_answer_candidates"]
        );

        match raw.validate(4) {
            Err(AsnqError::MissingFields { line, fields }) => {
                assert_eq!(line, 4);
                assert_eq!(fields, vec!["question_text", "long_answer_candidates"]);
            }
            other => panic!("expected MissingFields, got {other:?}"),
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let raw = parse(
            r#"{"example_id": "1", "question_text": null, "document_text": "d",
                "long_answer_candidates": []}"#,
        );
        assert_eq!(raw.missing_fields(), vec!["question_text"]);
    }

    #[test]
    fn empty_candidate_list_is_present() {
        let raw = parse(
            r#"{"example_id": "1", "question_text": "q", "document_text": "d",
                "long_answer_candidates": []}"#,
        );
        assert!(raw.validate(1).unwrap().candidates.is_empty());
    }

    #[test]
    fn annotation_variants_display() {
        let raw = parse(
            r#"{"example_id": "1", "question_text": "q", "document_text": "d",
                "long_answer_candidates": [], "annotation": 4}"#,
        );
        assert_eq!(raw.annotation.unwrap().to_string(), "4");

        assert_eq!(Annotation::Text("positive".into()).to_string(), "positive");
        assert_eq!(Annotation::Flag(false).to_string(), "false");
    }

    #[test]
    fn structured_annotation_is_kept_as_json() {
        let raw = parse(
            r#"{"example_id": "1", "question_text": "q", "document_text": "d",
                "long_answer_candidates": [], "annotation": {"label": 1, "spans": [0, 2]}}"#,
        );
        let annotation = raw.validate(1).unwrap().annotation.unwrap();
        assert!(matches!(annotation, Annotation::Json(_)));
        assert_eq!(annotation.to_string(), r#"{"label":1,"spans":[0,2]}"#);

        let raw = parse(
            r#"{"example_id": "1", "question_text": "q", "document_text": "d",
                "long_answer_candidates": [], "annotation": ["yes"]}"#,
        );
        assert_eq!(raw.annotation.unwrap().to_string(), r#"["yes"]"#);
    }

    #[test]
    fn wrong_types_fail_to_parse() {
        assert!(serde_json::from_str::<RawRecord>(r#"{"question_text": 5}"#).is_err());
        assert!(
            serde_json::from_str::<RawRecord>(
                r#"{"long_answer_candidates": [{"start_token": -1, "end_token": 2}]}"#
            )
            .is_err()
        );
    }
}
