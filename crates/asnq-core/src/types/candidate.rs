use serde::{Deserialize, Serialize};

use super::record::Annotation;
use super::row::OutputRow;

/// A candidate long answer as a half-open token range `[start_token, end_token)`.
///
/// Offsets are not checked against the document here; the extractor
/// truncates out-of-range and reversed spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateSpan {
    pub start_token: usize,
    pub end_token: usize,
}

impl CandidateSpan {
    #[must_use]
    pub fn new(start_token: usize, end_token: usize) -> Self {
        Self {
            start_token,
            end_token,
        }
    }

    /// Returns `true` if the span covers no tokens (`start >= end`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start_token >= self.end_token
    }

    /// Returns `true` if the span fits inside a document of `token_count` tokens.
    #[must_use]
    pub fn fits(&self, token_count: usize) -> bool {
        self.start_token <= self.end_token && self.end_token <= token_count
    }
}

/// A candidate span with its raw (still marked-up) text materialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedCandidate {
    pub start_token: usize,
    pub end_token: usize,
    pub text: String,
}

/// A record after candidate extraction.
///
/// The document is no longer needed once every candidate carries its text,
/// so it is not kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedRecord {
    pub example_id: String,
    pub question_text: String,
    pub candidates: Vec<ExtractedCandidate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation: Option<Annotation>,
}

/// A record after cleaning: only the surviving candidate strings remain.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanedRecord {
    pub example_id: String,
    pub question_text: String,
    pub candidates: Vec<String>,
    pub annotation: Option<Annotation>,
    /// Number of candidates discarded because their cleaned text was empty.
    pub dropped: usize,
}

impl CleanedRecord {
    /// One output row per surviving candidate, in candidate order.
    pub fn rows(&self) -> impl Iterator<Item = OutputRow<'_>> {
        self.candidates.iter().map(|answer| OutputRow {
            question: &self.question_text,
            answer,
            annotation: self.annotation.as_ref(),
        })
    }
}
