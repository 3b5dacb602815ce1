//! # ASNQ Core
//!
//! Converts Natural Questions style records (a question, a document and
//! candidate long-answer spans given as token offsets) into flat
//! `question / answer / annotation` rows, one per candidate.
//!
//! The pipeline is a single lazy pass: load and validate a record,
//! materialize each candidate's text from the document tokens, keep only the
//! paragraph text of the candidate markup, append the rows.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//! use asnq_core::{Pipeline, PipelineConfig};
//!
//! let input = r#"{"example_id": "1", "question_text": "q", "document_text": "<p>b c</p>", "long_answer_candidates": [{"start_token": 0, "end_token": 2}]}"#;
//! let mut out = Vec::new();
//!
//! let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
//! let summary = pipeline.run_to(Cursor::new(input), &mut out).unwrap();
//!
//! assert_eq!(summary.rows_written, 1);
//! assert_eq!(String::from_utf8(out).unwrap(), "q\tb c\t\n");
//! ```
pub mod error;
pub mod pipeline;
pub mod types;

// Re-export primary API
pub use error::{AsnqError, Result};
pub use pipeline::{
    CandidateCleaner, CandidateExtractor, Pipeline, PipelineConfig, RecordLoader, RunSummary,
    Tokenizer, TsvWriter,
};
pub use types::{
    Annotation, CandidateSpan, CleanedRecord, ExtractedCandidate, ExtractedRecord, OutputRow,
    RawRecord, Record,
};
