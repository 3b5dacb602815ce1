//! Candidate text extraction: token spans to raw passage text.

use tracing::trace;

use crate::pipeline::tokenizer::Tokenizer;
use crate::types::{ExtractedCandidate, ExtractedRecord, Record};

/// Materializes each candidate span's text from the record's document.
#[derive(Debug, Clone, Default)]
pub struct CandidateExtractor {
    tokenizer: Tokenizer,
}

impl CandidateExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the record's spans with extracted candidates, in input order.
    ///
    /// The document is tokenized once per record. Spans running past the end
    /// of the document are truncated and reversed spans produce empty text.
    pub fn extract(&self, record: Record) -> ExtractedRecord {
        let tokens = self.tokenizer.tokenize(&record.document_text);

        let candidates = record
            .candidates
            .iter()
            .map(|span| {
                if !span.fits(tokens.len()) {
                    trace!(
                        example_id = %record.example_id,
                        start = span.start_token,
                        end = span.end_token,
                        token_count = tokens.len(),
                        "candidate span outside document, truncating"
                    );
                }
                ExtractedCandidate {
                    start_token: span.start_token,
                    end_token: span.end_token,
                    text: self
                        .tokenizer
                        .join_span(&tokens, span.start_token, span.end_token),
                }
            })
            .collect();

        ExtractedRecord {
            example_id: record.example_id,
            question_text: record.question_text,
            candidates,
            annotation: record.annotation,
        }
    }
}
