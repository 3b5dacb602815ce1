//! Candidate cleaning: markup to paragraph text.
//!
//! Only text inside `<p>` elements survives. A candidate that is plain text,
//! or whose markup holds no paragraphs (tables, lists), cleans to nothing and
//! is dropped.

use scraper::{Html, Selector};
use tracing::debug;

use crate::error::{AsnqError, Result};
use crate::types::{CleanedRecord, ExtractedRecord};

/// Cleaned strings treated as empty.
///
/// The check is literal: a string of two or more spaces is not in this list
/// and is kept.
const EMPTY_CANDIDATES: [&str; 3] = ["", " ", "\t"];

/// Returns `true` if a cleaned candidate should be discarded.
#[must_use]
pub fn is_empty_candidate(text: &str) -> bool {
    EMPTY_CANDIDATES.contains(&text)
}

/// Strips markup from extracted candidates.
pub struct CandidateCleaner {
    paragraph: Selector,
}

impl CandidateCleaner {
    /// Constructs a cleaner with the paragraph selector compiled.
    ///
    /// # Errors
    ///
    /// Returns `AsnqError::Selector` if the selector fails to compile
    /// (should never happen with the static selector used here).
    pub fn new() -> Result<Self> {
        let paragraph = Selector::parse("p").map_err(|e| AsnqError::Selector(e.to_string()))?;
        Ok(Self { paragraph })
    }

    /// Concatenates the text of every paragraph in `raw`, in document order,
    /// separated by single spaces.
    ///
    /// Returns `None` if the result is empty (see [`is_empty_candidate`]).
    /// Text inside a paragraph is kept as-is: no case folding or whitespace
    /// normalization.
    pub fn clean_text(&self, raw: &str) -> Option<String> {
        // No tag, no paragraph.
        if !raw.contains('<') {
            return None;
        }

        let fragment = Html::parse_fragment(raw);
        let cleaned = fragment
            .select(&self.paragraph)
            .map(|p| p.text().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ");

        (!is_empty_candidate(&cleaned)).then_some(cleaned)
    }

    /// Replaces the record's candidates with their cleaned text, keeping only
    /// non-empty results in their original order.
    pub fn clean(&self, record: ExtractedRecord) -> CleanedRecord {
        let total = record.candidates.len();
        let candidates: Vec<String> = record
            .candidates
            .iter()
            .filter_map(|c| self.clean_text(&c.text))
            .collect();
        let dropped = total - candidates.len();

        if dropped > 0 {
            debug!(
                example_id = %record.example_id,
                dropped,
                kept = candidates.len(),
                "dropped empty candidates"
            );
        }

        CleanedRecord {
            example_id: record.example_id,
            question_text: record.question_text,
            candidates,
            annotation: record.annotation,
            dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExtractedCandidate;

    fn cleaner() -> CandidateCleaner {
        CandidateCleaner::new().unwrap()
    }

    #[test]
    fn single_paragraph() {
        assert_eq!(cleaner().clean_text("<p>b c</p>").as_deref(), Some("b c"));
    }

    #[test]
    fn paragraphs_joined_in_order() {
        assert_eq!(
            cleaner().clean_text("<p>A</p><p>B</p>").as_deref(),
            Some("A B")
        );
    }

    #[test]
    fn natural_questions_style_markup() {
        let raw = "<P> The <B> Eiffel Tower </B> is in Paris . </P> <P> It opened in 1889 . </P>";
        assert_eq!(
            cleaner().clean_text(raw).as_deref(),
            Some(" The  Eiffel Tower  is in Paris .   It opened in 1889 . ")
        );
    }

    #[test]
    fn non_paragraph_markup_is_ignored() {
        let raw = "<Table> <Tr> <Td> x </Td> </Tr> </Table> <P> kept </P> <Ul> <Li> y </Li> </Ul>";
        assert_eq!(cleaner().clean_text(raw).as_deref(), Some(" kept "));
    }

    #[test]
    fn plain_text_is_dropped() {
        assert_eq!(cleaner().clean_text("b c"), None);
        assert_eq!(cleaner().clean_text(""), None);
    }

    #[test]
    fn markup_without_paragraphs_is_dropped() {
        assert_eq!(cleaner().clean_text("<Ul> <Li> item </Li> </Ul>"), None);
    }

    #[test]
    fn entities_are_decoded() {
        assert_eq!(
            cleaner().clean_text("<p>fish &amp; chips</p>").as_deref(),
            Some("fish & chips")
        );
    }

    #[test]
    fn literal_empty_checks() {
        assert_eq!(cleaner().clean_text("<p></p>"), None);
        assert_eq!(cleaner().clean_text("<p> </p>"), None);
        assert_eq!(cleaner().clean_text("<p>\t</p>"), None);
        // Two empty paragraphs join to a single space.
        assert_eq!(cleaner().clean_text("<p></p><p></p>"), None);
    }

    #[test]
    fn two_spaces_survive_the_empty_check() {
        assert!(is_empty_candidate(" "));
        assert!(is_empty_candidate("\t"));
        assert!(!is_empty_candidate("  "));
        assert_eq!(cleaner().clean_text("<p>  </p>").as_deref(), Some("  "));
    }

    #[test]
    fn clean_record_keeps_survivors_in_order() {
        let record = ExtractedRecord {
            example_id: "1".into(),
            question_text: "q".into(),
            candidates: vec![
                ExtractedCandidate {
                    start_token: 0,
                    end_token: 2,
                    text: "<p>first</p>".into(),
                },
                ExtractedCandidate {
                    start_token: 2,
                    end_token: 4,
                    text: "no markup".into(),
                },
                ExtractedCandidate {
                    start_token: 4,
                    end_token: 6,
                    text: "<p>second</p>".into(),
                },
            ],
            annotation: None,
        };

        let cleaned = cleaner().clean(record);
        assert_eq!(cleaned.candidates, vec!["first", "second"]);
        assert_eq!(cleaned.dropped, 1);
        assert_eq!(cleaned.question_text, "q");
    }
}
