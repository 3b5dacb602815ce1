//! # Document Tokenizer
//!
//! Splits document text into the whitespace-delimited tokens that candidate
//! spans index into, and rebuilds span text from them.

/// A token extracted from a document with positional information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text content
    pub text: &'a str,
    /// Start byte position in the original string
    pub start: usize,
    /// End byte position in the original string
    pub end: usize,
    /// Token index in the sequence
    pub index: usize,
}

/// Whitespace tokenizer for document text.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer;

impl Tokenizer {
    /// Create a new tokenizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Tokenize a document into maximal runs of non-whitespace characters.
    ///
    /// Whitespace is Unicode whitespace, so tabs, newlines and non-breaking
    /// spaces all separate tokens. Token text is kept verbatim, markup
    /// included.
    ///
    /// The information separators U+001C..=U+001F are not whitespace here,
    /// unlike Python's `str.split()`. Offsets produced by a splitter that
    /// breaks on them drift past any such character in the document.
    ///
    /// # Examples
    /// ```
    /// use asnq_core::pipeline::tokenizer::Tokenizer;
    ///
    /// let tokenizer = Tokenizer::new();
    /// let tokens = tokenizer.tokenize("<P> Paris is  the capital </P>");
    /// assert_eq!(tokens.len(), 6);
    /// assert_eq!(tokens[0].text, "<P>");
    /// ```
    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut current_start: Option<usize> = None;

        for (idx, c) in input.char_indices() {
            match (c.is_whitespace(), current_start) {
                (true, Some(start)) => {
                    tokens.push(Token {
                        text: &input[start..idx],
                        start,
                        end: idx,
                        index: tokens.len(),
                    });
                    current_start = None;
                }
                (false, None) => current_start = Some(idx),
                _ => {}
            }
        }

        // Emit final token if the input does not end in whitespace
        if let Some(start) = current_start {
            tokens.push(Token {
                text: &input[start..],
                start,
                end: input.len(),
                index: tokens.len(),
            });
        }

        tokens
    }

    /// Join the tokens `[start_idx, end_idx)` with single spaces.
    ///
    /// Slicing is lenient: an end past the last token is clamped to the
    /// token count, and a start at or past the end yields an empty string.
    pub fn join_span(&self, tokens: &[Token<'_>], start_idx: usize, end_idx: usize) -> String {
        let end_idx = end_idx.min(tokens.len());
        if start_idx >= end_idx {
            return String::new();
        }

        tokens[start_idx..end_idx]
            .iter()
            .map(|t| t.text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("a b c d");

        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
        assert_eq!(tokens[1].start, 2);
        assert_eq!(tokens[1].end, 3);
        assert_eq!(tokens[3].index, 3);
    }

    #[test]
    fn test_tokenize_collapses_mixed_whitespace() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("  <P>\tone\n\ntwo\u{a0}three  ");

        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["<P>", "one", "two", "three"]);
    }

    #[test]
    fn test_tokenize_keeps_markup_attached() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("<p>b c</p>");

        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["<p>b", "c</p>"]);
    }

    #[test]
    fn test_tokenize_keeps_information_separators() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("a\u{1c}b c\u{1f}");

        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["a\u{1c}b", "c\u{1f}"]);
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" \t\n ").is_empty());
    }

    #[test]
    fn test_join_span_in_range() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("a b c d");

        assert_eq!(tokenizer.join_span(&tokens, 1, 3), "b c");
        assert_eq!(tokenizer.join_span(&tokens, 0, 4), "a b c d");
        assert_eq!(tokenizer.join_span(&tokens, 2, 2), "");
    }

    #[test]
    fn test_join_span_lenient_bounds() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("a b c d");

        assert_eq!(tokenizer.join_span(&tokens, 2, 100), "c d");
        assert_eq!(tokenizer.join_span(&tokens, 3, 1), "");
        assert_eq!(tokenizer.join_span(&tokens, 7, 9), "");
    }
}
