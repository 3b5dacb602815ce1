use std::fmt;

use super::record::Annotation;

/// Column separator of the output file.
pub const DELIMITER: char = '\t';

/// One `(question, answer, annotation)` line of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRow<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub annotation: Option<&'a Annotation>,
}

/// Writes `value` with tabs and line breaks replaced by a single space.
fn write_field(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    if !value.contains(['\t', '\n', '\r']) {
        return f.write_str(value);
    }
    for c in value.chars() {
        match c {
            '\t' | '\n' | '\r' => f.write_str(" ")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

impl fmt::Display for OutputRow<'_> {
    /// Formats the row without the trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(f, self.question)?;
        write!(f, "{DELIMITER}")?;
        write_field(f, self.answer)?;
        write!(f, "{DELIMITER}")?;
        if let Some(annotation) = self.annotation {
            write_field(f, &annotation.to_string())?;
        }
        Ok(())
    }
}
