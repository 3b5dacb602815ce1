//! Streaming JSON Lines loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::de::Error as _;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{AsnqError, Result};
use crate::types::{RawRecord, Record};

/// Counters for one pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoaderStats {
    /// Lines read, blank ones included.
    pub lines_read: usize,
    /// Records yielded to the caller.
    pub records_loaded: usize,
    /// Records skipped for missing required fields.
    pub records_skipped: usize,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Lazily reads validated records from a JSON Lines source, one line per
/// `next()` call.
///
/// Records missing required fields are logged and skipped. Blank lines are
/// ignored. A line that does not parse as a record yields
/// `AsnqError::MalformedRecord`; the caller decides whether to stop.
pub struct RecordLoader<R> {
    reader: R,
    path: PathBuf,
    line: String,
    stats: LoaderStats,
}

impl RecordLoader<BufReader<File>> {
    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns `AsnqError::Io` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading from {}", path.display());
        let file = File::open(path).map_err(|e| AsnqError::io(path, e))?;
        Ok(Self::with_path(BufReader::new(file), path))
    }
}

impl<R: BufRead> RecordLoader<R> {
    /// Wraps an already-open reader.
    pub fn new(reader: R) -> Self {
        Self::with_path(reader, "<reader>")
    }

    fn with_path(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            line: String::new(),
            stats: LoaderStats::default(),
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> LoaderStats {
        self.stats
    }

    /// Parses and validates one non-blank line.
    ///
    /// The line must be a JSON object. Derived struct deserialization would
    /// also accept a positional array, so the shape is checked first.
    fn parse_line(&self, line_no: usize) -> Result<Record> {
        let malformed = |source| AsnqError::MalformedRecord {
            line: line_no,
            source,
        };
        let value: Value = serde_json::from_str(&self.line).map_err(malformed)?;
        if !value.is_object() {
            return Err(malformed(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            ))));
        }
        let raw: RawRecord = serde_json::from_value(value).map_err(malformed)?;
        raw.validate(line_no)
    }
}

impl<R: BufRead> Iterator for RecordLoader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line.clear();
            match self.reader.read_line(&mut self.line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(AsnqError::io(&self.path, e))),
            }
            self.stats.lines_read += 1;
            let line_no = self.stats.lines_read;

            if self.line.trim().is_empty() {
                continue;
            }

            match self.parse_line(line_no) {
                Ok(record) => {
                    self.stats.records_loaded += 1;
                    return Some(Ok(record));
                }
                Err(AsnqError::MissingFields { line, fields }) => {
                    warn!(line, "Skipping line; missing {:?}", fields);
                    self.stats.records_skipped += 1;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
