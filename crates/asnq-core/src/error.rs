use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a dataset.
#[derive(Debug, Error)]
pub enum AsnqError {
    /// Reading the input or writing the output failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An input line is not a JSON object matching the record schema.
    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number in the input file.
        line: usize,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A record is missing one or more required fields.
    #[error("record on line {line} is missing {fields:?}")]
    MissingFields {
        /// 1-based line number in the input file.
        line: usize,
        /// Names of the absent fields, in schema order.
        fields: Vec<&'static str>,
    },

    /// The paragraph selector failed to compile (should not happen with the static selector).
    #[error("invalid selector: {0}")]
    Selector(String),
}

impl AsnqError {
    /// Wraps an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the error only affects a single record and the run can continue.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingFields { .. })
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, AsnqError>;
