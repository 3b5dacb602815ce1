//! Append-only TSV writer.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{AsnqError, Result};
use crate::types::CleanedRecord;

/// Writes one tab-separated row per cleaned candidate.
///
/// Files are opened in append mode: running twice against the same output
/// accumulates rows.
pub struct TsvWriter<W: Write> {
    out: W,
    path: PathBuf,
    rows_written: usize,
}

impl TsvWriter<BufWriter<File>> {
    /// Opens `path` for appending, creating it and any missing parent
    /// directories.
    ///
    /// # Errors
    ///
    /// Returns `AsnqError::Io` if the directory or file cannot be created.
    pub fn append(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| AsnqError::io(parent, e))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| AsnqError::io(path, e))?;
        info!("Writing to {}", path.display());
        Ok(Self::with_path(BufWriter::new(file), path))
    }
}

impl<W: Write> TsvWriter<W> {
    /// Wraps an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self::with_path(out, "<writer>")
    }

    fn with_path(out: W, path: impl Into<PathBuf>) -> Self {
        Self {
            out,
            path: path.into(),
            rows_written: 0,
        }
    }

    /// Writes every row of `record`, returning how many were written.
    ///
    /// # Errors
    ///
    /// Returns `AsnqError::Io` on write failure.
    pub fn write_record(&mut self, record: &CleanedRecord) -> Result<usize> {
        let mut written = 0;
        for row in record.rows() {
            writeln!(self.out, "{row}").map_err(|e| AsnqError::io(&self.path, e))?;
            written += 1;
        }
        self.rows_written += written;
        Ok(written)
    }

    /// Rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes buffered rows and returns the total written.
    ///
    /// # Errors
    ///
    /// Returns `AsnqError::Io` if the flush fails.
    pub fn finish(mut self) -> Result<usize> {
        self.out.flush().map_err(|e| AsnqError::io(&self.path, e))?;
        Ok(self.rows_written)
    }
}
