//! # Unified Pipeline
//!
//! Composes loader, extractor, cleaner and writer into a single pull-based
//! pass: the writer drives consumption, one record at a time.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::pipeline::cleaner::CandidateCleaner;
use crate::pipeline::extractor::CandidateExtractor;
use crate::pipeline::loader::RecordLoader;
use crate::pipeline::writer::TsvWriter;
use crate::types::ExtractedRecord;

/// Suffix appended to the input file stem when no output path is given.
pub const OUTPUT_SUFFIX: &str = "_ansq_formatted.tsv";

/// Records between two progress log lines.
pub const DEFAULT_PROGRESS_EVERY: usize = 1000;

/// Configuration for the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Base directory for derived output files.
    pub data_dir: PathBuf,
    /// Emit a progress line every this many loaded records (0 disables).
    pub progress_every: usize,
    /// Suffix for derived output file names.
    pub output_suffix: String,
}

/// Default data directory: `<platform data dir>/asnq`, or `./data` when the
/// platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("asnq"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            progress_every: DEFAULT_PROGRESS_EVERY,
            output_suffix: OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create a new pipeline configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory for derived output files.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the progress logging interval.
    pub fn with_progress_every(mut self, records: usize) -> Self {
        self.progress_every = records;
        self
    }

    /// Output path used when none is given: the input's file stem plus the
    /// output suffix, inside the data directory.
    ///
    /// ```
    /// use asnq_core::PipelineConfig;
    ///
    /// let config = PipelineConfig::new().with_data_dir("/data");
    /// let out = config.default_output_path("/raw/nq-train-00.jsonl");
    /// assert_eq!(out, std::path::Path::new("/data/nq-train-00_ansq_formatted.tsv"));
    /// ```
    pub fn default_output_path(&self, input: impl AsRef<Path>) -> PathBuf {
        let stem = input
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.data_dir.join(format!("{stem}{}", self.output_suffix))
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub records_loaded: usize,
    pub records_skipped: usize,
    pub candidates_extracted: usize,
    pub candidates_dropped: usize,
    pub rows_written: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records ({} skipped), {} candidates ({} dropped), {} rows written",
            self.records_loaded,
            self.records_skipped,
            self.candidates_extracted,
            self.candidates_dropped,
            self.rows_written
        )
    }
}

/// Converts Natural Questions records into ASNQ rows.
pub struct Pipeline {
    config: PipelineConfig,
    extractor: CandidateExtractor,
    cleaner: CandidateCleaner,
}

impl Pipeline {
    /// Create a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates `AsnqError::Selector` from the cleaner.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Ok(Self {
            config,
            extractor: CandidateExtractor::new(),
            cleaner: CandidateCleaner::new()?,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Converts `input` and appends the rows to `output`.
    ///
    /// # Errors
    ///
    /// Stops at the first I/O error or malformed input line.
    pub fn run(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<RunSummary> {
        let loader = RecordLoader::open(input)?;
        let writer = TsvWriter::append(output)?;
        self.drive(loader, writer)
    }

    /// Same as [`Pipeline::run`], reading from and writing to arbitrary streams.
    ///
    /// # Errors
    ///
    /// Stops at the first I/O error or malformed input line.
    pub fn run_to<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<RunSummary> {
        self.drive(RecordLoader::new(input), TsvWriter::new(output))
    }

    /// Lazily loads and extracts records without cleaning or writing.
    ///
    /// # Errors
    ///
    /// Returns `AsnqError::Io` if the input cannot be opened. Per-line errors
    /// are yielded by the iterator.
    pub fn extracted(
        &self,
        input: impl AsRef<Path>,
    ) -> Result<impl Iterator<Item = Result<ExtractedRecord>> + '_> {
        let loader = RecordLoader::open(input)?;
        Ok(loader.map(|record| record.map(|r| self.extractor.extract(r))))
    }

    fn drive<R: BufRead, W: Write>(
        &self,
        mut loader: RecordLoader<R>,
        mut writer: TsvWriter<W>,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for record in loader.by_ref() {
            let extracted = self.extractor.extract(record?);
            summary.candidates_extracted += extracted.candidates.len();

            let cleaned = self.cleaner.clean(extracted);
            summary.candidates_dropped += cleaned.dropped;
            writer.write_record(&cleaned)?;

            summary.records_loaded += 1;
            if self.config.progress_every > 0
                && summary.records_loaded % self.config.progress_every == 0
            {
                info!(
                    records = summary.records_loaded,
                    rows = writer.rows_written(),
                    "Processed {} records",
                    summary.records_loaded
                );
            }
        }

        summary.records_skipped = loader.stats().records_skipped;
        summary.rows_written = writer.finish()?;
        info!("{summary}");
        Ok(summary)
    }
}
