pub mod cleaner;
pub mod extractor;
pub mod loader;
pub mod tokenizer;
pub mod unified;
pub mod writer;

pub use cleaner::{is_empty_candidate, CandidateCleaner};
pub use extractor::CandidateExtractor;
pub use loader::{LoaderStats, RecordLoader};
pub use tokenizer::{Token, Tokenizer};
pub use unified::{default_data_dir, Pipeline, PipelineConfig, RunSummary, OUTPUT_SUFFIX};
pub use writer::TsvWriter;
