pub mod candidate;
pub mod record;
pub mod row;

pub use candidate::{CandidateSpan, CleanedRecord, ExtractedCandidate, ExtractedRecord};
pub use record::{Annotation, ExampleId, RawRecord, Record, REQUIRED_FIELDS};
pub use row::{OutputRow, DELIMITER};
