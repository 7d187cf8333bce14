pub mod classification;
pub mod diff_report;
pub mod diff_summary;
pub mod field_record;
pub mod source;

pub use classification::{Classification, TYPE_DIFF_MARKER};
pub use diff_report::DiffReport;
pub use diff_summary::{DiffSummary, SourceSummary};
pub use field_record::FieldRecord;
pub use source::Source;
