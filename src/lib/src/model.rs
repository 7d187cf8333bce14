pub mod diff;
pub mod schema;

pub use crate::model::diff::{
    Classification, DiffReport, DiffSummary, FieldRecord, Source, SourceSummary,
};
pub use crate::model::schema::{Field, Schema};
