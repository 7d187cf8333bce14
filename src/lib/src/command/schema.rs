//! # schemadiff schema
//!
//! Inspect the schema the loader reads from a single file
//!

use std::path::Path;

use crate::core::df::tabular;
use crate::error::SchemaDiffError;
use crate::model::Schema;

pub fn schema(input: impl AsRef<Path>) -> Result<Schema, SchemaDiffError> {
    tabular::read_schema(input)
}
