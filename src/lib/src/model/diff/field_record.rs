use serde::{Deserialize, Serialize};

use crate::model::diff::Classification;

/// One row of a schema comparison: a field name and, for every source in
/// registration order, the declared type or `None` when the source lacks it.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub name: String,
    pub types: Vec<Option<String>>,
    pub classification: Classification,
    pub annotation: Option<String>,
}

impl FieldRecord {
    /// Indices of the sources that declare this field, in registration order.
    pub fn presence(&self) -> Vec<usize> {
        self.types
            .iter()
            .enumerate()
            .filter_map(|(idx, dtype)| dtype.as_ref().map(|_| idx))
            .collect()
    }

    pub fn dtype_in(&self, source_idx: usize) -> Option<&str> {
        self.types.get(source_idx).and_then(|t| t.as_deref())
    }

    pub fn is_present_in(&self, source_idx: usize) -> bool {
        self.dtype_in(source_idx).is_some()
    }
}
