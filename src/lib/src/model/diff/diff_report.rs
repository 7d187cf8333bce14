use serde::{Deserialize, Serialize};

use crate::model::diff::{Classification, DiffSummary, FieldRecord, Source, SourceSummary};

/// Result of comparing every registered schema against each other.
///
/// `records` is sorted ascending by field name. Every bucket keeps that same order.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    pub sources: Vec<Source>,
    pub records: Vec<FieldRecord>,
    /// Number of distinct field names per source, indexed like `sources`
    pub source_totals: Vec<usize>,
    /// Fields found in exactly one source, indexed like `sources`
    pub exclusive: Vec<Vec<String>>,
    pub type_mismatches: Vec<String>,
    pub common: Vec<String>,
}

impl DiffReport {
    pub fn num_fields(&self) -> usize {
        self.records.len()
    }

    pub fn has_differences(&self) -> bool {
        !self.type_mismatches.is_empty() || self.exclusive.iter().any(|b| !b.is_empty())
    }

    pub fn get_record(&self, name: impl AsRef<str>) -> Option<&FieldRecord> {
        let name = name.as_ref();
        self.records
            .binary_search_by(|r| r.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn classification_of(&self, name: impl AsRef<str>) -> Option<Classification> {
        self.get_record(name).map(|r| r.classification)
    }

    pub fn source_index(&self, name: impl AsRef<str>) -> Option<usize> {
        let name = name.as_ref();
        self.sources.iter().position(|s| s.name == name)
    }

    pub fn exclusive_to(&self, source_name: impl AsRef<str>) -> &[String] {
        match self.source_index(source_name) {
            Some(idx) => &self.exclusive[idx],
            None => &[],
        }
    }

    pub fn summary(&self) -> DiffSummary {
        let sources = self
            .sources
            .iter()
            .enumerate()
            .map(|(idx, source)| SourceSummary {
                name: source.name.to_owned(),
                label: source.label.to_owned(),
                total_fields: self.source_totals[idx],
                exclusive_fields: self.exclusive[idx].len(),
            })
            .collect();

        DiffSummary {
            sources,
            type_mismatches: self.type_mismatches.len(),
            common: self.common.len(),
        }
    }
}
