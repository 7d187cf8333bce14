use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub name: String,
    pub label: String,
    pub total_fields: usize,
    pub exclusive_fields: usize,
}

/// Counts-only view of a [`DiffReport`](crate::model::diff::DiffReport) for terminal or json output.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DiffSummary {
    pub sources: Vec<SourceSummary>,
    pub type_mismatches: usize,
    pub common: usize,
}

impl DiffSummary {
    pub fn quick_summary_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = vec![];
        for source in self.sources.iter() {
            lines.push(format!("{} fields: {}", source.label, source.total_fields));
        }
        for source in self.sources.iter() {
            lines.push(format!(
                "Fields only in {}: {}",
                source.name, source.exclusive_fields
            ));
        }
        lines.push(format!("Type differences: {}", self.type_mismatches));
        lines.push(format!("Common fields: {}", self.common));
        lines
    }
}
