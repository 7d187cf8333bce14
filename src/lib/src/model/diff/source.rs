use serde::{Deserialize, Serialize};

/// A named dataset taking part in a comparison.
///
/// `name` is the stable identifier (`yellow`, `green`, `fhv`), `label` is what the
/// report prints in column headers and summary lines (`Yellow Taxi`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub label: String,
}

impl Source {
    pub fn new(name: impl AsRef<str>) -> Source {
        let name = name.as_ref().to_string();
        Source {
            label: name.clone(),
            name,
        }
    }

    pub fn with_label(name: impl AsRef<str>, label: impl AsRef<str>) -> Source {
        Source {
            name: name.as_ref().to_string(),
            label: label.as_ref().to_string(),
        }
    }

    /// Inline marker for rows that only exist in this source, ie `YELLOW ONLY`
    pub fn exclusive_marker(&self) -> String {
        format!("{} ONLY", self.name.to_uppercase())
    }
}
