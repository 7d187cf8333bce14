use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{DEFAULT_OUTPUT_FILENAME, DEFAULT_TAXI_TITLE};
use crate::error::SchemaDiffError;
use crate::model::diff::Source;
use crate::util;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub name: String,
    pub label: Option<String>,
    pub path: PathBuf,
}

impl SourceConfig {
    pub fn new(name: impl AsRef<str>, path: impl AsRef<Path>) -> SourceConfig {
        SourceConfig {
            name: name.as_ref().to_string(),
            label: None,
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn with_label(mut self, label: impl AsRef<str>) -> SourceConfig {
        self.label = Some(label.as_ref().to_string());
        self
    }

    pub fn to_source(&self) -> Source {
        match &self.label {
            Some(label) => Source::with_label(&self.name, label),
            None => Source::new(&self.name),
        }
    }
}

impl FromStr for SourceConfig {
    type Err = SchemaDiffError;

    /// Parses `name=path/to/file.parquet`
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let Some((name, path)) = spec.split_once('=') else {
            return Err(SchemaDiffError::invalid_source_spec(spec));
        };
        let name = name.trim();
        let path = path.trim();
        if name.is_empty() || path.is_empty() {
            return Err(SchemaDiffError::invalid_source_spec(spec));
        }
        Ok(SourceConfig::new(name, path))
    }
}

/// Which datasets to compare and where to write the report.
///
/// ```toml
/// title = "TAXI DATA SCHEMA COMPARISON - YELLOW vs GREEN vs FHV"
/// output = "schema_comparison.txt"
///
/// [[sources]]
/// name = "yellow"
/// label = "Yellow Taxi"
/// path = "data/yellow/yellow_tripdata_2019-01.parquet"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparisonConfig {
    pub title: Option<String>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
}

impl ComparisonConfig {
    pub fn new(sources: Vec<SourceConfig>) -> ComparisonConfig {
        ComparisonConfig {
            title: None,
            output: None,
            sources,
        }
    }

    /// January 2019 yellow, green and for-hire-vehicle trip records
    pub fn taxi_default() -> ComparisonConfig {
        ComparisonConfig {
            title: Some(DEFAULT_TAXI_TITLE.to_string()),
            output: Some(PathBuf::from(DEFAULT_OUTPUT_FILENAME)),
            sources: vec![
                SourceConfig::new("yellow", "data/yellow/yellow_tripdata_2019-01.parquet")
                    .with_label("Yellow Taxi"),
                SourceConfig::new("green", "data/green/green_tripdata_2019-01.parquet")
                    .with_label("Green Taxi"),
                SourceConfig::new("fhv", "data/fhv/fhv_tripdata_2019-01.parquet")
                    .with_label("FHV Taxi"),
            ],
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaDiffError> {
        let path = path.as_ref();
        log::debug!("loading comparison config from {:?}", path);
        let contents = util::fs::read_from_path(path)?;
        contents.parse()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SchemaDiffError> {
        let toml = toml::to_string(&self)?;
        util::fs::write_to_path(path, toml)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SchemaDiffError> {
        if self.sources.is_empty() {
            return Err(SchemaDiffError::invalid_config(
                "No sources configured, add at least one [[sources]] entry",
            ));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for source in self.sources.iter() {
            if source.name.trim().is_empty() {
                return Err(SchemaDiffError::invalid_config(format!(
                    "Source with path {:?} has an empty name",
                    source.path
                )));
            }
            if !seen.insert(source.name.as_str()) {
                return Err(SchemaDiffError::invalid_config(format!(
                    "Source '{}' is configured more than once",
                    source.name
                )));
            }
        }
        Ok(())
    }

    pub fn title(&self) -> String {
        match &self.title {
            Some(title) => title.to_owned(),
            None => {
                let names: Vec<String> = self
                    .sources
                    .iter()
                    .map(|s| s.name.to_uppercase())
                    .collect();
                format!("SCHEMA COMPARISON - {}", names.join(" vs "))
            }
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME))
    }

    /// Set the label of an already configured source from a `name=Label` spec.
    pub fn apply_label(&mut self, spec: impl AsRef<str>) -> Result<(), SchemaDiffError> {
        let spec = spec.as_ref();
        let Some((name, label)) = spec.split_once('=') else {
            return Err(SchemaDiffError::invalid_config(format!(
                "Invalid label '{spec}', expected the form name=Label"
            )));
        };
        let name = name.trim();
        match self.sources.iter_mut().find(|s| s.name == name) {
            Some(source) => {
                source.label = Some(label.trim().to_string());
                Ok(())
            }
            None => Err(SchemaDiffError::invalid_config(format!(
                "Cannot label unknown source '{name}'"
            ))),
        }
    }
}

impl FromStr for ComparisonConfig {
    type Err = SchemaDiffError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let config: ComparisonConfig = toml::from_str(contents)?;
        Ok(config)
    }
}
