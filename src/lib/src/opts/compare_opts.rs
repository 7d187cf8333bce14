use std::path::{Path, PathBuf};

use crate::config::{ComparisonConfig, SourceConfig};
use crate::constants::DEFAULT_CONFIG_FILENAME;
use crate::error::SchemaDiffError;

/// Command line overrides layered on top of a [`ComparisonConfig`].
#[derive(Default, Clone, Debug)]
pub struct CompareOpts {
    pub config: Option<PathBuf>,
    /// `name=path` specs, replace the configured sources when non-empty
    pub sources: Vec<String>,
    /// `name=Label` specs
    pub labels: Vec<String>,
    pub output: Option<PathBuf>,
    pub title: Option<String>,
}

impl CompareOpts {
    pub fn empty() -> CompareOpts {
        CompareOpts::default()
    }

    /// Resolve the final configuration: the config file, a `schemadiff.toml` in the working
    /// directory or the taxi defaults, then the overrides.
    pub fn to_config(&self) -> Result<ComparisonConfig, SchemaDiffError> {
        let local_config = Path::new(DEFAULT_CONFIG_FILENAME);
        let (mut config, from_defaults) = match &self.config {
            Some(path) => (ComparisonConfig::from_file(path)?, false),
            None if local_config.exists() => (ComparisonConfig::from_file(local_config)?, false),
            None => (ComparisonConfig::taxi_default(), true),
        };

        if !self.sources.is_empty() {
            config.sources = self
                .sources
                .iter()
                .map(|spec| spec.parse::<SourceConfig>())
                .collect::<Result<Vec<_>, _>>()?;
            // The taxi title no longer describes the sources
            if from_defaults {
                config.title = None;
            }
        }

        for label in self.labels.iter() {
            config.apply_label(label)?;
        }

        if let Some(output) = &self.output {
            config.output = Some(output.to_owned());
        }

        if let Some(title) = &self.title {
            config.title = Some(title.to_owned());
        }

        config.validate()?;
        Ok(config)
    }
}
