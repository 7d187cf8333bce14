//! Errors for the schemadiff library
//!
//! Enumeration for all errors that can occur while loading, comparing and reporting schemas
//!

use derive_more::{Display, Error};
use std::io;
use std::path::Path;

pub mod path_buf_error;
pub mod string_error;

pub use crate::error::path_buf_error::PathBufError;
pub use crate::error::string_error::StringError;

use polars::prelude::PolarsError;

pub const NO_SOURCES_REGISTERED: &str =
    "No sources registered, register at least one schema before comparing.\n\n  schemadiff compare --source yellow=path/to/yellow.parquet\n";

#[derive(Debug, Display, Error)]
pub enum SchemaDiffError {
    // Engine
    DuplicateSource(StringError),
    EmptyEngine(StringError),

    // Loader
    LoaderFailure(Box<StringError>),
    PathDoesNotExist(Box<PathBufError>),

    // Configuration
    InvalidConfig(StringError),

    // External Library Errors
    IO(io::Error),
    PolarsError(PolarsError),
    TomlDe(toml::de::Error),
    TomlSer(toml::ser::Error),
    JSON(serde_json::Error),

    // Fallback
    Basic(StringError),
}

impl SchemaDiffError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        SchemaDiffError::Basic(StringError::from(s.as_ref()))
    }

    pub fn duplicate_source(name: impl AsRef<str>) -> Self {
        let err = format!("Source '{}' is already registered", name.as_ref());
        SchemaDiffError::DuplicateSource(StringError::from(err))
    }

    pub fn empty_engine() -> Self {
        SchemaDiffError::EmptyEngine(StringError::from(NO_SOURCES_REGISTERED))
    }

    pub fn loader_failure(path: impl AsRef<Path>, cause: impl std::fmt::Display) -> Self {
        let err = format!(
            "Could not read schema from path {:?}: {}",
            path.as_ref(),
            cause
        );
        SchemaDiffError::LoaderFailure(Box::new(StringError::from(err)))
    }

    pub fn path_does_not_exist(path: impl AsRef<Path>) -> Self {
        SchemaDiffError::PathDoesNotExist(Box::new(path.as_ref().into()))
    }

    pub fn unknown_file_type(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str());
        let cause = format!(
            "unknown file type {extension:?}, expected one of parquet, arrow, ipc, feather, csv, tsv"
        );
        SchemaDiffError::loader_failure(path, cause)
    }

    pub fn invalid_config(s: impl AsRef<str>) -> Self {
        SchemaDiffError::InvalidConfig(StringError::from(s.as_ref()))
    }

    pub fn invalid_source_spec(spec: impl AsRef<str>) -> Self {
        let err = format!(
            "Invalid source '{}', expected the form name=path/to/file.parquet",
            spec.as_ref()
        );
        SchemaDiffError::invalid_config(err)
    }

    pub fn file_create_error(path: impl AsRef<Path>, error: std::io::Error) -> Self {
        let err = format!(
            "Could not create file: {:?} error {:?}",
            path.as_ref(),
            error
        );
        SchemaDiffError::basic_str(err)
    }

    pub fn file_read_error(path: impl AsRef<Path>, error: std::io::Error) -> Self {
        let err = format!("Could not read file: {:?} error {:?}", path.as_ref(), error);
        SchemaDiffError::basic_str(err)
    }
}

impl From<io::Error> for SchemaDiffError {
    fn from(error: io::Error) -> Self {
        SchemaDiffError::IO(error)
    }
}

impl From<PolarsError> for SchemaDiffError {
    fn from(err: PolarsError) -> Self {
        SchemaDiffError::PolarsError(err)
    }
}

impl From<toml::de::Error> for SchemaDiffError {
    fn from(error: toml::de::Error) -> Self {
        SchemaDiffError::TomlDe(error)
    }
}

impl From<toml::ser::Error> for SchemaDiffError {
    fn from(error: toml::ser::Error) -> Self {
        SchemaDiffError::TomlSer(error)
    }
}

impl From<serde_json::Error> for SchemaDiffError {
    fn from(error: serde_json::Error) -> Self {
        SchemaDiffError::JSON(error)
    }
}
