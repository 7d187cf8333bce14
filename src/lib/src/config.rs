//! Configuration for schemadiff, naming the datasets to compare and where the report goes
//!

pub mod comparison_config;

pub use crate::config::comparison_config::{ComparisonConfig, SourceConfig};
