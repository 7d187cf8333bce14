//! schemadiff
//!
//! Compare the column schemas of related columnar datasets and report the fields
//! that are exclusive to one dataset, shared by a subset, or declared with different types.
//!
//! # Examples
//!
//! Comparing schemas you already have in memory:
//!
//! ```ignore
//! use libschemadiff::core::diff::{render, SchemaDiffEngine};
//!
//! let mut engine = SchemaDiffEngine::new();
//! engine.register("yellow", vec![("VendorID", "int64"), ("airport_fee", "double")])?;
//! engine.register("green", vec![("VendorID", "int64"), ("trip_type", "double")])?;
//! let report = engine.compare()?;
//! println!("{}", render(&report));
//! ```
//!
//! Comparing parquet files named in a config file, writing the report to disk:
//!
//! ```ignore
//! use libschemadiff::command;
//! use libschemadiff::config::ComparisonConfig;
//!
//! let config = ComparisonConfig::from_file("schemadiff.toml")?;
//! let result = command::compare(&config)?;
//! println!("Schema comparison saved to: {}", result.output.display());
//! ```

pub mod command;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod model;
pub mod opts;
pub mod util;
