//! # schemadiff commands - entry point for the pipelines behind the CLI
//!
//! Each command composes the loader, the engine and the report sink.
//!

pub mod compare;
pub mod schema;

pub use crate::command::compare::{compare, diff, CompareResult};
pub use crate::command::schema::schema;
