//! Schema comparison across N named sources, and the text rendering of its result
//!

pub mod render;
pub mod schema_diff;

pub use render::render;
pub use schema_diff::SchemaDiffEngine;
