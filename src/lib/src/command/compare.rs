//! # schemadiff compare
//!
//! Load every configured schema, compare them, render the report and write it out
//!

use std::path::PathBuf;

use crate::config::ComparisonConfig;
use crate::core::df::tabular;
use crate::core::diff::{render, SchemaDiffEngine};
use crate::error::SchemaDiffError;
use crate::model::diff::DiffReport;
use crate::util;

#[derive(Debug, Clone)]
pub struct CompareResult {
    pub report: DiffReport,
    pub text: String,
    pub output: PathBuf,
}

/// Load and compare the configured sources without writing anything.
pub fn diff(config: &ComparisonConfig) -> Result<(DiffReport, String), SchemaDiffError> {
    config.validate()?;

    let mut engine = SchemaDiffEngine::new();
    for source in config.sources.iter() {
        log::debug!("loading schema for {:?} from {:?}", source.name, source.path);
        let schema = tabular::read_schema(&source.path)?;
        engine.register_schema(source.to_source(), &schema)?;
    }

    let report = engine.compare()?;
    let text = render::render_with_title(&report, config.title());
    Ok((report, text))
}

/// Compare the configured sources and write the rendered report to the configured output path.
pub fn compare(config: &ComparisonConfig) -> Result<CompareResult, SchemaDiffError> {
    let (report, text) = diff(config)?;
    let output = config.output_path();
    util::fs::write_to_path(&output, &text)?;
    log::debug!("wrote schema comparison to {:?}", output);

    Ok(CompareResult {
        report,
        text,
        output,
    })
}
