use unicode_truncate::{Alignment, UnicodeTruncateStr};

use crate::constants::{
    FIELD_NAME_HEADER, FIELD_NAME_WIDTH, NOT_PRESENT, NO_DIFFERENCES_MSG, RULE_WIDTH, TYPE_WIDTH,
};
use crate::model::diff::DiffReport;

/// Render the report with a title built from the source names, ie
/// `SCHEMA COMPARISON - YELLOW vs GREEN vs FHV`
pub fn render(report: &DiffReport) -> String {
    render_with_title(report, default_title(report))
}

pub fn default_title(report: &DiffReport) -> String {
    let names: Vec<String> = report
        .sources
        .iter()
        .map(|s| s.name.to_uppercase())
        .collect();
    format!("SCHEMA COMPARISON - {}", names.join(" vs "))
}

pub fn render_with_title(report: &DiffReport, title: impl AsRef<str>) -> String {
    let rule_width = rule_width(report.sources.len());
    let mut output: Vec<String> = vec![];

    output.push("=".repeat(rule_width));
    output.push(title.as_ref().to_string());
    output.push("=".repeat(rule_width));
    output.push(String::new());

    let mut header = vec![cell(FIELD_NAME_HEADER, FIELD_NAME_WIDTH)];
    header.extend(report.sources.iter().map(|s| cell(&s.label, TYPE_WIDTH)));
    output.push(header.join(" "));
    output.push("-".repeat(rule_width));

    for record in report.records.iter() {
        let mut row = vec![cell(&record.name, FIELD_NAME_WIDTH)];
        row.extend(
            record
                .types
                .iter()
                .map(|dtype| cell(dtype.as_deref().unwrap_or(NOT_PRESENT), TYPE_WIDTH)),
        );
        let mut line = row.join(" ");
        if let Some(annotation) = &record.annotation {
            line.push_str(&format!(" << {annotation}"));
        }
        output.push(line);
    }

    output.push(String::new());
    output.push("=".repeat(rule_width));
    output.push("SUMMARY OF DIFFERENCES".to_string());
    output.push("=".repeat(rule_width));
    output.push(String::new());

    for (source, total) in report.sources.iter().zip(report.source_totals.iter()) {
        output.push(format!("Total fields in {}: {}", source.label, total));
    }
    output.push(format!(
        "Common fields (all {}): {}",
        report.sources.len(),
        report.common.len()
    ));
    output.push(String::new());

    for (idx, source) in report.sources.iter().enumerate() {
        let bucket = &report.exclusive[idx];
        if bucket.is_empty() {
            continue;
        }

        output.push(format!("Fields ONLY in {} ({}):", source.label, bucket.len()));
        for name in bucket.iter() {
            let dtype = report
                .get_record(name)
                .and_then(|r| r.dtype_in(idx))
                .unwrap_or(NOT_PRESENT);
            output.push(format!("  - {name} ({dtype})"));
        }
        output.push(String::new());
    }

    if !report.type_mismatches.is_empty() {
        let label_width = report
            .sources
            .iter()
            .map(|s| s.label.chars().count() + 1)
            .max()
            .unwrap_or(0);

        output.push(format!(
            "Fields with DIFFERENT TYPES ({}):",
            report.type_mismatches.len()
        ));
        for name in report.type_mismatches.iter() {
            output.push(format!("  - {name}:"));
            let Some(record) = report.get_record(name) else {
                continue;
            };
            for (idx, source) in report.sources.iter().enumerate() {
                let label = format!("{}:", source.label);
                let dtype = record.dtype_in(idx).unwrap_or(NOT_PRESENT);
                output.push(format!("      {label:<label_width$} {dtype}"));
            }
        }
        output.push(String::new());
    }

    if !report.has_differences() {
        output.push(NO_DIFFERENCES_MSG.to_string());
    }

    output.join("\n")
}

fn rule_width(num_sources: usize) -> usize {
    let table_width = FIELD_NAME_WIDTH + num_sources * (TYPE_WIDTH + 1);
    table_width.max(RULE_WIDTH)
}

fn cell(value: &str, width: usize) -> String {
    value.unicode_pad(width, Alignment::Left, true).to_string()
}
