// mod.rs - Output writers module

pub mod html;
pub mod matrix;
pub mod table;

use crate::core::SummaryReport;
use crate::data::outcome::Diagnostics;
use csv::WriterBuilder;
use std::fs::{create_dir_all, write};
use std::path::Path;
use std::str::FromStr;

pub use html::render_html;
pub use matrix::{write_matrix_outcome, write_presence_absence};
pub use table::{write_json_report, write_tsv_report};

/// Ensure parent directory exists before creating file
fn ensure_parent_dir(file_path: &Path) -> Result<(), String> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent)
            .map_err(|e| format!("Failed to create parent directory '{}': {}", parent.display(), e))?;
    }
    Ok(())
}

/// Timestamp shown in generated artifacts
pub fn generated_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()
}

/// Summary report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Html,
    Tsv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "tsv" => Ok(ReportFormat::Tsv),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!("Unsupported report format: {}. Use: html, tsv, json", s)),
        }
    }
}

/// Write the summary report in the specified format
pub fn write_report(path: &Path, format: ReportFormat, report: &SummaryReport) -> Result<(), String> {
    let generated = generated_timestamp();
    match format {
        ReportFormat::Html => {
            let html = render_html(report, &generated)?;
            ensure_parent_dir(path)?;
            write(path, html)
                .map_err(|e| format!("Failed to write report '{}': {}", path.display(), e))?;
        }
        ReportFormat::Tsv => write_tsv_report(path, report)?,
        ReportFormat::Json => write_json_report(path, report, &generated)?,
    }
    println!("✅ Report written to: {}", path.display());
    Ok(())
}

/// Write skip reasons as TSV (source, path, reason)
pub fn write_diagnostics(path: &Path, diagnostics: &Diagnostics) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| format!("Failed to create diagnostics file '{}': {}", path.display(), e))?;

    writer
        .write_record(["source", "path", "reason"])
        .map_err(|e| format!("Write error: {}", e))?;
    for skip in diagnostics.skips() {
        writer
            .write_record([
                skip.source.as_str(),
                &skip.path.display().to_string(),
                &skip.reason,
            ])
            .map_err(|e| format!("Write error: {}", e))?;
    }
    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}
