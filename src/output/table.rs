// table.rs - Tabular and JSON summary reports

use super::ensure_parent_dir;
use crate::core::SummaryReport;
use crate::data::feature::FeatureCategory;
use csv::WriterBuilder;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Fixed columns preceding one gene-list column per category
const FIXED_COLUMNS: [&str; 11] = [
    "Sample",
    "Taxonomy",
    "Reads",
    "Yield(Mb)",
    "Contigs",
    "N50",
    "Size(Mb)",
    "Scheme",
    "ST",
    "Virulence factors",
    "AMR total",
];

/// One row per sample; unpopulated fields are left empty
pub fn write_tsv_report(path: &Path, report: &SummaryReport) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| format!("Failed to create report '{}': {}", path.display(), e))?;

    let mut header: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();
    header.extend(FeatureCategory::ALL.iter().map(|c| c.to_string()));
    writer
        .write_record(&header)
        .map_err(|e| format!("Write error: {}", e))?;

    for record in report.samples.values() {
        let assembly = record.assembly.as_ref();
        let mut row = vec![
            record.sample.clone(),
            record.taxonomy.as_ref().map(|t| t.display()).unwrap_or_default(),
            record.read_stats.as_ref().map(|s| s.reads_display()).unwrap_or_default(),
            record.read_stats.as_ref().map(|s| s.yield_display()).unwrap_or_default(),
            assembly.and_then(|a| a.contigs.clone()).unwrap_or_default(),
            assembly.and_then(|a| a.n50_display()).unwrap_or_default(),
            assembly.and_then(|a| a.size_display()).unwrap_or_default(),
            record.typing.as_ref().map(|t| t.scheme.clone()).unwrap_or_default(),
            record.typing.as_ref().map(|t| t.sequence_type.clone()).unwrap_or_default(),
            record.virulence_count.clone().unwrap_or_default(),
            record.total_features().map(|n| n.to_string()).unwrap_or_default(),
        ];
        for category in FeatureCategory::ALL {
            let genes = record
                .features
                .as_ref()
                .and_then(|f| f.bucket(category))
                .map(|b| b.joined())
                .unwrap_or_default();
            row.push(genes);
        }
        writer
            .write_record(&row)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Full structured report as pretty JSON
pub fn write_json_report(path: &Path, report: &SummaryReport, generated: &str) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let file = File::create(path)
        .map_err(|e| format!("Failed to create report '{}': {}", path.display(), e))?;

    let document = serde_json::json!({
        "generated": generated,
        "version": env!("CARGO_PKG_VERSION"),
        "pan_genome": report.pan_genome,
        "samples": report.samples,
    });
    serde_json::to_writer_pretty(BufWriter::new(file), &document)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SummaryAggregator;
    use crate::data::record::{Contribution, ReadStats};
    use std::fs;
    use tempfile::TempDir;

    fn report() -> SummaryReport {
        let mut agg = SummaryAggregator::default();
        agg.contribute(
            "s1",
            Contribution::ReadStats(ReadStats {
                reads: 1500,
                bases: 2_500_000,
            }),
        );
        agg.finish()
    }

    #[test]
    fn test_write_tsv_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.tsv");
        write_tsv_report(&path, &report()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Sample\tTaxonomy\tReads"));
        assert!(lines[0].ends_with("HEAT\tOTHER"));
        let cols: Vec<&str> = lines[1].split('\t').collect();
        assert_eq!(cols.len(), 18);
        assert_eq!(&cols[..4], &["s1", "", "1,500", "2.5"]);
    }

    #[test]
    fn test_write_json_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.json");
        write_json_report(&path, &report(), "2024-01-01 10:00").unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["generated"], "2024-01-01 10:00");
        assert_eq!(value["samples"]["s1"]["read_stats"]["reads"], 1500);
        assert!(value["pan_genome"].is_null());
    }
}
