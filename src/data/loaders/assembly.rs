// assembly.rs - Assembly quality loader (QUAST report.tsv, wide format)

use super::split_trimmed;
use crate::data::format::parse_count;
use crate::data::outcome::{read_source, ParseOutcome, SourceKind};
use crate::data::record::AssemblyStats;
use std::path::Path;

pub const FILE_NAME: &str = "report.tsv";

pub const CONTIGS_ROW: &str = "# contigs (>= 0 bp)";
pub const N50_ROW: &str = "N50";
pub const TOTAL_LENGTH_ROW: &str = "Total length";

/// One assembly column: the header as written by the quality tool
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyColumn {
    pub header: String,
    pub stats: AssemblyStats,
}

/// Metrics per column; a missing or empty report contributes nothing.
/// Short rows and non-numeric cells leave only that field unset.
pub fn parse_assembly_report(path: &Path) -> ParseOutcome<Option<Vec<AssemblyColumn>>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = read_source(SourceKind::AssemblyQuality, path)?;
    let rows: Vec<Vec<&str>> = content.lines().map(split_trimmed).collect();

    let Some(header) = rows.first() else {
        return Ok(None);
    };

    let columns = header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, name)| AssemblyColumn {
            header: name.to_string(),
            stats: column_stats(&rows, i),
        })
        .collect();

    Ok(Some(columns))
}

fn column_stats(rows: &[Vec<&str>], column: usize) -> AssemblyStats {
    let mut stats = AssemblyStats::default();
    for row in rows {
        let (Some(label), Some(value)) = (row.first(), row.get(column)) else {
            continue;
        };
        match *label {
            N50_ROW => {
                if let Ok(n50) = parse_count(value) {
                    stats.n50 = Some(n50);
                }
            }
            TOTAL_LENGTH_ROW => {
                if let Ok(length) = parse_count(value) {
                    stats.total_length = Some(length);
                }
            }
            CONTIGS_ROW => stats.contigs = Some(value.trim().to_string()),
            _ => {}
        }
    }
    stats
}
