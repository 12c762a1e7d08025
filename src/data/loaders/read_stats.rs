// read_stats.rs - Read statistics loader (seqkit stats tabular output)

use super::{split_trimmed, LoadOptions, SampleSource};
use crate::data::format::parse_count;
use crate::data::outcome::{read_source, ParseOutcome, SkipReason, SourceKind};
use crate::data::record::{Contribution, ReadStats};
use crate::data::schema::READ_STATS;
use std::path::Path;

pub const SUFFIX: &str = "_stats.txt";

/// Assembly statistics share the suffix but belong to another tool
pub const ASSEMBLY_STATS_MARKER: &str = "_assembly_stats.txt";

pub struct ReadStatsSource;

impl SampleSource for ReadStatsSource {
    fn kind(&self) -> SourceKind {
        SourceKind::ReadStats
    }

    fn suffix(&self) -> &'static str {
        SUFFIX
    }

    fn excludes(&self, path: &Path) -> bool {
        path.file_name()
            .map(|n| n.to_string_lossy().contains(ASSEMBLY_STATS_MARKER))
            .unwrap_or(false)
    }

    fn parse(&self, path: &Path, options: &LoadOptions) -> ParseOutcome<Contribution> {
        parse_read_stats(path, options).map(Contribution::ReadStats)
    }
}

/// Read count and base count from the second line
pub fn parse_read_stats(path: &Path, options: &LoadOptions) -> ParseOutcome<ReadStats> {
    let skip = |reason: String| SkipReason::new(SourceKind::ReadStats, path, reason);
    let content = read_source(SourceKind::ReadStats, path)?;
    let mut lines = content.lines();

    let header = lines.next().unwrap_or("");
    if options.strict_headers {
        READ_STATS.check_header(&split_trimmed(header)).map_err(skip)?;
    }

    let line = lines
        .next()
        .ok_or_else(|| skip("no data line".to_string()))?;
    let cols: Vec<&str> = line.split('\t').collect();
    if !READ_STATS.accepts(&cols) {
        return Err(skip(format!(
            "data line has {} fields, expected at least {}",
            cols.len(),
            READ_STATS.min_fields
        )));
    }

    let reads = READ_STATS
        .get(&cols, "num_seqs")
        .ok_or_else(|| skip("missing num_seqs".to_string()))
        .and_then(|v| parse_count(v).map_err(skip))?;
    let bases = READ_STATS
        .get(&cols, "sum_len")
        .ok_or_else(|| skip("missing sum_len".to_string()))
        .and_then(|v| parse_count(v).map_err(skip))?;

    Ok(ReadStats { reads, bases })
}
