// pangenome.rs - Pan-genome summary loader (Panaroo summary_statistics.txt)

use crate::data::outcome::{read_source, ParseOutcome, SourceKind};
use crate::data::record::PanGenomeSummary;
use std::path::Path;

pub const FILE_NAME: &str = "summary_statistics.txt";

const CORE_LABEL: &str = "Core genes";
const TOTAL_LABEL: &str = "Total genes";

/// Core and total gene counts; a missing file contributes nothing
pub fn parse_pan_genome(path: &Path) -> ParseOutcome<Option<PanGenomeSummary>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = read_source(SourceKind::PanGenome, path)?;
    let summary = scan_labels(&content);
    Ok((!summary.is_empty()).then_some(summary))
}

/// Last whitespace token of each labelled line; later lines overwrite earlier ones
fn scan_labels(content: &str) -> PanGenomeSummary {
    let mut summary = PanGenomeSummary::default();
    for line in content.lines() {
        if line.contains(CORE_LABEL) {
            summary.core_genes = line.split_whitespace().last().map(str::to_string);
        }
        if line.contains(TOTAL_LABEL) {
            summary.total_genes = line.split_whitespace().last().map(str::to_string);
        }
    }
    summary
}
