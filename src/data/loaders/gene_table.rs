// gene_table.rs - Resistance/virulence gene table loader (AMRFinderPlus output)

use super::{split_trimmed, LoadOptions, SampleSource};
use crate::data::feature::FeatureRecord;
use crate::data::outcome::{read_source, ParseOutcome, SkipReason, SourceKind};
use crate::data::record::{Contribution, FeatureProfile};
use crate::data::schema::GENE_TABLE;
use std::collections::BTreeSet;
use std::path::Path;

pub const SUFFIX: &str = "_amr.tsv";

/// Header of the gene column, used by the matrix pass
pub const GENE_SYMBOL_HEADER: &str = "Gene symbol";

pub struct GeneTableSource;

impl SampleSource for GeneTableSource {
    fn kind(&self) -> SourceKind {
        SourceKind::GeneTable
    }

    fn suffix(&self) -> &'static str {
        SUFFIX
    }

    fn parse(&self, path: &Path, options: &LoadOptions) -> ParseOutcome<Contribution> {
        parse_feature_records(path, options)
            .map(|records| Contribution::Features(FeatureProfile::from_records(records)))
    }
}

/// Classified gene hits, header skipped, short rows dropped
pub fn parse_feature_records(path: &Path, options: &LoadOptions) -> ParseOutcome<Vec<FeatureRecord>> {
    let content = read_source(SourceKind::GeneTable, path)?;
    let mut lines = content.lines();

    let header = lines.next().unwrap_or("");
    if options.strict_headers {
        GENE_TABLE
            .check_header(&header.split('\t').collect::<Vec<_>>())
            .map_err(|e| SkipReason::new(SourceKind::GeneTable, path, e))?;
    }

    let records = lines
        .map(split_trimmed)
        .filter(|cols| GENE_TABLE.accepts(cols))
        .filter_map(|cols| {
            Some(FeatureRecord::new(
                GENE_TABLE.get(&cols, "gene")?,
                GENE_TABLE.get(&cols, "element_type")?,
                GENE_TABLE.get(&cols, "subclass")?,
            ))
        })
        .collect();

    Ok(records)
}

/// Unique gene symbols of one table, for presence/absence matrices.
/// The gene column is found by header name, falling back to its position.
pub fn gene_symbols(path: &Path) -> ParseOutcome<BTreeSet<String>> {
    let content = read_source(SourceKind::GeneTable, path)?;
    let mut lines = content.lines();

    let header = lines
        .next()
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(|| SkipReason::new(SourceKind::GeneTable, path, "no columns to parse"))?;

    let gene_index = header
        .split('\t')
        .position(|h| h.trim() == GENE_SYMBOL_HEADER)
        .or_else(|| GENE_TABLE.index_of("gene"))
        .unwrap_or(0);

    let genes = lines
        .filter_map(|line| line.split('\t').nth(gene_index))
        .map(|gene| gene.trim())
        .filter(|gene| !gene.is_empty())
        .map(|gene| gene.to_string())
        .collect();

    Ok(genes)
}
