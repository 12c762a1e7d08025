// mod.rs - Source format loaders

pub mod assembly;
pub mod gene_table;
pub mod pangenome;
pub mod read_stats;
pub mod taxonomy;
pub mod typing;
pub mod virulence;

use crate::data::outcome::{ParseOutcome, SourceKind};
use crate::data::record::Contribution;
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// Options shared by every loader
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Skip files whose header disagrees with the column schema
    pub strict_headers: bool,
}

/// A per-sample source: one file per sample, found by a fixed suffix
pub trait SampleSource {
    fn kind(&self) -> SourceKind;

    /// File name suffix, including extension
    fn suffix(&self) -> &'static str;

    /// Whether a file matching the suffix still belongs to another source
    fn excludes(&self, _path: &Path) -> bool {
        false
    }

    /// Parse one file into this source's contribution
    fn parse(&self, path: &Path, options: &LoadOptions) -> ParseOutcome<Contribution>;
}

/// Per-sample sources in summary pass order
pub fn sample_sources() -> Vec<Box<dyn SampleSource>> {
    vec![
        Box::new(read_stats::ReadStatsSource),
        Box::new(typing::TypingSource),
        Box::new(gene_table::GeneTableSource),
        Box::new(virulence::VirulenceSummarySource),
        Box::new(taxonomy::TaxonomySource),
    ]
}

/// Enumerate `dir/*{suffix}` in glob order
pub fn discover(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, String> {
    let dir_str = dir
        .to_str()
        .ok_or_else(|| format!("Input directory is not valid UTF-8: {}", dir.display()))?;
    let pattern = format!("{}/*{}", Pattern::escape(dir_str), Pattern::escape(suffix));

    let mut paths = Vec::new();
    for entry in glob(&pattern).map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))? {
        match entry {
            Ok(path) if path.is_file() => paths.push(path),
            Ok(_) => {}
            Err(e) => eprintln!("⚠️  Error reading directory entry: {}", e),
        }
    }
    Ok(paths)
}

/// Split a line on tabs after trimming surrounding whitespace
pub(crate) fn split_trimmed(line: &str) -> Vec<&str> {
    line.trim().split('\t').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_by_suffix() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b_mlst.tsv"), "x").unwrap();
        fs::write(dir.path().join("a_mlst.tsv"), "x").unwrap();
        fs::write(dir.path().join("a_amr.tsv"), "x").unwrap();
        fs::create_dir(dir.path().join("dir_mlst.tsv")).unwrap();

        let found = discover(dir.path(), "_mlst.tsv").unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a_mlst.tsv", "b_mlst.tsv"]);
    }

    #[test]
    fn test_discover_missing_dir_is_empty() {
        let found = discover(Path::new("/nonexistent/bacsum"), "_amr.tsv").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_sample_sources_order() {
        let kinds: Vec<SourceKind> = sample_sources().iter().map(|s| s.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SourceKind::ReadStats,
                SourceKind::Typing,
                SourceKind::GeneTable,
                SourceKind::VirulenceSummary,
                SourceKind::Taxonomy,
            ]
        );
    }
}
