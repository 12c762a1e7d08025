// virulence.rs - Virulence summary and BLAST hit loaders

use super::{LoadOptions, SampleSource};
use crate::data::outcome::{read_source, ParseOutcome, SourceKind};
use crate::data::record::Contribution;
use crate::data::schema::VIRULENCE_HITS;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

pub const SUMMARY_SUFFIX: &str = "_virulence_summary.txt";
pub const HITS_SUFFIX: &str = "_virulence.tsv";

pub const SUMMARY_MARKER: &str = "Total virulence factors";

pub struct VirulenceSummarySource;

impl SampleSource for VirulenceSummarySource {
    fn kind(&self) -> SourceKind {
        SourceKind::VirulenceSummary
    }

    fn suffix(&self) -> &'static str {
        SUMMARY_SUFFIX
    }

    fn parse(&self, path: &Path, _options: &LoadOptions) -> ParseOutcome<Contribution> {
        parse_virulence_count(path).map(Contribution::VirulenceCount)
    }
}

/// Count after the last marker and its last colon; "0" without a marker
pub fn parse_virulence_count(path: &Path) -> ParseOutcome<String> {
    let content = read_source(SourceKind::VirulenceSummary, path)?;
    Ok(extract_count(&content))
}

fn extract_count(content: &str) -> String {
    if !content.contains(SUMMARY_MARKER) {
        return "0".to_string();
    }
    content
        .rsplit(SUMMARY_MARKER)
        .next()
        .and_then(|tail| tail.rsplit(':').next())
        .map(|count| count.trim().to_string())
        .unwrap_or_else(|| "0".to_string())
}

/// Quality thresholds for virulence hits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitFilter {
    /// Minimum percent identity
    pub min_identity: f64,
    /// Minimum alignment length
    pub min_length: f64,
}

impl HitFilter {
    pub fn accepts(&self, identity: f64, length: f64) -> bool {
        identity >= self.min_identity && length >= self.min_length
    }
}

impl Default for HitFilter {
    fn default() -> Self {
        Self {
            min_identity: 70.0,
            min_length: 50.0,
        }
    }
}

/// Factor name from a subject title: text before the first '(' trimmed.
/// Differently annotated titles can collapse onto the same name.
pub fn factor_name(title: &str) -> &str {
    title.split('(').next().unwrap_or("").trim()
}

/// Distinct virulence factors among hits passing the filter
pub fn virulence_factors(path: &Path, filter: &HitFilter) -> ParseOutcome<BTreeSet<String>> {
    let content = read_source(SourceKind::VirulenceHits, path)?;

    let factors = content
        .lines()
        .map(|line| line.split('\t').collect::<Vec<_>>())
        .filter(|cols| VIRULENCE_HITS.accepts(cols))
        .filter_map(|cols| {
            let identity = VIRULENCE_HITS.get(&cols, "pident")?.trim().parse::<f64>().ok()?;
            let length = VIRULENCE_HITS.get(&cols, "length")?.trim().parse::<f64>().ok()?;
            if !filter.accepts(identity, length) {
                return None;
            }
            let name = factor_name(VIRULENCE_HITS.get(&cols, "stitle")?);
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect();

    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn hit(identity: &str, length: &str, title: &str) -> String {
        format!(
            "contig_1\tVFG000001\t{}\t{}\t3\t0\t1\t500\t1\t500\t1e-50\t900\t{}",
            identity, length, title
        )
    }

    #[test]
    fn test_extract_count() {
        assert_eq!(extract_count("Sample s1\nTotal virulence factors: 12\n"), "12");
        assert_eq!(extract_count("nothing here"), "0");
        assert_eq!(
            extract_count("Total virulence factors: 3\nTotal virulence factors (strict): 2\n"),
            "2"
        );
    }

    #[test]
    fn test_parse_virulence_count_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s1_virulence_summary.txt");
        fs::write(&path, "Total virulence factors: 7").unwrap();
        assert_eq!(parse_virulence_count(&path).unwrap(), "7");
    }

    #[test]
    fn test_factor_name() {
        assert_eq!(factor_name("toxinX (VF0001) [Escherichia coli]"), "toxinX");
        assert_eq!(factor_name("  fimH  "), "fimH");
    }

    #[test]
    fn test_virulence_factors_filtering() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s1_virulence.tsv");
        let content = [
            hit("99.5", "500", "toxinX (VF0001) [E. coli]"),
            hit("65.0", "500", "lowIdentity (VF0002)"),
            hit("90.0", "40", "shortHit (VF0003)"),
            hit("70.0", "50", "fimH (VF0004)"),
            hit("abc", "500", "badRow (VF0005)"),
            "too\tfew\tfields".to_string(),
        ]
        .join("\n");
        fs::write(&path, content).unwrap();

        let factors = virulence_factors(&path, &HitFilter::default()).unwrap();
        assert_eq!(factors.into_iter().collect::<Vec<_>>(), vec!["fimH", "toxinX"]);
    }

    #[test]
    fn test_custom_filter() {
        let filter = HitFilter {
            min_identity: 60.0,
            min_length: 10.0,
        };
        assert!(filter.accepts(65.0, 40.0));
        assert!(!HitFilter::default().accepts(65.0, 500.0));
    }
}
