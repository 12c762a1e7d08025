// matrix.rs - Presence/absence matrices over per-sample feature sets

use crate::core::filter::SampleFilter;
use crate::data::loaders::gene_table::{self, gene_symbols};
use crate::data::loaders::virulence::{self, virulence_factors, HitFilter};
use crate::data::loaders::discover;
use crate::data::outcome::{Diagnostics, ParseOutcome};
use crate::keys::sample_key_from_path;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Sample key -> features called in that sample
pub type FeatureSets = BTreeMap<String, BTreeSet<String>>;

/// Feature families with their own matrix pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatrixKind {
    Amr,
    Virulence,
}

impl MatrixKind {
    pub fn label(&self) -> &'static str {
        match self {
            MatrixKind::Amr => "AMR",
            MatrixKind::Virulence => "virulence",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            MatrixKind::Amr => gene_table::SUFFIX,
            MatrixKind::Virulence => virulence::HITS_SUFFIX,
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            MatrixKind::Amr => "amr_matrix.tsv",
            MatrixKind::Virulence => "virulence_matrix.tsv",
        }
    }
}

/// One matrix row; cells follow the matrix feature order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub sample: String,
    pub cells: Vec<bool>,
}

/// Samples x features, columns are the sorted union of all features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresenceAbsenceMatrix {
    pub features: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

impl PresenceAbsenceMatrix {
    /// Build from per-sample sets; `None` when there is nothing to tabulate.
    /// Every row carries a cell for every feature.
    pub fn build(sets: &FeatureSets) -> Option<Self> {
        if sets.is_empty() {
            return None;
        }

        let features: Vec<String> = sets
            .values()
            .flatten()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let rows = sets
            .iter()
            .map(|(sample, present)| MatrixRow {
                sample: sample.clone(),
                cells: features.iter().map(|f| present.contains(f)).collect(),
            })
            .collect();

        Some(Self { features, rows })
    }

    pub fn n_samples(&self) -> usize {
        self.rows.len()
    }

    pub fn n_features(&self) -> usize {
        self.features.len()
    }

    /// Cell lookup; None for unknown sample or feature
    pub fn contains(&self, sample: &str, feature: &str) -> Option<bool> {
        let col = self.features.iter().position(|f| f == feature)?;
        self.rows
            .iter()
            .find(|r| r.sample == sample)
            .map(|r| r.cells[col])
    }
}

/// Scan `dir` for `*{suffix}` files and extract one feature set per sample.
/// Samples whose set is empty are left out entirely.
pub fn collect_feature_sets<F>(
    dir: &Path,
    suffix: &str,
    extract: F,
    diagnostics: &mut Diagnostics,
) -> Result<FeatureSets, String>
where
    F: Fn(&Path) -> ParseOutcome<BTreeSet<String>>,
{
    let mut sets = FeatureSets::new();
    for path in discover(dir, suffix)? {
        let sample = sample_key_from_path(&path, suffix);
        if let Some(features) = diagnostics.absorb(extract(&path)) {
            if !features.is_empty() {
                sets.insert(sample, features);
            }
        }
    }
    Ok(sets)
}

/// Feature sets for one matrix kind
pub fn feature_sets(
    kind: MatrixKind,
    dir: &Path,
    filter: &HitFilter,
    diagnostics: &mut Diagnostics,
) -> Result<FeatureSets, String> {
    match kind {
        MatrixKind::Amr => collect_feature_sets(dir, kind.suffix(), gene_symbols, diagnostics),
        MatrixKind::Virulence => collect_feature_sets(
            dir,
            kind.suffix(),
            |path| virulence_factors(path, filter),
            diagnostics,
        ),
    }
}

/// Run one matrix pass: collect feature sets from `dir`, keep the samples
/// `sample_filter` allows, and build the matrix. `None` means no results.
pub fn build_matrix(
    kind: MatrixKind,
    dir: &Path,
    hit_filter: &HitFilter,
    sample_filter: &SampleFilter,
    diagnostics: &mut Diagnostics,
) -> Result<Option<PresenceAbsenceMatrix>, String> {
    let mut sets = feature_sets(kind, dir, hit_filter, diagnostics)?;
    if sample_filter.is_active() {
        sets.retain(|sample, _| sample_filter.allows(sample));
    }
    Ok(PresenceAbsenceMatrix::build(&sets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_build_union_and_zero_cells() {
        let mut sets = FeatureSets::new();
        sets.insert("s2".to_string(), set(&["tetA", "blaTEM"]));
        sets.insert("s1".to_string(), set(&["sul1"]));

        let matrix = PresenceAbsenceMatrix::build(&sets).unwrap();
        assert_eq!(matrix.features, vec!["blaTEM", "sul1", "tetA"]);
        assert_eq!(matrix.rows[0].sample, "s1");
        assert_eq!(matrix.rows[0].cells, vec![false, true, false]);
        assert_eq!(matrix.rows[1].cells, vec![true, false, true]);
        assert!(matrix.rows.iter().all(|r| r.cells.len() == matrix.n_features()));
        assert_eq!(matrix.contains("s2", "tetA"), Some(true));
        assert_eq!(matrix.contains("s1", "tetA"), Some(false));
        assert_eq!(matrix.contains("s3", "tetA"), None);
    }

    #[test]
    fn test_build_empty_is_no_results() {
        assert!(PresenceAbsenceMatrix::build(&FeatureSets::new()).is_none());
    }

    #[test]
    fn test_empty_sets_excluded_from_matrix() {
        let dir = TempDir::new().unwrap();
        let hit = "c1\tVF1\t98.0\t300\t0\t0\t1\t300\t1\t300\t0\t500\ttoxinX (VF0001)";
        fs::write(dir.path().join("A_virulence.tsv"), format!("{}\n", hit)).unwrap();
        fs::write(dir.path().join("B_virulence.tsv"), "").unwrap();

        let mut diagnostics = Diagnostics::new();
        let sets = feature_sets(
            MatrixKind::Virulence,
            dir.path(),
            &HitFilter::default(),
            &mut diagnostics,
        )
        .unwrap();
        assert_eq!(sets.len(), 1);

        let matrix = PresenceAbsenceMatrix::build(&sets).unwrap();
        assert_eq!(matrix.n_samples(), 1);
        assert_eq!(matrix.features, vec!["toxinX"]);
        assert_eq!(matrix.contains("A", "toxinX"), Some(true));
    }

    #[test]
    fn test_low_identity_hit_excluded() {
        let dir = TempDir::new().unwrap();
        let hit = "c1\tVF1\t65.0\t300\t0\t0\t1\t300\t1\t300\t0\t500\ttoxinY (VF0002)";
        fs::write(dir.path().join("A_virulence.tsv"), format!("{}\n", hit)).unwrap();

        let mut diagnostics = Diagnostics::new();
        let sets = feature_sets(
            MatrixKind::Virulence,
            dir.path(),
            &HitFilter::default(),
            &mut diagnostics,
        )
        .unwrap();
        assert!(sets.is_empty());
        assert!(PresenceAbsenceMatrix::build(&sets).is_none());
    }

    #[test]
    fn test_amr_feature_sets() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("s1_amr.tsv"), "Gene symbol\tClass\nblaTEM\tX\n").unwrap();
        fs::write(dir.path().join("s2_amr.tsv"), "Gene symbol\tClass\n").unwrap();
        fs::write(dir.path().join("s3_amr.tsv"), "").unwrap();

        let mut diagnostics = Diagnostics::new();
        let sets = feature_sets(MatrixKind::Amr, dir.path(), &HitFilter::default(), &mut diagnostics)
            .unwrap();
        assert_eq!(sets.keys().collect::<Vec<_>>(), vec!["s1"]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_build_matrix_applies_sample_filter() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("s1_amr.tsv"), "Gene symbol\tClass\nblaTEM\tX\n").unwrap();
        fs::write(dir.path().join("s1_ctrl_amr.tsv"), "Gene symbol\tClass\ntetA\tX\n").unwrap();

        let filter = SampleFilter::new(None, Some(regex::Regex::new("_ctrl$").unwrap()));
        let mut diagnostics = Diagnostics::new();
        let matrix = build_matrix(
            MatrixKind::Amr,
            dir.path(),
            &HitFilter::default(),
            &filter,
            &mut diagnostics,
        )
        .unwrap()
        .unwrap();
        assert_eq!(matrix.n_samples(), 1);
        assert_eq!(matrix.features, vec!["blaTEM"]);
    }
}
