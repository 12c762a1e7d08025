// record.rs - Per-sample summary records

use crate::data::feature::{FeatureCategory, FeatureRecord};
use crate::data::format::{millions, percentage, thousands};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Read count and yield from the read-stats table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadStats {
    pub reads: u64,
    pub bases: u64,
}

impl ReadStats {
    pub fn reads_display(&self) -> String {
        thousands(self.reads)
    }

    /// Yield in megabases, one decimal
    pub fn yield_display(&self) -> String {
        millions(self.bases, 1)
    }
}

/// Typing scheme and call; absent columns are kept as "-"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypingCall {
    pub scheme: String,
    pub sequence_type: String,
}

impl TypingCall {
    pub fn display(&self) -> String {
        format!("{}: {}", self.scheme, self.sequence_type)
    }
}

/// Per-category hits for one sample.
/// `hits` counts raw rows, `genes` holds deduplicated display strings,
/// so `hits >= genes.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub hits: usize,
    pub genes: BTreeSet<String>,
}

impl CategoryBucket {
    pub fn add(&mut self, display: String) {
        self.hits += 1;
        self.genes.insert(display);
    }

    /// Sorted, comma-joined gene list
    pub fn joined(&self) -> String {
        self.genes.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

/// Categorized features of one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProfile {
    buckets: BTreeMap<FeatureCategory, CategoryBucket>,
}

impl FeatureProfile {
    pub fn new() -> Self {
        Self {
            buckets: FeatureCategory::ALL
                .iter()
                .map(|c| (*c, CategoryBucket::default()))
                .collect(),
        }
    }

    pub fn from_records<I: IntoIterator<Item = FeatureRecord>>(records: I) -> Self {
        let mut profile = Self::new();
        for record in records {
            profile.add(&record);
        }
        profile
    }

    pub fn add(&mut self, record: &FeatureRecord) {
        self.buckets
            .entry(record.category)
            .or_default()
            .add(record.display());
    }

    pub fn bucket(&self, category: FeatureCategory) -> Option<&CategoryBucket> {
        self.buckets.get(&category)
    }

    pub fn hits(&self, category: FeatureCategory) -> usize {
        self.bucket(category).map(|b| b.hits).unwrap_or(0)
    }

    /// Sum of raw hits over all categories
    pub fn total_hits(&self) -> usize {
        self.buckets.values().map(|b| b.hits).sum()
    }

    /// Categories holding at least one gene, in taxonomy order
    pub fn categorized(&self) -> Vec<(FeatureCategory, &CategoryBucket)> {
        self.buckets
            .iter()
            .filter(|(_, b)| !b.genes.is_empty())
            .map(|(c, b)| (*c, b))
            .collect()
    }
}

impl Default for FeatureProfile {
    fn default() -> Self {
        Self::new()
    }
}

/// Best species-level call of a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesCall {
    pub name: String,
    pub percentage: f64,
}

/// Dominant taxonomy; `top` is None when no species row qualified
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyCall {
    pub top: Option<SpeciesCall>,
}

impl TaxonomyCall {
    pub fn display(&self) -> String {
        match &self.top {
            Some(call) => format!("{} ({}%)", call.name, percentage(call.percentage)),
            None => "Unknown (0%)".to_string(),
        }
    }
}

/// Assembly metrics for one column of the wide quality table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssemblyStats {
    /// Kept verbatim from the table
    pub contigs: Option<String>,
    pub n50: Option<u64>,
    pub total_length: Option<u64>,
}

impl AssemblyStats {
    /// Overlay fields set in `other`; later columns of the same table win
    pub fn merge(&mut self, other: AssemblyStats) {
        if other.contigs.is_some() {
            self.contigs = other.contigs;
        }
        if other.n50.is_some() {
            self.n50 = other.n50;
        }
        if other.total_length.is_some() {
            self.total_length = other.total_length;
        }
    }

    pub fn n50_display(&self) -> Option<String> {
        self.n50.map(thousands)
    }

    /// Genome size in megabases, two decimals
    pub fn size_display(&self) -> Option<String> {
        self.total_length.map(|len| millions(len, 2))
    }
}

/// Run-wide pan-genome gene counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanGenomeSummary {
    pub core_genes: Option<String>,
    pub total_genes: Option<String>,
}

impl PanGenomeSummary {
    pub fn is_empty(&self) -> bool {
        self.core_genes.is_none() && self.total_genes.is_none()
    }
}

/// What one source contributes to one sample
#[derive(Debug, Clone, PartialEq)]
pub enum Contribution {
    ReadStats(ReadStats),
    Typing(TypingCall),
    Features(FeatureProfile),
    VirulenceCount(String),
    Taxonomy(TaxonomyCall),
    Assembly(AssemblyStats),
}

/// Sparse per-sample record; each source owns exactly one slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub sample: String,
    pub read_stats: Option<ReadStats>,
    pub typing: Option<TypingCall>,
    pub features: Option<FeatureProfile>,
    pub virulence_count: Option<String>,
    pub taxonomy: Option<TaxonomyCall>,
    pub assembly: Option<AssemblyStats>,
}

impl SampleRecord {
    pub fn new(sample: &str) -> Self {
        Self {
            sample: sample.to_string(),
            ..Default::default()
        }
    }

    /// Store a contribution in the slot owned by its source.
    /// Assembly stats merge field by field, every other slot is replaced
    /// only by a re-parse of the same source.
    pub fn apply(&mut self, contribution: Contribution) {
        match contribution {
            Contribution::ReadStats(stats) => self.read_stats = Some(stats),
            Contribution::Typing(call) => self.typing = Some(call),
            Contribution::Features(profile) => self.features = Some(profile),
            Contribution::VirulenceCount(count) => self.virulence_count = Some(count),
            Contribution::Taxonomy(call) => self.taxonomy = Some(call),
            Contribution::Assembly(stats) => match &mut self.assembly {
                Some(existing) => existing.merge(stats),
                None => self.assembly = Some(stats),
            },
        }
    }

    pub fn total_features(&self) -> Option<usize> {
        self.features.as_ref().map(|f| f.total_hits())
    }
}
