// outcome.rs - Per-file parse outcomes and skip diagnostics

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::path::{Path, PathBuf};

/// Source kinds consumed by the engine, in summary pass order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    ReadStats,
    Typing,
    GeneTable,
    VirulenceSummary,
    Taxonomy,
    PanGenome,
    AssemblyQuality,
    VirulenceHits,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::ReadStats => "read-stats",
            SourceKind::Typing => "typing",
            SourceKind::GeneTable => "gene-table",
            SourceKind::VirulenceSummary => "virulence-summary",
            SourceKind::Taxonomy => "taxonomy",
            SourceKind::PanGenome => "pan-genome",
            SourceKind::AssemblyQuality => "assembly-quality",
            SourceKind::VirulenceHits => "virulence-hits",
        }
    }
}

impl Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a file contributed nothing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkipReason {
    pub source: SourceKind,
    pub path: PathBuf,
    pub reason: String,
}

impl SkipReason {
    pub fn new(source: SourceKind, path: &Path, reason: impl Into<String>) -> Self {
        Self {
            source,
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.source, self.path.display(), self.reason)
    }
}

/// Result of parsing one source file: a contribution or a skip
pub type ParseOutcome<T> = Result<T, SkipReason>;

/// Read a whole source file, turning I/O failures into a skip
pub fn read_source(source: SourceKind, path: &Path) -> ParseOutcome<String> {
    std::fs::read_to_string(path)
        .map_err(|e| SkipReason::new(source, path, format!("unreadable: {}", e)))
}

/// Skip reasons collected over a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    skips: Vec<SkipReason>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, skip: SkipReason) {
        self.skips.push(skip);
    }

    /// Keep the value of a successful outcome, record a skip otherwise
    pub fn absorb<T>(&mut self, outcome: ParseOutcome<T>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(skip) => {
                self.record(skip);
                None
            }
        }
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.skips.extend(other.skips);
    }

    pub fn skips(&self) -> &[SkipReason] {
        &self.skips
    }

    pub fn len(&self) -> usize {
        self.skips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skips.is_empty()
    }
}
