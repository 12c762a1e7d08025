// lib.rs - bacsum library root

//! # bacsum - Summary reports and presence/absence matrices for bacterial genome pipelines
//!
//! This library collects the per-sample outputs of a bacterial genome analysis
//! pipeline (read statistics, MLST calls, AMR/stress gene tables, virulence
//! results, taxonomic classification, pan-genome and assembly QC tables) into
//! one record per sample, and builds sample x feature matrices from AMR and
//! virulence hit tables.
//!
//! ## Features
//!
//! - **Tolerant parsing**: malformed or missing files are skipped, never fatal
//! - **Plugin system**: pluggable key matchers for linking assembly columns to samples
//! - **Multiple formats**: HTML, TSV and JSON summary reports
//! - **Flexible filtering**: sample include/exclude regexes and virulence hit thresholds
//! - **Diagnostics**: every skipped file is recorded with a reason
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use bacsum::prelude::*;
//! use std::path::Path;
//!
//! // Summary pass over a results directory
//! let report = SummaryPass::new(Path::new("results")).run(SampleKeyResolver::default())?;
//! write_report(Path::new("summary_report.html"), ReportFormat::Html, &report)?;
//!
//! // AMR presence/absence matrix
//! let mut diagnostics = Diagnostics::new();
//! let matrix = build_matrix(
//!     MatrixKind::Amr,
//!     Path::new("results"),
//!     &HitFilter::default(),
//!     &SampleFilter::default(),
//!     &mut diagnostics,
//! )?;
//! write_matrix_outcome(Path::new("."), MatrixKind::Amr, matrix.as_ref())?;
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod keys;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{build_matrix, MatrixKind, PresenceAbsenceMatrix, SampleFilter};
    pub use crate::core::{SummaryAggregator, SummaryPass, SummaryReport};
    pub use crate::data::loaders::virulence::HitFilter;
    pub use crate::data::loaders::LoadOptions;
    pub use crate::data::{Diagnostics, FeatureCategory, SampleRecord, SkipReason};
    pub use crate::keys::{KeyMatcher, KeyMatcherRegistry, SampleKeyResolver};
    pub use crate::output::{write_diagnostics, write_matrix_outcome, write_report, ReportFormat};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{PresenceAbsenceMatrix, SummaryPass, SummaryReport};
pub use data::{Diagnostics, SampleRecord};
pub use keys::{KeyMatcherRegistry, SampleKeyResolver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "bacsum v{} - Bacterial genome pipeline summary and presence/absence matrices",
        VERSION
    )
}
