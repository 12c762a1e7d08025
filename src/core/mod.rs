// mod.rs - Core aggregation logic module

pub mod aggregator;
pub mod filter;
pub mod matrix;
pub mod pipeline;

// Re-export main types for convenience
pub use aggregator::{SummaryAggregator, SummaryReport};
pub use filter::SampleFilter;
pub use matrix::{build_matrix, collect_feature_sets, feature_sets, FeatureSets, MatrixKind, MatrixRow, PresenceAbsenceMatrix};
pub use pipeline::{scan_source, SummaryPass};
