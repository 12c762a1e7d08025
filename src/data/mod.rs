// mod.rs - Data structures module

pub mod feature;
pub mod format;
pub mod loaders;
pub mod outcome;
pub mod record;
pub mod schema;

// Re-export main types for convenience
pub use feature::{FeatureCategory, FeatureRecord};
pub use outcome::{Diagnostics, ParseOutcome, SkipReason, SourceKind};
pub use record::{
    AssemblyStats, CategoryBucket, Contribution, FeatureProfile, PanGenomeSummary, ReadStats,
    SampleRecord, SpeciesCall, TaxonomyCall, TypingCall,
};
pub use schema::{Column, ColumnSchema};
