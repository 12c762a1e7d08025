// mod.rs - Sample key resolution module root

pub mod delimited;
pub mod exact;
pub mod prefix;
pub mod registry;
pub mod resolver;
pub mod traits;

// Re-export main types for convenience
pub use delimited::DelimitedMatcher;
pub use exact::ExactMatcher;
pub use prefix::PrefixMatcher;
pub use registry::KeyMatcherRegistry;
pub use resolver::{sample_key_from_path, ColumnResolution, SampleKeyResolver};
pub use traits::KeyMatcher;
