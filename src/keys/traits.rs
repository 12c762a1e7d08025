// traits.rs - Core traits for sample key matching strategies

use std::fmt::Debug;

/// Trait for wide-table column matching strategies.
/// Decides whether a column header produced by one upstream tool refers to
/// a sample key already produced by another source.
pub trait KeyMatcher: Send + Sync + Debug {
    /// Test whether `column` refers to the already known `key`
    fn matches(&self, column: &str, key: &str) -> bool;

    /// Get a human-readable name for this matcher
    fn name(&self) -> &'static str;

    /// Get a description of this matcher
    fn description(&self) -> &'static str;
}
