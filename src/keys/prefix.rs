// prefix.rs - Bidirectional prefix matcher

use super::traits::KeyMatcher;

/// Accepts a key when either string is a prefix of the other.
/// `sample1` is also a prefix of `sample10_contigs`, so the first known key
/// offered wins whenever two keys share a prefix.
#[derive(Debug, Clone)]
pub struct PrefixMatcher;

impl KeyMatcher for PrefixMatcher {
    fn matches(&self, column: &str, key: &str) -> bool {
        column.starts_with(key) || key.starts_with(column)
    }

    fn name(&self) -> &'static str {
        "prefix"
    }

    fn description(&self) -> &'static str {
        "Column header and sample key match when either is a prefix of the other"
    }
}
