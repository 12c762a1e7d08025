// resolver.rs - Canonical sample key resolution

use std::path::Path;
use super::traits::KeyMatcher;
use super::PrefixMatcher;

/// Derive a sample key from a source file name and its fixed suffix.
/// Files not ending with the suffix keep their full base name as the key.
pub fn sample_key_from_path(path: &Path, suffix: &str) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    match name.strip_suffix(suffix) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Outcome of resolving a wide-table column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnResolution {
    /// Column refers to a key another source already produced
    Existing(String),
    /// No known key matched; the header itself becomes a new key
    New(String),
}

impl ColumnResolution {
    pub fn key(&self) -> &str {
        match self {
            ColumnResolution::Existing(key) | ColumnResolution::New(key) => key,
        }
    }

    pub fn into_key(self) -> String {
        match self {
            ColumnResolution::Existing(key) | ColumnResolution::New(key) => key,
        }
    }
}

/// Maps column headers of wide tables onto known sample keys using a
/// pluggable matching strategy. The first known key accepted by the
/// matcher wins; the outcome therefore depends on the order keys are offered.
#[derive(Debug)]
pub struct SampleKeyResolver {
    matcher: Box<dyn KeyMatcher>,
}

impl SampleKeyResolver {
    pub fn new(matcher: Box<dyn KeyMatcher>) -> Self {
        Self { matcher }
    }

    pub fn matcher_name(&self) -> &'static str {
        self.matcher.name()
    }

    /// Resolve `column` against `known` keys, first match wins
    pub fn resolve_column<'a, I>(&self, column: &str, known: I) -> ColumnResolution
    where
        I: IntoIterator<Item = &'a str>,
    {
        known
            .into_iter()
            .find(|key| self.matcher.matches(column, key))
            .map(|key| ColumnResolution::Existing(key.to_string()))
            .unwrap_or_else(|| ColumnResolution::New(column.to_string()))
    }
}

impl Default for SampleKeyResolver {
    fn default() -> Self {
        Self::new(Box::new(PrefixMatcher))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::DelimitedMatcher;
    use std::path::PathBuf;

    #[test]
    fn test_key_from_path_strips_suffix() {
        let path = PathBuf::from("/data/run1/sampleA_mlst.tsv");
        assert_eq!(sample_key_from_path(&path, "_mlst.tsv"), "sampleA");
    }

    #[test]
    fn test_key_from_path_without_suffix_keeps_name() {
        let path = PathBuf::from("/data/run1/sampleA.tsv");
        assert_eq!(sample_key_from_path(&path, "_mlst.tsv"), "sampleA.tsv");
    }

    #[test]
    fn test_resolve_column_prefix_match() {
        let resolver = SampleKeyResolver::default();
        let resolution = resolver.resolve_column("sample1_contigs", ["other", "sample1"]);
        assert_eq!(resolution, ColumnResolution::Existing("sample1".to_string()));
    }

    #[test]
    fn test_resolve_column_unknown_becomes_new_key() {
        let resolver = SampleKeyResolver::default();
        let resolution = resolver.resolve_column("assembly_x", ["sample1"]);
        assert_eq!(resolution, ColumnResolution::New("assembly_x".to_string()));
        assert_eq!(resolution.key(), "assembly_x");
    }

    #[test]
    fn test_resolve_column_first_match_wins() {
        let resolver = SampleKeyResolver::default();
        let first = resolver.resolve_column("sample10_contigs", ["sample1", "sample10"]);
        assert_eq!(first.key(), "sample1");
        let reversed = resolver.resolve_column("sample10_contigs", ["sample10", "sample1"]);
        assert_eq!(reversed.key(), "sample10");
    }

    #[test]
    fn test_resolve_column_with_delimited_matcher() {
        let resolver = SampleKeyResolver::new(Box::new(DelimitedMatcher));
        let resolution = resolver.resolve_column("sample10_contigs", ["sample1", "sample10"]);
        assert_eq!(resolution.key(), "sample10");
        assert_eq!(resolver.matcher_name(), "delimited");
    }
}
