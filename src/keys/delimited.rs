// delimited.rs - Prefix matcher restricted to name boundaries

use super::traits::KeyMatcher;

/// Characters accepted right after a shared prefix
const BOUNDARY_CHARS: [char; 3] = ['_', '.', '-'];

/// Stricter prefix matcher: the shorter name must be followed by a
/// boundary character (or nothing) in the longer one.
/// Keeps `sample1` from capturing `sample10_contigs`.
#[derive(Debug, Clone)]
pub struct DelimitedMatcher;

impl DelimitedMatcher {
    fn prefix_at_boundary(longer: &str, shorter: &str) -> bool {
        match longer.strip_prefix(shorter) {
            Some(rest) => rest.is_empty() || rest.starts_with(&BOUNDARY_CHARS[..]),
            None => false,
        }
    }
}

impl KeyMatcher for DelimitedMatcher {
    fn matches(&self, column: &str, key: &str) -> bool {
        Self::prefix_at_boundary(column, key) || Self::prefix_at_boundary(key, column)
    }

    fn name(&self) -> &'static str {
        "delimited"
    }

    fn description(&self) -> &'static str {
        "Prefix match only when the remainder starts at '_', '.' or '-'"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_boundaries() {
        let matcher = DelimitedMatcher;
        assert!(matcher.matches("sample1_contigs", "sample1"));
        assert!(matcher.matches("sample1", "sample1.scaffolds"));
        assert!(matcher.matches("sample1", "sample1"));
        assert!(!matcher.matches("sample10_contigs", "sample1"));
        assert!(!matcher.matches("sample1", "sample10"));
    }
}
