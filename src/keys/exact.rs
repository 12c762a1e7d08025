// exact.rs - Exact column/key matcher

use super::traits::KeyMatcher;

#[derive(Debug, Clone)]
pub struct ExactMatcher;

impl KeyMatcher for ExactMatcher {
    fn matches(&self, column: &str, key: &str) -> bool {
        column == key
    }

    fn name(&self) -> &'static str {
        "exact"
    }

    fn description(&self) -> &'static str {
        "Column header must equal the sample key"
    }
}
