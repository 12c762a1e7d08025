// registry.rs - Registry of available key matchers

use std::collections::HashMap;
use super::traits::KeyMatcher;
use super::{DelimitedMatcher, ExactMatcher, PrefixMatcher};

/// Registry for available key matchers
pub struct KeyMatcherRegistry {
    matchers: HashMap<String, Box<dyn KeyMatcher>>,
}

impl KeyMatcherRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            matchers: HashMap::new(),
        };

        registry.register_matcher("prefix", Box::new(PrefixMatcher));
        registry.register_matcher("exact", Box::new(ExactMatcher));
        registry.register_matcher("delimited", Box::new(DelimitedMatcher));

        registry
    }

    /// Register a new matcher
    pub fn register_matcher(&mut self, name: &str, matcher: Box<dyn KeyMatcher>) {
        self.matchers.insert(name.to_string(), matcher);
    }

    /// Get a matcher by name
    pub fn get_matcher(&self, name: &str) -> Option<&dyn KeyMatcher> {
        self.matchers.get(name).map(|m| m.as_ref())
    }

    /// Take ownership of a matcher by name
    pub fn take_matcher(mut self, name: &str) -> Option<Box<dyn KeyMatcher>> {
        self.matchers.remove(name)
    }

    pub fn has_matcher(&self, name: &str) -> bool {
        self.matchers.contains_key(name)
    }

    /// List all available matchers as (name, description), sorted by name
    pub fn list_matchers(&self) -> Vec<(&str, &str)> {
        let mut list: Vec<(&str, &str)> = self
            .matchers
            .values()
            .map(|m| (m.name(), m.description()))
            .collect();
        list.sort();
        list
    }

    pub fn get_matcher_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.matchers.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for KeyMatcherRegistry {
    fn default() -> Self {
        Self::new()
    }
}
