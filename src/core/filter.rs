// filter.rs - Sample include/exclude filtering

use regex::Regex;

/// Regex filters on sample keys, applied to reports and matrices
#[derive(Debug, Clone, Default)]
pub struct SampleFilter {
    pub include: Option<Regex>,
    pub exclude: Option<Regex>,
}

impl SampleFilter {
    pub fn new(include: Option<Regex>, exclude: Option<Regex>) -> Self {
        Self { include, exclude }
    }

    pub fn is_active(&self) -> bool {
        self.include.is_some() || self.exclude.is_some()
    }

    pub fn allows(&self, sample: &str) -> bool {
        if let Some(regex) = &self.include {
            if !regex.is_match(sample) {
                return false;
            }
        }
        if let Some(regex) = &self.exclude {
            if regex.is_match(sample) {
                return false;
            }
        }
        true
    }
}
