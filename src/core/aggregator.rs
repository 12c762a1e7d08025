// aggregator.rs - Per-sample record aggregation

use crate::data::outcome::{Diagnostics, ParseOutcome, SkipReason};
use crate::data::record::{AssemblyStats, Contribution, PanGenomeSummary, SampleRecord};
use crate::keys::{ColumnResolution, SampleKeyResolver};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Folds parser contributions into one record per canonical sample key.
/// Records are created on first touch and never removed; keys keep their
/// first-seen order, which is the order offered to the column resolver.
#[derive(Debug)]
pub struct SummaryAggregator {
    records: Vec<SampleRecord>,
    index: HashMap<String, usize>,
    pan_genome: Option<PanGenomeSummary>,
    diagnostics: Diagnostics,
    resolver: SampleKeyResolver,
}

impl SummaryAggregator {
    pub fn new(resolver: SampleKeyResolver) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            pan_genome: None,
            diagnostics: Diagnostics::new(),
            resolver,
        }
    }

    fn record_mut(&mut self, key: &str) -> &mut SampleRecord {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.records.push(SampleRecord::new(key));
                self.index.insert(key.to_string(), self.records.len() - 1);
                self.records.len() - 1
            }
        };
        &mut self.records[idx]
    }

    /// Single entry point for per-sample contributions
    pub fn contribute(&mut self, key: &str, contribution: Contribution) {
        self.record_mut(key).apply(contribution);
    }

    /// Contribute the outcome of one file parse, recording skips
    pub fn contribute_outcome(&mut self, key: &str, outcome: ParseOutcome<Contribution>) {
        if let Some(contribution) = self.diagnostics.absorb(outcome) {
            self.contribute(key, contribution);
        }
    }

    /// Attach one wide-table column to the first known key the resolver accepts,
    /// or to a new key named after the column
    pub fn contribute_column(&mut self, header: &str, stats: AssemblyStats) -> ColumnResolution {
        let resolution = self
            .resolver
            .resolve_column(header, self.records.iter().map(|r| r.sample.as_str()));
        self.contribute(resolution.key(), Contribution::Assembly(stats));
        resolution
    }

    pub fn set_pan_genome(&mut self, summary: PanGenomeSummary) {
        self.pan_genome = Some(summary);
    }

    pub fn skip(&mut self, reason: SkipReason) {
        self.diagnostics.record(reason);
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Known keys in first-seen order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.sample.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&SampleRecord> {
        self.index.get(key).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Close aggregation; records are keyed and ordered by sample
    pub fn finish(self) -> SummaryReport {
        SummaryReport {
            samples: self
                .records
                .into_iter()
                .map(|r| (r.sample.clone(), r))
                .collect(),
            pan_genome: self.pan_genome,
            diagnostics: self.diagnostics,
        }
    }
}

impl Default for SummaryAggregator {
    fn default() -> Self {
        Self::new(SampleKeyResolver::default())
    }
}

/// Finished summary: sorted sample records plus run-wide data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryReport {
    pub samples: BTreeMap<String, SampleRecord>,
    pub pan_genome: Option<PanGenomeSummary>,
    #[serde(skip)]
    pub diagnostics: Diagnostics,
}

impl SummaryReport {
    /// Keep only samples accepted by `keep`
    pub fn retain_samples<F: Fn(&str) -> bool>(&mut self, keep: F) {
        self.samples.retain(|name, _| keep(name));
    }

    pub fn sample_names(&self) -> Vec<&str> {
        self.samples.keys().map(|k| k.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::outcome::SourceKind;
    use crate::data::record::{ReadStats, TypingCall};
    use crate::keys::DelimitedMatcher;
    use std::path::Path;

    fn typing(st: &str) -> Contribution {
        Contribution::Typing(TypingCall {
            scheme: "ecoli".to_string(),
            sequence_type: st.to_string(),
        })
    }

    #[test]
    fn test_records_created_once_and_merged() {
        let mut agg = SummaryAggregator::default();
        agg.contribute("s1", typing("131"));
        agg.contribute("s1", Contribution::VirulenceCount("3".to_string()));
        agg.contribute("s2", typing("10"));

        assert_eq!(agg.len(), 2);
        let s1 = agg.get("s1").unwrap();
        assert_eq!(s1.typing.as_ref().unwrap().sequence_type, "131");
        assert_eq!(s1.virulence_count.as_deref(), Some("3"));
        assert_eq!(agg.keys().collect::<Vec<_>>(), vec!["s1", "s2"]);
    }

    #[test]
    fn test_skipped_outcome_creates_no_record() {
        let mut agg = SummaryAggregator::default();
        agg.contribute_outcome(
            "s1",
            Err(SkipReason::new(SourceKind::Typing, Path::new("s1_mlst.tsv"), "empty typing call")),
        );
        assert!(agg.is_empty());
        let report = agg.finish();
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn test_column_resolves_to_existing_key() {
        let mut agg = SummaryAggregator::default();
        agg.contribute("sample1", typing("131"));

        let resolution = agg.contribute_column(
            "sample1_contigs",
            AssemblyStats {
                contigs: Some("152".to_string()),
                n50: Some(123_456),
                total_length: Some(5_123_456),
            },
        );
        assert_eq!(resolution, ColumnResolution::Existing("sample1".to_string()));
        assert_eq!(agg.len(), 1);
        let record = agg.get("sample1").unwrap();
        assert_eq!(record.assembly.as_ref().unwrap().n50, Some(123_456));
        assert!(record.typing.is_some());
    }

    #[test]
    fn test_column_without_match_becomes_new_key() {
        let mut agg = SummaryAggregator::default();
        agg.contribute("sample1", typing("131"));
        let resolution = agg.contribute_column("other_asm", AssemblyStats::default());
        assert_eq!(resolution, ColumnResolution::New("other_asm".to_string()));
        assert_eq!(agg.len(), 2);
    }

    #[test]
    fn test_column_resolution_depends_on_pass_order() {
        // Assembly columns seen before any other source become their own keys
        let mut early = SummaryAggregator::default();
        early.contribute_column("sample1_contigs", AssemblyStats::default());
        early.contribute("sample1", typing("131"));
        assert_eq!(early.len(), 2);

        let mut late = SummaryAggregator::default();
        late.contribute("sample1", typing("131"));
        late.contribute_column("sample1_contigs", AssemblyStats::default());
        assert_eq!(late.len(), 1);
    }

    #[test]
    fn test_first_seen_key_wins_ambiguous_prefix() {
        let mut agg = SummaryAggregator::default();
        agg.contribute("sample1", typing("1"));
        agg.contribute("sample10", typing("10"));
        let resolution = agg.contribute_column("sample10_contigs", AssemblyStats::default());
        assert_eq!(resolution.key(), "sample1");

        let mut strict = SummaryAggregator::new(SampleKeyResolver::new(Box::new(DelimitedMatcher)));
        strict.contribute("sample1", typing("1"));
        strict.contribute("sample10", typing("10"));
        let resolution = strict.contribute_column("sample10_contigs", AssemblyStats::default());
        assert_eq!(resolution.key(), "sample10");
    }

    #[test]
    fn test_finish_sorts_and_filters() {
        let mut agg = SummaryAggregator::default();
        agg.contribute("zeta", typing("1"));
        agg.contribute(
            "alpha",
            Contribution::ReadStats(ReadStats { reads: 10, bases: 1000 }),
        );
        agg.contribute("control", typing("2"));

        let mut report = agg.finish();
        assert_eq!(report.sample_names(), vec!["alpha", "control", "zeta"]);
        report.retain_samples(|name| name != "control");
        assert_eq!(report.sample_names(), vec!["alpha", "zeta"]);
    }
}
