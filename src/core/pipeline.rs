// pipeline.rs - Ordered summary pass over all sources

use crate::core::aggregator::{SummaryAggregator, SummaryReport};
use crate::data::loaders::{
    assembly::{self, parse_assembly_report},
    discover,
    pangenome::{self, parse_pan_genome},
    sample_sources, LoadOptions, SampleSource,
};
use crate::keys::{sample_key_from_path, SampleKeyResolver};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Settings of one summary pass
#[derive(Debug)]
pub struct SummaryPass<'a> {
    pub input_dir: &'a Path,
    pub options: LoadOptions,
    pub show_progress: bool,
}

impl<'a> SummaryPass<'a> {
    pub fn new(input_dir: &'a Path) -> Self {
        Self {
            input_dir,
            options: LoadOptions::default(),
            show_progress: false,
        }
    }

    /// Run every source in fixed order: per-sample sources first, then the
    /// pan-genome summary, then the wide assembly table. Assembly columns can
    /// only join keys the earlier sources already created.
    pub fn run(&self, resolver: SampleKeyResolver) -> Result<SummaryReport, String> {
        let mut agg = SummaryAggregator::new(resolver);
        let sources = sample_sources();

        let pb = if self.show_progress {
            let pb = ProgressBar::new(sources.len() as u64 + 2);
            pb.set_style(
                ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                    .map_err(|e| format!("Invalid progress template: {}", e))?,
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        for source in &sources {
            pb.set_message(source.kind().as_str());
            scan_source(self.input_dir, source.as_ref(), &self.options, &mut agg)?;
            pb.inc(1);
        }

        pb.set_message(pangenome::FILE_NAME);
        let pan_path = self.input_dir.join(pangenome::FILE_NAME);
        if let Some(Some(summary)) = agg.diagnostics_mut().absorb(parse_pan_genome(&pan_path)) {
            agg.set_pan_genome(summary);
        }
        pb.inc(1);

        pb.set_message(assembly::FILE_NAME);
        let report_path = self.input_dir.join(assembly::FILE_NAME);
        if let Some(Some(columns)) = agg.diagnostics_mut().absorb(parse_assembly_report(&report_path)) {
            for column in columns {
                agg.contribute_column(&column.header, column.stats);
            }
        }
        pb.inc(1);
        pb.finish_and_clear();

        Ok(agg.finish())
    }
}

/// Parse every file of one per-sample source into the aggregator
pub fn scan_source(
    dir: &Path,
    source: &dyn SampleSource,
    options: &LoadOptions,
    agg: &mut SummaryAggregator,
) -> Result<usize, String> {
    let mut scanned = 0;
    for path in discover(dir, source.suffix())? {
        if source.excludes(&path) {
            continue;
        }
        let key = sample_key_from_path(&path, source.suffix());
        agg.contribute_outcome(&key, source.parse(&path, options));
        scanned += 1;
    }
    Ok(scanned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::feature::FeatureCategory;
    use std::fs;
    use tempfile::TempDir;

    const AMR_HEADER: &str = "Protein identifier\tContig id\tStart\tStop\tStrand\tGene symbol\tSequence name\tScope\tElement type\tElement subtype\tClass\tSubclass";

    fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let d = dir.path();
        write(
            d,
            "sample1_stats.txt",
            "file\tformat\ttype\tnum_seqs\tsum_len\nR1.fq\tFASTQ\tDNA\t2000000\t300000000\n",
        );
        write(
            d,
            "sample1_assembly_stats.txt",
            "file\tformat\ttype\tnum_seqs\tsum_len\nasm.fa\tFASTA\tDNA\t152\t5123456\n",
        );
        write(d, "sample1_mlst.tsv", "sample1.fa\tecoli\t131\n");
        write(d, "sample2_mlst.tsv", "");
        write(
            d,
            "sample1_amr.tsv",
            &format!(
                "{}\nx\tc\t1\t2\t+\tblaTEM-1\tn\tcore\tAMR\tAMR\tBETA-LACTAM\tX\nx\tc\t1\t2\t+\tmerA\tn\tplus\tSTRESS\tMETAL\tMERCURY\tX\n",
                AMR_HEADER
            ),
        );
        write(d, "sample1_virulence_summary.txt", "Total virulence factors: 5\n");
        write(d, "sample2_kraken2.report", " 88.00\t10\t10\tS\t573\t    Klebsiella pneumoniae\n");
        write(d, "summary_statistics.txt", "Core genes\t(99%)\t3000\nTotal genes\t(100%)\t5000\n");
        write(
            d,
            "report.tsv",
            "Assembly\tsample1_contigs\tsample3\n# contigs (>= 0 bp)\t152\t40\nN50\t123456\t99\nTotal length\t5123456\t4000000\n",
        );
        dir
    }

    #[test]
    fn test_full_summary_pass() {
        let dir = fixture();
        let report = SummaryPass::new(dir.path())
            .run(SampleKeyResolver::default())
            .unwrap();

        assert_eq!(report.sample_names(), vec!["sample1", "sample2", "sample3"]);

        let s1 = &report.samples["sample1"];
        assert_eq!(s1.read_stats.as_ref().unwrap().reads, 2_000_000);
        assert_eq!(s1.typing.as_ref().unwrap().display(), "ecoli: 131");
        let features = s1.features.as_ref().unwrap();
        assert_eq!(features.hits(FeatureCategory::Amr), 1);
        assert_eq!(features.hits(FeatureCategory::Other), 1);
        assert_eq!(s1.total_features(), Some(2));
        assert_eq!(s1.virulence_count.as_deref(), Some("5"));
        let assembly = s1.assembly.as_ref().unwrap();
        assert_eq!(assembly.contigs.as_deref(), Some("152"));
        assert_eq!(assembly.n50_display().as_deref(), Some("123,456"));

        let s2 = &report.samples["sample2"];
        assert!(s2.typing.is_none());
        assert_eq!(
            s2.taxonomy.as_ref().unwrap().display(),
            "Klebsiella pneumoniae (88.0%)"
        );

        let s3 = &report.samples["sample3"];
        assert_eq!(s3.assembly.as_ref().unwrap().size_display().as_deref(), Some("4.00"));

        let pan = report.pan_genome.as_ref().unwrap();
        assert_eq!(pan.core_genes.as_deref(), Some("3000"));
        assert_eq!(pan.total_genes.as_deref(), Some("5000"));

        // Empty typing file is the only skip
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn test_empty_directory_yields_empty_report() {
        let dir = TempDir::new().unwrap();
        let report = SummaryPass::new(dir.path())
            .run(SampleKeyResolver::default())
            .unwrap();
        assert!(report.samples.is_empty());
        assert!(report.pan_genome.is_none());
        assert!(report.diagnostics.is_empty());
    }
}
