// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// bacsum - Bacterial genome pipeline summary and presence/absence matrices
pub struct Args {
    /// directory with per-sample tool outputs for the summary report (default: .)
    #[argh(option, default = "String::from(\".\")")]
    pub input_dir: String,

    /// directory with *_amr.tsv files for the AMR matrix (default: input dir)
    #[argh(option)]
    pub amr_dir: Option<String>,

    /// directory with *_virulence.tsv files for the virulence matrix (default: input dir)
    #[argh(option)]
    pub virulence_dir: Option<String>,

    /// output directory for report and matrices (default: .)
    #[argh(option, default = "String::from(\".\")")]
    pub output_dir: String,

    /// report file name inside the output directory (default: summary_report.html)
    #[argh(option, default = "String::from(\"summary_report.html\")")]
    pub report: String,

    /// report format: html, tsv, json (default: html)
    #[argh(option, default = "String::from(\"html\")")]
    pub format: String,

    /// matcher linking assembly report columns to samples: prefix, exact, delimited (default: prefix)
    #[argh(option, default = "String::from(\"prefix\")")]
    pub key_matcher: String,

    /// minimum percent identity of virulence hits (default: 70.0)
    #[argh(option, default = "70.0")]
    pub min_identity: f64,

    /// minimum alignment length of virulence hits (default: 50)
    #[argh(option, default = "50")]
    pub min_length: usize,

    /// include only samples matching regex pattern
    #[argh(option)]
    pub include_samples: Option<String>,

    /// exclude samples matching regex pattern
    #[argh(option)]
    pub exclude_samples: Option<String>,

    /// skip files whose header does not match the expected columns
    #[argh(switch)]
    pub strict_headers: bool,

    /// write skipped files and reasons to this TSV file
    #[argh(option)]
    pub diagnostics: Option<String>,

    /// do not build the summary report
    #[argh(switch)]
    pub skip_report: bool,

    /// do not build presence/absence matrices
    #[argh(switch)]
    pub skip_matrices: bool,

    /// do not print a warning for every skipped file
    #[argh(switch)]
    pub quiet: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
