// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::core::SampleFilter;
use crate::data::loaders::virulence::HitFilter;
use crate::keys::{KeyMatcherRegistry, SampleKeyResolver};
use crate::output::ReportFormat;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub struct ValidationResult {
    pub resolver: SampleKeyResolver,
    pub report_format: ReportFormat,
    pub hit_filter: HitFilter,
    pub sample_filter: SampleFilter,
    pub input_dir: PathBuf,
    pub amr_dir: PathBuf,
    pub virulence_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    if args.skip_report && args.skip_matrices {
        return Err("--skip-report and --skip-matrices together leave nothing to do".to_string());
    }

    // Validate key matcher
    let registry = KeyMatcherRegistry::new();
    if !registry.has_matcher(&args.key_matcher) {
        return Err(format!(
            "Invalid key matcher '{}'. Available: {}",
            args.key_matcher,
            registry.get_matcher_names().join(", ")
        ));
    }
    let matcher_name = args.key_matcher.clone();
    let matcher = registry
        .take_matcher(&matcher_name)
        .ok_or_else(|| format!("Key matcher '{}' not registered", matcher_name))?;
    let resolver = SampleKeyResolver::new(matcher);

    let report_format = ReportFormat::from_str(&args.format)?;

    // Validate hit thresholds
    if !(0.0..=100.0).contains(&args.min_identity) {
        return Err(format!(
            "--min-identity must be between 0 and 100, got {}",
            args.min_identity
        ));
    }
    let hit_filter = HitFilter {
        min_identity: args.min_identity,
        min_length: args.min_length as f64,
    };

    // Compile sample regexes
    let include = compile_pattern("--include-samples", args.include_samples.as_deref())?;
    let exclude = compile_pattern("--exclude-samples", args.exclude_samples.as_deref())?;
    let sample_filter = SampleFilter::new(include, exclude);

    // Validate directories
    let input_dir = PathBuf::from(&args.input_dir);
    let amr_dir = args.amr_dir.as_ref().map(PathBuf::from).unwrap_or_else(|| input_dir.clone());
    let virulence_dir = args
        .virulence_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| input_dir.clone());

    if !args.skip_report {
        check_dir("--input-dir", &input_dir)?;
    }
    if !args.skip_matrices {
        check_dir("--amr-dir", &amr_dir)?;
        check_dir("--virulence-dir", &virulence_dir)?;
    }

    if args.report.trim().is_empty() {
        return Err("--report must not be empty".to_string());
    }

    Ok(ValidationResult {
        resolver,
        report_format,
        hit_filter,
        sample_filter,
        input_dir,
        amr_dir,
        virulence_dir,
        output_dir: PathBuf::from(&args.output_dir),
    })
}

fn compile_pattern(option: &str, pattern: Option<&str>) -> Result<Option<Regex>, String> {
    pattern
        .map(|p| Regex::new(p).map_err(|e| format!("Invalid {} regex '{}': {}", option, p, e)))
        .transpose()
}

fn check_dir(option: &str, dir: &Path) -> Result<(), String> {
    if !dir.is_dir() {
        return Err(format!("{} '{}' is not a directory", option, dir.display()));
    }
    Ok(())
}
