// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input_dir: Option<String>,
    pub amr_dir: Option<String>,
    pub virulence_dir: Option<String>,
    pub output_dir: Option<String>,
    pub report: Option<String>,
    pub format: Option<String>,
    pub diagnostics: Option<String>,

    // Sample key resolution
    pub key_matcher: Option<String>,

    // Virulence hit filter
    pub min_identity: Option<f64>,
    pub min_length: Option<usize>,

    // Sample filtering
    pub include_samples: Option<String>,
    pub exclude_samples: Option<String>,

    // Flags
    pub strict_headers: Option<bool>,
    pub skip_report: Option<bool>,
    pub skip_matrices: Option<bool>,
    pub quiet: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| format!("Failed to write config file '{}': {}", path.display(), e))?;

        println!("📄 Saved configuration to: {}", path.display());
        Ok(())
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# bacsum.toml - Configuration file for bacsum
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Directory with per-sample tool outputs (*_stats.txt, *_mlst.tsv, *_amr.tsv,
# *_virulence_summary.txt, *_kraken2.report, summary_statistics.txt, report.tsv)
input_dir = "results"

# Directories scanned by the matrix pass (default: input_dir)
amr_dir = "results/amr"
virulence_dir = "results/virulence"

# Output directory for the report and amr_matrix.tsv / virulence_matrix.tsv
output_dir = "summary"

# Report file name and format: html, tsv, json
report = "summary_report.html"
format = "html"

# Write skipped files and reasons to this TSV file
# diagnostics = "skipped.tsv"

# =============================================================================
# SAMPLE KEY RESOLUTION
# =============================================================================

# How assembly report columns are linked to samples: prefix, exact, delimited
# prefix: either name is a prefix of the other (first known sample wins)
# delimited: like prefix but only at '_', '.' or '-' boundaries
key_matcher = "prefix"

# =============================================================================
# VIRULENCE HIT FILTER
# =============================================================================

min_identity = 70.0
min_length = 50

# =============================================================================
# SAMPLE FILTERING
# =============================================================================

# Include only samples matching regex pattern
# include_samples = "^ST131_.*"

# Exclude samples matching regex pattern
# exclude_samples = ".*_ctrl$"

# =============================================================================
# FLAGS
# =============================================================================

# Skip files whose header does not match the expected columns
strict_headers = false

# Run only one of the two passes
skip_report = false
skip_matrices = false

# Do not print a warning for every skipped file
quiet = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.input_dir.as_deref(), Some("results"));
        assert_eq!(config.key_matcher.as_deref(), Some("prefix"));
        assert_eq!(config.min_identity, Some(70.0));
        assert_eq!(config.min_length, Some(50));
        assert!(config.include_samples.is_none());
        assert_eq!(config.strict_headers, Some(false));
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bacsum.toml");
        let config = Config {
            format: Some("json".to_string()),
            min_length: Some(100),
            ..Config::new()
        };
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.format.as_deref(), Some("json"));
        assert_eq!(loaded.min_length, Some(100));
        assert!(loaded.output_dir.is_none());
    }

    #[test]
    fn test_missing_config_file() {
        assert!(Config::from_file("/nonexistent/bacsum.toml").is_err());
    }
}
