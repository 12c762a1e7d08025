// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output (only override defaults, not explicit CLI values)
        if self.input_dir == "." {
            if let Some(input_dir) = config.input_dir {
                self.input_dir = input_dir;
            }
        }
        if self.amr_dir.is_none() {
            self.amr_dir = config.amr_dir;
        }
        if self.virulence_dir.is_none() {
            self.virulence_dir = config.virulence_dir;
        }
        if self.output_dir == "." {
            if let Some(output_dir) = config.output_dir {
                self.output_dir = output_dir;
            }
        }
        if self.report == "summary_report.html" {
            if let Some(report) = config.report {
                self.report = report;
            }
        }
        if self.format == "html" {
            if let Some(format) = config.format {
                self.format = format;
            }
        }
        if self.diagnostics.is_none() {
            self.diagnostics = config.diagnostics;
        }

        // Sample key resolution
        if self.key_matcher == "prefix" {
            if let Some(key_matcher) = config.key_matcher {
                self.key_matcher = key_matcher;
            }
        }

        // Virulence hit filter
        if self.min_identity == 70.0 {
            if let Some(min_identity) = config.min_identity {
                self.min_identity = min_identity;
            }
        }
        if self.min_length == 50 {
            if let Some(min_length) = config.min_length {
                self.min_length = min_length;
            }
        }

        // Sample filtering
        if self.include_samples.is_none() {
            self.include_samples = config.include_samples;
        }
        if self.exclude_samples.is_none() {
            self.exclude_samples = config.exclude_samples;
        }

        // Flags (only override if false)
        if !self.strict_headers {
            self.strict_headers = config.strict_headers.unwrap_or(false);
        }
        if !self.skip_report {
            self.skip_report = config.skip_report.unwrap_or(false);
        }
        if !self.skip_matrices {
            self.skip_matrices = config.skip_matrices.unwrap_or(false);
        }
        if !self.quiet {
            self.quiet = config.quiet.unwrap_or(false);
        }

        self
    }

    /// Load and merge configuration file if specified
    pub fn with_config_file(self) -> Result<Self, String> {
        if let Some(ref config_path) = self.config {
            let config = Config::from_file(config_path)?;
            Ok(self.merge_with_config(config))
        } else {
            Ok(self)
        }
    }
}
