// summarize_matrices.rs - Standalone AMR and virulence presence/absence matrices

use bacsum::prelude::*;
use clap::{Arg, Command};
use std::path::Path;

fn arg_or_default<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    matches.get_one::<String>(name).map(String::as_str).unwrap_or(".")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("Summarize Matrices")
        .version(bacsum::VERSION)
        .about("Builds AMR and virulence presence/absence matrices from per-sample hit tables")
        .arg(Arg::new("amr_dir")
            .long("amr_dir")
            .value_name("DIR")
            .help("Directory with *_amr.tsv files")
            .default_value("."))
        .arg(Arg::new("virulence_dir")
            .long("virulence_dir")
            .value_name("DIR")
            .help("Directory with *_virulence.tsv files")
            .default_value("."))
        .arg(Arg::new("output_dir")
            .long("output_dir")
            .value_name("DIR")
            .help("Directory for amr_matrix.tsv and virulence_matrix.tsv")
            .default_value("."))
        .arg(Arg::new("min_identity")
            .long("min_identity")
            .value_name("PERCENT")
            .help("Minimum percent identity of virulence hits (default: 70.0)")
            .default_value("70.0"))
        .arg(Arg::new("min_length")
            .long("min_length")
            .value_name("LENGTH")
            .help("Minimum alignment length of virulence hits (default: 50)")
            .default_value("50"))
        .get_matches();

    let amr_dir = Path::new(arg_or_default(&matches, "amr_dir"));
    let virulence_dir = Path::new(arg_or_default(&matches, "virulence_dir"));
    let output_dir = Path::new(arg_or_default(&matches, "output_dir"));

    let identity_str = arg_or_default(&matches, "min_identity");
    let length_str = arg_or_default(&matches, "min_length");
    let hit_filter = HitFilter {
        min_identity: identity_str
            .parse::<f64>()
            .map_err(|_| format!("Invalid min_identity value: {}", identity_str))?,
        min_length: length_str
            .parse::<f64>()
            .map_err(|_| format!("Invalid min_length value: {}", length_str))?,
    };

    let sample_filter = SampleFilter::default();
    let mut diagnostics = Diagnostics::new();

    for (kind, dir) in [(MatrixKind::Amr, amr_dir), (MatrixKind::Virulence, virulence_dir)] {
        println!("📂 {} directory: {}", kind.label(), dir.display());
        let matrix = build_matrix(kind, dir, &hit_filter, &sample_filter, &mut diagnostics)?;
        write_matrix_outcome(output_dir, kind, matrix.as_ref())?;
    }

    for skip in diagnostics.skips() {
        eprintln!("⚠️  Skipped {}", skip);
    }

    Ok(())
}
