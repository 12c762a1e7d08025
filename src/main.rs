// main.rs - CLI entry point

use bacsum::cli::Config;
use bacsum::prelude::*;
use std::path::Path;
use std::time::Instant;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let args: Args = argh::from_env();

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    let args = args.with_config_file()?;
    let ValidationResult {
        resolver,
        report_format,
        hit_filter,
        sample_filter,
        input_dir,
        amr_dir,
        virulence_dir,
        output_dir,
    } = validate_args(&args)?;

    println!("🚀 bacsum v{}", bacsum::VERSION);
    let start = Instant::now();
    let mut diagnostics = Diagnostics::new();

    if !args.skip_report {
        println!("📂 Input directory: {}", input_dir.display());
        println!("🔗 Key matcher: {}", resolver.matcher_name());

        let mut pass = SummaryPass::new(&input_dir);
        pass.options = LoadOptions {
            strict_headers: args.strict_headers,
        };
        pass.show_progress = !args.quiet;

        let mut report = pass.run(resolver)?;
        diagnostics.extend(std::mem::take(&mut report.diagnostics));

        if sample_filter.is_active() {
            let before = report.samples.len();
            report.retain_samples(|sample| sample_filter.allows(sample));
            println!("🔍 Sample filter kept {}/{} samples", report.samples.len(), before);
        }
        println!("📊 Samples in report: {}", report.samples.len());
        if report.pan_genome.is_some() {
            println!("🧬 Pan-genome summary found");
        }

        write_report(&output_dir.join(&args.report), report_format, &report)?;
    }

    if !args.skip_matrices {
        println!(
            "🎯 Virulence hit filter: identity >= {}%, length >= {}",
            hit_filter.min_identity, hit_filter.min_length
        );
        for (kind, dir) in [
            (MatrixKind::Amr, amr_dir.as_path()),
            (MatrixKind::Virulence, virulence_dir.as_path()),
        ] {
            run_matrix_pass(kind, dir, &output_dir, &hit_filter, &sample_filter, &mut diagnostics)?;
        }
    }

    report_skips(&diagnostics, args.quiet);
    if let Some(path) = &args.diagnostics {
        write_diagnostics(Path::new(path), &diagnostics)?;
        println!("📝 Diagnostics written to: {}", path);
    }

    println!("⏱️  Completed in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn run_matrix_pass(
    kind: MatrixKind,
    dir: &Path,
    output_dir: &Path,
    hit_filter: &HitFilter,
    sample_filter: &SampleFilter,
    diagnostics: &mut Diagnostics,
) -> Result<(), String> {
    println!("📂 {} directory: {}", kind.label(), dir.display());
    let matrix = build_matrix(kind, dir, hit_filter, sample_filter, diagnostics)?;
    write_matrix_outcome(output_dir, kind, matrix.as_ref())?;
    Ok(())
}

fn report_skips(diagnostics: &Diagnostics, quiet: bool) {
    if diagnostics.is_empty() {
        return;
    }
    if !quiet {
        for skip in diagnostics.skips() {
            eprintln!("⚠️  Skipped {}", skip);
        }
    }
    println!("⚠️  {} file(s) skipped", diagnostics.len());
}
