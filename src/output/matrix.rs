// matrix.rs - Presence/absence matrix writer

use super::ensure_parent_dir;
use crate::core::{MatrixKind, PresenceAbsenceMatrix};
use csv::WriterBuilder;
use std::path::{Path, PathBuf};

/// Write a matrix as TSV: `Sample` header plus one "1"/"0" row per sample
pub fn write_presence_absence(path: &Path, matrix: &PresenceAbsenceMatrix) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| format!("Failed to create matrix file '{}': {}", path.display(), e))?;

    let mut header = Vec::with_capacity(matrix.n_features() + 1);
    header.push("Sample");
    header.extend(matrix.features.iter().map(|f| f.as_str()));
    writer
        .write_record(&header)
        .map_err(|e| format!("Write error: {}", e))?;

    for row in &matrix.rows {
        let mut record = Vec::with_capacity(row.cells.len() + 1);
        record.push(row.sample.as_str());
        record.extend(row.cells.iter().map(|&present| if present { "1" } else { "0" }));
        writer
            .write_record(&record)
            .map_err(|e| format!("Write error: {}", e))?;
    }

    writer.flush().map_err(|e| format!("Flush error: {}", e))?;
    Ok(())
}

/// Write the outcome of one matrix pass into `output_dir`.
/// No results is reported on stderr and leaves no file behind.
pub fn write_matrix_outcome(
    output_dir: &Path,
    kind: MatrixKind,
    matrix: Option<&PresenceAbsenceMatrix>,
) -> Result<Option<PathBuf>, String> {
    let Some(matrix) = matrix else {
        eprintln!("⚠️  No {} results found", kind.label());
        return Ok(None);
    };

    let path = output_dir.join(kind.file_name());
    write_presence_absence(&path, matrix)?;
    println!("✅ Created matrix: {}", path.display());
    println!("   Samples: {}", matrix.n_samples());
    println!("   Features: {}", matrix.n_features());
    Ok(Some(path))
}
