// schema.rs - Positional column schemas for source formats

/// One named column at a fixed position
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub index: usize,
    /// Header text the upstream tool is expected to write, if it writes one
    pub header: Option<&'static str>,
}

/// Ordered field names mapped to positional indices.
/// Call sites read fields by name; the positions stay the single source of
/// truth so a header check can be layered on without touching them.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSchema {
    pub format: &'static str,
    pub columns: &'static [Column],
    /// Rows with fewer fields are skipped
    pub min_fields: usize,
}

impl ColumnSchema {
    /// Positional index of a named field
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().find(|c| c.name == name).map(|c| c.index)
    }

    /// Fetch a named field from a split row
    pub fn get<'a>(&self, fields: &[&'a str], name: &str) -> Option<&'a str> {
        self.index_of(name).and_then(|i| fields.get(i).copied())
    }

    /// Whether a split row carries enough fields for this schema
    pub fn accepts(&self, fields: &[&str]) -> bool {
        fields.len() >= self.min_fields
    }

    /// Columns whose header text disagrees with what the schema expects,
    /// as (expected, found) pairs
    pub fn header_mismatches(&self, header: &[&str]) -> Vec<(&'static str, String)> {
        self.columns
            .iter()
            .filter_map(|c| {
                let expected = c.header?;
                let found = header.get(c.index).map(|h| h.trim()).unwrap_or("");
                if found == expected {
                    None
                } else {
                    Some((expected, found.to_string()))
                }
            })
            .collect()
    }

    /// Strict header check
    pub fn check_header(&self, header: &[&str]) -> Result<(), String> {
        let mismatches = self.header_mismatches(header);
        if mismatches.is_empty() {
            return Ok(());
        }
        let detail: Vec<String> = mismatches
            .iter()
            .map(|(expected, found)| format!("expected '{}' found '{}'", expected, found))
            .collect();
        Err(format!("{} header mismatch: {}", self.format, detail.join("; ")))
    }
}

/// seqkit stats tabular output
pub const READ_STATS: ColumnSchema = ColumnSchema {
    format: "read-stats",
    columns: &[
        Column { name: "num_seqs", index: 3, header: Some("num_seqs") },
        Column { name: "sum_len", index: 4, header: Some("sum_len") },
    ],
    min_fields: 5,
};

/// mlst single-line output (no header)
pub const TYPING: ColumnSchema = ColumnSchema {
    format: "typing",
    columns: &[
        Column { name: "scheme", index: 1, header: None },
        Column { name: "st", index: 2, header: None },
    ],
    min_fields: 1,
};

/// AMRFinderPlus gene table
pub const GENE_TABLE: ColumnSchema = ColumnSchema {
    format: "gene-table",
    columns: &[
        Column { name: "gene", index: 5, header: Some("Gene symbol") },
        Column { name: "element_type", index: 8, header: Some("Element type") },
        Column { name: "subclass", index: 10, header: Some("Class") },
    ],
    min_fields: 11,
};

/// BLAST outfmt 6 with stitle, no header
pub const VIRULENCE_HITS: ColumnSchema = ColumnSchema {
    format: "virulence-hits",
    columns: &[
        Column { name: "pident", index: 2, header: None },
        Column { name: "length", index: 3, header: None },
        Column { name: "stitle", index: 12, header: None },
    ],
    min_fields: 13,
};

/// Kraken2 report (no header)
pub const TAXONOMY: ColumnSchema = ColumnSchema {
    format: "taxonomy",
    columns: &[
        Column { name: "percentage", index: 0, header: None },
        Column { name: "rank", index: 3, header: None },
        Column { name: "name", index: 5, header: None },
    ],
    min_fields: 6,
};
