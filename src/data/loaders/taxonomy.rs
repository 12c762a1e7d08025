// taxonomy.rs - Taxonomic classification loader (Kraken2 report)

use super::{split_trimmed, LoadOptions, SampleSource};
use crate::data::outcome::{read_source, ParseOutcome, SourceKind};
use crate::data::record::{Contribution, SpeciesCall, TaxonomyCall};
use crate::data::schema::TAXONOMY;
use std::path::Path;

pub const SUFFIX: &str = "_kraken2.report";

/// Rank code of species-level rows
pub const SPECIES_RANK: &str = "S";

pub struct TaxonomySource;

impl SampleSource for TaxonomySource {
    fn kind(&self) -> SourceKind {
        SourceKind::Taxonomy
    }

    fn suffix(&self) -> &'static str {
        SUFFIX
    }

    fn parse(&self, path: &Path, _options: &LoadOptions) -> ParseOutcome<Contribution> {
        parse_taxonomy(path).map(Contribution::Taxonomy)
    }
}

pub fn parse_taxonomy(path: &Path) -> ParseOutcome<TaxonomyCall> {
    let content = read_source(SourceKind::Taxonomy, path)?;
    Ok(top_species(&content))
}

/// Species row with the highest percentage; ties keep the first seen
pub fn top_species(content: &str) -> TaxonomyCall {
    let mut top: Option<SpeciesCall> = None;
    let mut top_pct = 0.0;

    for line in content.lines() {
        let cols = split_trimmed(line);
        if !TAXONOMY.accepts(&cols) {
            continue;
        }
        let (Some(pct), Some(rank), Some(name)) = (
            TAXONOMY.get(&cols, "percentage"),
            TAXONOMY.get(&cols, "rank"),
            TAXONOMY.get(&cols, "name"),
        ) else {
            continue;
        };
        let Ok(pct) = pct.trim().parse::<f64>() else {
            continue;
        };

        if rank.trim() == SPECIES_RANK && pct > top_pct {
            top_pct = pct;
            top = Some(SpeciesCall {
                name: name.trim().to_string(),
                percentage: pct,
            });
        }
    }

    TaxonomyCall { top }
}
