// typing.rs - Sequence typing loader (mlst single-line output)

use super::{split_trimmed, LoadOptions, SampleSource};
use crate::data::outcome::{read_source, ParseOutcome, SkipReason, SourceKind};
use crate::data::record::{Contribution, TypingCall};
use crate::data::schema::TYPING;
use std::path::Path;

pub const SUFFIX: &str = "_mlst.tsv";

/// Placeholder for columns the line does not reach
const MISSING: &str = "-";

pub struct TypingSource;

impl SampleSource for TypingSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Typing
    }

    fn suffix(&self) -> &'static str {
        SUFFIX
    }

    fn parse(&self, path: &Path, _options: &LoadOptions) -> ParseOutcome<Contribution> {
        parse_typing(path).map(Contribution::Typing)
    }
}

/// Scheme and sequence type from the first line only
pub fn parse_typing(path: &Path) -> ParseOutcome<TypingCall> {
    let content = read_source(SourceKind::Typing, path)?;
    let line = content.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Err(SkipReason::new(SourceKind::Typing, path, "empty typing call"));
    }

    let cols = split_trimmed(line);
    let field = |name: &str| TYPING.get(&cols, name).unwrap_or(MISSING).to_string();

    Ok(TypingCall {
        scheme: field("scheme"),
        sequence_type: field("st"),
    })
}
