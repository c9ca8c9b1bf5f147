//! Section splitter: one forward pass bucketing every line under the
//! section heading most recently seen.

use std::collections::HashMap;

use crate::parser::headings::{normalize_heading, Section};

/// Canonical section name to ordered content lines. Line order inside a
/// bucket mirrors the document; bucket keys carry no order.
pub type SectionMap = HashMap<Section, Vec<String>>;

/// Splits raw text into section buckets.
///
/// Every trimmed, non-empty input line lands in exactly one bucket.
/// Heading lines switch the cursor and are not bucketed themselves; lines
/// before the first recognized heading accumulate under `Section::Header`.
/// A misread heading can only corrupt the boundary it introduces, never
/// buckets already filled.
pub fn split_sections(raw_text: &str) -> SectionMap {
    let mut buckets: SectionMap = HashMap::new();
    buckets.insert(Section::Header, Vec::new());

    let mut current = Section::Header;
    for line in raw_text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match normalize_heading(line) {
            Some(section) => {
                current = section;
                buckets.entry(current).or_default();
            }
            None => buckets
                .entry(current)
                .or_default()
                .push(line.to_string()),
        }
    }
    buckets
}
