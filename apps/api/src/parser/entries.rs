//! Experience and project entry extraction.
//!
//! A greedy line-grouping accumulator: lines collect into a `block` until
//! a guard decides a new entry starts or the block hits its cap, then the
//! block flushes into a `ResumeEntry`. The guards are deliberately simple
//! and can misread a short capitalized job title sitting directly above a
//! capitalized achievement list; that imprecision is accepted rather than
//! patched with stricter rules that break other layouts.

use crate::models::resume::ResumeEntry;
use crate::parser::bullets::{bullets_from, is_bullet_line};
use crate::parser::dates::{date_range_from, has_year};

/// Per-section tuning for the accumulator.
#[derive(Debug, Clone, Copy)]
pub struct BlockProfile {
    /// Force-flush threshold; bounds entry size on poorly structured
    /// documents.
    pub max_lines: usize,
}

pub const EXPERIENCE_PROFILE: BlockProfile = BlockProfile { max_lines: 9 };
pub const PROJECTS_PROFILE: BlockProfile = BlockProfile { max_lines: 6 };

/// Header separators tried in priority order when splitting
/// "Title <sep> Subtitle". The first separator found wins.
const HEADER_SEPARATORS: &[&str] = &["—", " - ", " – ", "|", "•", ":"];

/// A line that opens a new entry: starts uppercase, short enough to be a
/// role/project header, and is neither a bullet nor a date line.
fn is_new_header_line(line: &str) -> bool {
    let starts_upper = line
        .chars()
        .next()
        .map(char::is_uppercase)
        .unwrap_or(false);
    starts_upper && line.chars().count() < 80 && !is_bullet_line(line) && !has_year(line)
}

/// Splits an entry header into `(title, subtitle)`.
pub fn split_header(header: &str) -> (String, String) {
    for separator in HEADER_SEPARATORS {
        if let Some(pos) = header.find(separator) {
            let title = header[..pos].trim();
            let subtitle = header[pos + separator.len()..].trim();
            return (title.to_string(), subtitle.to_string());
        }
    }
    (header.trim().to_string(), String::new())
}

/// Runs the grouping state machine over one section's lines.
pub fn parse_entries(lines: &[String], profile: BlockProfile) -> Vec<ResumeEntry> {
    let mut entries = Vec::new();
    let mut block: Vec<String> = Vec::new();

    for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        if block.is_empty() {
            block.push(line.to_string());
        } else if is_bullet_line(line) {
            block.push(line.to_string());
        } else if has_year(line) && block.len() <= 2 {
            // Date line for the in-progress entry.
            block.push(line.to_string());
        } else if is_new_header_line(line) {
            flush(&mut block, &mut entries);
            block.push(line.to_string());
        } else {
            block.push(line.to_string());
        }

        if block.len() >= profile.max_lines {
            flush(&mut block, &mut entries);
        }
    }
    flush(&mut block, &mut entries);
    entries
}

fn flush(block: &mut Vec<String>, entries: &mut Vec<ResumeEntry>) {
    if block.is_empty() {
        return;
    }
    let (title, subtitle) = split_header(&block[0]);
    let (start_date, end_date) = block
        .iter()
        .find(|l| has_year(l))
        .map(|l| date_range_from(l))
        .unwrap_or_default();
    let bullets = bullets_from(&block[1..]);
    block.clear();

    let entry = ResumeEntry {
        title,
        subtitle,
        start_date,
        end_date,
        bullets,
    };
    if !entry.is_blank() {
        entries.push(entry);
    }
}
