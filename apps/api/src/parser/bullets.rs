//! Bullet extraction shared by the entry extractors.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Explicit bullet markers at line start: dash/en-dash/em-dash, common
/// glyphs, "1." / "1)" and "(1)" numbering.
static BULLET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-–—•*·▪◦‣]\s*|\d{1,2}[.)]\s+|\(\d{1,2}\)\s*)(\S.*)$").unwrap()
});

pub fn is_bullet_line(line: &str) -> bool {
    BULLET_RE.is_match(line)
}

/// Returns the line with any leading bullet marker removed, trimmed.
pub fn strip_marker(line: &str) -> &str {
    BULLET_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim_end())
        .unwrap_or_else(|| line.trim())
}

/// Extracts bullet points from a run of lines.
///
/// Lines with explicit markers win; when none exist the joined text is
/// sentence-split instead, so prose descriptions still yield usable
/// bullets. Duplicates (after whitespace normalization) and fragments of
/// two characters or fewer are dropped. The result is a plain ordered
/// list, not a resumable stream.
pub fn bullets_from(lines: &[String]) -> Vec<String> {
    let mut bullets: Vec<String> = lines
        .iter()
        .filter_map(|line| {
            BULLET_RE
                .captures(line)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().trim().to_string())
        })
        .collect();

    if bullets.is_empty() {
        bullets = split_sentences(&lines.join(" "));
    }

    let mut seen = HashSet::new();
    bullets.retain(|bullet| {
        let normalized = bullet.split_whitespace().collect::<Vec<_>>().join(" ");
        normalized.chars().count() > 2 && seen.insert(normalized)
    });
    bullets
}

/// Splits text into sentences: after `.` / `!` / `?` followed by
/// whitespace (or end of text), and after every semicolon.
fn split_sentences(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    for (i, &(idx, c)) in chars.iter().enumerate() {
        let boundary = match c {
            ';' => true,
            '.' | '!' | '?' => chars
                .get(i + 1)
                .map(|&(_, next)| next.is_whitespace())
                .unwrap_or(true),
            _ => false,
        };
        if boundary {
            let end = idx + c.len_utf8();
            let piece = text[start..end].trim();
            if !piece.is_empty() {
                pieces.push(piece.to_string());
            }
            start = end;
        }
    }
    let tail = text[start..].trim();
    if !tail.is_empty() {
        pieces.push(tail.to_string());
    }
    pieces
}
