//! Date range extraction from a single line.
//!
//! Lossy by design: month names and words like "Present" pass through as
//! substrings when a range split succeeds. Nothing here validates
//! calendars.

use once_cell::sync::Lazy;
use regex::Regex;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Range separators: dash variants and the word "to" in the supported
/// locales (to/bis/à/hasta/até/tot/do).
static RANGE_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s*(?:–|—|-|\bto\b|\bbis\b|\bà\b|\bhasta\b|\baté\b|\btot\b|\bdo\b)\s*")
        .unwrap()
});

pub fn has_year(line: &str) -> bool {
    YEAR_RE.is_match(line)
}

/// Pulls `(start, end)` out of a line.
///
/// A line carrying a year and a range separator is split at the first
/// separator, both sides trimmed and passed through verbatim. A single
/// bare year yields `(year, "")`; two bare years with no separator yield
/// `(first, second)`; no year yields `("", "")`.
pub fn date_range_from(line: &str) -> (String, String) {
    let years: Vec<&str> = YEAR_RE.find_iter(line).map(|m| m.as_str()).collect();
    if years.is_empty() {
        return (String::new(), String::new());
    }

    if let Some(sep) = RANGE_SEPARATOR_RE.find(line) {
        let left = line[..sep.start()].trim();
        let right = line[sep.end()..].trim();
        if !left.is_empty() && !right.is_empty() {
            return (left.to_string(), right.to_string());
        }
    }

    if years.len() >= 2 {
        return (years[0].to_string(), years[1].to_string());
    }
    (years[0].to_string(), String::new())
}
