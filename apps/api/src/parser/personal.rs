//! Personal info extraction from the raw text and the document head.
//!
//! Each field is matched independently and defaults to empty. Contact
//! patterns scan the whole raw text, not just the head, because many
//! resumes park the email in a footer.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::PersonalInfo;

/// Above this length the first line is a paragraph, not a name.
const NAME_MAX_CHARS: usize = 80;

/// How many head lines to inspect for a "Name — Title" pattern.
const TITLE_SCAN_LINES: usize = 4;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Loose international phone shape: optional country code, optional area
/// code, then two digit groups. Deliberately permissive.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[\s-]?)?(\(?\d{2,4}\)?[\s.-]?)?\d{3,4}[\s.-]?\d{4}").unwrap()
});

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(https?://[^\s)]+|www\.[^\s)]+)").unwrap());

/// "City, Region" shapes: one or more capitalized words, a comma, then a
/// region code or capitalized word.
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Z][A-Za-z]+(?:[ -][A-Z][A-Za-z]+)*),\s*([A-Z]{2}|[A-Z][A-Za-z]+)").unwrap()
});

/// Separators between a name and a title on the same head line.
static NAME_TITLE_SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[—|]\s*").unwrap());

static DECORATIVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[|•·]+").unwrap());

pub fn extract_personal(raw_text: &str, header_lines: &[String]) -> PersonalInfo {
    PersonalInfo {
        full_name: extract_full_name(raw_text),
        title: extract_title(header_lines),
        email: first_match(&EMAIL_RE, raw_text),
        phone: first_match(&PHONE_RE, raw_text),
        location: extract_location(header_lines),
        website: first_match(&URL_RE, raw_text),
    }
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

fn extract_full_name(raw_text: &str) -> String {
    let first_line = raw_text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    if first_line.chars().count() >= NAME_MAX_CHARS {
        return String::new();
    }
    DECORATIVE_RE
        .replace_all(first_line, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Looks for "Name — Title" / "Name | Title" in the first head lines and
/// takes the right-hand side when it is not itself a contact field.
fn extract_title(header_lines: &[String]) -> String {
    for line in header_lines.iter().take(TITLE_SCAN_LINES) {
        let mut parts = NAME_TITLE_SEPARATOR_RE.splitn(line, 2);
        let _left = parts.next();
        let Some(right) = parts.next() else { continue };
        let right = right.trim();
        if right.is_empty() || right.chars().count() >= NAME_MAX_CHARS {
            continue;
        }
        if EMAIL_RE.is_match(right) || PHONE_RE.is_match(right) || URL_RE.is_match(right) {
            continue;
        }
        return right.to_string();
    }
    String::new()
}

fn extract_location(header_lines: &[String]) -> String {
    header_lines
        .iter()
        .find_map(|line| {
            // Contact lines are full of commas that look like locations.
            if EMAIL_RE.is_match(line) || URL_RE.is_match(line) {
                return None;
            }
            LOCATION_RE.find(line).map(|m| m.as_str().to_string())
        })
        .unwrap_or_default()
}
