//! Skills list extraction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::bullets::strip_marker;

/// Skill delimiters: comma, pipe, semicolon, slash, bullet glyphs, and
/// line breaks.
static SKILL_DELIMITER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,|;/•·\n]").unwrap());

/// Splits the skills bucket into individual skill strings.
///
/// Order mirrors the document and duplicates are kept; deduplication is
/// the keyword extractor's business, not this one's.
pub fn parse_skills(lines: &[String]) -> Vec<String> {
    let joined = lines.join("\n");
    SKILL_DELIMITER_RE
        .split(&joined)
        .map(strip_marker)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_comma_separated_line() {
        assert_eq!(
            parse_skills(&lines(&["React, Node, SQL, AWS, Docker"])),
            vec!["React", "Node", "SQL", "AWS", "Docker"]
        );
    }

    #[test]
    fn test_mixed_delimiters() {
        assert_eq!(
            parse_skills(&lines(&["Rust | Go; Python • Terraform"])),
            vec!["Rust", "Go", "Python", "Terraform"]
        );
    }

    #[test]
    fn test_one_skill_per_bulleted_line() {
        assert_eq!(
            parse_skills(&lines(&["- Kubernetes", "- PostgreSQL"])),
            vec!["Kubernetes", "PostgreSQL"]
        );
    }

    #[test]
    fn test_duplicates_and_order_are_preserved() {
        assert_eq!(
            parse_skills(&lines(&["SQL, Rust, SQL"])),
            vec!["SQL", "Rust", "SQL"]
        );
    }

    #[test]
    fn test_empty_bucket() {
        assert!(parse_skills(&[]).is_empty());
    }

    #[test]
    fn test_empty_segments_dropped() {
        assert_eq!(parse_skills(&lines(&["Rust,, ,Go"])), vec!["Rust", "Go"]);
    }
}
