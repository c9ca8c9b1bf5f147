//! Education entry extraction.
//!
//! Simpler grouping than experience: fixed six-line blocks, school and
//! degree from the leading lines, every year in the block harvested for
//! the date range. An empty education section still tries to synthesize
//! one entry from the document head so that resumes listing a university
//! above any heading are not reported as degree-less.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::resume::ResumeEntry;
use crate::parser::bullets::bullets_from;
use crate::parser::dates::has_year;
use crate::parser::entries::split_header;

const BLOCK_LINES: usize = 6;

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Institution keywords across the supported locales, used only for
/// header synthesis when the education bucket is empty.
static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)universit|college|institut|school|academy|polytech|hochschule|faculdade|facolt|écol|ecole|escuela|uniwersytet|szko",
    )
    .unwrap()
});

pub fn parse_education(lines: &[String], header_lines: &[String]) -> Vec<ResumeEntry> {
    if lines.is_empty() {
        return synthesize_from_header(header_lines);
    }

    let mut entries = Vec::new();
    for block in lines.chunks(BLOCK_LINES) {
        let first = block[0].as_str();
        let (school, degree, rest_from) = if has_separator(first) {
            let (school, degree) = split_header(first);
            (school, degree, 1)
        } else {
            // Degree on the following line, unless that line is the date
            // line.
            let second = block.get(1).map(String::as_str).unwrap_or("");
            if second.is_empty() || has_year(second) {
                (first.trim().to_string(), String::new(), 1)
            } else {
                (first.trim().to_string(), second.trim().to_string(), 2)
            }
        };

        let years: Vec<String> = block
            .iter()
            .flat_map(|l| YEAR_RE.find_iter(l))
            .map(|m| m.as_str().to_string())
            .collect();
        let start_date = years.first().cloned().unwrap_or_default();
        let end_date = years.get(1).cloned().unwrap_or_else(|| start_date.clone());

        let rest = &block[rest_from.min(block.len())..];
        let entry = ResumeEntry {
            title: school,
            subtitle: degree,
            start_date,
            end_date,
            bullets: bullets_from(rest),
        };
        if !entry.is_blank() {
            entries.push(entry);
        }
    }
    entries
}

/// Best-effort single entry from the document head: the first line naming
/// an institution becomes the school, with years harvested from all head
/// lines. No institution line means no entry.
fn synthesize_from_header(header_lines: &[String]) -> Vec<ResumeEntry> {
    let Some(line) = header_lines.iter().find(|l| INSTITUTION_RE.is_match(l)) else {
        return Vec::new();
    };
    let (school, degree) = split_header(line);
    let years: Vec<String> = header_lines
        .iter()
        .flat_map(|l| YEAR_RE.find_iter(l))
        .map(|m| m.as_str().to_string())
        .collect();
    let start_date = years.first().cloned().unwrap_or_default();
    let end_date = years.get(1).cloned().unwrap_or_else(|| start_date.clone());

    let entry = ResumeEntry {
        title: school,
        subtitle: degree,
        start_date,
        end_date,
        bullets: Vec::new(),
    };
    if entry.is_blank() {
        Vec::new()
    } else {
        vec![entry]
    }
}

fn has_separator(line: &str) -> bool {
    let (_, subtitle) = split_header(line);
    !subtitle.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_school_and_degree_on_one_line() {
        let entries = parse_education(
            &lines(&["State University — BSc Computer Science", "2015 - 2019", "- Dean's list"]),
            &[],
        );
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.title, "State University");
        assert_eq!(e.subtitle, "BSc Computer Science");
        assert_eq!(e.start_date, "2015");
        assert_eq!(e.end_date, "2019");
        assert_eq!(e.bullets, vec!["Dean's list"]);
    }

    #[test]
    fn test_degree_on_second_line() {
        let entries = parse_education(
            &lines(&["State University", "BSc Computer Science", "2015 - 2019"]),
            &[],
        );
        assert_eq!(entries[0].title, "State University");
        assert_eq!(entries[0].subtitle, "BSc Computer Science");
    }

    #[test]
    fn test_date_line_is_not_mistaken_for_degree() {
        let entries = parse_education(&lines(&["State University", "2015 - 2019"]), &[]);
        assert_eq!(entries[0].subtitle, "");
        assert_eq!(entries[0].start_date, "2015");
    }

    #[test]
    fn test_single_year_fills_both_dates() {
        let entries = parse_education(&lines(&["Tech Institute — MSc", "Graduated 2020"]), &[]);
        assert_eq!(entries[0].start_date, "2020");
        assert_eq!(entries[0].end_date, "2020");
    }

    #[test]
    fn test_seventh_line_opens_a_second_block() {
        let input = lines(&[
            "State University — BSc",
            "2010 - 2014",
            "- Thesis on parsers",
            "- Tutored freshmen",
            "- Robotics club",
            "- Exchange year",
            "Night School — Certificate",
            "2015",
        ]);
        let entries = parse_education(&input, &[]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].title, "Night School");
        assert_eq!(entries[1].start_date, "2015");
    }

    #[test]
    fn test_empty_section_synthesizes_from_header() {
        let header = lines(&["Jane Doe", "State University, BSc 2014"]);
        let entries = parse_education(&[], &header);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].title.contains("State University"));
        assert_eq!(entries[0].start_date, "2014");
    }

    #[test]
    fn test_empty_section_without_institution_yields_nothing() {
        let header = lines(&["Jane Doe", "jane@x.com"]);
        assert!(parse_education(&[], &header).is_empty());
    }

    #[test]
    fn test_no_blank_entries() {
        for entry in parse_education(&lines(&["—", "2019"]), &[]) {
            assert!(!entry.is_blank());
        }
    }
}
