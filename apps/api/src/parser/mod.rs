// Heuristic resume-structure extraction pipeline.
// Raw text in, NormalizedResume out; everything below the extraction
// boundary is a synchronous pure function and never fails, it degrades.

pub mod bullets;
pub mod dates;
pub mod education;
pub mod entries;
pub mod handlers;
pub mod headings;
pub mod keywords;
pub mod language;
pub mod personal;
pub mod sections;
pub mod skills;

use crate::models::resume::NormalizedResume;
use crate::parser::bullets::strip_marker;
use crate::parser::entries::{EXPERIENCE_PROFILE, PROJECTS_PROFILE};
use crate::parser::headings::Section;
use crate::parser::sections::SectionMap;

/// Parses raw resume text into the normalized record.
///
/// Sections are extracted independently; a bucket that defeats its
/// extractor yields empty fields, never an error.
pub fn parse_resume(raw_text: &str) -> NormalizedResume {
    let language = language::detect_language(raw_text);
    let section_map = sections::split_sections(raw_text);

    let header = bucket(&section_map, Section::Header);
    let personal = personal::extract_personal(raw_text, header);
    let summary = bucket(&section_map, Section::Summary).join(" ").trim().to_string();

    let experience = entries::parse_entries(bucket(&section_map, Section::Experience), EXPERIENCE_PROFILE);
    let projects = entries::parse_entries(bucket(&section_map, Section::Projects), PROJECTS_PROFILE);
    let education = education::parse_education(bucket(&section_map, Section::Education), header);
    let skills = skills::parse_skills(bucket(&section_map, Section::Skills));

    let certifications = list_items(bucket(&section_map, Section::Certifications));
    let conferences = list_items(bucket(&section_map, Section::Conferences));
    let publications = list_items(bucket(&section_map, Section::Publications));

    let keywords = keywords::extract_keywords(raw_text);

    NormalizedResume {
        personal,
        summary,
        experience,
        projects,
        education,
        skills,
        certifications,
        conferences,
        publications,
        keywords,
        language,
    }
}

fn bucket(map: &SectionMap, section: Section) -> &[String] {
    map.get(&section).map(Vec::as_slice).unwrap_or(&[])
}

/// One item per bucket line, bullet markers stripped. Used for the flat
/// list sections (certifications, conferences, publications).
fn list_items(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| strip_marker(l).trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
