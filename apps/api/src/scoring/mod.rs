//! ATS-style scoring of a normalized resume record.
//!
//! Pure function over the record, recomputed on every edit. Checks are
//! additive and independent; feedback entries appear in check order so
//! identical input always produces identical output.
//!
//! Rubric:
//! - required personal fields (name, email, phone): 25
//! - summary over 80 chars: 10
//! - at least one titled experience entry: 15
//! - five or more skills: 10
//! - three or more distinct action verbs in the text corpus: 15
//! - present sections, 3 points each, capped at 20
//! - average bullet line under 160 chars: 5

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::models::resume::NormalizedResume;

/// Verbs that screening heuristics reward. Substring-matched against the
/// lowercased corpus.
const ACTION_VERBS: &[&str] = &[
    "led",
    "built",
    "delivered",
    "created",
    "designed",
    "implemented",
    "optimized",
    "launched",
    "improved",
    "reduced",
    "increased",
    "developed",
];

const MAX_SECTION_POINTS: u32 = 20;
const BULLET_CONCISE_CHARS: usize = 160;
const SUMMARY_MIN_CHARS: usize = 80;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub value: u32,
    pub feedback: Vec<String>,
}

pub fn score(resume: &NormalizedResume) -> ScoreResult {
    let mut score: u32 = 0;
    let mut feedback = Vec::new();

    // Required personal fields.
    let mut missing = Vec::new();
    if resume.personal.full_name.trim().is_empty() {
        missing.push("fullName");
    }
    if resume.personal.email.trim().is_empty() {
        missing.push("email");
    }
    if resume.personal.phone.trim().is_empty() {
        missing.push("phone");
    }
    if missing.is_empty() {
        score += 25;
    } else {
        feedback.push(format!("Add missing personal info: {}", missing.join(", ")));
    }

    // Summary length.
    if resume.summary.chars().count() > SUMMARY_MIN_CHARS {
        score += 10;
    } else {
        feedback.push("Write a concise professional summary (80+ chars).".to_string());
    }

    // Titled experience.
    let titled_experience = resume
        .experience
        .iter()
        .filter(|e| !e.title.trim().is_empty())
        .count();
    if titled_experience > 0 {
        score += 15;
    } else {
        feedback.push("Include at least one work experience.".to_string());
    }

    // Skills.
    let skill_count = resume.skills.iter().filter(|s| !s.trim().is_empty()).count();
    if skill_count >= 5 {
        score += 10;
    } else {
        feedback.push("List 5+ relevant skills.".to_string());
    }

    // Action verbs across summary + experience + project descriptions.
    let corpus = text_corpus(resume);
    let verbs_found = ACTION_VERBS
        .iter()
        .filter(|verb| corpus.contains(**verb))
        .count();
    if verbs_found >= 3 {
        score += 15;
    } else {
        feedback.push("Use more action verbs (e.g., led, built, delivered...).".to_string());
    }

    // Section presence, capped.
    let present = present_section_count(resume);
    score += (present as u32 * 3).min(MAX_SECTION_POINTS);

    // Readability: average bullet line length.
    let bullet_lines: Vec<&str> = corpus
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if bullet_lines.is_empty() {
        feedback.push("Add bullet points to describe achievements.".to_string());
    } else {
        let total: usize = bullet_lines.iter().map(|l| l.chars().count()).sum();
        let average = total as f64 / bullet_lines.len() as f64;
        if average < BULLET_CONCISE_CHARS as f64 {
            score += 5;
        } else {
            feedback.push("Make bullet points more concise.".to_string());
        }
    }

    let value = score.min(100);

    if resume.keywords.is_empty() {
        feedback.push("Include role-specific keywords to match job descriptions.".to_string());
    }

    ScoreResult { value, feedback }
}

/// Summary plus all experience and project descriptions, lowercased and
/// newline-joined so bullet lines stay individually addressable.
fn text_corpus(resume: &NormalizedResume) -> String {
    let mut parts: Vec<String> = Vec::new();
    if !resume.summary.is_empty() {
        parts.push(resume.summary.clone());
    }
    for entry in resume.experience.iter().chain(&resume.projects) {
        let description = entry.description();
        if !description.is_empty() {
            parts.push(description);
        }
    }
    parts.join("\n").to_lowercase()
}

fn present_section_count(resume: &NormalizedResume) -> usize {
    let any_nonempty = |items: &[String]| items.iter().any(|s| !s.trim().is_empty());
    let checks = [
        !resume.summary.trim().is_empty(),
        resume.experience.iter().any(|e| !e.title.trim().is_empty()),
        resume.projects.iter().any(|e| !e.title.trim().is_empty()),
        resume
            .education
            .first()
            .map(|e| !e.title.trim().is_empty())
            .unwrap_or(false),
        any_nonempty(&resume.skills),
        any_nonempty(&resume.certifications),
        any_nonempty(&resume.conferences),
        any_nonempty(&resume.publications),
    ];
    checks.iter().filter(|present| **present).count()
}
