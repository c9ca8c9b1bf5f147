use serde::{Deserialize, Serialize};

/// Contact and identity fields extracted from the document head.
///
/// Every field defaults to an empty string. Fields are extracted
/// independently; a single source line may feed more than one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
}

/// One experience, project, or education item.
///
/// For education entries `title` carries the school and `subtitle` the
/// degree. Dates are free-form strings ("2021", "May 2019", "Present");
/// no calendar normalization is attempted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeEntry {
    pub title: String,
    pub subtitle: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
}

impl ResumeEntry {
    /// An entry with no title, no subtitle, and no bullets is unmatched
    /// filler and must never reach callers.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.subtitle.trim().is_empty() && self.bullets.is_empty()
    }

    /// Bullets joined into the newline-separated description form used by
    /// the form layer and the scoring rubric.
    pub fn description(&self) -> String {
        self.bullets.join("\n")
    }
}

/// The normalized record handed to the form/state layer and to export.
///
/// All fields default so that partially edited records round-trip through
/// the scoring endpoint without ceremony. Once returned by the parser the
/// record is caller-owned; nothing here is shared or lazily populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NormalizedResume {
    pub personal: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ResumeEntry>,
    pub projects: Vec<ResumeEntry>,
    pub education: Vec<ResumeEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub conferences: Vec<String>,
    pub publications: Vec<String>,
    pub keywords: Vec<String>,
    /// Advisory language hint ("en", "es", ...). Informational only; it
    /// never changes which sections exist.
    pub language: String,
}
