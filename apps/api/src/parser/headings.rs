//! Heading normalization: maps a candidate line to a canonical section name.
//!
//! Resolution order is fixed: decorative glyph strip, lowercase, exact
//! dictionary lookup, then an ALL-CAPS keyword fallback. The dictionary
//! always wins over the fallback, and within the fallback the first
//! matching section in `KEYWORD_FALLBACKS` wins.

use once_cell::sync::Lazy;
use regex::Regex;

/// Canonical resume sections. `Header` is never produced by normalization;
/// it is the implicit bucket for everything before the first heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Summary,
    Experience,
    Projects,
    Education,
    Skills,
    Certifications,
    Conferences,
    Publications,
    Awards,
    Other,
}

/// Exact-match table from localized heading text to canonical section.
/// Keys are lowercase, decoration already stripped.
const HEADING_DICTIONARY: &[(&str, Section)] = &[
    // English
    ("summary", Section::Summary),
    ("professional summary", Section::Summary),
    ("profile", Section::Summary),
    ("about", Section::Summary),
    ("about me", Section::Summary),
    ("objective", Section::Summary),
    ("career objective", Section::Summary),
    ("experience", Section::Experience),
    ("work experience", Section::Experience),
    ("professional experience", Section::Experience),
    ("employment", Section::Experience),
    ("employment history", Section::Experience),
    ("work history", Section::Experience),
    ("projects", Section::Projects),
    ("personal projects", Section::Projects),
    ("selected projects", Section::Projects),
    ("side projects", Section::Projects),
    ("education", Section::Education),
    ("academic background", Section::Education),
    ("skills", Section::Skills),
    ("technical skills", Section::Skills),
    ("core competencies", Section::Skills),
    ("technologies", Section::Skills),
    ("certifications", Section::Certifications),
    ("certification", Section::Certifications),
    ("licenses", Section::Certifications),
    ("licenses & certifications", Section::Certifications),
    ("conferences", Section::Conferences),
    ("talks", Section::Conferences),
    ("publications", Section::Publications),
    ("awards", Section::Awards),
    ("achievements", Section::Awards),
    ("honors", Section::Awards),
    // Recognized headings without a dedicated extractor; bucketed so the
    // lines stay out of neighboring sections.
    ("interests", Section::Other),
    ("hobbies", Section::Other),
    ("references", Section::Other),
    ("volunteering", Section::Other),
    ("volunteer experience", Section::Other),
    ("languages", Section::Other),
    // Spanish
    ("resumen", Section::Summary),
    ("perfil", Section::Summary),
    ("objetivo", Section::Summary),
    ("experiencia", Section::Experience),
    ("experiencia laboral", Section::Experience),
    ("experiencia profesional", Section::Experience),
    ("proyectos", Section::Projects),
    ("educación", Section::Education),
    ("educacion", Section::Education),
    ("formación académica", Section::Education),
    ("habilidades", Section::Skills),
    ("competencias", Section::Skills),
    ("certificaciones", Section::Certifications),
    ("publicaciones", Section::Publications),
    ("premios", Section::Awards),
    // French
    ("résumé", Section::Summary),
    ("profil", Section::Summary),
    ("à propos", Section::Summary),
    ("expérience", Section::Experience),
    ("expérience professionnelle", Section::Experience),
    ("projets", Section::Projects),
    ("formation", Section::Education),
    ("éducation", Section::Education),
    ("compétences", Section::Skills),
    ("conférences", Section::Conferences),
    ("prix", Section::Awards),
    // German
    ("zusammenfassung", Section::Summary),
    ("über mich", Section::Summary),
    ("berufserfahrung", Section::Experience),
    ("erfahrung", Section::Experience),
    ("projekte", Section::Projects),
    ("ausbildung", Section::Education),
    ("bildung", Section::Education),
    ("kenntnisse", Section::Skills),
    ("fähigkeiten", Section::Skills),
    ("zertifikate", Section::Certifications),
    ("publikationen", Section::Publications),
    ("auszeichnungen", Section::Awards),
    // Portuguese
    ("resumo", Section::Summary),
    ("experiência", Section::Experience),
    ("experiência profissional", Section::Experience),
    ("projetos", Section::Projects),
    ("educação", Section::Education),
    ("formação", Section::Education),
    ("certificações", Section::Certifications),
    ("publicações", Section::Publications),
    ("prêmios", Section::Awards),
    // Italian
    ("riepilogo", Section::Summary),
    ("profilo", Section::Summary),
    ("esperienza", Section::Experience),
    ("esperienza lavorativa", Section::Experience),
    ("progetti", Section::Projects),
    ("istruzione", Section::Education),
    ("competenze", Section::Skills),
    ("certificazioni", Section::Certifications),
    ("pubblicazioni", Section::Publications),
    // Dutch
    ("samenvatting", Section::Summary),
    ("profiel", Section::Summary),
    ("werkervaring", Section::Experience),
    ("ervaring", Section::Experience),
    ("projecten", Section::Projects),
    ("opleiding", Section::Education),
    ("vaardigheden", Section::Skills),
    ("certificeringen", Section::Certifications),
    ("publicaties", Section::Publications),
    // Polish
    ("podsumowanie", Section::Summary),
    ("doświadczenie", Section::Experience),
    ("doświadczenie zawodowe", Section::Experience),
    ("projekty", Section::Projects),
    ("edukacja", Section::Education),
    ("wykształcenie", Section::Education),
    ("umiejętności", Section::Skills),
    ("certyfikaty", Section::Certifications),
    ("publikacje", Section::Publications),
    ("nagrody", Section::Awards),
];

/// Shape check for the keyword fallback: uppercase letters, spaces and a
/// few joiners only, 3 to 47 chars. Applied to the decoration-stripped
/// line before lowercasing, so accented headings never reach the fallback
/// (the dictionary covers those).
static ALL_CAPS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Z &/+-]{2,46}$").unwrap());

/// Keyword fallbacks for ALL-CAPS lines the dictionary misses, e.g.
/// "EDUCATION & TRAINING". Order is the tie-break: first match wins.
static KEYWORD_FALLBACKS: Lazy<Vec<(Section, Regex)>> = Lazy::new(|| {
    vec![
        (
            Section::Summary,
            Regex::new(r"summar|profil|perfil|about|objec|zusammenfass|samenvatt|podsumow|riepilog").unwrap(),
        ),
        (
            Section::Experience,
            Regex::new(r"experien|employ|work hist|career hist|berufserfahr|erfahrung|ervaring|esperienz|laboral").unwrap(),
        ),
        (
            Section::Projects,
            Regex::new(r"project|projekt|proyecto|progett|projet").unwrap(),
        ),
        (
            Section::Education,
            Regex::new(r"educat|academ|ausbildung|bildung|formation|formacion|opleiding|istruzion|studi").unwrap(),
        ),
        (
            Section::Skills,
            Regex::new(r"skill|competen|proficien|kenntnis|habilidad|vaardigh|technolog|tech stack").unwrap(),
        ),
        (
            Section::Certifications,
            Regex::new(r"certif|licen|zertifi").unwrap(),
        ),
        (
            Section::Conferences,
            Regex::new(r"conferen|konferen|talks|speaking").unwrap(),
        ),
        (
            Section::Publications,
            Regex::new(r"publica|publikation|papers").unwrap(),
        ),
        (
            Section::Awards,
            Regex::new(r"award|achiev|honor|honour|auszeichnung|premio|nagrod").unwrap(),
        ),
    ]
});

const DECORATIVE_GLYPHS: &[char] = &[
    '-', '–', '—', '•', '*', '·', '▪', '◦', '#', '=', '~', '_', '|', ':', ' ', '\t',
];

/// Resolves a line to a canonical section, or `None` for ordinary content.
pub fn normalize_heading(line: &str) -> Option<Section> {
    let stripped = line.trim().trim_matches(|c: char| DECORATIVE_GLYPHS.contains(&c));
    if stripped.is_empty() {
        return None;
    }

    let mut key = stripped.to_lowercase();
    while let Some(last) = key.chars().last() {
        if matches!(last, ':' | '-' | '|') || last.is_whitespace() {
            key.pop();
        } else {
            break;
        }
    }

    if let Some((_, section)) = HEADING_DICTIONARY.iter().find(|(k, _)| *k == key) {
        return Some(*section);
    }

    if ALL_CAPS_RE.is_match(stripped) {
        for (section, re) in KEYWORD_FALLBACKS.iter() {
            if re.is_match(&key) {
                return Some(*section);
            }
        }
    }

    None
}
