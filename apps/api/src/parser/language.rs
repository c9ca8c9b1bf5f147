//! Language hint detection from section-heading vocabulary.
//!
//! The hint is advisory metadata for downstream tuning. It never changes
//! which canonical sections exist or how lines are bucketed.

/// Per-locale heading vocabulary: the five section words that appear in
/// nearly every resume of that locale.
const LOCALE_VOCABULARY: &[(&str, &[&str])] = &[
    (
        "en",
        &["summary", "experience", "education", "skills", "projects"],
    ),
    (
        "es",
        &["resumen", "experiencia", "educación", "habilidades", "proyectos"],
    ),
    (
        "fr",
        &["résumé", "expérience", "formation", "compétences", "projets"],
    ),
    (
        "de",
        &["zusammenfassung", "berufserfahrung", "ausbildung", "kenntnisse", "projekte"],
    ),
    (
        "pt",
        &["resumo", "experiência", "educação", "formação", "projetos"],
    ),
    (
        "it",
        &["riepilogo", "esperienza", "istruzione", "competenze", "progetti"],
    ),
    (
        "nl",
        &["samenvatting", "werkervaring", "opleiding", "vaardigheden", "projecten"],
    ),
    (
        "pl",
        &["podsumowanie", "doświadczenie", "wykształcenie", "umiejętności", "projekty"],
    ),
];

/// Picks the locale whose heading vocabulary occurs most often in the raw
/// text. All-zero counts fall back to "en"; ties keep the earlier locale
/// in the table.
pub fn detect_language(raw_text: &str) -> String {
    let haystack = raw_text.to_lowercase();
    let mut best_tag = "en";
    let mut best_count = 0usize;
    for (tag, vocabulary) in LOCALE_VOCABULARY {
        let count: usize = vocabulary
            .iter()
            .map(|word| haystack.matches(word).count())
            .sum();
        if count > best_count {
            best_tag = tag;
            best_count = count;
        }
    }
    best_tag.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_resume_detected() {
        let text = "SUMMARY\nBuilder.\nEXPERIENCE\nAcme\nSKILLS\nRust";
        assert_eq!(detect_language(text), "en");
    }

    #[test]
    fn test_spanish_resume_detected() {
        let text = "RESUMEN\nIngeniera.\nEXPERIENCIA\nAcme\nHABILIDADES\nRust\nPROYECTOS\nUno";
        assert_eq!(detect_language(text), "es");
    }

    #[test]
    fn test_german_resume_detected() {
        let text = "Zusammenfassung\n...\nBerufserfahrung\n...\nAusbildung\n...\nKenntnisse";
        assert_eq!(detect_language(text), "de");
    }

    #[test]
    fn test_no_vocabulary_defaults_to_english() {
        assert_eq!(detect_language("1234 5678"), "en");
        assert_eq!(detect_language(""), "en");
    }

    #[test]
    fn test_detection_is_case_insensitive() {
        assert_eq!(
            detect_language("WERKERVARING\nOPLEIDING\nVAARDIGHEDEN"),
            "nl"
        );
    }
}
