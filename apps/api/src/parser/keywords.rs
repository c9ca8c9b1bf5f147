//! Keyword extraction: frequency-ranked tokens after stopword removal.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

/// How many keywords to keep.
pub const KEYWORD_LIMIT: usize = 15;

/// Everything outside lowercase alphanumerics and the small tech-token
/// allowlist (".", "+", "#" keep "node.js", "c++" and "c#" whole) becomes
/// a space.
static NON_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s.+#]").unwrap());

/// Common function words across the supported locales. Tokens of one or
/// two characters are dropped before this set is consulted, so only the
/// longer stopwords need listing.
const STOPWORDS: &[&str] = &[
    // English
    "the", "and", "for", "with", "are", "was", "were", "been", "from", "that", "this", "have",
    "has", "had", "not", "but", "all", "our", "your", "their",
    // Spanish
    "los", "las", "del", "por", "para", "con", "una", "como", "que", "más",
    // French
    "les", "des", "pour", "avec", "par", "sur", "aux", "une", "dans",
    // German
    "der", "die", "das", "und", "ein", "eine", "mit", "von", "für", "auf", "den", "dem", "bei",
    // Portuguese
    "dos", "das", "uma", "com", "nos",
    // Italian
    "gli", "della", "per", "che", "nel",
    // Dutch
    "het", "een", "van", "voor", "met", "aan", "bij", "naar",
    // Polish
    "przez", "jest", "oraz", "dla", "nie",
];

/// Top distinct tokens by descending frequency; ties keep first-occurrence
/// order (the sort is stable over a first-occurrence-ordered list).
pub fn extract_keywords(raw_text: &str) -> Vec<String> {
    let stopwords: HashSet<&str> = STOPWORDS.iter().copied().collect();
    let lowered = raw_text.to_lowercase();
    let cleaned = NON_TOKEN_RE.replace_all(&lowered, " ");

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() <= 2 || stopwords.contains(token) {
            continue;
        }
        match counts.get_mut(token) {
            Some(count) => *count += 1,
            None => {
                order.push(token.to_string());
                counts.insert(token.to_string(), 1);
            }
        }
    }

    order.sort_by(|a, b| counts[b].cmp(&counts[a]));
    order.truncate(KEYWORD_LIMIT);
    order
}
