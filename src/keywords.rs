// src/keywords.rs
//! Keyword normalization: stemming, stop-word filtering and frequency-based
//! keyword selection. Both the résumé and the job-posting side go through the
//! same path; postings use a lower minimum frequency because the text is
//! shorter and denser.

use std::collections::HashMap;
use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Maximum number of keywords returned per document.
pub const KEYWORD_CAP: usize = 30;

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
        "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we",
        "say", "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their",
    ]
    .into_iter()
    .collect()
});

const SUFFIXES: [&str; 9] = [
    "ing", "ed", "er", "est", "ly", "tion", "sion", "ness", "ment",
];

/// Reduce a word to an approximate root form. Strips one known suffix when
/// the remaining stem is longer than two characters; otherwise returns the
/// lower-cased word unchanged.
pub fn stem(word: &str) -> String {
    let lower = word.to_lowercase();
    for suffix in SUFFIXES {
        if let Some(stripped) = lower.strip_suffix(suffix) {
            if stripped.len() > 2 {
                return stripped.to_string();
            }
        }
    }
    lower
}

/// Stemmed form of every token in the text. Membership tests against
/// [`extract_keywords`] output must go through this set rather than the raw
/// text, since extracted keywords are stems ("management" becomes "manage").
pub fn stem_tokens(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .map(stem)
        .collect()
}

/// Whole-term containment check, case-insensitive. The term must not be
/// flanked by alphanumerics, so "go" matches "Go developer" but not "django".
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let haystack = haystack.to_lowercase();
    let term = term.to_lowercase();
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(&term) {
        let at = from + offset;
        let before_ok = haystack[..at]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[at + term.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        from = at + term.len();
    }
    false
}

/// Extract the dominant keywords from free text.
///
/// Tokenizes on non-word boundaries, drops stop words and tokens shorter
/// than four characters, counts stemmed frequencies, and returns stems
/// meeting `min_frequency`, most frequent first, capped at [`KEYWORD_CAP`].
pub fn extract_keywords(text: &str, min_frequency: usize) -> Vec<String> {
    let mut frequency: HashMap<String, usize> = HashMap::new();

    for token in text
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
    {
        if token.len() <= 3 || STOP_WORDS.contains(token) {
            continue;
        }
        *frequency.entry(stem(token)).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = frequency
        .into_iter()
        .filter(|(_, count)| *count >= min_frequency)
        .collect();
    // Alphabetical tie-break keeps the output deterministic.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(KEYWORD_CAP);

    ranked.into_iter().map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_strips_known_suffixes() {
        assert_eq!(stem("managing"), "manag");
        assert_eq!(stem("developed"), "develop");
        assert_eq!(stem("optimization"), "optimiza");
        assert_eq!(stem("Engineer"), "engine");
    }

    #[test]
    fn test_stem_keeps_short_stems() {
        // "sing" - "ing" would leave "s", too short to strip
        assert_eq!(stem("sing"), "sing");
        assert_eq!(stem("red"), "red");
        assert_eq!(stem("BED"), "bed");
    }

    #[test]
    fn test_extract_keywords_frequency_and_order() {
        let text = "kubernetes kubernetes kubernetes deployment deployment cluster";
        let keywords = extract_keywords(text, 2);
        assert_eq!(keywords, vec!["kubernetes".to_string(), "deploy".to_string()]);
    }

    #[test]
    fn test_extract_keywords_drops_stopwords_and_short_tokens() {
        let keywords = extract_keywords("the the the and and api api", 1);
        // "the"/"and" are stop words, "api" is only three characters
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_stem_tokens_membership() {
        let stems = stem_tokens("Management of engineering teams");
        assert!(stems.contains("manage"));
        assert!(stems.contains("engineer"));
        assert!(!stems.contains("management"));
    }

    #[test]
    fn test_contains_term_respects_boundaries() {
        assert!(contains_term("Go developer wanted", "go"));
        assert!(!contains_term("built with django", "go"));
        assert!(contains_term("shipped node.js services", "node.js"));
        assert!(contains_term("R, Python, SQL", "r"));
        assert!(!contains_term("refactored pipelines", "r"));
        assert!(!contains_term("anything", ""));
    }

    #[test]
    fn test_extract_keywords_empty_input() {
        assert!(extract_keywords("", 1).is_empty());
    }

    #[test]
    fn test_extract_keywords_cap() {
        let text = (0..50)
            .map(|i| format!("uniqueword{:02}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let keywords = extract_keywords(&text, 1);
        assert_eq!(keywords.len(), KEYWORD_CAP);
    }
}
