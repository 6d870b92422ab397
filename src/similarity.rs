// src/similarity.rs
//! Character-bigram string similarity (Dice coefficient) and categorized
//! matching between keyword/skill sets.

use crate::keywords::stem;
use serde::{Deserialize, Serialize};

/// How strongly two terms match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrength {
    Exact,
    Similar,
    Related,
}

/// A pool entry scored against a target term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarSkill {
    pub skill: String,
    pub similarity: f64,
}

fn bigrams(s: &str) -> Vec<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Dice coefficient over character bigrams of the lower-cased inputs.
///
/// Each bigram of the candidate is consumed at most once, so repeated
/// bigrams are not double-counted. Returns 0.0 when either input produces
/// no bigrams, except that identical non-empty strings always score 1.0.
pub fn bigram_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if !a.is_empty() && a == b {
        return 1.0;
    }

    let pairs_a = bigrams(&a);
    let mut pairs_b = bigrams(&b);
    let union = pairs_a.len() + pairs_b.len();
    if union == 0 {
        return 0.0;
    }

    let mut matches = 0usize;
    for pair in &pairs_a {
        if let Some(pos) = pairs_b.iter().position(|p| p == pair) {
            matches += 1;
            pairs_b.swap_remove(pos);
        }
    }

    (2 * matches) as f64 / union as f64
}

/// Classify a candidate against a target term.
///
/// Equal stems are an exact match regardless of surface similarity; otherwise
/// the Dice score buckets into similar (>= 0.8) or related (>= 0.6).
pub fn classify(target: &str, candidate: &str) -> Option<(MatchStrength, f64)> {
    if stem(target) == stem(candidate) {
        return Some((MatchStrength::Exact, 1.0));
    }
    let similarity = bigram_similarity(target, candidate);
    if similarity >= 0.8 {
        Some((MatchStrength::Similar, similarity))
    } else if similarity >= 0.6 {
        Some((MatchStrength::Related, similarity))
    } else {
        None
    }
}

/// All pool entries scoring at or above `threshold`, best first.
pub fn find_similar(target: &str, pool: &[String], threshold: f64) -> Vec<SimilarSkill> {
    let mut matches: Vec<SimilarSkill> = pool
        .iter()
        .map(|candidate| SimilarSkill {
            skill: candidate.clone(),
            similarity: bigram_similarity(target, candidate),
        })
        .filter(|m| m.similarity >= threshold)
        .collect();
    matches.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap());
    matches
}

/// Skill-name equivalence: case-insensitive equality or substring
/// containment in either direction, so "React" covers "React.js".
pub fn skills_equivalent(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a == b || a.contains(&b) || b.contains(&a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_similarity_is_one() {
        assert_eq!(bigram_similarity("kubernetes", "kubernetes"), 1.0);
        assert_eq!(bigram_similarity("Go", "go"), 1.0);
        assert_eq!(bigram_similarity("x", "x"), 1.0);
    }

    #[test]
    fn test_symmetry() {
        let ab = bigram_similarity("javascript", "typescript");
        let ba = bigram_similarity("typescript", "javascript");
        assert!((ab - ba).abs() < 1e-12);
        assert!(ab > 0.0 && ab < 1.0);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(bigram_similarity("", ""), 0.0);
        assert_eq!(bigram_similarity("react", ""), 0.0);
    }

    #[test]
    fn test_repeated_bigrams_not_double_counted() {
        // "aaaa" has bigrams [aa, aa, aa]; "aab" has [aa, ab].
        // Only one "aa" can be consumed: 2*1 / (3+2) = 0.4
        assert!((bigram_similarity("aaaa", "aab") - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_classify_buckets() {
        let (strength, _) = classify("managing", "managed").unwrap();
        assert_eq!(strength, MatchStrength::Exact);

        let (strength, similarity) = classify("postgresql", "postgres").unwrap();
        assert_eq!(strength, MatchStrength::Similar);
        assert!(similarity >= 0.8);

        assert!(classify("react", "docker").is_none());
    }

    #[test]
    fn test_find_similar_sorted_descending() {
        let pool = vec![
            "postgres".to_string(),
            "postgre".to_string(),
            "docker".to_string(),
        ];
        let matches = find_similar("postgresql", &pool, 0.6);
        assert!(matches.len() >= 2);
        for pair in matches.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
        assert!(matches.iter().all(|m| m.skill != "docker"));
    }

    #[test]
    fn test_skills_equivalent_containment() {
        assert!(skills_equivalent("React", "react.js"));
        assert!(skills_equivalent("node.js", "Node"));
        assert!(!skills_equivalent("java", "python"));
    }
}
