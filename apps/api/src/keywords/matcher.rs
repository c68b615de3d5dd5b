//! Keyword Matcher / Scorer — deterministic ATS keyword matching.
//!
//! Match rules, applied per keyword:
//! - multi-word keywords: match on whole-phrase substring containment, or
//!   when at least half (ceiling) of the parts longer than two characters
//!   appear as substrings;
//! - single-word keywords: case-insensitive word-boundary match, so "IT"
//!   does not match inside "with" and "AWS" does not match inside "SAWS".
//!
//! The score is `round(matched / keywords * 100)`, defined as 0 for an empty
//! keyword set. Scoring runs twice per generation — against the unmodified
//! base resume and against the generated text — and both results are
//! surfaced together so callers can show the improvement.

use regex::RegexBuilder;
use serde::{Deserialize, Serialize};

/// The outcome of matching one keyword list against one body of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    pub keywords: Vec<String>,
    pub matched: Vec<String>,
    /// 0–100.
    pub score: u32,
}

/// Returns the sub-list of keywords found in `text`, in original order.
pub fn calculate_keyword_match(text: &str, keywords: &[String]) -> Vec<String> {
    let normalized_text = text.to_lowercase();

    keywords
        .iter()
        .filter(|keyword| keyword_matches(text, &normalized_text, keyword))
        .cloned()
        .collect()
}

fn keyword_matches(text: &str, normalized_text: &str, keyword: &str) -> bool {
    let normalized_keyword = keyword.trim().to_lowercase();
    if normalized_keyword.is_empty() {
        return false;
    }

    let parts: Vec<&str> = normalized_keyword.split_whitespace().collect();

    if parts.len() > 1 {
        // Whole-phrase containment
        if normalized_text.contains(&normalized_keyword) {
            return true;
        }
        // Otherwise count individual parts present in the text
        let matched_parts = parts
            .iter()
            .filter(|part| part.len() > 2 && normalized_text.contains(**part))
            .count();
        return matched_parts >= parts.len().div_ceil(2);
    }

    // Single word: word-boundary match against the original-case text, which
    // rejects embedded hits like "IT" inside "with" or "AWS" inside "SAWS".
    word_boundary_match(text, &normalized_keyword)
}

fn word_boundary_match(text: &str, keyword: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(keyword));
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(text),
        // Escaped literals always compile; treat a failure as no match.
        Err(_) => false,
    }
}

/// `round(matched / total * 100)`; 0 when the keyword set is empty.
pub fn ats_score(matched_count: usize, total_count: usize) -> u32 {
    if total_count == 0 {
        return 0;
    }
    ((matched_count as f64 / total_count as f64) * 100.0).round() as u32
}

/// Convenience wrapper producing the full match result in one call.
pub fn score_keywords(text: &str, keywords: &[String]) -> KeywordMatchResult {
    let matched = calculate_keyword_match(text, keywords);
    let score = ats_score(matched.len(), keywords.len());
    KeywordMatchResult {
        keywords: keywords.to_vec(),
        matched,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_single_word_match_is_case_insensitive() {
        let matched =
            calculate_keyword_match("Built services in rust and Go", &kw(&["Rust", "Go"]));
        assert_eq!(matched, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_whole_word_keyword_matches() {
        let matched = calculate_keyword_match("Deployed on AWS infrastructure", &kw(&["AWS"]));
        assert_eq!(matched, vec!["AWS"]);
    }

    #[test]
    fn test_embedded_occurrence_does_not_match() {
        let matched = calculate_keyword_match("sharpened SAWS in the shed", &kw(&["AWS"]));
        assert!(matched.is_empty(), "'AWS' must not match inside 'SAWS'");

        let matched = calculate_keyword_match("worked with the team", &kw(&["IT"]));
        assert!(matched.is_empty(), "'IT' must not match inside 'with'");
    }

    #[test]
    fn test_multi_word_phrase_containment_matches() {
        let text = "five years of distributed systems work";
        let matched = calculate_keyword_match(text, &kw(&["distributed systems"]));
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_multi_word_keyword_matches_on_half_of_parts() {
        // "machine learning pipelines": 2 of 3 parts present → ceil(3/2)=2 → match
        let text = "built machine pipelines for analytics";
        let matched = calculate_keyword_match(text, &kw(&["machine learning pipelines"]));
        assert_eq!(matched.len(), 1);
    }

    #[test]
    fn test_multi_word_keyword_short_parts_ignored() {
        // Parts of length <= 2 never count toward the half threshold
        let text = "experience of ml";
        let matched = calculate_keyword_match(text, &kw(&["ml ops platform"]));
        assert!(matched.is_empty());
    }

    #[test]
    fn test_matched_order_follows_keyword_order() {
        let text = "Go and Rust daily";
        let matched = calculate_keyword_match(text, &kw(&["Rust", "Go"]));
        assert_eq!(matched, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_score_rounds() {
        assert_eq!(ats_score(1, 3), 33);
        assert_eq!(ats_score(2, 3), 67);
        assert_eq!(ats_score(2, 10), 20);
        assert_eq!(ats_score(8, 10), 80);
    }

    #[test]
    fn test_empty_keyword_set_scores_zero() {
        assert_eq!(ats_score(0, 0), 0);
        let result = score_keywords("any text", &[]);
        assert_eq!(result.score, 0);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_unmatched_keyword_growth_decreases_score() {
        let text = "Rust services";
        let small = score_keywords(text, &kw(&["Rust"]));
        let grown = score_keywords(text, &kw(&["Rust", "Haskell"]));
        assert_eq!(small.matched.len(), grown.matched.len());
        assert!(grown.score < small.score);
    }

    #[test]
    fn test_score_keywords_full_result() {
        let result = score_keywords("Rust and SQL", &kw(&["Rust", "SQL", "Kafka"]));
        assert_eq!(result.matched, vec!["Rust", "SQL"]);
        assert_eq!(result.score, 67);
        assert_eq!(result.keywords.len(), 3);
    }
}
