//! Keyword Extractor — derives a candidate keyword set from a job description.
//!
//! Two interchangeable strategies behind the `KeywordExtractor` trait:
//! - `LlmKeywordExtractor`: asks the text-generation collaborator for a
//!   comma-separated list (primary path, capped at 30 keywords).
//! - `HeuristicKeywordExtractor`: deterministic Title-Case + known-tech-term
//!   extraction (fallback path, capped at 20).
//!
//! `extract_keywords` composes the two: the extractor never blocks
//! indefinitely and never errors past its own boundary — callers always get
//! a keyword list, possibly short or heuristic-derived.

use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

use crate::llm::{GenerationOptions, LlmError, TextGenerator};

/// Keywords longer than this are discarded as extraction noise.
const MAX_KEYWORD_LEN: usize = 50;
const LLM_KEYWORD_CAP: usize = 30;
const HEURISTIC_KEYWORD_CAP: usize = 20;

const EXTRACTION_OPTIONS: GenerationOptions = GenerationOptions::new(0.3, 300);

const EXTRACTION_SYSTEM: &str =
    "You extract hiring keywords from job descriptions. Respond with a \
     comma-separated list only — no numbering, no commentary.";

/// Extraction prompt template. Replace `{job_description}` before sending.
const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract the most important keywords and required skills from this job description.
Focus on:
- Technical skills
- Required qualifications
- Key responsibilities
- Industry-specific terms
- Certifications or tools mentioned

Return ONLY a comma-separated list of keywords, nothing else.

JOB DESCRIPTION:
{job_description}"#;

/// A keyword-extraction strategy. Both implementations return an ordered,
/// deduplicated, length-bounded keyword list.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract(&self, job_description: &str) -> Result<Vec<String>, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Primary: LLM-backed extraction
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmKeywordExtractor<'a> {
    pub generator: &'a dyn TextGenerator,
}

#[async_trait]
impl KeywordExtractor for LlmKeywordExtractor<'_> {
    async fn extract(&self, job_description: &str) -> Result<Vec<String>, LlmError> {
        let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{job_description}", job_description);
        let response = self
            .generator
            .generate(EXTRACTION_SYSTEM, &prompt, EXTRACTION_OPTIONS)
            .await?;
        Ok(parse_keyword_list(&response))
    }
}

/// Parses a comma-separated LLM response into a clean keyword list:
/// trim, drop empty and over-long entries, dedupe preserving order, cap at 30.
pub fn parse_keyword_list(response: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    for raw in response.split(',') {
        let keyword = raw.trim();
        if keyword.is_empty() || keyword.chars().count() >= MAX_KEYWORD_LEN {
            continue;
        }
        if keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword)) {
            continue;
        }
        keywords.push(keyword.to_string());
        if keywords.len() == LLM_KEYWORD_CAP {
            break;
        }
    }
    keywords
}

// ────────────────────────────────────────────────────────────────────────────
// Fallback: deterministic heuristic extraction
// ────────────────────────────────────────────────────────────────────────────

pub struct HeuristicKeywordExtractor;

#[async_trait]
impl KeywordExtractor for HeuristicKeywordExtractor {
    async fn extract(&self, job_description: &str) -> Result<Vec<String>, LlmError> {
        Ok(heuristic_keywords(job_description))
    }
}

/// Common technology terms matched case-insensitively in the fallback path.
const COMMON_TECH_TERMS: &[&str] = &[
    "JavaScript",
    "Python",
    "React",
    "AWS",
    "SQL",
    "API",
    "Git",
    "Docker",
    "Azure",
    "Node.js",
    "TypeScript",
    "CSS",
    "HTML",
];

fn title_case_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b").expect("title-case regex is valid")
    })
}

/// Deterministic local extraction: Title-Case word sequences unioned with the
/// fixed technology list, deduplicated case-insensitively, capped at 20.
pub fn heuristic_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();

    let mut push_unique = |candidate: &str| {
        if keywords.len() < HEURISTIC_KEYWORD_CAP
            && !keywords.iter().any(|k| k.eq_ignore_ascii_case(candidate))
        {
            keywords.push(candidate.to_string());
        }
    };

    for m in title_case_regex().find_iter(text) {
        push_unique(m.as_str());
    }

    let lower_text = text.to_lowercase();
    for term in COMMON_TECH_TERMS {
        if lower_text.contains(&term.to_lowercase()) {
            push_unique(term);
        }
    }

    keywords
}

// ────────────────────────────────────────────────────────────────────────────
// Composite entry point
// ────────────────────────────────────────────────────────────────────────────

/// Extracts keywords from a job description, preferring the LLM strategy and
/// falling back to the deterministic heuristic on any failure. Never errors.
pub async fn extract_keywords(generator: &dyn TextGenerator, job_description: &str) -> Vec<String> {
    let primary = LlmKeywordExtractor { generator };
    match primary.extract(job_description).await {
        Ok(keywords) => keywords,
        Err(e) => {
            warn!("LLM keyword extraction failed, using heuristic fallback: {e}");
            heuristic_keywords(job_description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(
            &self,
            _system: &str,
            _prompt: &str,
            _opts: GenerationOptions,
        ) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    struct CannedGenerator(&'static str);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate(
            &self,
            _system: &str,
            _prompt: &str,
            _opts: GenerationOptions,
        ) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_parse_keyword_list_trims_and_drops_empty() {
        let parsed = parse_keyword_list("Rust, , SQL ,  Docker,");
        assert_eq!(parsed, vec!["Rust", "SQL", "Docker"]);
    }

    #[test]
    fn test_parse_keyword_list_drops_overlong_entries() {
        let long = "x".repeat(60);
        let parsed = parse_keyword_list(&format!("Rust,{long},SQL"));
        assert_eq!(parsed, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_parse_keyword_list_dedupes_preserving_order() {
        let parsed = parse_keyword_list("Rust, SQL, rust, Docker, SQL");
        assert_eq!(parsed, vec!["Rust", "SQL", "Docker"]);
    }

    #[test]
    fn test_parse_keyword_list_caps_at_thirty() {
        let many: Vec<String> = (0..50).map(|i| format!("kw{i}")).collect();
        let parsed = parse_keyword_list(&many.join(","));
        assert_eq!(parsed.len(), 30);
        assert_eq!(parsed[0], "kw0");
    }

    #[test]
    fn test_heuristic_finds_title_case_sequences() {
        let keywords = heuristic_keywords("Experience with Machine Learning and Cloud Computing");
        assert!(keywords.contains(&"Machine Learning".to_string()));
        assert!(keywords.contains(&"Cloud Computing".to_string()));
    }

    #[test]
    fn test_heuristic_finds_tech_terms_case_insensitively() {
        let keywords = heuristic_keywords("we use docker, aws and typescript daily");
        assert!(keywords.contains(&"Docker".to_string()));
        assert!(keywords.contains(&"AWS".to_string()));
        assert!(keywords.contains(&"TypeScript".to_string()));
    }

    #[test]
    fn test_heuristic_caps_at_twenty() {
        let text: String = (0..40).map(|i| format!("Skillword{i} ")).collect();
        // Each "SkillwordN" fails title-case (digit suffix stops the match at
        // the alpha part), so build genuinely distinct Title-Case words.
        let text = format!("{text} Alpha Beta Gamma Delta");
        assert!(heuristic_keywords(&text).len() <= 20);
    }

    #[tokio::test]
    async fn test_extract_keywords_uses_llm_response() {
        let generator = CannedGenerator("Rust, distributed systems, Kubernetes");
        let keywords = extract_keywords(&generator, "any jd").await;
        assert_eq!(keywords, vec!["Rust", "distributed systems", "Kubernetes"]);
    }

    #[tokio::test]
    async fn test_extract_keywords_falls_back_on_failure() {
        let keywords = extract_keywords(
            &FailingGenerator,
            "Looking for Python and Docker experience with Data Engineering",
        )
        .await;
        assert!(!keywords.is_empty(), "fallback must still produce keywords");
        assert!(keywords.iter().any(|k| k == "Python" || k == "Docker"));
    }
}
