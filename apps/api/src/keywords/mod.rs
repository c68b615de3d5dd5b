// Keyword extraction and ATS match scoring.

pub mod extract;
pub mod matcher;

pub use extract::extract_keywords;
pub use matcher::{ats_score, calculate_keyword_match, score_keywords, KeywordMatchResult};
