//! Interview preparation: JSON-mode generation of question/answer frameworks.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{
    build_interview_user_prompt, InterviewUserPromptParams, INTERVIEW_SYSTEM,
};
use crate::llm::{generate_json, GenerationOptions, TextGenerator};

const INTERVIEW_OPTIONS: GenerationOptions = GenerationOptions::json(0.7, 3000);

pub struct GenerateInterviewParams<'a> {
    pub resume_content: &'a str,
    pub cover_letter_content: &'a str,
    pub job_title: &'a str,
    pub company_name: &'a str,
    pub job_description: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    Behavioral,
    Technical,
    Situational,
    CompanySpecific,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
    pub category: QuestionCategory,
    #[serde(default)]
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewPrep {
    #[serde(default)]
    pub questions: Vec<QuestionAnswer>,
    #[serde(default, rename = "generalTips")]
    pub general_tips: Vec<String>,
}

/// Generates interview prep as structured JSON. A response that is not valid
/// JSON for the expected shape is a generation failure, not a panic.
pub async fn generate_interview_prep(
    generator: &dyn TextGenerator,
    params: GenerateInterviewParams<'_>,
) -> Result<InterviewPrep, AppError> {
    let user = build_interview_user_prompt(&InterviewUserPromptParams {
        job_title: params.job_title,
        company_name: params.company_name,
        job_description: params.job_description,
        resume_content: params.resume_content,
        cover_letter_content: params.cover_letter_content,
    });

    let prep: InterviewPrep = generate_json(generator, INTERVIEW_SYSTEM, &user, INTERVIEW_OPTIONS)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    if prep.questions.is_empty() {
        return Err(AppError::Generation(
            "interview response contained no questions".to_string(),
        ));
    }

    Ok(prep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::LlmError;
    use async_trait::async_trait;

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

    fn params() -> GenerateInterviewParams<'static> {
        GenerateInterviewParams {
            resume_content: "resume",
            cover_letter_content: "letter",
            job_title: "Backend Engineer",
            company_name: "Acme",
            job_description: "jd",
        }
    }

    const VALID_RESPONSE: &str = r#"{
        "questions": [
            {
                "question": "Tell me about a scaling challenge.",
                "answer": "Situation: ... Task: ... Action: ... Result: ...",
                "category": "behavioral",
                "tips": ["Quantify the result", "Keep it under two minutes"]
            },
            {
                "question": "Why Acme?",
                "answer": "Their platform work matches my background.",
                "category": "company-specific",
                "tips": []
            }
        ],
        "generalTips": ["Research recent product launches"]
    }"#;

    #[tokio::test]
    async fn test_valid_json_parses_into_prep() {
        let prep = generate_interview_prep(&CannedGenerator(VALID_RESPONSE), params())
            .await
            .unwrap();
        assert_eq!(prep.questions.len(), 2);
        assert_eq!(prep.questions[0].category, QuestionCategory::Behavioral);
        assert_eq!(prep.questions[1].category, QuestionCategory::CompanySpecific);
        assert_eq!(prep.general_tips.len(), 1);
    }

    #[tokio::test]
    async fn test_fenced_json_is_accepted() {
        let fenced: &'static str = "```json\n{\"questions\": [{\"question\": \"Q\", \"answer\": \"A\", \"category\": \"technical\", \"tips\": []}], \"generalTips\": [\"tip\"]}\n```";
        let prep = generate_interview_prep(&CannedGenerator(fenced), params())
            .await
            .unwrap();
        assert_eq!(prep.questions.len(), 1);
        assert_eq!(prep.general_tips, vec!["tip"]);
    }

    #[tokio::test]
    async fn test_malformed_json_is_generation_error() {
        let err = generate_interview_prep(&CannedGenerator("not json at all"), params())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
    }

    #[tokio::test]
    async fn test_empty_question_list_is_generation_error() {
        let err = generate_interview_prep(&CannedGenerator("{}"), params())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Generation(_)));
    }

    #[test]
    fn test_category_serde_kebab_case() {
        let json = serde_json::to_string(&QuestionCategory::CompanySpecific).unwrap();
        assert_eq!(json, "\"company-specific\"");
        let cat: QuestionCategory = serde_json::from_str("\"situational\"").unwrap();
        assert_eq!(cat, QuestionCategory::Situational);
    }
}
