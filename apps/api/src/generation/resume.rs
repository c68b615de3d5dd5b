//! Resume generation flow: extract keywords, score the base resume, rewrite
//! under the locked-section contract, score the result.

use serde::Serialize;

use crate::errors::AppError;
use crate::generation::lock::{
    build_locked_sections_instruction, verify_locked_sections, LockViolation,
};
use crate::generation::prompts::{
    build_resume_system_prompt, build_resume_user_prompt, ResumeUserPromptParams,
};
use crate::keywords::{extract_keywords, score_keywords};
use crate::llm::{GenerationOptions, TextGenerator};
use crate::templates::ResumeTemplate;

const RESUME_OPTIONS: GenerationOptions = GenerationOptions::new(0.7, 2500);

pub struct GenerateResumeParams<'a> {
    pub base_resume: &'a str,
    pub job_description: &'a str,
    pub custom_requests: Option<&'a str>,
    pub template: &'a ResumeTemplate,
    pub locked_sections: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedResume {
    pub content: String,
    pub keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub ats_score: u32,
    pub original_matched_keywords: Vec<String>,
    pub original_ats_score: u32,
    /// Locked sections the output failed to preserve; warnings, not errors.
    pub lock_warnings: Vec<LockViolation>,
}

/// Runs the full resume rewrite pipeline. The before-score is computed from
/// the unmodified base resume and the after-score from the generated text,
/// both against the same keyword set.
pub async fn generate_customized_resume(
    generator: &dyn TextGenerator,
    params: GenerateResumeParams<'_>,
) -> Result<GeneratedResume, AppError> {
    let keywords = extract_keywords(generator, params.job_description).await;

    let original = score_keywords(params.base_resume, &keywords);

    let lock_instruction = build_locked_sections_instruction(params.locked_sections);
    let system = build_resume_system_prompt(params.template, &lock_instruction);
    let user = build_resume_user_prompt(&ResumeUserPromptParams {
        base_resume: params.base_resume,
        job_description: params.job_description,
        custom_requests: params.custom_requests,
        template_name: params.template.name,
        keywords: &keywords,
        original_matched: &original.matched,
        original_score: original.score,
    });

    let content = generator
        .generate(&system, &user, RESUME_OPTIONS)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    let generated = score_keywords(&content, &keywords);
    let lock_warnings =
        verify_locked_sections(params.base_resume, &content, params.locked_sections);

    Ok(GeneratedResume {
        content,
        keywords,
        matched_keywords: generated.matched,
        ats_score: generated.score,
        original_matched_keywords: original.matched,
        original_ats_score: original.score,
        lock_warnings,
    })
}
