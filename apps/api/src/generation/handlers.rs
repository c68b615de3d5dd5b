use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::cover_letter::{
    extract_personal_details, generate_cover_letter, GenerateCoverLetterParams,
};
use crate::generation::interview::{
    generate_interview_prep, GenerateInterviewParams, InterviewPrep,
};
use crate::generation::lock::LockViolation;
use crate::generation::resume::{generate_customized_resume, GenerateResumeParams};
use crate::models::profile::UserProfileRow;
use crate::profile::store::{get_document, insert_document, require_profile, NewDocument};
use crate::state::AppState;
use crate::templates::{all_templates, get_template_by_id, ResumeTemplate};

/// Resolves the template for a generation request: explicit override first,
/// then the profile's stored preference.
fn resolve_template(
    profile: &UserProfileRow,
    override_id: Option<&str>,
) -> Result<&'static ResumeTemplate, AppError> {
    let id = override_id.unwrap_or(&profile.template_id);
    get_template_by_id(id).ok_or_else(|| AppError::Validation(format!("Unknown template '{id}'")))
}

fn require_base_resume(profile: &UserProfileRow) -> Result<(), AppError> {
    if profile.base_resume.trim().is_empty() {
        return Err(AppError::Validation(
            "Profile has no base resume — upload one first".to_string(),
        ));
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TemplateInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub best_for: &'static [&'static str],
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        all_templates()
            .iter()
            .map(|t| TemplateInfo {
                id: t.id,
                name: t.name,
                description: t.description,
                features: t.features,
                best_for: t.best_for,
            })
            .collect(),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Resume
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GenerateResumeRequest {
    pub user_id: Uuid,
    pub job_description: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub custom_requests: Option<String>,
    pub template_id: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateResumeResponse {
    pub document_id: Uuid,
    pub content: String,
    pub keywords: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub ats_score: u32,
    pub original_matched_keywords: Vec<String>,
    pub original_ats_score: u32,
    pub lock_warnings: Vec<LockViolation>,
}

/// POST /api/v1/resumes/generate
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(req): Json<GenerateResumeRequest>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation("job_description must not be empty".to_string()));
    }

    let profile = require_profile(&state.db, req.user_id).await?;
    require_base_resume(&profile)?;
    let template = resolve_template(&profile, req.template_id.as_deref())?;

    let result = generate_customized_resume(
        state.llm.as_ref(),
        GenerateResumeParams {
            base_resume: &profile.base_resume,
            job_description: &req.job_description,
            custom_requests: req.custom_requests.as_deref(),
            template,
            locked_sections: &profile.locked_sections,
        },
    )
    .await?;

    info!(
        "Resume generated for {}: {}% -> {}% ({} lock warnings)",
        req.user_id,
        result.original_ats_score,
        result.ats_score,
        result.lock_warnings.len()
    );

    let row = insert_document(
        &state.db,
        NewDocument {
            user_id: req.user_id,
            kind: "resume",
            content: &result.content,
            template_id: template.id,
            job_title: req.job_title.as_deref(),
            company_name: req.company_name.as_deref(),
            keywords: Some(&result.keywords),
            matched_keywords: Some(&result.matched_keywords),
            ats_score: Some(result.ats_score as i32),
            original_matched_keywords: Some(&result.original_matched_keywords),
            original_ats_score: Some(result.original_ats_score as i32),
        },
    )
    .await?;

    Ok(Json(GenerateResumeResponse {
        document_id: row.id,
        content: result.content,
        keywords: result.keywords,
        matched_keywords: result.matched_keywords,
        ats_score: result.ats_score,
        original_matched_keywords: result.original_matched_keywords,
        original_ats_score: result.original_ats_score,
        lock_warnings: result.lock_warnings,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GenerateCoverLetterRequest {
    pub user_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    /// Resume to base the letter on; defaults to the stored base resume.
    pub resume_document_id: Option<Uuid>,
    pub additional_highlights: Option<String>,
    pub custom_requests: Option<String>,
}

#[derive(Serialize)]
pub struct GenerateCoverLetterResponse {
    pub document_id: Uuid,
    pub content: String,
    pub tone: String,
}

/// POST /api/v1/cover-letters/generate
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<GenerateCoverLetterRequest>,
) -> Result<Json<GenerateCoverLetterResponse>, AppError> {
    let profile = require_profile(&state.db, req.user_id).await?;

    let resume_content = match req.resume_document_id {
        Some(id) => get_document(&state.db, id, req.user_id).await?.content,
        None => {
            require_base_resume(&profile)?;
            profile.base_resume.clone()
        }
    };

    let details = extract_personal_details(&resume_content);
    let applicant_name = if details.name.is_empty() {
        "The Applicant".to_string()
    } else {
        details.name.clone()
    };

    let result = generate_cover_letter(
        state.llm.as_ref(),
        GenerateCoverLetterParams {
            resume_content: &resume_content,
            job_title: &req.job_title,
            company_name: &req.company_name,
            job_description: &req.job_description,
            applicant_name: &applicant_name,
            applicant_email: Some(&details.email).filter(|s| !s.is_empty()).map(String::as_str),
            applicant_phone: Some(&details.phone).filter(|s| !s.is_empty()).map(String::as_str),
            applicant_address: Some(&details.address).filter(|s| !s.is_empty()).map(String::as_str),
            additional_highlights: req.additional_highlights.as_deref(),
            custom_requests: req.custom_requests.as_deref(),
        },
    )
    .await?;

    let row = insert_document(
        &state.db,
        NewDocument {
            user_id: req.user_id,
            kind: "cover_letter",
            content: &result.content,
            template_id: &profile.template_id,
            job_title: Some(&req.job_title),
            company_name: Some(&req.company_name),
            keywords: None,
            matched_keywords: None,
            ats_score: None,
            original_matched_keywords: None,
            original_ats_score: None,
        },
    )
    .await?;

    Ok(Json(GenerateCoverLetterResponse {
        document_id: row.id,
        content: result.content,
        tone: result.tone,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Interview prep
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GenerateInterviewRequest {
    pub user_id: Uuid,
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    pub resume_document_id: Option<Uuid>,
    pub cover_letter_document_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct GenerateInterviewResponse {
    pub document_id: Uuid,
    #[serde(flatten)]
    pub prep: InterviewPrep,
}

/// POST /api/v1/interview/generate
pub async fn handle_generate_interview(
    State(state): State<AppState>,
    Json(req): Json<GenerateInterviewRequest>,
) -> Result<Json<GenerateInterviewResponse>, AppError> {
    let profile = require_profile(&state.db, req.user_id).await?;

    let resume_content = match req.resume_document_id {
        Some(id) => get_document(&state.db, id, req.user_id).await?.content,
        None => {
            require_base_resume(&profile)?;
            profile.base_resume.clone()
        }
    };

    let cover_letter_content = match req.cover_letter_document_id {
        Some(id) => get_document(&state.db, id, req.user_id).await?.content,
        None => String::new(),
    };

    let prep = generate_interview_prep(
        state.llm.as_ref(),
        GenerateInterviewParams {
            resume_content: &resume_content,
            cover_letter_content: &cover_letter_content,
            job_title: &req.job_title,
            company_name: &req.company_name,
            job_description: &req.job_description,
        },
    )
    .await?;

    // Stored as JSON so the prep survives the append-only content column.
    let content = serde_json::to_string_pretty(&prep)
        .map_err(|e| AppError::Generation(format!("Could not serialize interview prep: {e}")))?;

    let row = insert_document(
        &state.db,
        NewDocument {
            user_id: req.user_id,
            kind: "interview_prep",
            content: &content,
            template_id: &profile.template_id,
            job_title: Some(&req.job_title),
            company_name: Some(&req.company_name),
            keywords: None,
            matched_keywords: None,
            ats_score: None,
            original_matched_keywords: None,
            original_ats_score: None,
        },
    )
    .await?;

    Ok(Json(GenerateInterviewResponse {
        document_id: row.id,
        prep,
    }))
}
