use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::UserProfileRow;
use crate::parser::{normalize_section_title, parse_resume_sections};
use crate::profile::ingest::extract_resume_text;
use crate::profile::store::{
    get_profile, require_profile, save_base_resume, toggle_locked_section, upsert_profile,
};
use crate::state::AppState;
use crate::templates::get_template_by_id;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub profile: UserProfileRow,
    /// Normalized titles of the sections parsed out of the base resume.
    pub sections: Vec<String>,
}

fn section_titles(base_resume: &str) -> Vec<String> {
    parse_resume_sections(base_resume)
        .iter()
        .map(|s| normalize_section_title(&s.title))
        .collect()
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = require_profile(&state.db, params.user_id).await?;
    let sections = section_titles(&profile.base_resume);
    Ok(Json(ProfileResponse { profile, sections }))
}

#[derive(Deserialize)]
pub struct PutProfileRequest {
    pub user_id: Uuid,
    pub base_resume: String,
    pub template_id: Option<String>,
}

/// PUT /api/v1/profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Json(req): Json<PutProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    if req.base_resume.trim().is_empty() {
        return Err(AppError::Validation("base_resume must not be empty".to_string()));
    }

    let template_id = match &req.template_id {
        Some(id) => {
            get_template_by_id(id)
                .ok_or_else(|| AppError::Validation(format!("Unknown template '{id}'")))?;
            id.clone()
        }
        None => match get_profile(&state.db, req.user_id).await? {
            Some(existing) => existing.template_id,
            None => "template_1".to_string(),
        },
    };

    let profile = upsert_profile(&state.db, req.user_id, &req.base_resume, &template_id).await?;
    let sections = section_titles(&profile.base_resume);
    Ok(Json(ProfileResponse { profile, sections }))
}

/// POST /api/v1/profile/resume — multipart upload of a PDF or text resume.
///
/// Expects a `user_id` text field and a `file` field with the document bytes.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProfileResponse>, AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        match field.name() {
            Some("user_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid user_id field: {e}")))?;
                user_id = Some(
                    text.parse()
                        .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?,
                );
            }
            Some("file") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid file field: {e}")))?;
                file_bytes = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    let user_id =
        user_id.ok_or_else(|| AppError::Validation("Missing user_id field".to_string()))?;
    let file_bytes =
        file_bytes.ok_or_else(|| AppError::Validation("Missing file field".to_string()))?;

    let text = extract_resume_text(&file_bytes)?;
    info!("Ingested resume upload for {user_id}: {} chars", text.len());

    let profile = save_base_resume(&state.db, user_id, &text).await?;
    let sections = section_titles(&profile.base_resume);
    Ok(Json(ProfileResponse { profile, sections }))
}

#[derive(Deserialize)]
pub struct ToggleLockRequest {
    pub user_id: Uuid,
    pub section: String,
}

#[derive(Serialize)]
pub struct ToggleLockResponse {
    pub locked_sections: Vec<String>,
}

/// PATCH /api/v1/profile/locks — toggles one section's lock.
pub async fn handle_toggle_lock(
    State(state): State<AppState>,
    Json(req): Json<ToggleLockRequest>,
) -> Result<Json<ToggleLockResponse>, AppError> {
    if req.section.trim().is_empty() {
        return Err(AppError::Validation("section must not be empty".to_string()));
    }
    let locked_sections = toggle_locked_section(&state.db, req.user_id, &req.section).await?;
    Ok(Json(ToggleLockResponse { locked_sections }))
}
