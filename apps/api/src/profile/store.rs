//! Persistence for user profiles and generated documents.
//!
//! Profiles are upserted in place (one row per user). Generated documents are
//! append-only: every generation inserts a new row, never an UPDATE, so the
//! table is also the user's history.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::GeneratedDocumentRow;
use crate::models::profile::UserProfileRow;
use crate::parser::normalize_section_title;

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<UserProfileRow>, AppError> {
    let row = sqlx::query_as::<_, UserProfileRow>(
        "SELECT * FROM user_profiles WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Loads a profile or fails with 404 — for flows that require one to exist.
pub async fn require_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfileRow, AppError> {
    get_profile(pool, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No profile for user {user_id}")))
}

pub async fn upsert_profile(
    pool: &PgPool,
    user_id: Uuid,
    base_resume: &str,
    template_id: &str,
) -> Result<UserProfileRow, AppError> {
    let row = sqlx::query_as::<_, UserProfileRow>(
        r#"
        INSERT INTO user_profiles (user_id, base_resume, locked_sections, template_id, updated_at)
        VALUES ($1, $2, '{}', $3, now())
        ON CONFLICT (user_id) DO UPDATE
        SET base_resume = EXCLUDED.base_resume,
            template_id = EXCLUDED.template_id,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(base_resume)
    .bind(template_id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Stores a freshly uploaded base resume, keeping the existing template and
/// lock set when the profile already exists.
pub async fn save_base_resume(
    pool: &PgPool,
    user_id: Uuid,
    base_resume: &str,
) -> Result<UserProfileRow, AppError> {
    let row = sqlx::query_as::<_, UserProfileRow>(
        r#"
        INSERT INTO user_profiles (user_id, base_resume, locked_sections, template_id, updated_at)
        VALUES ($1, $2, '{}', 'template_1', now())
        ON CONFLICT (user_id) DO UPDATE
        SET base_resume = EXCLUDED.base_resume,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(base_resume)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Toggles one section in the lock set. The title is normalized before
/// membership is checked, so "Work Experience" and "EXPERIENCE" toggle the
/// same lock. Returns the new lock set.
pub async fn toggle_locked_section(
    pool: &PgPool,
    user_id: Uuid,
    section: &str,
) -> Result<Vec<String>, AppError> {
    let profile = require_profile(pool, user_id).await?;

    let normalized = normalize_section_title(section);
    let mut locked = profile.locked_sections;
    if let Some(pos) = locked.iter().position(|s| *s == normalized) {
        locked.remove(pos);
    } else {
        locked.push(normalized);
    }

    sqlx::query("UPDATE user_profiles SET locked_sections = $1, updated_at = now() WHERE user_id = $2")
        .bind(&locked)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(locked)
}

/// Parameters for one append-only document insert.
pub struct NewDocument<'a> {
    pub user_id: Uuid,
    pub kind: &'a str,
    pub content: &'a str,
    pub template_id: &'a str,
    pub job_title: Option<&'a str>,
    pub company_name: Option<&'a str>,
    pub keywords: Option<&'a [String]>,
    pub matched_keywords: Option<&'a [String]>,
    pub ats_score: Option<i32>,
    pub original_matched_keywords: Option<&'a [String]>,
    pub original_ats_score: Option<i32>,
}

pub async fn insert_document(
    pool: &PgPool,
    doc: NewDocument<'_>,
) -> Result<GeneratedDocumentRow, AppError> {
    let row = sqlx::query_as::<_, GeneratedDocumentRow>(
        r#"
        INSERT INTO generated_documents
            (id, user_id, kind, content, template_id, job_title, company_name,
             keywords, matched_keywords, ats_score,
             original_matched_keywords, original_ats_score, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, now())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(doc.user_id)
    .bind(doc.kind)
    .bind(doc.content)
    .bind(doc.template_id)
    .bind(doc.job_title)
    .bind(doc.company_name)
    .bind(doc.keywords)
    .bind(doc.matched_keywords)
    .bind(doc.ats_score)
    .bind(doc.original_matched_keywords)
    .bind(doc.original_ats_score)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn list_documents(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<GeneratedDocumentRow>, AppError> {
    let rows = sqlx::query_as::<_, GeneratedDocumentRow>(
        "SELECT * FROM generated_documents WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_document(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<GeneratedDocumentRow, AppError> {
    sqlx::query_as::<_, GeneratedDocumentRow>(
        "SELECT * FROM generated_documents WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Document {id} not found")))
}
