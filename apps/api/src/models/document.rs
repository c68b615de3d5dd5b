use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A generated document. Rows are append-only: every generation inserts a new
/// row and nothing ever updates one, so the table doubles as history.
///
/// Score columns are NULL for kinds that are not keyword-scored
/// (cover letters, interview prep).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GeneratedDocumentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// "resume" | "cover_letter" | "interview_prep".
    pub kind: String,
    pub content: String,
    pub template_id: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub matched_keywords: Option<Vec<String>>,
    pub ats_score: Option<i32>,
    pub original_matched_keywords: Option<Vec<String>>,
    pub original_ats_score: Option<i32>,
    pub created_at: DateTime<Utc>,
}
