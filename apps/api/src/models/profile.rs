use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One row per user: the base resume, lock set, and preferred template.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfileRow {
    pub user_id: Uuid,
    pub base_resume: String,
    /// Normalized section titles the generator must not modify.
    pub locked_sections: Vec<String>,
    pub template_id: String,
    pub updated_at: DateTime<Utc>,
}
