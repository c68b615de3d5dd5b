use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::store::{get_document, list_documents};
use crate::render::filename::{generate_filename, DocumentKind};
use crate::render::{render_document, DocumentFormat};
use crate::state::AppState;
use crate::templates::{default_template, get_template_by_id};

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// Document listings omit the full content; it can be large and the list view
/// only needs metadata.
#[derive(Serialize)]
pub struct DocumentSummary {
    pub id: Uuid,
    pub kind: String,
    pub template_id: String,
    pub job_title: Option<String>,
    pub company_name: Option<String>,
    pub ats_score: Option<i32>,
    pub original_ats_score: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// GET /api/v1/documents
pub async fn handle_list_documents(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<DocumentSummary>>, AppError> {
    let rows = list_documents(&state.db, params.user_id).await?;
    let summaries = rows
        .into_iter()
        .map(|row| DocumentSummary {
            id: row.id,
            kind: row.kind,
            template_id: row.template_id,
            job_title: row.job_title,
            company_name: row.company_name,
            ats_score: row.ats_score,
            original_ats_score: row.original_ats_score,
            created_at: row.created_at,
        })
        .collect();
    Ok(Json(summaries))
}

#[derive(Deserialize)]
pub struct DownloadQuery {
    pub user_id: Uuid,
    pub format: DocumentFormat,
}

fn document_kind(kind: &str) -> DocumentKind {
    match kind {
        "cover_letter" => DocumentKind::CoverLetter,
        "interview_prep" => DocumentKind::InterviewPrep,
        _ => DocumentKind::Resume,
    }
}

/// GET /api/v1/documents/:id/download?format=pdf|docx
///
/// Renders on demand — only the text is stored, so a format choice at
/// download time costs one render pass.
pub async fn handle_download_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    let doc = get_document(&state.db, id, params.user_id).await?;

    let template = get_template_by_id(&doc.template_id).unwrap_or_else(default_template);
    let bytes = render_document(&doc.content, template, params.format)?;

    let filename = generate_filename(
        document_kind(&doc.kind),
        doc.job_title.as_deref(),
        doc.company_name.as_deref(),
        params.format,
    );

    Ok((
        [
            (header::CONTENT_TYPE, params.format.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_mapping() {
        assert_eq!(document_kind("resume"), DocumentKind::Resume);
        assert_eq!(document_kind("cover_letter"), DocumentKind::CoverLetter);
        assert_eq!(document_kind("interview_prep"), DocumentKind::InterviewPrep);
        assert_eq!(document_kind("unknown"), DocumentKind::Resume);
    }
}
