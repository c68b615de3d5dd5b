pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::generation::handlers as generation_handlers;
use crate::profile::handlers as profile_handlers;
use crate::render::handlers as render_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile API
        .route("/api/v1/profile", get(profile_handlers::handle_get_profile))
        .route("/api/v1/profile", put(profile_handlers::handle_put_profile))
        .route(
            "/api/v1/profile/resume",
            post(profile_handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/profile/locks",
            patch(profile_handlers::handle_toggle_lock),
        )
        // Generation API
        .route(
            "/api/v1/templates",
            get(generation_handlers::handle_list_templates),
        )
        .route(
            "/api/v1/resumes/generate",
            post(generation_handlers::handle_generate_resume),
        )
        .route(
            "/api/v1/cover-letters/generate",
            post(generation_handlers::handle_generate_cover_letter),
        )
        .route(
            "/api/v1/interview/generate",
            post(generation_handlers::handle_generate_interview),
        )
        // Documents API
        .route(
            "/api/v1/documents",
            get(render_handlers::handle_list_documents),
        )
        .route(
            "/api/v1/documents/:id/download",
            get(render_handlers::handle_download_document),
        )
        .with_state(state)
}
