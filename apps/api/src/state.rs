use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::llm::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable text generator. Production: `LlmClient`; tests: mocks.
    pub llm: Arc<dyn TextGenerator>,
    pub config: Config,
}
