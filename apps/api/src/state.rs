use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. The pool and LLM client are constructed once in `main` and
/// cloned here — explicit dependencies, not process-wide singletons, so
/// tests can substitute doubles.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    /// Runtime configuration, kept on the state for handlers that need it.
    #[allow(dead_code)]
    pub config: Config,
}
