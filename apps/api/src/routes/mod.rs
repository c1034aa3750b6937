pub mod health;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::hiring::handlers as hiring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Workspace + CRUD over the persistence gateway
        .route("/api/v1/workspace", get(hiring::handle_get_workspace))
        .route("/api/v1/jobs", post(hiring::handle_create_job))
        .route("/api/v1/jobs/:id", patch(hiring::handle_update_job))
        .route("/api/v1/jobs/:id", delete(hiring::handle_delete_job))
        .route("/api/v1/personas/:id", patch(hiring::handle_update_persona))
        .route("/api/v1/candidates", post(hiring::handle_create_candidate))
        .route(
            "/api/v1/candidates/:id",
            patch(hiring::handle_update_candidate),
        )
        .route(
            "/api/v1/candidates/:id",
            delete(hiring::handle_delete_candidate),
        )
        // AI analysis
        .route(
            "/api/v1/analysis/persona-refinement",
            post(analysis::handle_refine_persona),
        )
        .route("/api/v1/analysis/resume", post(analysis::handle_parse_resume))
        .route(
            "/api/v1/analysis/interview-questions",
            post(analysis::handle_interview_questions),
        )
        .route(
            "/api/v1/analysis/interview-summary",
            post(analysis::handle_interview_summary),
        )
        .route(
            "/api/v1/analysis/assessment",
            post(analysis::handle_assessment),
        )
        .route(
            "/api/v1/analysis/interview-audio",
            post(analysis::handle_interview_audio),
        )
        .route("/api/v1/analysis/fit", post(analysis::handle_fit_analysis))
        .with_state(state)
}
