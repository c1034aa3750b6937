use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::db::gateway::{self, WorkspaceData};
use crate::db::mapper;
use crate::errors::AppError;
use crate::models::{Candidate, Job, Persona};
use crate::state::AppState;

/// GET /api/v1/workspace
/// Partial-failure tolerant: a failed read degrades its own collection only.
pub async fn handle_get_workspace(State(state): State<AppState>) -> Json<WorkspaceData> {
    Json(gateway::fetch_all_data(&state.db).await)
}

/// A job and its owned persona, created as one logical operation.
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub job: Job,
    pub persona: Persona,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<StatusCode, AppError> {
    gateway::create_job_and_persona(&state.db, &req.job, &req.persona).await?;
    Ok(StatusCode::CREATED)
}

/// PATCH /api/v1/jobs/:id
/// Writes only {title, location, salary, status}; everything else on the
/// body is ignored by construction.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(job): Json<Job>,
) -> Result<StatusCode, AppError> {
    gateway::update_job(&state.db, &id, mapper::job_changes(&job)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/jobs/:id
/// Cascades to the job's candidates and its owned persona atomically.
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    gateway::delete_job(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/personas/:id
/// Requirements, skills, and AI suggestions are immutable here even when the
/// body carries modified values.
pub async fn handle_update_persona(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(persona): Json<Persona>,
) -> Result<StatusCode, AppError> {
    gateway::update_persona(&state.db, &id, mapper::persona_changes(&persona)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/candidates
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    Json(candidate): Json<Candidate>,
) -> Result<StatusCode, AppError> {
    gateway::create_candidate(&state.db, &candidate).await?;
    Ok(StatusCode::CREATED)
}

/// PATCH /api/v1/candidates/:id
pub async fn handle_update_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(candidate): Json<Candidate>,
) -> Result<StatusCode, AppError> {
    gateway::update_candidate(&state.db, &id, mapper::candidate_changes(&candidate)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/candidates/:id
pub async fn handle_delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    gateway::delete_candidate(&state.db, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
