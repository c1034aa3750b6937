use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::fit::{generate_fit_analysis, FitRequest};
use crate::analysis::interview::{
    assess_candidate, generate_interview_questions, process_interview_audio, summarize_interview,
    QuestionRequest,
};
use crate::analysis::persona::{refine_persona, PersonaDraft, RefinedPersona};
use crate::analysis::resume::{parse_resume, InlineFile, ParsedResume, ResumeParseRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// Plain-text analysis results wrapped for JSON transport.
#[derive(Debug, Serialize)]
pub struct TextResponse {
    pub content: String,
}

/// POST /api/v1/analysis/persona-refinement
pub async fn handle_refine_persona(
    State(state): State<AppState>,
    Json(draft): Json<PersonaDraft>,
) -> Result<Json<RefinedPersona>, AppError> {
    let refined = refine_persona(&draft, &state.llm).await?;
    Ok(Json(refined))
}

/// POST /api/v1/analysis/resume
/// Never fails: parse errors degrade to a placeholder profile.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(req): Json<ResumeParseRequest>,
) -> Json<ParsedResume> {
    Json(parse_resume(&req, &state.llm).await)
}

/// POST /api/v1/analysis/interview-questions
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Json(req): Json<QuestionRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let content = generate_interview_questions(&req, &state.llm).await?;
    Ok(Json(TextResponse { content }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub notes: String,
}

/// POST /api/v1/analysis/interview-summary
pub async fn handle_interview_summary(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let content = summarize_interview(&req.notes, &state.llm).await?;
    Ok(Json(TextResponse { content }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub notes: String,
    pub round: u32,
}

/// POST /api/v1/analysis/assessment
pub async fn handle_assessment(
    State(state): State<AppState>,
    Json(req): Json<AssessmentRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let content = assess_candidate(&req.notes, req.round, &state.llm).await?;
    Ok(Json(TextResponse { content }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioDebriefRequest {
    pub audio: InlineFile,
    pub job_title: String,
    pub round: u32,
}

/// POST /api/v1/analysis/interview-audio
/// Never fails: processing errors degrade to a fixed fallback string.
pub async fn handle_interview_audio(
    State(state): State<AppState>,
    Json(req): Json<AudioDebriefRequest>,
) -> Json<TextResponse> {
    let content = process_interview_audio(&req.audio, &req.job_title, req.round, &state.llm).await;
    Json(TextResponse { content })
}

/// POST /api/v1/analysis/fit
pub async fn handle_fit_analysis(
    State(state): State<AppState>,
    Json(req): Json<FitRequest>,
) -> Result<Json<TextResponse>, AppError> {
    let content = generate_fit_analysis(&req, &state.llm).await?;
    Ok(Json(TextResponse { content }))
}
