use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw storage shape of a job posting.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: String,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub persona_id: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

/// An open requisition. Every job owns exactly one persona; the persona is
/// never shared across jobs. Status values are opaque to the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub location: String,
    pub salary: String,
    pub persona_id: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}
