use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw storage shape of a persona: snake_case columns, nullable free-text
/// fields. Only `db::mapper` may convert between this and [`Persona`].
#[derive(Debug, Clone, FromRow)]
pub struct PersonaRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub responsibilities: Option<String>,
    pub knowledge: Option<String>,
    pub skills_detail: Option<String>,
    pub literacy: Option<String>,
    pub experience: Option<String>,
    pub warning_traits: Option<String>,
    pub core_tags: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub ai_suggestions: Option<String>,
}

/// Hiring criteria for a role. Created together with its owning [`super::Job`]
/// and deleted when that job is deleted. Absent storage fields surface as
/// empty strings / empty lists, never as nulls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub knowledge: String,
    #[serde(default)]
    pub skills_detail: String,
    #[serde(default)]
    pub literacy: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub warning_traits: String,
    #[serde(default)]
    pub core_tags: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub ai_suggestions: String,
}
