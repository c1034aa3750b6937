use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Raw storage shape of a candidate. `basic_info` and `interviews` are JSONB
/// columns; `basic_info`'s schema is owned by the AI layer and stays opaque
/// here, while `interviews` decodes into typed [`InterviewRecord`]s.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub id: String,
    pub name: String,
    pub job_id: String,
    pub resume_url: String,
    pub full_resume_text: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub basic_info: Option<Value>,
    pub interviews: Option<Value>,
    pub fit_analysis: Option<String>,
}

/// One interview round recorded against a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub round: u32,
    #[serde(default)]
    pub scheduled_at: String,
    #[serde(default)]
    pub questions: Vec<String>,
    #[serde(default)]
    pub logic_analysis: String,
    #[serde(default)]
    pub ai_summary: String,
    #[serde(default)]
    pub evaluation: String,
}

/// An applicant attached to exactly one job. Created after AI resume parsing,
/// updated as interview rounds are recorded, and removed either directly or
/// by the cascade when its job is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub job_id: String,
    pub resume_url: String,
    pub full_resume_text: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    #[serde(default)]
    pub basic_info: Value,
    #[serde(default)]
    pub interviews: Vec<InterviewRecord>,
    #[serde(default)]
    pub fit_analysis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interview_record_defaults_for_missing_fields() {
        let record: InterviewRecord = serde_json::from_str(r#"{"round": 2}"#).unwrap();
        assert_eq!(record.round, 2);
        assert_eq!(record.questions, Vec::<String>::new());
        assert_eq!(record.ai_summary, "");
        assert_eq!(record.evaluation, "");
    }

    #[test]
    fn test_interview_record_round_trips_camel_case() {
        let record = InterviewRecord {
            round: 1,
            scheduled_at: "2026-03-01T10:00:00Z".into(),
            questions: vec!["Walk me through your last project.".into()],
            logic_analysis: "Screen against core tags.".into(),
            ai_summary: "Clear communicator.".into(),
            evaluation: "Advance to round 2.".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["scheduledAt"], "2026-03-01T10:00:00Z");
        assert_eq!(json["aiSummary"], "Clear communicator.");
        let back: InterviewRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_candidate_basic_info_stays_opaque_json() {
        let json = r#"{
            "id": "c-1",
            "name": "Dana",
            "jobId": "j-1",
            "resumeUrl": "https://files.example/resume.pdf",
            "fullResumeText": "…",
            "status": "applied",
            "appliedAt": "2026-02-10T08:00:00Z",
            "basicInfo": {"school": "MIT", "expectedSalary": "150k"}
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.basic_info["expectedSalary"], "150k");
        assert!(candidate.interviews.is_empty());
        assert_eq!(candidate.fit_analysis, "");
    }
}
