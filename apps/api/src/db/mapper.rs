//! Entity mapper — the single translation boundary between the storage
//! shape (snake_case columns, nullable optionals, JSONB) and the
//! application entities (camelCase JSON, defaults instead of nulls).
//!
//! Pure and side-effect-free. No validation, no normalization beyond
//! default substitution. Each write operation gets its own explicit
//! field-subset struct so the SQL can never drift from the contract.

use serde_json::Value;

use crate::db::DbError;
use crate::models::{Candidate, CandidateRow, InterviewRecord, Job, JobRow, Persona, PersonaRow};

// --- Storage -> entity ---

/// Absent optional text fields become empty strings; absent arrays become
/// empty lists. Never fails: a persona row has no shaped columns to decode.
pub fn persona_from_row(row: PersonaRow) -> Persona {
    Persona {
        id: row.id,
        title: row.title,
        description: row.description.unwrap_or_default(),
        responsibilities: row.responsibilities.unwrap_or_default(),
        knowledge: row.knowledge.unwrap_or_default(),
        skills_detail: row.skills_detail.unwrap_or_default(),
        literacy: row.literacy.unwrap_or_default(),
        experience: row.experience.unwrap_or_default(),
        warning_traits: row.warning_traits.unwrap_or_default(),
        core_tags: row.core_tags.unwrap_or_default(),
        requirements: row.requirements.unwrap_or_default(),
        skills: row.skills.unwrap_or_default(),
        ai_suggestions: row.ai_suggestions.unwrap_or_default(),
    }
}

pub fn job_from_row(row: JobRow) -> Job {
    Job {
        id: row.id,
        title: row.title,
        location: row.location,
        salary: row.salary,
        persona_id: row.persona_id,
        created_at: row.created_at,
        status: row.status,
    }
}

/// An absent `interviews` column defaults to an empty list; a present but
/// malformed value is a decoding error, not a silent default.
pub fn candidate_from_row(row: CandidateRow) -> Result<Candidate, DbError> {
    let interviews: Vec<InterviewRecord> = match row.interviews {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => serde_json::from_value(value).map_err(|source| DbError::Decode {
            table: "candidates",
            column: "interviews",
            id: row.id.clone(),
            source,
        })?,
    };

    Ok(Candidate {
        id: row.id,
        name: row.name,
        job_id: row.job_id,
        resume_url: row.resume_url,
        full_resume_text: row.full_resume_text,
        status: row.status,
        applied_at: row.applied_at,
        basic_info: row.basic_info.unwrap_or(Value::Null),
        interviews,
        fit_analysis: row.fit_analysis.unwrap_or_default(),
    })
}

// --- Entity -> storage (insert shapes: full field set) ---

pub fn persona_to_row(persona: &Persona) -> PersonaRow {
    PersonaRow {
        id: persona.id.clone(),
        title: persona.title.clone(),
        description: Some(persona.description.clone()),
        responsibilities: Some(persona.responsibilities.clone()),
        knowledge: Some(persona.knowledge.clone()),
        skills_detail: Some(persona.skills_detail.clone()),
        literacy: Some(persona.literacy.clone()),
        experience: Some(persona.experience.clone()),
        warning_traits: Some(persona.warning_traits.clone()),
        core_tags: Some(persona.core_tags.clone()),
        requirements: Some(persona.requirements.clone()),
        skills: Some(persona.skills.clone()),
        ai_suggestions: Some(persona.ai_suggestions.clone()),
    }
}

pub fn job_to_row(job: &Job) -> JobRow {
    JobRow {
        id: job.id.clone(),
        title: job.title.clone(),
        location: job.location.clone(),
        salary: job.salary.clone(),
        persona_id: job.persona_id.clone(),
        created_at: job.created_at,
        status: job.status.clone(),
    }
}

pub fn candidate_to_row(candidate: &Candidate) -> CandidateRow {
    CandidateRow {
        id: candidate.id.clone(),
        name: candidate.name.clone(),
        job_id: candidate.job_id.clone(),
        resume_url: candidate.resume_url.clone(),
        full_resume_text: candidate.full_resume_text.clone(),
        status: candidate.status.clone(),
        applied_at: candidate.applied_at,
        basic_info: Some(candidate.basic_info.clone()),
        interviews: Some(interviews_to_value(&candidate.interviews)),
        fit_analysis: Some(candidate.fit_analysis.clone()),
    }
}

fn interviews_to_value(interviews: &[InterviewRecord]) -> Value {
    serde_json::to_value(interviews).unwrap_or(Value::Array(Vec::new()))
}

// --- Entity -> storage (update shapes: explicit partial field sets) ---

/// The fields `update_job` writes. Nothing else on a job row is mutable
/// through the update path.
#[derive(Debug, Clone, PartialEq)]
pub struct JobChanges {
    pub title: String,
    pub location: String,
    pub salary: String,
    pub status: String,
}

/// The fields `update_persona` writes. `requirements`, `skills`, and
/// `ai_suggestions` are immutable after creation through this pathway —
/// they do not exist on this struct, so no update can carry them.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaChanges {
    pub title: String,
    pub description: String,
    pub responsibilities: String,
    pub knowledge: String,
    pub skills_detail: String,
    pub literacy: String,
    pub experience: String,
    pub warning_traits: String,
    pub core_tags: String,
}

/// The fields `update_candidate` writes. Identifier, job reference, resume
/// URL, and applied-at are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateChanges {
    pub status: String,
    pub basic_info: Value,
    pub interviews: Value,
    pub fit_analysis: String,
    pub name: String,
    pub full_resume_text: String,
}

pub fn job_changes(job: &Job) -> JobChanges {
    JobChanges {
        title: job.title.clone(),
        location: job.location.clone(),
        salary: job.salary.clone(),
        status: job.status.clone(),
    }
}

pub fn persona_changes(persona: &Persona) -> PersonaChanges {
    PersonaChanges {
        title: persona.title.clone(),
        description: persona.description.clone(),
        responsibilities: persona.responsibilities.clone(),
        knowledge: persona.knowledge.clone(),
        skills_detail: persona.skills_detail.clone(),
        literacy: persona.literacy.clone(),
        experience: persona.experience.clone(),
        warning_traits: persona.warning_traits.clone(),
        core_tags: persona.core_tags.clone(),
    }
}

pub fn candidate_changes(candidate: &Candidate) -> CandidateChanges {
    CandidateChanges {
        status: candidate.status.clone(),
        basic_info: candidate.basic_info.clone(),
        interviews: interviews_to_value(&candidate.interviews),
        fit_analysis: candidate.fit_analysis.clone(),
        name: candidate.name.clone(),
        full_resume_text: candidate.full_resume_text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn sample_persona() -> Persona {
        Persona {
            id: "p-1".into(),
            title: "Data Engineer".into(),
            description: "Owns the ingestion pipeline.".into(),
            responsibilities: "Build and operate ELT.".into(),
            knowledge: "Warehousing, dbt.".into(),
            skills_detail: "SQL, Python, Airflow.".into(),
            literacy: "Writes clear runbooks.".into(),
            experience: "4+ years".into(),
            warning_traits: "Dismissive of on-call.".into(),
            core_tags: "pipelines, reliability".into(),
            requirements: vec!["BS or equivalent".into()],
            skills: vec!["SQL".into(), "Python".into()],
            ai_suggestions: "Consider streaming experience.".into(),
        }
    }

    #[test]
    fn test_persona_missing_optionals_default_to_empty() {
        let row = PersonaRow {
            id: "p-9".into(),
            title: "PM".into(),
            description: None,
            responsibilities: None,
            knowledge: None,
            skills_detail: None,
            literacy: None,
            experience: None,
            warning_traits: None,
            core_tags: None,
            requirements: None,
            skills: None,
            ai_suggestions: None,
        };
        let persona = persona_from_row(row);
        assert_eq!(persona.description, "");
        assert_eq!(persona.requirements, Vec::<String>::new());
        assert_eq!(persona.skills, Vec::<String>::new());
        assert_eq!(persona.ai_suggestions, "");
    }

    #[test]
    fn test_persona_round_trips_through_storage_shape() {
        let persona = sample_persona();
        assert_eq!(persona_from_row(persona_to_row(&persona)), persona);
    }

    #[test]
    fn test_persona_changes_carries_exactly_the_mutable_text_fields() {
        let mut persona = sample_persona();
        persona.requirements = vec!["tampered".into()];
        persona.skills = vec!["tampered".into()];
        persona.ai_suggestions = "tampered".into();

        let changes = persona_changes(&persona);
        // The struct has no requirements/skills/ai_suggestions fields, so
        // tampered values cannot reach an UPDATE. Spot-check the rest.
        assert_eq!(changes.title, persona.title);
        assert_eq!(changes.warning_traits, persona.warning_traits);
        assert_eq!(changes.core_tags, persona.core_tags);
    }

    #[test]
    fn test_job_round_trips_through_storage_shape() {
        let job = Job {
            id: "j-1".into(),
            title: "Data Engineer".into(),
            location: "Berlin".into(),
            salary: "80-95k".into(),
            persona_id: "p-1".into(),
            created_at: Utc::now(),
            status: "open".into(),
        };
        assert_eq!(job_from_row(job_to_row(&job)), job);
    }

    #[test]
    fn test_candidate_absent_interviews_default_to_empty_list() {
        let row = CandidateRow {
            id: "c-1".into(),
            name: "Iris".into(),
            job_id: "j-1".into(),
            resume_url: "https://files.example/iris.pdf".into(),
            full_resume_text: "…".into(),
            status: "applied".into(),
            applied_at: Utc::now(),
            basic_info: None,
            interviews: None,
            fit_analysis: None,
        };
        let candidate = candidate_from_row(row).unwrap();
        assert!(candidate.interviews.is_empty());
        assert_eq!(candidate.fit_analysis, "");
    }

    #[test]
    fn test_candidate_null_interviews_default_to_empty_list() {
        let row = CandidateRow {
            id: "c-1".into(),
            name: "Iris".into(),
            job_id: "j-1".into(),
            resume_url: "".into(),
            full_resume_text: "".into(),
            status: "applied".into(),
            applied_at: Utc::now(),
            basic_info: None,
            interviews: Some(Value::Null),
            fit_analysis: None,
        };
        let candidate = candidate_from_row(row).unwrap();
        assert!(candidate.interviews.is_empty());
    }

    #[test]
    fn test_candidate_malformed_interviews_fail_with_decode_error() {
        let row = CandidateRow {
            id: "c-2".into(),
            name: "Iris".into(),
            job_id: "j-1".into(),
            resume_url: "".into(),
            full_resume_text: "".into(),
            status: "applied".into(),
            applied_at: Utc::now(),
            basic_info: None,
            interviews: Some(json!({"round": "not a list"})),
            fit_analysis: None,
        };
        let err = candidate_from_row(row).unwrap_err();
        assert!(matches!(err, DbError::Decode { table: "candidates", column: "interviews", .. }));
    }

    #[test]
    fn test_candidate_round_trips_through_storage_shape() {
        let candidate = Candidate {
            id: "c-3".into(),
            name: "Iris".into(),
            job_id: "j-1".into(),
            resume_url: "https://files.example/iris.pdf".into(),
            full_resume_text: "Ten years of pipelines.".into(),
            status: "interviewing".into(),
            applied_at: Utc::now(),
            basic_info: json!({"school": "TU Berlin", "expectedSalary": "90k"}),
            interviews: vec![InterviewRecord {
                round: 1,
                scheduled_at: "2026-03-02T09:00:00Z".into(),
                questions: vec!["Describe your largest migration.".into()],
                logic_analysis: String::new(),
                ai_summary: "Strong fundamentals.".into(),
                evaluation: "Advance.".into(),
            }],
            fit_analysis: "## Fit\nGood.".into(),
        };
        assert_eq!(candidate_from_row(candidate_to_row(&candidate)).unwrap(), candidate);
    }

    #[test]
    fn test_candidate_changes_carries_the_update_subset() {
        let candidate = Candidate {
            id: "c-4".into(),
            name: "Iris".into(),
            job_id: "j-1".into(),
            resume_url: "https://files.example/iris.pdf".into(),
            full_resume_text: "…".into(),
            status: "offer".into(),
            applied_at: Utc::now(),
            basic_info: json!({"name": "Iris"}),
            interviews: vec![],
            fit_analysis: "report".into(),
        };
        let changes = candidate_changes(&candidate);
        assert_eq!(changes.status, "offer");
        assert_eq!(changes.fit_analysis, "report");
        assert_eq!(changes.interviews, json!([]));
        // No id/job_id/resume_url/applied_at on the struct: fixed at creation.
    }
}
