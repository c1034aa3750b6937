//! Comprehensive fit analysis — persona standard vs. resume vs. the full
//! interview history, condensed into one decision-grade Markdown report.

use serde::Deserialize;

use crate::analysis::prompts::{FIT_SYSTEM, FIT_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::{CallOptions, LlmClient, MODEL_DEEP};
use crate::models::InterviewRecord;

/// Resumes are clipped to this many characters inside the fit prompt.
const FIT_RESUME_LIMIT: usize = 4000;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitRequest {
    pub job_title: String,
    pub persona: String,
    pub candidate_name: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub interviews: Vec<InterviewRecord>,
}

/// Renders the recorded rounds into the prompt's history block.
pub fn render_interview_history(interviews: &[InterviewRecord]) -> String {
    if interviews.is_empty() {
        return "No interviews recorded yet.".to_string();
    }
    interviews
        .iter()
        .map(|i| {
            format!(
                "[Round {} interview]\n- Scheduled: {}\n- AI recording summary: {}\n- Interviewer evaluation: {}\n- Questions asked: {}",
                i.round,
                or_none(&i.scheduled_at),
                or_none(&i.ai_summary),
                or_none(&i.evaluation),
                if i.questions.is_empty() {
                    "(none)".to_string()
                } else {
                    i.questions.join("; ")
                },
            )
        })
        .collect::<Vec<_>>()
        .join("\n----------------\n")
}

pub fn build_fit_prompt(req: &FitRequest) -> String {
    let resume = if req.resume_text.trim().is_empty() {
        "(resume content missing)".to_string()
    } else {
        truncate_chars(&req.resume_text, FIT_RESUME_LIMIT)
    };

    FIT_TEMPLATE
        .replace("{candidate_name}", &req.candidate_name)
        .replace("{job_title}", &req.job_title)
        .replace("{persona}", &req.persona)
        .replace("{resume_text}", &resume)
        .replace(
            "{interview_context}",
            &render_interview_history(&req.interviews),
        )
}

/// Generates the fit report on the deep model. Errors propagate.
pub async fn generate_fit_analysis(req: &FitRequest, llm: &LlmClient) -> Result<String, AppError> {
    let prompt = build_fit_prompt(req);
    let opts = CallOptions {
        model: MODEL_DEEP,
        system: FIT_SYSTEM,
        ..CallOptions::default()
    };
    Ok(llm.call_text(&prompt, &opts).await?)
}

fn or_none(field: &str) -> &str {
    if field.trim().is_empty() {
        "(none)"
    } else {
        field
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_renders_placeholder_when_empty() {
        assert_eq!(
            render_interview_history(&[]),
            "No interviews recorded yet."
        );
    }

    #[test]
    fn test_history_renders_each_round_with_defaults() {
        let interviews = vec![
            InterviewRecord {
                round: 1,
                scheduled_at: "2026-04-01T09:00:00Z".into(),
                questions: vec!["Q1".into(), "Q2".into()],
                logic_analysis: String::new(),
                ai_summary: "Composed under pressure.".into(),
                evaluation: String::new(),
            },
            InterviewRecord {
                round: 2,
                ..Default::default()
            },
        ];
        let history = render_interview_history(&interviews);
        assert!(history.contains("[Round 1 interview]"));
        assert!(history.contains("Q1; Q2"));
        assert!(history.contains("Composed under pressure."));
        assert!(history.contains("[Round 2 interview]"));
        assert!(history.contains("- Interviewer evaluation: (none)"));
        assert!(history.contains("----------------"));
    }

    #[test]
    fn test_fit_prompt_marks_missing_resume() {
        let req = FitRequest {
            job_title: "CTO".into(),
            persona: "Sets technical direction.".into(),
            candidate_name: "Mika".into(),
            resume_text: String::new(),
            interviews: vec![],
        };
        let prompt = build_fit_prompt(&req);
        assert!(prompt.contains("(resume content missing)"));
        assert!(prompt.contains("Mika"));
        assert!(prompt.contains("### 4. Hiring Recommendation"));
        assert!(!prompt.contains("{interview_context}"));
    }
}
