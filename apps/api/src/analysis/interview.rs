//! Interview support: question generation, note summarization, per-round
//! assessment, and audio debrief.

use serde::Deserialize;

use crate::analysis::prompts::{
    ASSESSMENT_TEMPLATE, AUDIO_TEMPLATE, MANUAL_OVERRIDE_TEMPLATE, QUESTIONS_TEMPLATE,
    ROUND_FINAL_SYSTEM, ROUND_ONE_SYSTEM, ROUND_TWO_SYSTEM, SUMMARY_TEMPLATE,
};
use crate::analysis::resume::InlineFile;
use crate::errors::AppError;
use crate::llm_client::{CallOptions, ContentPart, LlmClient, MODEL_DEEP};

/// Resumes are clipped to this many characters inside question prompts.
const QUESTION_RESUME_LIMIT: usize = 3000;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub job_title: String,
    pub persona: String,
    pub candidate_name: String,
    pub round: u32,
    #[serde(default)]
    pub history: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub core_tags: String,
    /// When set, overrides the model's own reasoning about what to ask.
    #[serde(default)]
    pub manual_logic_correction: String,
}

/// Round-specific interviewer persona. Rounds beyond three keep the
/// executive framing.
fn round_system(round: u32) -> &'static str {
    match round {
        1 => ROUND_ONE_SYSTEM,
        2 => ROUND_TWO_SYSTEM,
        _ => ROUND_FINAL_SYSTEM,
    }
}

pub fn build_questions_prompt(req: &QuestionRequest) -> String {
    let manual_override = if req.manual_logic_correction.trim().is_empty() {
        String::new()
    } else {
        MANUAL_OVERRIDE_TEMPLATE.replace("{correction}", &req.manual_logic_correction)
    };

    QUESTIONS_TEMPLATE
        .replace("{candidate_name}", &req.candidate_name)
        .replace("{job_title}", &req.job_title)
        .replace("{persona}", &req.persona)
        .replace("{core_tags}", or_none(&req.core_tags))
        .replace(
            "{resume_text}",
            or_none(&truncate_chars(&req.resume_text, QUESTION_RESUME_LIMIT)),
        )
        .replace("{history}", or_none(&req.history))
        .replace("{manual_override}", &manual_override)
}

/// Generates the two-part (logic trace, then questions) output on the deep
/// model. Errors propagate to the caller.
pub async fn generate_interview_questions(
    req: &QuestionRequest,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = build_questions_prompt(req);
    let opts = CallOptions {
        model: MODEL_DEEP,
        system: round_system(req.round),
        ..CallOptions::default()
    };
    Ok(llm.call_text(&prompt, &opts).await?)
}

/// Summarizes free-form interview notes.
pub async fn summarize_interview(notes: &str, llm: &LlmClient) -> Result<String, AppError> {
    let prompt = SUMMARY_TEMPLATE.replace("{notes}", notes);
    Ok(llm.call_text(&prompt, &CallOptions::default()).await?)
}

/// Writes a professional talent assessment from one round's notes.
pub async fn assess_candidate(
    notes: &str,
    round: u32,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = ASSESSMENT_TEMPLATE
        .replace("{round}", &round.to_string())
        .replace("{notes}", notes);
    Ok(llm.call_text(&prompt, &CallOptions::default()).await?)
}

/// Debriefs an interview recording. Returns a fixed fallback string on any
/// failure rather than erroring; a missing debrief should never block the
/// workflow.
pub async fn process_interview_audio(
    audio: &InlineFile,
    job_title: &str,
    round: u32,
    llm: &LlmClient,
) -> String {
    let prompt = AUDIO_TEMPLATE
        .replace("{round}", &round.to_string())
        .replace("{job_title}", job_title);
    let parts = [
        ContentPart::inline(audio.mime_type.clone(), audio.data.clone()),
        ContentPart::text(prompt),
    ];
    match llm.call(&parts, &CallOptions::default()).await {
        Ok(response) => response
            .text()
            .map(str::to_string)
            .unwrap_or_else(|| "The recording could not be processed.".to_string()),
        Err(e) => {
            tracing::error!("Interview audio processing failed: {e}");
            "The recording could not be processed.".to_string()
        }
    }
}

fn or_none(field: &str) -> &str {
    if field.trim().is_empty() {
        "(none)"
    } else {
        field
    }
}

/// Clips to at most `limit` characters on a char boundary.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::prompts::SPLIT_MARKER;

    fn request() -> QuestionRequest {
        QuestionRequest {
            job_title: "Staff Engineer".into(),
            persona: "Owns architecture for the billing platform.".into(),
            candidate_name: "Ravi".into(),
            round: 2,
            history: String::new(),
            resume_text: "Built payment rails at two fintechs.".into(),
            core_tags: "payments, distributed systems".into(),
            manual_logic_correction: String::new(),
        }
    }

    #[test]
    fn test_questions_prompt_keeps_split_contract_and_slots() {
        let prompt = build_questions_prompt(&request());
        assert!(prompt.contains(SPLIT_MARKER));
        assert!(prompt.contains("Ravi"));
        assert!(prompt.contains("Staff Engineer"));
        assert!(prompt.contains("Prior interview history: (none)"));
        assert!(!prompt.contains("{manual_override}"));
    }

    #[test]
    fn test_questions_prompt_includes_manual_override_when_set() {
        let mut req = request();
        req.manual_logic_correction = "Focus round 2 entirely on incident response.".into();
        let prompt = build_questions_prompt(&req);
        assert!(prompt.contains("HIGHEST-PRIORITY INSTRUCTION"));
        assert!(prompt.contains("Focus round 2 entirely on incident response."));
    }

    #[test]
    fn test_questions_prompt_omits_override_block_when_blank() {
        let prompt = build_questions_prompt(&request());
        assert!(!prompt.contains("HIGHEST-PRIORITY INSTRUCTION"));
    }

    #[test]
    fn test_round_system_maps_rounds_to_interviewer_personas() {
        assert!(round_system(1).contains("senior HR"));
        assert!(round_system(2).contains("line-of-business"));
        assert!(round_system(3).contains("executive"));
        assert_eq!(round_system(7), round_system(3));
    }

    #[test]
    fn test_truncate_chars_clips_long_text_on_char_boundary() {
        let text = "é".repeat(10);
        assert_eq!(truncate_chars(&text, 4), "é".repeat(4));
        assert_eq!(truncate_chars("short", 3000), "short");
    }
}
