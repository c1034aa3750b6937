//! Persona refinement — turns rough hiring criteria into polished copy.

use serde::{Deserialize, Serialize};

use crate::analysis::prompts::{PERSONA_REFINE_SYSTEM, PERSONA_REFINE_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::{CallOptions, ContentPart, LlmClient};

/// The rough criteria a recruiter typed in. Warning traits and core tags may
/// still be blank at this stage.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaDraft {
    pub title: String,
    pub responsibilities: String,
    pub knowledge: String,
    pub skills: String,
    pub literacy: String,
    pub experience: String,
    #[serde(default)]
    pub warning_traits: String,
    #[serde(default)]
    pub core_tags: String,
}

/// The refined copy. Seven required string fields, mirroring the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinedPersona {
    pub responsibilities: String,
    pub knowledge: String,
    pub skills: String,
    pub literacy: String,
    pub experience: String,
    pub warning_traits: String,
    pub core_tags: String,
}

pub fn build_refine_prompt(draft: &PersonaDraft) -> String {
    PERSONA_REFINE_TEMPLATE
        .replace("{title}", &draft.title)
        .replace("{responsibilities}", &draft.responsibilities)
        .replace("{knowledge}", &draft.knowledge)
        .replace("{skills}", &draft.skills)
        .replace("{literacy}", &draft.literacy)
        .replace("{experience}", &draft.experience)
        .replace("{warning_traits}", or_placeholder(&draft.warning_traits))
        .replace("{core_tags}", or_placeholder(&draft.core_tags))
}

fn or_placeholder(field: &str) -> &str {
    if field.trim().is_empty() {
        "(not provided yet)"
    } else {
        field
    }
}

/// Refines a persona draft. Parse failures propagate; the caller decides
/// whether to retry or keep the unrefined draft.
pub async fn refine_persona(
    draft: &PersonaDraft,
    llm: &LlmClient,
) -> Result<RefinedPersona, AppError> {
    let prompt = build_refine_prompt(draft);
    let opts = CallOptions {
        system: PERSONA_REFINE_SYSTEM,
        temperature: Some(0.7),
        ..CallOptions::default()
    };
    Ok(llm
        .call_json::<RefinedPersona>(&[ContentPart::text(prompt)], &opts)
        .await?)
}
