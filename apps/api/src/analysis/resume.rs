//! Resume parsing — structures a raw resume (file bytes or plain text) into
//! a Markdown report plus a basic profile.
//!
//! This operation never fails: any parse or API error degrades to a
//! placeholder profile with the raw text as fallback content, so the caller
//! always receives a renderable shape.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::error;

use crate::analysis::prompts::{RESUME_PARSE_PROMPT, RESUME_PARSE_SYSTEM};
use crate::llm_client::{CallOptions, ContentPart, LlmClient};

/// Base64 file bytes plus their media type, as uploaded by the frontend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineFile {
    pub data: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeParseRequest {
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub text_content: Option<String>,
    #[serde(default)]
    pub file_data: Option<InlineFile>,
}

/// The structured parse result. `basic_info`'s schema is owned here (the
/// persistence layer stores it opaque); `full_content` is the Markdown report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub basic_info: Value,
    pub full_content: String,
}

const BASIC_INFO_KEYS: &[&str] = &[
    "name",
    "gender",
    "age",
    "school",
    "major",
    "education",
    "graduationTime",
    "workExperience",
    "expectedSalary",
    "expectedCity",
    "jobIntent",
    "maritalStatus",
    "address",
    "willingness",
    "phone",
    "email",
];

/// Parses a resume via the LLM. Infallible by design: failures return the
/// placeholder profile instead of an error.
pub async fn parse_resume(req: &ResumeParseRequest, llm: &LlmClient) -> ParsedResume {
    let mut parts: Vec<ContentPart> = Vec::new();
    if let Some(file) = &req.file_data {
        parts.push(ContentPart::inline(
            file.mime_type.clone(),
            file.data.clone(),
        ));
    } else if let Some(text) = &req.text_content {
        parts.push(ContentPart::text(format!(
            "The raw resume content follows:\n{text}"
        )));
    }
    parts.push(ContentPart::text(RESUME_PARSE_PROMPT));

    let opts = CallOptions {
        system: RESUME_PARSE_SYSTEM,
        ..CallOptions::default()
    };

    match llm.call_json::<ParsedResume>(&parts, &opts).await {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("Resume parsing failed: {e}");
            fallback_profile(req)
        }
    }
}

/// The well-shaped result returned when parsing fails: every profile key
/// present and empty (name falls back to the file name), raw text preserved.
pub fn fallback_profile(req: &ResumeParseRequest) -> ParsedResume {
    let mut basic_info = json!({});
    for key in BASIC_INFO_KEYS {
        basic_info[*key] = json!("");
    }
    basic_info["name"] = json!(req.file_name.as_deref().unwrap_or("Unknown"));

    ParsedResume {
        basic_info,
        full_content: req
            .text_content
            .clone()
            .unwrap_or_else(|| "The resume content could not be parsed.".to_string()),
    }
}
