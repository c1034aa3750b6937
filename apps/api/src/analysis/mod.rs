//! AI orchestration — builds prompts from structured inputs, dispatches them
//! through `llm_client`, and parses the JSON or plain-text results. This
//! module and the persistence gateway never call each other; handlers wire
//! their outputs together.

pub mod fit;
pub mod handlers;
pub mod interview;
pub mod persona;
pub mod prompts;
pub mod resume;
