//! Knowledge-grounded chat replies

use hospital_core::{HospitalRecord, hospital_assistant_prompt};

use super::{GenerationConfig, GenerationError, TextGenerator};

/// Sent when the model returns no text
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't understand that.";

/// Answer a user message.
///
/// Looks up matching hospital facts, embeds them in the assistant prompt and
/// makes a single generation call.
pub async fn chat(
    generator: &dyn TextGenerator,
    record: &HospitalRecord,
    user_message: &str,
) -> Result<String, GenerationError> {
    let prompt = hospital_assistant_prompt(record, user_message);
    tracing::debug!(prompt_len = prompt.len(), "Assembled assistant prompt");

    let reply = generator
        .generate(&prompt, &GenerationConfig::ASSISTANT)
        .await?;

    if reply.trim().is_empty() {
        tracing::debug!("Empty reply replaced with fallback");
        return Ok(EMPTY_REPLY.to_string());
    }
    Ok(reply)
}
