//! Chat endpoint

use std::sync::Arc;

use axum::{Extension, Json, extract::State, extract::rejection::JsonRejection};
use hospital_core::HospitalRecord;
use serde::{Deserialize, Serialize};

use crate::ai::{GenerationError, SharedGenerator};
use crate::error::AppError;

/// Request body for chat
#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

/// Response body for chat
#[derive(Serialize)]
pub struct ChatResponse {
    response: String,
}

/// POST /chat - Answer a visitor's question about the hospital
///
/// Matches the message against the knowledge base, sends the grounded
/// prompt to the model once and returns its reply.
pub async fn chat(
    State(knowledge): State<Arc<HospitalRecord>>,
    Extension(generator): Extension<Option<SharedGenerator>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(body) = body?;
    let message = body
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::BadRequest("Message is required".to_string()))?;

    let generator = generator.ok_or(GenerationError::NotConfigured)?;

    tracing::info!(message_len = message.len(), "Chat request");

    let response = crate::ai::chatbot::chat(generator.as_ref(), &knowledge, &message).await?;

    Ok(Json(ChatResponse { response }))
}
