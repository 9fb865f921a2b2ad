//! Text generation for assistant replies

pub mod chatbot;
pub mod client;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

pub use client::GeminiClient;

/// Sampling parameters sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

impl GenerationConfig {
    /// Fixed configuration for hospital assistant replies
    pub const ASSISTANT: Self = Self {
        temperature: 0.5,
        top_k: 30,
        top_p: 0.9,
        max_output_tokens: 150,
        frequency_penalty: 0.3,
        presence_penalty: 0.1,
    };
}

/// Errors from the text generation backend
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("GEMINI_API_KEY not configured")]
    NotConfigured,
}

/// A backend that turns a prompt into generated text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError>;
}

/// Generator shared across request handlers
pub type SharedGenerator = Arc<dyn TextGenerator>;
