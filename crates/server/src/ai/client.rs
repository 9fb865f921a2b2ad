//! Gemini API client for the `generateContent` endpoint

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{GenerationConfig, GenerationError, TextGenerator};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Client for the Google Gemini generateContent API
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

/// A turn in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A piece of a turn; only text parts are used here
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Request body for generateContent
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest {
    contents: Vec<Content>,
    generation_config: ApiGenerationConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiGenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
    frequency_penalty: f32,
    presence_penalty: f32,
}

impl From<&GenerationConfig> for ApiGenerationConfig {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            temperature: config.temperature,
            top_k: config.top_k,
            top_p: config.top_p,
            max_output_tokens: config.max_output_tokens,
            frequency_penalty: config.frequency_penalty,
            presence_penalty: config.presence_penalty,
        }
    }
}

/// Response from generateContent
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

/// Error envelope returned by Google APIs
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GeminiClient {
    /// Create a new client with the given API key and the default model
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send a single-turn prompt, return the raw API response
    pub async fn send(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<ApiResponse, GenerationError> {
        let request = build_request(prompt, config);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| GenerationError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        let response = self.send(prompt, config).await?;
        let text = extract_text(&response);
        if text.is_empty() {
            let finish_reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref())
                .unwrap_or("none");
            tracing::warn!(model = %self.model, finish_reason, "Gemini returned no text");
        }
        Ok(text)
    }
}

fn build_request(prompt: &str, config: &GenerationConfig) -> ApiRequest {
    ApiRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(prompt.to_string()),
            }],
        }],
        generation_config: config.into(),
    }
}

fn api_error(status: u16, body: &str) -> GenerationError {
    let message = match serde_json::from_str::<ApiError>(body) {
        Ok(api_err) => api_err.error.message,
        Err(_) => body.to_string(),
    };
    GenerationError::Api { status, message }
}

/// Concatenate the text parts of the first candidate.
///
/// A response without candidates (e.g. blocked by safety filters) yields an
/// empty string.
pub fn extract_text(response: &ApiResponse) -> String {
    response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default()
}
