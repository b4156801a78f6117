use crate::config::BackendSettings;
use crate::models::ChatMessage;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Longest slice of an error body kept in [`InferenceError::ApiError`]
const MAX_ERROR_BODY: usize = 300;

/// Errors that can occur when calling the generative backend
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("no API token configured for the generative backend")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Unauthorized: invalid API token ({0})")]
    Unauthorized(StatusCode),

    #[error("Rate limited by the generative backend")]
    RateLimited,

    #[error("API returned {status}: {body}")]
    ApiError { status: StatusCode, body: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Backend returned no completion content")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completions client for the generative backend
///
/// Makes a single attempt per call; the request is bounded by the client
/// timeout. The token is checked per call so stored answers work without one.
#[derive(Debug)]
pub struct InferenceClient {
    client: Client,
    completions_url: String,
    model: String,
    api_key: Option<String>,
}

impl InferenceClient {
    /// Create a new client from backend settings
    pub fn new(settings: &BackendSettings) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        let completions_url = format!("{}/chat/completions", settings.endpoint.trim_end_matches('/'));

        Ok(Self {
            client,
            completions_url,
            model: settings.model.clone(),
            api_key: settings.api_key.clone().filter(|key| !key.trim().is_empty()),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Request a completion for `messages`, generating at most `max_tokens`
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, InferenceError> {
        let api_key = self.api_key.as_deref().ok_or(InferenceError::MissingApiKey)?;
        let started = Instant::now();

        let body = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens,
        };

        tracing::debug!(
            model = %self.model,
            messages = messages.len(),
            max_tokens,
            "POST {}", self.completions_url
        );

        let response = self
            .client
            .post(&self.completions_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(
                %status,
                model = %self.model,
                latency_ms = started.elapsed().as_millis() as u64,
                "Generative backend returned non-success status"
            );
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => InferenceError::Unauthorized(status),
                StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
                _ => InferenceError::ApiError {
                    status,
                    body: truncate(&text, MAX_ERROR_BODY),
                },
            });
        }

        let bytes = response.bytes().await?;
        let completion: CompletionResponse = serde_json::from_slice(&bytes)
            .map_err(|e| InferenceError::InvalidResponse(format!("Failed to parse completion: {}", e)))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(InferenceError::EmptyCompletion)?;

        tracing::info!(
            model = %self.model,
            latency_ms = started.elapsed().as_millis() as u64,
            "Completion received"
        );

        Ok(content)
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
