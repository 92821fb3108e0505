use super::CompletionClient;
use crate::core::data::ModelConfig;
use crate::utils::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for the Gemini endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub model: ModelConfig,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: GEMINI_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            model: ModelConfig::default(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    status: Option<String>,
}

/// HTTP client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: ModelConfig,
    timeout: Duration,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl GeminiClient {
    /// Build the client once for the lifetime of the process
    pub fn initialize(credential: Option<String>, settings: GeminiSettings) -> AppResult<Self> {
        let api_key = credential
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::MissingCredential(format!(
                    "{} environment variable not set. Please check your .env file, your environment or api.api_key in the config file",
                    super::GOOGLE_API_KEY_ENV
                ))
            })?;

        let client = Client::builder()
            .user_agent(concat!("artisan-ai/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::RemoteService(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: settings.model,
            timeout: settings.timeout,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model.model
        )
    }

    async fn generate(&self, prompt: &str) -> AppResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.model.temperature,
            },
        };

        debug!(
            model = %self.model.model,
            temperature = self.model.temperature,
            prompt_chars = prompt.len(),
            "sending generateContent request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::RemoteService(format!("Failed to reach Gemini API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "generateContent request failed");
            return Err(AppError::RemoteService(describe_failure(status, &error_text)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::RemoteService(format!("Failed to parse Gemini response: {}", e)))?;

        let text = extract_text(body)?;
        debug!(response_chars = text.len(), "received completion");
        Ok(text)
    }
}

fn describe_failure(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(kind) => format!("{} ({}): {}", status, kind, parsed.error.message),
            None => format!("{}: {}", status, parsed.error.message),
        },
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => format!("{} - {}", status, body.trim()),
    }
}

fn extract_text(body: GenerateContentResponse) -> AppResult<String> {
    let Some(candidate) = body.candidates.into_iter().next() else {
        let reason = body
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map(|reason| format!(" (prompt blocked: {})", reason))
            .unwrap_or_default();
        return Err(AppError::RemoteService(format!(
            "Gemini response contained no candidates{}",
            reason
        )));
    };

    let texts: Vec<String> = candidate
        .content
        .map(|content| content.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|part| part.text)
        .collect();

    if texts.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(AppError::RemoteService(format!(
            "Gemini candidate contained no text (finish reason: {})",
            reason
        )));
    }

    Ok(texts.concat())
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        match tokio::time::timeout(self.timeout, self.generate(prompt)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "generateContent request timed out");
                Err(AppError::RemoteService(format!(
                    "Request timed out after {:?}",
                    self.timeout
                )))
            }
        }
    }

    fn model_config(&self) -> &ModelConfig {
        &self.model
    }
}
