//! # Gemini client
//!
//! Thin client over Gemini's `generateContent` REST API and the [`LlmClient`] trait that callers depend on.
//! The system instruction and safety settings are fixed when the client is built; every call sends a single
//! user prompt and returns the concatenated text of the first candidate.

mod error;
mod safety;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, instrument, warn};

pub use error::GeminiError;
pub use safety::{HarmBlockThreshold, HarmCategory, SafetySetting};

/// Public Gemini REST endpoint (v1beta).
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of 11 chars or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Text-generation backend: one prompt in, one completion out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model's reply to `prompt`. The persona and safety policy belong to the implementation.
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError>;
}

/// Gemini `generateContent` client configured once at startup.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    system_instruction: Option<String>,
    safety_settings: Vec<SafetySetting>,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_instruction: None,
            safety_settings: Vec::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Overrides the API base (e.g. a proxy or a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_safety_settings(mut self, settings: Vec<SafetySetting>) -> Self {
        self.safety_settings = settings;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    safety_settings: &'a [SafetySetting],
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Extracts the reply text, turning blocked or empty answers into errors.
fn extract_text(response: GenerateContentResponse) -> Result<String, GeminiError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(GeminiError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(GeminiError::EmptyResponse)?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if !text.trim().is_empty() {
        return Ok(text);
    }
    match candidate.finish_reason {
        Some(reason) if reason != "STOP" => Err(GeminiError::Blocked(reason)),
        _ => Err(GeminiError::EmptyResponse),
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[instrument(skip(self, prompt))]
    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        info!(
            model = %self.model,
            api_key = %mask_token(&self.api_key),
            prompt_preview = %prompt.chars().take(100).collect::<String>(),
            "Gemini generateContent request"
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: self.system_instruction.as_deref().map(|s| Content {
                role: None,
                parts: vec![Part { text: s }],
            }),
            safety_settings: &self.safety_settings,
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!(status, "Gemini API returned an error status");
            return Err(GeminiError::Api { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = extract_text(parsed)?;

        info!(reply_len = text.len(), "Gemini generateContent completed");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = GeminiClient::new("k".into())
            .with_base_url("http://localhost:1234/v1beta/")
            .with_model("gemini-test");
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"Ну "},{"text":"привіт."}]},"finishReason":"STOP"}]}"#,
        );
        assert_eq!(extract_text(response).unwrap(), "Ну привіт.");
    }

    #[test]
    fn test_extract_text_prompt_blocked() {
        let response = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#);
        assert!(matches!(extract_text(response), Err(GeminiError::Blocked(r)) if r == "SAFETY"));
    }

    #[test]
    fn test_extract_text_candidate_without_content() {
        let response = parse(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#);
        assert!(matches!(extract_text(response), Err(GeminiError::Blocked(r)) if r == "SAFETY"));
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let response = parse(r#"{"candidates":[]}"#);
        assert!(matches!(extract_text(response), Err(GeminiError::EmptyResponse)));
    }

    #[test]
    fn test_request_omits_empty_optional_fields() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: "hi" }],
            }],
            system_instruction: None,
            safety_settings: &[],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("systemInstruction").is_none());
        assert!(value.get("safetySettings").is_none());
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
    }
}
