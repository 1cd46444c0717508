use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationConfig, GenerationError, TextGenerator};
use crate::domain::{ApiKey, Prompt};

use super::http_status::{build_http_client, error_for_status};

pub const GEMINI_DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";
const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini `generateContent` backend.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: ApiKey,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfigBody,
    safety_settings: Vec<SafetySettingBody>,
    system_instruction: Content<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfigBody {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

#[derive(Serialize)]
struct SafetySettingBody {
    category: &'static str,
    threshold: &'static str,
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
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        if api_key.is_blank() {
            return Err(GenerationError::Authentication(
                "a Gemini API key is required".to_string(),
            ));
        }

        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, API_VERSION, self.model
        )
    }
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, GenerationError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            let reason = self
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "no candidates returned".to_string());
            return Err(GenerationError::Upstream(format!("prompt blocked: {reason}")));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.is_empty() && candidate.finish_reason.as_deref() == Some("SAFETY") {
            return Err(GenerationError::Upstream(
                "completion blocked by safety filters".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[tracing::instrument(
        skip(self, prompt, config),
        fields(model = %self.model, mode = %prompt.mode(), prompt_chars = prompt.as_str().len())
    )]
    async fn generate(
        &self,
        prompt: &Prompt,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: prompt.as_str(),
                }],
            }],
            generation_config: GenerationConfigBody {
                temperature: config.temperature,
                top_k: config.top_k,
                top_p: config.top_p,
                max_output_tokens: config.max_output_tokens,
            },
            safety_settings: config
                .safety_settings
                .iter()
                .map(|s| SafetySettingBody {
                    category: s.category.as_str(),
                    threshold: s.threshold.as_str(),
                })
                .collect(),
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: config.system_instruction,
                }],
            },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerationError::Upstream(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, "Gemini request rejected");
            return Err(error_for_status("Gemini", status, &body));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Upstream(format!("invalid Gemini response: {e}")))?;

        let text = completion.into_text()?;
        tracing::debug!(completion_chars = text.len(), "Gemini completion received");

        Ok(text)
    }
}
