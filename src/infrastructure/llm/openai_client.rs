use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{GenerationConfig, GenerationError, TextGenerator};
use crate::domain::{ApiKey, Prompt};

use super::http_status::{build_http_client, error_for_status};

pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI chat-completions backend. Safety settings and top-k have no
/// counterpart in this API and are not sent.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: ApiKey,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: ApiKey,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        if api_key.is_blank() {
            return Err(GenerationError::Authentication(
                "an OpenAI API key is required".to_string(),
            ));
        }

        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    #[tracing::instrument(
        skip(self, prompt, config),
        fields(model = %self.model, mode = %prompt.mode(), prompt_chars = prompt.as_str().len())
    )]
    async fn generate(
        &self,
        prompt: &Prompt,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: config.system_instruction,
                },
                ChatMessage {
                    role: "user",
                    content: prompt.as_str(),
                },
            ],
            max_tokens: config.max_output_tokens,
            temperature: config.temperature,
            top_p: config.top_p,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GenerationError::Upstream(format!("OpenAI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, "OpenAI request rejected");
            return Err(error_for_status("OpenAI", status, &body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Upstream(format!("invalid OpenAI response: {e}")))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::Upstream("empty choices".to_string()))?
            .message
            .content
            .unwrap_or_default();

        tracing::debug!(completion_chars = text.len(), "OpenAI completion received");

        Ok(text)
    }
}
