use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{GenerationError, GeneratorFactory, TextGenerator};
use crate::domain::{ApiKey, Backend};
use crate::presentation::config::LlmSettings;

use super::{GeminiClient, OpenAiClient};

/// Builds a fresh client per credential from the configured endpoints.
pub struct HttpGeneratorFactory {
    settings: LlmSettings,
}

impl HttpGeneratorFactory {
    pub fn new(settings: LlmSettings) -> Self {
        Self { settings }
    }
}

impl GeneratorFactory for HttpGeneratorFactory {
    fn create(
        &self,
        backend: Backend,
        api_key: ApiKey,
    ) -> Result<Arc<dyn TextGenerator>, GenerationError> {
        let timeout = Duration::from_secs(self.settings.timeout_seconds);

        match backend {
            Backend::Gemini => {
                let endpoint = &self.settings.gemini;
                tracing::debug!(model = %endpoint.model, "Creating Gemini client");
                let client =
                    GeminiClient::new(&endpoint.base_url, &endpoint.model, api_key, timeout)?;
                Ok(Arc::new(client))
            }
            Backend::OpenAi => {
                let endpoint = &self.settings.openai;
                tracing::debug!(model = %endpoint.model, "Creating OpenAI client");
                let client =
                    OpenAiClient::new(&endpoint.base_url, &endpoint.model, api_key, timeout)?;
                Ok(Arc::new(client))
            }
        }
    }
}
