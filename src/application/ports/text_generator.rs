use async_trait::async_trait;

use crate::domain::Prompt;

use super::GenerationConfig;

/// A hosted text-generation backend. One call performs exactly one request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &Prompt,
        config: &GenerationConfig,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("authentication failed: {0}")]
    Authentication(String),
    #[error("rate limited")]
    RateLimited,
    #[error("upstream error: {0}")]
    Upstream(String),
}
