use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_MAX_DOCUMENT_CHARS, DEFAULT_MAX_PAGES};
use crate::domain::{ApiKey, Backend};
use crate::infrastructure::llm::{
    GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL, OPENAI_DEFAULT_BASE_URL, OPENAI_DEFAULT_MODEL,
};
use crate::infrastructure::persistence::DEFAULT_MAX_OPEN_SESSIONS;
use crate::presentation::config::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub extraction: ExtractionSettings,
    pub prompt: PromptSettings,
    pub sessions: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: Backend,
    /// Fallback credential for uploads that carry no `x-api-key` header.
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub gemini: EndpointSettings,
    pub openai: EndpointSettings,
}

impl LlmSettings {
    pub fn default_api_key(&self) -> Option<ApiKey> {
        self.api_key
            .as_deref()
            .map(ApiKey::new)
            .filter(|key| !key.is_blank())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointSettings {
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub max_pages: usize,
    pub max_file_size_mb: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptSettings {
    pub max_document_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    /// Upper bound on open sessions; the oldest is evicted past it.
    pub max_open: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers built-in defaults, then `appsettings.{environment}.toml`, then
    /// `APP__SECTION__KEY` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("llm.provider", Backend::Gemini.as_str())?
            .set_default("llm.timeout_seconds", 60_i64)?
            .set_default("llm.gemini.base_url", GEMINI_DEFAULT_BASE_URL)?
            .set_default("llm.gemini.model", GEMINI_DEFAULT_MODEL)?
            .set_default("llm.openai.base_url", OPENAI_DEFAULT_BASE_URL)?
            .set_default("llm.openai.model", OPENAI_DEFAULT_MODEL)?
            .set_default("extraction.max_pages", DEFAULT_MAX_PAGES as i64)?
            .set_default("extraction.max_file_size_mb", 10_i64)?
            .set_default("prompt.max_document_chars", DEFAULT_MAX_DOCUMENT_CHARS as i64)?
            .set_default("sessions.max_open", DEFAULT_MAX_OPEN_SESSIONS as i64)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
