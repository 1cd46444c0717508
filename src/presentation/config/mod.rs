mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    EndpointSettings, ExtractionSettings, LlmSettings, LoggingSettings, PromptSettings,
    ServerSettings, SessionSettings, Settings,
};
