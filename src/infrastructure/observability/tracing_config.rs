use crate::presentation::config::{ENVIRONMENT_VAR, Environment, LoggingSettings};

const DEFAULT_FILTER: &str = "info,docent=debug,tower_http=debug";

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_filter: String,
}

impl TracingConfig {
    pub fn from_settings(logging: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: logging.enable_json,
            default_filter: logging.level.clone(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_filter: DEFAULT_FILTER.to_string(),
        }
    }
}
