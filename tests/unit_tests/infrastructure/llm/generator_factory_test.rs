use docent::application::ports::{GenerationError, GeneratorFactory};
use docent::domain::{ApiKey, Backend};
use docent::infrastructure::llm::{
    GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL, HttpGeneratorFactory, OPENAI_DEFAULT_BASE_URL,
    OPENAI_DEFAULT_MODEL,
};
use docent::presentation::config::{EndpointSettings, LlmSettings};

fn settings() -> LlmSettings {
    LlmSettings {
        provider: Backend::Gemini,
        api_key: None,
        timeout_seconds: 30,
        gemini: EndpointSettings {
            base_url: GEMINI_DEFAULT_BASE_URL.to_string(),
            model: GEMINI_DEFAULT_MODEL.to_string(),
        },
        openai: EndpointSettings {
            base_url: OPENAI_DEFAULT_BASE_URL.to_string(),
            model: OPENAI_DEFAULT_MODEL.to_string(),
        },
    }
}

#[test]
fn given_key_when_creating_each_backend_then_succeeds() {
    let factory = HttpGeneratorFactory::new(settings());

    assert!(factory.create(Backend::Gemini, ApiKey::new("AIza-key")).is_ok());
    assert!(factory.create(Backend::OpenAi, ApiKey::new("sk-key")).is_ok());
}

#[test]
fn given_blank_key_when_creating_then_returns_authentication_error() {
    let factory = HttpGeneratorFactory::new(settings());

    let result = factory.create(Backend::OpenAi, ApiKey::new(""));

    assert!(matches!(result, Err(GenerationError::Authentication(_))));
}

#[test]
fn given_settings_key_when_reading_default_then_blank_keys_are_ignored() {
    let mut llm = settings();
    assert!(llm.default_api_key().is_none());

    llm.api_key = Some("   ".to_string());
    assert!(llm.default_api_key().is_none());

    llm.api_key = Some("sk-configured".to_string());
    assert_eq!(llm.default_api_key().unwrap().expose(), "sk-configured");
}
