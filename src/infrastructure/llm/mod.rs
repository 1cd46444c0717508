mod gemini_client;
mod generator_factory;
mod http_status;
mod openai_client;

pub use gemini_client::{GEMINI_DEFAULT_BASE_URL, GEMINI_DEFAULT_MODEL, GeminiClient};
pub use generator_factory::HttpGeneratorFactory;
pub use openai_client::{OPENAI_DEFAULT_BASE_URL, OPENAI_DEFAULT_MODEL, OpenAiClient};
