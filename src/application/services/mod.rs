mod document_assistant;
mod document_session;
mod prompt_builder;
mod response_normalizer;
mod text_extractor;
mod upload_policy;

pub use document_assistant::{AssistantError, DocumentAssistant, OpenedDocument};
pub use document_session::{DocumentSession, SearchResult, SessionError};
pub use prompt_builder::{DEFAULT_MAX_DOCUMENT_CHARS, PromptBuilder};
pub use response_normalizer::{ANSWER_FALLBACK, normalize_answer, normalize_summary};
pub use text_extractor::{DEFAULT_MAX_PAGES, ExtractionError, TextExtractor};
pub use upload_policy::{DEFAULT_MAX_FILE_SIZE_BYTES, UploadPolicy};
