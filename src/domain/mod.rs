mod analysis;
mod api_key;
mod backend;
mod document;
mod extracted_text;
mod prompt;
mod session_id;
mod validation_error;

pub use analysis::{AnalysisOutcome, AnalysisResult, AnalysisTicket};
pub use api_key::ApiKey;
pub use backend::Backend;
pub use document::{ContentType, RawDocument};
pub use extracted_text::{ExtractedText, PAGE_SEPARATOR};
pub use prompt::{CompletionMode, Prompt};
pub use session_id::SessionId;
pub use validation_error::ValidationError;
