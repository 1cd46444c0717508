mod analysis;
mod ask;
mod documents;
mod error;
mod health;
mod search;

pub use analysis::analyze_document_handler;
pub use ask::ask_handler;
pub use documents::{
    API_KEY_HEADER, PROVIDER_HEADER, delete_document_handler, get_document_handler,
    get_document_text_handler, upload_document_handler,
};
pub use error::{ErrorResponse, error_response, status_for};
pub use health::health_handler;
pub use search::search_handler;
