mod generation_config;
mod generator_factory;
mod pdf_parser;
mod session_store;
mod text_generator;

pub use generation_config::{
    BlockThreshold, GenerationConfig, HarmCategory, QUESTION_SYSTEM_INSTRUCTION,
    SUMMARY_SYSTEM_INSTRUCTION, SafetySetting,
};
pub use generator_factory::GeneratorFactory;
pub use pdf_parser::{PdfPageSource, PdfParser, PdfParserError};
pub use session_store::SessionStore;
pub use text_generator::{GenerationError, TextGenerator};
