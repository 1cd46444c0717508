#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("unsupported media type: {0}, only application/pdf is accepted")]
    UnsupportedMediaType(String),
    #[error("file is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },
    #[error("file is empty")]
    EmptyFile,
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error("search term must not be empty")]
    EmptySearchTerm,
}
