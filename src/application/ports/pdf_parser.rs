use async_trait::async_trait;
use bytes::Bytes;

/// Opens PDF payloads. Implementations own whatever engine does the parsing.
#[async_trait]
pub trait PdfParser: Send + Sync {
    async fn open(&self, data: Bytes) -> Result<Box<dyn PdfPageSource>, PdfParserError>;
}

/// An opened document whose pages are fetched one at a time.
///
/// Pages are numbered from 1. Callers must await each fetch before requesting
/// the next; implementations are not required to support concurrent access.
#[async_trait]
pub trait PdfPageSource: Send {
    fn page_count(&self) -> usize;

    /// Text fragments of one page in the order the engine emits them.
    async fn page_fragments(&mut self, page_number: usize) -> Result<Vec<String>, PdfParserError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PdfParserError {
    #[error("invalid pdf: {0}")]
    InvalidDocument(String),
    #[error("page {page}: {reason}")]
    PageUnreadable { page: usize, reason: String },
    #[error("parser task failed: {0}")]
    TaskFailed(String),
}
