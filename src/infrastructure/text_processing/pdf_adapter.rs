use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use lopdf::Document;

use crate::application::ports::{PdfPageSource, PdfParser, PdfParserError};

/// `lopdf`-backed parser. Parsing is CPU-bound and runs on the blocking pool.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

struct LopdfPageSource {
    document: Arc<Document>,
    page_numbers: Vec<u32>,
}

#[async_trait]
impl PdfParser for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(size_bytes = data.len()))]
    async fn open(&self, data: Bytes) -> Result<Box<dyn PdfPageSource>, PdfParserError> {
        let document = tokio::task::spawn_blocking(move || Document::load_mem(&data))
            .await
            .map_err(|e| PdfParserError::TaskFailed(e.to_string()))?
            .map_err(|e| PdfParserError::InvalidDocument(e.to_string()))?;

        let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        tracing::debug!(page_count = page_numbers.len(), "PDF opened");

        Ok(Box::new(LopdfPageSource {
            document: Arc::new(document),
            page_numbers,
        }))
    }
}

#[async_trait]
impl PdfPageSource for LopdfPageSource {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    async fn page_fragments(&mut self, page_number: usize) -> Result<Vec<String>, PdfParserError> {
        let lopdf_page = page_number
            .checked_sub(1)
            .and_then(|index| self.page_numbers.get(index))
            .copied()
            .ok_or_else(|| PdfParserError::PageUnreadable {
                page: page_number,
                reason: "page out of range".to_string(),
            })?;

        let document = Arc::clone(&self.document);
        let text = tokio::task::spawn_blocking(move || document.extract_text(&[lopdf_page]))
            .await
            .map_err(|e| PdfParserError::TaskFailed(e.to_string()))?
            .map_err(|e| PdfParserError::PageUnreadable {
                page: page_number,
                reason: e.to_string(),
            })?;

        Ok(split_fragments(&text))
    }
}

/// lopdf ends every text object with a newline; each non-blank line is one fragment.
fn split_fragments(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
