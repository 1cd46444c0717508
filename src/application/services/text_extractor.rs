use std::sync::Arc;

use crate::application::ports::{PdfParser, PdfParserError};
use crate::domain::{ExtractedText, RawDocument};

pub const DEFAULT_MAX_PAGES: usize = 300;

pub struct TextExtractor {
    parser: Arc<dyn PdfParser>,
    max_pages: usize,
}

impl TextExtractor {
    pub fn new(parser: Arc<dyn PdfParser>, max_pages: usize) -> Self {
        Self { parser, max_pages }
    }

    pub fn max_pages(&self) -> usize {
        self.max_pages
    }

    /// Turns a PDF payload into page-ordered plain text.
    ///
    /// Non-PDF payloads are rejected without opening the parser.
    /// The page ceiling is enforced as soon as the page count is known, before
    /// any page content is read. Pages are fetched one after another; the
    /// fragments of a page are joined with single spaces.
    #[tracing::instrument(
        skip(self, document),
        fields(filename = %document.filename, size_bytes = document.size_bytes())
    )]
    pub async fn extract(&self, document: &RawDocument) -> Result<ExtractedText, ExtractionError> {
        if !document.content_type.is_pdf() {
            return Err(ExtractionError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let mut source = self
            .parser
            .open(document.data.clone())
            .await
            .map_err(ExtractionError::Unparseable)?;

        let page_count = source.page_count();
        if page_count > self.max_pages {
            tracing::warn!(page_count, limit = self.max_pages, "PDF exceeds page limit");
            return Err(ExtractionError::PageLimitExceeded {
                pages: page_count,
                limit: self.max_pages,
            });
        }

        let mut pages = Vec::with_capacity(page_count);
        for page_number in 1..=page_count {
            let page_text = match source.page_fragments(page_number).await {
                Ok(fragments) => fragments.join(" "),
                Err(PdfParserError::PageUnreadable { page, reason }) => {
                    tracing::warn!(page, %reason, "Page text unreadable, keeping it empty");
                    String::new()
                }
                Err(e) => return Err(ExtractionError::Unparseable(e)),
            };
            pages.push(page_text);
        }

        let extracted = ExtractedText::from_pages(pages);
        tracing::info!(
            page_count,
            chars = extracted.char_count(),
            "PDF text extraction complete"
        );

        Ok(extracted)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    /// The extractor only accepts PDF payloads, whether or not an
    /// `UploadPolicy` screened them first.
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("failed to read pdf: {0}")]
    Unparseable(PdfParserError),
    #[error("document has {pages} pages, the limit is {limit}")]
    PageLimitExceeded { pages: usize, limit: usize },
}
