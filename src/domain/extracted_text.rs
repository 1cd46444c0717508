pub const PAGE_SEPARATOR: &str = "\n\n";

/// Plain text of a whole document, one entry per page in page order.
///
/// Every page is followed by [`PAGE_SEPARATOR`], including the last one and
/// pages that produced no text, so a document of N pages always carries N
/// separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    content: String,
    page_count: usize,
}

impl ExtractedText {
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut content = String::new();
        let mut page_count = 0;

        for page in pages {
            content.push_str(page.as_ref());
            content.push_str(PAGE_SEPARATOR);
            page_count += 1;
        }

        Self {
            content,
            page_count,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}
