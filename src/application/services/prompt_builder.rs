use crate::domain::{CompletionMode, Prompt};

pub const DEFAULT_MAX_DOCUMENT_CHARS: usize = 15_000;

/// Assembles model prompts around a bounded excerpt of the document.
///
/// Text past the character budget is dropped without any marker in the
/// prompt; use [`PromptBuilder::is_truncated`] to find out whether that
/// happened.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder {
    max_document_chars: usize,
}

impl PromptBuilder {
    pub fn new(max_document_chars: usize) -> Self {
        Self { max_document_chars }
    }

    pub fn max_document_chars(&self) -> usize {
        self.max_document_chars
    }

    pub fn excerpt<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.max_document_chars) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }

    pub fn is_truncated(&self, text: &str) -> bool {
        text.char_indices().nth(self.max_document_chars).is_some()
    }

    pub fn build_summary_prompt(&self, text: &str) -> Prompt {
        let prompt = format!(
            "Please analyze the following document and provide:\n\
             1. A probable title for this document (start with 'TITLE:')\n\
             2. A summary of up to 10 key points (each point should start with a number followed by a period)\n\
             \n\
             Document text:\n\
             {}",
            self.excerpt(text)
        );

        Prompt::new(prompt, CompletionMode::Summary)
    }

    pub fn build_question_prompt(&self, question: &str, text: &str) -> Prompt {
        let prompt = format!(
            "Document text: {}\n\
             \n\
             Question: {}\n\
             \n\
             Answer the question using only information from the document. \
             If the answer isn't in the document, say so clearly.",
            self.excerpt(text),
            question
        );

        Prompt::new(prompt, CompletionMode::Question)
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DOCUMENT_CHARS)
    }
}
