use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::application::ports::{GenerationConfig, GenerationError, TextGenerator};
use crate::domain::{
    AnalysisOutcome, AnalysisResult, AnalysisTicket, CompletionMode, ExtractedText, SessionId,
    ValidationError,
};
use crate::infrastructure::observability::sanitize_prompt;

use super::prompt_builder::PromptBuilder;
use super::response_normalizer::{normalize_answer, normalize_summary};

const SNIPPET_CONTEXT_CHARS: usize = 100;

/// State scoped to one uploaded document: its text, its current analysis and
/// the generation client bound to the uploader's credential.
pub struct DocumentSession {
    id: SessionId,
    filename: String,
    text: ExtractedText,
    created_at: DateTime<Utc>,
    generator: Arc<dyn TextGenerator>,
    prompts: PromptBuilder,
    analysis: RwLock<Option<AnalysisResult>>,
    latest_ticket: AtomicU64,
}

impl DocumentSession {
    pub fn new(
        filename: String,
        text: ExtractedText,
        generator: Arc<dyn TextGenerator>,
        prompts: PromptBuilder,
    ) -> Self {
        Self {
            id: SessionId::new(),
            filename,
            text,
            created_at: Utc::now(),
            generator,
            prompts,
            analysis: RwLock::new(None),
            latest_ticket: AtomicU64::new(0),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn text(&self) -> &ExtractedText {
        &self.text
    }

    pub fn page_count(&self) -> usize {
        self.text.page_count()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether prompts built from this document drop text past the excerpt budget.
    pub fn is_truncated(&self) -> bool {
        self.prompts.is_truncated(self.text.as_str())
    }

    pub async fn analysis(&self) -> Option<AnalysisResult> {
        self.analysis.read().await.clone()
    }

    /// Summarizes the document and stores the result as the current analysis.
    ///
    /// Each call takes a new ticket. If another call started after this one by
    /// the time the completion arrives, the result is returned as
    /// [`AnalysisOutcome::Superseded`] and the stored analysis is left alone.
    #[tracing::instrument(skip(self), fields(session_id = %self.id))]
    pub async fn summarize(&self) -> Result<AnalysisOutcome, GenerationError> {
        let ticket = AnalysisTicket::new(self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1);

        let prompt = self.prompts.build_summary_prompt(self.text.as_str());
        let config = GenerationConfig::for_mode(CompletionMode::Summary);
        let raw = self.generator.generate(&prompt, &config).await?;
        let result = normalize_summary(&raw);

        let mut slot = self.analysis.write().await;
        let latest = AnalysisTicket::new(self.latest_ticket.load(Ordering::SeqCst));
        if latest != ticket {
            tracing::warn!(
                ticket = ticket.value(),
                latest = latest.value(),
                "Discarding stale analysis"
            );
            return Ok(AnalysisOutcome::Superseded { ticket, latest });
        }

        *slot = Some(result.clone());
        tracing::info!(
            points = result.summary_points.len(),
            has_title = result.title.is_some(),
            "Analysis stored"
        );

        Ok(AnalysisOutcome::Applied(result))
    }

    #[tracing::instrument(skip(self, question), fields(session_id = %self.id))]
    pub async fn ask(&self, question: &str) -> Result<String, SessionError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ValidationError::EmptyQuestion.into());
        }

        tracing::debug!(question = %sanitize_prompt(question), "Answering question");

        let prompt = self
            .prompts
            .build_question_prompt(question, self.text.as_str());
        let config = GenerationConfig::for_mode(CompletionMode::Question);
        let raw = self.generator.generate(&prompt, &config).await?;

        Ok(normalize_answer(&raw))
    }

    /// Case-insensitive scan for the first occurrence of `term` in the
    /// extracted text. Purely local. Surrounding whitespace in `term` is
    /// part of the match; a term that is only whitespace is rejected.
    pub fn search(&self, term: &str) -> Result<SearchResult, ValidationError> {
        if term.trim().is_empty() {
            return Err(ValidationError::EmptySearchTerm);
        }

        let result = match first_match_snippet(self.text.as_str(), term) {
            Some(snippet) => SearchResult {
                found: true,
                message: format!("Found \"{term}\" in the document:\n\n\"...{snippet}...\""),
            },
            None => SearchResult {
                found: false,
                message: format!("The text \"{term}\" was not found in the document."),
            },
        };

        Ok(result)
    }
}

impl fmt::Debug for DocumentSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentSession")
            .field("id", &self.id)
            .field("filename", &self.filename)
            .field("page_count", &self.text.page_count())
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    pub message: String,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

fn first_match_snippet(text: &str, term: &str) -> Option<String> {
    let needle: Vec<char> = term.chars().flat_map(char::to_lowercase).collect();

    // Lowercasing can expand a char, so remember which original char each folded char came from.
    let mut folded = Vec::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (index, ch) in text.chars().enumerate() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origin.push(index);
        }
    }

    let start = folded
        .windows(needle.len())
        .position(|window| window == needle.as_slice())?;
    let match_start = origin[start];
    let match_end = origin[start + needle.len() - 1] + 1;

    let chars: Vec<char> = text.chars().collect();
    let from = match_start.saturating_sub(SNIPPET_CONTEXT_CHARS);
    let to = (match_end + SNIPPET_CONTEXT_CHARS).min(chars.len());

    Some(chars[from..to].iter().collect())
}
