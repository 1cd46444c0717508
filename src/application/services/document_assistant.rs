use std::sync::Arc;

use crate::application::ports::{GenerationError, GeneratorFactory, SessionStore};
use crate::domain::{
    AnalysisOutcome, AnalysisResult, ApiKey, Backend, RawDocument, SessionId, ValidationError,
};

use super::document_session::{DocumentSession, SearchResult, SessionError};
use super::prompt_builder::PromptBuilder;
use super::text_extractor::{ExtractionError, TextExtractor};
use super::upload_policy::UploadPolicy;

/// Drives an upload through validation, extraction and summarization, and
/// serves follow-up requests against the resulting session.
pub struct DocumentAssistant {
    policy: UploadPolicy,
    extractor: TextExtractor,
    prompts: PromptBuilder,
    generators: Arc<dyn GeneratorFactory>,
    sessions: Arc<dyn SessionStore>,
}

pub struct OpenedDocument {
    pub session: Arc<DocumentSession>,
    pub analysis: AnalysisResult,
}

impl DocumentAssistant {
    pub fn new(
        policy: UploadPolicy,
        extractor: TextExtractor,
        prompts: PromptBuilder,
        generators: Arc<dyn GeneratorFactory>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            policy,
            extractor,
            prompts,
            generators,
            sessions,
        }
    }

    /// Validates, extracts and summarizes an upload.
    ///
    /// The session is only registered once its first analysis succeeded; any
    /// failure leaves no state behind.
    #[tracing::instrument(
        skip(self, document, api_key),
        fields(filename = %document.filename, backend = %backend)
    )]
    pub async fn open_document(
        &self,
        document: RawDocument,
        backend: Backend,
        api_key: ApiKey,
    ) -> Result<OpenedDocument, AssistantError> {
        self.policy.validate(&document)?;

        let generator = self.generators.create(backend, api_key)?;
        let text = self.extractor.extract(&document).await?;

        let session = Arc::new(DocumentSession::new(
            document.filename,
            text,
            generator,
            self.prompts,
        ));

        if session.is_truncated() {
            tracing::warn!(
                session_id = %session.id(),
                chars = session.text().char_count(),
                budget = self.prompts.max_document_chars(),
                "Document exceeds prompt budget, analysis covers the leading excerpt only"
            );
        }

        let analysis = match session.summarize().await? {
            AnalysisOutcome::Applied(result) => result,
            AnalysisOutcome::Superseded { .. } => return Err(AssistantError::AnalysisSuperseded),
        };

        self.sessions.insert(Arc::clone(&session)).await;
        tracing::info!(
            session_id = %session.id(),
            page_count = session.page_count(),
            "Document session opened"
        );

        Ok(OpenedDocument { session, analysis })
    }

    pub async fn session(&self, id: SessionId) -> Result<Arc<DocumentSession>, AssistantError> {
        self.sessions
            .get(id)
            .await
            .ok_or(AssistantError::SessionNotFound(id))
    }

    pub async fn analyze(&self, id: SessionId) -> Result<AnalysisResult, AssistantError> {
        let session = self.session(id).await?;
        match session.summarize().await? {
            AnalysisOutcome::Applied(result) => Ok(result),
            AnalysisOutcome::Superseded { .. } => Err(AssistantError::AnalysisSuperseded),
        }
    }

    pub async fn ask(&self, id: SessionId, question: &str) -> Result<String, AssistantError> {
        let session = self.session(id).await?;
        Ok(session.ask(question).await?)
    }

    pub async fn search(&self, id: SessionId, term: &str) -> Result<SearchResult, AssistantError> {
        let session = self.session(id).await?;
        Ok(session.search(term)?)
    }

    pub async fn close(&self, id: SessionId) -> Result<(), AssistantError> {
        match self.sessions.remove(id).await {
            Some(_) => {
                tracing::info!(session_id = %id, "Document session closed");
                Ok(())
            }
            None => Err(AssistantError::SessionNotFound(id)),
        }
    }

    pub async fn open_sessions(&self) -> usize {
        self.sessions.len().await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("generation: {0}")]
    Generation(#[from] GenerationError),
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),
    #[error("analysis superseded by a newer request")]
    AnalysisSuperseded,
}

impl From<SessionError> for AssistantError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Validation(e) => Self::Validation(e),
            SessionError::Generation(e) => Self::Generation(e),
        }
    }
}
