use std::sync::Arc;

use docent::application::ports::GenerationError;
use docent::application::services::{ANSWER_FALLBACK, DocumentSession, PromptBuilder, SessionError};
use docent::domain::{AnalysisOutcome, CompletionMode, ExtractedText, ValidationError};

use crate::helpers::{GatedGenerator, ScriptedGenerator};

const CONTRACT_TEXT: &str = "This Services Agreement is made between Acme Corp and Globex. \
    The monthly fee is payable within thirty days of invoice.";

fn session_with(generator: Arc<ScriptedGenerator>) -> DocumentSession {
    DocumentSession::new(
        "contract.pdf".to_string(),
        ExtractedText::from_pages([CONTRACT_TEXT]),
        generator,
        PromptBuilder::default(),
    )
}

#[tokio::test]
async fn given_structured_completion_when_summarizing_then_stores_analysis() {
    let generator = Arc::new(ScriptedGenerator::replying(&[
        "TITLE: Services Agreement\n1. Acme and Globex\n2. Monthly fee",
    ]));
    let session = session_with(Arc::clone(&generator));

    let outcome = session.summarize().await.unwrap();

    let AnalysisOutcome::Applied(result) = outcome else {
        panic!("expected applied outcome");
    };
    assert_eq!(result.title.as_deref(), Some("Services Agreement"));
    assert_eq!(session.analysis().await, Some(result));
    assert_eq!(generator.prompts()[0].mode(), CompletionMode::Summary);
}

#[tokio::test]
async fn given_generation_failure_when_summarizing_then_previous_analysis_is_kept() {
    let generator = Arc::new(ScriptedGenerator::new(vec![
        Ok("TITLE: First\n1. Point".to_string()),
        Err(GenerationError::RateLimited),
    ]));
    let session = session_with(generator);
    session.summarize().await.unwrap();

    let result = session.summarize().await;

    assert!(matches!(result, Err(GenerationError::RateLimited)));
    let analysis = session.analysis().await.unwrap();
    assert_eq!(analysis.title.as_deref(), Some("First"));
}

#[tokio::test]
async fn given_newer_summary_finished_first_when_older_completes_then_older_is_discarded() {
    let generator = Arc::new(GatedGenerator::new(
        "TITLE: Stale\n1. old",
        "TITLE: Fresh\n1. new",
    ));
    let session = Arc::new(DocumentSession::new(
        "contract.pdf".to_string(),
        ExtractedText::from_pages([CONTRACT_TEXT]),
        generator.clone(),
        PromptBuilder::default(),
    ));

    let older = tokio::spawn({
        let session = Arc::clone(&session);
        async move { session.summarize().await }
    });
    generator.first_call_started.notified().await;

    let newer = session.summarize().await.unwrap();
    generator.release_first_call.notify_one();
    let older = older.await.unwrap().unwrap();

    assert!(matches!(newer, AnalysisOutcome::Applied(ref r) if r.title.as_deref() == Some("Fresh")));
    assert!(matches!(older, AnalysisOutcome::Superseded { ticket, latest } if ticket < latest));
    let analysis = session.analysis().await.unwrap();
    assert_eq!(analysis.title.as_deref(), Some("Fresh"));
}

#[tokio::test]
async fn given_question_when_asking_then_returns_completion_verbatim() {
    let generator = Arc::new(ScriptedGenerator::replying(&["The fee is monthly."]));
    let session = session_with(Arc::clone(&generator));

    let answer = session.ask("  How often is the fee paid?  ").await.unwrap();

    assert_eq!(answer, "The fee is monthly.");
    let prompt = &generator.prompts()[0];
    assert_eq!(prompt.mode(), CompletionMode::Question);
    assert!(prompt.as_str().contains("Question: How often is the fee paid?\n"));
}

#[tokio::test]
async fn given_blank_completion_when_asking_then_returns_fallback_answer() {
    let session = session_with(Arc::new(ScriptedGenerator::replying(&["   "])));

    let answer = session.ask("Who signed?").await.unwrap();

    assert_eq!(answer, ANSWER_FALLBACK);
}

#[tokio::test]
async fn given_blank_question_when_asking_then_rejects_without_calling_backend() {
    let generator = Arc::new(ScriptedGenerator::default());
    let session = session_with(Arc::clone(&generator));

    let result = session.ask(" \n ").await;

    assert!(matches!(
        result,
        Err(SessionError::Validation(ValidationError::EmptyQuestion))
    ));
    assert!(generator.prompts().is_empty());
}

#[test]
fn given_term_in_text_when_searching_case_insensitively_then_reports_snippet() {
    let session = session_with(Arc::new(ScriptedGenerator::default()));

    let result = session.search("MONTHLY FEE").unwrap();

    assert!(result.found);
    assert!(result.message.starts_with("Found \"MONTHLY FEE\" in the document:\n\n\"..."));
    assert!(result.message.contains("monthly fee is payable"));
    assert!(result.message.ends_with("...\""));
}

#[test]
fn given_match_deep_in_text_when_searching_then_snippet_is_bounded_to_context() {
    let text = format!("{}needle{}", "a".repeat(500), "b".repeat(500));
    let session = DocumentSession::new(
        "long.pdf".to_string(),
        ExtractedText::from_pages([text]),
        Arc::new(ScriptedGenerator::default()),
        PromptBuilder::default(),
    );

    let result = session.search("needle").unwrap();

    let expected = format!("{}needle{}", "a".repeat(100), "b".repeat(100));
    assert_eq!(
        result.message,
        format!("Found \"needle\" in the document:\n\n\"...{expected}...\"")
    );
}

#[test]
fn given_missing_term_when_searching_then_reports_not_found() {
    let session = session_with(Arc::new(ScriptedGenerator::default()));

    let result = session.search("indemnity").unwrap();

    assert!(!result.found);
    assert_eq!(
        result.to_string(),
        "The text \"indemnity\" was not found in the document."
    );
}

#[test]
fn given_blank_term_when_searching_then_rejects() {
    let session = session_with(Arc::new(ScriptedGenerator::default()));
    assert_eq!(session.search("  "), Err(ValidationError::EmptySearchTerm));
}

#[test]
fn given_padded_term_when_searching_then_padding_is_matched_and_echoed() {
    let session = session_with(Arc::new(ScriptedGenerator::default()));

    let result = session.search(" globex").unwrap();

    assert!(result.found);
    assert!(result.message.starts_with("Found \" globex\" in the document:"));
    assert!(result.message.contains("Acme Corp and Globex."));
}

#[test]
fn given_trailing_padding_absent_from_text_when_searching_then_reports_not_found() {
    let session = session_with(Arc::new(ScriptedGenerator::default()));

    let result = session.search("Globex  ").unwrap();

    assert!(!result.found);
    assert_eq!(
        result.message,
        "The text \"Globex  \" was not found in the document."
    );
}

#[test]
fn given_text_over_prompt_budget_when_checked_then_session_is_truncated() {
    let session = DocumentSession::new(
        "big.pdf".to_string(),
        ExtractedText::from_pages(["x".repeat(20)]),
        Arc::new(ScriptedGenerator::default()),
        PromptBuilder::new(10),
    );

    assert!(session.is_truncated());
    assert_eq!(session.page_count(), 1);
    assert_eq!(session.filename(), "big.pdf");
}
