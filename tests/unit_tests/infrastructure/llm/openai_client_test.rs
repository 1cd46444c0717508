use std::time::Duration;

use docent::application::ports::{
    GenerationConfig, GenerationError, QUESTION_SYSTEM_INSTRUCTION, TextGenerator,
};
use docent::domain::{ApiKey, CompletionMode, Prompt};
use docent::infrastructure::llm::OpenAiClient;

use super::start_mock_provider;

const TIMEOUT: Duration = Duration::from_secs(5);

fn question_prompt() -> Prompt {
    Prompt::new("Who signed?".to_string(), CompletionMode::Question)
}

fn client(base_url: &str) -> OpenAiClient {
    OpenAiClient::new(base_url, "gpt-4o-mini", ApiKey::new("sk-test-key"), TIMEOUT).unwrap()
}

#[tokio::test]
async fn given_successful_completion_when_generating_then_returns_first_choice() {
    let response_body = r#"{"choices": [{"index": 0, "message": {"role": "assistant", "content": "Ada signed."}}]}"#;
    let (base_url, _captured, shutdown_tx) = start_mock_provider(200, response_body).await;

    let result = client(&base_url)
        .generate(
            &question_prompt(),
            &GenerationConfig::for_mode(CompletionMode::Question),
        )
        .await;

    assert_eq!(result.unwrap(), "Ada signed.");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_question_request_when_generating_then_sends_bearer_and_system_message() {
    let response_body = r#"{"choices": [{"message": {"content": "ok"}}]}"#;
    let (base_url, captured, shutdown_tx) = start_mock_provider(200, response_body).await;

    client(&base_url)
        .generate(
            &question_prompt(),
            &GenerationConfig::for_mode(CompletionMode::Question),
        )
        .await
        .unwrap();

    let request = captured.lock().unwrap().take().unwrap();
    assert_eq!(request.path, "/chat/completions");
    assert_eq!(request.headers["authorization"], "Bearer sk-test-key");
    assert_eq!(request.body["model"], "gpt-4o-mini");
    assert_eq!(request.body["max_tokens"], 2048);
    assert_eq!(request.body["messages"][0]["role"], "system");
    assert_eq!(request.body["messages"][0]["content"], QUESTION_SYSTEM_INSTRUCTION);
    assert_eq!(request.body["messages"][1]["content"], "Who signed?");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_null_content_when_generating_then_returns_empty_string() {
    let response_body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
    let (base_url, _captured, shutdown_tx) = start_mock_provider(200, response_body).await;

    let result = client(&base_url)
        .generate(
            &question_prompt(),
            &GenerationConfig::for_mode(CompletionMode::Question),
        )
        .await;

    assert_eq!(result.unwrap(), "");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_choices_when_generating_then_returns_upstream_error() {
    let (base_url, _captured, shutdown_tx) = start_mock_provider(200, r#"{"choices": []}"#).await;

    let result = client(&base_url)
        .generate(
            &question_prompt(),
            &GenerationConfig::for_mode(CompletionMode::Question),
        )
        .await;

    assert!(matches!(result, Err(GenerationError::Upstream(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unauthorized_response_when_generating_then_returns_authentication_error() {
    let response_body = r#"{"error": {"message": "Incorrect API key provided", "code": "invalid_api_key"}}"#;
    let (base_url, _captured, shutdown_tx) = start_mock_provider(401, response_body).await;

    let result = client(&base_url)
        .generate(
            &question_prompt(),
            &GenerationConfig::for_mode(CompletionMode::Question),
        )
        .await;

    assert!(matches!(result, Err(GenerationError::Authentication(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_response_when_generating_then_returns_rate_limited() {
    let (base_url, _captured, shutdown_tx) =
        start_mock_provider(429, r#"{"error": {"message": "Rate limit reached"}}"#).await;

    let result = client(&base_url)
        .generate(
            &question_prompt(),
            &GenerationConfig::for_mode(CompletionMode::Question),
        )
        .await;

    assert!(matches!(result, Err(GenerationError::RateLimited)));
    shutdown_tx.send(()).ok();
}
