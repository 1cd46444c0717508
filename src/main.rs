use std::sync::Arc;

use tokio::net::TcpListener;

use docent::application::services::{DocumentAssistant, PromptBuilder, TextExtractor, UploadPolicy};
use docent::infrastructure::llm::HttpGeneratorFactory;
use docent::infrastructure::observability::{TracingConfig, init_tracing};
use docent::infrastructure::persistence::InMemorySessionStore;
use docent::infrastructure::text_processing::PdfAdapter;
use docent::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    if settings.llm.default_api_key().is_none() {
        tracing::warn!(
            provider = %settings.llm.provider,
            "No default API key configured, uploads must send x-api-key"
        );
    }

    let extractor = TextExtractor::new(
        Arc::new(PdfAdapter::new()),
        settings.extraction.max_pages,
    );
    let assistant = DocumentAssistant::new(
        UploadPolicy::from_megabytes(settings.extraction.max_file_size_mb),
        extractor,
        PromptBuilder::new(settings.prompt.max_document_chars),
        Arc::new(HttpGeneratorFactory::new(settings.llm.clone())),
        Arc::new(InMemorySessionStore::with_max_open(settings.sessions.max_open)),
    );

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let state = AppState {
        assistant: Arc::new(assistant),
        settings: Arc::new(settings),
    };
    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
