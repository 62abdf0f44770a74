mod config;
mod errors;
mod extraction;
mod llm_client;
mod review;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::review::orchestrator::FeedbackOrchestrator;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume reviewer v{}", env!("CARGO_PKG_VERSION"));

    if config.openai_api_key.trim().is_empty() {
        warn!("OPENAI_API_KEY is not set; completion calls will fail authentication");
    }

    // Initialize LLM client
    let llm = LlmClient::new(config.llm_settings())?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s)",
        llm.model(),
        config.llm_timeout_secs
    );

    let extraction_settings = config.extraction_settings();
    match &extraction_settings.ocr {
        Some(ocr) if extraction::ocr::tools_available() => {
            info!("OCR fallback enabled (lang={}, dpi={})", ocr.language, ocr.dpi)
        }
        Some(_) => warn!("OCR fallback enabled but pdftoppm/tesseract not found; scanned PDFs will be rejected"),
        None => info!("OCR fallback disabled; scanned PDFs will be rejected"),
    }

    // Build app state
    let state = AppState {
        orchestrator: FeedbackOrchestrator::new(Arc::new(llm)),
        extraction: extraction_settings,
    };

    // Build router
    let app = build_router(state, config.max_upload_bytes).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
