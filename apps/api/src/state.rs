use crate::extraction::ExtractionSettings;
use crate::review::orchestrator::FeedbackOrchestrator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: FeedbackOrchestrator,
    /// OCR fallback switch and parameters for PDF extraction.
    pub extraction: ExtractionSettings,
}
