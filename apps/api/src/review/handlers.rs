//! Axum route handler for the review API.

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::extract::State;
use axum::Json;
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{self, UploadedDocument};
use crate::review::orchestrator::FeedbackResult;
use crate::state::AppState;

/// Raw multipart fields, before validation.
#[derive(Debug, Default)]
struct AnalyzeForm {
    file: Option<(Option<String>, Bytes)>,
    preferred_role: Option<String>,
}

impl AnalyzeForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = AnalyzeForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "file" => {
                    let filename = field.file_name().map(str::to_string);
                    let data = field.bytes().await.map_err(|e| {
                        AppError::Validation(format!("Failed to read file data: {e}"))
                    })?;
                    form.file = Some((filename, data));
                }
                "preferredRole" => {
                    let role = field.text().await.map_err(|e| {
                        AppError::Validation(format!("Failed to read preferredRole: {e}"))
                    })?;
                    form.preferred_role = Some(role);
                }
                _ => {
                    // Unknown fields are drained, not stored.
                    field.bytes().await.map_err(|e| {
                        AppError::Validation(format!("Failed to read form field {name}: {e}"))
                    })?;
                }
            }
        }

        Ok(form)
    }

    /// Checks in order: file present, filename present, role present.
    fn validate(self) -> Result<(UploadedDocument, String), AppError> {
        let (filename, content) = self
            .file
            .ok_or_else(|| AppError::Validation("No file part".to_string()))?;

        let filename = filename.filter(|name| !name.is_empty()).ok_or_else(|| {
            AppError::Validation("No selected file".to_string())
        })?;

        let role = self
            .preferred_role
            .map(|role| role.trim().to_string())
            .filter(|role| !role.is_empty())
            .ok_or_else(|| AppError::Validation("Preferred role is required".to_string()))?;

        Ok((UploadedDocument { filename, content }, role))
    }
}

/// POST /analyze
///
/// Multipart form: `file` (PDF or DOCX) and `preferredRole`.
/// Returns `{summary, improvement, jobmatch}`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<FeedbackResult>, AppError> {
    let multipart = multipart.map_err(|_| AppError::Validation("No file part".to_string()))?;
    let (document, preferred_role) = AnalyzeForm::read(multipart).await?.validate()?;

    info!(
        "Analyzing {} ({} bytes) for role '{preferred_role}'",
        document.filename,
        document.content.len()
    );

    let settings = state.extraction.clone();
    let resume_text =
        tokio::task::spawn_blocking(move || extraction::extract(&document, &settings))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))??;

    let feedback = state
        .orchestrator
        .produce_feedback(&resume_text, &preferred_role)
        .await?;

    Ok(Json(feedback))
}
