//! Resume text extraction.
//!
//! Dispatches on the filename extension to the PDF or DOCX extractor and
//! returns a single trimmed string. Library failures never escape this module:
//! they are logged and collapse into `NoTextRecovered`, which stays distinct
//! from `UnsupportedFormat`.

pub mod docx;
pub mod ocr;
pub mod pdf;

use std::fmt;

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};

/// A file received from the client. Lives only for the duration of a request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub content: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Case-insensitive extension match; `None` for anything unsupported.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Some(DocumentFormat::Docx)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Pdf => f.write_str("PDF"),
            DocumentFormat::Docx => f.write_str("DOCX"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Unsupported file format: {filename}")]
    UnsupportedFormat { filename: String },

    #[error("No text could be recovered from the {format} file")]
    NoTextRecovered { format: DocumentFormat },
}

/// OCR fallback parameters. Present only when the fallback is enabled.
#[derive(Debug, Clone)]
pub struct OcrSettings {
    pub language: String,
    pub dpi: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractionSettings {
    pub ocr: Option<OcrSettings>,
}

/// Extracts the text of an uploaded resume.
///
/// Blocking: PDF parsing and OCR subprocesses run on the calling thread, so
/// async callers should go through `spawn_blocking`.
pub fn extract(
    document: &UploadedDocument,
    settings: &ExtractionSettings,
) -> Result<String, ExtractionError> {
    let format = DocumentFormat::from_filename(&document.filename).ok_or_else(|| {
        ExtractionError::UnsupportedFormat {
            filename: document.filename.clone(),
        }
    })?;

    let raw = match format {
        DocumentFormat::Pdf => extract_pdf(&document.content, settings),
        DocumentFormat::Docx => docx::extract_paragraphs(&document.content).unwrap_or_else(|e| {
            warn!("DOCX extraction failed for {}: {e}", document.filename);
            String::new()
        }),
    };

    let text = raw.trim();
    if text.is_empty() {
        return Err(ExtractionError::NoTextRecovered { format });
    }

    info!(
        "Extracted {} chars from {} ({format})",
        text.chars().count(),
        document.filename
    );
    Ok(text.to_string())
}

fn extract_pdf(content: &[u8], settings: &ExtractionSettings) -> String {
    let text = pdf::extract_text_layer(content).unwrap_or_else(|e| {
        warn!("PDF text-layer extraction failed: {e}");
        String::new()
    });

    if !text.trim().is_empty() {
        return text;
    }

    let Some(ocr_settings) = &settings.ocr else {
        return text;
    };

    warn!("PDF has no text layer, falling back to OCR");
    ocr::recognize_pdf(content, ocr_settings).unwrap_or_else(|e| {
        warn!("OCR fallback failed: {e}");
        String::new()
    })
}
