//! OCR fallback for PDFs without a text layer.
//!
//! Pages are rasterized with `pdftoppm` (poppler-utils) and each image is read
//! with `tesseract`. All intermediate files live in a `TempDir` that is removed
//! when this module returns, on every path.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::OcrSettings;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR requires pdftoppm (poppler-utils) and tesseract to be installed")]
    ToolsUnavailable,

    #[error("temporary storage error: {0}")]
    Io(#[from] io::Error),

    #[error("{tool} failed: {stderr}")]
    ToolFailed { tool: &'static str, stderr: String },

    #[error("pdftoppm produced no page images")]
    NoPages,
}

/// Checks whether both OCR executables can be launched. Used for the startup
/// log only; requests rely on the spawn error instead.
pub fn tools_available() -> bool {
    let probe = |tool: &str| {
        Command::new(tool)
            .arg("-v")
            .output()
            .map(|_| true)
            .unwrap_or(false)
    };
    let pdftoppm = probe("pdftoppm");
    let tesseract = probe("tesseract");
    if !pdftoppm {
        debug!("pdftoppm not found - install poppler-utils for OCR support");
    }
    if !tesseract {
        debug!("tesseract not found - install tesseract-ocr for OCR support");
    }
    pdftoppm && tesseract
}

/// Renders every page and concatenates the recognized text in page order.
pub fn recognize_pdf(content: &[u8], settings: &OcrSettings) -> Result<String, OcrError> {
    recognize_pdf_in(&std::env::temp_dir(), content, settings)
}

fn recognize_pdf_in(
    parent: &Path,
    content: &[u8],
    settings: &OcrSettings,
) -> Result<String, OcrError> {
    let workdir = tempfile::tempdir_in(parent)?;
    let input = workdir.path().join("input.pdf");
    std::fs::write(&input, content)?;

    let pages = rasterize(&input, workdir.path(), settings.dpi)?;
    info!(
        "Rendered {} pages at {} dpi, starting OCR (lang={})",
        pages.len(),
        settings.dpi,
        settings.language
    );

    let mut text = String::new();
    for (i, page) in pages.iter().enumerate() {
        text.push_str(&recognize_image(page, &settings.language, i + 1)?);
    }

    Ok(text)
}

fn rasterize(input: &Path, dir: &Path, dpi: u32) -> Result<Vec<PathBuf>, OcrError> {
    let output = run_tool(
        "pdftoppm",
        Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(dpi.to_string())
            .arg(input)
            .arg(dir.join("page")),
    )?;

    if !output.status.success() {
        return Err(OcrError::ToolFailed {
            tool: "pdftoppm",
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let mut pages = page_images(dir)?;
    if pages.is_empty() {
        return Err(OcrError::NoPages);
    }
    pages.sort_by_key(|p| page_number(p));
    Ok(pages)
}

fn run_tool(tool: &'static str, command: &mut Command) -> Result<Output, OcrError> {
    command.output().map_err(|e| spawn_error(tool, e))
}

fn spawn_error(tool: &'static str, err: io::Error) -> OcrError {
    if err.kind() == io::ErrorKind::NotFound {
        warn!("{tool} is not installed");
        OcrError::ToolsUnavailable
    } else {
        OcrError::Io(err)
    }
}

fn page_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut pages = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "png") {
            pages.push(path);
        }
    }
    Ok(pages)
}

/// pdftoppm names pages `page-1.png`, `page-01.png`, ... depending on the page count.
fn page_number(path: &Path) -> u32 {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.rsplit('-').next())
        .and_then(|n| n.parse().ok())
        .unwrap_or(u32::MAX)
}

fn recognize_image(image: &Path, language: &str, page: usize) -> Result<String, OcrError> {
    let output = run_tool(
        "tesseract",
        Command::new("tesseract")
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(language),
    )?;

    if !output.status.success() {
        // tesseract still prints whatever it could read; keep going
        warn!(
            "tesseract reported an error on page {page}: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
