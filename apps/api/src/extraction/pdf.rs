use std::panic::{self, AssertUnwindSafe};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("PDF parsing failed: {0}")]
    Parse(String),

    #[error("PDF parser panicked (malformed document)")]
    Panicked,
}

/// Reads the embedded text layer, concatenating pages in order with no separator.
///
/// `pdf_extract` can panic on malformed input instead of returning an error,
/// so the call runs behind `catch_unwind`.
pub fn extract_text_layer(content: &[u8]) -> Result<String, PdfError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(content)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages.concat()),
        Ok(Err(e)) => Err(PdfError::Parse(e.to_string())),
        Err(_) => Err(PdfError::Panicked),
    }
}
