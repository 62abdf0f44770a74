//! DOCX paragraph extraction: parse the package with `docx-rs` and collect the
//! run text of every body paragraph, in document order.

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("not a readable DOCX document: {0}")]
    Read(#[from] docx_rs::ReaderError),
}

/// Returns every paragraph's text joined by `\n`. Empty paragraphs are kept.
pub fn extract_paragraphs(content: &[u8]) -> Result<String, DocxError> {
    let docx = docx_rs::read_docx(content)?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&para.children, &mut text);
    text
}

// Tab stops live in the paragraph properties, not here, so only run-level
// tabs contribute a '\t'.
fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
