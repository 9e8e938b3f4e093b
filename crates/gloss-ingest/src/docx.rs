//! Text extraction for Office Open XML word-processing documents

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};
use gloss_domain::{DocumentError, TextExtractor, UploadedFile};

/// Declared media type for `.docx` uploads
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Extracts paragraph text from DOCX documents
///
/// Paragraphs are joined with newlines; run text inside a paragraph is
/// concatenated in document order. Non-paragraph content (tables, headers)
/// is skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx"
    }

    fn supports(&self, file: &UploadedFile) -> bool {
        file.has_extension(".docx") || file.declares_media_type(DOCX_MEDIA_TYPE)
    }

    fn extract_text(&self, file: &UploadedFile) -> Result<String, DocumentError> {
        let docx = read_docx(&file.data)
            .map_err(|e| DocumentError::malformed("DOCX", e.to_string()))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }
}

/// Concatenate the run texts of a single paragraph
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(t) = run_child {
                    text.push_str(&t.text);
                }
            }
        }
    }
    text
}
