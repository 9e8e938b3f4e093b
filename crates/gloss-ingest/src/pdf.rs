//! Text extraction for PDF documents

use gloss_domain::{DocumentError, TextExtractor, UploadedFile};

/// Declared media type for `.pdf` uploads
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Extracts text content from PDF documents via the `pdf-extract` crate
///
/// Page layout is flattened to plain text; encrypted or damaged documents
/// surface as [`DocumentError::Malformed`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn supports(&self, file: &UploadedFile) -> bool {
        file.has_extension(".pdf") || file.declares_media_type(PDF_MEDIA_TYPE)
    }

    fn extract_text(&self, file: &UploadedFile) -> Result<String, DocumentError> {
        pdf_extract::extract_text_from_mem(&file.data)
            .map_err(|e| DocumentError::malformed("PDF", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_by_extension() {
        let extractor = PdfExtractor;
        let file = UploadedFile::new("paper.PDF", None, vec![]);
        assert!(extractor.supports(&file));
    }

    #[test]
    fn test_supports_by_media_type() {
        let extractor = PdfExtractor;
        let file = UploadedFile::new("upload", Some(PDF_MEDIA_TYPE.to_string()), vec![]);
        assert!(extractor.supports(&file));
    }

    #[test]
    fn test_rejects_other_files() {
        let extractor = PdfExtractor;
        let file = UploadedFile::new("paper.docx", Some("text/plain".to_string()), vec![]);
        assert!(!extractor.supports(&file));
    }

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let file = UploadedFile::new("broken.pdf", None, b"%PDF-not really".to_vec());

        let result = PdfExtractor.extract_text(&file);
        assert!(matches!(
            result,
            Err(DocumentError::Malformed { format: "PDF", .. })
        ));
    }
}
