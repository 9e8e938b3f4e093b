//! Adapter selection for uploaded files

use gloss_domain::{DocumentError, TextExtractor, UploadedFile};
use tracing::debug;

use crate::{DocxExtractor, JsonExtractor, PdfExtractor, PlainTextExtractor};

/// Ordered collection of format adapters
///
/// Adapters are consulted in registration order and the first one whose
/// `supports` check passes wins. The default order is DOCX, PDF, plain
/// text, JSON, so a file claimed by an earlier adapter never reaches a
/// later one.
pub struct ExtractorRegistry {
    extractors: Vec<Box<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a registry from an explicit adapter list
    pub fn new(extractors: Vec<Box<dyn TextExtractor>>) -> Self {
        Self { extractors }
    }

    /// Create a registry with the standard four adapters
    pub fn with_default_extractors() -> Self {
        Self::new(vec![
            Box::new(DocxExtractor),
            Box::new(PdfExtractor),
            Box::new(PlainTextExtractor),
            Box::new(JsonExtractor),
        ])
    }

    /// Find the first adapter that claims the given file
    ///
    /// Returns [`DocumentError::UnsupportedMediaType`] carrying the file's
    /// declared media type when no adapter matches.
    pub fn select(&self, file: &UploadedFile) -> Result<&dyn TextExtractor, DocumentError> {
        for extractor in &self.extractors {
            if extractor.supports(file) {
                debug!(
                    "Selected {} extractor for '{}'",
                    extractor.name(),
                    file.filename
                );
                return Ok(extractor.as_ref());
            }
        }

        let declared = file.media_type.as_deref().unwrap_or("unknown");
        Err(DocumentError::UnsupportedMediaType(declared.to_string()))
    }

    /// Select an adapter and run it against the file
    pub fn extract_text(&self, file: &UploadedFile) -> Result<String, DocumentError> {
        self.select(file)?.extract_text(file)
    }

    /// Names of the registered adapters, in priority order
    pub fn format_names(&self) -> Vec<&'static str> {
        self.extractors.iter().map(|e| e.name()).collect()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_default_extractors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::DOCX_MEDIA_TYPE;

    #[derive(Debug)]
    struct FixedExtractor {
        name: &'static str,
        ext: &'static str,
        text: &'static str,
    }

    impl TextExtractor for FixedExtractor {
        fn name(&self) -> &'static str {
            self.name
        }

        fn supports(&self, file: &UploadedFile) -> bool {
            file.has_extension(self.ext)
        }

        fn extract_text(&self, _file: &UploadedFile) -> Result<String, DocumentError> {
            Ok(self.text.to_string())
        }
    }

    #[test]
    fn test_default_adapter_order() {
        let registry = ExtractorRegistry::with_default_extractors();
        assert_eq!(registry.format_names(), vec!["docx", "pdf", "text", "json"]);
    }

    #[test]
    fn test_selects_by_extension() {
        let registry = ExtractorRegistry::with_default_extractors();

        let cases = [
            ("report.docx", "docx"),
            ("paper.pdf", "pdf"),
            ("notes.txt", "text"),
            ("data.json", "json"),
        ];
        for (filename, expected) in cases {
            let file = UploadedFile::new(filename, None, vec![]);
            assert_eq!(registry.select(&file).unwrap().name(), expected);
        }
    }

    #[test]
    fn test_selects_by_media_type() {
        let registry = ExtractorRegistry::with_default_extractors();

        let file = UploadedFile::new("upload", Some(DOCX_MEDIA_TYPE.to_string()), vec![]);
        assert_eq!(registry.select(&file).unwrap().name(), "docx");
    }

    #[test]
    fn test_earlier_adapter_wins_over_later_extension() {
        let registry = ExtractorRegistry::with_default_extractors();

        // Plain text sits before JSON, so a declared text/plain beats the
        // .json extension.
        let file = UploadedFile::new("data.json", Some("text/plain".to_string()), vec![]);
        assert_eq!(registry.select(&file).unwrap().name(), "text");
    }

    #[test]
    fn test_first_registered_match_wins() {
        let registry = ExtractorRegistry::new(vec![
            Box::new(FixedExtractor {
                name: "first",
                ext: ".dat",
                text: "from first",
            }),
            Box::new(FixedExtractor {
                name: "second",
                ext: ".dat",
                text: "from second",
            }),
        ]);

        let file = UploadedFile::new("blob.dat", None, vec![]);
        assert_eq!(registry.extract_text(&file).unwrap(), "from first");
    }

    #[test]
    fn test_unknown_type_is_unsupported() {
        let registry = ExtractorRegistry::with_default_extractors();

        let file = UploadedFile::new(
            "slides.pptx",
            Some("application/vnd.ms-powerpoint".to_string()),
            vec![],
        );
        let err = registry.select(&file).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::UnsupportedMediaType(ref t) if t == "application/vnd.ms-powerpoint"
        ));
    }

    #[test]
    fn test_unsupported_without_declared_type() {
        let registry = ExtractorRegistry::with_default_extractors();

        let file = UploadedFile::new("mystery.bin", None, vec![]);
        let err = registry.select(&file).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported file type: unknown");
    }

    #[test]
    fn test_extract_text_runs_selected_adapter() {
        let registry = ExtractorRegistry::with_default_extractors();

        let file = UploadedFile::new("notes.txt", None, b"plain content".to_vec());
        assert_eq!(registry.extract_text(&file).unwrap(), "plain content");
    }
}
