//! Text extraction for JSON files

use gloss_domain::{DocumentError, TextExtractor, UploadedFile};

/// Declared media type for `.json` uploads
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Validates JSON files and returns their raw text
///
/// The whole file must parse as a single JSON value; the original text is
/// returned unchanged so that marker scanning sees exactly what was
/// uploaded, not a re-serialized form.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExtractor;

impl TextExtractor for JsonExtractor {
    fn name(&self) -> &'static str {
        "json"
    }

    fn supports(&self, file: &UploadedFile) -> bool {
        file.has_extension(".json") || file.declares_media_type(JSON_MEDIA_TYPE)
    }

    fn extract_text(&self, file: &UploadedFile) -> Result<String, DocumentError> {
        let text = std::str::from_utf8(&file.data)
            .map_err(|e| DocumentError::malformed("JSON", e.to_string()))?;

        serde_json::from_str::<serde_json::Value>(text)
            .map_err(|e| DocumentError::malformed("JSON", e.to_string()))?;

        Ok(text.to_owned())
    }
}
