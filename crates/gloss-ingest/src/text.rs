//! Text extraction for plain text files

use gloss_domain::{DocumentError, TextExtractor, UploadedFile};

/// Declared media type for `.txt` uploads
pub const TEXT_MEDIA_TYPE: &str = "text/plain";

/// Passes UTF-8 text files through unchanged
///
/// Decoding is strict: bytes that are not valid UTF-8 surface as
/// [`DocumentError::Malformed`] rather than being replaced.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn name(&self) -> &'static str {
        "text"
    }

    fn supports(&self, file: &UploadedFile) -> bool {
        file.has_extension(".txt") || file.declares_media_type(TEXT_MEDIA_TYPE)
    }

    fn extract_text(&self, file: &UploadedFile) -> Result<String, DocumentError> {
        std::str::from_utf8(&file.data)
            .map(str::to_owned)
            .map_err(|e| DocumentError::malformed("Text file", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_by_extension() {
        let extractor = PlainTextExtractor;
        let file = UploadedFile::new("NOTES.TXT", None, vec![]);
        assert!(extractor.supports(&file));
    }

    #[test]
    fn test_supports_by_media_type() {
        let extractor = PlainTextExtractor;
        let file = UploadedFile::new("upload", Some(TEXT_MEDIA_TYPE.to_string()), vec![]);
        assert!(extractor.supports(&file));
    }

    #[test]
    fn test_passes_utf8_through() {
        let file = UploadedFile::new("notes.txt", None, "héllo wörld".as_bytes().to_vec());

        let text = PlainTextExtractor.extract_text(&file).unwrap();
        assert_eq!(text, "héllo wörld");
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let file = UploadedFile::new("binary.txt", None, vec![0xff, 0xfe, 0x00]);

        let result = PlainTextExtractor.extract_text(&file);
        assert!(matches!(
            result,
            Err(DocumentError::Malformed {
                format: "Text file",
                ..
            })
        ));
    }
}
