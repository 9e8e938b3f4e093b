//! Gloss Ingest Layer
//!
//! Format adapters that turn uploaded document bytes into plain text.
//!
//! # Architecture
//!
//! This crate provides implementations of the `TextExtractor` trait from
//! `gloss-domain`, one per supported upload format, plus the
//! [`ExtractorRegistry`] that picks the right adapter for a given file.
//!
//! # Adapters
//!
//! - `DocxExtractor`: Office Open XML word-processing documents
//! - `PdfExtractor`: PDF documents
//! - `PlainTextExtractor`: UTF-8 text files
//! - `JsonExtractor`: JSON files (validated as a whole, returned verbatim)
//! - `MockExtractor`: Deterministic mock for testing
//!
//! # Examples
//!
//! ```
//! use gloss_ingest::ExtractorRegistry;
//! use gloss_domain::UploadedFile;
//!
//! let registry = ExtractorRegistry::with_default_extractors();
//! let file = UploadedFile::new("notes.txt", None, b"hello".to_vec());
//! let text = registry.extract_text(&file).unwrap();
//! assert_eq!(text, "hello");
//! ```

#![warn(missing_docs)]

pub mod docx;
pub mod json;
pub mod pdf;
pub mod registry;
pub mod text;

use gloss_domain::{DocumentError, TextExtractor, UploadedFile};
use std::sync::{Arc, Mutex};

pub use docx::DocxExtractor;
pub use json::JsonExtractor;
pub use pdf::PdfExtractor;
pub use registry::ExtractorRegistry;
pub use text::PlainTextExtractor;

/// Mock text extractor for deterministic testing
///
/// Claims every file and returns a pre-configured text (or failure) without
/// looking at the bytes. Useful for exercising the validation pipeline
/// without real document payloads.
///
/// # Examples
///
/// ```
/// use gloss_ingest::MockExtractor;
/// use gloss_domain::{TextExtractor, UploadedFile};
///
/// let extractor = MockExtractor::new("canned text");
/// let file = UploadedFile::new("anything.bin", None, vec![0, 1, 2]);
/// assert!(extractor.supports(&file));
/// assert_eq!(extractor.extract_text(&file).unwrap(), "canned text");
/// ```
#[derive(Debug, Clone)]
pub struct MockExtractor {
    text: String,
    failure: Option<String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockExtractor {
    /// Create a mock that returns the given text for every file
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failure: None,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock that fails every extraction with the given reason
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            failure: Some(reason.into()),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the number of times `extract_text` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockExtractor {
    fn default() -> Self {
        Self::new("Default mock text")
    }
}

impl TextExtractor for MockExtractor {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn supports(&self, _file: &UploadedFile) -> bool {
        true
    }

    fn extract_text(&self, _file: &UploadedFile) -> Result<String, DocumentError> {
        *self.call_count.lock().unwrap() += 1;

        match &self.failure {
            Some(reason) => Err(DocumentError::malformed("Mock", reason.clone())),
            None => Ok(self.text.clone()),
        }
    }
}
