//! Trait definitions for external interactions
//!
//! These traits define the boundary between the validation pipeline and
//! infrastructure. Implementations live in other crates.

use crate::{DocumentError, UploadedFile};

/// Trait for decoding an uploaded file into plain text
///
/// Implemented by the infrastructure layer (gloss-ingest), one
/// implementation per supported file format. Implementations must be
/// stateless: the same bytes always decode to the same text.
pub trait TextExtractor: Send + Sync + std::fmt::Debug {
    /// Short format name used in logs and capability listings
    fn name(&self) -> &'static str;

    /// Whether this extractor claims the file
    ///
    /// Checked against the filename suffix or the declared media type;
    /// either is sufficient.
    fn supports(&self, file: &UploadedFile) -> bool;

    /// Decode the file's bytes into a single text string
    fn extract_text(&self, file: &UploadedFile) -> Result<String, DocumentError>;
}
