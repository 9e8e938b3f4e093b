//! Document error taxonomy

use thiserror::Error;

/// Errors raised while turning an uploaded file into text
///
/// Both variants are fatal for the request that produced them; the
/// pipeline propagates them unchanged and the boundary maps them to
/// status codes.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No adapter claims the file's name or declared media type
    #[error("Unsupported file type: {0}")]
    UnsupportedMediaType(String),

    /// An adapter claimed the file but could not decode its bytes
    #[error("{format} processing failed: {reason}")]
    Malformed {
        /// Short name of the format whose adapter failed
        format: &'static str,
        /// Underlying decode/parse failure
        reason: String,
    },
}

impl DocumentError {
    /// Convenience constructor for adapter decode failures
    pub fn malformed(format: &'static str, reason: impl Into<String>) -> Self {
        DocumentError::Malformed {
            format,
            reason: reason.into(),
        }
    }
}
