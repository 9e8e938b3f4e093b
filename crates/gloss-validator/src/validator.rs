//! JSON well-formedness checking

use serde_json::Value;
use tracing::warn;

/// Checks whether block payloads are well-formed JSON
///
/// Validation is a pure predicate. The payload is parsed and discarded;
/// nothing beyond syntactic well-formedness is checked, so any JSON value
/// (object, array, scalar) passes.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonValidator;

impl JsonValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Check whether `content` parses as a single JSON value
    ///
    /// Failures are logged at warning level with the parser's diagnostic
    /// and reported as `false`; the caller decides what to do with the
    /// verdict.
    pub fn validate(&self, content: &str) -> bool {
        match serde_json::from_str::<Value>(content) {
            Ok(_) => true,
            Err(e) => {
                warn!("Invalid JSON detected: {}", e);
                false
            }
        }
    }
}
