//! Validation report entities
//!
//! These types are the response contract of the whole service; their serde
//! field names are what callers see on the wire.

use serde::{Deserialize, Serialize};

/// Outcome of validating a single extracted knowledge block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockResult {
    /// 1-based position of the block in document order
    pub block_number: usize,

    /// Whether the payload parsed as well-formed JSON
    pub valid: bool,

    /// The trimmed block payload, verbatim
    pub content: String,

    /// Failure reason when `valid` is false
    pub error: Option<String>,
}

/// Per-document validation report
///
/// Always built through [`ValidationReport::from_results`] so that the
/// counts and the result list cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Declared media type of the uploaded file
    pub file_type: String,

    /// Number of knowledge blocks retained by extraction
    pub blocks_found: usize,

    /// Number of retained blocks that validated
    pub valid_blocks: usize,

    /// Number of retained blocks that failed validation
    pub invalid_blocks: usize,

    /// Per-block results, ordinals strictly increasing from 1
    pub results: Vec<BlockResult>,
}

impl ValidationReport {
    /// Build a report from per-block results, deriving every count
    ///
    /// Guarantees `blocks_found == valid_blocks + invalid_blocks ==
    /// results.len()` by construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloss_domain::{BlockResult, ValidationReport};
    ///
    /// let results = vec![BlockResult {
    ///     block_number: 1,
    ///     valid: true,
    ///     content: r#"{"a":1}"#.to_string(),
    ///     error: None,
    /// }];
    /// let report = ValidationReport::from_results("text/plain", results);
    /// assert_eq!(report.blocks_found, 1);
    /// assert_eq!(report.valid_blocks, 1);
    /// assert_eq!(report.invalid_blocks, 0);
    /// ```
    pub fn from_results(file_type: impl Into<String>, results: Vec<BlockResult>) -> Self {
        let valid_blocks = results.iter().filter(|r| r.valid).count();
        let invalid_blocks = results.len() - valid_blocks;

        Self {
            file_type: file_type.into(),
            blocks_found: results.len(),
            valid_blocks,
            invalid_blocks,
            results,
        }
    }
}
