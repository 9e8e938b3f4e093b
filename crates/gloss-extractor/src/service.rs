//! Orchestrates extraction, block discovery, and per-block validation

use gloss_domain::{BlockResult, DocumentError, UploadedFile, ValidationReport};
use gloss_ingest::ExtractorRegistry;
use gloss_validator::JsonValidator;
use tracing::info;

use crate::blocks::BlockExtractor;

/// Reported file type when the upload declares no media type
const FALLBACK_FILE_TYPE: &str = "application/octet-stream";

/// Runs the full validation pipeline for one uploaded file
///
/// The pipeline is synchronous and stateless: select an adapter, extract
/// text, discover blocks, judge each block, aggregate. All collaborators
/// are injected at construction and shared read-only across requests.
pub struct ValidationService {
    registry: ExtractorRegistry,
    blocks: BlockExtractor,
    validator: JsonValidator,
}

impl ValidationService {
    /// Create a service from explicit collaborators
    pub fn new(
        registry: ExtractorRegistry,
        blocks: BlockExtractor,
        validator: JsonValidator,
    ) -> Self {
        Self {
            registry,
            blocks,
            validator,
        }
    }

    /// Create a service with the standard adapters and components
    pub fn with_defaults() -> Self {
        Self::new(
            ExtractorRegistry::with_default_extractors(),
            BlockExtractor::new(),
            JsonValidator::new(),
        )
    }

    /// Validate every knowledge block in the uploaded file
    ///
    /// Extraction failures short-circuit: no partial report is produced.
    /// An empty candidate sequence is a valid report with
    /// `blocks_found == 0`; rejecting that case is the caller's decision.
    pub fn validate_document(&self, file: &UploadedFile) -> Result<ValidationReport, DocumentError> {
        let text = self.registry.extract_text(file)?;
        let candidates = self.blocks.extract_blocks(&text);
        let results = self.judge_blocks(candidates);

        let file_type = file
            .media_type
            .clone()
            .unwrap_or_else(|| FALLBACK_FILE_TYPE.to_string());
        let report = ValidationReport::from_results(file_type, results);

        info!(
            "Validated '{}': {} blocks found, {} valid",
            file.filename, report.blocks_found, report.valid_blocks
        );
        Ok(report)
    }

    /// Names of the formats the underlying registry can ingest
    pub fn supported_formats(&self) -> Vec<&'static str> {
        self.registry.format_names()
    }

    /// Judge candidates in order, assigning 1-based ordinals
    fn judge_blocks(&self, candidates: Vec<String>) -> Vec<BlockResult> {
        candidates
            .into_iter()
            .enumerate()
            .map(|(idx, content)| {
                let valid = self.validator.validate(&content);
                BlockResult {
                    block_number: idx + 1,
                    valid,
                    error: if valid {
                        None
                    } else {
                        Some("Invalid JSON".to_string())
                    },
                    content,
                }
            })
            .collect()
    }
}

impl Default for ValidationService {
    fn default() -> Self {
        Self::with_defaults()
    }
}
