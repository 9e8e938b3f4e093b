//! Gloss Extractor
//!
//! Finds and validates knowledge blocks in uploaded documents.
//!
//! # Overview
//!
//! Documents carry knowledge blocks as JSON objects fenced by the literal
//! markers `BEGIN_KNOWLEDGE` and `END_KNOWLEDGE`. This crate locates those
//! blocks in extracted text, checks each one for well-formedness, and
//! aggregates the verdicts into a per-file report.
//!
//! # Architecture
//!
//! ```text
//! UploadedFile → ExtractorRegistry → text → BlockExtractor → JsonValidator → ValidationReport
//! ```
//!
//! # Example Usage
//!
//! ```
//! use gloss_extractor::ValidationService;
//! use gloss_domain::UploadedFile;
//!
//! let service = ValidationService::with_defaults();
//!
//! let data = br#"notes BEGIN_KNOWLEDGE {"fact": "water boils at 100C"} END_KNOWLEDGE"#;
//! let file = UploadedFile::new("notes.txt", None, data.to_vec());
//!
//! let report = service.validate_document(&file).unwrap();
//! assert_eq!(report.blocks_found, 1);
//! assert_eq!(report.valid_blocks, 1);
//! ```

#![warn(missing_docs)]

mod blocks;
mod service;

#[cfg(test)]
mod tests;

pub use blocks::{BlockExtractor, BEGIN_MARKER, END_MARKER};
pub use service::ValidationService;
