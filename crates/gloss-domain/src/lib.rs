//! Gloss Domain Layer
//!
//! This crate contains the entities and contracts shared by every other
//! layer of Gloss: the uploaded-file input object, the per-block and
//! per-document validation report types, the document error taxonomy, and
//! the text-extraction trait that file-format adapters implement.
//!
//! ## Key Concepts
//!
//! - **UploadedFile**: an uploaded document - name, declared media type, bytes
//! - **BlockResult**: the outcome of validating one extracted knowledge block
//! - **ValidationReport**: the per-document aggregate returned to callers
//! - **TextExtractor**: the contract a file-format adapter fulfils
//!
//! ## Architecture
//!
//! This crate sits at the bottom of the workspace dependency graph:
//! - Entities and trait definitions only, no I/O
//! - Infrastructure implementations (file-format adapters, HTTP) live in
//!   other crates
//! - The report types carry serde derives because their field names are
//!   the wire contract

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod report;
pub mod traits;
pub mod upload;

// Re-exports for convenience
pub use error::DocumentError;
pub use report::{BlockResult, ValidationReport};
pub use traits::TextExtractor;
pub use upload::UploadedFile;
