//! Gloss Validator
//!
//! Judges candidate knowledge blocks for well-formedness.
//!
//! The validator is deliberately narrow: it answers one question, "does this
//! payload parse as JSON", and leaves schema or content rules to future
//! layers.
//!
//! # Examples
//!
//! ```
//! use gloss_validator::JsonValidator;
//!
//! let validator = JsonValidator::new();
//! assert!(validator.validate(r#"{"fact": "water boils at 100C"}"#));
//! assert!(!validator.validate(r#"{"fact": }"#));
//! ```

#![warn(missing_docs)]

mod validator;

pub use validator::JsonValidator;
