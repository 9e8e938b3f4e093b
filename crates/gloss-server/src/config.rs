//! Configuration file parsing for the validation server.
//!
//! Loads settings from TOML files including bind address, upload size cap,
//! and the client-facing failure messages.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Headroom the transport body limit gets above the raw upload cap, to
/// cover multipart framing
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Maximum accepted upload size in bytes (default: 10 MiB)
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Client-facing failure messages
    #[serde(default)]
    pub error_messages: ErrorMessages,
}

/// Messages returned to clients for each failure class
///
/// Every field has a default, so a config file may override any subset
/// under an `[error_messages]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorMessages {
    /// Returned with status 400 when a document contains no knowledge blocks
    #[serde(default = "default_no_blocks")]
    pub no_blocks: String,

    /// Returned with status 413 when an upload exceeds the size cap
    #[serde(default = "default_payload_too_large")]
    pub payload_too_large: String,

    /// Returned with status 415 when no adapter claims the file
    #[serde(default = "default_unsupported_type")]
    pub unsupported_type: String,

    /// Returned with status 422 when the request carries no file field
    #[serde(default = "default_missing_file")]
    pub missing_file: String,

    /// Returned with status 500 for anything unexpected
    #[serde(default = "default_internal_error")]
    pub internal_error: String,
}

impl Default for ErrorMessages {
    fn default() -> Self {
        ErrorMessages {
            no_blocks: default_no_blocks(),
            payload_too_large: default_payload_too_large(),
            unsupported_type: default_unsupported_type(),
            missing_file: default_missing_file(),
            internal_error: default_internal_error(),
        }
    }
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_no_blocks() -> String {
    "No knowledge blocks found in the document".to_string()
}

fn default_payload_too_large() -> String {
    "Uploaded file exceeds the maximum allowed size".to_string()
}

fn default_unsupported_type() -> String {
    "Unsupported file type. Upload a DOCX, PDF, TXT, or JSON document".to_string()
}

fn default_missing_file() -> String {
    "No file was provided in the request".to_string()
}

fn default_internal_error() -> String {
    "Internal server error during validation".to_string()
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            max_upload_bytes: default_max_upload_bytes(),
            error_messages: ErrorMessages::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Transport-level body limit: the upload cap plus multipart framing
    /// headroom, so the in-handler cap check sees bodies near the limit
    /// instead of the transport rejecting them first
    pub fn body_limit_bytes(&self) -> usize {
        self.max_upload_bytes + MULTIPART_OVERHEAD
    }
}
