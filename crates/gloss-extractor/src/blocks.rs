//! Locate marker-delimited knowledge blocks in extracted text

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

/// Literal token opening a knowledge block
pub const BEGIN_MARKER: &str = "BEGIN_KNOWLEDGE";

/// Literal token closing a knowledge block
pub const END_MARKER: &str = "END_KNOWLEDGE";

// One marker pair around a brace-delimited payload. The alternation inside
// the capture tolerates nested `{...}` runs; `(?s)` lets payloads span lines.
static BLOCK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)BEGIN_KNOWLEDGE\s*(\{(?:[^{}]|(?:\{.*?\}))*\})\s*END_KNOWLEDGE").unwrap()
});

/// Scans text for `BEGIN_KNOWLEDGE` / `END_KNOWLEDGE` pairs
///
/// Matching is non-overlapping, left to right. Each captured payload is
/// parsed as JSON on the spot: parse failures are dropped here with a
/// warning and never reach the report, so downstream consumers only see
/// payloads that parsed at least once.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockExtractor;

impl BlockExtractor {
    /// Create a new block extractor
    pub fn new() -> Self {
        Self
    }

    /// Return the payloads of all retained knowledge blocks in `text`, in
    /// first-occurrence order
    ///
    /// Matcher behavior, in detail:
    ///
    /// - zero marker pairs yield an empty sequence;
    /// - a payload that is not brace-shaped never matches and is invisible;
    /// - balanced payloads are captured whole at any nesting depth;
    /// - an unbalanced payload either fails to match at all or captures a
    ///   span that then fails the JSON parse and is dropped;
    /// - a bare `{` or `}` inside a JSON string breaks the match;
    /// - two objects between one marker pair do not match;
    /// - whitespace between markers and braces is optional, and payloads
    ///   may span multiple lines.
    pub fn extract_blocks(&self, text: &str) -> Vec<String> {
        let mut blocks = Vec::new();

        for captures in BLOCK_PATTERN.captures_iter(text) {
            let payload = &captures[1];
            match serde_json::from_str::<Value>(payload) {
                Ok(_) => {
                    debug!("Found valid JSON block: {}...", preview(payload));
                    blocks.push(payload.trim().to_string());
                }
                Err(e) => {
                    warn!("Invalid JSON block skipped: {}", e);
                }
            }
        }

        blocks
    }
}

/// First 50 characters of a payload, for log lines
fn preview(payload: &str) -> String {
    payload.chars().take(50).collect()
}
