//! Model — LogRecord, payload values, source identifiers, and the error taxonomy.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// One parsed log entry.
///
/// Constructed by the extractor from a single envelope match and read-only
/// afterwards; a [`Log`](crate::log::Log) hands out shared references only.
/// Serializes as a JSON object so parsed logs can be exported downstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    /// Absolute timestamp parsed from the bracketed envelope datetime.
    pub datetime: DateTime<Utc>,
    /// Logging source token (word and hyphen characters in the stock dialects).
    pub channel: String,
    /// Severity token, uppercase by convention but not enforced.
    pub level: String,
    /// Free text, trimmed of surrounding whitespace.
    pub message: String,
    /// Caller-supplied diagnostic payload.
    pub context: Payload,
    /// Logger-injected metadata payload.
    pub extra: Payload,
}

/// A decoded context/extra value.
///
/// Mirrors the shapes a JSON payload field can take after normalization:
/// an object, an array, raw text (when decoding is skipped or soft-failed),
/// or nothing at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// Structured mapping from a JSON object.
    Map(serde_json::Map<String, Value>),
    /// Ordered list from a JSON array, or a bare scalar wrapped into one.
    List(Vec<Value>),
    /// Raw cleaned text, kept undecoded by policy.
    Text(String),
    /// No value (decoded `null`, or a skipped decode failure).
    Absent,
}

impl Payload {
    pub fn is_absent(&self) -> bool {
        matches!(self, Payload::Absent)
    }

    /// True when the payload carries no content at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Map(map) => map.is_empty(),
            Payload::List(items) => items.is_empty(),
            Payload::Text(text) => text.is_empty(),
            Payload::Absent => true,
        }
    }

    pub fn as_map(&self) -> Option<&serde_json::Map<String, Value>> {
        match self {
            Payload::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Payload::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }
}

impl Default for Payload {
    /// The empty list, matching a dialect match with no context/extra group.
    fn default() -> Self {
        Payload::List(Vec::new())
    }
}

/// Where the parsed text came from, used only in diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SourceId {
    /// Literal string input.
    #[default]
    Literal,
    /// A log file on disk.
    File(PathBuf),
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceId::Literal => f.write_str("[STRING]"),
            SourceId::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Parser is not ready")]
    NotReady,

    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The active pattern was rejected by the regex engine. Surfaced at
    /// extraction time, never at grammar construction.
    #[error("Invalid grammar {name}: {reason}")]
    Grammar { name: String, reason: String },

    /// A context/extra capture was not valid JSON and no soft policy applied.
    #[error("Failed to parse {source_id}\n{detail}")]
    Content { source_id: String, detail: String },

    /// A captured datetime could not be interpreted. Always fatal.
    #[error("Failed to parse {source_id}\nUnparseable datetime: {value}")]
    Datetime { source_id: String, value: String },
}
