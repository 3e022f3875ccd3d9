//! bracklog — parser for bracketed-envelope application logs.
//!
//! Given text produced by a structured logger
//! (`[timestamp] channel.LEVEL: message [context] {extra}`), the extractor
//! applies a dialect grammar and yields typed, read-only records.
//!
//! # Architecture
//!
//! - `grammar.rs`: the pattern set (stock dialects and custom grammars)
//! - `extract.rs`: the record extractor and its option flags
//! - `payload.rs`: JSON normalization of context/extra captures
//! - `timeparse.rs`: format-flexible envelope timestamp parsing
//! - `log.rs` / `model.rs`: the result collection and record/error model
//! - `source.rs`: file-backed front end with a cached result
//!
//! Single-threaded and synchronous throughout; extraction is a pure
//! function of (text, grammar, options). The multi-line dialects ride on a
//! backtracking regex engine, so adversarial input can backtrack heavily;
//! callers parsing untrusted blobs should bound input size.

// Core parsing engine
pub mod extract;
pub mod grammar;
pub mod log;
pub mod model;
pub mod payload;
pub mod timeparse;

// Source plumbing
pub mod source;

// Re-export commonly used types
pub use extract::{extract, ExtractOptions, Extractor};
pub use grammar::Grammar;
pub use log::Log;
pub use model::{LogRecord, ParseError, Payload, SourceId};
pub use source::Parser;
