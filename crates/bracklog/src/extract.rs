//! Record extractor — applies a grammar to a text blob and normalizes every
//! match into a [`LogRecord`].
//!
//! The extractor is a pure function of (text, grammar, options): no shared
//! state, no retries, and re-running identical input produces identical
//! records or an identical failure. A content decode failure aborts the
//! whole extraction unless a skip/soft policy is configured.

use crate::grammar::Grammar;
use crate::log::Log;
use crate::model::{LogRecord, ParseError, SourceId};
use crate::payload;
use crate::timeparse;

/// Named extraction policies. Each maps to one independent toggle; see
/// [`payload::normalize`] for how the JSON policies interact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Stable-sort the resulting log descending by datetime.
    pub sort_by_datetime: bool,
    /// Keep context/extra captures as cleaned raw text, never decoding.
    pub json_as_text: bool,
    /// Turn a context/extra decode failure into an absent value.
    pub skip_exceptions: bool,
    /// Turn a context/extra decode failure into the cleaned raw text.
    /// Takes priority over `skip_exceptions`.
    pub json_fail_soft: bool,
}

/// A grammar plus options, ready to run against text blobs.
#[derive(Debug, Clone)]
pub struct Extractor {
    grammar: Grammar,
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            options: ExtractOptions::default(),
        }
    }

    pub fn with_options(grammar: Grammar, options: ExtractOptions) -> Self {
        Self { grammar, options }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn options(&self) -> ExtractOptions {
        self.options
    }

    /// Extract all records from literal string input.
    pub fn extract(&self, text: &str) -> Result<Log, ParseError> {
        self.extract_from(text, &SourceId::Literal)
    }

    /// Extract all records, attributing diagnostics to `source`.
    ///
    /// Matches are collected leftmost-first without overlap, so records come
    /// out in document order before any optional sort.
    pub fn extract_from(&self, text: &str, source: &SourceId) -> Result<Log, ParseError> {
        let regex = self.grammar.compile()?;

        let mut records = Vec::new();
        for captures in regex.captures_iter(text) {
            // The backtracking engine can also reject a pattern mid-match
            // (e.g. a blown backtrack limit); both surface as grammar errors.
            let captures = captures.map_err(|err| ParseError::Grammar {
                name: self.grammar.name().to_string(),
                reason: err.to_string(),
            })?;

            let datetime_raw = captures.name("datetime").map(|m| m.as_str()).unwrap_or("");
            let datetime =
                timeparse::parse(datetime_raw).ok_or_else(|| ParseError::Datetime {
                    source_id: source.to_string(),
                    value: datetime_raw.to_string(),
                })?;

            let channel = captures
                .name("channel")
                .or_else(|| captures.name("logger"))
                .map(|m| m.as_str())
                .unwrap_or("")
                .to_string();
            let level = captures
                .name("level")
                .map(|m| m.as_str())
                .unwrap_or("")
                .to_string();
            let message = captures
                .name("message")
                .map(|m| m.as_str().trim())
                .unwrap_or("")
                .to_string();

            let context = payload::normalize(
                captures.name("context").map(|m| m.as_str()).unwrap_or("[]"),
                &self.options,
                source,
            )?;
            let extra = payload::normalize(
                captures.name("extra").map(|m| m.as_str()).unwrap_or("[]"),
                &self.options,
                source,
            )?;

            records.push(LogRecord {
                datetime,
                channel,
                level,
                message,
                context,
                extra,
            });
        }

        tracing::debug!(
            records = records.len(),
            grammar = self.grammar.name(),
            source = %source,
            "extraction complete"
        );

        let mut log = Log::new(records);
        if self.options.sort_by_datetime {
            log.sort_by_datetime(false);
        }
        Ok(log)
    }
}

/// One-shot extraction of `text` with the given grammar and options.
pub fn extract(text: &str, grammar: &Grammar, options: ExtractOptions) -> Result<Log, ParseError> {
    Extractor::with_options(grammar.clone(), options).extract(text)
}
