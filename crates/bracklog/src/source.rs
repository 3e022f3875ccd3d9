//! Source plumbing — a file-backed front end over the extractor.
//!
//! The parser owns a grammar, options, an optional log file, and a cached
//! result. Files are read fully into memory before extraction; diagnostics
//! name the file path, or `[STRING]` for literal input.

use std::fs;
use std::path::{Path, PathBuf};

use crate::extract::{ExtractOptions, Extractor};
use crate::grammar::Grammar;
use crate::log::Log;
use crate::model::{ParseError, SourceId};

#[derive(Debug, Default)]
pub struct Parser {
    grammar: Grammar,
    options: ExtractOptions,
    file: Option<PathBuf>,
    records: Option<Log>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser bound to an existing log file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let mut parser = Self::new();
        parser.set_file(path)?;
        Ok(parser)
    }

    /// Point the parser at an existing log file. Any cached records from a
    /// previous file are dropped.
    pub fn set_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, ParseError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ParseError::FileNotFound(path.to_path_buf()));
        }
        self.file = Some(path.to_path_buf());
        self.records = None;
        Ok(self)
    }

    /// True when a readable file is set, so [`Parser::parse`] can run.
    pub fn is_ready(&self) -> bool {
        self.file.as_deref().map(Path::is_file).unwrap_or(false)
    }

    pub fn set_grammar(&mut self, grammar: Grammar) -> &mut Self {
        self.grammar = grammar;
        self
    }

    pub fn set_options(&mut self, options: ExtractOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// The identifier used in diagnostics: the file path when one is set,
    /// the `[STRING]` sentinel otherwise.
    pub fn source_id(&self) -> SourceId {
        match &self.file {
            Some(path) => SourceId::File(path.clone()),
            None => SourceId::Literal,
        }
    }

    /// Read the whole file and parse it, replacing the cache.
    pub fn parse(&mut self) -> Result<&mut Self, ParseError> {
        let path = self.file.clone().ok_or(ParseError::NotReady)?;
        let text = fs::read_to_string(&path).map_err(|source| ParseError::Io {
            path: path.clone(),
            source,
        })?;
        self.parse_text(&text)
    }

    /// Parse literal string input, replacing the cache. The file (if any)
    /// stays set and still names diagnostics.
    pub fn parse_str(&mut self, text: &str) -> Result<&mut Self, ParseError> {
        self.parse_text(text)
    }

    fn parse_text(&mut self, text: &str) -> Result<&mut Self, ParseError> {
        let extractor = Extractor::with_options(self.grammar.clone(), self.options);
        let log = extractor.extract_from(text, &self.source_id())?;
        tracing::debug!(records = log.len(), source = %self.source_id(), "parse finished");
        self.records = Some(log);
        Ok(self)
    }

    /// The cached records; parses the file first if nothing is cached yet.
    pub fn get(&mut self) -> Result<&Log, ParseError> {
        if self.records.is_none() {
            self.parse()?;
        }
        match &self.records {
            Some(log) => Ok(log),
            None => Err(ParseError::NotReady),
        }
    }

    /// Drop the cache and re-parse.
    pub fn get_fresh(&mut self) -> Result<&Log, ParseError> {
        self.clear();
        self.get()
    }

    /// Drop the cached records from the last parse.
    pub fn clear(&mut self) -> &mut Self {
        self.records = None;
        self
    }
}
