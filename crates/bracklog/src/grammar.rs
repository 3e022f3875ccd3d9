//! Pattern set — named envelope grammars, one per supported log dialect.
//!
//! Every grammar is a single regular expression with named capture groups
//! `datetime`, `channel` (alias `logger`), `level`, `message`, and the
//! optional `context`/`extra`. Records anchor at line start and consume
//! through line end, so one text blob yields one match per envelope in
//! document order.

use fancy_regex::Regex;

use crate::model::ParseError;

/// Single-line dialect: `[<datetime>] <channel>.<level>: <message>[ <context>][ <extra>]`.
///
/// Context and extra are each delimited by matching `[...]` or `{...}`;
/// the context interior is non-greedy, the extra interior greedy, and up to
/// two trailing spaces are tolerated before end of line.
pub const SINGLE_LINE_PATTERN: &str = r"(?m)^\[(?P<datetime>.*)\] (?P<channel>[\w-]+)\.(?P<level>\w+): (?P<message>[^\[\{\n]+)(?P<context> (?:\[.*?\]|\{.*?\}))?(?P<extra> (?:\[.*\]|\{.*\}))?\s{0,2}$";

/// Multi-line dialect: same envelope, but message and context/extra may span
/// newlines. A record closes only when the following line begins with `[`
/// or the text ends, asserted by a lookahead that consumes nothing: brackets
/// and braces embedded in a JSON payload cannot terminate a field early, and
/// consecutive records still match independently.
pub const MULTI_LINE_PATTERN: &str = r"(?ms)^\[(?P<datetime>[^\]]*)\] (?P<channel>[\w-]+)\.(?P<level>\w+): (?P<message>[^\[\{]+)(?P<context> (?:\[.*?\]|\{.*?\}))?(?P<extra> (?:\[.*?\]|\{.*?\}))?\s{0,2}$(?=\n(?:\[|\z))";

/// Fixed-timestamp dialect: datetime constrained to `YYYY-MM-DD HH:MM:SS`,
/// a single optional `{"..."}` context object and no extra field, terminated
/// by one trailing space then line end. Emitters of this shape always leave
/// the trailing space, even with an empty context.
pub const FIXED_TIMESTAMP_PATTERN: &str = r#"(?ms)^\[(?P<datetime>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\] (?P<channel>\w+)\.(?P<level>\w+): (?P<message>.*?)(?: (?P<context>\{".*?\}))? $(?=\n(?:\z|\[))"#;

/// A named text-matching grammar for one log dialect.
///
/// Custom patterns are accepted as-is: validation is lazy, so a structurally
/// invalid pattern only surfaces as [`ParseError::Grammar`] when the
/// extractor first compiles it.
#[derive(Debug, Clone)]
pub struct Grammar {
    name: String,
    pattern: String,
}

impl Grammar {
    /// The stock single-line dialect.
    pub fn single_line() -> Self {
        Self {
            name: "single_line".to_string(),
            pattern: SINGLE_LINE_PATTERN.to_string(),
        }
    }

    /// The stock multi-line dialect (stack traces, multi-line JSON).
    pub fn multi_line() -> Self {
        Self {
            name: "multi_line".to_string(),
            pattern: MULTI_LINE_PATTERN.to_string(),
        }
    }

    /// The fixed-timestamp single-line dialect.
    pub fn fixed_timestamp() -> Self {
        Self {
            name: "fixed_timestamp".to_string(),
            pattern: FIXED_TIMESTAMP_PATTERN.to_string(),
        }
    }

    /// A caller-supplied grammar. The pattern must expose the same named
    /// groups as the stock dialects; unmatched optional groups default to
    /// absent at extraction.
    pub fn custom(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn compile(&self) -> Result<Regex, ParseError> {
        Regex::new(&self.pattern).map_err(|err| ParseError::Grammar {
            name: self.name.clone(),
            reason: err.to_string(),
        })
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::single_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_grammars_compile() {
        assert!(Grammar::single_line().compile().is_ok());
        assert!(Grammar::multi_line().compile().is_ok());
        assert!(Grammar::fixed_timestamp().compile().is_ok());
    }

    #[test]
    fn test_default_is_single_line() {
        let grammar = Grammar::default();
        assert_eq!(grammar.name(), "single_line");
        assert_eq!(grammar.pattern(), SINGLE_LINE_PATTERN);
    }

    #[test]
    fn test_custom_grammar_keeps_pattern_verbatim() {
        let grammar = Grammar::custom("mine", r"^(?P<datetime>\S+) (?P<message>.+)$");
        assert_eq!(grammar.name(), "mine");
        assert_eq!(grammar.pattern(), r"^(?P<datetime>\S+) (?P<message>.+)$");
    }

    #[test]
    fn test_invalid_custom_grammar_fails_at_compile_not_construction() {
        let grammar = Grammar::custom("broken", r"(?P<oops"); // unclosed group
        let err = grammar.compile().unwrap_err();
        match err {
            ParseError::Grammar { name, .. } => assert_eq!(name, "broken"),
            other => panic!("expected grammar error, got {other:?}"),
        }
    }
}
