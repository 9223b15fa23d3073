//! Error types
//!
//! Parsing has exactly one failure mode, [`SyntaxError`]: no alternative of
//! the grammar matched the whole input. Everything above the parser
//! (configuration, output formats, file input) reports [`ProcessingError`].

use std::fmt;

/// No grammar alternative matched the entire input.
///
/// `offset` is the byte offset of the furthest position any alternative
/// reached before failing, and `found` the character sitting there (`None`
/// at end of input).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("syntax error at offset {offset}: {}", Found(.found))]
pub struct SyntaxError {
    pub offset: usize,
    pub found: Option<char>,
}

impl SyntaxError {
    pub fn new(offset: usize, found: Option<char>) -> Self {
        Self { offset, found }
    }

    /// Build the error for a failure at byte `offset` of `source`
    pub fn at(source: &str, offset: usize) -> Self {
        let found = source.get(offset..).and_then(|rest| rest.chars().next());
        Self::new(offset, found)
    }
}

struct Found<'a>(&'a Option<char>);

impl fmt::Display for Found<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "unexpected {c:?}"),
            None => f.write_str("unexpected end of input"),
        }
    }
}

/// Errors that can occur while processing EDTF input for output
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("line {line}: {input:?}: {source}")]
    Syntax {
        line: usize,
        input: String,
        source: SyntaxError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_at_character() {
        let error = SyntaxError::at("1999-13", 6);
        assert_eq!(error.found, Some('3'));
        assert_eq!(error.to_string(), "syntax error at offset 6: unexpected '3'");
    }

    #[test]
    fn test_syntax_error_at_end() {
        let error = SyntaxError::at("1984-", 5);
        assert_eq!(error.found, None);
        assert_eq!(
            error.to_string(),
            "syntax error at offset 5: unexpected end of input"
        );
    }

    #[test]
    fn test_processing_error_wraps_syntax_error() {
        let error = ProcessingError::Syntax {
            line: 3,
            input: "open/2004".to_string(),
            source: SyntaxError::at("open/2004", 0),
        };
        assert_eq!(
            error.to_string(),
            "line 3: \"open/2004\": syntax error at offset 0: unexpected 'o'"
        );
    }
}
