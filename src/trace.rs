//! Parse tracing
//!
//! The grammar engine performs no I/O. When tracing is enabled it records one
//! [`TraceEvent`] per named rule it tries, in the order the rules finish
//! (inner rules before the rules that contain them). Callers decide how to
//! surface them; the `edtf` binary prints them to stderr as `[TRACE]` lines.

use serde::Serialize;
use std::fmt;

/// How a rule attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// The rule matched the bytes `offset..end`
    Matched { end: usize },
    NoMatch,
}

/// One rule attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEvent {
    pub rule: &'static str,
    /// Byte offset where the attempt started
    pub offset: usize,
    #[serde(flatten)]
    pub outcome: RuleOutcome,
}

impl TraceEvent {
    pub fn matched(&self) -> bool {
        matches!(self.outcome, RuleOutcome::Matched { .. })
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            RuleOutcome::Matched { end } => {
                write!(f, "{:<34} {}..{} matched", self.rule, self.offset, end)
            }
            RuleOutcome::NoMatch => write!(f, "{:<34} {}.. no match", self.rule, self.offset),
        }
    }
}
