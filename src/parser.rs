//! EDTF grammar engine
//!
//! A hand-written recursive descent parser over the token stream produced by
//! [`crate::lexer`]. Rules are layered, each built only from the layers
//! before it:
//!
//! - `atoms`: fixed-width digit ranges
//! - `fields`: year, month, day, hours, minutes, seconds
//! - `composite`: dates, times, timezones, date-times
//! - `qualifiers`: uncertain/approximate, unspecified dates, long years
//! - `extended`: intervals and seasons
//!
//! The dispatcher in this module tries the level 1 alternatives before the
//! level 0 ones. Every top-level alternative has to consume the whole input;
//! one that matches only a prefix hands over to the next.

mod atoms;
mod composite;
mod cursor;
mod extended;
mod fields;
mod qualifiers;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ast::{Date, Edtf};
use crate::error::SyntaxError;
use crate::trace::TraceEvent;
use cursor::{Cursor, Grammar};

/// Which alternatives the dispatcher may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Interval, date-time and date only
    Level0,
    /// Only the level 1 extensions
    Level1,
    /// Level 1 first, then level 0
    #[default]
    Full,
}

impl Level {
    pub fn from_name(name: &str) -> Option<Level> {
        match name {
            "level0" | "0" => Some(Level::Level0),
            "level1" | "1" => Some(Level::Level1),
            "full" => Some(Level::Full),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Level0 => "level0",
            Level::Level1 => "level1",
            Level::Full => "full",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub level: Level,
    pub trace: bool,
}

/// Result of a traced parse: the outcome and every rule attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traced {
    pub result: Result<Edtf, SyntaxError>,
    pub events: Vec<TraceEvent>,
}

/// Configurable entry point. The parser holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdtfParser {
    options: ParseOptions,
}

impl EdtfParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn parse(&self, input: &str) -> Result<Edtf, SyntaxError> {
        let grammar = Grammar::new(input, false);
        dispatch(&grammar, self.options.level).ok_or_else(|| grammar.syntax_error())
    }

    /// Parse and collect trace events. Events are only recorded when the
    /// options enable tracing.
    pub fn parse_traced(&self, input: &str) -> Traced {
        let grammar = Grammar::new(input, self.options.trace);
        let result = dispatch(&grammar, self.options.level).ok_or_else(|| grammar.syntax_error());
        Traced {
            result,
            events: grammar.take_trace(),
        }
    }
}

/// Parse an EDTF level 0 or level 1 expression
pub fn parse(input: &str) -> Result<Edtf, SyntaxError> {
    EdtfParser::default().parse(input)
}

/// Parse using only the level 0 alternatives
pub fn parse_level0(input: &str) -> Result<Edtf, SyntaxError> {
    EdtfParser::new(ParseOptions {
        level: Level::Level0,
        trace: false,
    })
    .parse(input)
}

/// Parse using only the level 1 alternatives
pub fn parse_level1(input: &str) -> Result<Edtf, SyntaxError> {
    EdtfParser::new(ParseOptions {
        level: Level::Level1,
        trace: false,
    })
    .parse(input)
}

fn dispatch(grammar: &Grammar<'_>, level: Level) -> Option<Edtf> {
    match level {
        Level::Level0 => level0(grammar),
        Level::Level1 => level1(grammar),
        Level::Full => level1(grammar).or_else(|| level0(grammar)),
    }
}

fn level0(g: &Grammar<'_>) -> Option<Edtf> {
    let at = Cursor::START;
    g.complete(g.interval(at))
        .map(Edtf::Interval)
        .or_else(|| g.complete(g.date_time(at)).map(Edtf::DateTime))
        .or_else(|| g.complete(g.date(at)).map(Edtf::Date))
}

fn level1(g: &Grammar<'_>) -> Option<Edtf> {
    let at = Cursor::START;
    g.complete(g.extended_interval(at))
        .map(Edtf::Interval)
        .or_else(|| g.complete(g.uncertain_or_approximate_date(at)).map(Edtf::Date))
        .or_else(|| g.complete(g.unspecified_date(at)).map(Edtf::Date))
        .or_else(|| g.complete(g.masked_date(at)).map(Edtf::Date))
        .or_else(|| {
            g.complete(g.long_year(at))
                .map(|year| Edtf::Date(Date::year_only(year)))
        })
        .or_else(|| g.complete(g.season(at)).map(Edtf::Season))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::RuleOutcome;

    #[test]
    fn test_level1_wins_over_level0() {
        let edtf = parse("1984?").expect("parses");
        let date = edtf.as_date().expect("date");
        assert!(!date.is_exact());
        assert!(parse_level0("1984?").is_err());
    }

    #[test]
    fn test_levels_are_separate() {
        assert!(parse_level1("2004-02-01T10:10:10Z").is_err());
        assert!(parse_level0("2004-02-01T10:10:10Z").is_ok());
        assert!(parse_level0("2001-21").is_err());
        assert!(parse_level1("2001-21").is_ok());
    }

    #[test]
    fn test_masked_dates_are_level1() {
        for input in ["196x", "19xx", "2004-xx", "2004-06-xx"] {
            let edtf = parse_level1(input).unwrap_or_else(|e| panic!("{input}: {e}"));
            assert_eq!(edtf.level(), 1);
            assert_eq!(parse(input).ok(), Some(edtf));
        }
    }

    #[test]
    fn test_empty_input_fails_at_start() {
        assert_eq!(parse(""), Err(SyntaxError::new(0, None)));
    }

    #[test]
    fn test_trailing_input_is_rejected() {
        let error = parse("2004-06-11x").expect_err("trailing input");
        assert_eq!(error.offset, 10);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(Level::from_name("level0"), Some(Level::Level0));
        assert_eq!(Level::from_name("full"), Some(Level::Full));
        assert_eq!(Level::from_name("level2"), None);
        assert_eq!(Level::Level1.to_string(), "level1");
    }

    #[test]
    fn test_parse_traced_records_rules() {
        let parser = EdtfParser::new(ParseOptions {
            level: Level::Full,
            trace: true,
        });
        let traced = parser.parse_traced("1984");
        assert!(traced.result.is_ok());
        assert!(traced
            .events
            .iter()
            .any(|e| e.rule == "year" && e.outcome == RuleOutcome::Matched { end: 4 }));
        assert!(traced
            .events
            .iter()
            .any(|e| e.rule == "season" && !e.matched()));

        let quiet = EdtfParser::default().parse_traced("1984");
        assert!(quiet.events.is_empty());
    }
}
