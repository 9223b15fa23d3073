//! Grammar state and cursor primitives
//!
//! Every rule is a method on [`Grammar`] taking the [`Cursor`] to start at
//! and returning a [`Match`]: the recognized value plus the cursor just past
//! it, or `None`. A cursor is a plain index, so a caller backtracks by
//! reusing the cursor it already holds; no rule ever has to undo anything.
//!
//! `None` is an ordinary outcome that lets the caller try its next
//! alternative. The only state a failed rule leaves behind is the furthest
//! failure position, which becomes the offset of the user-visible
//! [`SyntaxError`] once every alternative is exhausted.

use std::cell::{Cell, RefCell};

use crate::ast::{Digits, NumericField, Span};
use crate::error::SyntaxError;
use crate::lexer::{tokenize_with_spans, Token, TokenSpan};
use crate::trace::{RuleOutcome, TraceEvent};

/// Position in the token stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Cursor(usize);

impl Cursor {
    pub(crate) const START: Cursor = Cursor(0);

    pub(crate) fn next(self) -> Cursor {
        Cursor(self.0 + 1)
    }
}

/// Outcome of a rule: the value and the cursor after it
pub(crate) type Match<T> = Option<(T, Cursor)>;

/// Per-parse grammar state
pub(crate) struct Grammar<'src> {
    source: &'src str,
    tokens: Vec<TokenSpan>,
    furthest: Cell<usize>,
    trace: Option<RefCell<Vec<TraceEvent>>>,
}

impl<'src> Grammar<'src> {
    pub(crate) fn new(source: &'src str, trace: bool) -> Self {
        Self {
            source,
            tokens: tokenize_with_spans(source),
            furthest: Cell::new(0),
            trace: trace.then(|| RefCell::new(Vec::new())),
        }
    }

    pub(crate) fn peek(&self, at: Cursor) -> Option<Token> {
        self.tokens.get(at.0).map(|(token, _)| *token)
    }

    /// Byte offset of the token at `at`, or the input length past the end
    pub(crate) fn offset(&self, at: Cursor) -> usize {
        self.tokens
            .get(at.0)
            .map_or(self.source.len(), |(_, span)| span.start)
    }

    /// Bytes covered by the tokens in `from..to`
    pub(crate) fn span(&self, from: Cursor, to: Cursor) -> Span {
        let start = self.offset(from);
        let end = match to.0.checked_sub(1).and_then(|last| self.tokens.get(last)) {
            Some((_, span)) if to > from => span.end,
            _ => start,
        };
        Span::new(start, end)
    }

    pub(crate) fn slice(&self, from: Cursor, to: Cursor) -> &'src str {
        let span = self.span(from, to);
        &self.source[span.range()]
    }

    /// Numeric field over the tokens in `from..to`
    pub(crate) fn numeric(&self, value: i64, from: Cursor, to: Cursor) -> NumericField {
        NumericField::new(value, self.slice(from, to), self.span(from, to))
    }

    /// Verbatim digits over the tokens in `from..to`
    pub(crate) fn digits(&self, from: Cursor, to: Cursor) -> Digits {
        Digits::new(self.slice(from, to), self.span(from, to))
    }

    /// Record a failed expectation at `at` and report no match
    pub(crate) fn fail<T>(&self, at: Cursor) -> Option<T> {
        if at.0 > self.furthest.get() {
            self.furthest.set(at.0);
        }
        None
    }

    /// Match exactly `expected`
    pub(crate) fn token(&self, at: Cursor, expected: Token) -> Match<()> {
        if self.peek(at) == Some(expected) {
            Some(((), at.next()))
        } else {
            self.fail(at)
        }
    }

    pub(crate) fn digit(&self, at: Cursor) -> Match<u8> {
        self.digit_where(at, |_| true)
    }

    /// Match one digit satisfying `accept`
    pub(crate) fn digit_where(&self, at: Cursor, accept: impl Fn(u8) -> bool) -> Match<u8> {
        match self.peek(at) {
            Some(Token::Digit(d)) if accept(d) => Some((d, at.next())),
            _ => self.fail(at),
        }
    }

    /// Exactly `count` digits, read as one unsigned number
    pub(crate) fn digits_exact(&self, at: Cursor, count: usize) -> Match<i64> {
        let mut value = 0i64;
        let mut cursor = at;
        for _ in 0..count {
            let (d, next) = self.digit(cursor)?;
            value = value * 10 + i64::from(d);
            cursor = next;
        }
        Some((value, cursor))
    }

    /// A maximal run of at least `min` digits, matched by width alone.
    /// Returns the number of digits.
    pub(crate) fn digit_run(&self, at: Cursor, min: usize) -> Match<usize> {
        let mut cursor = at;
        while self.peek(cursor).is_some_and(|token| token.is_digit()) {
            cursor = cursor.next();
        }
        let count = cursor.0 - at.0;
        if count < min {
            return self.fail(cursor);
        }
        Some((count, cursor))
    }

    /// Peek-only width check: true unless a digit sits at `at`
    pub(crate) fn no_digit_follows(&self, at: Cursor) -> bool {
        if self.peek(at).is_some_and(|token| token.is_digit()) {
            self.fail::<()>(at);
            false
        } else {
            true
        }
    }

    pub(crate) fn end(&self, at: Cursor) -> Match<()> {
        if at.0 >= self.tokens.len() {
            Some(((), at))
        } else {
            self.fail(at)
        }
    }

    /// Consume everything from `at` to the end of the input verbatim
    pub(crate) fn rest(&self, at: Cursor) -> (&'src str, Cursor) {
        let start = self.offset(at);
        (&self.source[start..], Cursor(self.tokens.len().max(at.0)))
    }

    /// Run `body` as the named rule `name`, recording a trace event when
    /// tracing is enabled
    pub(crate) fn rule<T>(
        &self,
        name: &'static str,
        at: Cursor,
        body: impl FnOnce(Cursor) -> Match<T>,
    ) -> Match<T> {
        let outcome = body(at);
        if let Some(trace) = &self.trace {
            let event = TraceEvent {
                rule: name,
                offset: self.offset(at),
                outcome: match &outcome {
                    Some((_, end)) => RuleOutcome::Matched {
                        end: self.offset(*end),
                    },
                    None => RuleOutcome::NoMatch,
                },
            };
            trace.borrow_mut().push(event);
        }
        outcome
    }

    /// Require `matched` to have consumed the whole input
    pub(crate) fn complete<T>(&self, matched: Match<T>) -> Option<T> {
        let (value, at) = matched?;
        self.end(at)?;
        Some(value)
    }

    pub(crate) fn syntax_error(&self) -> SyntaxError {
        SyntaxError::at(self.source, self.offset(Cursor(self.furthest.get())))
    }

    pub(crate) fn take_trace(&self) -> Vec<TraceEvent> {
        self.trace
            .as_ref()
            .map(|trace| trace.take())
            .unwrap_or_default()
    }
}

/// Run `rule` from the start of `input` and require it to consume all of it
#[cfg(test)]
pub(crate) fn matches_fully<T>(
    input: &str,
    rule: impl Fn(&Grammar<'_>, Cursor) -> Match<T>,
) -> Option<T> {
    let grammar = Grammar::new(input, false);
    grammar.complete(rule(&grammar, Cursor::START))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_and_spans() {
        let grammar = Grammar::new("2004/open", false);
        assert_eq!(grammar.offset(Cursor(4)), 4);
        assert_eq!(grammar.offset(Cursor(5)), 5);
        assert_eq!(grammar.offset(Cursor(6)), 9);
        assert_eq!(grammar.span(Cursor(0), Cursor(4)), Span::new(0, 4));
        assert_eq!(grammar.slice(Cursor(5), Cursor(6)), "open");
        assert_eq!(grammar.span(Cursor(2), Cursor(2)), Span::new(2, 2));
    }

    #[test]
    fn test_furthest_failure_is_kept() {
        let grammar = Grammar::new("1999-13", false);
        assert!(grammar.token(Cursor(6), Token::Dash).is_none());
        assert!(grammar.token(Cursor(2), Token::Dash).is_none());
        assert_eq!(grammar.syntax_error(), SyntaxError::new(6, Some('3')));
    }

    #[test]
    fn test_digit_helpers() {
        let grammar = Grammar::new("20081", false);
        assert_eq!(grammar.digits_exact(Cursor::START, 4), Some((2008, Cursor(4))));
        assert!(!grammar.no_digit_follows(Cursor(4)));
        assert!(grammar.no_digit_follows(Cursor(5)));
        assert_eq!(grammar.digit_run(Cursor::START, 5), Some((5, Cursor(5))));
        assert_eq!(grammar.digit_run(Cursor::START, 6), None);
    }

    #[test]
    fn test_digit_run_is_not_bounded_by_value() {
        let grammar = Grammar::new("99999999999999999999", false);
        assert_eq!(grammar.digit_run(Cursor::START, 1), Some((20, Cursor(20))));
        let digits = grammar.digits(Cursor::START, Cursor(20));
        assert_eq!(digits.literal, "99999999999999999999");
        assert_eq!(digits.value(), None);
    }

    #[test]
    fn test_rest_takes_remaining_source() {
        let grammar = Grammar::new("21^southern", false);
        let (text, end) = grammar.rest(Cursor(3));
        assert_eq!(text, "southern");
        assert!(grammar.end(end).is_some());
    }

    #[test]
    fn test_trace_records_rules() {
        let grammar = Grammar::new("1984", true);
        let matched = grammar.rule("four", Cursor::START, |at| grammar.digits_exact(at, 4));
        assert!(matched.is_some());
        let missed = grammar.rule("dash", Cursor(4), |at| grammar.token(at, Token::Dash));
        assert!(missed.is_none());

        let events = grammar.take_trace();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].outcome, RuleOutcome::Matched { end: 4 });
        assert_eq!(events[1].outcome, RuleOutcome::NoMatch);
    }
}
