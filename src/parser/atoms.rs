//! Lexical atoms: fixed-width digit ranges.
//!
//! Every atom ends with a peek-only check that no further digit follows.
//! Without it `2008` would also match the first four digits of `20081`, and
//! `12` the first two digits of `120`, leaving a dangling digit for some
//! composite rule to trip over.

use super::cursor::{Cursor, Grammar, Match};
use crate::ast::NumericField;
use crate::lexer::Token;

impl<'src> Grammar<'src> {
    /// `00`..`09`
    pub(crate) fn zero_to_nine(&self, at: Cursor) -> Match<NumericField> {
        self.bounded_pair(at, 0, 9)
    }

    /// `01`..`09`
    pub(crate) fn one_to_nine(&self, at: Cursor) -> Match<NumericField> {
        self.bounded_pair(at, 1, 9)
    }

    /// `01`..`12`
    pub(crate) fn one_to_twelve(&self, at: Cursor) -> Match<NumericField> {
        self.one_to_nine(at)
            .or_else(|| self.bounded_pair(at, 10, 12))
    }

    /// `00`..`23`
    pub(crate) fn zero_to_twenty_three(&self, at: Cursor) -> Match<NumericField> {
        self.zero_to_nine(at)
            .or_else(|| self.bounded_pair(at, 10, 23))
    }

    /// `01`..`31`
    pub(crate) fn one_to_thirty_one(&self, at: Cursor) -> Match<NumericField> {
        self.one_to_nine(at)
            .or_else(|| self.bounded_pair(at, 10, 31))
    }

    /// `00`..`59`
    pub(crate) fn zero_to_fifty_nine(&self, at: Cursor) -> Match<NumericField> {
        self.zero_to_nine(at)
            .or_else(|| self.bounded_pair(at, 10, 59))
    }

    /// Exactly four digits, optionally preceded by `-` for years before 0
    pub(crate) fn four_digit_integer(&self, at: Cursor) -> Match<NumericField> {
        let (negative, digits_at) = match self.peek(at) {
            Some(Token::Dash) => (true, at.next()),
            _ => (false, at),
        };
        let (value, end) = self.digits_exact(digits_at, 4)?;
        if !self.no_digit_follows(end) {
            return None;
        }
        let value = if negative { -value } else { value };
        Some((self.numeric(value, at, end), end))
    }

    /// Two digits whose value lies in `min..=max`.
    ///
    /// The tens digit is checked on its own first so a failure is reported
    /// at the digit that broke the range, not at the start of the pair.
    fn bounded_pair(&self, at: Cursor, min: u8, max: u8) -> Match<NumericField> {
        let (tens, next) = self.digit_where(at, |d| d * 10 <= max && d * 10 + 9 >= min)?;
        let (ones, end) = self.digit_where(next, |d| (min..=max).contains(&(tens * 10 + d)))?;
        if !self.no_digit_follows(end) {
            return None;
        }
        Some((self.numeric(i64::from(tens * 10 + ones), at, end), end))
    }
}
