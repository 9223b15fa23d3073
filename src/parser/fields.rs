//! Primitive fields: year, month, day, hours, minutes, seconds

use super::cursor::{Cursor, Grammar, Match};
use crate::ast::{Component, Day, DigitPrecision, Mask, Month, NumericField, Year};
use crate::lexer::Token;

impl<'src> Grammar<'src> {
    pub(crate) fn year(&self, at: Cursor) -> Match<Year> {
        self.rule("year", at, |at| {
            self.simple_year(at)
                .or_else(|| self.unspecified_year(at))
                .or_else(|| self.masked_year(at))
        })
    }

    pub(crate) fn simple_year(&self, at: Cursor) -> Match<Year> {
        let (field, end) = self.four_digit_integer(at)?;
        Some((Component::exact(field), end))
    }

    /// `199u`, `19uu`
    pub(crate) fn unspecified_year(&self, at: Cursor) -> Match<Year> {
        let (field, mask, end) = self.year_with_trailing(at, Token::Unspecified)?;
        Some((Component::new(field, DigitPrecision::Unspecified(mask)), end))
    }

    /// `196x`, `19xx`
    pub(crate) fn masked_year(&self, at: Cursor) -> Match<Year> {
        let (field, mask, end) = self.year_with_trailing(at, Token::Masked)?;
        Some((Component::new(field, DigitPrecision::Masked(mask)), end))
    }

    /// `[-]DD` followed by either two `marker`s or a digit and one `marker`.
    /// Only the trailing run of a year may be replaced: `1u9u` is not a year.
    fn year_with_trailing(
        &self,
        at: Cursor,
        marker: Token,
    ) -> Option<(NumericField, Mask, Cursor)> {
        let (negative, digits_at) = match self.peek(at) {
            Some(Token::Dash) => (true, at.next()),
            _ => (false, at),
        };
        let (century, next) = self.digits_exact(digits_at, 2)?;
        let (mask, tens, end) = match self.token(next, marker) {
            Some(((), after)) => {
                let ((), end) = self.token(after, marker)?;
                (Mask::LastTwoDigits, 0, end)
            }
            None => {
                let (tens, after) = self.digit(next)?;
                let ((), end) = self.token(after, marker)?;
                (Mask::LastDigit, i64::from(tens), end)
            }
        };
        let value = century * 100 + tens * 10;
        let value = if negative { -value } else { value };
        Some((self.numeric(value, at, end), mask, end))
    }

    pub(crate) fn month(&self, at: Cursor) -> Match<Month> {
        self.rule("month", at, |at| {
            self.simple_month(at)
                .or_else(|| self.unspecified_month(at))
                .or_else(|| self.masked_month(at))
        })
    }

    pub(crate) fn simple_month(&self, at: Cursor) -> Match<Month> {
        let (field, end) = self.one_to_twelve(at)?;
        Some((Component::exact(field), end))
    }

    /// `uu`
    pub(crate) fn unspecified_month(&self, at: Cursor) -> Match<Month> {
        self.whole_component(at, Token::Unspecified)
    }

    /// `xx`
    pub(crate) fn masked_month(&self, at: Cursor) -> Match<Month> {
        self.whole_component(at, Token::Masked)
    }

    pub(crate) fn day(&self, at: Cursor) -> Match<Day> {
        self.rule("day", at, |at| {
            self.simple_day(at)
                .or_else(|| self.unspecified_day(at))
                .or_else(|| self.masked_day(at))
        })
    }

    pub(crate) fn simple_day(&self, at: Cursor) -> Match<Day> {
        let (field, end) = self.one_to_thirty_one(at)?;
        Some((Component::exact(field), end))
    }

    /// `uu`
    pub(crate) fn unspecified_day(&self, at: Cursor) -> Match<Day> {
        self.whole_component(at, Token::Unspecified)
    }

    /// `xx`
    pub(crate) fn masked_day(&self, at: Cursor) -> Match<Day> {
        self.whole_component(at, Token::Masked)
    }

    /// Both digits of a month or day replaced by `marker`
    fn whole_component(&self, at: Cursor, marker: Token) -> Match<Component> {
        let ((), next) = self.token(at, marker)?;
        let ((), end) = self.token(next, marker)?;
        let digits = match marker {
            Token::Masked => DigitPrecision::Masked(Mask::LastTwoDigits),
            _ => DigitPrecision::Unspecified(Mask::LastTwoDigits),
        };
        Some((Component::new(self.numeric(0, at, end), digits), end))
    }

    pub(crate) fn hours(&self, at: Cursor) -> Match<NumericField> {
        self.rule("hours", at, |at| self.zero_to_twenty_three(at))
    }

    pub(crate) fn minutes(&self, at: Cursor) -> Match<NumericField> {
        self.rule("minutes", at, |at| self.zero_to_fifty_nine(at))
    }

    pub(crate) fn seconds(&self, at: Cursor) -> Match<NumericField> {
        self.rule("seconds", at, |at| self.zero_to_fifty_nine(at))
    }
}
