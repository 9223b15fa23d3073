//! Composite date/time rules
//!
//! `date` tries its alternatives longest first, so a trailing `-MM-DD` is
//! never left behind for the caller to choke on.

use super::cursor::{Cursor, Grammar, Match};
use crate::ast::{Date, DateTime, Day, Month, Sign, Time, Timezone};
use crate::lexer::Token;

impl<'src> Grammar<'src> {
    pub(crate) fn year_month_day(&self, at: Cursor) -> Match<Date> {
        self.rule("year_month_day", at, |at| {
            let (year, next) = self.year(at)?;
            let ((), next) = self.token(next, Token::Dash)?;
            let ((month, day), end) = self.month_day(next)?;
            Some((Date::new(year, Some(month), Some(day)), end))
        })
    }

    pub(crate) fn year_month(&self, at: Cursor) -> Match<Date> {
        self.rule("year_month", at, |at| {
            let (year, next) = self.year(at)?;
            let ((), next) = self.token(next, Token::Dash)?;
            let (month, end) = self.month(next)?;
            Some((Date::new(year, Some(month), None), end))
        })
    }

    pub(crate) fn month_day(&self, at: Cursor) -> Match<(Month, Day)> {
        self.rule("month_day", at, |at| {
            let (month, next) = self.month(at)?;
            let ((), next) = self.token(next, Token::Dash)?;
            let (day, end) = self.day(next)?;
            Some(((month, day), end))
        })
    }

    pub(crate) fn date(&self, at: Cursor) -> Match<Date> {
        self.rule("date", at, |at| {
            self.year_month_day(at)
                .or_else(|| self.year_month(at))
                .or_else(|| {
                    let (year, end) = self.year(at)?;
                    Some((Date::year_only(year), end))
                })
        })
    }

    /// `HH:MM:SS`
    pub(crate) fn time(&self, at: Cursor) -> Match<Time> {
        self.rule("time", at, |at| {
            let (hour, next) = self.hours(at)?;
            let ((), next) = self.token(next, Token::Colon)?;
            let (minute, next) = self.minutes(next)?;
            let ((), next) = self.token(next, Token::Colon)?;
            let (second, end) = self.seconds(next)?;
            Some((
                Time {
                    hour,
                    minute,
                    second,
                },
                end,
            ))
        })
    }

    /// `Z` or a signed `HH:MM` offset
    pub(crate) fn timezone(&self, at: Cursor) -> Match<Timezone> {
        self.rule("timezone", at, |at| {
            if let Some(((), end)) = self.token(at, Token::Zulu) {
                return Some((Timezone::Zulu, end));
            }
            let (sign, next) = match self.peek(at) {
                Some(Token::Plus) => (Sign::Plus, at.next()),
                Some(Token::Dash) => (Sign::Minus, at.next()),
                _ => return self.fail(at),
            };
            let (hour, next) = self.hours(next)?;
            let ((), next) = self.token(next, Token::Colon)?;
            let (minute, end) = self.minutes(next)?;
            Some((Timezone::Offset { sign, hour, minute }, end))
        })
    }

    /// `date T time [timezone]`
    pub(crate) fn date_time(&self, at: Cursor) -> Match<DateTime> {
        self.rule("date_time", at, |at| {
            let (date, next) = self.date(at)?;
            let ((), next) = self.token(next, Token::TimeSeparator)?;
            let (time, next) = self.time(next)?;
            let (timezone, end) = match self.timezone(next) {
                Some((timezone, end)) => (Some(timezone), end),
                None => (None, next),
            };
            Some((
                DateTime {
                    date,
                    time,
                    timezone,
                },
                end,
            ))
        })
    }
}
