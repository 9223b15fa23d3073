//! Qualifier layer: uncertain/approximate dates, unspecified and masked
//! dates, and long years.
//!
//! A qualifier attaches to everything to its left up to the previous
//! qualified group, so `2004?-06-11` qualifies only the year while
//! `2004-06~-11` qualifies year and month. Alternatives are tried most
//! specific first; `?~` has to be tried before `~` and `?`, otherwise the
//! `?` would match alone and leave the `~` dangling.

use super::cursor::{Cursor, Grammar, Match};
use crate::ast::{Component, Date, Day, LongYearForm, Month, Qualifier, Year};
use crate::lexer::Token;

impl<'src> Grammar<'src> {
    /// `?~`, `~` or `?`
    pub(crate) fn qualifier(&self, at: Cursor) -> Match<Qualifier> {
        self.rule("qualifier", at, |at| {
            let uncertain_approximate = || {
                let ((), next) = self.token(at, Token::Question)?;
                let ((), end) = self.token(next, Token::Tilde)?;
                Some((Qualifier::UncertainApproximate, end))
            };
            uncertain_approximate()
                .or_else(|| {
                    let ((), end) = self.token(at, Token::Tilde)?;
                    Some((Qualifier::Approximate, end))
                })
                .or_else(|| {
                    let ((), end) = self.token(at, Token::Question)?;
                    Some((Qualifier::Uncertain, end))
                })
        })
    }

    pub(crate) fn qualified_year(&self, at: Cursor) -> Match<Year> {
        self.rule("qualified_year", at, |at| {
            let (year, next) = self.year(at)?;
            let (qualifier, end) = self.qualifier(next)?;
            Some((year.qualified(qualifier), end))
        })
    }

    pub(crate) fn qualified_year_month(&self, at: Cursor) -> Match<Date> {
        self.rule("qualified_year_month", at, |at| {
            let (date, next) = self.year_month(at)?;
            let (qualifier, end) = self.qualifier(next)?;
            Some((date.qualified(qualifier), end))
        })
    }

    /// A qualifier on the year or year-month with the rest of the date exact
    pub(crate) fn partial_uncertain_or_approximate_date(&self, at: Cursor) -> Match<Date> {
        self.rule("partial_uncertain_or_approximate_date", at, |at| {
            let year_then_month_day = || {
                let (year, next) = self.qualified_year(at)?;
                let ((), next) = self.token(next, Token::Dash)?;
                let ((month, day), end) = self.month_day(next)?;
                Some((Date::new(year, Some(month), Some(day)), end))
            };
            let year_month_then_day = || {
                let (date, next) = self.qualified_year_month(at)?;
                let ((), next) = self.token(next, Token::Dash)?;
                let (day, end) = self.day(next)?;
                Some((Date { day: Some(day), ..date }, end))
            };
            year_then_month_day()
                .or_else(year_month_then_day)
                .or_else(|| self.qualified_year_month(at))
                .or_else(|| {
                    let (year, end) = self.qualified_year(at)?;
                    Some((Date::year_only(year), end))
                })
        })
    }

    /// Any date followed by a qualifier that applies to all of it
    pub(crate) fn qualified_date(&self, at: Cursor) -> Match<Date> {
        self.rule("qualified_date", at, |at| {
            let (date, next) = self.date(at)?;
            let (qualifier, end) = self.qualifier(next)?;
            Some((date.qualified(qualifier), end))
        })
    }

    pub(crate) fn uncertain_or_approximate_date(&self, at: Cursor) -> Match<Date> {
        self.rule("uncertain_or_approximate_date", at, |at| {
            self.partial_uncertain_or_approximate_date(at)
                .or_else(|| self.qualified_date(at))
        })
    }

    /// A date with unspecified digits. Only matches when it runs to the end
    /// of the input.
    pub(crate) fn unspecified_date(&self, at: Cursor) -> Match<Date> {
        self.rule("unspecified_date", at, |at| {
            self.date_with_replaced_digits(
                at,
                Self::unspecified_year,
                Self::unspecified_month,
                Self::unspecified_day,
            )
        })
    }

    /// `196x`, `2004-xx`, `2004-06-xx`: the masked counterpart of
    /// [`Self::unspecified_date`], anchored to the end of input the same way
    pub(crate) fn masked_date(&self, at: Cursor) -> Match<Date> {
        self.rule("masked_date", at, |at| {
            self.date_with_replaced_digits(
                at,
                Self::masked_year,
                Self::masked_month,
                Self::masked_day,
            )
        })
    }

    fn date_with_replaced_digits<Y, M, D>(
        &self,
        at: Cursor,
        replaced_year: Y,
        replaced_month: M,
        replaced_day: D,
    ) -> Match<Date>
    where
        Y: Fn(&Self, Cursor) -> Match<Year>,
        M: Fn(&Self, Cursor) -> Match<Month>,
        D: Fn(&Self, Cursor) -> Match<Day>,
    {
        let at_end = |matched: Match<Date>| {
            let (date, end) = matched?;
            self.end(end)?;
            Some((date, end))
        };
        let year_only = || {
            let (year, end) = replaced_year(self, at)?;
            Some((Date::year_only(year), end))
        };
        let year_replaced_month_day = || {
            let (year, next) = self.year(at)?;
            let ((), next) = self.token(next, Token::Dash)?;
            let (month, next) = replaced_month(self, next)?;
            let ((), next) = self.token(next, Token::Dash)?;
            let (day, end) = replaced_day(self, next)?;
            Some((Date::new(year, Some(month), Some(day)), end))
        };
        let year_month_replaced_day = || {
            let (year, next) = self.year(at)?;
            let ((), next) = self.token(next, Token::Dash)?;
            let (month, next) = self.month(next)?;
            let ((), next) = self.token(next, Token::Dash)?;
            let (day, end) = replaced_day(self, next)?;
            Some((Date::new(year, Some(month), Some(day)), end))
        };
        let year_replaced_month = || {
            let (year, next) = self.year(at)?;
            let ((), next) = self.token(next, Token::Dash)?;
            let (month, end) = replaced_month(self, next)?;
            Some((Date::new(year, Some(month), None), end))
        };
        at_end(year_only())
            .or_else(|| at_end(year_replaced_month_day()))
            .or_else(|| at_end(year_month_replaced_day()))
            .or_else(|| at_end(year_replaced_month()))
    }

    /// `y` followed by an exponential form `[-]M…eE…[pP…]` or by five or
    /// more plain digits. Runs of any length are accepted; the year value
    /// is left unset when it does not fit an `i64`.
    pub(crate) fn long_year(&self, at: Cursor) -> Match<Year> {
        self.rule("long_year", at, |at| {
            let ((), sign_at) = self.token(at, Token::LongYearMarker)?;
            let digits_at = match self.peek(sign_at) {
                Some(Token::Dash) => sign_at.next(),
                _ => sign_at,
            };

            let exponential = || {
                let (_, next) = self.digit_run(digits_at, 1)?;
                let mantissa = self.digits(sign_at, next);
                let ((), exponent_at) = self.token(next, Token::Exponent)?;
                let (_, next) = self.digit_run(exponent_at, 1)?;
                let exponent = self.digits(exponent_at, next);
                let (precision, end) = match self.token(next, Token::Precision) {
                    Some(((), precision_at)) => {
                        let (_, end) = self.digit_run(precision_at, 1)?;
                        (Some(self.digits(precision_at, end)), end)
                    }
                    None => (None, next),
                };
                let form = LongYearForm::Exponential {
                    mantissa,
                    exponent,
                    precision,
                };
                Some((self.long_year_component(form, at, end), end))
            };
            let plain = || {
                let (_, end) = self.digit_run(digits_at, 5)?;
                let form = LongYearForm::Plain {
                    digits: self.digits(sign_at, end),
                };
                Some((self.long_year_component(form, at, end), end))
            };
            exponential().or_else(plain)
        })
    }

    fn long_year_component(&self, form: LongYearForm, from: Cursor, to: Cursor) -> Component {
        Component::long_year(self.slice(from, to), self.span(from, to), form)
    }
}
