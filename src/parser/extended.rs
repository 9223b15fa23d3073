//! Intervals and seasons

use super::cursor::{Cursor, Grammar, Match};
use crate::ast::{Date, Endpoint, Interval, Season, SeasonCode};
use crate::lexer::Token;

impl<'src> Grammar<'src> {
    /// Level 0 interval: two plain dates
    pub(crate) fn interval(&self, at: Cursor) -> Match<Interval> {
        self.rule("interval", at, |at| {
            let (start, next) = self.date(at)?;
            let ((), next) = self.token(next, Token::Slash)?;
            let (end, after) = self.date(next)?;
            Some((
                Interval {
                    start: Endpoint::Known(start),
                    end: Endpoint::Known(end),
                },
                after,
            ))
        })
    }

    pub(crate) fn extended_date(&self, at: Cursor) -> Match<Date> {
        self.rule("extended_date", at, |at| {
            self.uncertain_or_approximate_date(at)
                .or_else(|| self.unspecified_date(at))
                .or_else(|| self.date(at))
        })
    }

    /// An extended date or `unknown`. `open` is never a start.
    pub(crate) fn interval_start(&self, at: Cursor) -> Match<Endpoint> {
        self.rule("interval_start", at, |at| {
            self.known_endpoint(at)
                .or_else(|| self.keyword(at, Token::Unknown, Endpoint::Unknown))
        })
    }

    pub(crate) fn interval_end(&self, at: Cursor) -> Match<Endpoint> {
        self.rule("interval_end", at, |at| {
            self.known_endpoint(at)
                .or_else(|| self.keyword(at, Token::Unknown, Endpoint::Unknown))
                .or_else(|| self.keyword(at, Token::Open, Endpoint::Open))
        })
    }

    pub(crate) fn extended_interval(&self, at: Cursor) -> Match<Interval> {
        self.rule("extended_interval", at, |at| {
            let (start, next) = self.interval_start(at)?;
            let ((), next) = self.token(next, Token::Slash)?;
            let (end, after) = self.interval_end(next)?;
            Some((Interval { start, end }, after))
        })
    }

    fn known_endpoint(&self, at: Cursor) -> Match<Endpoint> {
        let (date, end) = self.extended_date(at)?;
        Some((Endpoint::Known(date), end))
    }

    fn keyword(&self, at: Cursor, keyword: Token, endpoint: Endpoint) -> Match<Endpoint> {
        let ((), end) = self.token(at, keyword)?;
        Some((endpoint, end))
    }

    /// `year-NN[^qualifier]` with `NN` one of the four season codes
    pub(crate) fn season(&self, at: Cursor) -> Match<Season> {
        self.rule("season", at, |at| {
            let (year, next) = self.year(at)?;
            let ((), next) = self.token(next, Token::Dash)?;
            let (code, end) = self.season_code(next)?;
            let (qualifier, end) = match self.token(end, Token::Caret) {
                Some(((), text_at)) => {
                    let (text, end) = self.rest(text_at);
                    (Some(text.to_string()), end)
                }
                None => (None, end),
            };
            Some((
                Season {
                    year,
                    code,
                    qualifier,
                },
                end,
            ))
        })
    }

    /// `21`..`24`
    fn season_code(&self, at: Cursor) -> Match<SeasonCode> {
        let (tens, next) = self.digit_where(at, |d| d == 2)?;
        let (ones, end) = self.digit_where(next, |d| (1..=4).contains(&d))?;
        if !self.no_digit_follows(end) {
            return None;
        }
        let code = SeasonCode::from_code(tens * 10 + ones)?;
        Some((code, end))
    }
}

#[cfg(test)]
mod tests {
    use super::super::cursor::matches_fully;
    use crate::ast::{Endpoint, Qualifier, SeasonCode};

    #[test]
    fn test_plain_interval() {
        let interval = matches_fully("2004-02-01/2005-02", |g, at| g.interval(at))
            .expect("interval");
        assert!(interval.is_plain());
        assert!(matches_fully("2004/unknown", |g, at| g.interval(at)).is_none());
    }

    #[test]
    fn test_extended_interval_endpoints() {
        let interval = matches_fully("2004-06-01/unknown", |g, at| g.extended_interval(at))
            .expect("interval");
        assert_eq!(interval.end, Endpoint::Unknown);

        let interval = matches_fully("unknown/2004-06", |g, at| g.extended_interval(at))
            .expect("interval");
        assert_eq!(interval.start, Endpoint::Unknown);

        let interval = matches_fully("2004-06~/open", |g, at| g.extended_interval(at))
            .expect("interval");
        assert_eq!(interval.end, Endpoint::Open);
        let start = interval.start.date().expect("known start");
        assert_eq!(start.year.qualifier, Some(Qualifier::Approximate));
    }

    #[test]
    fn test_open_is_never_a_start() {
        assert!(matches_fully("open/2004", |g, at| g.extended_interval(at)).is_none());
        assert!(matches_fully("open/open", |g, at| g.extended_interval(at)).is_none());
    }

    #[test]
    fn test_unspecified_end_of_interval() {
        let interval = matches_fully("2004/2005-uu", |g, at| g.extended_interval(at))
            .expect("interval");
        assert!(interval.end.date().is_some_and(|d| !d.is_exact()));
    }

    #[test]
    fn test_season() {
        let season = matches_fully("2001-21^southernHemisphere", |g, at| g.season(at))
            .expect("season");
        assert_eq!(season.code, SeasonCode::Spring);
        assert_eq!(season.qualifier.as_deref(), Some("southernHemisphere"));

        let season = matches_fully("2001-24", |g, at| g.season(at)).expect("season");
        assert_eq!(season.code, SeasonCode::Winter);
        assert_eq!(season.qualifier, None);

        let season = matches_fully("2001-22^", |g, at| g.season(at)).expect("season");
        assert_eq!(season.qualifier.as_deref(), Some(""));
    }

    #[test]
    fn test_season_codes_are_reserved() {
        for input in ["2001-20", "2001-25", "2001-210", "2001-2"] {
            assert!(
                matches_fully(input, |g, at| g.season(at)).is_none(),
                "{input} should not be a season"
            );
        }
    }
}
