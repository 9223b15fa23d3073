//! Intervals and their endpoints

use super::date::Date;
use serde::Serialize;
use std::fmt;

/// One side of an interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    Known(Date),
    /// `unknown`: the endpoint exists but is not known
    Unknown,
    /// `open`: the interval has no end. Never valid as a start.
    Open,
}

impl Endpoint {
    pub fn date(&self) -> Option<&Date> {
        match self {
            Endpoint::Known(date) => Some(date),
            Endpoint::Unknown | Endpoint::Open => None,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Known(date) => write!(f, "{date}"),
            Endpoint::Unknown => f.write_str("unknown"),
            Endpoint::Open => f.write_str("open"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub start: Endpoint,
    pub end: Endpoint,
}

impl Interval {
    /// True for a level 0 interval: both endpoints known and untagged
    pub fn is_plain(&self) -> bool {
        [&self.start, &self.end]
            .iter()
            .all(|endpoint| endpoint.date().is_some_and(Date::is_exact))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}
