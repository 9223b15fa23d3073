//! Top-level parse result

use super::component::Component;
use super::date::{Date, DateTime};
use super::interval::{Endpoint, Interval};
use super::season::Season;
use serde::Serialize;
use std::fmt;

/// Whatever top-level EDTF alternative matched the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Edtf {
    DateTime(DateTime),
    Date(Date),
    Interval(Interval),
    Season(Season),
}

impl Edtf {
    /// Name of the matched alternative
    pub fn kind(&self) -> &'static str {
        match self {
            Edtf::DateTime(_) => "DateTime",
            Edtf::Date(_) => "Date",
            Edtf::Interval(_) => "Interval",
            Edtf::Season(_) => "Season",
        }
    }

    /// Lowest EDTF level able to express this value: 0 unless a level 1
    /// feature (qualifier, replaced digit, long year, unknown or open
    /// endpoint, season) appears somewhere in it.
    pub fn level(&self) -> u8 {
        let date_level = |date: &Date| u8::from(!date.components().all(Component::is_exact));
        match self {
            Edtf::DateTime(date_time) => date_level(&date_time.date),
            Edtf::Date(date) => date_level(date),
            Edtf::Interval(interval) => [&interval.start, &interval.end]
                .iter()
                .map(|endpoint| match endpoint {
                    Endpoint::Known(date) => date_level(date),
                    Endpoint::Unknown | Endpoint::Open => 1,
                })
                .max()
                .unwrap_or(0),
            Edtf::Season(_) => 1,
        }
    }

    pub fn as_date(&self) -> Option<&Date> {
        match self {
            Edtf::Date(date) => Some(date),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime> {
        match self {
            Edtf::DateTime(date_time) => Some(date_time),
            _ => None,
        }
    }

    pub fn as_interval(&self) -> Option<&Interval> {
        match self {
            Edtf::Interval(interval) => Some(interval),
            _ => None,
        }
    }

    pub fn as_season(&self) -> Option<&Season> {
        match self {
            Edtf::Season(season) => Some(season),
            _ => None,
        }
    }
}

impl fmt::Display for Edtf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edtf::DateTime(date_time) => write!(f, "{date_time}"),
            Edtf::Date(date) => write!(f, "{date}"),
            Edtf::Interval(interval) => write!(f, "{interval}"),
            Edtf::Season(season) => write!(f, "{season}"),
        }
    }
}
