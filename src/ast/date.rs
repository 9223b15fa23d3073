//! Dates, times and date-times

use super::component::{Component, Day, Month, NumericField, Year};
use super::precision::Qualifier;
use super::span::Span;
use serde::Serialize;
use std::fmt;

/// Finest component present in a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePrecision {
    Year,
    Month,
    Day,
}

/// A calendar date of year, month or day precision.
///
/// Each component carries its own tags, so partially qualified dates such as
/// `2004?-06-11` (only the year uncertain) are represented directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Date {
    pub year: Year,
    pub month: Option<Month>,
    pub day: Option<Day>,
}

impl Date {
    pub fn new(year: Year, month: Option<Month>, day: Option<Day>) -> Self {
        Self { year, month, day }
    }

    pub fn year_only(year: Year) -> Self {
        Self::new(year, None, None)
    }

    pub fn precision(&self) -> DatePrecision {
        match (&self.month, &self.day) {
            (_, Some(_)) => DatePrecision::Day,
            (Some(_), None) => DatePrecision::Month,
            (None, None) => DatePrecision::Year,
        }
    }

    /// Components in year, month, day order
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        std::iter::once(&self.year)
            .chain(self.month.iter())
            .chain(self.day.iter())
    }

    /// True when no component carries a tag
    pub fn is_exact(&self) -> bool {
        self.components().all(Component::is_exact)
    }

    pub fn span(&self) -> Span {
        self.components()
            .map(Component::span)
            .fold(self.year.span(), |acc, span| acc.cover(span))
    }

    /// Attach `qualifier` to every component
    pub(crate) fn qualified(self, qualifier: Qualifier) -> Self {
        Self {
            year: self.year.qualified(qualifier),
            month: self.month.map(|month| month.qualified(qualifier)),
            day: self.day.map(|day| day.qualified(qualifier)),
        }
    }
}

/// Writes a component's qualifier only where its qualified group ends, so
/// `2004-06~-11` renders the `~` once after the month.
fn write_group_end(
    f: &mut fmt::Formatter<'_>,
    qualifier: Option<Qualifier>,
    next: Option<&Component>,
) -> fmt::Result {
    match qualifier {
        Some(q) if next.map(|c| c.qualifier) != Some(Some(q)) => f.write_str(q.indicator()),
        _ => Ok(()),
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.year.literal())?;
        write_group_end(f, self.year.qualifier, self.month.as_ref())?;
        if let Some(month) = &self.month {
            write!(f, "-{}", month.literal())?;
            write_group_end(f, month.qualifier, self.day.as_ref())?;
        }
        if let Some(day) = &self.day {
            write!(f, "-{}", day.literal())?;
            write_group_end(f, day.qualifier, None)?;
        }
        Ok(())
    }
}

/// Clock time. Level 0 and 1 allow no qualification on time components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Time {
    pub hour: NumericField,
    pub minute: NumericField,
    pub second: NumericField,
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.hour, self.minute, self.second)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub fn as_char(self) -> char {
        match self {
            Sign::Plus => '+',
            Sign::Minus => '-',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Timezone {
    Zulu,
    Offset {
        sign: Sign,
        hour: NumericField,
        minute: NumericField,
    },
}

impl Timezone {
    /// Offset from UTC in minutes
    pub fn offset_minutes(&self) -> i64 {
        match self {
            Timezone::Zulu => 0,
            Timezone::Offset { sign, hour, minute } => {
                let minutes = hour.value * 60 + minute.value;
                match sign {
                    Sign::Plus => minutes,
                    Sign::Minus => -minutes,
                }
            }
        }
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timezone::Zulu => f.write_str("Z"),
            Timezone::Offset { sign, hour, minute } => {
                write!(f, "{}{}:{}", sign.as_char(), hour, minute)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateTime {
    pub date: Date,
    pub time: Time,
    pub timezone: Option<Timezone>,
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)?;
        if let Some(timezone) = &self.timezone {
            write!(f, "{timezone}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn component(value: i64, literal: &str, start: usize) -> Component {
        Component::exact(NumericField::new(
            value,
            literal,
            Span::new(start, start + literal.len()),
        ))
    }

    fn sample_date() -> Date {
        Date::new(
            component(2004, "2004", 0),
            Some(component(6, "06", 5)),
            Some(component(11, "11", 8)),
        )
    }

    #[test]
    fn test_precision_and_span() {
        let date = sample_date();
        assert_eq!(date.precision(), DatePrecision::Day);
        assert_eq!(date.span(), Span::new(0, 10));
        assert!(date.is_exact());
    }

    #[test]
    fn test_display_whole_date_qualifier() {
        let date = sample_date().qualified(Qualifier::Uncertain);
        assert_eq!(date.to_string(), "2004-06-11?");
    }

    #[test]
    fn test_display_partial_qualifier() {
        let mut date = sample_date();
        date.year = date.year.qualified(Qualifier::Approximate);
        date.month = date.month.map(|m| m.qualified(Qualifier::Approximate));
        assert_eq!(date.to_string(), "2004-06~-11");

        let mut date = sample_date();
        date.year = date.year.qualified(Qualifier::UncertainApproximate);
        assert_eq!(date.to_string(), "2004?~-06-11");
    }

    #[test]
    fn test_timezone_offset_minutes() {
        let tz = Timezone::Offset {
            sign: Sign::Minus,
            hour: NumericField::new(11, "11", Span::new(1, 3)),
            minute: NumericField::new(45, "45", Span::new(4, 6)),
        };
        assert_eq!(tz.offset_minutes(), -705);
        assert_eq!(tz.to_string(), "-11:45");
        assert_eq!(Timezone::Zulu.offset_minutes(), 0);
    }
}
