//! Numeric fields and date components

use super::precision::{DigitPrecision, LongYearForm, Precision, Qualifier};
use super::span::Span;
use serde::Serialize;
use std::fmt;

/// An integer value together with the literal text it was read from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NumericField {
    pub value: i64,
    pub literal: String,
    pub span: Span,
}

impl NumericField {
    pub fn new(value: i64, literal: impl Into<String>, span: Span) -> Self {
        Self {
            value,
            literal: literal.into(),
            span,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// Digits kept verbatim, with their value computed on demand.
///
/// Long years are allowed any number of digits, so the value of a run is
/// only available when it fits an `i64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Digits {
    pub literal: String,
    pub span: Span,
}

impl Digits {
    pub fn new(literal: impl Into<String>, span: Span) -> Self {
        Self {
            literal: literal.into(),
            span,
        }
    }

    /// Signed value of the run, or `None` when it does not fit an `i64`
    pub fn value(&self) -> Option<i64> {
        self.literal.parse().ok()
    }

    /// Number of digits, not counting a sign
    pub fn count(&self) -> usize {
        self.literal.trim_start_matches('-').len()
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// A year, month or day of a date.
///
/// `value` reads replaced digits as zero: `19uu` is 1900, `196x` is 1960
/// and an unspecified month `uu` is 0. For long years it is the full value
/// (`y17101e4` is 171010000), or `None` when that does not fit an `i64`;
/// `literal` keeps the `y` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    pub value: Option<i64>,
    pub literal: String,
    pub span: Span,
    pub digits: DigitPrecision,
    pub qualifier: Option<Qualifier>,
}

pub type Year = Component;
pub type Month = Component;
pub type Day = Component;

impl Component {
    pub fn new(field: NumericField, digits: DigitPrecision) -> Self {
        Self {
            value: Some(field.value),
            literal: field.literal,
            span: field.span,
            digits,
            qualifier: None,
        }
    }

    pub fn exact(field: NumericField) -> Self {
        Self::new(field, DigitPrecision::Exact)
    }

    /// A `y`-prefixed year; its value is derived from `form`
    pub fn long_year(literal: impl Into<String>, span: Span, form: LongYearForm) -> Self {
        Self {
            value: form.value(),
            literal: literal.into(),
            span,
            digits: DigitPrecision::LongYear(form),
            qualifier: None,
        }
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Folded precision tag
    pub fn precision(&self) -> Precision {
        Precision::fold(&self.digits, self.qualifier)
    }

    /// True when every digit is known and no qualifier is attached
    pub fn is_exact(&self) -> bool {
        self.digits.is_exact() && self.qualifier.is_none()
    }

    pub(crate) fn qualified(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = Some(qualifier);
        self
    }

    /// Short human description of the tags on this component, if any
    pub fn describe_tags(&self) -> Option<String> {
        let mut tags = Vec::new();
        if !self.digits.is_exact() {
            tags.push(Precision::fold(&self.digits, None).to_string());
        }
        if let Some(qualifier) = self.qualifier {
            tags.push(qualifier.to_string());
        }
        if tags.is_empty() {
            None
        } else {
            Some(tags.join(", "))
        }
    }
}
