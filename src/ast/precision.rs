//! Precision tags
//!
//! A component's precision has two independent parts. The *digit precision*
//! says how its digits were written: all known, some replaced by `u`
//! (unspecified) or `x` (masked), or in the `y` long-year notation. The
//! *qualifier* says whether the component was marked uncertain (`?`),
//! approximate (`~`) or both (`?~`).
//!
//! [`Precision`] folds the two into the single tag most callers care about.

use super::component::Digits;
use serde::Serialize;
use std::fmt;

/// Uncertainty / approximation attached to a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    Uncertain,
    Approximate,
    UncertainApproximate,
}

impl Qualifier {
    /// The EDTF indicator text for this qualifier
    pub fn indicator(self) -> &'static str {
        match self {
            Qualifier::Uncertain => "?",
            Qualifier::Approximate => "~",
            Qualifier::UncertainApproximate => "?~",
        }
    }

    pub fn is_uncertain(self) -> bool {
        matches!(
            self,
            Qualifier::Uncertain | Qualifier::UncertainApproximate
        )
    }

    pub fn is_approximate(self) -> bool {
        matches!(
            self,
            Qualifier::Approximate | Qualifier::UncertainApproximate
        )
    }
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Uncertain => f.write_str("uncertain"),
            Qualifier::Approximate => f.write_str("approximate"),
            Qualifier::UncertainApproximate => f.write_str("uncertain, approximate"),
        }
    }
}

/// Which low-order digit positions were replaced by `u` or `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mask {
    LastDigit,
    LastTwoDigits,
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mask::LastDigit => f.write_str("last digit"),
            Mask::LastTwoDigits => f.write_str("last two digits"),
        }
    }
}

/// Shape of a `y`-prefixed long year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LongYearForm {
    /// `y170000002`: a plain integer with more than four digits. The
    /// literal keeps the sign.
    Plain { digits: Digits },
    /// `y17101e4p3`: mantissa (with its sign), exponent and optional
    /// significant-digit precision
    Exponential {
        mantissa: Digits,
        exponent: Digits,
        precision: Option<Digits>,
    },
}

impl LongYearForm {
    /// The year this form denotes, or `None` when it does not fit an `i64`.
    /// `p` only records precision and does not change the value.
    pub fn value(&self) -> Option<i64> {
        match self {
            LongYearForm::Plain { digits } => digits.value(),
            LongYearForm::Exponential {
                mantissa, exponent, ..
            } => {
                let exponent = u32::try_from(exponent.value()?).ok()?;
                10i64
                    .checked_pow(exponent)
                    .and_then(|factor| mantissa.value()?.checked_mul(factor))
            }
        }
    }
}

/// How the digits of a component were written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitPrecision {
    Exact,
    Unspecified(Mask),
    Masked(Mask),
    LongYear(LongYearForm),
}

impl DigitPrecision {
    pub fn is_exact(&self) -> bool {
        matches!(self, DigitPrecision::Exact)
    }
}

/// Folded precision tag of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    Exact,
    Uncertain,
    Approximate,
    UncertainApproximate,
    Unspecified(Mask),
    Masked(Mask),
    LongYear(LongYearForm),
}

impl Precision {
    /// Fold a digit precision and an optional qualifier into one tag.
    ///
    /// Digit replacement and long-year notation take precedence; the
    /// qualifier only shows through when every digit is known.
    pub fn fold(digits: &DigitPrecision, qualifier: Option<Qualifier>) -> Precision {
        match (digits, qualifier) {
            (DigitPrecision::Unspecified(mask), _) => Precision::Unspecified(*mask),
            (DigitPrecision::Masked(mask), _) => Precision::Masked(*mask),
            (DigitPrecision::LongYear(form), _) => Precision::LongYear(form.clone()),
            (DigitPrecision::Exact, None) => Precision::Exact,
            (DigitPrecision::Exact, Some(Qualifier::Uncertain)) => Precision::Uncertain,
            (DigitPrecision::Exact, Some(Qualifier::Approximate)) => Precision::Approximate,
            (DigitPrecision::Exact, Some(Qualifier::UncertainApproximate)) => {
                Precision::UncertainApproximate
            }
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Exact => f.write_str("exact"),
            Precision::Uncertain => f.write_str("uncertain"),
            Precision::Approximate => f.write_str("approximate"),
            Precision::UncertainApproximate => f.write_str("uncertain, approximate"),
            Precision::Unspecified(mask) => write!(f, "unspecified {mask}"),
            Precision::Masked(mask) => write!(f, "masked {mask}"),
            Precision::LongYear(LongYearForm::Plain { .. }) => f.write_str("long year"),
            Precision::LongYear(LongYearForm::Exponential { .. }) => {
                f.write_str("long year, exponential")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_exact_digits_keeps_qualifier() {
        assert_eq!(
            Precision::fold(&DigitPrecision::Exact, Some(Qualifier::Uncertain)),
            Precision::Uncertain
        );
        assert_eq!(
            Precision::fold(&DigitPrecision::Exact, None),
            Precision::Exact
        );
    }

    #[test]
    fn test_fold_digit_replacement_wins() {
        let digits = DigitPrecision::Unspecified(Mask::LastDigit);
        assert_eq!(
            Precision::fold(&digits, Some(Qualifier::Approximate)),
            Precision::Unspecified(Mask::LastDigit)
        );
    }

    #[test]
    fn test_long_year_value() {
        let digits = |literal: &str| Digits::new(literal, Default::default());
        let form = LongYearForm::Exponential {
            mantissa: digits("-17101"),
            exponent: digits("4"),
            precision: Some(digits("3")),
        };
        assert_eq!(form.value(), Some(-171_010_000));

        let form = LongYearForm::Exponential {
            mantissa: digits("1"),
            exponent: digits("99"),
            precision: None,
        };
        assert_eq!(form.value(), None);

        let form = LongYearForm::Plain {
            digits: digits("99999999999999999999"),
        };
        assert_eq!(form.value(), None);
    }

    #[test]
    fn test_qualifier_flags() {
        assert!(Qualifier::UncertainApproximate.is_uncertain());
        assert!(Qualifier::UncertainApproximate.is_approximate());
        assert!(!Qualifier::Approximate.is_uncertain());
        assert_eq!(Qualifier::UncertainApproximate.indicator(), "?~");
    }
}
