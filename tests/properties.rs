//! Property-based tests for the numeric ranges and widths of the grammar
//!
//! These tests check that every field accepts exactly its range at exactly
//! its width, and that anything accepted renders back to its input.

use edtf::ast::DatePrecision;
use edtf::parse;
use proptest::prelude::*;

/// Generate expressions the grammar accepts, across all alternatives
fn edtf_strategy() -> impl Strategy<Value = String> {
    let year = prop_oneof![
        (0u32..=9999).prop_map(|y| format!("{:04}", y)),
        (0u32..=9999).prop_map(|y| format!("-{:04}", y)),
        (0u32..=99).prop_map(|c| format!("{:02}uu", c)),
        (0u32..=999).prop_map(|c| format!("{:03}x", c)),
    ];
    let month = (1u32..=12).prop_map(|m| format!("{:02}", m));
    let day = (1u32..=31).prop_map(|d| format!("{:02}", d));
    let qualifier = prop_oneof![Just("?"), Just("~"), Just("?~")];
    prop_oneof![
        year.clone(),
        (year.clone(), month.clone()).prop_map(|(y, m)| format!("{}-{}", y, m)),
        (year.clone(), month.clone(), day.clone())
            .prop_map(|(y, m, d)| format!("{}-{}-{}", y, m, d)),
        (year.clone(), month.clone(), day.clone(), qualifier.clone())
            .prop_map(|(y, m, d, q)| format!("{}-{}-{}{}", y, m, d, q)),
        (year.clone(), qualifier.clone(), month.clone(), day.clone())
            .prop_map(|(y, q, m, d)| format!("{}{}-{}-{}", y, q, m, d)),
        (year.clone(), month.clone(), qualifier, day.clone())
            .prop_map(|(y, m, q, d)| format!("{}-{}{}-{}", y, m, q, d)),
        (year.clone(), year.clone()).prop_map(|(a, b)| format!("{}/{}", a, b)),
        (year.clone(), 21u32..=24).prop_map(|(y, s)| format!("{}-{}", y, s)),
        (year, month, day, 0u32..=23, 0u32..=59, 0u32..=59).prop_map(
            |(y, mo, d, h, mi, s)| format!("{}-{}-{}T{:02}:{:02}:{:02}Z", y, mo, d, h, mi, s)
        ),
        "-?[1-9][0-9]{4,30}".prop_map(|digits| format!("y{}", digits)),
        "-?[0-9]{1,8}e[0-9]{1,3}(p[0-9]{1,2})?".prop_map(|form| format!("y{}", form)),
    ]
}

proptest! {
    #[test]
    fn test_four_digit_years_parse(year in 0u32..=9999, negative in any::<bool>()) {
        let input = if negative { format!("-{:04}", year) } else { format!("{:04}", year) };
        let edtf = parse(&input).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let date = edtf.as_date().ok_or_else(|| TestCaseError::fail("not a date"))?;
        prop_assert_eq!(date.precision(), DatePrecision::Year);
        let expected = if negative { -(year as i64) } else { year as i64 };
        prop_assert_eq!(date.year.value(), Some(expected));
    }

    #[test]
    fn test_three_and_five_digit_years_fail(
        year in prop_oneof![(0u32..=999).prop_map(|y| format!("{:03}", y)),
                            (0u32..=99999).prop_map(|y| format!("{:05}", y))],
        suffix in prop_oneof![Just(""), Just("-01"), Just("-01-01"), Just("/2004")],
    ) {
        let input = format!("{}{}", year, suffix);
        prop_assert!(parse(&input).is_err(), "{} should not parse", input);
    }

    #[test]
    fn test_month_range(month in 0u32..=99) {
        let result = parse(&format!("2004-{:02}", month));
        prop_assert_eq!(result.is_ok(), (1..=12).contains(&month) || (21..=24).contains(&month));
    }

    #[test]
    fn test_month_width(month in 1u32..=9, extra in 0u32..=9) {
        let short = format!("2004-{}", month);
        prop_assert!(parse(&short).is_err(), "{} should not parse", short);
        let long = format!("2004-{:02}{}", month, extra);
        prop_assert!(parse(&long).is_err(), "{} should not parse", long);
    }

    #[test]
    fn test_day_range(day in 0u32..=99) {
        let result = parse(&format!("2004-01-{:02}", day));
        prop_assert_eq!(result.is_ok(), (1..=31).contains(&day));
    }

    #[test]
    fn test_hour_range(hour in 0u32..=99) {
        let result = parse(&format!("2004-01-01T{:02}:00:00", hour));
        prop_assert_eq!(result.is_ok(), hour <= 23);
    }

    #[test]
    fn test_minute_and_second_range(minute in 0u32..=99, second in 0u32..=99) {
        let result = parse(&format!("2004-01-01T12:{:02}:{:02}", minute, second));
        prop_assert_eq!(result.is_ok(), minute <= 59 && second <= 59);
    }

    #[test]
    fn test_display_round_trips(input in edtf_strategy()) {
        let edtf = parse(&input).map_err(|e| TestCaseError::fail(format!("{}: {}", input, e)))?;
        prop_assert_eq!(edtf.to_string(), input);
    }

    #[test]
    fn test_arbitrary_input_never_panics(input in "[0-9uxyep?~^/:TZ+-]{0,24}") {
        if let Err(error) = parse(&input) {
            prop_assert!(error.offset <= input.len());
        }
    }
}
