use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
    MONTH_ABBREVIATIONS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: i32) -> Result<Self, ParseError> {
        u8::try_from(value)
            .ok()
            .filter(|&m| m <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(value))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Three-letter uppercase abbreviation, e.g. `FEB`
    pub const fn abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[self.0.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i32::from(value))
    }
}

impl TryFrom<i32> for Month {
    type Error = ParseError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Calendar checks

/// Gregorian leap year rule, applied to any year including zero and negatives.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(month: Month, year: i32) -> u8 {
    let days = DAYS_IN_MONTH[month.get() as usize];
    if month.get() == FEBRUARY && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

pub fn is_valid_month(month: i32) -> bool {
    Month::new(month).is_ok()
}

/// Returns true if `day` exists in `month` of `year`.
///
/// An out-of-range month is never valid and is not looked up in the table.
pub fn is_valid_day(day: i32, month: i32, year: i32) -> bool {
    Month::new(month)
        .is_ok_and(|month| (MIN_DAY..=i32::from(days_in_month(month, year))).contains(&day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_zero() {
        let result = Month::new(0);
        assert!(matches!(result, Err(ParseError::InvalidMonth(0))));
    }

    #[test]
    fn test_month_new_invalid_out_of_range() {
        let result = Month::new(13);
        assert!(matches!(result, Err(ParseError::InvalidMonth(13))));

        let result = Month::new(-1);
        assert!(matches!(result, Err(ParseError::InvalidMonth(-1))));

        // would be 1 if truncated to a byte
        let result = Month::new(257);
        assert!(matches!(result, Err(ParseError::InvalidMonth(257))));
    }

    #[test]
    fn test_month_get_and_abbreviation() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.get(), 8);
        assert_eq!(month.abbreviation(), "AUG");
        assert_eq!(Month::new(1).unwrap().abbreviation(), "JAN");
        assert_eq!(Month::new(12).unwrap().abbreviation(), "DEC");
    }

    #[test]
    fn test_month_display() {
        let month = Month::new(8).unwrap();
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_try_from() {
        let month: Month = 8u8.try_into().unwrap();
        assert_eq!(month.get(), 8);

        let result: Result<Month, _> = 0u8.try_into();
        assert!(result.is_err());

        let result: Result<Month, _> = 13i32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 0,
                is_leap: true,
                description: "zero is divisible by 400",
            },
            TestCase {
                year: -4,
                is_leap: true,
                description: "negative, divisible by 4",
            },
            TestCase {
                year: -100,
                is_leap: false,
                description: "negative century",
            },
            TestCase {
                year: -400,
                is_leap: true,
                description: "negative, divisible by 400",
            },
            TestCase {
                year: -1,
                is_leap: false,
                description: "negative, not divisible by 4",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_is_leap_year_extremes() {
        assert!(!is_leap_year(i32::MAX));
        // -2^31 is divisible by 4 but has no factor of 25
        assert!(is_leap_year(i32::MIN));
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(Month::new(month).unwrap(), 2023),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        let feb = Month::new(2).unwrap();
        assert_eq!(days_in_month(feb, 2024), 29);
        assert_eq!(days_in_month(feb, 2000), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(feb, 2023), 28);
        assert_eq!(days_in_month(feb, 1900), 28, "Century year not divisible by 400");
    }

    #[test]
    fn test_is_valid_month() {
        assert!(is_valid_month(1));
        assert!(is_valid_month(12));
        assert!(!is_valid_month(0));
        assert!(!is_valid_month(13));
        assert!(!is_valid_month(-12));
    }

    #[test]
    fn test_is_valid_day_leap_boundary() {
        assert!(is_valid_day(29, 2, 2000));
        assert!(!is_valid_day(29, 2, 1900));
        assert!(!is_valid_day(30, 2, 2000));
        assert!(is_valid_day(28, 2, 2023));
        assert!(!is_valid_day(29, 2, 2023));
    }

    #[test]
    fn test_is_valid_day_bounds() {
        assert!(is_valid_day(1, 1, 2024));
        assert!(is_valid_day(31, 1, 2024));
        assert!(!is_valid_day(32, 1, 2024));
        assert!(is_valid_day(30, 4, 2020));
        assert!(!is_valid_day(31, 4, 2020));
        assert!(!is_valid_day(0, 1, 2024));
        assert!(!is_valid_day(-1, 1, 2024));
        assert!(!is_valid_day(i32::MIN, 1, 2024));
    }

    #[test]
    fn test_is_valid_day_rejects_bad_month() {
        assert!(!is_valid_day(1, 0, 2024));
        assert!(!is_valid_day(1, 13, 2024));
        assert!(!is_valid_day(1, i32::MAX, 2024));
    }
}
