//! Validation and reformatting of `MM/DD/YYYY` date lines.
//!
//! The crate backs two line-oriented programs meant to run as a pipeline:
//!
//! - `validate-dates COUNT` copies up to `COUNT` valid dates from stdin to
//!   stdout (0 means all of them) and drops everything else.
//! - `convert-dates` rewrites each incoming date as `DD MON YYYY`.
//!
//! ```text
//! validate-dates 10 < dates.dat | convert-dates > output.dat
//! ```
//!
//! Both share the parsing core exposed here:
//!
//! ```
//! use mdy_dates::{ParsedDate, format_date, is_valid_date};
//!
//! let date: ParsedDate = "02/29/2000".parse().unwrap();
//! assert!(date.is_valid());
//! assert_eq!(format_date(&date).unwrap(), "29 FEB 2000");
//!
//! assert!(!is_valid_date("02/29/1900"));
//! assert!(!is_valid_date("02/29/2000/extra"));
//! ```

mod consts;
mod format;
mod integer;
mod prelude;
mod types;

pub mod cli;
pub mod pipeline;

pub use consts::*;
pub use format::{FormatError, LongDate, format_date};
pub use integer::{IntegerError, parse_int};
pub use types::{Month, days_in_month, is_leap_year, is_valid_day, is_valid_month};

use crate::prelude::*;
use std::str::FromStr;

/// The three numeric fields of a `MM/DD/YYYY` string.
///
/// Only produced by a successful [`FromStr`] split; nothing about the
/// calendar is checked until [`ParsedDate::validate`] or
/// [`ParsedDate::is_valid`] is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{}", month, day, year)]
pub struct ParsedDate {
    month: i32,
    day:   i32,
    year:  i32,
}

/// Which field of a date failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "year")]
    Year,
}

const FIELD_ORDER: [DateField; DATE_FIELDS] = [DateField::Month, DateField::Day, DateField::Year];

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(
        fmt = "Invalid date: expected {} '{}'-separated fields, found {}",
        DATE_FIELDS,
        MONTH_FIRST_SEPARATOR,
        found
    )]
    FieldCount { found: usize },
    #[display(fmt = "Invalid date: {field} field {text:?}: {source}")]
    InvalidField {
        field:  DateField,
        text:   String,
        source: IntegerError,
    },
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(i32),
    #[display(fmt = "Invalid day {day} for month {month} of year {year}")]
    InvalidDay { month: i32, day: i32, year: i32 },
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidField { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl ParseError {
    /// True for errors about the shape of the text (field count, digits,
    /// overflow), false for well-formed dates that do not exist.
    pub const fn is_structural(&self) -> bool {
        matches!(self, Self::FieldCount { .. } | Self::InvalidField { .. })
    }
}

impl ParsedDate {
    /// Creates a date from already-parsed fields without any calendar check
    pub const fn new(month: i32, day: i32, year: i32) -> Self {
        Self { month, day, year }
    }

    pub const fn month(&self) -> i32 {
        self.month
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Checks the month range, then the day against that month and year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the month is outside 1-12, or
    /// `ParseError::InvalidDay` if the day does not exist in that month.
    pub fn validate(&self) -> Result<(), ParseError> {
        let month = Month::new(self.month)?;
        if (MIN_DAY..=i32::from(days_in_month(month, self.year))).contains(&self.day) {
            Ok(())
        } else {
            Err(ParseError::InvalidDay {
                month: self.month,
                day:   self.day,
                year:  self.year,
            })
        }
    }

    /// Returns true if the month is in range and the day exists in it.
    pub fn is_valid(&self) -> bool {
        is_valid_month(self.month) && is_valid_day(self.day, self.month, self.year)
    }
}

impl FromStr for ParsedDate {
    type Err = ParseError;

    /// Splits on `/` into exactly month, day and year.
    ///
    /// Empty fields are kept and fail the digit check, so `02//2000` and
    /// `/02/2000` are rejected rather than read as zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(MONTH_FIRST_SEPARATOR).collect();
        if parts.len() != DATE_FIELDS {
            return Err(ParseError::FieldCount { found: parts.len() });
        }

        let mut values = [0; DATE_FIELDS];
        for ((value, text), field) in values.iter_mut().zip(&parts).zip(FIELD_ORDER) {
            *value = parse_int(text).map_err(|source| ParseError::InvalidField {
                field,
                text: (*text).to_owned(),
                source,
            })?;
        }

        let [month, day, year] = values;
        Ok(Self { month, day, year })
    }
}

/// Splits and validates a candidate line in one step.
///
/// Any structural or calendar error makes the candidate invalid.
pub fn is_valid_date(candidate: &str) -> bool {
    candidate
        .parse::<ParsedDate>()
        .and_then(|date| date.validate())
        .is_ok()
}

impl serde::Serialize for ParsedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ParsedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
