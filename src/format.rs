//! Rendering of dates in the long `DD MON YYYY` form.

use crate::{Month, ParsedDate, prelude::*};

/// A date ready to be written as `DD MON YYYY`.
///
/// The day is zero-padded to two digits and the year is written as-is, with
/// no padding or truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02} {} {}", day, "month.abbreviation()", year)]
pub struct LongDate {
    day:   i32,
    month: Month,
    year:  i32,
}

/// The caller broke the converter's contract of pre-validated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("internal error: month {month} has no abbreviation (input was not validated)")]
    MonthOutOfRange { month: i32 },
}

impl TryFrom<&ParsedDate> for LongDate {
    type Error = FormatError;

    /// Only the month is checked, since it indexes the abbreviation table.
    /// The day is trusted.
    fn try_from(date: &ParsedDate) -> Result<Self, Self::Error> {
        let month = Month::new(date.month()).map_err(|_| FormatError::MonthOutOfRange {
            month: date.month(),
        })?;
        Ok(Self {
            day: date.day(),
            month,
            year: date.year(),
        })
    }
}

/// Formats a parsed date as `DD MON YYYY`, e.g. `02/29/2000` -> `29 FEB 2000`.
///
/// # Errors
/// Returns [`FormatError::MonthOutOfRange`] if the month is outside 1-12.
/// Callers are expected to have validated the date first, so this signals a
/// programming error rather than bad user input.
pub fn format_date(date: &ParsedDate) -> Result<String, FormatError> {
    LongDate::try_from(date).map(|long| long.to_string())
}
