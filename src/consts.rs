/// Lines of this many bytes or more are discarded before parsing.
/// No well-formed `MM/DD/YYYY` date comes close to this length.
pub const MAX_LINE_LEN: usize = 40;

/// Number of `/`-separated fields in a date (month, day, year)
pub const DATE_FIELDS: usize = 3;

/// Largest valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: i32 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in each month of a common year (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Three-letter uppercase month names used by the long date form
pub const MONTH_ABBREVIATIONS: [&str; 13] = [
    "", "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Field separator of the month-first input form
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// Count argument that asks the validator for every valid date
pub const VALIDATE_ALL_DATES: i32 = 0;
