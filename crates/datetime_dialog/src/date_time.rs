use std::{fmt, str::FromStr};

use chrono::{Datelike as _, NaiveDate, NaiveDateTime, Timelike as _};

/// The one accepted spelling of a date-time string: `yyyy-MM-dd'T'HH:mm:ss.SSS'Z'`.
///
/// This is what `Date.prototype.toISOString` produces in JavaScript.
/// The trailing `Z` is matched literally: the fields are used as written, without any time zone conversion.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Why a date-time string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeParseError {
    /// Not a date-time at all, or not a real calendar date (e.g. February 30th).
    #[error("{0}")]
    Invalid(#[from] chrono::ParseError),

    /// A valid date-time, but not spelled as `yyyy-MM-ddTHH:mm:ss.SSSZ`.
    #[error("expected the form yyyy-MM-ddTHH:mm:ss.SSSZ")]
    NotCanonical,
}

/// A parsed, locale-independent point on the calendar.
///
/// Carries year, month, day, hour, minute, second and millisecond.
/// Months are exposed both 1-based ([`Self::month`]) and 0-based ([`Self::month0`]),
/// the latter being what picker widgets report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarValue(NaiveDateTime);

impl CalendarValue {
    /// Parse a string of the exact form `yyyy-MM-ddTHH:mm:ss.SSSZ`.
    ///
    /// ```
    /// # use datetime_dialog::CalendarValue;
    /// let value = CalendarValue::parse("2024-02-29T13:45:10.250Z").unwrap();
    /// assert_eq!((value.year(), value.month0(), value.day()), (2024, 1, 29));
    /// assert!(CalendarValue::parse("2023-02-29T13:45:10.250Z").is_err());
    /// ```
    ///
    /// # Errors
    /// If the string does not follow [`DATE_TIME_FORMAT`] exactly, or names a date that doesn't exist.
    pub fn parse(s: &str) -> Result<Self, DateTimeParseError> {
        let value = Self(NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)?);

        // chrono is lenient about digit counts and a missing fraction, and accepts leap seconds:
        if value.format() == s && value.0.nanosecond() < 1_000_000_000 {
            Ok(value)
        } else {
            Err(DateTimeParseError::NotCanonical)
        }
    }

    /// The current wall-clock time in the host's local time zone.
    pub fn now() -> Self {
        Self(chrono::Local::now().naive_local())
    }

    #[inline]
    pub fn from_naive(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }

    #[inline]
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Format as `yyyy-MM-ddTHH:mm:ss.SSSZ`.
    pub fn format(&self) -> String {
        self.0.format(DATE_TIME_FORMAT).to_string()
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, starting at 1 for January.
    #[inline]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Month of the year, starting at 0 for January.
    #[inline]
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    #[inline]
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    #[inline]
    pub fn millisecond(&self) -> u32 {
        self.0.nanosecond() / 1_000_000
    }
}

impl From<NaiveDateTime> for CalendarValue {
    #[inline]
    fn from(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }
}

impl FromStr for CalendarValue {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CalendarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
