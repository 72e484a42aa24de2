//! Convert dates between the Jalali (Solar Hijri) and Gregorian calendars,
//! and render them with Persian month, weekday and season names.
//!
//! Every conversion goes through a [`JulianDay`]. Jalali years start on the
//! day computed from a table of historical break points, which covers Jalali
//! years -61 through 3177.
//!
//! # Examples
//!
//! ```
//! use persian_date::{GregorianDate, JalaliDate};
//!
//! let nowruz: JalaliDate = "1402-01-01".parse().unwrap();
//! assert_eq!(GregorianDate::new(2023, 3, 21), nowruz.to_gregorian().unwrap());
//!
//! let y2k = JalaliDate::from_gregorian(GregorianDate::new(2000, 1, 1)).unwrap();
//! assert_eq!("1378/10/11", y2k.format("YYYY/MM/DD"));
//! ```
//!
//! Nothing here reads the system clock: callers hand in the date or
//! timestamp they want converted.

pub mod calendar;
mod consts;
pub mod digits;
pub mod epoch;
mod error;
pub mod format;
pub mod interop;
pub mod julian;
pub mod ordering;
mod prelude;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use digits::{to_latin_digits, to_persian_digits};
pub use epoch::EpochInfo;
pub use error::DateError;
pub use format::{DateFormatter, FormatTemplate};
pub use ordering::{ToJalali, Week};
pub use types::{CalendarDate, GregorianDate, JulianDay};

use crate::prelude::*;
use std::str::FromStr;
use tracing::debug;

/// A date in the Jalali calendar, with an optional time of day.
///
/// [`JalaliDate::new`] validates its fields; converting from a raw
/// [`CalendarDate`] does not, so conversions report invalid fields instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Deref)]
#[display(fmt = "{_0}")]
pub struct JalaliDate(CalendarDate);

impl JalaliDate {
    /// Creates a validated date at midnight.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` or `DateError::YearOutOfRange` when the
    /// fields do not form a valid Jalali date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let fields = CalendarDate::ymd(year, month, day);
        calendar::validate_jalali(&fields)?;
        Ok(Self(fields))
    }

    /// Same date with the given time of day.
    #[must_use]
    pub const fn with_time(self, hour: u8, minute: u8, second: u8) -> Self {
        Self(self.0.with_time(hour, minute, second))
    }

    pub const fn fields(&self) -> CalendarDate {
        self.0
    }

    /// Parses `YYYY-MM-DD`.
    ///
    /// # Errors
    /// `DateError::InvalidFormat` unless there are exactly three
    /// hyphen-separated segments, `DateError::InvalidNumber` for a segment that
    /// is not an integer, and the validation errors of [`JalaliDate::new`].
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let parts: Vec<&str> = text.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            debug!(text, segments = parts.len(), "rejecting date string");
            return Err(DateError::InvalidFormat(text.to_owned()));
        }

        let year = parse_segment("year", parts[0])?;
        let month = parse_segment("month", parts[1])?;
        let day = parse_segment("day", parts[2])?;

        let invalid = || DateError::InvalidDate { year, month, day };
        let month = u8::try_from(month).map_err(|_| invalid())?;
        let day = u8::try_from(day).map_err(|_| invalid())?;
        Self::new(year, month, day)
    }

    /// Jalali date of a Gregorian date, keeping its time of day.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` outside the supported years.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, DateError> {
        calendar::to_jalali(&date)
    }

    /// # Errors
    /// Returns `DateError::YearOutOfRange` outside the supported years.
    pub fn from_julian_day(jdn: JulianDay) -> Result<Self, DateError> {
        calendar::julian_day_to_jalali(jdn)
    }

    /// # Errors
    /// Returns `DateError` when the fields are invalid or the year is outside the
    /// break-point table.
    pub fn to_gregorian(&self) -> Result<GregorianDate, DateError> {
        calendar::to_gregorian(self)
    }

    /// # Errors
    /// Same as [`JalaliDate::to_gregorian`].
    pub fn to_julian_day(&self) -> Result<JulianDay, DateError> {
        calendar::jalali_to_julian_day(&self.0)
    }

    pub fn is_valid(&self) -> bool {
        calendar::is_valid_jalali(&self.0)
    }

    pub fn is_leap_year(&self) -> bool {
        calendar::is_leap_year_jalali(self.0.year)
    }

    pub fn month_length(&self) -> u8 {
        calendar::jalali_month_length(self.0.year, self.0.month)
    }

    /// Renders the date through a template; see [`format`] for the tokens.
    pub fn format(&self, template: &str) -> String {
        format::format(self, template, false)
    }
}

fn parse_segment(component: &'static str, segment: &str) -> Result<i32, DateError> {
    segment.parse::<i32>().map_err(|_| DateError::InvalidNumber {
        component,
        value: segment.to_owned(),
    })
}

impl FromStr for JalaliDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
