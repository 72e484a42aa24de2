use crate::calendar::{gregorian_month_length, is_leap_year_gregorian};
use crate::consts::DAYS_PER_WEEK;
use crate::julian::{gregorian_to_julian_day, julian_day_to_gregorian};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Civil date and time-of-day fields in an unspecified calendar.
///
/// The fields are not validated here; [`crate::JalaliDate::new`] and
/// [`crate::calendar::validate_jalali`] check them against a calendar.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{year}-{month:02}-{day:02}")]
pub struct CalendarDate {
    pub year:   i32,
    pub month:  u8,
    pub day:    u8,
    #[serde(default)]
    pub hour:   u8,
    #[serde(default)]
    pub minute: u8,
    #[serde(default)]
    pub second: u8,
}

impl CalendarDate {
    /// Date at midnight.
    pub const fn ymd(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Same date with the given time of day.
    #[must_use]
    pub const fn with_time(self, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
            ..self
        }
    }

    /// Same time of day taken from `other`.
    #[must_use]
    pub(crate) const fn with_time_of(self, other: Self) -> Self {
        self.with_time(other.hour, other.minute, other.second)
    }

    /// True for the all-zero date, which no calendar accepts.
    pub const fn is_empty(&self) -> bool {
        self.year == 0 && self.month == 0 && self.day == 0
    }

    /// `(year, month, day)` without the time of day.
    pub const fn to_ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// `(hour, minute, second)`.
    pub const fn clock(&self) -> (u8, u8, u8) {
        (self.hour, self.minute, self.second)
    }
}

/// A calendar-independent day number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Deref, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JulianDay(i32);

impl JulianDay {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Day of week, 0 = Saturday through 6 = Friday.
    pub const fn weekday(self) -> u8 {
        // JDN 0 fell on a Monday
        (self.0 + 2).rem_euclid(DAYS_PER_WEEK) as u8
    }

    /// Shifts by `days`, or `None` on overflow.
    pub const fn checked_add(self, days: i32) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl Add<i32> for JulianDay {
    type Output = Self;

    fn add(self, rhs: i32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i32> for JulianDay {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDay {
    type Output = i32;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// A date in the proleptic Gregorian calendar.
///
/// Gregorian fields are trusted: they are pushed through the day-number
/// arithmetic without validation.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[display(fmt = "{_0}")]
#[serde(transparent)]
pub struct GregorianDate(CalendarDate);

impl GregorianDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self(CalendarDate::ymd(year, month, day))
    }

    #[must_use]
    pub const fn with_time(self, hour: u8, minute: u8, second: u8) -> Self {
        Self(self.0.with_time(hour, minute, second))
    }

    pub const fn fields(&self) -> CalendarDate {
        self.0
    }

    pub fn to_julian_day(&self) -> JulianDay {
        gregorian_to_julian_day(self.0.year, i32::from(self.0.month), i32::from(self.0.day))
    }

    /// Midnight of the day `jdn`.
    pub fn from_julian_day(jdn: JulianDay) -> Self {
        julian_day_to_gregorian(jdn)
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year_gregorian(self.0.year)
    }

    pub fn month_length(&self) -> u8 {
        gregorian_month_length(self.0.year, self.0.month)
    }

    /// Day of week, 0 = Saturday through 6 = Friday.
    pub fn weekday(&self) -> u8 {
        self.to_julian_day().weekday()
    }
}
