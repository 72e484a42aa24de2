//! Day arithmetic and chronological ordering of Jalali dates.
//!
//! Everything here is measured in Julian day numbers. Collections accept any
//! [`ToJalali`] value, so Jalali dates, Gregorian dates and `YYYY-MM-DD`
//! strings can be mixed through `&dyn ToJalali`.

use crate::calendar::{self, jalali_to_julian_day};
use crate::consts::{FIRST_HALF_DAYS, MEHR};
use crate::{DateError, GregorianDate, JalaliDate, JulianDay};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Anything that can be read as a Jalali date.
pub trait ToJalali {
    /// # Errors
    /// Returns `DateError` when the value does not name a supported Jalali date.
    fn to_jalali(&self) -> Result<JalaliDate, DateError>;
}

/// Accepted when the date converts, which is the same year range a
/// Gregorian date or day number normalizes into.
impl ToJalali for JalaliDate {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        jalali_to_julian_day(self)?;
        Ok(*self)
    }
}

impl ToJalali for GregorianDate {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        calendar::to_jalali(self)
    }
}

impl ToJalali for JulianDay {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        calendar::julian_day_to_jalali(*self)
    }
}

impl ToJalali for str {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        JalaliDate::parse(self)
    }
}

impl ToJalali for String {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        JalaliDate::parse(self)
    }
}

impl<T: ToJalali + ?Sized> ToJalali for &T {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        (**self).to_jalali()
    }
}

/// Shifts a date by `days`, keeping its time of day.
///
/// # Errors
/// Fails when the date is invalid or the result leaves the supported years.
pub fn add_days(date: &JalaliDate, days: i32) -> Result<JalaliDate, DateError> {
    let jdn = jalali_to_julian_day(date)?;
    let shifted = jdn.checked_add(days).ok_or(DateError::YearOutOfRange {
        year: date.year,
        min:  crate::MIN_JALALI_YEAR,
        max:  crate::MAX_JALALI_YEAR,
    })?;
    let result = calendar::julian_day_to_jalali(shifted)?;
    Ok(JalaliDate::from(result.fields().with_time_of(**date)))
}

/// # Errors
/// Same as [`add_days`].
pub fn subtract_days(date: &JalaliDate, days: i32) -> Result<JalaliDate, DateError> {
    let days = days.checked_neg().ok_or(DateError::YearOutOfRange {
        year: date.year,
        min:  crate::MIN_JALALI_YEAR,
        max:  crate::MAX_JALALI_YEAR,
    })?;
    add_days(date, days)
}

/// Days from `start` to `end`; positive when `end` is later.
///
/// # Errors
/// Fails when either date cannot be converted.
pub fn difference(start: &JalaliDate, end: &JalaliDate) -> Result<i32, DateError> {
    Ok(jalali_to_julian_day(end)? - jalali_to_julian_day(start)?)
}

/// Days left from `date` until `end`.
///
/// # Errors
/// Same as [`difference`].
pub fn until(date: &JalaliDate, end: &JalaliDate) -> Result<i32, DateError> {
    difference(date, end)
}

/// Days elapsed from `start` to `date`.
///
/// # Errors
/// Same as [`difference`].
pub fn since(start: &JalaliDate, date: &JalaliDate) -> Result<i32, DateError> {
    difference(start, date)
}

/// Same year, month and day; the time of day is ignored.
pub fn equal(a: &JalaliDate, b: &JalaliDate) -> bool {
    a.to_ymd() == b.to_ymd()
}

/// Chronological order of two dates by day.
///
/// # Errors
/// Fails when either date cannot be converted.
pub fn compare(a: &JalaliDate, b: &JalaliDate) -> Result<Ordering, DateError> {
    Ok(jalali_to_julian_day(a)?.cmp(&jalali_to_julian_day(b)?))
}

/// Normalizes every input, dropping the ones that do not convert.
fn normalize<I>(dates: I) -> Vec<(JulianDay, JalaliDate)>
where
    I: IntoIterator,
    I::Item: ToJalali,
{
    dates
        .into_iter()
        .filter_map(|input| {
            let converted = input
                .to_jalali()
                .and_then(|date| Ok((jalali_to_julian_day(&date)?, date)));
            match converted {
                Ok(pair) => Some(pair),
                Err(error) => {
                    debug!(%error, "dropping date that does not convert");
                    None
                },
            }
        })
        .collect()
}

/// Dates in chronological order. Equal days keep their input order;
/// inputs that do not convert are dropped.
///
/// # Example
///
/// ```
/// use persian_date::{GregorianDate, ToJalali, ordering::sort};
///
/// let gregorian = GregorianDate::new(2023, 3, 21);
/// let inputs: [&dyn ToJalali; 3] = [&"1402-06-15", &gregorian, &"not a date"];
/// let sorted = sort(inputs);
/// assert_eq!(sorted.len(), 2);
/// assert_eq!(sorted[0].to_string(), "1402-01-01");
/// ```
pub fn sort<I>(dates: I) -> Vec<JalaliDate>
where
    I: IntoIterator,
    I::Item: ToJalali,
{
    let mut pairs = normalize(dates);
    pairs.sort_by_key(|(jdn, _)| *jdn);
    pairs.into_iter().map(|(_, date)| date).collect()
}

/// Dates matching `predicate`, in input order; inputs that do not convert
/// are dropped.
pub fn filter<I, P>(predicate: P, dates: I) -> Vec<JalaliDate>
where
    I: IntoIterator,
    I::Item: ToJalali,
    P: Fn(&JalaliDate) -> bool,
{
    normalize(dates)
        .into_iter()
        .map(|(_, date)| date)
        .filter(|date| predicate(date))
        .collect()
}

/// Earliest date, the first one on ties. `None` if nothing converts.
pub fn min<I>(dates: I) -> Option<JalaliDate>
where
    I: IntoIterator,
    I::Item: ToJalali,
{
    pick(dates, Ordering::Less)
}

/// Latest date, the first one on ties. `None` if nothing converts.
pub fn max<I>(dates: I) -> Option<JalaliDate>
where
    I: IntoIterator,
    I::Item: ToJalali,
{
    pick(dates, Ordering::Greater)
}

fn pick<I>(dates: I, wanted: Ordering) -> Option<JalaliDate>
where
    I: IntoIterator,
    I::Item: ToJalali,
{
    normalize(dates)
        .into_iter()
        .reduce(|best, next| if next.0.cmp(&best.0) == wanted { next } else { best })
        .map(|(_, date)| date)
}

/// Day of week, 0 = Saturday through 6 = Friday.
///
/// # Errors
/// Fails when the date cannot be converted.
pub fn weekday(date: &JalaliDate) -> Result<u8, DateError> {
    Ok(jalali_to_julian_day(date)?.weekday())
}

/// Day of the year, 1 for Farvardin 1 up to 365 or 366.
///
/// # Errors
/// Same as [`calendar::validate_jalali`].
pub fn day_of_year(date: &JalaliDate) -> Result<u16, DateError> {
    calendar::validate_jalali(date)?;
    let month = i32::from(date.month);
    let before = if date.month < MEHR {
        (month - 1) * 31
    } else {
        FIRST_HALF_DAYS + (month - i32::from(MEHR)) * 30
    };
    // at most 336 + 30
    Ok((before + i32::from(date.day)) as u16)
}

/// The Saturday-to-Friday week containing `date`.
///
/// # Errors
/// Same as [`Week::containing`].
pub fn week(date: &JalaliDate) -> Result<Week, DateError> {
    Week::containing(date)
}

/// The Saturday-to-Friday week around a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week {
    pub saturday: JalaliDate,
    pub friday:   JalaliDate,
}

impl Week {
    /// # Errors
    /// Fails when the date or either end of its week cannot be converted.
    pub fn containing(date: &JalaliDate) -> Result<Self, DateError> {
        let jdn = jalali_to_julian_day(date)?;
        let saturday = jdn - i32::from(jdn.weekday());
        Ok(Self {
            saturday: calendar::julian_day_to_jalali(saturday)?,
            friday:   calendar::julian_day_to_jalali(saturday + 6)?,
        })
    }

    pub fn contains(&self, date: &JalaliDate) -> bool {
        matches!(
            (compare(&self.saturday, date), compare(date, &self.friday)),
            (Ok(Ordering::Less | Ordering::Equal), Ok(Ordering::Less | Ordering::Equal))
        )
    }
}
