//! Jalali and Gregorian calendar rules and the conversions between them.

use crate::consts::{
    CENTURY_CYCLE, CYCLE_LEAP_REMAINDERS, ESFAND, ESFAND_DAYS_COMMON, ESFAND_DAYS_LEAP, FEBRUARY,
    FEBRUARY_DAYS_LEAP, FIRST_HALF_DAYS, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, JALALI_CYCLE,
    JALALI_EPOCH_OFFSET, LEAP_YEAR_CYCLE, LONG_MONTH_DAYS, MAX_JALALI_YEAR, MAX_MONTH,
    MAX_JULIAN_DAY, MAX_VALID_YEAR, MEHR, MIN_DAY, MIN_JALALI_YEAR, MIN_JULIAN_DAY, MIN_VALID_YEAR,
    SHORT_MONTH_DAYS,
};
use crate::epoch::EpochInfo;
use crate::julian::{gregorian_to_julian_day, julian_day_to_gregorian};
use crate::types::{CalendarDate, GregorianDate, JulianDay};
use crate::{DateError, JalaliDate};

/// Whether a Jalali year has 366 days.
///
/// Inside the break-point table this is the astronomical rule the
/// conversions use, so Esfand 30 exists exactly when the year is 366 days
/// long. Beyond the table it falls back to
/// [`is_leap_year_jalali_cycle`].
pub fn is_leap_year_jalali(year: i32) -> bool {
    EpochInfo::for_year(year)
        .ok()
        .and_then(|info| info.is_leap())
        .unwrap_or_else(|| is_leap_year_jalali_cycle(year))
}

/// The 33-year cycle approximation of the Jalali leap rule.
///
/// Agrees with [`is_leap_year_jalali`] for 1178..=1633 and drifts away from
/// it near other break points.
pub fn is_leap_year_jalali_cycle(year: i32) -> bool {
    let year = if year <= 0 { year - 1 } else { year };
    CYCLE_LEAP_REMAINDERS.contains(&(year % JALALI_CYCLE))
}

/// Gregorian leap rule, with non-positive years shifted down by one first.
pub const fn is_leap_year_gregorian(year: i32) -> bool {
    let year = if year <= 0 { year - 1 } else { year };
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Jalali month; 0 for a month outside 1..=12.
pub fn jalali_month_length(year: i32, month: u8) -> u8 {
    match month {
        1..MEHR => LONG_MONTH_DAYS,
        MEHR..ESFAND => SHORT_MONTH_DAYS,
        ESFAND if is_leap_year_jalali(year) => ESFAND_DAYS_LEAP,
        ESFAND => ESFAND_DAYS_COMMON,
        _ => 0,
    }
}

/// Days in a Gregorian month; 0 for a month outside 1..=12.
pub const fn gregorian_month_length(year: i32, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        return 0;
    }
    if month == FEBRUARY && is_leap_year_gregorian(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// Days in a Jalali year.
///
/// # Errors
/// Returns `DateError::YearOutOfRange` outside the break-point table.
pub fn jalali_year_length(year: i32) -> Result<i32, DateError> {
    let leap = EpochInfo::for_year(year)?.is_leap().unwrap_or(false);
    Ok(365 + i32::from(leap))
}

fn invalid(date: &CalendarDate) -> DateError {
    DateError::InvalidDate {
        year:  date.year,
        month: i32::from(date.month),
        day:   i32::from(date.day),
    }
}

/// Month and day checks shared by validation and conversion.
fn check_month_day(date: &CalendarDate) -> Result<(), DateError> {
    if date.is_empty() || date.month < 1 || date.month > MAX_MONTH {
        return Err(invalid(date));
    }
    if date.day < MIN_DAY || date.day > jalali_month_length(date.year, date.month) {
        return Err(invalid(date));
    }
    Ok(())
}

/// Checks a Jalali date: not all-zero, month 1..=12, day within the month,
/// year `MIN_VALID_YEAR..=MAX_VALID_YEAR`.
///
/// # Errors
/// `DateError::InvalidDate` for a bad month or day or the all-zero date,
/// `DateError::YearOutOfRange` for a bad year.
pub fn validate_jalali(date: &CalendarDate) -> Result<(), DateError> {
    check_month_day(date)?;
    if !(MIN_VALID_YEAR..=MAX_VALID_YEAR).contains(&date.year) {
        return Err(DateError::YearOutOfRange {
            year: date.year,
            min:  MIN_VALID_YEAR,
            max:  MAX_VALID_YEAR,
        });
    }
    Ok(())
}

pub fn is_valid_jalali(date: &CalendarDate) -> bool {
    validate_jalali(date).is_ok()
}

/// Julian day number of Farvardin 1.
fn new_year_julian_day(year: i32) -> Result<JulianDay, DateError> {
    let info = EpochInfo::for_year_without_leap(year)?;
    Ok(gregorian_to_julian_day(info.gregorian_year, 3, info.march))
}

/// Julian day number of a Jalali date.
///
/// # Errors
/// `DateError::InvalidDate` for a bad month or day, `DateError::YearOutOfRange`
/// outside `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`.
pub fn jalali_to_julian_day(date: &CalendarDate) -> Result<JulianDay, DateError> {
    check_month_day(date)?;
    let month = i32::from(date.month);
    let offset = (month - 1) * 31 - (month / 7) * (month - 7) + i32::from(date.day) - 1;
    Ok(new_year_julian_day(date.year)? + offset)
}

/// Jalali date (at midnight) of a Julian day number.
///
/// # Errors
/// Returns `DateError::YearOutOfRange` when the day falls outside the
/// supported Jalali years.
pub fn julian_day_to_jalali(jdn: JulianDay) -> Result<JalaliDate, DateError> {
    let out_of_range = |year| DateError::YearOutOfRange {
        year,
        min: MIN_JALALI_YEAR,
        max: MAX_JALALI_YEAR,
    };
    if jdn.get() < MIN_JULIAN_DAY {
        return Err(out_of_range(MIN_JALALI_YEAR - 1));
    }
    if jdn.get() > MAX_JULIAN_DAY {
        return Err(out_of_range(MAX_JALALI_YEAR + 1));
    }

    let gregorian_year = julian_day_to_gregorian(jdn).year;
    let mut year = gregorian_year - JALALI_EPOCH_OFFSET;
    let mut k;

    if year > MAX_JALALI_YEAR {
        // the first Gregorian months after the table still belong to its last year
        year = MAX_JALALI_YEAR;
        k = jdn - new_year_julian_day(year)?;
    } else {
        k = jdn - new_year_julian_day(year)?;
        if k < 0 {
            year -= 1;
            k += jalali_year_length(year)?;
        }
    }

    if k >= jalali_year_length(year)? {
        return Err(out_of_range(year + 1));
    }

    // k is 0..366 here, so months and days fit in u8
    let (month, day) = if k < FIRST_HALF_DAYS {
        (1 + k / 31, k % 31 + 1)
    } else {
        let k = k - FIRST_HALF_DAYS;
        (7 + k / 30, k % 30 + 1)
    };
    Ok(JalaliDate::from(CalendarDate::ymd(year, month as u8, day as u8)))
}

/// Gregorian date of a Jalali date, keeping its time of day.
///
/// # Errors
/// Same as [`jalali_to_julian_day`].
pub fn to_gregorian(date: &JalaliDate) -> Result<GregorianDate, DateError> {
    let jdn = jalali_to_julian_day(date)?;
    Ok(GregorianDate::from(
        julian_day_to_gregorian(jdn).fields().with_time_of(**date),
    ))
}

/// Jalali date of a Gregorian date, keeping its time of day.
///
/// # Errors
/// Same as [`julian_day_to_jalali`].
pub fn to_jalali(date: &GregorianDate) -> Result<JalaliDate, DateError> {
    // Gregorian years that overlap some supported Jalali year
    let gregorian_years =
        MIN_JALALI_YEAR + JALALI_EPOCH_OFFSET - 1..=MAX_JALALI_YEAR + JALALI_EPOCH_OFFSET + 1;
    if !gregorian_years.contains(&date.year) {
        return Err(DateError::YearOutOfRange {
            year: date.year.saturating_sub(JALALI_EPOCH_OFFSET),
            min:  MIN_JALALI_YEAR,
            max:  MAX_JALALI_YEAR,
        });
    }
    let jalali = julian_day_to_jalali(date.to_julian_day())?;
    Ok(JalaliDate::from(jalali.fields().with_time_of(**date)))
}

/// Supported Jalali years as an inclusive range.
pub const fn supported_years() -> std::ops::RangeInclusive<i32> {
    MIN_JALALI_YEAR..=MAX_JALALI_YEAR
}
