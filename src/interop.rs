//! Conversions from Unix timestamps and `chrono` dates.
//!
//! Timestamps are read as UTC. `chrono` values contribute their civil fields
//! only; a `DateTime` is taken at its local wall-clock time.

use crate::calendar;
use crate::consts::{SECONDS_PER_DAY, UNIX_EPOCH_JDN};
use crate::{CalendarDate, DateError, GregorianDate, JalaliDate, JulianDay, ToJalali};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};

/// Splits a timestamp into a day number and the seconds into that day.
fn split_timestamp(secs: i64) -> Option<(JulianDay, u32)> {
    let days = i32::try_from(secs.div_euclid(SECONDS_PER_DAY)).ok()?;
    let jdn = JulianDay::new(UNIX_EPOCH_JDN).checked_add(days)?;
    let seconds = u32::try_from(secs.rem_euclid(SECONDS_PER_DAY)).ok()?;
    Some((jdn, seconds))
}

fn clock_of(seconds: u32) -> (u8, u8, u8) {
    // seconds < 86400
    ((seconds / 3600) as u8, (seconds / 60 % 60) as u8, (seconds % 60) as u8)
}

fn seconds_of(date: &CalendarDate) -> i64 {
    i64::from(date.hour) * 3600 + i64::from(date.minute) * 60 + i64::from(date.second)
}

impl GregorianDate {
    /// UTC date and time of a Unix timestamp, or `None` when the day number
    /// does not fit.
    ///
    /// ```
    /// use persian_date::GregorianDate;
    ///
    /// let date = GregorianDate::from_unix_timestamp(1234).unwrap();
    /// assert_eq!(date, GregorianDate::new(1970, 1, 1).with_time(0, 20, 34));
    /// ```
    pub fn from_unix_timestamp(secs: i64) -> Option<Self> {
        let (jdn, seconds) = split_timestamp(secs)?;
        let (hour, minute, second) = clock_of(seconds);
        Some(Self::from_julian_day(jdn).with_time(hour, minute, second))
    }

    /// Seconds since 1970-01-01 00:00:00 UTC.
    pub fn to_unix_timestamp(&self) -> i64 {
        let days = i64::from(self.to_julian_day() - JulianDay::new(UNIX_EPOCH_JDN));
        days * SECONDS_PER_DAY + seconds_of(self)
    }

    /// `None` when the fields are not a real Gregorian date.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.day))
    }

    pub fn to_naive_date_time(&self) -> Option<NaiveDateTime> {
        self.to_naive_date()?
            .and_hms_opt(u32::from(self.hour), u32::from(self.minute), u32::from(self.second))
    }
}

impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        // chrono keeps month in 1..=12 and day in 1..=31
        Self::new(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl From<NaiveDateTime> for GregorianDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::from(value.date()).with_time(
            value.hour() as u8,
            value.minute() as u8,
            // a leap second reads as :59
            value.second().min(59) as u8,
        )
    }
}

impl JalaliDate {
    /// Jalali date and time (UTC) of a Unix timestamp.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` outside the supported years.
    pub fn from_unix_timestamp(secs: i64) -> Result<Self, DateError> {
        let gregorian = GregorianDate::from_unix_timestamp(secs).ok_or(DateError::YearOutOfRange {
            year: if secs < 0 { i32::MIN } else { i32::MAX },
            min:  crate::MIN_JALALI_YEAR,
            max:  crate::MAX_JALALI_YEAR,
        })?;
        calendar::to_jalali(&gregorian)
    }

    /// # Errors
    /// Same as [`JalaliDate::to_gregorian`].
    pub fn to_unix_timestamp(&self) -> Result<i64, DateError> {
        Ok(self.to_gregorian()?.to_unix_timestamp())
    }

    /// # Errors
    /// Same as [`JalaliDate::to_gregorian`], and `DateError::YearOutOfRange`
    /// beyond the years `chrono` represents.
    pub fn to_naive_date_time(&self) -> Result<NaiveDateTime, DateError> {
        let gregorian = self.to_gregorian()?;
        gregorian
            .to_naive_date()
            .map(|date| {
                let time = NaiveTime::from_hms_opt(
                    u32::from(self.hour),
                    u32::from(self.minute),
                    u32::from(self.second),
                );
                date.and_time(time.unwrap_or_default())
            })
            .ok_or(DateError::YearOutOfRange {
                year: gregorian.year,
                min:  NaiveDate::MIN.year(),
                max:  NaiveDate::MAX.year(),
            })
    }

    /// # Errors
    /// Same as [`JalaliDate::to_naive_date_time`].
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        Ok(self.to_naive_date_time()?.date())
    }
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        calendar::to_jalali(&GregorianDate::from(date))
    }
}

impl TryFrom<NaiveDateTime> for JalaliDate {
    type Error = DateError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        calendar::to_jalali(&GregorianDate::from(value))
    }
}

impl ToJalali for NaiveDate {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        JalaliDate::try_from(*self)
    }
}

impl ToJalali for NaiveDateTime {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        JalaliDate::try_from(*self)
    }
}

/// Seconds since the Unix epoch, read as UTC.
impl ToJalali for i64 {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        JalaliDate::from_unix_timestamp(*self)
    }
}

impl<Tz: TimeZone> ToJalali for DateTime<Tz> {
    fn to_jalali(&self) -> Result<JalaliDate, DateError> {
        JalaliDate::try_from(self.naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering;
    use crate::test_utils::{gregorian, jalali};
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_from_unix_timestamp() {
        struct TestCase {
            secs:     i64,
            expected: GregorianDate,
        }

        let cases = [
            TestCase {
                secs:     0,
                expected: gregorian(1970, 1, 1),
            },
            TestCase {
                secs:     1234,
                expected: gregorian(1970, 1, 1).with_time(0, 20, 34),
            },
            TestCase {
                secs:     -1,
                expected: gregorian(1969, 12, 31).with_time(23, 59, 59),
            },
            TestCase {
                secs:     946_684_800,
                expected: gregorian(2000, 1, 1),
            },
            TestCase {
                secs:     1_679_356_800 + 45_296,
                expected: gregorian(2023, 3, 21).with_time(12, 34, 56),
            },
        ];

        for case in &cases {
            assert_eq!(
                GregorianDate::from_unix_timestamp(case.secs),
                Some(case.expected),
                "{}",
                case.secs
            );
            assert_eq!(case.expected.to_unix_timestamp(), case.secs);
        }
    }

    #[test]
    fn test_jalali_from_unix_timestamp() {
        assert_eq!(JalaliDate::from_unix_timestamp(0).unwrap(), jalali(1348, 10, 11));
        let nowruz = JalaliDate::from_unix_timestamp(1_679_356_800 + 45_296).unwrap();
        assert_eq!(nowruz, jalali(1402, 1, 1).with_time(12, 34, 56));
        assert_eq!(nowruz.to_unix_timestamp().unwrap(), 1_679_356_800 + 45_296);
    }

    #[test]
    fn test_timestamp_overflow() {
        assert_eq!(GregorianDate::from_unix_timestamp(i64::MAX), None);
        assert!(matches!(
            JalaliDate::from_unix_timestamp(i64::MIN),
            Err(DateError::YearOutOfRange { year: i32::MIN, .. })
        ));
        // representable day, but past the break-point table
        assert!(JalaliDate::from_unix_timestamp(200_000_000_000).is_err());
    }

    #[test]
    fn test_far_timestamps_report_their_year() {
        let secs = 86_400 * 600_000_000;
        assert_eq!(
            GregorianDate::from_unix_timestamp(secs),
            Some(gregorian(1_644_714, 3, 17))
        );
        assert!(matches!(
            JalaliDate::from_unix_timestamp(secs),
            Err(DateError::YearOutOfRange { year: 1_644_093, .. })
        ));
        assert!(matches!(
            JalaliDate::from_unix_timestamp(-secs),
            Err(DateError::YearOutOfRange { .. })
        ));
        assert_eq!(ordering::sort([0_i64, secs, -secs]), vec![jalali(1348, 10, 11)]);
    }

    #[test]
    fn test_naive_date_conversions() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 21).unwrap();
        assert_eq!(GregorianDate::from(date), gregorian(2023, 3, 21));
        assert_eq!(JalaliDate::try_from(date).unwrap(), jalali(1402, 1, 1));
        assert_eq!(jalali(1402, 1, 1).to_naive_date().unwrap(), date);
        assert_eq!(gregorian(2023, 3, 21).to_naive_date(), Some(date));
        assert_eq!(gregorian(2023, 2, 30).to_naive_date(), None);
    }

    #[test]
    fn test_naive_date_time_keeps_time() {
        let value = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(18, 5, 9)
            .unwrap();
        let date = JalaliDate::try_from(value).unwrap();
        assert_eq!(date, jalali(1378, 10, 11).with_time(18, 5, 9));
        assert_eq!(date.to_naive_date_time().unwrap(), value);
        assert_eq!(gregorian(2000, 1, 1).with_time(18, 5, 9).to_naive_date_time(), Some(value));
    }

    #[test]
    fn test_date_time_uses_local_fields() {
        let offset = FixedOffset::east_opt(3 * 3600 + 1800).unwrap();
        // 2023-03-20 22:00 UTC is already Nowruz in Tehran
        let utc = Utc.with_ymd_and_hms(2023, 3, 20, 22, 0, 0).unwrap();
        assert_eq!(utc.to_jalali().unwrap(), jalali(1401, 12, 29).with_time(22, 0, 0));
        let tehran = utc.with_timezone(&offset);
        assert_eq!(tehran.to_jalali().unwrap(), jalali(1402, 1, 1).with_time(1, 30, 0));
    }

    #[test]
    fn test_chrono_values_sort_with_others() {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        let first = jalali(1400, 1, 1);
        let inputs: [&dyn ToJalali; 3] = [&naive, &"1402-06-15", &first];
        assert_eq!(
            ordering::sort(inputs),
            vec![jalali(1400, 1, 1), jalali(1402, 6, 15), jalali(1403, 1, 1)]
        );
    }

    #[test]
    fn test_timestamps_as_inputs() {
        let latest = ordering::max([0_i64, 1_679_356_800, 946_684_800]).unwrap();
        assert_eq!(latest, jalali(1402, 1, 1));
        assert_eq!(ordering::min([i64::MAX, 946_684_800]), Some(jalali(1378, 10, 11)));
    }
}
