//! Proleptic Gregorian dates to and from Julian day numbers.
//!
//! The arithmetic runs in `i64` with floor division, except for the
//! month adjustment `(month - 8) / 6`, which truncates so that it is -1
//! for January and February only. The extra 100100 years keep the
//! dividends positive around the present, where both divisions agree.

use crate::types::{GregorianDate, JulianDay};

/// Julian day number of a proleptic Gregorian date.
///
/// Any triple is accepted; days past the end of a month simply run into
/// the next one. Day numbers beyond the `i32` range saturate; use
/// [`checked_gregorian_to_julian_day`] to detect that.
///
/// # Example
///
/// ```
/// use persian_date::julian::gregorian_to_julian_day;
///
/// assert_eq!(2451545, gregorian_to_julian_day(2000, 1, 1).get());
/// ```
pub fn gregorian_to_julian_day(year: i32, month: i32, day: i32) -> JulianDay {
    let jdn = day_number(year, month, day);
    JulianDay::new(i32::try_from(jdn).unwrap_or(if jdn < 0 { i32::MIN } else { i32::MAX }))
}

/// Same as [`gregorian_to_julian_day`], or `None` when the day number does
/// not fit a [`JulianDay`].
pub fn checked_gregorian_to_julian_day(year: i32, month: i32, day: i32) -> Option<JulianDay> {
    i32::try_from(day_number(year, month, day)).ok().map(JulianDay::new)
}

fn day_number(year: i32, month: i32, day: i32) -> i64 {
    let (year, month, day) = (i64::from(year), i64::from(month), i64::from(day));
    let march_year = year + (month - 8) / 6 + 100_100;
    let d = (march_year * 1461).div_euclid(4) + (153 * (month + 9).rem_euclid(12) + 2) / 5 + day
        - 34_840_408;
    d - (march_year.div_euclid(100) * 3).div_euclid(4) + 752
}

/// Gregorian date (at midnight) of a Julian day number.
///
/// # Example
///
/// ```
/// use persian_date::{GregorianDate, JulianDay, julian::julian_day_to_gregorian};
///
/// assert_eq!(GregorianDate::new(2000, 1, 1), julian_day_to_gregorian(JulianDay::new(2451545)));
/// ```
pub fn julian_day_to_gregorian(jdn: JulianDay) -> GregorianDate {
    let jdn = i64::from(jdn.get());
    let mut j = 4 * jdn + 139_361_631;
    j += ((4 * jdn + 183_187_720).div_euclid(146_097) * 3).div_euclid(4) * 4 - 3908;
    let i = (j.rem_euclid(1461) / 4) * 5 + 308;
    let day = (i % 153) / 5 + 1;
    let month = (i / 153) % 12 + 1;
    let year = j.div_euclid(1461) - 100_100 + (8 - month) / 6;

    // |year| stays below 6 million for any i32 day number; day is 1..=31
    // and month 1..=12 because i is positive
    GregorianDate::new(year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_to_julian_day() {
        struct TestCase {
            date: (i32, i32, i32),
            jdn:  i32,
        }

        let cases = [
            TestCase {
                date: (1970, 1, 1),
                jdn:  2_440_588,
            },
            TestCase {
                date: (2000, 1, 1),
                jdn:  2_451_545,
            },
            TestCase {
                date: (2021, 9, 8),
                jdn:  2_459_466,
            },
            TestCase {
                date: (2023, 3, 21),
                jdn:  2_460_025,
            },
            TestCase {
                date: (1582, 10, 15),
                jdn:  2_299_161,
            },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(
                gregorian_to_julian_day(y, m, d).get(),
                case.jdn,
                "{y:04}-{m:02}-{d:02}"
            );
        }
    }

    #[test]
    fn test_julian_day_to_gregorian() {
        assert_eq!(
            julian_day_to_gregorian(JulianDay::new(2_440_588)),
            GregorianDate::new(1970, 1, 1)
        );
        assert_eq!(
            julian_day_to_gregorian(JulianDay::new(2_459_466)),
            GregorianDate::new(2021, 9, 8)
        );
        assert_eq!(
            julian_day_to_gregorian(JulianDay::new(2_299_161)),
            GregorianDate::new(1582, 10, 15)
        );
    }

    #[test]
    fn test_month_boundaries() {
        // consecutive day numbers across the end of February in a leap year
        let feb_29 = gregorian_to_julian_day(2024, 2, 29);
        assert_eq!(gregorian_to_julian_day(2024, 3, 1) - feb_29, 1);
        assert_eq!(julian_day_to_gregorian(feb_29 + 1), GregorianDate::new(2024, 3, 1));

        let dec_31 = gregorian_to_julian_day(1999, 12, 31);
        assert_eq!(julian_day_to_gregorian(dec_31 + 1), GregorianDate::new(2000, 1, 1));
    }

    #[test]
    fn test_overflowing_day_runs_into_next_month() {
        assert_eq!(
            gregorian_to_julian_day(2023, 2, 29),
            gregorian_to_julian_day(2023, 3, 1)
        );
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        assert_eq!(gregorian_to_julian_day(2_000_000, 1, 1).get(), 732_206_060);
        assert_eq!(checked_gregorian_to_julian_day(2_000_000, 1, 1), Some(JulianDay::new(732_206_060)));
        assert_eq!(checked_gregorian_to_julian_day(i32::MAX, 1, 1), None);
        assert_eq!(gregorian_to_julian_day(i32::MAX, 1, 1).get(), i32::MAX);
        assert_eq!(gregorian_to_julian_day(i32::MIN, 1, 1).get(), i32::MIN);
        assert_eq!(gregorian_to_julian_day(2023, i32::MAX, i32::MAX).get(), i32::MAX);

        assert_eq!(julian_day_to_gregorian(JulianDay::new(i32::MAX)), GregorianDate::new(5_874_898, 6, 3));
        assert_eq!(julian_day_to_gregorian(JulianDay::new(i32::MIN)), GregorianDate::new(-5_884_323, 5, 15));
        assert_eq!(julian_day_to_gregorian(JulianDay::new(2_440_588 + 600_000_000)).year, 1_644_714);
    }

    #[test]
    fn test_round_trip_far_from_present() {
        for start in [i32::MIN, -40_000_000, -1_000, i32::MAX - 1_000] {
            for jdn in start..start + 1_000 {
                let date = julian_day_to_gregorian(JulianDay::new(jdn));
                let back = gregorian_to_julian_day(date.year, i32::from(date.month), i32::from(date.day));
                assert_eq!(back.get(), jdn, "{date}");
            }
        }
    }

    #[test]
    fn test_round_trip_across_window() {
        // every day from 560-01-01 to 3800-12-31
        let start = gregorian_to_julian_day(560, 1, 1).get();
        let end = gregorian_to_julian_day(3800, 12, 31).get();
        for jdn in start..=end {
            let date = julian_day_to_gregorian(JulianDay::new(jdn));
            let back = gregorian_to_julian_day(date.year, i32::from(date.month), i32::from(date.day));
            assert_eq!(back.get(), jdn, "{date}");
        }
    }
}
