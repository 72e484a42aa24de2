//! Start of each Jalali year from the table of historical break points.

use crate::{DateError, calendar};
use crate::consts::{BREAKS, JALALI_CYCLE, JALALI_EPOCH_OFFSET, LEAPS_PER_CYCLE, MAX_JALALI_YEAR, MIN_JALALI_YEAR};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where a Jalali year sits relative to the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpochInfo {
    /// Years since the last leap year (0 means this year is a leap year),
    /// or `None` when leap detection was skipped.
    pub leap:           Option<u8>,
    /// Gregorian year in which the Jalali year begins.
    pub gregorian_year: i32,
    /// Day of March on which Farvardin 1 falls.
    pub march:          i32,
}

impl EpochInfo {
    /// Full computation, including the leap indicator.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` outside `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`.
    pub fn for_year(jalali_year: i32) -> Result<Self, DateError> {
        jal_cal(jalali_year, true)
    }

    /// Cheaper computation when only the start of the year is needed.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` outside `MIN_JALALI_YEAR..=MAX_JALALI_YEAR`.
    pub fn for_year_without_leap(jalali_year: i32) -> Result<Self, DateError> {
        jal_cal(jalali_year, false)
    }

    /// True when the year has 366 days. `None` if leap detection was skipped.
    pub fn is_leap(&self) -> Option<bool> {
        self.leap.map(|leap| leap == 0)
    }
}

fn leaps_in(years: i32) -> i32 {
    (years / JALALI_CYCLE) * LEAPS_PER_CYCLE + (years % JALALI_CYCLE) / 4
}

fn jal_cal(jalali_year: i32, detect_leap: bool) -> Result<EpochInfo, DateError> {
    if !calendar::supported_years().contains(&jalali_year) {
        debug!(jalali_year, "year outside break-point table");
        return Err(DateError::YearOutOfRange {
            year: jalali_year,
            min:  MIN_JALALI_YEAR,
            max:  MAX_JALALI_YEAR,
        });
    }

    let gregorian_year = jalali_year + JALALI_EPOCH_OFFSET;
    let mut leap_j = -14;
    let mut last_break = BREAKS[0];
    let mut jump = 0;

    // Leap days accumulated over every interval that ends at or before the year
    for &next_break in &BREAKS[1..] {
        jump = next_break - last_break;
        if jalali_year < next_break {
            break;
        }
        leap_j += leaps_in(jump);
        last_break = next_break;
    }

    let mut n = jalali_year - last_break;
    leap_j += (n / JALALI_CYCLE) * LEAPS_PER_CYCLE + ((n % JALALI_CYCLE) + 3) / 4;
    if jump % JALALI_CYCLE == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gregorian_year / 4 - ((gregorian_year / 100 + 1) * 3) / 4 - 150;
    let march = 20 + leap_j - leap_g;

    let leap = if detect_leap {
        if jump - n < 6 {
            n = n - jump + ((jump + 4) / JALALI_CYCLE) * JALALI_CYCLE;
        }
        // truncating remainders: -1 marks the year right after a leap year
        let mut leap = ((n + 1) % JALALI_CYCLE - 1) % 4;
        if leap == -1 {
            leap = 4;
        }
        Some(leap.unsigned_abs() as u8)
    } else {
        None
    };

    Ok(EpochInfo {
        leap,
        gregorian_year,
        march,
    })
}
