use crate::{CalendarDate, GregorianDate, JalaliDate};

/// Jalali date from fields known to be valid in the test
pub fn jalali(year: i32, month: u8, day: u8) -> JalaliDate {
    JalaliDate::from(CalendarDate::ymd(year, month, day))
}

pub fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day)
}
