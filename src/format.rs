//! Template rendering with Persian names.
//!
//! A template is scanned once from left to right. At each position the
//! longest token that matches is replaced by its value and the scan resumes
//! after it, so substituted text is never scanned again. Anything that is
//! not a token is copied through.
//!
//! | Token            | Value                                   |
//! |------------------|-----------------------------------------|
//! | `YYYY`           | year, four digits                       |
//! | `YYY`            | last three digits of the year           |
//! | `YY` / `Y`       | year mod 100, padded / unpadded         |
//! | `y`              | year, unpadded                          |
//! | `MM` / `M`       | month, padded / unpadded                |
//! | `mm` / `km`      | month name, full / short                |
//! | `mb`             | month symbol (always empty)             |
//! | `DD` `dd` / `D` `d` | day of month, padded / unpadded      |
//! | `rr`             | day of month as an ordinal word         |
//! | `l` `rh` / `kh`  | weekday name, full / short              |
//! | `HH` `H`         | hour, 24-hour clock                     |
//! | `hh` `h`         | hour, 12-hour clock                     |
//! | `ii` `i`         | minute                                  |
//! | `ss` `s`         | second                                  |
//! | `a` / `A`        | meridiem, short / long                  |
//! | `L`              | leap year, yes / no                     |
//! | `b` / `ff`       | season number / season name             |
//! | `c`              | date, time and weekday together         |

use crate::consts::{
    DAY_NAMES, DEFAULT_TEMPLATE, LEAP_NO, LEAP_YES, MAX_MONTH, MERIDIEM_LONG, MERIDIEM_SHORT,
    MONTH_NAMES, SEASON_NAMES, SHORT_MONTH_NAMES, SHORT_WEEKDAY_NAMES, WEEKDAY_NAMES,
};
use crate::digits::to_persian_digits;
use crate::prelude::*;
use crate::{JalaliDate, calendar};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Year4,
    Year3,
    Year2,
    YearShort,
    Year,
    Month2,
    Month,
    MonthName,
    MonthShortName,
    MonthSymbol,
    Day2,
    Day,
    DayName,
    Weekday,
    WeekdayShort,
    Hour24Padded,
    Hour24,
    Hour12Padded,
    Hour12,
    MinutePadded,
    Minute,
    SecondPadded,
    Second,
    MeridiemShort,
    MeridiemLong,
    Leap,
    SeasonNumber,
    SeasonName,
    Composite,
}

/// Longest patterns first so a shorter token never wins over a longer one.
const TOKENS: [(&str, Token); 32] = [
    ("YYYY", Token::Year4),
    ("YYY", Token::Year3),
    ("YY", Token::Year2),
    ("MM", Token::Month2),
    ("mm", Token::MonthName),
    ("km", Token::MonthShortName),
    ("mb", Token::MonthSymbol),
    ("DD", Token::Day2),
    ("dd", Token::Day2),
    ("rr", Token::DayName),
    ("rh", Token::Weekday),
    ("kh", Token::WeekdayShort),
    ("HH", Token::Hour24Padded),
    ("hh", Token::Hour12Padded),
    ("ii", Token::MinutePadded),
    ("ss", Token::SecondPadded),
    ("ff", Token::SeasonName),
    ("Y", Token::YearShort),
    ("y", Token::Year),
    ("M", Token::Month),
    ("D", Token::Day),
    ("d", Token::Day),
    ("l", Token::Weekday),
    ("H", Token::Hour24),
    ("h", Token::Hour12),
    ("i", Token::Minute),
    ("s", Token::Second),
    ("a", Token::MeridiemShort),
    ("A", Token::MeridiemLong),
    ("L", Token::Leap),
    ("b", Token::SeasonNumber),
    ("c", Token::Composite),
];

fn match_token(rest: &str) -> Option<(&'static str, Token)> {
    TOKENS
        .iter()
        .copied()
        .find(|(pattern, _)| rest.starts_with(pattern))
}

/// Values shared by several tokens, computed once per render.
struct Context {
    date:    JalaliDate,
    weekday: Option<u8>,
    leap:    bool,
}

impl Context {
    fn new(date: &JalaliDate) -> Self {
        Self {
            date:    *date,
            weekday: date.to_julian_day().ok().map(|jdn| jdn.weekday()),
            leap:    date.is_leap_year(),
        }
    }

    fn hour12(&self) -> u8 {
        match self.date.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    fn weekday_name(&self) -> &'static str {
        self.weekday.map_or("", weekday_name)
    }

    fn value(&self, token: Token) -> Cow<'static, str> {
        let d = &self.date;
        let text = match token {
            Token::Year4 => format!("{:04}", d.year),
            Token::Year3 => format!("{:03}", d.year.rem_euclid(1000)),
            Token::Year2 => format!("{:02}", d.year.rem_euclid(100)),
            Token::YearShort => d.year.rem_euclid(100).to_string(),
            Token::Year => d.year.to_string(),
            Token::Month2 => format!("{:02}", d.month),
            Token::Month => d.month.to_string(),
            Token::MonthName => return month_name(d.month).into(),
            Token::MonthShortName => return short_month_name(d.month).into(),
            Token::MonthSymbol => return month_symbol(d.month).into(),
            Token::Day2 => format!("{:02}", d.day),
            Token::Day => d.day.to_string(),
            Token::DayName => return day_name(d.day).into(),
            Token::Weekday => return self.weekday_name().into(),
            Token::WeekdayShort => return self.weekday.map_or("", short_weekday_name).into(),
            Token::Hour24Padded => format!("{:02}", d.hour),
            Token::Hour24 => d.hour.to_string(),
            Token::Hour12Padded => format!("{:02}", self.hour12()),
            Token::Hour12 => self.hour12().to_string(),
            Token::MinutePadded => format!("{:02}", d.minute),
            Token::Minute => d.minute.to_string(),
            Token::SecondPadded => format!("{:02}", d.second),
            Token::Second => d.second.to_string(),
            Token::MeridiemShort => return MERIDIEM_SHORT[usize::from(d.hour >= 12)].into(),
            Token::MeridiemLong => return MERIDIEM_LONG[usize::from(d.hour >= 12)].into(),
            Token::Leap => return Cow::Borrowed(if self.leap { LEAP_YES } else { LEAP_NO }),
            Token::SeasonNumber => season(d.month).to_string(),
            Token::SeasonName => return season_name(d.month).into(),
            Token::Composite => format!(
                "{}/{}/{} ،{}:{}:{} {}",
                d.year,
                d.month,
                d.day,
                d.hour,
                d.minute,
                d.second,
                self.weekday_name()
            ),
        };
        Cow::Owned(text)
    }
}

/// Renders `date` through `template`.
///
/// With `persian_digits` every ASCII digit of the result is replaced by its
/// Persian form.
///
/// # Example
///
/// ```
/// use persian_date::{JalaliDate, format::format};
///
/// let date = JalaliDate::new(1402, 6, 15).unwrap();
/// assert_eq!("1402/06/15", format(&date, "YYYY/MM/DD", false));
/// assert_eq!("۱۵ شهریور ۱۴۰۲", format(&date, "D mm y", true));
/// ```
pub fn format(date: &JalaliDate, template: &str, persian_digits: bool) -> String {
    let context = Context::new(date);
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    while let Some(c) = rest.chars().next() {
        if let Some((pattern, token)) = match_token(rest) {
            out.push_str(&context.value(token));
            rest = &rest[pattern.len()..];
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    if persian_digits {
        to_persian_digits(&out)
    } else {
        out
    }
}

/// Month name, or `""` outside 1..=12.
pub fn month_name(month: u8) -> &'static str {
    lookup(&MONTH_NAMES, month)
}

/// Abbreviated month name, or `""` outside 1..=12.
pub fn short_month_name(month: u8) -> &'static str {
    lookup(&SHORT_MONTH_NAMES, month)
}

/// Reserved slot for a month symbol; currently empty for every month.
pub const fn month_symbol(_month: u8) -> &'static str {
    ""
}

/// Weekday name for 0 = Saturday through 6 = Friday, or `""`.
pub fn weekday_name(weekday: u8) -> &'static str {
    WEEKDAY_NAMES.get(usize::from(weekday)).copied().unwrap_or("")
}

pub fn short_weekday_name(weekday: u8) -> &'static str {
    SHORT_WEEKDAY_NAMES.get(usize::from(weekday)).copied().unwrap_or("")
}

/// Ordinal word for a day of the month, or `""` outside 1..=31.
pub fn day_name(day: u8) -> &'static str {
    lookup(&DAY_NAMES, day)
}

/// Season name of a month, or `""` outside 1..=12.
pub fn season_name(month: u8) -> &'static str {
    if month == 0 || month > MAX_MONTH {
        return "";
    }
    SEASON_NAMES[usize::from((month - 1) / 3)]
}

/// Season number, `floor(month / 3.1) + 1`: 1 for months 1..=3, 4 for 10..=12.
pub const fn season(month: u8) -> u8 {
    (month as u16 * 10 / 31) as u8 + 1
}

fn lookup(table: &[&'static str], one_based: u8) -> &'static str {
    usize::from(one_based)
        .checked_sub(1)
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or("")
}

/// A template string; any text is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From, Into, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatTemplate(String);

impl Default for FormatTemplate {
    fn default() -> Self {
        Self(DEFAULT_TEMPLATE.to_owned())
    }
}

impl From<&str> for FormatTemplate {
    fn from(template: &str) -> Self {
        Self(template.to_owned())
    }
}

impl FormatTemplate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Formatting settings: the template and the digit script.
///
/// The [`Default`] implementation renders `YYYY/MM/DD` with Latin digits.
/// The type deserializes with missing fields defaulted, so it can sit in a
/// larger configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatter {
    template:       FormatTemplate,
    persian_digits: bool,
}

impl DateFormatter {
    pub fn new(template: impl Into<FormatTemplate>) -> Self {
        Self::default().with_template(template)
    }

    /// Set the template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<FormatTemplate>) -> Self {
        self.template = template.into();
        self
    }

    /// Render digits in Persian script.
    #[must_use]
    pub const fn with_persian_digits(mut self, persian_digits: bool) -> Self {
        self.persian_digits = persian_digits;
        self
    }

    pub const fn template(&self) -> &FormatTemplate {
        &self.template
    }

    pub const fn persian_digits(&self) -> bool {
        self.persian_digits
    }

    pub fn format(&self, date: &JalaliDate) -> String {
        format(date, self.template.as_str(), self.persian_digits)
    }

    /// Same as [`DateFormatter::format`] with a one-off template.
    pub fn format_with(&self, date: &JalaliDate, template: &str) -> String {
        format(date, template, self.persian_digits)
    }

    /// Converts a Gregorian date and renders it.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` outside the supported years.
    pub fn format_gregorian(&self, date: crate::GregorianDate) -> Result<String, crate::DateError> {
        Ok(self.format(&calendar::to_jalali(&date)?))
    }
}
