/// Jalali years at which the 33-year leap cycle shifts phase.
/// The last entry is exclusive: it bounds the supported range.
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// First Jalali year the conversion engine supports (inclusive)
pub const MIN_JALALI_YEAR: i32 = BREAKS[0];
/// Last Jalali year the conversion engine supports (inclusive)
pub const MAX_JALALI_YEAR: i32 = BREAKS[BREAKS.len() - 1] - 1;

/// Lowest year accepted by date validation (inclusive)
pub const MIN_VALID_YEAR: i32 = 0;
/// Highest year accepted by date validation (inclusive)
pub const MAX_VALID_YEAR: i32 = 3778;

/// Difference between a Jalali year and the Gregorian year it starts in
pub const JALALI_EPOCH_OFFSET: i32 = 621;

/// Maximum valid month (Esfand / December)
pub const MAX_MONTH: u8 = 12;
/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Esfand, the only Jalali month whose length varies
pub const ESFAND: u8 = 12;
/// Month number for Mehr, the first 30-day Jalali month
pub const MEHR: u8 = 7;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in Farvardin..Shahrivar
pub const LONG_MONTH_DAYS: u8 = 31;
/// Days in Mehr..Bahman
pub const SHORT_MONTH_DAYS: u8 = 30;
/// Days in Esfand of a common year
pub const ESFAND_DAYS_COMMON: u8 = 29;
/// Days in Esfand of a leap year
pub const ESFAND_DAYS_LEAP: u8 = 30;
/// Days in the first six Jalali months together
pub const FIRST_HALF_DAYS: i32 = 6 * LONG_MONTH_DAYS as i32;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Positions within the 33-year cycle that are leap years
pub(crate) const CYCLE_LEAP_REMAINDERS: [i32; 8] = [1, 5, 9, 13, 17, 22, 26, 30];
/// Length of the Jalali leap cycle
pub(crate) const JALALI_CYCLE: i32 = 33;
/// Leap years in one Jalali cycle
pub(crate) const LEAPS_PER_CYCLE: i32 = 8;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a week
pub(crate) const DAYS_PER_WEEK: i32 = 7;
/// Seconds in a civil day
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
/// Julian day number of 1970-01-01
pub const UNIX_EPOCH_JDN: i32 = 2_440_588;
/// Julian day number of Farvardin 1 of `MIN_JALALI_YEAR` (560-03-20)
pub const MIN_JULIAN_DAY: i32 = 1_925_675;
/// Julian day number of the last day of `MAX_JALALI_YEAR` (3799-03-19)
pub const MAX_JULIAN_DAY: i32 = 3_108_694;

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';

/// Persian digit glyphs, indexed by value
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Jalali month names, Farvardin first
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Abbreviated Jalali month names
pub const SHORT_MONTH_NAMES: [&str; 12] = [
    "فر", "ار", "خر", "تی‍", "مر", "شه‍", "مه‍", "آب‍", "آذ", "دی", "به‍", "اس‍",
];

/// Weekday names, Saturday first (index 0 = Saturday, 6 = Friday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه شنبه",
    "چهارشنبه",
    "پنج شنبه",
    "جمعه",
];

/// Single-letter weekday names, Saturday first
pub const SHORT_WEEKDAY_NAMES: [&str; 7] = ["ش", "ی", "د", "س", "چ", "پ", "ج"];

/// Season names, spring first
pub const SEASON_NAMES: [&str; 4] = ["بهار", "تابستان", "پاییز", "زمستان"];

/// Ordinal words for the days of a month (index 0 is day 1)
pub const DAY_NAMES: [&str; 31] = [
    "یکم",
    "دوم",
    "سوم",
    "چهارم",
    "پنجم",
    "ششم",
    "هفتم",
    "هشتم",
    "نهم",
    "دهم",
    "یازدهم",
    "دوازدهم",
    "سیزدهم",
    "چهاردهم",
    "پانزدهم",
    "شانزدهم",
    "هفدهم",
    "هجدهم",
    "نوزدهم",
    "بیستم",
    "بیست و یکم",
    "بیست و دوم",
    "بیست و سوم",
    "بیست و چهارم",
    "بیست و پنجم",
    "بیست و ششم",
    "بیست و هفتم",
    "بیست و هشتم",
    "بیست و نهم",
    "سی‌ام",
    "سی و یکم",
];

/// Short ante/post meridiem markers
pub const MERIDIEM_SHORT: [&str; 2] = ["ق.ظ", "ب.ظ"];
/// Long ante/post meridiem markers
pub const MERIDIEM_LONG: [&str; 2] = ["قبل از ظهر", "بعد از ظهر"];

/// Leap-year indicator words (yes, no)
pub const LEAP_YES: &str = "بله";
pub const LEAP_NO: &str = "خیر";

/// Template used when none is configured
pub const DEFAULT_TEMPLATE: &str = "YYYY/MM/DD";
