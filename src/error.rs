/// Error type for conversion, validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year lies outside the range a particular operation supports.
    #[error("Year {year} is out of range (must be {min}..={max})")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Month or day outside the calendar, or the all-zero date.
    #[error("Invalid Jalali date {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// Input does not split into `YYYY-MM-DD`.
    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidFormat(String),

    /// A date segment is not an integer.
    #[error("Invalid {component} segment: {value:?}")]
    InvalidNumber {
        component: &'static str,
        value:     String,
    },
}
