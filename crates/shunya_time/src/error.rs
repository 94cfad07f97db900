//! Error types for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building or converting calendar dates.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Month outside 1..=12.
    InvalidMonth(u32),
    /// Day outside the valid range for the given month.
    InvalidDay { month: u32, day: u32 },
    /// Hour outside [0, 24).
    InvalidHour(f64),
    /// A Julian day or time component was NaN or infinite.
    NonFinite,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid month: {m}"),
            Self::InvalidDay { month, day } => write!(f, "invalid day {day} for month {month}"),
            Self::InvalidHour(h) => write!(f, "invalid hour: {h}"),
            Self::NonFinite => write!(f, "non-finite time value"),
        }
    }
}

impl Error for TimeError {}
