//! Calendar and continuous day-number conversions.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (proleptic Gregorian and Julian)
//! - Standard epochs (J2000.0, J1900.0, B1950.0) and Julian century helpers
//! - [`CalendarDate`] with fractional hours and a fixed text form

pub mod calendar;
pub mod error;
pub mod julian;

pub use calendar::{Calendar, CalendarDate, Hms, hours_to_hms, is_leap_year};
pub use error::TimeError;
pub use julian::{
    B1950_JD, DAYS_PER_JULIAN_CENTURY, DAYS_PER_JULIAN_YEAR, J1900_JD, J2000_JD,
    SECONDS_PER_DAY, calendar_to_jd, calendar_to_jd_in, centuries_to_jd, jd_to_calendar,
    jd_to_calendar_in, jd_to_centuries,
};
