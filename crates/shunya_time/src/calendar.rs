//! Calendar dates with fractional hours and their text form.

use std::fmt::{Display, Formatter};

use crate::error::TimeError;
use crate::julian::{calendar_to_jd_in, jd_to_calendar_in};

/// Calendar system used when converting to and from Julian days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Calendar {
    /// Proleptic Gregorian calendar.
    #[default]
    Gregorian,
    /// Julian calendar.
    Julian,
}

/// A calendar date with the time of day as fractional hours.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    /// Astronomical year (0 = 1 BCE).
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Hours since midnight, in [0, 24).
    pub hour: f64,
    pub calendar: Calendar,
}

impl CalendarDate {
    /// Build a validated date.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: f64,
        calendar: Calendar,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidMonth(month));
        }
        if day == 0 || day > days_in_month(year, month, calendar) {
            return Err(TimeError::InvalidDay { month, day });
        }
        if !hour.is_finite() {
            return Err(TimeError::NonFinite);
        }
        if !(0.0..24.0).contains(&hour) {
            return Err(TimeError::InvalidHour(hour));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            calendar,
        })
    }

    /// Convert a Julian day to a calendar date.
    pub fn from_jd(jd: f64, calendar: Calendar) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::NonFinite);
        }
        let (year, month, day_frac) = jd_to_calendar_in(jd, calendar);
        let day = day_frac.floor();
        // Clamp guards against 24.0 from rounding in `day_frac - day`.
        let hour = ((day_frac - day) * 24.0).clamp(0.0, 24.0 - f64::EPSILON * 24.0);
        Ok(Self {
            year,
            month,
            day: day as u32,
            hour,
            calendar,
        })
    }

    /// Julian day of this date.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd_in(
            self.year,
            self.month,
            self.day as f64 + self.hour / 24.0,
            self.calendar,
        )
    }

    /// Time of day split into hours, minutes and seconds.
    pub fn hms(&self) -> Hms {
        hours_to_hms(self.hour)
    }
}

impl Display for CalendarDate {
    /// `+0285/03/21 07:30:31.57`, the year signed and zero-padded.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut centis = (self.hour * 360_000.0).round() as u64;
        let (mut year, mut month, mut day) = (self.year, self.month, self.day);
        // rounding up to midnight belongs to the next day
        if centis >= CENTIS_PER_DAY {
            centis -= CENTIS_PER_DAY;
            (year, month, day) = next_day(year, month, day, self.calendar);
        }
        let h = centis / 360_000;
        let m = (centis / 6000) % 60;
        let s = (centis % 6000) as f64 / 100.0;
        write!(
            f,
            "{:+05}/{:02}/{:02} {:02}:{:02}:{:05.2}",
            year, month, day, h, m, s
        )
    }
}

const CENTIS_PER_DAY: u64 = 24 * 360_000;

fn next_day(year: i32, month: u32, day: u32, calendar: Calendar) -> (i32, u32, u32) {
    if day < days_in_month(year, month, calendar) {
        (year, month, day + 1)
    } else if month < 12 {
        (year, month + 1, 1)
    } else {
        (year + 1, 1, 1)
    }
}

/// Hours, minutes and seconds of a fractional hour value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// Split fractional hours into h/m/s. Negative input is treated by magnitude.
pub fn hours_to_hms(hours: f64) -> Hms {
    let h = hours.abs();
    let whole = h.floor();
    let rem = (h - whole) * 60.0;
    let minutes = rem.floor();
    Hms {
        hours: whole as u32,
        minutes: minutes as u32,
        seconds: (rem - minutes) * 60.0,
    }
}

/// Whether `year` is a leap year in the given calendar.
pub fn is_leap_year(year: i32, calendar: Calendar) -> bool {
    match calendar {
        Calendar::Gregorian => (year % 4 == 0 && year % 100 != 0) || year % 400 == 0,
        Calendar::Julian => year.rem_euclid(4) == 0,
    }
}

fn days_in_month(year: i32, month: u32, calendar: Calendar) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year, calendar) => 29,
        _ => 28,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_month() {
        assert_eq!(
            CalendarDate::new(2024, 13, 1, 0.0, Calendar::Gregorian),
            Err(TimeError::InvalidMonth(13))
        );
    }

    #[test]
    fn rejects_bad_day() {
        assert!(CalendarDate::new(2023, 2, 29, 0.0, Calendar::Gregorian).is_err());
        assert!(CalendarDate::new(2024, 2, 29, 0.0, Calendar::Gregorian).is_ok());
        // 1900 is a leap year only in the Julian calendar
        assert!(CalendarDate::new(1900, 2, 29, 0.0, Calendar::Gregorian).is_err());
        assert!(CalendarDate::new(1900, 2, 29, 0.0, Calendar::Julian).is_ok());
    }

    #[test]
    fn rejects_bad_hour() {
        assert!(CalendarDate::new(2024, 1, 1, 24.0, Calendar::Gregorian).is_err());
        assert!(CalendarDate::new(2024, 1, 1, f64::NAN, Calendar::Gregorian).is_err());
    }

    #[test]
    fn from_jd_noon() {
        let d = CalendarDate::from_jd(2_451_545.0, Calendar::Gregorian).unwrap();
        assert_eq!((d.year, d.month, d.day), (2000, 1, 1));
        assert!((d.hour - 12.0).abs() < 1e-6);
    }

    #[test]
    fn from_jd_rejects_nan() {
        assert_eq!(
            CalendarDate::from_jd(f64::NAN, Calendar::Gregorian),
            Err(TimeError::NonFinite)
        );
    }

    #[test]
    fn to_jd_roundtrip() {
        let d = CalendarDate::new(285, 3, 21, 7.5, Calendar::Gregorian).unwrap();
        let back = CalendarDate::from_jd(d.to_jd(), Calendar::Gregorian).unwrap();
        assert_eq!((back.year, back.month, back.day), (285, 3, 21));
        assert!((back.hour - 7.5).abs() < 1e-5);
    }

    #[test]
    fn display_format() {
        let d = CalendarDate::new(-99, 1, 1, 7.5 + 31.57 / 3600.0, Calendar::Gregorian).unwrap();
        assert_eq!(d.to_string(), "-0099/01/01 07:30:31.57");
        let d = CalendarDate::new(285, 3, 21, 0.0, Calendar::Gregorian).unwrap();
        assert_eq!(d.to_string(), "+0285/03/21 00:00:00.00");
    }

    #[test]
    fn hms_split() {
        let hms = hours_to_hms(14.0 + 3.0 / 60.0 + 32.45 / 3600.0);
        assert_eq!(hms.hours, 14);
        assert_eq!(hms.minutes, 3);
        assert!((hms.seconds - 32.45).abs() < 1e-6);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000, Calendar::Gregorian));
        assert!(!is_leap_year(2100, Calendar::Gregorian));
        assert!(is_leap_year(-4, Calendar::Julian));
        assert!(is_leap_year(0, Calendar::Gregorian));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn date_serializes_with_calendar() {
        let d = CalendarDate::new(285, 12, 22, 1.05, Calendar::Julian).unwrap();
        let json = serde_json::to_value(d).unwrap();
        assert_eq!(json["year"], 285);
        assert_eq!(json["calendar"], "Julian");
        let back: CalendarDate = serde_json::from_value(json).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn display_carries_rounded_midnight() {
        let d = CalendarDate::from_jd(2_451_545.5 - 1e-8, Calendar::Gregorian).unwrap();
        assert_eq!((d.year, d.month, d.day), (2000, 1, 1));
        assert_eq!(d.to_string(), "+2000/01/02 00:00:00.00");

        let eoy = CalendarDate::new(1999, 12, 31, 23.999_999_9, Calendar::Gregorian).unwrap();
        assert_eq!(eoy.to_string(), "+2000/01/01 00:00:00.00");
        let leap = CalendarDate::new(300, 2, 28, 23.999_999_9, Calendar::Julian).unwrap();
        assert_eq!(leap.to_string(), "+0300/02/29 00:00:00.00");
    }

    #[test]
    fn display_keeps_last_centisecond() {
        let hour = 23.0 + 59.0 / 60.0 + 59.99 / 3600.0;
        let d = CalendarDate::new(285, 12, 22, hour, Calendar::Gregorian).unwrap();
        assert_eq!(d.to_string(), "+0285/12/22 23:59:59.99");
    }
}
