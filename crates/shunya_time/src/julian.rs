//! Julian Day ↔ calendar date conversions.
//!
//! Algorithms follow Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 7,
//! applied proleptically: the Gregorian branch is used for every date when
//! [`Calendar::Gregorian`] is requested, regardless of the 1582 reform.
//! Year numbering is astronomical (1 BCE = year 0, 100 BCE = year -99).

use crate::calendar::Calendar;

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the J1900.0 epoch (1899-Dec-31 12:00).
pub const J1900_JD: f64 = 2_415_020.0;

/// Julian Date of the Besselian epoch B1950.0.
pub const B1950_JD: f64 = 2_433_282.423_459_05;

/// Days in a Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Proleptic Gregorian calendar date to Julian Date.
///
/// `day_frac` carries the time of day: `1.5` is the 1st at 12:00.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    calendar_to_jd_in(year, month, day_frac, Calendar::Gregorian)
}

/// Calendar date in the given calendar to Julian Date.
pub fn calendar_to_jd_in(year: i32, month: u32, day_frac: f64, calendar: Calendar) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let b = match calendar {
        Calendar::Gregorian => {
            let a = (y / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        }
        Calendar::Julian => 0.0,
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date to proleptic Gregorian `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    jd_to_calendar_in(jd, Calendar::Gregorian)
}

/// Julian Date to `(year, month, day_frac)` in the given calendar.
///
/// Valid for `jd >= 0` (4713 BCE onwards).
pub fn jd_to_calendar_in(jd: f64, calendar: Calendar) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;

    let a = match calendar {
        Calendar::Gregorian => {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        }
        Calendar::Julian => z,
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day_frac)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

/// Julian Date from Julian centuries since J2000.0.
pub fn centuries_to_jd(t: f64) -> f64 {
    J2000_JD + t * DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_examples() {
        // Meeus, example 7.a and 7.b
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-9);
        assert!((calendar_to_jd_in(333, 1, 27.5, Calendar::Julian) - 1_842_713.0).abs() < 1e-9);
    }

    #[test]
    fn j1900_epoch() {
        assert_eq!(calendar_to_jd(1899, 12, 31.5), J1900_JD);
    }

    #[test]
    fn gregorian_roundtrip() {
        for &(y, m, d) in &[(2024, 3, 20.25), (-99, 1, 1.0), (499, 3, 21.3125), (1582, 10, 15.0)] {
            let jd = calendar_to_jd(y, m, d);
            let (y2, m2, d2) = jd_to_calendar(jd);
            assert_eq!((y2, m2), (y, m), "jd = {jd}");
            assert!((d2 - d).abs() < 1e-6, "day {d2} vs {d}");
        }
    }

    #[test]
    fn julian_roundtrip() {
        let jd = calendar_to_jd_in(499, 3, 21.25, Calendar::Julian);
        let (y, m, d) = jd_to_calendar_in(jd, Calendar::Julian);
        assert_eq!((y, m), (499, 3));
        assert!((d - 21.25).abs() < 1e-6);
    }

    #[test]
    fn reform_gap() {
        // 1582-Oct-04 (Julian) is followed by 1582-Oct-15 (Gregorian)
        let julian = calendar_to_jd_in(1582, 10, 4.0, Calendar::Julian);
        let gregorian = calendar_to_jd(1582, 10, 15.0);
        assert_eq!(gregorian - julian, 1.0);
    }

    #[test]
    fn centuries() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((centuries_to_jd(jd_to_centuries(2_400_000.5)) - 2_400_000.5).abs() < 1e-9);
    }
}
