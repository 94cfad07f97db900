//! Angle normalization for wrapped ecliptic longitudes.
//!
//! Two canonical forms are used: unsigned `[0, 360)` and signed `[-180, 180)`.
//! The signed form is what target functions hand to the root-finder: its
//! sign flips either at a true zero or where the angle wraps past 180°.

/// Normalize an angle to `[0, 360)` degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to `[-180, 180)` degrees.
///
/// The input is first reduced to `[0, 360)`, so any finite value is
/// accepted. Non-finite input yields NaN.
pub fn normalize_signed(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Degree/minute/second decomposition of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub negative: bool,
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl Dms {
    /// Back to decimal degrees.
    pub fn to_degrees(self) -> f64 {
        let mag = self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative { -mag } else { mag }
    }
}

impl std::fmt::Display for Dms {
    /// `-006:39:59.99998588`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        // seconds rounded to the printed 1e-8, carried into minutes and degrees
        let mut units = (self.seconds * 1e8).round() as u64;
        let mut minutes = u32::from(self.minutes);
        let mut degrees = u32::from(self.degrees);
        if units >= 60 * SECOND_UNITS {
            units -= 60 * SECOND_UNITS;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees += 1;
        }
        write!(
            f,
            "{sign}{degrees:03}:{minutes:02}:{:02}.{:08}",
            units / SECOND_UNITS,
            units % SECOND_UNITS
        )
    }
}

const SECOND_UNITS: u64 = 100_000_000;

/// Split an angle into degrees, minutes and seconds without normalizing it.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let rem = (d - degrees) * 60.0;
    let minutes = rem.floor();
    Dms {
        negative: deg < 0.0,
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (rem - minutes) * 60.0,
    }
}

/// Signed DMS of an angle after wrapping it into `[-180, 180)`.
pub fn signed_dms(deg: f64) -> Dms {
    deg_to_dms(normalize_signed(deg))
}

/// Decimal degrees from degrees, arc-minutes and arc-seconds.
pub fn dms_to_deg(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    degrees + minutes / 60.0 + seconds / 3600.0
}
