//! Configuration and result types for zero-point searches.

use shunya_ephem::{AyanamshaSystem, SiderealMode};
use shunya_search::{Bracket, Convergence, SearchConfig};
use shunya_time::{Calendar, CalendarDate, calendar_to_jd};

use crate::error::PointsError;

/// First year of the default preset-scan window (100 BCE, astronomical -99).
pub const SCAN_FROM_YEAR: i32 = -99;
/// Last year of the default preset-scan window.
pub const SCAN_TO_YEAR: i32 = 2100;
/// First year of the default star-fixing window.
pub const STAR_FIX_FROM_YEAR: i32 = 1;
/// Last year of the default star-fixing window.
pub const STAR_FIX_TO_YEAR: i32 = 600;

/// Bracket from 1 January of `from_year` to 1 January of `to_year`
/// (proleptic Gregorian, 00:00), at `hour` on both ends.
pub fn year_bracket(from_year: i32, to_year: i32, hour: f64) -> Result<Bracket, PointsError> {
    let low = calendar_to_jd(from_year, 1, 1.0 + hour / 24.0);
    let high = calendar_to_jd(to_year, 1, 1.0 + hour / 24.0);
    Ok(Bracket::new(low, high)?)
}

/// Default window for preset scans: 1 Jan 100 BCE to 1 Jan 2100, 00:00.
pub fn scan_bracket() -> Result<Bracket, PointsError> {
    year_bracket(SCAN_FROM_YEAR, SCAN_TO_YEAR, 0.0)
}

/// Default window for star fixing: 1 Jan 1 CE to 1 Jan 600, 12:00.
pub fn star_fix_bracket() -> Result<Bracket, PointsError> {
    year_bracket(STAR_FIX_FROM_YEAR, STAR_FIX_TO_YEAR, 12.0)
}

/// What a target function does when the engine fails at some epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailurePolicy {
    /// Propagate the error and abort the search.
    #[default]
    Abort,
    /// Log a warning and treat the position as 0°. The search keeps
    /// running but its result is biased toward the failing region.
    SubstituteZero,
}

/// Configuration shared by all zero-point operations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointsConfig {
    pub search: SearchConfig,
    pub failure_policy: FailurePolicy,
    /// Calendar used for the reported date.
    pub calendar: Calendar,
}

impl PointsConfig {
    pub fn new(search: SearchConfig, failure_policy: FailurePolicy) -> Self {
        Self {
            search,
            failure_policy,
            calendar: Calendar::Gregorian,
        }
    }

    pub fn with_calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn validate(&self) -> Result<(), PointsError> {
        self.search.validate()?;
        Ok(())
    }
}

/// Convergence statistics of a finished search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub iterations: u32,
    pub evaluations: u32,
    /// Final bracket width in days.
    pub width_days: f64,
    /// Whether the search stopped on an exact zero.
    pub exact_zero: bool,
}

impl From<&Convergence> for SearchStats {
    fn from(c: &Convergence) -> Self {
        Self {
            iterations: c.iterations,
            evaluations: c.evaluations,
            width_days: c.width(),
            exact_zero: c.exact_zero,
        }
    }
}

/// Epoch at which a sidereal frame coincides with the tropical frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZeroPoint {
    pub mode: SiderealMode,
    /// Julian day of the zero.
    pub jd: f64,
    pub date: CalendarDate,
    /// Signed ayanamsha at `jd`, in degrees.
    pub residual_deg: f64,
    pub stats: SearchStats,
}

/// Epoch at which a star sits at a prescribed sidereal longitude.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarFix {
    /// Catalog name of the star.
    pub star: String,
    /// Prescribed sidereal longitude in degrees.
    pub target_lon_deg: f64,
    pub jd: f64,
    pub date: CalendarDate,
    /// Signed offset of the star from the target at `jd`, in degrees.
    pub residual_deg: f64,
    pub stats: SearchStats,
}

impl StarFix {
    /// Sidereal mode in which the star sits at the target longitude.
    pub fn mode(&self) -> SiderealMode {
        SiderealMode::coincident_at(self.jd)
    }
}

/// One row of a preset scan.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetZero {
    pub system: AyanamshaSystem,
    pub outcome: Result<ZeroPoint, PointsError>,
}

impl PresetZero {
    /// Julian day of the zero, if the search succeeded.
    pub fn zero_jd(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|z| z.jd)
    }
}

/// Sidereal position of a star in a report table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarPosition {
    pub name: String,
    pub nakshatra: Option<String>,
    pub longitude_deg: f64,
    pub latitude_deg: f64,
}
