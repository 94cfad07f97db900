//! Zero-point searches over sidereal reference frames.
//!
//! This crate provides:
//! - Target-function adapters ([`AyanamshaZero`], [`StarAtLongitude`])
//!   with an explicit [`FailurePolicy`] for engine errors
//! - Zero points of ayanamsha presets and user-defined sidereal modes
//! - Parallel preset scans with chronological ordering
//! - Star fixing: the epoch at which a star sits at a given sidereal
//!   longitude, plus position tables for the common junction stars
//! - Annual precession of a sidereal frame
//!
//! All operations are generic over [`shunya_ephem::Ephemeris`].

pub mod error;
pub mod points_types;
pub mod star_fix;
pub mod target;
pub mod zero_point;

pub use error::PointsError;
pub use points_types::{
    FailurePolicy, PointsConfig, PresetZero, SCAN_FROM_YEAR, SCAN_TO_YEAR, STAR_FIX_FROM_YEAR,
    STAR_FIX_TO_YEAR, SearchStats, StarFix, StarPosition, ZeroPoint, scan_bracket,
    star_fix_bracket, year_bracket,
};
pub use star_fix::{COMMON_STARS, star_fixing_point, star_table};
pub use target::{AyanamshaZero, StarAtLongitude, TargetFunction};
pub use zero_point::{
    annual_precession_arcsec, ayanamsha_zero_point, scan_presets, solve, sort_by_zero_date,
    user_mode_zero_point,
};
