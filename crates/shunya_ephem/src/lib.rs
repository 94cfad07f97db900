//! Ephemeris boundary for sidereal zero-point searches.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait: ayanamsha and fixed-star queries with the
//!   sidereal frame passed explicitly ([`SiderealMode`], [`Zodiac`])
//! - 32 ayanamsha presets ([`AyanamshaSystem`]) anchored by J2000 value,
//!   zero epoch, or fixed star
//! - A catalog of nakshatra junction stars ([`FixedStar`], [`find_star`])
//! - IAU 2006 general precession and leading nutation terms
//! - [`PrecessionEngine`], an analytic [`Ephemeris`] built on the above

pub mod ayanamsha;
pub mod engine;
pub mod error;
pub mod mode;
pub mod precession;
pub mod stars;

pub use ayanamsha::{Anchor, AyanamshaSystem, ayanamsha_mean_deg, ayanamsha_true_deg};
pub use engine::{EclipticPosition, EngineConfig, Ephemeris, PrecessionEngine};
pub use error::EphemerisError;
pub use mode::{SiderealMode, Zodiac};
pub use precession::{
    general_precession_arcsec, general_precession_deg, nutation_longitude_arcsec,
    precession_between_deg,
};
pub use stars::{CATALOG, FixedStar, find_star};
