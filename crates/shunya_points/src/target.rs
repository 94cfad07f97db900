//! Target functions handed to the root-finder.
//!
//! Each adapter closes over an engine reference and a read-only
//! configuration and maps a Julian day to a signed residual angle in
//! `[-180, 180)`. The sidereal mode travels with every engine query.

use shunya_ephem::{EphemerisError, Ephemeris, SiderealMode, Zodiac};
use shunya_search::normalize_signed;
use tracing::warn;

use crate::error::PointsError;
use crate::points_types::FailurePolicy;

/// A time → signed-angle function.
pub trait TargetFunction {
    /// Signed residual at `jd`, in `[-180, 180)` degrees.
    fn residual_deg(&self, jd: f64) -> Result<f64, PointsError>;
}

/// `f(jd) = ayanamsha(mode, jd)`: zero where the sidereal frame of `mode`
/// coincides with the tropical frame.
#[derive(Debug)]
pub struct AyanamshaZero<'a, E: ?Sized> {
    engine: &'a E,
    mode: SiderealMode,
    policy: FailurePolicy,
}

impl<'a, E: Ephemeris + ?Sized> AyanamshaZero<'a, E> {
    pub fn new(engine: &'a E, mode: SiderealMode, policy: FailurePolicy) -> Self {
        Self {
            engine,
            mode,
            policy,
        }
    }
}

impl<E: Ephemeris + ?Sized> TargetFunction for AyanamshaZero<'_, E> {
    fn residual_deg(&self, jd: f64) -> Result<f64, PointsError> {
        let ayanamsha = recover(
            self.policy,
            self.engine.ayanamsha_deg(&self.mode, jd),
            jd,
            "ayanamsha",
        )?;
        Ok(normalize_signed(ayanamsha))
    }
}

/// `f(jd) = lon(star, jd) - target` in the sidereal frame that coincides
/// with the tropical frame at `jd` itself.
#[derive(Debug)]
pub struct StarAtLongitude<'a, E: ?Sized> {
    engine: &'a E,
    star: &'a str,
    target_deg: f64,
    policy: FailurePolicy,
}

impl<'a, E: Ephemeris + ?Sized> StarAtLongitude<'a, E> {
    pub fn new(engine: &'a E, star: &'a str, target_deg: f64, policy: FailurePolicy) -> Self {
        Self {
            engine,
            star,
            target_deg,
            policy,
        }
    }
}

impl<E: Ephemeris + ?Sized> TargetFunction for StarAtLongitude<'_, E> {
    fn residual_deg(&self, jd: f64) -> Result<f64, PointsError> {
        let zodiac = Zodiac::Sidereal(SiderealMode::coincident_at(jd));
        let longitude = recover(
            self.policy,
            self.engine
                .fixed_star(self.star, jd, &zodiac)
                .map(|p| p.longitude_deg),
            jd,
            self.star,
        )?;
        Ok(normalize_signed(longitude - self.target_deg))
    }
}

/// Apply the failure policy to an engine result.
///
/// Only epoch-dependent failures are substituted; a bad star name or mode
/// fails the same way at every epoch and always propagates.
fn recover(
    policy: FailurePolicy,
    result: Result<f64, EphemerisError>,
    jd: f64,
    what: &str,
) -> Result<f64, PointsError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if policy == FailurePolicy::SubstituteZero && epoch_dependent(&e) => {
            warn!(jd, query = what, error = %e, "engine failure, substituting 0 deg");
            Ok(0.0)
        }
        Err(e) => Err(e.into()),
    }
}

fn epoch_dependent(e: &EphemerisError) -> bool {
    matches!(
        e,
        EphemerisError::EpochOutOfRange { .. } | EphemerisError::NonFiniteEpoch
    )
}
