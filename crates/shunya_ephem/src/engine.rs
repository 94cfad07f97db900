//! The ephemeris boundary and the built-in analytic engine.

use shunya_search::normalize_360;
use shunya_time::jd_to_centuries;

use crate::ayanamsha::{ayanamsha_mean_deg, ayanamsha_true_deg};
use crate::error::EphemerisError;
use crate::mode::{SiderealMode, Zodiac};
use crate::precession::{nutation_longitude_arcsec, precession_between_deg};
use crate::stars::find_star;

/// Ecliptic position returned by an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EclipticPosition {
    /// Longitude in `[0, 360)` degrees.
    pub longitude_deg: f64,
    pub latitude_deg: f64,
    /// Distance in AU, `None` where the engine does not model it.
    pub distance_au: Option<f64>,
}

/// Position and frame queries used by the zero-point searches.
///
/// The sidereal frame is an explicit argument of every query; an engine
/// holds no "current mode", so implementations can be shared across
/// threads.
pub trait Ephemeris: Send + Sync {
    /// Ayanamsha of `mode` at Julian day `jd`, in degrees.
    fn ayanamsha_deg(&self, mode: &SiderealMode, jd: f64) -> Result<f64, EphemerisError>;

    /// Position of the named fixed star at `jd` in `zodiac`.
    fn fixed_star(
        &self,
        name: &str,
        jd: f64,
        zodiac: &Zodiac,
    ) -> Result<EclipticPosition, EphemerisError>;
}

/// Configuration for [`PrecessionEngine`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Earliest supported Julian day.
    pub min_jd: f64,
    /// Latest supported Julian day.
    pub max_jd: f64,
    /// Apply nutation in longitude (true equinox of date).
    pub nutation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_jd: 0.0,
            max_jd: 3_000_000.0,
            nutation: false,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !self.min_jd.is_finite() || !self.max_jd.is_finite() {
            return Err(EphemerisError::InvalidConfig("epoch limits must be finite"));
        }
        if self.min_jd >= self.max_jd {
            return Err(EphemerisError::InvalidConfig(
                "min_jd must be less than max_jd",
            ));
        }
        Ok(())
    }
}

/// Analytic engine: IAU 2006 precession applied to J2000 catalog positions
/// and preset anchors.
///
/// Stateless apart from its configuration, so it is [`Send`] + [`Sync`].
#[derive(Debug, Clone, Default)]
pub struct PrecessionEngine {
    config: EngineConfig,
}

impl PrecessionEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EphemerisError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn check_epoch(&self, jd: f64) -> Result<(), EphemerisError> {
        if !jd.is_finite() {
            return Err(EphemerisError::NonFiniteEpoch);
        }
        if jd < self.config.min_jd || jd > self.config.max_jd {
            return Err(EphemerisError::EpochOutOfRange {
                jd,
                min_jd: self.config.min_jd,
                max_jd: self.config.max_jd,
            });
        }
        Ok(())
    }

    fn delta_psi_arcsec(&self, jd: f64) -> f64 {
        if self.config.nutation {
            nutation_longitude_arcsec(jd_to_centuries(jd))
        } else {
            0.0
        }
    }
}

impl Ephemeris for PrecessionEngine {
    fn ayanamsha_deg(&self, mode: &SiderealMode, jd: f64) -> Result<f64, EphemerisError> {
        self.check_epoch(jd)?;
        mode.validate()?;
        let value = match *mode {
            SiderealMode::Preset(system) if self.config.nutation => {
                ayanamsha_true_deg(system, jd, self.delta_psi_arcsec(jd))
            }
            SiderealMode::Preset(system) => ayanamsha_mean_deg(system, jd),
            SiderealMode::User { t0_jd, ayan_t0_deg } => {
                ayan_t0_deg + precession_between_deg(t0_jd, jd)
            }
        };
        Ok(value)
    }

    fn fixed_star(
        &self,
        name: &str,
        jd: f64,
        zodiac: &Zodiac,
    ) -> Result<EclipticPosition, EphemerisError> {
        let star = find_star(name).ok_or_else(|| EphemerisError::UnknownStar(name.to_string()))?;
        self.check_epoch(jd)?;
        let tropical = star.tropical_longitude_deg(jd) + self.delta_psi_arcsec(jd) / 3600.0;
        let longitude = match zodiac {
            Zodiac::Tropical => tropical,
            Zodiac::Sidereal(mode) => tropical - self.ayanamsha_deg(mode, jd)?,
        };
        Ok(EclipticPosition {
            longitude_deg: normalize_360(longitude),
            latitude_deg: star.lat_j2000_deg,
            distance_au: None,
        })
    }
}
