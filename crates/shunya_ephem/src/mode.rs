//! Explicit sidereal-mode configuration passed into every engine query.

use crate::ayanamsha::AyanamshaSystem;
use crate::error::EphemerisError;

/// Sidereal reference frame selector.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SiderealMode {
    /// One of the built-in presets.
    Preset(AyanamshaSystem),
    /// User-defined frame: ayanamsha `ayan_t0_deg` at Julian day `t0_jd`,
    /// carried to other epochs by general precession.
    User { t0_jd: f64, ayan_t0_deg: f64 },
}

impl SiderealMode {
    /// Frame that coincides with the tropical frame at `jd`.
    pub fn coincident_at(jd: f64) -> Self {
        Self::User {
            t0_jd: jd,
            ayan_t0_deg: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), EphemerisError> {
        match *self {
            Self::Preset(_) => Ok(()),
            Self::User { t0_jd, ayan_t0_deg } => {
                if !t0_jd.is_finite() {
                    return Err(EphemerisError::InvalidMode("anchor epoch must be finite"));
                }
                if !ayan_t0_deg.is_finite() {
                    return Err(EphemerisError::InvalidMode(
                        "anchor ayanamsha must be finite",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Short label for reports.
    pub fn label(&self) -> String {
        match self {
            Self::Preset(system) => system.name().to_string(),
            Self::User { t0_jd, ayan_t0_deg } => format!("User (t0 {t0_jd}, {ayan_t0_deg} deg)"),
        }
    }
}

impl From<AyanamshaSystem> for SiderealMode {
    fn from(system: AyanamshaSystem) -> Self {
        Self::Preset(system)
    }
}

/// Zodiac in which longitudes are reported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zodiac {
    #[default]
    Tropical,
    Sidereal(SiderealMode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_mode_validation() {
        assert!(SiderealMode::coincident_at(2_451_545.0).validate().is_ok());
        let bad = SiderealMode::User {
            t0_jd: f64::NAN,
            ayan_t0_deg: 0.0,
        };
        assert!(matches!(bad.validate(), Err(EphemerisError::InvalidMode(_))));
        let bad = SiderealMode::User {
            t0_jd: 0.0,
            ayan_t0_deg: f64::INFINITY,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn preset_from_system() {
        let mode: SiderealMode = AyanamshaSystem::Lahiri.into();
        assert_eq!(mode, SiderealMode::Preset(AyanamshaSystem::Lahiri));
        assert_eq!(mode.label(), "Lahiri");
    }

    #[test]
    fn default_zodiac_is_tropical() {
        assert_eq!(Zodiac::default(), Zodiac::Tropical);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn user_mode_json_shape() {
        let json = serde_json::to_value(SiderealMode::coincident_at(2_451_545.0)).unwrap();
        assert_eq!(json["User"]["t0_jd"], 2_451_545.0);
        assert_eq!(json["User"]["ayan_t0_deg"], 0.0);
        let preset: SiderealMode = serde_json::from_str(r#"{"Preset":"TrueCitra"}"#).unwrap();
        assert_eq!(preset, SiderealMode::Preset(AyanamshaSystem::TrueCitra));
    }
}
