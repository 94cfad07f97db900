//! Ayanamsha presets for 32 sidereal reference systems.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and a sidereal zodiac (anchored to fixed stars).
//! As the equinox precesses westward, the ayanamsha increases over time.
//!
//! A preset is anchored in one of three ways (see [`Anchor`]):
//! - a reference value at J2000.0, carried to other epochs by general
//!   precession;
//! - an epoch at which the ayanamsha is zero (J2000, J1900, B1950);
//! - a fixed star held at a constant sidereal longitude ("true" systems),
//!   where the ayanamsha tracks the star's precessed longitude.

use shunya_search::{dms_to_deg, normalize_signed};
use shunya_time::{B1950_JD, J1900_JD, J2000_JD};

use crate::precession::{general_precession_deg, precession_between_deg};
use crate::stars::{ASELLUS_AUSTRALIS, FixedStar, SHAULA, SPICA, ZETA_PISCIUM};

/// How a preset ties the sidereal zodiac to the sky.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Ayanamsha at J2000.0 in degrees.
    J2000Value(f64),
    /// Julian day at which the ayanamsha is zero.
    ZeroEpoch(f64),
    /// Star held at a fixed sidereal longitude in degrees.
    Star {
        star: FixedStar,
        sidereal_lon_deg: f64,
    },
}

/// Sidereal reference systems for ayanamsha computation.
///
/// Each variant defines a different convention for anchoring the sidereal
/// zodiac to the fixed stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    /// Indian government standard (Calendar Reform Committee, 1957).
    Lahiri,

    /// True Lahiri: same anchor as Lahiri, but uses the true
    /// (nutation-corrected) equinox instead of the mean equinox.
    TrueLahiri,

    /// Krishnamurti Paddhati (KP): minimal offset from Lahiri.
    KP,

    /// B.V. Raman: from "Hindu Predictive Astrology".
    Raman,

    /// Fagan-Bradley: primary Western sidereal system.
    FaganBradley,

    /// Pushya Paksha: delta Cancri (Pushya) at 16 deg Cancer.
    PushyaPaksha,

    /// Rohini Paksha: Aldebaran at 15 deg 47 min Taurus.
    RohiniPaksha,

    /// Robert DeLuce ayanamsha (1930s).
    DeLuce,

    /// Djwal Khul: esoteric astrology (Alice Bailey tradition).
    DjwalKhul,

    /// Hipparchos: derived from Hipparchus observations (~128 BCE).
    Hipparchos,

    /// Sassanian: Sassanid-era Persian astronomical tradition.
    Sassanian,

    DevaDutta,

    UshaShashi,

    /// Sri Yukteshwar: from "The Holy Science" (1894).
    Yukteshwar,

    JnBhasin,

    ChandraHari,

    Jagganatha,

    /// Surya Siddhanta, back-computed with IAU precession.
    SuryaSiddhanta,

    /// Galactic Center at 0 deg Sagittarius sidereal.
    GalacticCenter0Sag,

    /// Aldebaran at 15 deg Taurus sidereal.
    Aldebaran15Tau,

    /// Sidereal frame coinciding with the tropical one at J2000.0.
    J2000,

    /// Sidereal frame coinciding with the tropical one at J1900.0.
    J1900,

    /// Sidereal frame coinciding with the tropical one at B1950.0.
    B1950,

    /// Babylonian, Kugler 1.
    BabylonianKugler1,

    /// Babylonian, Kugler 2.
    BabylonianKugler2,

    /// Babylonian, Kugler 3.
    BabylonianKugler3,

    /// Babylonian, Huber.
    BabylonianHuber,

    /// Babylonian, eta Piscium.
    BabylonianEtaPiscium,

    /// Spica held at exactly 180 deg sidereal.
    TrueCitra,

    /// Zeta Piscium held at 359 deg 50 min sidereal.
    TrueRevati,

    /// Delta Cancri held at 106 deg sidereal.
    TruePushya,

    /// Shaula (lambda Scorpii) held at 240 deg sidereal.
    TrueMula,
}

const ALL_SYSTEMS: [AyanamshaSystem; 32] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::TrueLahiri,
    AyanamshaSystem::KP,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::PushyaPaksha,
    AyanamshaSystem::RohiniPaksha,
    AyanamshaSystem::DeLuce,
    AyanamshaSystem::DjwalKhul,
    AyanamshaSystem::Hipparchos,
    AyanamshaSystem::Sassanian,
    AyanamshaSystem::DevaDutta,
    AyanamshaSystem::UshaShashi,
    AyanamshaSystem::Yukteshwar,
    AyanamshaSystem::JnBhasin,
    AyanamshaSystem::ChandraHari,
    AyanamshaSystem::Jagganatha,
    AyanamshaSystem::SuryaSiddhanta,
    AyanamshaSystem::GalacticCenter0Sag,
    AyanamshaSystem::Aldebaran15Tau,
    AyanamshaSystem::J2000,
    AyanamshaSystem::J1900,
    AyanamshaSystem::B1950,
    AyanamshaSystem::BabylonianKugler1,
    AyanamshaSystem::BabylonianKugler2,
    AyanamshaSystem::BabylonianKugler3,
    AyanamshaSystem::BabylonianHuber,
    AyanamshaSystem::BabylonianEtaPiscium,
    AyanamshaSystem::TrueCitra,
    AyanamshaSystem::TrueRevati,
    AyanamshaSystem::TruePushya,
    AyanamshaSystem::TrueMula,
];

impl AyanamshaSystem {
    /// How this system is anchored.
    pub fn anchor(self) -> Anchor {
        use Anchor::{J2000Value, Star, ZeroEpoch};
        match self {
            // Spica at 0 deg Libra sidereal
            Self::Lahiri | Self::TrueLahiri => J2000Value(23.853),
            Self::KP => J2000Value(23.850),
            // zero year ~397 CE
            Self::Raman => J2000Value(22.370),
            // SVP calibration
            Self::FaganBradley => J2000Value(24.736),
            Self::PushyaPaksha => J2000Value(21.000),
            Self::RohiniPaksha => J2000Value(24.087),
            Self::DeLuce => J2000Value(21.619),
            Self::DjwalKhul => J2000Value(22.883),
            Self::Hipparchos => J2000Value(21.176),
            Self::Sassanian => J2000Value(19.765),
            Self::DevaDutta => J2000Value(22.474),
            Self::UshaShashi => J2000Value(20.103),
            Self::Yukteshwar | Self::JnBhasin => J2000Value(22.376),
            Self::ChandraHari | Self::Jagganatha => J2000Value(23.250),
            Self::SuryaSiddhanta => J2000Value(22.459),
            Self::GalacticCenter0Sag => J2000Value(26.860),
            Self::Aldebaran15Tau => J2000Value(24.870),
            Self::J2000 => ZeroEpoch(J2000_JD),
            Self::J1900 => ZeroEpoch(J1900_JD),
            Self::B1950 => ZeroEpoch(B1950_JD),
            Self::BabylonianKugler1 => J2000Value(23.533),
            Self::BabylonianKugler2 => J2000Value(24.933),
            Self::BabylonianKugler3 => J2000Value(25.783),
            Self::BabylonianHuber => J2000Value(24.733),
            Self::BabylonianEtaPiscium => J2000Value(24.522),
            Self::TrueCitra => Star {
                star: SPICA,
                sidereal_lon_deg: 180.0,
            },
            Self::TrueRevati => Star {
                star: ZETA_PISCIUM,
                sidereal_lon_deg: dms_to_deg(359.0, 50.0, 0.0),
            },
            Self::TruePushya => Star {
                star: ASELLUS_AUSTRALIS,
                sidereal_lon_deg: 106.0,
            },
            Self::TrueMula => Star {
                star: SHAULA,
                sidereal_lon_deg: 240.0,
            },
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::TrueLahiri => "True Lahiri",
            Self::KP => "Krishnamurti",
            Self::Raman => "Raman",
            Self::FaganBradley => "Fagan/Bradley",
            Self::PushyaPaksha => "Pushya-paksha",
            Self::RohiniPaksha => "Rohini-paksha",
            Self::DeLuce => "De Luce",
            Self::DjwalKhul => "Djwhal Khul",
            Self::Hipparchos => "Hipparchos",
            Self::Sassanian => "Sassanian",
            Self::DevaDutta => "Deva-dutta",
            Self::UshaShashi => "Usha/Shashi",
            Self::Yukteshwar => "Yukteshwar",
            Self::JnBhasin => "J.N. Bhasin",
            Self::ChandraHari => "Chandra Hari",
            Self::Jagganatha => "Jagganatha",
            Self::SuryaSiddhanta => "Surya Siddhanta",
            Self::GalacticCenter0Sag => "Galactic Center 0 Sag",
            Self::Aldebaran15Tau => "Aldebaran 15 Tau",
            Self::J2000 => "J2000",
            Self::J1900 => "J1900",
            Self::B1950 => "B1950",
            Self::BabylonianKugler1 => "Babylonian/Kugler 1",
            Self::BabylonianKugler2 => "Babylonian/Kugler 2",
            Self::BabylonianKugler3 => "Babylonian/Kugler 3",
            Self::BabylonianHuber => "Babylonian/Huber",
            Self::BabylonianEtaPiscium => "Babylonian/Eta Piscium",
            Self::TrueCitra => "True Citra",
            Self::TrueRevati => "True Revati",
            Self::TruePushya => "True Pushya",
            Self::TrueMula => "True Mula",
        }
    }

    /// Numeric code: position in [`AyanamshaSystem::all`].
    pub fn code(self) -> u8 {
        // ALL_SYSTEMS lists every variant exactly once
        ALL_SYSTEMS.iter().position(|&s| s == self).unwrap_or(0) as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        ALL_SYSTEMS.get(usize::from(code)).copied()
    }

    /// Case-insensitive lookup by display name or variant name; spaces,
    /// `-`, `/`, `.` and `_` are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = squash(name);
        if key.is_empty() {
            return None;
        }
        ALL_SYSTEMS
            .iter()
            .copied()
            .find(|s| squash(s.name()) == key || squash(&format!("{s:?}")) == key)
    }

    /// Whether this system uses the true (nutation-corrected) equinox.
    ///
    /// Only `TrueLahiri` returns `true`. All other systems use the mean equinox.
    pub const fn uses_true_equinox(self) -> bool {
        matches!(self, Self::TrueLahiri)
    }

    /// All 32 defined ayanamsha systems, in code order.
    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Mean ayanamsha in degrees at Julian day `jd`.
///
/// J2000-valued presets return `reference + p_A`, zero-epoch presets the
/// precession accumulated since the epoch. Star-anchored presets return
/// the star's precessed longitude minus its sidereal longitude, wrapped
/// into `[-180, 180)`.
pub fn ayanamsha_mean_deg(system: AyanamshaSystem, jd: f64) -> f64 {
    match system.anchor() {
        Anchor::J2000Value(reference) => reference + general_precession_deg(jd),
        Anchor::ZeroEpoch(epoch) => precession_between_deg(epoch, jd),
        Anchor::Star {
            star,
            sidereal_lon_deg,
        } => normalize_signed(star.tropical_longitude_deg(jd) - sidereal_lon_deg),
    }
}

/// True (nutation-corrected) ayanamsha in degrees.
///
/// For `TrueLahiri`, adds `delta_psi_arcsec` (nutation in longitude) to the
/// mean value. For all other systems, returns the mean value unchanged.
pub fn ayanamsha_true_deg(system: AyanamshaSystem, jd: f64, delta_psi_arcsec: f64) -> f64 {
    let mean = ayanamsha_mean_deg(system, jd);
    if system.uses_true_equinox() {
        mean + delta_psi_arcsec / 3600.0
    } else {
        mean
    }
}
