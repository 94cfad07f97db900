//! Fixed stars used as sidereal anchors (junction stars of the nakshatras
//! plus the galactic center).
//!
//! Positions are mean ecliptic coordinates for J2000.0, rounded to ~1″.
//! Longitudes are carried to other epochs by general precession only;
//! proper motion and the slow rotation of the ecliptic are ignored, which
//! keeps positions within a few arc-minutes over ±2000 years.

use shunya_search::normalize_360;

use crate::precession::general_precession_deg;

/// A catalog star.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FixedStar {
    /// Traditional name.
    pub name: &'static str,
    /// Bayer-style short designation (e.g. `alTau`).
    pub designation: &'static str,
    /// Nakshatra whose junction star this is, if any.
    pub nakshatra: Option<&'static str>,
    /// Additional accepted names.
    pub aliases: &'static [&'static str],
    /// Ecliptic longitude at J2000.0 in degrees.
    pub lon_j2000_deg: f64,
    /// Ecliptic latitude at J2000.0 in degrees.
    pub lat_j2000_deg: f64,
}

impl FixedStar {
    /// Mean tropical ecliptic longitude at `jd`, in `[0, 360)`.
    pub fn tropical_longitude_deg(&self, jd: f64) -> f64 {
        normalize_360(self.lon_j2000_deg + general_precession_deg(jd))
    }

    /// Whether `query` names this star (case-insensitive; a leading comma
    /// on designations is ignored).
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().trim_start_matches(',');
        self.name.eq_ignore_ascii_case(q)
            || self.designation.eq_ignore_ascii_case(q)
            || self.nakshatra.is_some_and(|n| n.eq_ignore_ascii_case(q))
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(q))
    }
}

pub const ALDEBARAN: FixedStar = FixedStar {
    name: "Aldebaran",
    designation: "alTau",
    nakshatra: Some("Rohini"),
    aliases: &[],
    lon_j2000_deg: 69.7897,
    lat_j2000_deg: -5.4676,
};

pub const ALCYONE: FixedStar = FixedStar {
    name: "Alcyone",
    designation: "etTau",
    nakshatra: Some("Krittika"),
    aliases: &[],
    lon_j2000_deg: 59.9999,
    lat_j2000_deg: 4.0530,
};

pub const POLLUX: FixedStar = FixedStar {
    name: "Pollux",
    designation: "beGem",
    nakshatra: Some("Punarvasu"),
    aliases: &[],
    lon_j2000_deg: 113.2163,
    lat_j2000_deg: 6.6839,
};

pub const ASELLUS_AUSTRALIS: FixedStar = FixedStar {
    name: "Asellus Australis",
    designation: "deCnc",
    nakshatra: Some("Pushya"),
    aliases: &["AsellusAustralis"],
    lon_j2000_deg: 128.7171,
    lat_j2000_deg: 0.0780,
};

pub const EPSILON_HYDRAE: FixedStar = FixedStar {
    name: "Epsilon Hydrae",
    designation: "epHya",
    nakshatra: Some("Ashlesha"),
    aliases: &["Aslesha"],
    lon_j2000_deg: 132.3447,
    lat_j2000_deg: -11.1040,
};

pub const REGULUS: FixedStar = FixedStar {
    name: "Regulus",
    designation: "alLeo",
    nakshatra: Some("Magha"),
    aliases: &[],
    lon_j2000_deg: 149.8291,
    lat_j2000_deg: 0.4648,
};

pub const SPICA: FixedStar = FixedStar {
    name: "Spica",
    designation: "alVir",
    nakshatra: Some("Citra"),
    aliases: &["Chitra"],
    lon_j2000_deg: 203.8413,
    lat_j2000_deg: -2.0542,
};

pub const ZUBEN_ELGENUBI: FixedStar = FixedStar {
    name: "Zuben Elgenubi",
    designation: "al-2Lib",
    nakshatra: Some("Vishakha"),
    aliases: &["ZubenElgenubi", "Visakha"],
    lon_j2000_deg: 225.0800,
    lat_j2000_deg: 0.3340,
};

pub const DSCHUBBA: FixedStar = FixedStar {
    name: "Dschubba",
    designation: "deSco",
    nakshatra: Some("Anuradha"),
    aliases: &[],
    lon_j2000_deg: 242.5638,
    lat_j2000_deg: -1.9840,
};

pub const ANTARES: FixedStar = FixedStar {
    name: "Antares",
    designation: "alSco",
    nakshatra: Some("Jyeshtha"),
    aliases: &["Jyestha"],
    lon_j2000_deg: 249.7626,
    lat_j2000_deg: -4.5693,
};

pub const SHAULA: FixedStar = FixedStar {
    name: "Shaula",
    designation: "laSco",
    nakshatra: Some("Mula"),
    aliases: &[],
    lon_j2000_deg: 264.5854,
    lat_j2000_deg: -13.7876,
};

pub const GALACTIC_CENTER: FixedStar = FixedStar {
    name: "Galactic Center",
    designation: "SgrA*",
    nakshatra: None,
    aliases: &["Gal. Center", "GalCenter"],
    lon_j2000_deg: 266.8396,
    lat_j2000_deg: -5.6065,
};

pub const ZETA_PISCIUM: FixedStar = FixedStar {
    name: "Zeta Piscium",
    designation: "zePsc",
    nakshatra: Some("Revati"),
    aliases: &["ZetaPiscium"],
    lon_j2000_deg: 19.8847,
    lat_j2000_deg: -0.2150,
};

/// Full catalog, in order of J2000 longitude from Krittika onward.
pub const CATALOG: [FixedStar; 13] = [
    ALCYONE,
    ALDEBARAN,
    POLLUX,
    ASELLUS_AUSTRALIS,
    EPSILON_HYDRAE,
    REGULUS,
    SPICA,
    ZUBEN_ELGENUBI,
    DSCHUBBA,
    ANTARES,
    SHAULA,
    GALACTIC_CENTER,
    ZETA_PISCIUM,
];

/// Look up a star by name, designation, nakshatra or alias.
pub fn find_star(query: &str) -> Option<&'static FixedStar> {
    CATALOG.iter().find(|s| s.matches(query))
}
