//! Report rows for the text and JSON outputs.

use serde::Serialize;
use shunya_ephem::{AyanamshaSystem, FixedStar};
use shunya_points::{PresetZero, StarFix, StarPosition, ZeroPoint};
use shunya_search::{deg_to_dms, signed_dms};

/// One preset of a scan. Failures carry their message instead of a zero.
#[derive(Debug, Clone, Serialize)]
pub struct ScanRow {
    pub code: u8,
    pub system: AyanamshaSystem,
    pub name: &'static str,
    pub zero: Option<ZeroPoint>,
    /// Annual precession of the frame at J2000, in arcseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precession_arcsec: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanRow {
    pub fn new(row: &PresetZero, precession_arcsec: Option<f64>) -> Self {
        let (zero, error) = match &row.outcome {
            Ok(z) => (Some(*z), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            code: row.system.code(),
            system: row.system,
            name: row.system.name(),
            zero,
            precession_arcsec,
            error,
        }
    }

    /// `NN. name = ..., julday = ... year = +YYYY, month = MM, day = DD, hour = hh:mm:ss.ss`
    pub fn line(&self, index: usize) -> String {
        match (&self.zero, &self.error) {
            (Some(z), _) => {
                let hms = z.date.hms();
                format!(
                    "{index:2}. name = {:<30}, julday = {:.7} year = {:+05}, month = {:02}, day = {:02}, hour = {:02}:{:02}:{:05.2}",
                    self.name,
                    z.jd,
                    z.date.year,
                    z.date.month,
                    z.date.day,
                    hms.hours,
                    hms.minutes,
                    hms.seconds
                )
            }
            (None, error) => format!(
                "{index:2}. name = {:<30}, failed: {}",
                self.name,
                error.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        match &self.zero {
            Some(z) => vec![
                self.name.to_string(),
                format!("{:.6}", z.jd),
                z.date.to_string(),
                self.precession_arcsec
                    .map_or_else(|| "-".to_string(), |p| format!("{p:.7}")),
            ],
            None => vec![
                self.name.to_string(),
                "-".to_string(),
                self.error.clone().unwrap_or_default(),
                "-".to_string(),
            ],
        }
    }
}

pub const SCAN_HEADERS: [&str; 4] = ["name", "jd", "date", "precession \"/yr"];

/// Ayanamsha of one preset at a given epoch.
#[derive(Debug, Clone, Serialize)]
pub struct AyanamshaRow {
    pub code: u8,
    pub system: AyanamshaSystem,
    pub name: &'static str,
    pub ayanamsha_deg: f64,
}

impl AyanamshaRow {
    pub fn cells(&self) -> Vec<String> {
        vec![
            format!("{:2}", self.code),
            self.name.to_string(),
            signed_dms(self.ayanamsha_deg).to_string(),
            format!("{:.9}", self.ayanamsha_deg),
        ]
    }
}

pub const AYANAMSHA_HEADERS: [&str; 4] = ["code", "name", "dms", "deg"];

/// A star fix together with the common-star table at the fixed epoch.
#[derive(Debug, Clone, Serialize)]
pub struct StarFixReport {
    pub fix: StarFix,
    pub stars: Vec<StarPosition>,
}

impl StarFixReport {
    pub fn headline(&self) -> String {
        format!(
            "Fixed the star '{}' at sidereal long {:.5} on jd {:.6} = [{}]",
            self.fix.star, self.fix.target_lon_deg, self.fix.jd, self.fix.date
        )
    }
}

pub fn star_position_cells(p: &StarPosition) -> Vec<String> {
    vec![
        p.name.clone(),
        p.nakshatra.clone().unwrap_or_else(|| "-".to_string()),
        deg_to_dms(p.longitude_deg).to_string(),
        signed_dms(p.latitude_deg).to_string(),
    ]
}

pub const STAR_HEADERS: [&str; 4] = ["star", "nakshatra", "lon", "lat"];

pub fn catalog_cells(s: &FixedStar) -> Vec<String> {
    vec![
        s.name.to_string(),
        s.designation.to_string(),
        s.nakshatra.unwrap_or("-").to_string(),
        format!("{:.4}", s.lon_j2000_deg),
        format!("{:.4}", s.lat_j2000_deg),
    ]
}

pub const CATALOG_HEADERS: [&str; 5] = [
    "star",
    "designation",
    "nakshatra",
    "lon J2000",
    "lat J2000",
];

#[cfg(test)]
mod tests {
    use super::*;
    use shunya_ephem::{EphemerisError, PrecessionEngine};
    use shunya_points::{PointsConfig, PointsError, ayanamsha_zero_point, scan_bracket};

    fn lahiri_row() -> ScanRow {
        let z = ayanamsha_zero_point(
            &PrecessionEngine::default(),
            AyanamshaSystem::Lahiri,
            scan_bracket().unwrap(),
            &PointsConfig::default(),
        );
        ScanRow::new(
            &PresetZero {
                system: AyanamshaSystem::Lahiri,
                outcome: z,
            },
            Some(50.29),
        )
    }

    #[test]
    fn scan_line_layout() {
        let line = lahiri_row().line(1);
        assert!(line.starts_with(" 1. name = Lahiri"), "{line}");
        assert!(line.contains("julday = 1825509.54"), "{line}");
        assert!(line.contains("year = +0285, month = 12, day = 22"), "{line}");
    }

    #[test]
    fn failed_row_keeps_message() {
        let row = ScanRow::new(
            &PresetZero {
                system: AyanamshaSystem::Raman,
                outcome: Err(PointsError::Ephemeris(EphemerisError::NonFiniteEpoch)),
            },
            None,
        );
        assert!(row.zero.is_none());
        assert!(row.line(2).contains("failed"));
        assert_eq!(row.cells()[1], "-");
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["error"].as_str().is_some());
        assert!(json.get("precession_arcsec").is_none());
    }

    #[test]
    fn scan_cells_show_date_and_precession() {
        let cells = lahiri_row().cells();
        assert!(cells[2].starts_with("+0285/12/22"), "{}", cells[2]);
        assert_eq!(cells[3], "50.2900000");
    }

    #[test]
    fn star_cells_in_dms() {
        let p = StarPosition {
            name: "Regulus".to_string(),
            nakshatra: Some("Magha".to_string()),
            longitude_deg: 126.0 + 40.0 / 60.0,
            latitude_deg: 0.5,
        };
        let cells = star_position_cells(&p);
        assert!(cells[2].starts_with("126:40:00") || cells[2].starts_with("126:39:59"));
        assert_eq!(cells[3], "000:30:00.00000000");
    }

    #[test]
    fn fix_headline() {
        let fix = shunya_points::star_fixing_point(
            &PrecessionEngine::default(),
            "Regulus",
            126.0 + 40.0 / 60.0,
            shunya_points::star_fix_bracket().unwrap(),
            &PointsConfig::default(),
        )
        .unwrap();
        let report = StarFixReport {
            fix,
            stars: Vec::new(),
        };
        let h = report.headline();
        assert!(
            h.starts_with("Fixed the star 'Regulus' at sidereal long 126.66667 on jd 1843699.29"),
            "{h}"
        );
        assert!(h.ends_with(']'));
    }
}
