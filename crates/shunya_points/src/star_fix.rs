//! Star fixing: find the epoch at which a star's sidereal longitude,
//! measured in the frame that coincides with the tropical frame at that
//! same epoch, equals a prescribed value.
//!
//! Placing Regulus (Magha) at 126°40', Aldebaran (Rohini) at 46°40' or
//! Shaula (Mula) at 241° each defines an ayanamsha whose zero falls on
//! the epoch returned here.

use shunya_ephem::{Ephemeris, SiderealMode, Zodiac, find_star};
use shunya_search::Bracket;
use shunya_time::CalendarDate;
use tracing::debug;

use crate::error::PointsError;
use crate::points_types::{PointsConfig, SearchStats, StarFix, StarPosition};
use crate::target::StarAtLongitude;
use crate::zero_point::solve;

/// Junction stars reported alongside a star fix.
pub const COMMON_STARS: [&str; 13] = [
    "Regulus",
    "Shaula",
    "Antares",
    "Aldebaran",
    "Alcyone",
    ",SgrA*",
    "Spica",
    ",deCnc",
    ",zePsc",
    "ZubenElgenubi",
    "Dschubba",
    "Ashlesha",
    "Pollux",
];

/// Epoch at which `star` sits at sidereal longitude `target_deg`.
pub fn star_fixing_point<E: Ephemeris + ?Sized>(
    engine: &E,
    star: &str,
    target_deg: f64,
    bracket: Bracket,
    config: &PointsConfig,
) -> Result<StarFix, PointsError> {
    if !target_deg.is_finite() {
        return Err(PointsError::InvalidTarget(target_deg));
    }
    let target = StarAtLongitude::new(engine, star, target_deg, config.failure_policy);
    let (conv, residual_deg) = solve(&target, bracket, config)?;
    let name = find_star(star).map_or(star, |s| s.name);
    debug!(star = name, target_deg, jd = conv.jd, "star fixed");
    Ok(StarFix {
        star: name.to_string(),
        target_lon_deg: target_deg,
        jd: conv.jd,
        date: CalendarDate::from_jd(conv.jd, config.calendar)?,
        residual_deg,
        stats: SearchStats::from(&conv),
    })
}

/// Sidereal positions of `stars` at `jd` in `mode`.
pub fn star_table<E: Ephemeris + ?Sized>(
    engine: &E,
    stars: &[&str],
    jd: f64,
    mode: &SiderealMode,
) -> Result<Vec<StarPosition>, PointsError> {
    let zodiac = Zodiac::Sidereal(*mode);
    stars
        .iter()
        .map(|&query| -> Result<StarPosition, PointsError> {
            let pos = engine.fixed_star(query, jd, &zodiac)?;
            let entry = find_star(query);
            Ok(StarPosition {
                name: entry.map_or(query, |s| s.name).to_string(),
                nakshatra: entry.and_then(|s| s.nakshatra).map(str::to_string),
                longitude_deg: pos.longitude_deg,
                latitude_deg: pos.latitude_deg,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points_types::star_fix_bracket;
    use shunya_ephem::{EphemerisError, PrecessionEngine};
    use shunya_search::dms_to_deg;

    #[test]
    fn regulus_fix_puts_regulus_on_target() {
        let e = PrecessionEngine::default();
        let target = dms_to_deg(126.0, 40.0, 0.0);
        let fix = star_fixing_point(
            &e,
            "regulus",
            target,
            star_fix_bracket().unwrap(),
            &PointsConfig::default(),
        )
        .unwrap();
        assert_eq!(fix.star, "Regulus");
        assert!(fix.residual_deg.abs() < 1e-8, "residual = {}", fix.residual_deg);
        let table = star_table(&e, &["Regulus"], fix.jd, &fix.mode()).unwrap();
        assert!((table[0].longitude_deg - target).abs() < 1e-8);
        assert_eq!(table[0].nakshatra.as_deref(), Some("Magha"));
    }

    #[test]
    fn common_stars_all_resolve() {
        let e = PrecessionEngine::default();
        let mode = SiderealMode::coincident_at(1_843_699.3);
        let table = star_table(&e, &COMMON_STARS, 1_843_699.3, &mode).unwrap();
        assert_eq!(table.len(), 13);
        assert_eq!(table[5].name, "Galactic Center");
        assert_eq!(table[5].nakshatra, None);
        assert!(table.iter().all(|p| (0.0..360.0).contains(&p.longitude_deg)));
    }

    #[test]
    fn unknown_star_fails() {
        let e = PrecessionEngine::default();
        let r = star_fixing_point(
            &e,
            "Betelgeuse",
            88.0,
            star_fix_bracket().unwrap(),
            &PointsConfig::default(),
        );
        assert!(matches!(
            r,
            Err(PointsError::Ephemeris(EphemerisError::UnknownStar(_)))
        ));
    }

    #[test]
    fn non_finite_target_rejected() {
        let e = PrecessionEngine::default();
        let r = star_fixing_point(
            &e,
            "Spica",
            f64::NAN,
            star_fix_bracket().unwrap(),
            &PointsConfig::default(),
        );
        assert!(matches!(r, Err(PointsError::InvalidTarget(_))));
    }
}
