//! Golden zero points with the analytic precession engine.

use shunya_ephem::{AyanamshaSystem, PrecessionEngine};
use shunya_points::{
    PointsConfig, ayanamsha_zero_point, scan_bracket, scan_presets, sort_by_zero_date,
    star_fix_bracket, star_fixing_point,
};
use shunya_search::{SearchConfig, dms_to_deg};
use shunya_time::{J1900_JD, J2000_JD};

fn zero_of(system: AyanamshaSystem) -> shunya_points::ZeroPoint {
    ayanamsha_zero_point(
        &PrecessionEngine::default(),
        system,
        scan_bracket().unwrap(),
        &PointsConfig::default(),
    )
    .unwrap()
}

#[test]
fn lahiri_zero_in_third_century() {
    let z = zero_of(AyanamshaSystem::Lahiri);
    assert!((z.jd - 1_825_509.544).abs() < 1e-3, "jd = {}", z.jd);
    assert_eq!((z.date.year, z.date.month, z.date.day), (285, 12, 22));
    assert!(z.stats.width_days <= 1e-7 || z.stats.exact_zero);
}

#[test]
fn raman_zero_late_fourth_century() {
    let z = zero_of(AyanamshaSystem::Raman);
    assert!((z.jd - 1_864_567.496).abs() < 1e-3, "jd = {}", z.jd);
    assert_eq!(z.date.year, 392);
}

#[test]
fn epoch_presets_zero_at_their_epochs() {
    assert!((zero_of(AyanamshaSystem::J2000).jd - J2000_JD).abs() < 1e-6);
    assert!((zero_of(AyanamshaSystem::J1900).jd - J1900_JD).abs() < 1e-6);
}

#[test]
fn fine_tolerance_tightens_result() {
    let config = PointsConfig {
        search: SearchConfig::fine(),
        ..PointsConfig::default()
    };
    let z = ayanamsha_zero_point(
        &PrecessionEngine::default(),
        AyanamshaSystem::J2000,
        scan_bracket().unwrap(),
        &config,
    )
    .unwrap();
    assert!((z.jd - J2000_JD).abs() < 1e-8, "jd = {}", z.jd);
}

#[test]
fn full_scan_is_chronological_after_sort() {
    let bracket = scan_bracket().unwrap();
    let mut rows = scan_presets(
        &PrecessionEngine::default(),
        AyanamshaSystem::all(),
        bracket,
        &PointsConfig::default(),
    );
    assert_eq!(rows.len(), AyanamshaSystem::all().len());
    for row in &rows {
        let z = row.outcome.as_ref().unwrap();
        assert!(bracket.contains(z.jd), "{:?} at {}", row.system, z.jd);
        assert!(z.residual_deg.abs() < 1e-6, "{:?}", row.system);
    }
    sort_by_zero_date(&mut rows);
    let jds: Vec<f64> = rows.iter().filter_map(|r| r.zero_jd()).collect();
    assert!(jds.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(rows.last().map(|r| r.system), Some(AyanamshaSystem::J2000));
}

#[test]
fn regulus_at_magha_center_in_fourth_century() {
    let fix = star_fixing_point(
        &PrecessionEngine::default(),
        "Regulus",
        dms_to_deg(126.0, 40.0, 0.0),
        star_fix_bracket().unwrap(),
        &PointsConfig::default(),
    )
    .unwrap();
    assert!((fix.jd - 1_843_699.296).abs() < 1e-3, "jd = {}", fix.jd);
    assert_eq!((fix.date.year, fix.date.month, fix.date.day), (335, 10, 11));
}

#[test]
fn spica_at_180_close_to_lahiri_zero() {
    let fix = star_fixing_point(
        &PrecessionEngine::default(),
        "Spica",
        180.0,
        scan_bracket().unwrap(),
        &PointsConfig::default(),
    )
    .unwrap();
    let lahiri = zero_of(AyanamshaSystem::Lahiri);
    // Lahiri puts Spica within ~1' of 180 deg
    assert!((fix.jd - lahiri.jd).abs() < 365.0, "{} vs {}", fix.jd, lahiri.jd);
}

#[cfg(feature = "serde")]
#[test]
fn zero_point_serializes() {
    let z = zero_of(AyanamshaSystem::J2000);
    let json = serde_json::to_value(z).unwrap();
    assert!(json["jd"].as_f64().is_some());
    assert_eq!(json["date"]["year"], 2000);
    assert_eq!(json["mode"]["Preset"], "J2000");
}
