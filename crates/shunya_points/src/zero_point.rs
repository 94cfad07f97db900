//! Zero points of sidereal frames: the epoch at which a frame's
//! ayanamsha vanishes.
//!
//! Every search runs the periodic bisection from `shunya_search` over a
//! [`TargetFunction`]. Preset scans search each preset independently and
//! in parallel; the engine is shared by reference since every query
//! carries its own sidereal mode.

use std::cmp::Ordering;

use rayon::prelude::*;
use shunya_ephem::{AyanamshaSystem, Ephemeris, SiderealMode};
use shunya_search::{Bracket, Convergence, normalize_signed, try_find_root_observed};
use shunya_time::{CalendarDate, DAYS_PER_JULIAN_YEAR};
use tracing::{debug, trace};

use crate::error::PointsError;
use crate::points_types::{PointsConfig, PresetZero, SearchStats, ZeroPoint};
use crate::target::{AyanamshaZero, TargetFunction};

/// Run the root-finder on `target` and return the convergence record plus
/// the residual at the root.
pub fn solve<T: TargetFunction + ?Sized>(
    target: &T,
    bracket: Bracket,
    config: &PointsConfig,
) -> Result<(Convergence, f64), PointsError> {
    config.validate()?;
    let conv = try_find_root_observed(
        |jd| target.residual_deg(jd),
        bracket,
        &config.search,
        |step| {
            trace!(
                iteration = step.iteration,
                left = step.left,
                right = step.right,
                mid_value = step.mid_value,
                right_value = step.right_value,
                "bisection step"
            );
        },
    )?;
    let residual = target.residual_deg(conv.jd)?;
    debug!(
        jd = conv.jd,
        iterations = conv.iterations,
        residual,
        exact_zero = conv.exact_zero,
        "search converged"
    );
    Ok((conv, residual))
}

/// Zero point of a built-in ayanamsha preset.
pub fn ayanamsha_zero_point<E: Ephemeris + ?Sized>(
    engine: &E,
    system: AyanamshaSystem,
    bracket: Bracket,
    config: &PointsConfig,
) -> Result<ZeroPoint, PointsError> {
    mode_zero_point(engine, SiderealMode::Preset(system), bracket, config)
}

/// Zero point of an arbitrary sidereal mode, typically
/// [`SiderealMode::User`].
pub fn user_mode_zero_point<E: Ephemeris + ?Sized>(
    engine: &E,
    mode: SiderealMode,
    bracket: Bracket,
    config: &PointsConfig,
) -> Result<ZeroPoint, PointsError> {
    mode_zero_point(engine, mode, bracket, config)
}

fn mode_zero_point<E: Ephemeris + ?Sized>(
    engine: &E,
    mode: SiderealMode,
    bracket: Bracket,
    config: &PointsConfig,
) -> Result<ZeroPoint, PointsError> {
    mode.validate()?;
    let target = AyanamshaZero::new(engine, mode, config.failure_policy);
    let (conv, residual_deg) = solve(&target, bracket, config)?;
    debug!(mode = %mode.label(), jd = conv.jd, "zero point found");
    Ok(ZeroPoint {
        mode,
        jd: conv.jd,
        date: CalendarDate::from_jd(conv.jd, config.calendar)?,
        residual_deg,
        stats: SearchStats::from(&conv),
    })
}

/// Zero points of several presets, searched in parallel.
///
/// Results are in input order. A failed preset is reported in its own
/// entry and does not stop the scan.
pub fn scan_presets<E: Ephemeris + ?Sized>(
    engine: &E,
    systems: &[AyanamshaSystem],
    bracket: Bracket,
    config: &PointsConfig,
) -> Vec<PresetZero> {
    systems
        .par_iter()
        .map(|&system| PresetZero {
            system,
            outcome: ayanamsha_zero_point(engine, system, bracket, config),
        })
        .collect()
}

/// Order scan results chronologically by zero date; failed entries go
/// last, keeping their relative order.
pub fn sort_by_zero_date(zeros: &mut [PresetZero]) {
    zeros.sort_by(|a, b| match (a.zero_jd(), b.zero_jd()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Change of the ayanamsha of `mode` over one Julian year starting at
/// `jd`, in arcseconds.
pub fn annual_precession_arcsec<E: Ephemeris + ?Sized>(
    engine: &E,
    mode: &SiderealMode,
    jd: f64,
) -> Result<f64, PointsError> {
    let start = engine.ayanamsha_deg(mode, jd)?;
    let end = engine.ayanamsha_deg(mode, jd + DAYS_PER_JULIAN_YEAR)?;
    Ok(normalize_signed(end - start) * 3600.0)
}
