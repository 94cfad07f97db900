//! Bisection for wrapped (periodic) angle functions.
//!
//! The target function returns an angle in `[-180, 180)`. A sign change
//! inside the bracket is either a true zero or a wrap from about +180° to
//! -180°. The sign probe is anchored at the right endpoint and the right
//! value is evaluated again on every iteration:
//!
//! ```text
//! mid = (left + right) / 2
//! if f(mid) * f(right) >= 0 { right = mid } else { left = mid }
//! ```
//!
//! Both the `>=` tie-break and the right-anchored probe are load-bearing.
//! A textbook bisection (left-anchored, strict `<`, signs cached from the
//! initial endpoints) settles on a different sign change when the bracket
//! holds a wrap discontinuity.
//!
//! If the bracket holds several sign changes the search converges to one of
//! them; which one is fixed by the rule above, not by proximity to an
//! endpoint.

use crate::bisection_types::{Bracket, Convergence, SearchConfig, Step};
use crate::error::SearchError;

/// Find the zero of an infallible angle function inside `[low, high]`.
///
/// Uses [`SearchConfig::new`] with the given tolerance.
pub fn find_root<F>(f: F, low: f64, high: f64, tolerance: f64) -> Result<f64, SearchError>
where
    F: Fn(f64) -> f64,
{
    let bracket = Bracket::new(low, high)?;
    let config = SearchConfig::new(tolerance);
    let conv = try_find_root(|t| Ok::<f64, SearchError>(f(t)), bracket, &config)?;
    Ok(conv.jd)
}

/// Find the zero of a fallible angle function.
///
/// The first evaluation error aborts the search and is returned unchanged.
pub fn try_find_root<F, E>(f: F, bracket: Bracket, config: &SearchConfig) -> Result<Convergence, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SearchError>,
{
    try_find_root_observed(f, bracket, config, |_| {})
}

/// [`try_find_root`] with an observer that sees every step.
pub fn try_find_root_observed<F, E, O>(
    mut f: F,
    bracket: Bracket,
    config: &SearchConfig,
    mut observer: O,
) -> Result<Convergence, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SearchError>,
    O: FnMut(&Step),
{
    config.validate()?;

    let mut left = bracket.low();
    let mut right = bracket.high();
    let mut iterations = 0u32;
    let mut evaluations = 0u32;

    while right - left > config.tolerance_days {
        let mid = 0.5 * (left + right);
        // Tolerance below the f64 spacing of the endpoints: no further progress.
        if mid <= left || mid >= right {
            break;
        }

        let mid_value = f(mid)?;
        let right_value = f(right)?;
        iterations += 1;
        evaluations += 2;

        observer(&Step {
            iteration: iterations,
            left,
            right,
            mid,
            mid_value,
            right_value,
        });

        if config.stop_on_exact_zero && mid_value == 0.0 {
            return Ok(exact(mid, iterations, evaluations));
        }

        if mid_value * right_value >= 0.0 {
            right = mid;
        } else {
            left = mid;
        }
    }

    Ok(Convergence {
        jd: 0.5 * (left + right),
        left,
        right,
        iterations,
        evaluations,
        exact_zero: false,
    })
}

/// Number of iterations a search over `bracket` needs to reach `tolerance`:
/// `ceil(log2(width / tolerance))`, or 0 when the bracket is already narrow.
pub fn iteration_bound(bracket: &Bracket, tolerance: f64) -> Result<u32, SearchError> {
    SearchConfig::new(tolerance).validate()?;
    let ratio = bracket.width() / tolerance;
    if ratio <= 1.0 {
        return Ok(0);
    }
    Ok(ratio.log2().ceil() as u32)
}

fn exact(t: f64, iterations: u32, evaluations: u32) -> Convergence {
    Convergence {
        jd: t,
        left: t,
        right: t,
        iterations,
        evaluations,
        exact_zero: true,
    }
}
