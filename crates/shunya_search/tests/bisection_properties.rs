//! Behavioural properties of the periodic root-finder on synthetic angle
//! functions: convergence, determinism, wrap handling and iteration counts.

use shunya_search::{
    Bracket, SearchConfig, SearchError, find_root, iteration_bound, normalize_signed,
    try_find_root,
};

fn sawtooth(root: f64, period: f64) -> impl Fn(f64) -> f64 {
    move |t| normalize_signed(360.0 * (t - root) / period)
}

fn search(f: impl Fn(f64) -> f64, low: f64, high: f64, tol: f64) -> shunya_search::Convergence {
    let bracket = Bracket::new(low, high).unwrap();
    try_find_root(
        |t| Ok::<_, SearchError>(f(t)),
        bracket,
        &SearchConfig::new(tol),
    )
    .unwrap()
}

#[test]
fn root_at_fifty() {
    let t = find_root(|t| normalize_signed(t - 50.0), 0.0, 100.0, 1e-7).unwrap();
    assert!((t - 50.0).abs() <= 1e-7, "t = {t}");
}

#[test]
fn slow_drift_over_wide_bracket() {
    // Two degrees per Julian century, root at t = 350, bracket up to JD 2.5e6
    let f = |t: f64| normalize_signed(2.0 * (t - 350.0) / 36_525.0);
    let t = find_root(f, 0.0, 2_500_000.0, 5e-10).unwrap();
    assert!((t - 350.0).abs() <= 5e-10, "t = {t}");
}

#[test]
fn fast_sawtooth_lands_on_a_sign_change() {
    // 2t - 700 wraps every 180 days: the bracket holds thousands of sign
    // changes and the search settles on one of them.
    let f = |t: f64| normalize_signed(2.0 * t - 700.0);
    let conv = search(f, 0.0, 2_500_000.0, 5e-10);
    assert!(conv.width() <= 5e-10 || conv.exact_zero);
    if !conv.exact_zero {
        let (fl, fr) = (f(conv.left), f(conv.right));
        assert!(fl * fr <= 0.0, "no sign change: f(left) = {fl}, f(right) = {fr}");
    }
}

#[test]
fn converges_within_tolerance_for_monotonic_functions() {
    for &root in &[0.137, 12.5001, 49.999, 73.3, 99.01] {
        let conv = search(|t| normalize_signed(1.5 * (t - root)), 0.0, 100.0, 1e-9);
        assert!(conv.width() <= 1e-9 || conv.exact_zero);
        assert!((conv.jd - root).abs() <= 1e-9, "root {root}: got {}", conv.jd);
    }
}

#[test]
fn deterministic() {
    let f = sawtooth(2_451_545.37, 9_413_223.0);
    let a = search(&f, 1_684_900.5, 2_488_069.5, 1e-7);
    let b = search(&f, 1_684_900.5, 2_488_069.5, 1e-7);
    assert_eq!(a.jd.to_bits(), b.jd.to_bits());
    assert_eq!(a.iterations, b.iterations);
}

#[test]
fn wrap_discontinuity_left_of_root() {
    // Root at 10, period 100: the function wraps at t = -40 inside every
    // bracket below, yet the search still lands on the root.
    let f = sawtooth(10.0, 100.0);
    for &(low, high) in &[(-45.0, 25.0), (-45.0, 55.0), (-48.3, 57.1), (-90.0, 30.0)] {
        let conv = search(&f, low, high, 1e-9);
        assert!(
            (conv.jd - 10.0).abs() <= 1e-9,
            "[{low}, {high}] converged to {}",
            conv.jd
        );
    }
}

#[test]
fn precession_scale_sawtooth() {
    // One wrap per ~25 772 years, as for an ayanamsha
    let root = 2_451_545.37;
    let period = 25_772.0 * 365.25;
    let conv = search(sawtooth(root, period), root - 0.7 * period, root + 0.2 * period, 1e-7);
    assert!((conv.jd - root).abs() <= 1e-7, "jd = {}", conv.jd);
}

#[test]
fn iteration_count_is_log2_of_width_over_tolerance() {
    let cases = [
        (0.0, 100.0, 1e-7, 37.1),
        (1_684_900.5, 2_488_069.5, 1e-7, 2_000_000.3),
        (-5.0, 3.0, 1e-3, 0.123),
    ];
    for &(low, high, tol, root) in &cases {
        let scale = 100.0 / (high - low);
        let conv = search(|t| normalize_signed(scale * (t - root)), low, high, tol);
        assert!((conv.jd - root).abs() <= tol, "root {root}: got {}", conv.jd);
        let bracket = Bracket::new(low, high).unwrap();
        let expected = ((high - low) / tol).log2().ceil() as u32;
        assert_eq!(conv.iterations, expected, "[{low}, {high}] tol {tol}");
        assert_eq!(iteration_bound(&bracket, tol).unwrap(), expected);
    }
}

#[test]
fn invalid_arguments_fail_fast() {
    let calls = std::cell::Cell::new(0);
    let f = |t: f64| {
        calls.set(calls.get() + 1);
        t
    };
    assert!(find_root(f, 3.0, 3.0, 1e-7).is_err());
    assert!(find_root(f, 0.0, 1.0, -1e-7).is_err());
    assert!(find_root(f, 0.0, f64::NAN, 1e-7).is_err());
    assert_eq!(calls.get(), 0);
}
