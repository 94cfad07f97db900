//! General precession in longitude and the leading nutation terms.
//!
//! p_A is the accumulated westward drift of the vernal equinox along the
//! ecliptic since J2000.0; every sidereal longitude and ayanamsha in this
//! crate is a fixed J2000 value carried forward by p_A.
//!
//! Sources: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (p_A
//! polynomial); IERS Conventions 2010, Tables 5.2e and 5.3b (nutation).

use std::f64::consts::TAU;

use shunya_time::jd_to_centuries;

const AS2RAD: f64 = TAU / 1_296_000.0;

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// `t` is Julian centuries since J2000.0. About 5028.8″ per century.
pub fn general_precession_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// General precession in degrees at Julian day `jd`.
pub fn general_precession_deg(jd: f64) -> f64 {
    general_precession_arcsec(jd_to_centuries(jd)) / 3600.0
}

/// Precession accumulated between two Julian days, in degrees.
pub fn precession_between_deg(jd_from: f64, jd_to: f64) -> f64 {
    general_precession_deg(jd_to) - general_precession_deg(jd_from)
}

/// Nutation in longitude Δψ in arcseconds from the four largest IAU 2000B
/// lunisolar terms (about 0.1″ short of the full 77-term series).
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    // Delaunay arguments F, D and Ω, linear part
    let f = (335_779.526232 + 1_739_527_262.8478 * t) * AS2RAD;
    let d = (1_072_260.70369 + 1_602_961_601.2090 * t) * AS2RAD;
    let om = (450_160.398036 - 6_962_890.5431 * t) * AS2RAD;

    // (argument, S_i, S'_i) with amplitudes in arcsec and arcsec/century
    let terms = [
        (om, -17.2064161, -0.0174666),
        (2.0 * f - 2.0 * d + 2.0 * om, -1.3170906, -0.0001675),
        (2.0 * f + 2.0 * om, -0.2276413, -0.0000234),
        (2.0 * om, 0.2074554, 0.0000207),
    ];
    terms
        .iter()
        .map(|&(arg, s, sd)| (s + sd * t) * arg.sin())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shunya_time::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_arcsec(0.0), 0.0);
        assert_eq!(general_precession_deg(J2000_JD), 0.0);
    }

    #[test]
    fn one_century() {
        let p = general_precession_arcsec(1.0);
        assert!((p - 5029.90).abs() < 1.0, "p_A(1) = {p}");
    }

    #[test]
    fn annual_rate() {
        let p = general_precession_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn between_is_antisymmetric() {
        let a = J2000_JD - 17.0 * DAYS_PER_JULIAN_CENTURY;
        let b = J2000_JD + 0.5 * DAYS_PER_JULIAN_CENTURY;
        assert!((precession_between_deg(a, b) + precession_between_deg(b, a)).abs() < 1e-12);
        assert!(precession_between_deg(a, b) > 0.0);
    }

    #[test]
    fn nutation_amplitude() {
        // |Δψ| never exceeds ~19″
        let mut t = -10.0;
        while t < 10.0 {
            let dpsi = nutation_longitude_arcsec(t);
            assert!(dpsi.abs() < 19.5, "Δψ({t}) = {dpsi}");
            t += 0.0137;
        }
    }

    #[test]
    fn nutation_at_j2000() {
        // IAU 2000B gives Δψ ≈ -13.93″ at J2000.0
        let dpsi = nutation_longitude_arcsec(0.0);
        assert!((dpsi + 13.93).abs() < 0.3, "Δψ(J2000) = {dpsi}");
    }
}
