use crate::clock::{J2000_INSTANT, MICROS_PER_DAY};

/// Sidereal angle at J2000.0 for Greenwich, degrees
const SIDEREAL_AT_J2000: f64 = 280.461;

/// Earth rotation relative to the stars, degrees per solar day
pub const SIDEREAL_DEGREES_PER_DAY: f64 = 360.98564737;

/// Local sidereal angle in degrees for `longitude` (degrees, east positive)
/// at `instant` (microseconds since the Unix epoch).
///
/// The result keeps the sign of the unreduced sum, so for instants long
/// before J2000.0 it can be negative. It is never normalized into [0, 360).
pub fn local_sidereal_degrees(longitude: f64, instant: f64) -> f64 {
    let days = (instant - J2000_INSTANT) / MICROS_PER_DAY;
    (SIDEREAL_AT_J2000 + SIDEREAL_DEGREES_PER_DAY * days + longitude) % 360.0
}

#[test]
fn test_sidereal_at_j2000() {
    let lst = local_sidereal_degrees(0.0, J2000_INSTANT);
    assert!(f64::abs(lst - 280.461) < 1e-9);

    let lst = local_sidereal_degrees(100.0, J2000_INSTANT);
    assert!(f64::abs(lst - 20.461) < 1e-9);
}

#[test]
fn test_sidereal_keeps_sign() {
    // Unix epoch is far before J2000, the unreduced sum is negative
    let lst = local_sidereal_degrees(0.0, 0.0);
    assert!(lst < 0.0 && lst > -360.0);
}

#[test]
fn test_sidereal_periodicity() {
    let longitude = -2.50029;
    let mut instant = J2000_INSTANT + 6543.21 * MICROS_PER_DAY;
    for _ in 0..10 {
        let lst1 = local_sidereal_degrees(longitude, instant);
        let lst2 = local_sidereal_degrees(longitude, instant + MICROS_PER_DAY);
        let diff = (lst2 - lst1 - SIDEREAL_DEGREES_PER_DAY).rem_euclid(360.0);
        assert!(diff < 1e-6 || diff > 360.0 - 1e-6);
        instant += 0.37 * MICROS_PER_DAY;
    }
}

#[test]
fn test_sidereal_monotonic() {
    let step = MICROS_PER_DAY / 24.0;
    let expected_step = (SIDEREAL_DEGREES_PER_DAY / 24.0).rem_euclid(360.0);
    let mut instant = J2000_INSTANT + 7000.0 * MICROS_PER_DAY;
    let mut prev = local_sidereal_degrees(51.45, instant);
    for _ in 0..48 {
        instant += step;
        let cur = local_sidereal_degrees(51.45, instant);
        let advance = (cur - prev).rem_euclid(360.0);
        assert!(f64::abs(advance - expected_step) < 1e-6);
        prev = cur;
    }
}
