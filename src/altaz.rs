use std::f64::consts::PI;
use serde::{Serialize, Deserialize};
use crate::{
    error::{Error, Result},
    math::*,
    sidereal::local_sidereal_degrees,
};

#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct ConvertOptions {
    pub domain: DomainPolicy,
    pub wrap:   AngleWrap,
}

impl ConvertOptions {
    pub fn strict() -> Self {
        Self { domain: DomainPolicy::Strict, ..Self::default() }
    }
}

/// Equatorial -> horizontal with default (permissive, single wrap) options.
/// Returns `(azimuth, altitude)` in degrees.
pub fn compute_alt_azimuth(
    instant:      f64,
    longitude:    f64,
    latitude:     f64,
    ra_hours:     f64,
    dec_degrees:  f64,
) -> (f64, f64) {
    compute_alt_azimuth_with(
        &ConvertOptions::default(),
        instant, longitude, latitude, ra_hours, dec_degrees
    ).unwrap_or((f64::NAN, f64::NAN))
}

/// Horizontal -> equatorial with default (permissive, single wrap) options.
/// Returns `(right ascension hours, declination degrees)`.
pub fn compute_ra_dec(
    instant:     f64,
    longitude:   f64,
    latitude:    f64,
    az_degrees:  f64,
    alt_degrees: f64,
) -> (f64, f64) {
    compute_ra_dec_with(
        &ConvertOptions::default(),
        instant, longitude, latitude, az_degrees, alt_degrees
    ).unwrap_or((f64::NAN, f64::NAN))
}

pub fn compute_alt_azimuth_with(
    options:     &ConvertOptions,
    instant:     f64,
    longitude:   f64,
    latitude:    f64,
    ra_hours:    f64,
    dec_degrees: f64,
) -> Result<(f64, f64)> {
    let domain = options.domain;
    let lst = local_sidereal_degrees(longitude, instant);
    let ra = hour_to_degree(ra_hours);
    let hour_angle = degree_to_radian(options.wrap.apply(lst - ra));
    let dec = degree_to_radian(dec_degrees);
    let lat = degree_to_radian(latitude);

    if domain.is_degenerate(f64::cos(lat)) {
        log::warn!("Observer latitude {} is at a pole", latitude);
        return Err(Error::DegenerateGeometry("observer at a geographic pole"));
    }

    let alt = domain.asin(
        f64::sin(dec) * f64::sin(lat) +
        f64::cos(dec) * f64::cos(lat) * f64::cos(hour_angle)
    )?;

    let denominator = f64::cos(alt) * f64::cos(lat);
    let az = if domain.is_degenerate(denominator) {
        log::debug!("Object at zenith or nadir, azimuth taken as 0");
        0.0
    } else {
        let az = radian_to_degree(domain.acos_derived(
            (f64::sin(dec) - f64::sin(alt) * f64::sin(lat)) / denominator
        )?);
        // acos can't tell east from west, sign of the hour angle can
        if f64::sin(hour_angle) > 0.0 {
            360.0 - az
        } else {
            az
        }
    };

    Ok((az, radian_to_degree(alt)))
}

pub fn compute_ra_dec_with(
    options:     &ConvertOptions,
    instant:     f64,
    longitude:   f64,
    latitude:    f64,
    az_degrees:  f64,
    alt_degrees: f64,
) -> Result<(f64, f64)> {
    let domain = options.domain;
    let lst = local_sidereal_degrees(longitude, instant);
    let lat = degree_to_radian(latitude);
    let alt = degree_to_radian(alt_degrees);
    let az = degree_to_radian(az_degrees);

    if domain.is_degenerate(f64::cos(lat)) {
        log::warn!("Observer latitude {} is at a pole", latitude);
        return Err(Error::DegenerateGeometry("observer at a geographic pole"));
    }

    let dec = domain.asin(
        f64::sin(lat) * f64::sin(alt) +
        f64::cos(lat) * f64::cos(alt) * f64::cos(az)
    )?;

    let hour_angle = if domain.is_degenerate(f64::cos(dec)) {
        log::debug!("Object at a celestial pole, hour angle taken as 0");
        0.0
    } else {
        // Cosine rule is mirrored about 180 degrees, sine rule about 90 and
        // 270 degrees. Magnitude comes from the first, sign from the second.
        let by_cos = domain.acos_derived(
            (f64::sin(alt) - f64::sin(dec) * f64::sin(lat)) /
            (f64::cos(dec) * f64::cos(lat))
        )?;
        let by_sin = domain.asin_derived(
            (-f64::sin(az) * f64::cos(alt)) / f64::cos(dec)
        )?;
        if by_sin < 0.0 {
            2.0 * PI - by_cos
        } else {
            by_cos
        }
    };

    let ra = options.wrap.apply(lst - radian_to_degree(hour_angle));
    Ok((degree_to_hour(ra), radian_to_degree(dec)))
}

#[cfg(test)]
const TEST_LONGITUDE: f64 = -2.50029;

#[cfg(test)]
const TEST_LATITUDE: f64 = 51.45528;

// 2018-06-01T22:30:00Z
#[cfg(test)]
const TEST_INSTANT: f64 = 1_527_892_200.0 * 1_000_000.0;

#[test]
fn test_round_trip() {
    let options = ConvertOptions::strict();
    for &latitude in &[TEST_LATITUDE, -33.87, 5.0] {
        for alt_step in 0..17 {
            let alt = -80.0 + 10.0 * alt_step as f64;
            for az_step in 0..18 {
                let az = 10.0 + 20.0 * az_step as f64;
                let (ra, dec) = compute_ra_dec_with(
                    &options, TEST_INSTANT, TEST_LONGITUDE, latitude, az, alt
                ).unwrap();
                let (az2, alt2) = compute_alt_azimuth_with(
                    &options, TEST_INSTANT, TEST_LONGITUDE, latitude, ra, dec
                ).unwrap();
                assert!(
                    f64::abs(az - az2) < 1e-5 && f64::abs(alt - alt2) < 1e-5,
                    "lat={} az={} alt={} -> az={} alt={}", latitude, az, alt, az2, alt2
                );
            }
        }
    }
}

#[test]
fn test_round_trip_permissive() {
    let (ra, dec) = compute_ra_dec(
        TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, 123.4, 37.8
    );
    assert!((0.0..24.0).contains(&ra));
    assert!((-90.0..=90.0).contains(&dec));
    let (az, alt) = compute_alt_azimuth(
        TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, ra, dec
    );
    assert!(f64::abs(az - 123.4) < 1e-6);
    assert!(f64::abs(alt - 37.8) < 1e-6);
}

#[test]
fn test_zenith() {
    let lst = local_sidereal_degrees(TEST_LONGITUDE, TEST_INSTANT);
    assert!(lst > 0.0);
    let ra = degree_to_hour(lst);
    let (az, alt) = compute_alt_azimuth_with(
        &ConvertOptions::strict(),
        TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, ra, TEST_LATITUDE
    ).unwrap();
    assert!(f64::abs(alt - 90.0) < 1e-5);
    assert!(az.is_finite());
}

#[test]
fn test_meridian_mirror() {
    let lst = local_sidereal_degrees(TEST_LONGITUDE, TEST_INSTANT);
    for &h in &[15.0, 40.0, 95.0, 150.0] {
        let ra_west = degree_to_hour((lst - h).rem_euclid(360.0));
        let ra_east = degree_to_hour((lst + h).rem_euclid(360.0));
        let (az_w, alt_w) = compute_alt_azimuth(
            TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, ra_west, 20.0
        );
        let (az_e, alt_e) = compute_alt_azimuth(
            TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, ra_east, 20.0
        );
        assert!(f64::abs(alt_w - alt_e) < 1e-9);
        assert!(f64::abs(az_w + az_e - 360.0) < 1e-9);
        // object west of the meridian has azimuth past south
        assert!(az_w > 180.0 && az_e < 180.0);
    }
}

#[test]
fn test_known_position() {
    // Object on the meridian culminates due south at altitude 90 - lat + dec
    let lst = local_sidereal_degrees(TEST_LONGITUDE, TEST_INSTANT);
    let (az, alt) = compute_alt_azimuth_with(
        &ConvertOptions::strict(),
        TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, degree_to_hour(lst), 10.0
    ).unwrap();
    assert!(f64::abs(alt - (90.0 - TEST_LATITUDE + 10.0)) < 1e-5);
    assert!(f64::abs(az - 180.0) < 1e-3);
}

#[test]
fn test_pole_observer() {
    // At a geographic pole the azimuth follows the hour angle
    let lst = local_sidereal_degrees(0.0, TEST_INSTANT);
    let ra = degree_to_hour((lst - 60.0).rem_euclid(360.0));
    let (az, alt) = compute_alt_azimuth(TEST_INSTANT, 0.0, 90.0, ra, 0.0);
    assert!(f64::abs(az - 240.0) < 1e-6);
    assert!(f64::abs(alt) < 1e-9);

    let (ra, dec) = compute_ra_dec(TEST_INSTANT, 0.0, -90.0, 100.0, 0.0);
    let expected_ra = degree_to_hour(AngleWrap::Once.apply(lst - 260.0));
    assert!(f64::abs(ra - expected_ra) < 1e-6);
    assert!(f64::abs(dec) < 1e-9);

    let options = ConvertOptions::strict();
    assert!(matches!(
        compute_alt_azimuth_with(&options, TEST_INSTANT, 0.0, 90.0, 3.0, 45.0),
        Err(Error::DegenerateGeometry(_))
    ));
    assert!(matches!(
        compute_ra_dec_with(&options, TEST_INSTANT, 0.0, -90.0, 100.0, 30.0),
        Err(Error::DegenerateGeometry(_))
    ));
}

#[test]
fn test_near_celestial_pole_strict() {
    let options = ConvertOptions::strict();
    let lst = local_sidereal_degrees(TEST_LONGITUDE, TEST_INSTANT);
    for &offset in &[2e-5, 5e-5, 1e-4, 2e-4] {
        let dec = 90.0 - offset;
        for step in 0..400 {
            let hour_angle = 0.9 * step as f64;
            let ra = degree_to_hour((lst - hour_angle).rem_euclid(360.0));
            let (az, alt) = compute_alt_azimuth_with(
                &options, TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, ra, dec
            ).unwrap();
            let (_, dec2) = compute_ra_dec_with(
                &options, TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, az, alt
            ).unwrap_or_else(|e| panic!("dec={} ha={}: {}", dec, hour_angle, e));
            assert!(f64::abs(dec2 - dec) < 2e-6, "dec={} ha={} -> {}", dec, hour_angle, dec2);
        }
    }
}

#[test]
fn test_degenerate_threshold() {
    // Looking north just below the pole: cos(dec) equals sin(offset).
    // Below DEGENERATE_EPSILON the hour angle is taken as 0, above it the
    // object is found at lower culmination (hour angle 180).
    let options = ConvertOptions::strict();
    let lst = local_sidereal_degrees(TEST_LONGITUDE, TEST_INSTANT);

    let below = 1e-6; // sin = 1.7e-8
    assert!(f64::sin(degree_to_radian(below)) < DEGENERATE_EPSILON);
    let (ra, dec) = compute_ra_dec_with(
        &options, TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE,
        0.0, TEST_LATITUDE - below
    ).unwrap();
    assert!(f64::abs(ra - degree_to_hour(lst)) < 1e-9);
    assert!(f64::abs(dec - 90.0) < 1e-5);

    // hour angle is poorly conditioned this close to the pole
    let above = 1e-4; // sin = 1.7e-6
    assert!(f64::sin(degree_to_radian(above)) > DEGENERATE_EPSILON);
    let (ra, dec) = compute_ra_dec_with(
        &options, TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE,
        0.0, TEST_LATITUDE - above
    ).unwrap();
    assert!(f64::abs(ra - degree_to_hour((lst - 180.0).rem_euclid(360.0))) < 0.1);
    assert!(f64::abs(dec - (90.0 - above)) < 1e-6);
}

#[test]
fn test_celestial_pole() {
    // Looking north at altitude equal to latitude hits the celestial pole
    let (ra, dec) = compute_ra_dec_with(
        &ConvertOptions::strict(),
        TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, 0.0, TEST_LATITUDE
    ).unwrap();
    assert!(f64::abs(dec - 90.0) < 1e-5);
    let lst = local_sidereal_degrees(TEST_LONGITUDE, TEST_INSTANT);
    assert!(f64::abs(ra - degree_to_hour(lst)) < 1e-9);
}

#[test]
fn test_strict_domain_error() {
    let result = compute_alt_azimuth_with(
        &ConvertOptions::strict(),
        TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, f64::NAN, 10.0
    );
    assert!(matches!(result, Err(Error::Domain { function: "asin", .. })));

    let result = compute_ra_dec_with(
        &ConvertOptions::strict(),
        TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, f64::INFINITY, 10.0
    );
    assert!(matches!(result, Err(Error::Domain { .. })));

    let (az, alt) = compute_alt_azimuth(
        TEST_INSTANT, TEST_LONGITUDE, TEST_LATITUDE, f64::NAN, 10.0
    );
    assert!(az.is_nan() && alt.is_nan());
}

#[test]
fn test_wrap_policies() {
    let longitude = 1000.0;
    let full = ConvertOptions { wrap: AngleWrap::Full, ..ConvertOptions::default() };

    let (ra, _) = compute_ra_dec_with(
        &full, TEST_INSTANT, longitude, TEST_LATITUDE, 200.0, 30.0
    ).unwrap();
    assert!((0.0..24.0).contains(&ra));

    let (ra_ref, _) = compute_ra_dec(
        TEST_INSTANT, longitude - 720.0, TEST_LATITUDE, 200.0, 30.0
    );
    assert!(f64::abs(ra - ra_ref) < 1e-6);

    // before J2000 with a single correction RA can stay negative
    let (ra_once, _) = compute_ra_dec(0.0, -170.0, TEST_LATITUDE, 10.0, 30.0);
    let (ra_full, _) = compute_ra_dec_with(
        &full, 0.0, -170.0, TEST_LATITUDE, 10.0, 30.0
    ).unwrap();
    assert!((0.0..24.0).contains(&ra_full));
    assert!(f64::abs((ra_once - ra_full).rem_euclid(24.0)) < 1e-9
        || f64::abs((ra_once - ra_full).rem_euclid(24.0) - 24.0) < 1e-9);
}
