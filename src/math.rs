use std::f64::consts::PI;
use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};

/// How far outside of [-1, 1] an inverse trig argument may drift from
/// rounding before strict mode treats it as a real domain violation
pub const DOMAIN_TOLERANCE: f64 = 1e-9;

/// Denominators smaller than this are treated as zero in strict mode.
/// asin of the last f64 below 1.0 lands ~2e-8 rad short of 90 degrees.
pub const DEGENERATE_EPSILON: f64 = 1e-7;

#[inline(always)]
pub fn radian_to_degree(radian: f64) -> f64 {
    180.0 * radian / PI
}

#[inline(always)]
pub fn degree_to_radian(degree: f64) -> f64 {
    PI * degree / 180.0
}

#[inline(always)]
pub fn hour_to_degree(hour: f64) -> f64 {
    15.0 * hour
}

#[inline(always)]
pub fn degree_to_hour(degree: f64) -> f64 {
    degree / 15.0
}

#[test]
fn test_angle_units() {
    assert!(f64::abs(degree_to_radian(180.0) - PI) < 1e-15);
    assert!(f64::abs(radian_to_degree(PI / 2.0) - 90.0) < 1e-12);
    assert_eq!(hour_to_degree(24.0), 360.0);
    assert_eq!(degree_to_hour(hour_to_degree(7.5)), 7.5);
}

/// What to do when an inverse trig argument leaves [-1, 1]
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub enum DomainPolicy {
    /// Pass the argument through, NaN comes out
    #[default]
    Permissive,

    /// Clamp rounding noise, fail on real violations
    Strict,
}

/// How hour angle and right ascension are brought into [0, 360)
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq)]
pub enum AngleWrap {
    /// Add 360 once if negative
    #[default]
    Once,

    /// Full euclidean modulo
    Full,
}

impl AngleWrap {
    pub fn apply(self, degrees: f64) -> f64 {
        match self {
            Self::Once =>
                if degrees < 0.0 { degrees + 360.0 } else { degrees },
            Self::Full =>
                degrees.rem_euclid(360.0),
        }
    }
}

#[test]
fn test_angle_wrap() {
    assert_eq!(AngleWrap::Once.apply(-10.0), 350.0);
    assert_eq!(AngleWrap::Once.apply(10.0), 10.0);
    assert_eq!(AngleWrap::Once.apply(-370.0), -10.0);
    assert_eq!(AngleWrap::Once.apply(370.0), 370.0);
    assert_eq!(AngleWrap::Full.apply(-370.0), 350.0);
    assert_eq!(AngleWrap::Full.apply(370.0), 10.0);
}

impl DomainPolicy {
    fn check_arg(self, function: &'static str, arg: f64) -> Result<f64> {
        match self {
            Self::Permissive =>
                Ok(arg),
            Self::Strict if arg.is_nan() || arg.abs() > 1.0 + DOMAIN_TOLERANCE => {
                log::warn!("{} argument {} is out of domain", function, arg);
                Err(Error::Domain { function, argument: arg })
            }
            Self::Strict => {
                let clamped = arg.clamp(-1.0, 1.0);
                if clamped != arg {
                    log::debug!("{} argument {} clamped to {}", function, arg, clamped);
                }
                Ok(clamped)
            }
        }
    }

    pub fn asin(self, arg: f64) -> Result<f64> {
        Ok(f64::asin(self.check_arg("asin", arg)?))
    }

    pub fn acos(self, arg: f64) -> Result<f64> {
        Ok(f64::acos(self.check_arg("acos", arg)?))
    }

    fn check_derived_arg(self, function: &'static str, arg: f64) -> Result<f64> {
        match self {
            Self::Permissive =>
                Ok(arg),
            Self::Strict if arg.is_nan() => {
                log::warn!("{} argument is NaN", function);
                Err(Error::Domain { function, argument: arg })
            }
            Self::Strict => {
                let clamped = arg.clamp(-1.0, 1.0);
                if clamped != arg {
                    log::debug!("{} argument {} clamped to {}", function, arg, clamped);
                }
                Ok(clamped)
            }
        }
    }

    /// asin of a quotient built from an angle that already went through
    /// `asin`/`acos`. The quotient is in [-1, 1] for any real geometry, but
    /// near a pole its denominator amplifies rounding far past
    /// `DOMAIN_TOLERANCE`, so strict mode only rejects NaN here.
    pub fn asin_derived(self, arg: f64) -> Result<f64> {
        Ok(f64::asin(self.check_derived_arg("asin", arg)?))
    }

    pub fn acos_derived(self, arg: f64) -> Result<f64> {
        Ok(f64::acos(self.check_derived_arg("acos", arg)?))
    }

    /// `true` when strict mode has to handle `denominator` as zero
    pub fn is_degenerate(self, denominator: f64) -> bool {
        self == Self::Strict && denominator.abs() < DEGENERATE_EPSILON
    }
}

#[test]
fn test_domain_policy() {
    let p = DomainPolicy::Permissive;
    assert!(p.asin(1.0 + 1e-15).unwrap().is_nan());
    assert!(p.acos(-2.0).unwrap().is_nan());
    assert!(!p.is_degenerate(0.0));

    let s = DomainPolicy::Strict;
    assert_eq!(s.asin(1.0 + 1e-15).unwrap(), PI / 2.0);
    assert_eq!(s.acos(-1.0 - 1e-12).unwrap(), PI);
    assert_eq!(s.acos(0.5).unwrap(), f64::acos(0.5));
    assert!(matches!(
        s.asin(1.1),
        Err(Error::Domain { function: "asin", .. })
    ));
    assert!(s.acos(f64::NAN).is_err());
    assert_eq!(s.acos_derived(1.0002).unwrap(), 0.0);
    assert_eq!(s.asin_derived(-3.0).unwrap(), -PI / 2.0);
    assert!(s.acos_derived(f64::NAN).is_err());
    assert!(p.acos_derived(1.0002).unwrap().is_nan());
    assert!(s.is_degenerate(1e-17));
    assert!(s.is_degenerate(-2e-8));
    assert!(!s.is_degenerate(1e-6));
}
