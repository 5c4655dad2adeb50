use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub const MICROS_PER_SECOND: f64 = 1_000_000.0;
pub const MICROS_PER_DAY: f64 = MICROS_PER_SECOND * 86400.0;

/// 2000-01-01T12:00:00 UTC in microseconds since the Unix epoch
pub const J2000_INSTANT: f64 = 946_728_000.0 * MICROS_PER_SECOND;

const UNIX_EPOCH_JULIAN_DATE: f64 = 2_440_587.5;

/// Current time in microseconds since the Unix epoch
pub fn now() -> f64 {
    instant_from_datetime(&Utc::now())
}

pub fn instant_from_datetime(dt: &DateTime<Utc>) -> f64 {
    dt.timestamp() as f64 * MICROS_PER_SECOND
    + dt.timestamp_subsec_nanos() as f64 / 1000.0
}

pub fn datetime_from_instant(instant: f64) -> Option<DateTime<Utc>> {
    if !instant.is_finite() {
        return None;
    }
    let secs = (instant / MICROS_PER_SECOND).floor();
    let nanos = ((instant - secs * MICROS_PER_SECOND) * 1000.0).round();
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return None;
    }
    // rounding can push the fraction to a full second
    let (secs, nanos) = if nanos >= 1e9 { (secs + 1.0, 0.0) } else { (secs, nanos) };
    Utc.timestamp_opt(secs as i64, nanos as u32).single()
}

pub fn j2000_time() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

pub fn julian_date(instant: f64) -> f64 {
    instant / MICROS_PER_DAY + UNIX_EPOCH_JULIAN_DATE
}

#[test]
fn test_now() {
    let before = Utc::now().timestamp() as f64 * MICROS_PER_SECOND;
    let now = now();
    let after = (Utc::now().timestamp() + 1) as f64 * MICROS_PER_SECOND;
    assert!(now >= before && now <= after);
}

#[test]
fn test_j2000() {
    assert_eq!(instant_from_datetime(&j2000_time()), J2000_INSTANT);
    assert_eq!(datetime_from_instant(J2000_INSTANT), Some(j2000_time()));
    assert!(f64::abs(julian_date(J2000_INSTANT) - 2_451_545.0) < 1e-9);
}

#[test]
fn test_datetime_from_instant() {
    let dt = datetime_from_instant(1_500_000_000_250_000.5).unwrap();
    assert_eq!(dt.timestamp(), 1_500_000_000);
    assert_eq!(dt.timestamp_subsec_nanos(), 250_000_500);

    let dt = datetime_from_instant(-1_500_000.0).unwrap();
    assert_eq!(dt.timestamp(), -2);
    assert_eq!(dt.timestamp_subsec_nanos(), 500_000_000);

    assert!(datetime_from_instant(f64::NAN).is_none());
    assert!(datetime_from_instant(f64::INFINITY).is_none());
    assert!(datetime_from_instant(1e300).is_none());
}
