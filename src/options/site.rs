use serde::{Serialize, Deserialize};
use crate::{
    altaz::*,
    coords::*,
    error::Result,
    sidereal,
};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct SiteOptions {
    pub latitude:  f64, // in degrees
    pub longitude: f64, // in degrees, east positive
}

impl SiteOptions {
    pub fn local_sidereal_degrees(&self, instant: f64) -> f64 {
        sidereal::local_sidereal_degrees(self.longitude, instant)
    }

    pub fn eq_to_horiz(
        &self,
        crd:     &EqCoord,
        instant: f64,
        options: &ConvertOptions,
    ) -> Result<HorizCoord> {
        let (az, alt) = compute_alt_azimuth_with(
            options, instant, self.longitude, self.latitude, crd.ra, crd.dec
        )?;
        Ok(HorizCoord { az, alt })
    }

    pub fn horiz_to_eq(
        &self,
        crd:     &HorizCoord,
        instant: f64,
        options: &ConvertOptions,
    ) -> Result<EqCoord> {
        let (ra, dec) = compute_ra_dec_with(
            options, instant, self.longitude, self.latitude, crd.az, crd.alt
        )?;
        Ok(EqCoord { ra, dec })
    }
}

#[test]
fn test_site_conversions() {
    use crate::clock::J2000_INSTANT;

    let site = SiteOptions { latitude: 51.45528, longitude: -2.50029 };
    let options = ConvertOptions::default();
    let instant = J2000_INSTANT + 123_456_789_000_000.0;
    let betelgeuse = EqCoord::parse("05:55:10.3", "+07:24:25").unwrap();

    let horiz = site.eq_to_horiz(&betelgeuse, instant, &options).unwrap();
    let (az, alt) = compute_alt_azimuth(
        instant, site.longitude, site.latitude, betelgeuse.ra, betelgeuse.dec
    );
    assert_eq!(horiz, HorizCoord { az, alt });

    let eq = site.horiz_to_eq(&horiz, instant, &options).unwrap();
    assert!(f64::abs(eq.ra - betelgeuse.ra) < 1e-6);
    assert!(f64::abs(eq.dec - betelgeuse.dec) < 1e-6);

    assert_eq!(
        site.local_sidereal_degrees(instant),
        sidereal::local_sidereal_degrees(site.longitude, instant)
    );
}

#[test]
fn test_site_at_pole() {
    let site = SiteOptions { latitude: -90.0, longitude: 0.0 };
    let horiz = HorizCoord { az: 10.0, alt: 20.0 };
    assert!(site.horiz_to_eq(&horiz, 0.0, &ConvertOptions::strict()).is_err());
    let eq = site.horiz_to_eq(&horiz, 0.0, &ConvertOptions::default()).unwrap();
    assert!(f64::abs(eq.dec + 20.0) < 1e-6);
}
