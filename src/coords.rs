use std::fmt::Debug;
use serde::{Serialize, Deserialize};
use crate::{
    error::{Error, Result},
    sexagesimal::*,
};

#[derive(Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct EqCoord {
    pub ra:  f64, // in hours
    pub dec: f64, // in degrees
}

impl EqCoord {
    /// Parses sexagesimal right ascension (hours) and declination (degrees)
    pub fn parse(ra: &str, dec: &str) -> Result<Self> {
        let ra = sexagesimal_to_value(ra)
            .filter(|v| (0.0..24.0).contains(v))
            .ok_or_else(|| Error::Parse(ra.to_string()))?;
        let dec = sexagesimal_to_value(dec)
            .filter(|v| (-90.0..=90.0).contains(v))
            .ok_or_else(|| Error::Parse(dec.to_string()))?;
        Ok(Self { ra, dec })
    }
}

impl Debug for EqCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EqCoord")
            .field("ra", &value_to_sexagesimal(self.ra, true, 8))
            .field("dec", &value_to_sexagesimal(self.dec, true, 6))
            .finish()
    }
}

#[test]
fn test_eq_coord_parse() {
    let crd = EqCoord::parse("05:35:17.3", "-05:23:28").unwrap();
    assert!(f64::abs(crd.ra - (5.0 + 35.0 / 60.0 + 17.3 / 3600.0)) < 1e-12);
    assert!(f64::abs(crd.dec + (5.0 + 23.0 / 60.0 + 28.0 / 3600.0)) < 1e-12);
    assert_eq!(
        format!("{:?}", crd),
        "EqCoord { ra: \"05:35:17.3\", dec: \"-05:23:28\" }"
    );

    assert_eq!(EqCoord::parse("25:00", "10:00"), Err(Error::Parse("25:00".to_string())));
    assert_eq!(EqCoord::parse("12:00", "91:00"), Err(Error::Parse("91:00".to_string())));
    assert!(EqCoord::parse("noon", "10:00").is_err());
}

#[derive(Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct HorizCoord {
    pub az:  f64, // in degrees, from north through east
    pub alt: f64, // in degrees
}

impl Debug for HorizCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HorizCoord")
            .field("az", &value_to_sexagesimal(self.az, true, 8))
            .field("alt", &value_to_sexagesimal(self.alt, true, 8))
            .finish()
    }
}

#[test]
fn test_horiz_coord_debug() {
    let crd = HorizCoord { az: 181.5, alt: -12.25 };
    assert_eq!(
        format!("{:?}", crd),
        "HorizCoord { az: \"181:30:00.0\", alt: \"-12:15:00.0\" }"
    );
}
