//! Conversion between horizontal (azimuth, altitude) and equatorial
//! (right ascension, declination) coordinates for a telescope on an
//! alt-azimuth mount.
//!
//! Instants are microseconds since the Unix epoch as `f64`, angles are
//! degrees except right ascension which is in hours.

pub mod error;
pub mod math;
pub mod clock;
pub mod sidereal;
pub mod altaz;
pub mod sexagesimal;
pub mod coords;
pub mod options;
pub mod io_utils;

pub use error::{Error, Result};
pub use math::{AngleWrap, DomainPolicy};
pub use clock::now;
pub use sidereal::local_sidereal_degrees;
pub use altaz::*;
pub use coords::{EqCoord, HorizCoord};
pub use options::{Options, SiteOptions};
