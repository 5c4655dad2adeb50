pub mod site;
pub use site::*;

use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::{altaz::ConvertOptions, io_utils::*};

const OPTIONS_CONF_NAME: &str = "options";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Options {
    pub site:    SiteOptions,
    pub convert: ConvertOptions,
}

impl Options {
    pub fn check(&self) -> anyhow::Result<()> {
        let lat = self.site.latitude;
        if !(-90.0..=90.0).contains(&lat) {
            anyhow::bail!("Site latitude {} is out of [-90, 90]", lat);
        }
        if !self.site.longitude.is_finite() {
            anyhow::bail!("Site longitude {} is not a number", self.site.longitude);
        }
        Ok(())
    }

    /// Loads options from the application config directory.
    /// Missing file gives default options.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&get_app_conf_file_name(OPTIONS_CONF_NAME)?)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&get_app_conf_file_name(OPTIONS_CONF_NAME)?)
    }

    pub fn load_from(file_name: &Path) -> anyhow::Result<Self> {
        let mut result = Self::default();
        load_json_from_file(&mut result, file_name)?;
        result.check()?;
        log::info!("Options loaded from {}", file_name.display());
        Ok(result)
    }

    pub fn save_to(&self, file_name: &Path) -> anyhow::Result<()> {
        self.check()?;
        save_json_to_file(self, file_name)?;
        log::info!("Options saved to {}", file_name.display());
        Ok(())
    }
}

#[test]
fn test_options_file() {
    use crate::math::{AngleWrap, DomainPolicy};

    let dir = std::env::temp_dir().join(format!("pikon_altaz_test_{}", std::process::id()));
    let file_name = dir.join("options.json");

    let options = Options {
        site: SiteOptions { latitude: 51.45528, longitude: -2.50029 },
        convert: ConvertOptions { domain: DomainPolicy::Strict, wrap: AngleWrap::Full },
    };
    options.save_to(&file_name).unwrap();
    let loaded = Options::load_from(&file_name).unwrap();
    assert_eq!(loaded, options);

    _ = std::fs::remove_dir_all(&dir);
    assert_eq!(Options::load_from(&file_name).unwrap(), Options::default());
}

#[test]
fn test_options_partial_json() {
    let options: Options = serde_json::from_str(
        r#"{ "site": { "latitude": 40.0 } }"#
    ).unwrap();
    assert_eq!(options.site.latitude, 40.0);
    assert_eq!(options.site.longitude, 0.0);
    assert_eq!(options.convert, ConvertOptions::default());
}

#[test]
fn test_options_check() {
    let mut options = Options::default();
    assert!(options.check().is_ok());
    options.site.latitude = 91.0;
    assert!(options.check().is_err());
    options.site.latitude = 0.0;
    options.site.longitude = f64::NAN;
    assert!(options.check().is_err());
}
