// crates/gazetteer-core/src/config.rs

//! TOML configuration.
//!
//! ```toml
//! [home]
//! lat = 47.37
//! lon = 8.54
//!
//! [data]
//! dir = "data"
//! countries = "countryInfo.txt"
//! cities = "cities1000.txt"
//! alternate_names = false
//!
//! [responses]
//! where_city = "{location} is in {country}."
//! ```
//!
//! Every section is optional. A missing `[home]` leaves the reference at
//! (0, 0), which is accepted but logged as a warning since every city
//! score depends on it.

use crate::error::{GazetteerError, Result};
use crate::handlers::Responses;
use crate::model::ReferenceLocation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The user's home; all relevance is measured from here.
    pub home: ReferenceLocation,
    pub data: DataConfig,
    pub responses: Responses,
}

/// Where the GeoNames dumps live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub countries: String,
    pub cities: String,
    /// Also index admitted cities under their alternate names.
    pub alternate_names: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            dir: PathBuf::from("data"),
            countries: "countryInfo.txt".into(),
            cities: "cities1000.txt".into(),
            alternate_names: false,
        }
    }
}

impl DataConfig {
    pub fn countries_path(&self) -> PathBuf {
        self.dir.join(&self.countries)
    }

    pub fn cities_path(&self) -> PathBuf {
        self.dir.join(&self.cities)
    }
}

impl Config {
    /// Reads and validates a config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file without validating it, for callers that apply
    /// overrides first and call [`Config::validate`] themselves.
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|source| GazetteerError::FileUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(toml::from_str(&text)?)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let ReferenceLocation { lat, lon } = self.home;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(GazetteerError::Config(format!(
                "home.lat {lat} is outside -90..=90"
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(GazetteerError::Config(format!(
                "home.lon {lon} is outside -180..=180"
            )));
        }
        if lat == 0.0 && lon == 0.0 {
            log::warn!(
                "home location is not set; configure [home] lat/lon for useful location lookups"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_sections() {
        let config = Config::from_toml_str("[home]\nlat = 47.37\nlon = 8.54\n").unwrap();
        assert_eq!(config.home, ReferenceLocation::new(47.37, 8.54));
        assert_eq!(config.data.countries_path(), Path::new("data/countryInfo.txt"));
        assert_eq!(config.data.cities_path(), Path::new("data/cities1000.txt"));
        assert!(!config.data.alternate_names);
        assert_eq!(config.responses, Responses::default());
    }

    #[test]
    fn reads_data_and_response_overrides() {
        let config = Config::from_toml_str(
            r#"
            [data]
            dir = "/srv/geonames"
            cities = "cities15000.txt.gz"
            alternate_names = true

            [responses]
            where_city = "{location} liegt in {country}."
            "#,
        )
        .unwrap();
        assert_eq!(
            config.data.cities_path(),
            Path::new("/srv/geonames/cities15000.txt.gz")
        );
        assert!(config.data.alternate_names);
        assert_eq!(config.responses.where_city, "{location} liegt in {country}.");
        assert_eq!(config.responses.population, Responses::default().population);
    }

    #[test]
    fn rejects_out_of_range_home() {
        let err = Config::from_toml_str("[home]\nlat = 91.0\nlon = 0.0\n").unwrap_err();
        assert!(matches!(err, GazetteerError::Config(_)));
        assert!(Config::from_toml_str("[home]\nlat = 0.0\nlon = 181.0\n").is_err());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Config::from_toml_str("[home\nlat = 1").unwrap_err();
        assert!(matches!(err, GazetteerError::ConfigParse(_)));
    }

    #[test]
    fn read_defers_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gazetteer.toml");
        std::fs::write(&path, "[home]\nlat = 95.0\nlon = 8.0\n").unwrap();

        let mut config = Config::read(&path).unwrap();
        assert!(config.validate().is_err());
        assert!(Config::from_path(&path).is_err());
        config.home.lat = 47.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_is_unreadable() {
        assert!(matches!(
            Config::from_path("/nope/gazetteer.toml"),
            Err(GazetteerError::FileUnreadable { .. })
        ));
    }
}
