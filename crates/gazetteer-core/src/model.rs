// crates/gazetteer-core/src/model.rs

//! Domain records built from the GeoNames dumps.
//!
//! Records are constructed once while loading and never mutated. The
//! [`KnowledgeBase`](crate::KnowledgeBase) owns them; everything else
//! borrows through [`Location`].

use crate::score::{self, COUNTRY_SCORE};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed coordinate all city relevance is measured against
/// (the user's home).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReferenceLocation {
    pub lat: f64,
    pub lon: f64,
}

impl ReferenceLocation {
    pub const fn new(lat: f64, lon: f64) -> Self {
        ReferenceLocation { lat, lon }
    }
}

/// GeoNames continent codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    #[serde(rename = "AF")]
    Africa,
    #[serde(rename = "AN")]
    Antarctica,
    #[serde(rename = "AS")]
    Asia,
    #[serde(rename = "EU")]
    Europe,
    #[serde(rename = "NA")]
    NorthAmerica,
    #[serde(rename = "OC")]
    Oceania,
    #[serde(rename = "SA")]
    SouthAmerica,
}

impl Continent {
    pub fn code(self) -> &'static str {
        match self {
            Continent::Africa => "AF",
            Continent::Antarctica => "AN",
            Continent::Asia => "AS",
            Continent::Europe => "EU",
            Continent::NorthAmerica => "NA",
            Continent::Oceania => "OC",
            Continent::SouthAmerica => "SA",
        }
    }

    /// English display name, e.g. "North America".
    pub fn name(self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Antarctica => "Antarctica",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl FromStr for Continent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "AF" => Ok(Continent::Africa),
            "AN" => Ok(Continent::Antarctica),
            "AS" => Ok(Continent::Asia),
            "EU" => Ok(Continent::Europe),
            "NA" => Ok(Continent::NorthAmerica),
            "OC" => Ok(Continent::Oceania),
            "SA" => Ok(Continent::SouthAmerica),
            other => Err(format!("unknown continent code {other:?}")),
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A country from `countryInfo.txt`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166 alpha-2 code, the unique key.
    pub iso_code: String,
    pub iso3: Option<String>,
    pub name: String,
    pub capital: Option<String>,
    pub area_km2: Option<f64>,
    pub population: u64,
    pub continent: Continent,
    pub currency_code: Option<String>,
    /// International dialling prefix without `+`, e.g. 41.
    pub phone_prefix: Option<u32>,
    /// Two-letter code of the first listed language, may be empty.
    pub primary_language: String,
    /// ISO-2 codes of bordering countries, in file order.
    pub neighbors: Vec<String>,
}

impl Country {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }
}

/// A populated place from `cities1000.txt`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// GeoNames id.
    pub id: u64,
    pub name: String,
    pub ascii_name: String,
    pub alternate_names: Vec<String>,
    pub lat: f64,
    pub lon: f64,
    pub population: u64,
    /// ISO-2 code of the owning country; resolved lazily and may dangle.
    pub country_code: Option<String>,
    pub timezone: String,
    pub mod_date: Option<NaiveDate>,
    /// Not present in the GeoNames dump; a record may carry its own language,
    /// which then takes precedence over the country's.
    pub language: Option<String>,
}

impl City {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self, reference: &ReferenceLocation) -> f64 {
        score::score(self.lat, self.lon, self.population, reference)
    }
}

/// Arena key of a record inside the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKey {
    Country(usize),
    City(usize),
}

/// A resolved place: either a country or a city, borrowed from the
/// knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Location<'a> {
    Country(&'a Country),
    City(&'a City),
}

impl<'a> Location<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Location::Country(c) => &c.name,
            Location::City(c) => &c.name,
        }
    }

    /// `(lat, lon)`; countries carry no coordinates.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match self {
            Location::Country(_) => None,
            Location::City(c) => Some((c.lat, c.lon)),
        }
    }

    pub fn population(&self) -> u64 {
        match self {
            Location::Country(c) => c.population,
            Location::City(c) => c.population,
        }
    }

    /// Relevance score, lower is better. Countries always score
    /// [`COUNTRY_SCORE`].
    pub fn score(&self, reference: &ReferenceLocation) -> f64 {
        match self {
            Location::Country(_) => COUNTRY_SCORE,
            Location::City(c) => c.score(reference),
        }
    }

    pub fn as_country(&self) -> Option<&'a Country> {
        match self {
            Location::Country(c) => Some(c),
            Location::City(_) => None,
        }
    }

    pub fn as_city(&self) -> Option<&'a City> {
        match self {
            Location::City(c) => Some(c),
            Location::Country(_) => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn country(iso: &str, name: &str, neighbors: &[&str], lang: &str) -> Country {
        Country {
            iso_code: iso.into(),
            iso3: None,
            name: name.into(),
            capital: None,
            area_km2: None,
            population: 8_000_000,
            continent: Continent::Europe,
            currency_code: None,
            phone_prefix: None,
            primary_language: lang.into(),
            neighbors: neighbors.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn city(id: u64, name: &str, lat: f64, lon: f64, population: u64, cc: Option<&str>) -> City {
        City {
            id,
            name: name.into(),
            ascii_name: name.into(),
            alternate_names: Vec::new(),
            lat,
            lon,
            population,
            country_code: cc.map(str::to_owned),
            timezone: "Europe/Zurich".into(),
            mod_date: None,
            language: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn continent_codes_round_trip_through_display_names() {
        let c: Continent = "NA".parse().unwrap();
        assert_eq!(c, Continent::NorthAmerica);
        assert_eq!(c.to_string(), "North America");
        assert_eq!(c.code(), "NA");
        assert!("XX".parse::<Continent>().is_err());
    }

    #[test]
    fn country_location_has_fixed_score_and_no_coordinates() {
        let ch = country("CH", "Switzerland", &["DE"], "de");
        let loc = Location::Country(&ch);
        let far_away = ReferenceLocation::new(-45.0, 170.0);
        assert_eq!(loc.score(&far_away), COUNTRY_SCORE);
        assert_eq!(loc.coordinates(), None);
        assert_eq!(loc.name(), "Switzerland");
        assert!(loc.as_city().is_none());
    }

    #[test]
    fn city_location_exposes_common_capabilities() {
        let zh = city(1, "Zurich", 47.37, 8.54, 341_730, Some("CH"));
        let loc = Location::City(&zh);
        assert_eq!(loc.coordinates(), Some((47.37, 8.54)));
        assert_eq!(loc.population(), 341_730);
        assert_eq!(loc.score(&ReferenceLocation::new(47.37, 8.54)), 0.0);
        assert_eq!(loc.as_city().map(City::name), Some("Zurich"));
    }
}
