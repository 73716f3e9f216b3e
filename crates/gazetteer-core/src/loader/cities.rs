// crates/gazetteer-core/src/loader/cities.rs

//! # City Admission Filter
//!
//! Streams `cities1000.txt` (~140 000 places with more than 1000
//! inhabitants) and keeps only the ones relevant from the user's home: all
//! nearby places plus the big cities of the world. Most rows are dropped.
//!
//! Field order: 0 geoname id, 1 name, 2 ascii name, 3 alternate names,
//! 4 latitude, 5 longitude, 6 feature class, 7 feature code, 8 country code,
//! 9 alternate country codes, 10–13 admin codes, 14 population,
//! 15 elevation, 16 DEM, 17 timezone, 18 modification date.

use super::lines::{scan_rows, Delimiter, Row, ScanReport};
use crate::error::Result;
use crate::knowledge::KnowledgeBase;
use crate::model::{City, ReferenceLocation};
use crate::score;
use crate::traits::NamedValues;
use chrono::NaiveDate;
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CityRow {
    id: u64,
    name: String,
    ascii_name: String,
    alternate_names: String,
    latitude: f64,
    longitude: f64,
    _feature_class: IgnoredAny,
    _feature_code: IgnoredAny,
    country_code: Option<String>,
    _cc2: IgnoredAny,
    _admin1: IgnoredAny,
    _admin2: IgnoredAny,
    _admin3: IgnoredAny,
    _admin4: IgnoredAny,
    population: u64,
    _elevation: IgnoredAny,
    _dem: IgnoredAny,
    timezone: String,
    #[serde(default)]
    modification_date: Option<String>,
}

impl From<CityRow> for City {
    fn from(raw: CityRow) -> Self {
        City {
            id: raw.id,
            name: raw.name,
            ascii_name: raw.ascii_name,
            alternate_names: raw
                .alternate_names
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_owned)
                .collect(),
            lat: raw.latitude,
            lon: raw.longitude,
            population: raw.population,
            country_code: raw.country_code,
            timezone: raw.timezone,
            // An unreadable date is dropped, the city is kept.
            mod_date: raw
                .modification_date
                .and_then(|d| NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok()),
            language: None,
        }
    }
}

/// Parses one city row.
pub fn parse_city(row: &Row) -> Result<City> {
    Ok(row.deserialize::<CityRow>()?.into())
}

/// Verdict of the [`AdmissionFilter`], carrying the computed score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Admission {
    Admitted(f64),
    Rejected(f64),
}

impl Admission {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted(_))
    }

    pub fn score(&self) -> f64 {
        match *self {
            Admission::Admitted(s) | Admission::Rejected(s) => s,
        }
    }
}

/// Keeps a city when its score against the reference is at most
/// [`score::ADMISSION_THRESHOLD`]. The rule is the same everywhere.
#[derive(Debug, Clone, Copy)]
pub struct AdmissionFilter {
    reference: ReferenceLocation,
}

impl AdmissionFilter {
    pub fn new(reference: ReferenceLocation) -> Self {
        AdmissionFilter { reference }
    }

    pub fn reference(&self) -> ReferenceLocation {
        self.reference
    }

    pub fn check(&self, city: &City) -> Admission {
        let s = city.score(&self.reference);
        if score::is_admitted(s) {
            Admission::Admitted(s)
        } else {
            Admission::Rejected(s)
        }
    }
}

/// Counters of one city load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CityLoadReport {
    pub scan: ScanReport,
    pub admitted: usize,
    pub rejected: usize,
}

impl<V: NamedValues> KnowledgeBase<V> {
    /// Streams a cities file through the admission filter.
    ///
    /// With `alternate_names` set, each admitted city is additionally
    /// deposited under every one of its alternate names.
    pub fn load_cities(
        &mut self,
        path: impl AsRef<Path>,
        alternate_names: bool,
    ) -> Result<CityLoadReport> {
        let filter = AdmissionFilter::new(self.reference());
        let mut admitted = 0;
        let mut rejected = 0;

        let scan = scan_rows(path, Delimiter::TAB, |row| {
            let city = parse_city(&row)?;
            if !filter.check(&city).is_admitted() {
                rejected += 1;
                return Ok(());
            }
            admitted += 1;
            let aliases = if alternate_names {
                city.alternate_names.clone()
            } else {
                Vec::new()
            };
            let key = self.deposit_city(city);
            for alias in &aliases {
                self.deposit_alias(alias, key);
            }
            Ok(())
        })?;

        Ok(CityLoadReport {
            scan,
            admitted,
            rejected,
        })
    }
}
