// crates/gazetteer-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, line splitting) and
//! delegates each row to the country or city parser. Countries are loaded
//! before cities so the city pass can resolve country codes.

use crate::config::{Config, DataConfig};
use crate::error::Result;
use crate::knowledge::{DefaultKnowledgeBase, KnowledgeBase};
use crate::model::ReferenceLocation;
use crate::traits::{NameIndex, NamedValues};
use std::time::Instant;

pub mod cities;
pub mod common_io;
pub mod countries;
pub mod lines;

pub use cities::{Admission, AdmissionFilter, CityLoadReport};
pub use lines::{Delimiter, Row, RowReader, ScanReport};

/// Counters of a full country + city load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub countries: ScanReport,
    pub cities: CityLoadReport,
}

impl KnowledgeBase<NameIndex> {
    /// Builds a knowledge base from the files named in `data`, scoring
    /// cities against `reference`.
    pub fn load(data: &DataConfig, reference: ReferenceLocation) -> Result<DefaultKnowledgeBase> {
        let mut kb = Self::new(reference);
        kb.load_all(data)?;
        Ok(kb)
    }

    pub fn from_config(config: &Config) -> Result<DefaultKnowledgeBase> {
        Self::load(&config.data, config.home)
    }
}

impl<V: NamedValues> KnowledgeBase<V> {
    /// Loads countries, then cities, into this knowledge base.
    pub fn load_all(&mut self, data: &DataConfig) -> Result<LoadReport> {
        let started = Instant::now();

        let countries_path = data.countries_path();
        let countries = self.load_countries(&countries_path)?;
        log::info!(
            "Loaded {} countries from {} ({} rows failed)",
            self.countries().len(),
            countries_path.display(),
            countries.failed
        );

        let cities_path = data.cities_path();
        let cities = self.load_cities(&cities_path, data.alternate_names)?;
        log::info!(
            "Kept {} of {} cities from {} ({} rows failed)",
            cities.admitted,
            cities.admitted + cities.rejected,
            cities_path.display(),
            cities.scan.failed
        );
        log::debug!("Knowledge base ready in {:?}", started.elapsed());

        Ok(LoadReport { countries, cities })
    }
}
