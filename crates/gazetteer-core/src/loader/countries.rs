// crates/gazetteer-core/src/loader/countries.rs

//! # Country Registry
//!
//! Parses `countryInfo.txt`. Field order:
//!
//! | #  | field            | #  | field                  |
//! |----|------------------|----|------------------------|
//! | 0  | ISO-2            | 10 | currency code          |
//! | 1  | ISO-3            | 11 | currency name          |
//! | 2  | ISO numeric      | 12 | phone prefix           |
//! | 3  | FIPS             | 13 | postal code format     |
//! | 4  | name             | 14 | postal code regex      |
//! | 5  | capital          | 15 | languages (comma list) |
//! | 6  | area km²         | 16 | geoname id             |
//! | 7  | population       | 17 | neighbours (comma list)|
//! | 8  | continent        | 18 | equivalent FIPS        |
//! | 9  | top-level domain |    |                        |

use super::lines::{scan_rows, Delimiter, Row, ScanReport, COMMENT_MARKER};
use crate::error::{GazetteerError, Result};
use crate::knowledge::KnowledgeBase;
use crate::model::{Continent, Country};
use crate::traits::NamedValues;
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::path::Path;

/// One `countryInfo.txt` record, positionally.
#[derive(Debug, Deserialize)]
struct CountryRow {
    iso: String,
    iso3: Option<String>,
    _iso_numeric: IgnoredAny,
    _fips: IgnoredAny,
    name: String,
    capital: Option<String>,
    // Lenient: a malformed area drops the value, not the country.
    area: Option<String>,
    population: u64,
    continent: Continent,
    _tld: IgnoredAny,
    currency_code: Option<String>,
    _currency_name: IgnoredAny,
    phone: Option<String>,
    _postal_format: IgnoredAny,
    _postal_regex: IgnoredAny,
    languages: Option<String>,
    _geoname_id: IgnoredAny,
    #[serde(default)]
    neighbours: String,
    #[serde(default)]
    _equivalent_fips: Option<String>,
}

impl From<CountryRow> for Country {
    fn from(raw: CountryRow) -> Self {
        Country {
            iso_code: raw.iso,
            iso3: raw.iso3,
            name: raw.name,
            capital: raw.capital,
            area_km2: raw.area.and_then(|a| a.parse().ok()),
            population: raw.population,
            continent: raw.continent,
            currency_code: raw.currency_code,
            phone_prefix: raw.phone.as_deref().and_then(leading_number),
            primary_language: raw
                .languages
                .unwrap_or_default()
                .chars()
                .take(2)
                .collect(),
            neighbors: raw
                .neighbours
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }
}

/// Parses one row. `Ok(None)` for comment and empty lines.
pub fn parse_country(row: &Row) -> Result<Option<Country>> {
    let first = row.first();
    if first.is_empty() || first.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }
    if first.len() != 2 {
        return Err(GazetteerError::row(
            row.line,
            format!("bad ISO-2 code {first:?}"),
        ));
    }
    Ok(Some(row.deserialize::<CountryRow>()?.into()))
}

/// Leading decimal digits of `s`, e.g. `"1-268"` -> 1. `None` if there are none.
fn leading_number(s: &str) -> Option<u32> {
    let s = s.trim().trim_start_matches('+');
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

impl<V: NamedValues> KnowledgeBase<V> {
    /// Streams a country file into the knowledge base.
    pub fn load_countries(&mut self, path: impl AsRef<Path>) -> Result<ScanReport> {
        scan_rows(path, Delimiter::TAB, |row| {
            if let Some(country) = parse_country(&row)? {
                self.deposit_country(country);
            }
            Ok(())
        })
    }
}
