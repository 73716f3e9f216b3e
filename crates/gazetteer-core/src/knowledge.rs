// crates/gazetteer-core/src/knowledge.rs

//! # Location Knowledge Base
//!
//! Owns every admitted [`Country`] and [`City`] plus two lookups over them:
//! the ISO-2 index used to resolve cross references, and the term index
//! ([`NamedValues`]) the natural-language layer resolves spoken names with.
//!
//! Built once by the loader, read-only afterwards. Being plain owned data it
//! is `Send + Sync`, so any number of queries may share it without locking.

use crate::common::KbStats;
use crate::model::{City, Country, Location, LocationKey, ReferenceLocation};
use crate::traits::{NameIndex, NameMatch, NamedValues};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct KnowledgeBase<V: NamedValues = NameIndex> {
    reference: ReferenceLocation,
    countries: Vec<Country>,
    cities: Vec<City>,
    /// Upper-case ISO-2 -> index into `countries`.
    by_iso: HashMap<String, usize>,
    names: V,
}

/// Convenient alias for the default term index.
pub type DefaultKnowledgeBase = KnowledgeBase<NameIndex>;

impl KnowledgeBase<NameIndex> {
    pub fn new(reference: ReferenceLocation) -> Self {
        Self::with_index(reference, NameIndex::default())
    }
}

impl<V: NamedValues> KnowledgeBase<V> {
    /// An empty knowledge base depositing names into `names`.
    pub fn with_index(reference: ReferenceLocation, names: V) -> Self {
        KnowledgeBase {
            reference,
            countries: Vec::new(),
            cities: Vec::new(),
            by_iso: HashMap::new(),
            names,
        }
    }

    /// The home coordinate cities were scored against.
    pub fn reference(&self) -> ReferenceLocation {
        self.reference
    }

    // -----------------------------------------------------------------------
    // DEPOSIT (load phase only)
    // -----------------------------------------------------------------------

    /// Adds a country under its name and ISO code. A repeated ISO code
    /// re-points the index at the newer record.
    pub fn deposit_country(&mut self, country: Country) -> LocationKey {
        let idx = self.countries.len();
        let key = LocationKey::Country(idx);
        self.names.add_value(&country.name, key);
        if let Some(previous) = self
            .by_iso
            .insert(country.iso_code.to_ascii_uppercase(), idx)
        {
            log::debug!(
                "ISO code {} redefined, replacing {:?}",
                country.iso_code,
                self.countries[previous].name
            );
        }
        self.countries.push(country);
        key
    }

    /// Adds a city under its display name. A later city with the same name
    /// shadows the earlier one (and any country of that name) in the term
    /// index; both records stay in [`KnowledgeBase::cities`].
    pub fn deposit_city(&mut self, city: City) -> LocationKey {
        let key = LocationKey::City(self.cities.len());
        self.names.add_value(&city.name, key);
        self.cities.push(city);
        key
    }

    /// Makes an existing record findable under another term.
    pub fn deposit_alias(&mut self, term: &str, key: LocationKey) {
        self.names.add_value(term, key);
    }

    // -----------------------------------------------------------------------
    // RESOLUTION VIEW
    // -----------------------------------------------------------------------

    pub fn location(&self, key: LocationKey) -> Option<Location<'_>> {
        match key {
            LocationKey::Country(i) => self.countries.get(i).map(Location::Country),
            LocationKey::City(i) => self.cities.get(i).map(Location::City),
        }
    }

    /// Resolves a display name (exact first, then accent/case folded).
    pub fn resolve(&self, term: &str) -> Option<Location<'_>> {
        self.names
            .value_for_term(term)
            .and_then(|key| self.location(key))
    }

    /// Country by ISO-2 code, case-insensitive.
    pub fn country_by_iso(&self, iso2: &str) -> Option<&Country> {
        self.by_iso
            .get(&iso2.trim().to_ascii_uppercase())
            .map(|&i| &self.countries[i])
    }

    /// The country a city belongs to, if its code resolves.
    pub fn country_of(&self, city: &City) -> Option<&Country> {
        city.country_code
            .as_deref()
            .and_then(|code| self.country_by_iso(code))
    }

    /// Every record whose name contains `query` (accent/case folded),
    /// countries first, each list in load order. Shadowed records included.
    pub fn search(&self, query: &str) -> Vec<Location<'_>> {
        let countries = self
            .countries
            .iter()
            .filter(|c| c.name_contains(query))
            .map(Location::Country);
        let cities = self
            .cities
            .iter()
            .filter(|c| c.name_contains(query))
            .map(Location::City);
        countries.chain(cities).collect()
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The term index, for the natural-language layer.
    pub fn names(&self) -> &V {
        &self.names
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.terms()
    }

    pub fn stats(&self) -> KbStats {
        KbStats {
            countries: self.countries.len(),
            cities: self.cities.len(),
            terms: self.names.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{city, country};

    fn kb() -> DefaultKnowledgeBase {
        let mut kb = KnowledgeBase::new(ReferenceLocation::new(47.0, 8.0));
        kb.deposit_country(country("CH", "Switzerland", &["DE", "FR"], "de"));
        kb.deposit_country(country("DE", "Germany", &["CH"], "de"));
        kb
    }

    #[test]
    fn countries_resolve_by_name_and_iso() {
        let kb = kb();
        assert_eq!(kb.country_by_iso("CH").map(Country::name), Some("Switzerland"));
        assert_eq!(kb.country_by_iso("de").map(Country::name), Some("Germany"));
        assert!(kb.country_by_iso("XX").is_none());
        let loc = kb.resolve("Germany").unwrap();
        assert_eq!(loc.as_country().map(Country::iso_code), Some("DE"));
    }

    #[test]
    fn duplicate_iso_code_last_wins() {
        let mut kb = kb();
        kb.deposit_country(country("CH", "Confoederatio Helvetica", &[], "de"));
        assert_eq!(
            kb.country_by_iso("CH").map(Country::name),
            Some("Confoederatio Helvetica")
        );
    }

    #[test]
    fn duplicate_city_name_last_loaded_wins() {
        // Two distinct places share a display name; only the later one is
        // reachable by name. Both stay stored.
        let mut kb = kb();
        kb.deposit_city(city(1, "Freiburg", 47.99, 7.85, 231_195, Some("DE")));
        kb.deposit_city(city(2, "Freiburg", 46.80, 7.15, 38_365, Some("CH")));

        let hit = kb.resolve("Freiburg").and_then(|l| l.as_city()).unwrap();
        assert_eq!(hit.id, 2);
        assert_eq!(kb.cities().len(), 2);
        assert_eq!(kb.stats().cities, 2);
    }

    #[test]
    fn city_shadows_country_of_same_name() {
        let mut kb = KnowledgeBase::new(ReferenceLocation::new(1.3, 103.8));
        kb.deposit_country(country("SG", "Singapore", &[], "cm"));
        kb.deposit_city(city(1880252, "Singapore", 1.29, 103.85, 3_547_809, Some("SG")));
        assert!(kb.resolve("Singapore").unwrap().as_city().is_some());
        assert_eq!(kb.country_by_iso("SG").map(Country::name), Some("Singapore"));
    }

    #[test]
    fn unresolved_country_code_is_none() {
        let kb = kb();
        let orphan = city(9, "Nowhere", 0.0, 0.0, 10, Some("QQ"));
        assert!(kb.country_of(&orphan).is_none());
        let stateless = city(10, "Void", 0.0, 0.0, 10, None);
        assert!(kb.country_of(&stateless).is_none());
    }

    #[test]
    fn aliases_point_at_existing_record() {
        let mut kb = kb();
        let key = kb.deposit_city(city(1, "Genève", 46.2, 6.15, 183_981, Some("CH")));
        kb.deposit_alias("Geneva", key);
        assert_eq!(kb.resolve("Geneva").map(|l| l.name()), Some("Genève"));
        assert_eq!(kb.resolve("geneve").map(|l| l.name()), Some("Genève"));
        assert_eq!(kb.stats().terms, 4);
    }

    #[test]
    fn search_finds_partial_folded_names() {
        let mut kb = kb();
        kb.deposit_city(city(1, "Zürich", 47.37, 8.54, 341_730, Some("CH")));
        kb.deposit_city(city(2, "Freiburg", 47.99, 7.85, 231_195, Some("DE")));
        kb.deposit_city(city(3, "Freiburg", 46.80, 7.15, 38_365, Some("CH")));

        let names: Vec<_> = kb.search("zur").iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["Zürich"]);
        assert_eq!(kb.search("FREIBURG").len(), 2);
        let mixed: Vec<_> = kb.search("er").iter().map(|l| l.name()).collect();
        assert_eq!(mixed, vec!["Switzerland", "Germany", "Freiburg", "Freiburg"]);
        assert!(kb.search("atlantis").is_empty());
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DefaultKnowledgeBase>();

        let mut kb = kb();
        kb.deposit_city(city(1, "Bern", 46.95, 7.45, 121_631, Some("CH")));
        let kb = &kb;
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(move || {
                    let bern = kb.resolve("Bern").and_then(|l| l.as_city()).unwrap();
                    assert_eq!(kb.country_of(bern).map(Country::name), Some("Switzerland"));
                });
            }
        });
    }
}
