// crates/gazetteer-core/src/handlers.rs

//! # Query Handlers
//!
//! Answers questions about a place the language layer has already resolved:
//! where it is, how many people live there, what they speak. Handlers only
//! read the knowledge base. Cross references that do not resolve degrade to
//! a fallback (raw ISO code, empty string) instead of failing.

use crate::error::{GazetteerError, Result};
use crate::knowledge::KnowledgeBase;
use crate::languages::LanguageNames;
use crate::model::{City, Country, Location};
use crate::text::{format_number, round_to};
use crate::traits::{NameIndex, NamedValues};
use serde::{Deserialize, Serialize};

/// Answer templates. `{name}` placeholders are substituted on rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Responses {
    /// `{location}`, `{continent}`
    pub where_country: String,
    /// `{neighbors}`, appended on its own line when the country has any.
    pub neighbors: String,
    /// `{location}`, `{country}`
    pub where_city: String,
    /// `{location}`, `{population}`
    pub population: String,
    /// `{location}`, `{language}`
    pub language: String,
}

impl Default for Responses {
    fn default() -> Self {
        Responses {
            where_country: "{location} is in {continent}.".into(),
            neighbors: "{neighbors}.".into(),
            where_city: "{location} is in {country}.".into(),
            population: "{location} has {population} inhabitants.".into(),
            language: "In {location}, people speak {language}.".into(),
        }
    }
}

/// Substitutes `{key}` for each `(key, value)` pair.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter().fold(template.to_owned(), |out, (key, value)| {
        out.replace(&format!("{{{key}}}"), value)
    })
}

/// Arguments of one request, as filled in by the language layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryArgs<'l> {
    pub location: Option<Location<'l>>,
}

impl<'l> QueryArgs<'l> {
    pub fn new(location: Location<'l>) -> Self {
        QueryArgs {
            location: Some(location),
        }
    }

    fn location(&self) -> Result<Location<'l>> {
        self.location
            .ok_or(GazetteerError::MissingArgument("location"))
    }
}

impl<'l> From<Location<'l>> for QueryArgs<'l> {
    fn from(location: Location<'l>) -> Self {
        QueryArgs::new(location)
    }
}

/// The Where / Population / Language / Info queries.
pub struct LocationQueries<'a, V: NamedValues = NameIndex> {
    kb: &'a KnowledgeBase<V>,
    languages: &'a dyn LanguageNames,
    responses: Responses,
}

impl<'a, V: NamedValues> LocationQueries<'a, V> {
    pub fn new(kb: &'a KnowledgeBase<V>, languages: &'a dyn LanguageNames) -> Self {
        LocationQueries {
            kb,
            languages,
            responses: Responses::default(),
        }
    }

    pub fn with_responses(mut self, responses: Responses) -> Self {
        self.responses = responses;
        self
    }

    /// Country: its continent and neighbours. City: its country.
    pub fn where_is(&self, args: &QueryArgs<'_>) -> Result<String> {
        let location = args.location()?;
        Ok(match location {
            Location::Country(country) => {
                let head = render(
                    &self.responses.where_country,
                    &[
                        ("location", country.name()),
                        ("continent", country.continent.name()),
                    ],
                );
                let neighbors = self.neighbor_names(country);
                if neighbors.is_empty() {
                    head
                } else {
                    let list = neighbors.join(", ");
                    let tail =
                        render(&self.responses.neighbors, &[("neighbors", list.as_str())]);
                    format!("{head}\n{tail}")
                }
            }
            Location::City(city) => render(
                &self.responses.where_city,
                &[("location", city.name()), ("country", self.country_name(city))],
            ),
        })
    }

    pub fn population(&self, args: &QueryArgs<'_>) -> Result<String> {
        let location = args.location()?;
        let population = format_number(round_to(location.population() as f64, 2));
        Ok(render(
            &self.responses.population,
            &[("location", location.name()), ("population", population.as_str())],
        ))
    }

    /// An unmapped language code renders as an empty name.
    pub fn language(&self, args: &QueryArgs<'_>) -> Result<String> {
        let location = args.location()?;
        let language = self
            .language_code(location)
            .and_then(|code| self.languages.name(code))
            .unwrap_or("");
        Ok(render(
            &self.responses.language,
            &[("location", location.name()), ("language", language)],
        ))
    }

    /// Where, Population and Language, one per line.
    pub fn info(&self, args: &QueryArgs<'_>) -> Result<String> {
        Ok(format!(
            "{}\n{}\n{}",
            self.where_is(args)?,
            self.population(args)?,
            self.language(args)?
        ))
    }

    /// Display names of a country's neighbours; unknown codes stay as-is.
    pub fn neighbor_names<'s>(&'s self, country: &'s Country) -> Vec<&'s str> {
        country
            .neighbors
            .iter()
            .map(|code| {
                self.kb
                    .country_by_iso(code)
                    .map(Country::name)
                    .unwrap_or(code.as_str())
            })
            .collect()
    }

    /// Name of the city's country, `""` when absent or unresolved.
    pub fn country_name(&self, city: &City) -> &str {
        self.kb.country_of(city).map(Country::name).unwrap_or("")
    }

    /// The city's own language if it has one, else its country's.
    pub fn language_code<'s>(&'s self, location: Location<'s>) -> Option<&'s str> {
        let code = match location {
            Location::Country(country) => Some(country.primary_language.as_str()),
            Location::City(city) => city
                .language
                .as_deref()
                .filter(|l| !l.is_empty())
                .or_else(|| {
                    self.kb
                        .country_of(city)
                        .map(|c| c.primary_language.as_str())
                }),
        };
        code.filter(|c| !c.is_empty())
    }
}
