// crates/gazetteer-core/src/lib.rs

//! Gazetteer ingestion and relevance scoring.
//!
//! Loads GeoNames country and city dumps, keeps only the cities relevant to
//! a home location, and answers Where / Population / Language / Info
//! queries over the result.
//!
//! ```no_run
//! use gazetteer_core::{IsoLanguageNames, KnowledgeBase, LocationQueries, QueryArgs};
//! use gazetteer_core::{DataConfig, ReferenceLocation};
//!
//! let kb = KnowledgeBase::load(&DataConfig::default(), ReferenceLocation::new(47.37, 8.54))?;
//! let queries = LocationQueries::new(&kb, &IsoLanguageNames);
//! if let Some(zurich) = kb.resolve("Zurich") {
//!     println!("{}", queries.info(&QueryArgs::new(zurich))?);
//! }
//! # Ok::<(), gazetteer_core::GazetteerError>(())
//! ```

pub mod common;
pub mod config;
pub mod error;
pub mod handlers;
pub mod knowledge;
pub mod languages;
pub mod loader;
pub mod model;
pub mod score;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::KbStats;
pub use crate::config::{Config, DataConfig};
pub use crate::error::{GazetteerError, Result};
pub use crate::handlers::{LocationQueries, QueryArgs, Responses};
pub use crate::knowledge::{DefaultKnowledgeBase, KnowledgeBase};
pub use crate::languages::{IsoLanguageNames, LanguageNames};
pub use crate::loader::{Admission, AdmissionFilter, LoadReport};
pub use crate::model::{City, Continent, Country, Location, LocationKey, ReferenceLocation};
pub use crate::traits::{NameIndex, NameMatch, NamedValues};
