//! Basic usage example for gazetteer-rs
//!
//! Loads the bundled fixture dump with Zurich as home and asks a few
//! questions about what was kept.

use gazetteer_core::{
    DataConfig, IsoLanguageNames, KnowledgeBase, LocationQueries, QueryArgs, ReferenceLocation,
    Result,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("=== Gazetteer Basic Usage Example ===\n");

    let data = DataConfig {
        dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("crates/gazetteer-core/tests/data"),
        cities: "cities.txt".into(),
        ..DataConfig::default()
    };
    let home = ReferenceLocation::new(47.37, 8.54);
    let kb = KnowledgeBase::load(&data, home)?;

    let stats = kb.stats();
    println!(
        "Loaded {} countries, {} cities, {} terms\n",
        stats.countries, stats.cities, stats.terms
    );

    println!("--- Cities by relevance ---");
    let mut cities: Vec<_> = kb.cities().iter().collect();
    cities.sort_by(|a, b| a.score(&home).total_cmp(&b.score(&home)));
    for city in cities {
        println!("{:>8.4}  {}", city.score(&home), city.name);
    }
    println!();

    let queries = LocationQueries::new(&kb, &IsoLanguageNames);
    for name in ["Switzerland", "Tokyo", "Lugano"] {
        println!("--- {name} ---");
        match kb.resolve(name) {
            Some(location) => println!("{}\n", queries.info(&QueryArgs::new(location))?),
            None => println!("(not in the knowledge base)\n"),
        }
    }

    Ok(())
}
