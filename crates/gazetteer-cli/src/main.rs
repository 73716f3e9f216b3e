//! gazetteer: command-line interface for gazetteer-core
//!
//! Loads a GeoNames country file and cities dump, keeps only the cities
//! relevant from a home location, and answers questions about the rest.
//!
//! Usage examples
//! --------------
//!
//! - Show what survived loading
//!   $ gazetteer --config gazetteer.toml stats
//!
//! - Ask about a place
//!   $ gazetteer --lat 47.37 --lon 8.54 where Bern
//!   $ gazetteer --data-dir ./data info Switzerland
//!
//! - Check whether a city would be kept, without loading anything
//!   $ gazetteer --lat 47.37 --lon 8.54 score 35.69 139.69 8336599
//!
//! Logging goes through `RUST_LOG` (default `warn`); `RUST_LOG=info` shows
//! load counts and timings.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use gazetteer_core::score;
use gazetteer_core::{
    Config, DefaultKnowledgeBase, IsoLanguageNames, KnowledgeBase, Location, LocationQueries,
    QueryArgs, ReferenceLocation,
};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = CliArgs::parse();
    let config = resolve_config(&args)?;

    if let Commands::Score {
        city_lat,
        city_lon,
        population,
    } = args.command
    {
        println!(
            "{}",
            score_line(&config.home, city_lat, city_lon, population, args.json)
        );
        return Ok(());
    }

    let kb = KnowledgeBase::from_config(&config).with_context(|| {
        format!(
            "loading gazetteer data from {}",
            config.data.dir.display()
        )
    })?;
    let queries =
        LocationQueries::new(&kb, &IsoLanguageNames).with_responses(config.responses.clone());

    let reply = match args.command {
        Commands::Stats => {
            let stats = kb.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Knowledge base statistics:");
                println!("  Countries: {}", stats.countries);
                println!("  Cities: {}", stats.cities);
                println!("  Terms: {}", stats.terms);
            }
            return Ok(());
        }

        Commands::Countries => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(kb.countries())?);
            } else {
                for c in kb.countries() {
                    println!("{} ({})", c.name(), c.iso_code());
                }
            }
            return Ok(());
        }

        Commands::Where { location } => {
            (answer(&kb, &location, args.json, |a| queries.where_is(a))?, location)
        }
        Commands::Population { location } => {
            (answer(&kb, &location, args.json, |a| queries.population(a))?, location)
        }
        Commands::Language { location } => {
            (answer(&kb, &location, args.json, |a| queries.language(a))?, location)
        }
        Commands::Info { location } => {
            (answer(&kb, &location, args.json, |a| queries.info(a))?, location)
        }

        // Printed before loading.
        Commands::Score { .. } => return Ok(()),
    };

    match reply {
        (Some(text), _) => println!("{text}"),
        (None, name) => eprintln!("{}", miss_message(&kb, &name)),
    }
    Ok(())
}

/// Config file (if any), then `--data-dir`, then `--lat`/`--lon`, then
/// validation of the result.
fn resolve_config(args: &CliArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            Config::read(path).with_context(|| format!("reading config {}", path.display()))?
        }
        None => Config::default(),
    };
    if let Some(dir) = &args.data_dir {
        config.data.dir = dir.clone();
    }
    if let Some(lat) = args.lat {
        config.home.lat = lat;
    }
    if let Some(lon) = args.lon {
        config.home.lon = lon;
    }
    config.validate()?;
    log::info!(
        "home ({}, {}), data from {}",
        config.home.lat,
        config.home.lon,
        config.data.dir.display()
    );
    Ok(config)
}

fn score_line(
    home: &ReferenceLocation,
    lat: f64,
    lon: f64,
    population: u64,
    as_json: bool,
) -> String {
    let value = score::score(lat, lon, population, home);
    let admitted = score::is_admitted(value);
    log::debug!("score of ({lat}, {lon}) pop {population}: {value}");
    if as_json {
        json!({ "score": value, "admitted": admitted }).to_string()
    } else {
        format!(
            "score {value:.4} ({})",
            if admitted { "admitted" } else { "rejected" }
        )
    }
}

/// Runs `query` on the location called `name`. `None` when nothing has that name.
fn answer<F>(
    kb: &DefaultKnowledgeBase,
    name: &str,
    as_json: bool,
    query: F,
) -> anyhow::Result<Option<String>>
where
    F: for<'l> Fn(&QueryArgs<'l>) -> gazetteer_core::Result<String>,
{
    let Some(location) = kb.resolve(name) else {
        return Ok(None);
    };
    let text = query(&QueryArgs::new(location))?;
    if !as_json {
        return Ok(Some(text));
    }
    let kind = match location {
        Location::Country(_) => "country",
        Location::City(_) => "city",
    };
    Ok(Some(
        json!({ "name": location.name(), "kind": kind, "answer": text }).to_string(),
    ))
}

/// Up to five names containing `name`, as a hint.
fn miss_message(kb: &DefaultKnowledgeBase, name: &str) -> String {
    let similar: Vec<&str> = kb.search(name).iter().take(5).map(|l| l.name()).collect();
    if similar.is_empty() {
        format!("No location found for: {name}")
    } else {
        format!("No location found for: {name} (did you mean {}?)", similar.join(", "))
    }
}
