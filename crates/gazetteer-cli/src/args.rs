use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for gazetteer-cli
#[derive(Debug, Parser)]
#[command(
    name = "gazetteer",
    version,
    about = "Load GeoNames dumps relative to a home location and ask where things are"
)]
pub struct CliArgs {
    /// TOML configuration file ([home], [data], [responses])
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding countryInfo.txt and the cities dump (overrides config)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Home latitude (overrides config)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Home longitude (overrides config)
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Print JSON instead of sentences
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show how much survived loading
    Stats,

    /// List all countries
    Countries,

    /// Where is a country or city?
    Where { location: String },

    /// How many people live there?
    Population { location: String },

    /// What language is spoken there?
    Language { location: String },

    /// Where, population and language at once
    Info { location: String },

    /// Score a hypothetical city against the home location, without loading data
    ///
    /// The city's coordinates get their own ids so they never clash with the
    /// global `--lat`/`--lon` naming the home.
    Score {
        #[arg(id = "city_lat", value_name = "LAT", allow_hyphen_values = true)]
        city_lat: f64,
        #[arg(id = "city_lon", value_name = "LON", allow_hyphen_values = true)]
        city_lon: f64,
        population: u64,
    },
}
