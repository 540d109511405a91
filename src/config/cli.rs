//! Command-line options.
//!
//! The binary is a thin wrapper; these types only translate flags into a
//! [`Config`] plus the per-command arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{
    DEFAULT_ARCHIVE_MEMBER, DEFAULT_DATASET_PATH, DEFAULT_HOST, DEFAULT_PORT,
};
use crate::config::types::{Config, LogFormat, LogLevel, MetricKind};

/// Command-line options and configuration.
///
/// # Examples
///
/// ```bash
/// # Serve the HTTP API on the default port
/// city_neighbors serve ./cities1000.zip
///
/// # Print one place
/// city_neighbors place 2988507 ./cities1000.zip
///
/// # Ten nearest places in the same country, as JSON lines
/// city_neighbors neighbors 2988507 ./cities1000.zip --limit 10 --in-country
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "city_neighbors",
    about = "Looks up GeoNames places and their nearest neighbors."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// What to do
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the dataset and serve the HTTP API
    Serve(ServeArgs),
    /// Print a single place as JSON
    Place(PlaceArgs),
    /// Print the nearest places to a reference place as JSON lines
    Neighbors(NeighborsArgs),
}

/// Where the dataset lives.
#[derive(Debug, Clone, Args)]
pub struct DatasetArgs {
    /// GeoNames extract (.zip archive or tab-separated file)
    #[arg(value_parser, default_value = DEFAULT_DATASET_PATH, env = "CITY_NEIGHBORS_DATASET")]
    pub dataset: PathBuf,

    /// File inside the zip archive to read
    #[arg(long, default_value = DEFAULT_ARCHIVE_MEMBER)]
    pub member: String,
}

/// Arguments for `serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Dataset to load
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST, env = "CITY_NEIGHBORS_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT, env = "CITY_NEIGHBORS_PORT")]
    pub port: u16,

    /// Distance model used to rank neighbors
    #[arg(long, value_enum, default_value_t = MetricKind::Cosine)]
    pub metric: MetricKind,
}

/// Arguments for `place`.
#[derive(Debug, Args)]
pub struct PlaceArgs {
    /// GeoNames identifier
    pub id: i64,

    /// Dataset to load
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

/// Arguments for `neighbors`.
#[derive(Debug, Args)]
pub struct NeighborsArgs {
    /// GeoNames identifier of the reference place
    pub id: i64,

    /// Dataset to load
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Maximum number of results (all places when omitted)
    #[arg(long)]
    pub limit: Option<usize>,

    /// Only return places in the reference place's country
    #[arg(long)]
    pub in_country: bool,

    /// Drop the reference place from its own results
    #[arg(long)]
    pub exclude_self: bool,

    /// Distance model used to rank neighbors
    #[arg(long, value_enum, default_value_t = MetricKind::Cosine)]
    pub metric: MetricKind,
}

impl Cli {
    /// Builds the library configuration for whichever command was given.
    pub fn config(&self) -> Config {
        let defaults = Config::default();
        let (dataset, host, port, metric) = match &self.command {
            Command::Serve(args) => (&args.dataset, args.host.clone(), args.port, args.metric),
            Command::Place(args) => (&args.dataset, defaults.host, defaults.port, defaults.metric),
            Command::Neighbors(args) => (&args.dataset, defaults.host, defaults.port, args.metric),
        };

        Config {
            dataset: dataset.dataset.clone(),
            member: dataset.member.clone(),
            host,
            port,
            metric,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}
