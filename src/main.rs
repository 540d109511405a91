//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `city_neighbors` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Dispatching to the requested command
//!
//! All core functionality is implemented in the library crate.

use std::io::{self, BufWriter};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use city_neighbors::config::{Cli, Command};
use city_neighbors::initialization::init_logger_with;
use city_neighbors::{load_directory, run_server, write_neighbors, write_place, NeighborQuery};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try loading from current directory first, then from the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    if let Err(e) = run(cli, config).await {
        eprintln!("city_neighbors error: {:#}", e);
        process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli, config: city_neighbors::Config) -> Result<()> {
    match cli.command {
        Command::Serve(_) => run_server(config).await,
        Command::Place(args) => {
            config.validate().context("Invalid configuration")?;
            let directory = load_directory(&config).await?;
            let stdout = io::stdout();
            write_place(&directory, args.id, &mut stdout.lock())
        }
        Command::Neighbors(args) => {
            config.validate().context("Invalid configuration")?;
            let directory = load_directory(&config).await?;
            let query = NeighborQuery::new(args.id)
                .with_result_count(args.limit)
                .in_country(args.in_country)
                .excluding_reference(args.exclude_self);
            let mut out = BufWriter::new(io::stdout().lock());
            write_neighbors(&directory, &query, &mut out).map(|_| ())
        }
    }
}
