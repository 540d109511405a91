//! Command implementations behind the CLI.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::app::shutdown::shutdown_signal;
use crate::config::Config;
use crate::initialization::init_directory;
use crate::neighbors::NeighborQuery;
use crate::server::{start_server, AppState};
use crate::store::PlaceDirectory;

/// Loads the dataset (off the async runtime) and returns the shared directory.
pub async fn load_directory(config: &Config) -> Result<Arc<PlaceDirectory>> {
    let blocking_config = config.clone();
    tokio::task::spawn_blocking(move || init_directory(&blocking_config))
        .await
        .context("Dataset loader task failed")?
        .with_context(|| format!("Failed to load dataset {}", config.dataset.display()))
}

/// Loads the dataset and serves the HTTP API until a shutdown signal.
///
/// # Errors
///
/// Fails if the configuration is invalid, the dataset cannot be loaded, or
/// the listener cannot be bound. There is no degraded mode: a failed load
/// never starts the server.
pub async fn run_server(config: Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let directory = load_directory(&config).await?;
    info!(
        "Serving {} places ({} metric)",
        directory.snapshot().len(),
        directory.metric().name()
    );

    start_server(
        &config.host,
        config.port,
        AppState::new(directory),
        shutdown_signal(),
    )
    .await
}

/// Writes one place as pretty JSON.
pub fn write_place<W: Write>(directory: &PlaceDirectory, id: i64, out: &mut W) -> Result<()> {
    let place = directory.get_place(id)?;
    serde_json::to_writer_pretty(&mut *out, &place).context("Failed to serialize place")?;
    writeln!(out)?;
    Ok(())
}

/// Writes neighbor results as JSON lines, nearest first.
///
/// Returns the number of lines written.
pub fn write_neighbors<W: Write>(
    directory: &PlaceDirectory,
    query: &NeighborQuery,
    out: &mut W,
) -> Result<usize> {
    let results = directory.query(query)?;
    for result in &results {
        serde_json::to_writer(&mut *out, result).context("Failed to serialize neighbor")?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(results.len())
}
