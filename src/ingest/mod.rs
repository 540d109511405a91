//! Dataset ingestion.
//!
//! Turns a GeoNames extract on disk into a [`PlaceStore`]:
//! - `.zip` archives are opened with the `zip` crate and the configured member is read
//! - anything else is read as a plain tab-separated file
//!
//! Rows are streamed straight into the store; nothing is buffered besides the
//! store itself.

mod tsv;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};
use zip::ZipArchive;

use crate::config::Config;
use crate::error_handling::LoadError;
use crate::store::PlaceStore;

pub use tsv::read_rows;

/// Loads the dataset named by `config`.
///
/// # Errors
///
/// Any `LoadError`; the caller should treat it as fatal.
pub fn load_dataset(config: &Config) -> Result<PlaceStore, LoadError> {
    let started = Instant::now();
    let store = if config.is_archive() {
        load_archive(&config.dataset, &config.member)?
    } else {
        load_tsv(&config.dataset)?
    };

    info!(
        "Loaded {} places from {} in {:.2}s",
        store.len(),
        config.dataset.display(),
        started.elapsed().as_secs_f64()
    );
    Ok(store)
}

/// Reads `member` out of a zip archive.
pub fn load_archive(path: &Path, member: &str) -> Result<PlaceStore, LoadError> {
    debug!("Opening archive {} (member {})", path.display(), member);
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file))?;
    let entry = archive.by_name(member)?;
    PlaceStore::load_stream(read_rows(entry))
}

/// Reads a plain tab-separated file.
pub fn load_tsv(path: &Path) -> Result<PlaceStore, LoadError> {
    debug!("Opening {}", path.display());
    let file = File::open(path)?;
    PlaceStore::load_stream(read_rows(file))
}
