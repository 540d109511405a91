//! Application initialization and resource setup.
//!
//! - Logger
//! - Place directory (dataset load + distance metric)

mod logger;

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::LoadError;
use crate::ingest::load_dataset;
use crate::store::PlaceDirectory;

// Re-export public API
pub use logger::init_logger_with;

/// Loads the dataset and wraps it in a shareable directory.
///
/// Runs synchronously; call it from a blocking context.
///
/// # Errors
///
/// Returns the `LoadError` of the dataset load. No directory is created in that case.
pub fn init_directory(config: &Config) -> Result<Arc<PlaceDirectory>, LoadError> {
    let store = load_dataset(config)?;
    Ok(Arc::new(PlaceDirectory::with_metric(
        store,
        config.metric.into(),
    )))
}
