//! city_neighbors library: GeoNames place lookup and nearest-neighbor search
//!
//! This library loads a GeoNames extract (the `cities1000` family, as a zip
//! archive or a bare tab-separated file) into memory and answers two kinds of
//! queries: the attributes of a place by id, and the places nearest to a
//! reference place by great-circle distance.
//!
//! # Example
//!
//! ```no_run
//! use city_neighbors::{load_dataset, Config, NeighborQuery, PlaceDirectory};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     dataset: std::path::PathBuf::from("cities1000.zip"),
//!     ..Default::default()
//! };
//!
//! let directory = PlaceDirectory::new(load_dataset(&config)?);
//! let query = NeighborQuery::new(2988507).with_result_count(Some(5));
//! for place in directory.query(&query)? {
//!     println!("{} ({}) {:.1} km", place.name, place.country_code, place.distance);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Loading and querying are synchronous. The HTTP server ([`run_server`])
//! requires a Tokio runtime.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod distance;
mod error_handling;
pub mod ingest;
pub mod initialization;
pub mod neighbors;
pub mod server;
pub mod store;

// Re-export public API
pub use app::{load_directory, run_server, shutdown_signal, write_neighbors, write_place};
pub use config::{Config, LogFormat, LogLevel, MetricKind};
pub use distance::{haversine_km, spherical_cosine_km, DistanceMetric, Metric};
pub use error_handling::{InitializationError, LoadError, QueryError};
pub use ingest::load_dataset;
pub use neighbors::{find_neighbors, NeighborQuery, NeighborResult};
pub use store::{PlaceDirectory, PlaceRecord, PlaceStore, RawPlaceRow};
