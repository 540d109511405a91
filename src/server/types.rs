//! Shared state and JSON payloads for the HTTP API.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::neighbors::NeighborResult;
use crate::store::{PlaceDirectory, PlaceRecord};

/// Shared state for the HTTP API
#[derive(Clone)]
pub struct AppState {
    /// Places served by every handler
    pub directory: Arc<PlaceDirectory>,
    /// When the state was created, for uptime reporting
    pub start_time: Arc<Instant>,
}

impl AppState {
    /// Creates state for `directory`, starting the uptime clock now.
    pub fn new(directory: Arc<PlaceDirectory>) -> Self {
        Self {
            directory,
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// JSON response for `/city/{id}`
#[derive(Debug, Serialize)]
pub struct CityInfo {
    /// Local name
    pub name: String,
    /// Degrees
    pub longitude: f64,
    /// Degrees
    pub latitude: f64,
    /// ISO-3166 alpha-2 code
    pub country_code: String,
}

impl From<PlaceRecord> for CityInfo {
    fn from(place: PlaceRecord) -> Self {
        Self {
            name: place.name,
            longitude: place.longitude,
            latitude: place.latitude,
            country_code: place.country_code,
        }
    }
}

/// Query string of `/city/{id}/neighbors`.
///
/// Both values are kept as text so an empty `limit=` behaves like an absent one.
#[derive(Debug, Default, Deserialize)]
pub struct NeighborsParams {
    /// Maximum number of results; absent, empty or `-1` for all
    pub limit: Option<String>,
    /// `true` (any case) to stay within the reference's country
    pub in_country: Option<String>,
}

/// One entry of the `/city/{id}/neighbors` response
#[derive(Debug, Serialize)]
pub struct NeighborEntry {
    /// GeoNames identifier
    pub id: i64,
    /// Local name
    pub name: String,
    /// Degrees
    pub longitude: f64,
    /// Degrees
    pub latitude: f64,
    /// ISO-3166 alpha-2 code
    pub country_code: String,
    /// Kilometers from the reference place
    pub distance: f64,
}

impl From<NeighborResult> for NeighborEntry {
    fn from(result: NeighborResult) -> Self {
        Self {
            id: result.id,
            name: result.name,
            longitude: result.longitude,
            latitude: result.latitude,
            country_code: result.country_code,
            distance: result.distance,
        }
    }
}

/// JSON response for `/city/{id}/neighbors`
#[derive(Debug, Serialize)]
pub struct NeighborsResponse {
    /// Nearest first
    pub results: Vec<NeighborEntry>,
}

/// JSON response for `/stats`
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Number of loaded places
    pub places: usize,
    /// Number of distinct country codes
    pub countries: usize,
    /// Distance model name
    pub metric: &'static str,
    /// Seconds since the server started
    pub uptime_seconds: f64,
}
