//! HTTP API handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error_handling::QueryError;

mod city;
mod neighbors;
mod stats;

pub use city::city_info_handler;
pub use neighbors::city_neighbors_handler;
pub use stats::stats_handler;

/// Body of every 404 for an unknown place id
pub(super) const MISSING_CITY: &str = "Missing city";

/// 404 for an id the directory does not know.
fn missing_city(err: QueryError) -> Response {
    log::debug!("Missing city {}: {err}", err.id());
    (StatusCode::NOT_FOUND, MISSING_CITY).into_response()
}
