//! Nearest neighbors handler.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AppState, NeighborEntry, NeighborsParams, NeighborsResponse};
use super::missing_city;
use crate::config::UNLIMITED_SENTINEL;
use crate::error_handling::QueryError;

/// `GET /city/{id}/neighbors?limit=N&in_country=true`
///
/// An unknown city is a 404 whatever the query string says.
pub async fn city_neighbors_handler(
    State(state): State<AppState>,
    Path(city_id): Path<i64>,
    Query(params): Query<NeighborsParams>,
) -> Response {
    if state.directory.snapshot().get(city_id).is_none() {
        return missing_city(QueryError::UnknownPlace(city_id));
    }

    let limit = match parse_limit(params.limit.as_deref()) {
        Ok(limit) => limit,
        Err(message) => return (StatusCode::BAD_REQUEST, message).into_response(),
    };
    let in_country = parse_in_country(params.in_country.as_deref());

    log::debug!("neighbors of {city_id}: limit={limit:?} in_country={in_country}");

    // The store never changes under a request; ranking 150k places is CPU work.
    let directory = state.directory.clone();
    let ranked = tokio::task::spawn_blocking(move || {
        directory.get_neighbors(city_id, limit, in_country)
    })
    .await;

    match ranked {
        Ok(Ok(results)) => {
            let body = NeighborsResponse {
                results: results.into_iter().map(NeighborEntry::from).collect(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        // Only reachable if a reload dropped the city mid-request.
        Ok(Err(e)) => missing_city(e),
        Err(e) => {
            log::error!("Neighbor query for {city_id} failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Query failed").into_response()
        }
    }
}

/// Absent, empty or negative means no limit.
fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, String> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    let value: i64 = raw
        .parse()
        .map_err(|_| format!("Invalid limit {raw:?}: expected an integer"))?;
    if value <= UNLIMITED_SENTINEL {
        return Ok(None);
    }
    usize::try_from(value)
        .map(Some)
        .map_err(|_| format!("Invalid limit {value}: too large"))
}

/// Only a case-insensitive `true` enables the country filter.
fn parse_in_country(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value.eq_ignore_ascii_case("true"))
}
