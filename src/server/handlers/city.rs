//! Single place handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AppState, CityInfo};
use super::missing_city;

/// `GET /city/{id}`
pub async fn city_info_handler(
    State(state): State<AppState>,
    Path(city_id): Path<i64>,
) -> Response {
    match state.directory.get_place(city_id) {
        Ok(place) => (StatusCode::OK, Json(CityInfo::from(place))).into_response(),
        Err(e) => missing_city(e),
    }
}
