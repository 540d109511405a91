//! Dataset statistics handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AppState, StatsResponse};

/// `GET /stats`
pub async fn stats_handler(State(state): State<AppState>) -> Response {
    let store = state.directory.snapshot();
    let response = StatsResponse {
        places: store.len(),
        countries: store.country_counts().len(),
        metric: state.directory.metric().name(),
        uptime_seconds: state.start_time.elapsed().as_secs_f64(),
    };

    (StatusCode::OK, Json(response)).into_response()
}
