//! HTTP API over the place directory.
//!
//! Endpoints (trailing slash accepted on the city routes):
//! - `/city/{id}` - attributes of one place
//! - `/city/{id}/neighbors?limit=N&in_country=true` - nearest places, nearest first
//! - `/stats` - dataset summary
//!
//! Unknown ids answer `404 Missing city`.

mod handlers;
mod types;

use std::future::Future;

use axum::routing::get;
use axum::Router;

use handlers::{city_info_handler, city_neighbors_handler, stats_handler};
pub use types::{AppState, CityInfo, NeighborEntry, NeighborsResponse, StatsResponse};

/// Builds the router; exposed separately so tests can drive it without a socket.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/city/:city_id", get(city_info_handler))
        .route("/city/:city_id/", get(city_info_handler))
        .route("/city/:city_id/neighbors", get(city_neighbors_handler))
        .route("/city/:city_id/neighbors/", get(city_neighbors_handler))
        .route("/stats", get(stats_handler))
        .with_state(state)
}

/// Binds `host:port` and serves until `shutdown` resolves.
pub async fn start_server<F>(
    host: &str,
    port: u16,
    state: AppState,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to {}:{}: {}", host, port, e))?;

    log::info!("API listening on http://{}:{}/", host, port);
    log::info!("  - Place: http://{}:{}/city/<id>", host, port);
    log::info!(
        "  - Neighbors: http://{}:{}/city/<id>/neighbors?limit=<n>&in_country=<bool>",
        host,
        port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
