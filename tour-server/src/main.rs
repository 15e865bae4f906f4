use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;
use tour_server::crossings::CrossingTable;
use tour_server::planner::PlannerConfig;
use tour_server::web::{AppState, create_router};

/// Listen address used when `TOUR_PLANNER_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("TOUR_PLANNER_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("TOUR_PLANNER_ADDR must be a socket address, e.g. 127.0.0.1:3000");

    // Fail fast on a bad bundled table
    let crossings = CrossingTable::bundled().expect("Failed to load bundled crossing table");
    tracing::info!(crossings = crossings.len(), "loaded crossing table");

    let state = AppState::new(crossings, PlannerConfig::default());
    let app = create_router(state);

    tracing::info!("Touring itinerary planner listening on http://{addr}");
    tracing::info!("  GET  /health              - Health check");
    tracing::info!("  POST /api/limits          - Driving limits");
    tracing::info!("  POST /api/itinerary/plan  - Plan an itinerary");
    tracing::info!("  GET  /api/crossings       - Crossing table");
    tracing::info!("  POST /api/crossings/rank  - Rank crossings for a trip");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
