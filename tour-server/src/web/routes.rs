//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::de::DeserializeOwned;

use crate::crossings::{SeaLegAware, apply_preference, insert_crossing, needs_crossing};
use crate::domain::{Season, ValidationError};
use crate::geo::GreatCircle;
use crate::planner::{PlanRequest, Planner, compute_limits};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/limits", post(driving_limits))
        .route("/api/itinerary/plan", post(plan_itinerary))
        .route("/api/crossings", get(list_crossings))
        .route("/api/crossings/rank", post(rank_crossings))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a JSON body, logging it on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(body = %String::from_utf8_lossy(body), "unparseable request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Driving limits for a vehicle, season and style.
async fn driving_limits(body: Bytes) -> Result<Json<LimitsResponse>, AppError> {
    let req: LimitsRequest = parse_json(&body)?;

    let vehicle = req.vehicle.unwrap_or_default();
    let season = Season::resolve(req.season, req.start_date);
    let limits = compute_limits(&vehicle, season, req.style.unwrap_or_default());

    Ok(Json(LimitsResponse {
        season,
        limits: limits.rounded(),
    }))
}

/// Plan an itinerary, routing through a chosen crossing if given.
async fn plan_itinerary(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanItineraryResponse>, AppError> {
    let req: PlanItineraryRequest = parse_json(&body)?;

    let crossing = req
        .crossing_id
        .as_deref()
        .map(|id| {
            state.crossings.get(id).ok_or_else(|| AppError::NotFound {
                message: format!("Unknown crossing: {id}"),
            })
        })
        .transpose()?;

    let mut stops = req.stops;
    let mut used = None;
    if let Some(crossing) = crossing {
        if !req.settings.crossing_preference.allows(crossing.mode) {
            return Err(AppError::BadRequest {
                message: format!(
                    "{} does not match the preferred crossing type",
                    crossing.name
                ),
            });
        }
        if req.vehicle.as_ref().is_some_and(|v| !crossing.accepts(v)) {
            return Err(AppError::BadRequest {
                message: format!("{} cannot carry this vehicle", crossing.name),
            });
        }

        let merged = insert_crossing(&stops, crossing);
        if merged.len() > stops.len() {
            stops = merged;
            used = Some(crossing.clone());
        }
    }

    let request = PlanRequest {
        stops,
        vehicle: req.vehicle,
        settings: req.settings,
    };
    let distances = SeaLegAware::new(GreatCircle);
    let trip = Planner::new(&distances, &state.config).plan(&request)?;

    Ok(Json(PlanItineraryResponse::from_trip(trip, used)))
}

/// The bundled crossing table.
async fn list_crossings(State(state): State<AppState>) -> Json<CrossingsResponse> {
    Json(CrossingsResponse {
        crossings: state.crossings.all().to_vec(),
    })
}

/// Rank crossings for a trip, fastest first.
async fn rank_crossings(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RankCrossingsResponse>, AppError> {
    let req: RankCrossingsRequest = parse_json(&body)?;
    req.origin.validate()?;
    req.destination.validate()?;

    if !needs_crossing(req.origin, req.destination) {
        return Ok(Json(RankCrossingsResponse {
            needs_crossing: false,
            crossings: Vec::new(),
        }));
    }

    let ranked = state
        .crossings
        .rank(req.origin, req.destination, req.vehicle.as_ref());
    let crossings = apply_preference(ranked, req.preference)
        .iter()
        .map(RankedCrossingResult::from_ranked)
        .collect();

    Ok(Json(RankCrossingsResponse {
        needs_crossing: true,
        crossings,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::BadRequest {
            message: e.user_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        tracing::warn!(status = %status, "{message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
