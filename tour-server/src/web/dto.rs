//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::crossings::{
    ChannelCrossing, CostEstimate, CrossingMode, CrossingPreference, RankedCrossing, Terminal,
};
use crate::domain::{
    Coordinate, DrivingStyle, Itinerary, PlanningRecommendation, Season, Stop, VehicleProfile,
};
use crate::planner::{DrivingLimits, PlannedTrip, TripSettings};

/// Request for the driving limits of a vehicle.
#[derive(Debug, Deserialize)]
pub struct LimitsRequest {
    /// Vehicle (defaults to a mid-sized motorhome)
    pub vehicle: Option<VehicleProfile>,

    /// Explicit season
    pub season: Option<Season>,

    /// Trip start date, used to derive the season when none is given
    pub start_date: Option<NaiveDate>,

    /// Driving style (defaults to moderate)
    pub style: Option<DrivingStyle>,
}

/// Driving limits for a vehicle.
#[derive(Debug, Serialize)]
pub struct LimitsResponse {
    /// Season the limits were computed for
    pub season: Season,

    /// Limits, rounded for display
    pub limits: DrivingLimits,
}

/// Request to plan an itinerary.
#[derive(Debug, Deserialize)]
pub struct PlanItineraryRequest {
    /// Ordered stops
    pub stops: Vec<Stop>,

    /// Vehicle (defaults to a mid-sized motorhome)
    pub vehicle: Option<VehicleProfile>,

    /// Trip settings
    #[serde(default)]
    pub settings: TripSettings,

    /// Crossing to route through when the trip crosses the sea
    pub crossing_id: Option<String>,
}

/// A planned itinerary.
#[derive(Debug, Serialize)]
pub struct PlanItineraryResponse {
    /// Daily stages and trip totals
    pub itinerary: Itinerary,

    /// Recommendations, in rule order
    pub recommendations: Vec<PlanningRecommendation>,

    /// Limits the plan was built against, rounded for display
    pub limits: DrivingLimits,

    /// Season used for planning
    pub season: Season,

    /// Vehicle used for planning
    pub vehicle: VehicleProfile,

    /// Crossing inserted into the route, if any
    pub crossing: Option<ChannelCrossing>,
}

impl PlanItineraryResponse {
    /// Create from a planned trip.
    pub fn from_trip(trip: PlannedTrip, crossing: Option<ChannelCrossing>) -> Self {
        Self {
            limits: trip.limits.rounded(),
            itinerary: trip.itinerary,
            recommendations: trip.recommendations,
            season: trip.season,
            vehicle: trip.vehicle,
            crossing,
        }
    }
}

/// The bundled crossing table.
#[derive(Debug, Serialize)]
pub struct CrossingsResponse {
    pub crossings: Vec<ChannelCrossing>,
}

/// Request to rank crossings for a trip.
#[derive(Debug, Deserialize)]
pub struct RankCrossingsRequest {
    /// Trip origin
    pub origin: Coordinate,

    /// Trip destination
    pub destination: Coordinate,

    /// Vehicle; incompatible crossings are dropped when present
    pub vehicle: Option<VehicleProfile>,

    /// Mode preference (defaults to any)
    #[serde(default)]
    pub preference: CrossingPreference,
}

/// A crossing option for one trip.
#[derive(Debug, Serialize)]
pub struct RankedCrossingResult {
    /// Crossing id
    pub id: String,

    /// Display name
    pub name: String,

    /// Ferry or tunnel
    pub mode: CrossingMode,

    /// Terminal where the vehicle boards
    pub embark: Terminal,

    /// Terminal where the vehicle leaves
    pub disembark: Terminal,

    /// Crossing time in minutes
    pub duration_mins: u32,

    /// Operators running the crossing
    pub operators: Vec<String>,

    /// Indicative price
    pub cost: CostEstimate,

    /// Straight-line km from the origin to the boarding terminal
    pub drive_to_port_km: f64,

    /// Straight-line km from the arrival terminal to the destination
    pub drive_from_port_km: f64,

    /// Estimated door-to-door hours
    pub estimated_hours: f64,
}

impl RankedCrossingResult {
    /// Create from a ranked crossing.
    pub fn from_ranked(ranked: &RankedCrossing<'_>) -> Self {
        let crossing = ranked.crossing;
        Self {
            id: crossing.id.clone(),
            name: crossing.name.clone(),
            mode: crossing.mode,
            embark: ranked.origin_terminal().clone(),
            disembark: ranked.destination_terminal().clone(),
            duration_mins: crossing.duration_mins,
            operators: crossing.operators.clone(),
            cost: crossing.cost.clone(),
            drive_to_port_km: round1(ranked.drive_to_port_km),
            drive_from_port_km: round1(ranked.drive_from_port_km),
            estimated_hours: round1(ranked.estimated_hours),
        }
    }
}

/// Response for crossing ranking.
#[derive(Debug, Serialize)]
pub struct RankCrossingsResponse {
    /// Whether the trip crosses between the UK/Ireland and the mainland
    pub needs_crossing: bool,

    /// Options, fastest first; empty when no crossing is needed
    pub crossings: Vec<RankedCrossingResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crossings::CrossingTable;
    use crate::domain::{StopRole, VehicleCategory};
    use crate::planner::{PlanRequest, plan_trip};

    #[test]
    fn limits_request_fields_are_optional() {
        let req: LimitsRequest = serde_json::from_str("{}").unwrap();
        assert!(req.vehicle.is_none());
        assert!(req.season.is_none());
        assert!(req.style.is_none());

        let req: LimitsRequest = serde_json::from_str(
            r#"{"vehicle": {"category": "caravan", "length_m": 6.5, "weight_kg": 1500},
                "season": "winter", "style": "relaxed"}"#,
        )
        .unwrap();
        assert_eq!(req.vehicle.unwrap().category, VehicleCategory::Caravan);
        assert_eq!(req.season, Some(Season::Winter));
        assert_eq!(req.style, Some(DrivingStyle::Relaxed));
    }

    #[test]
    fn plan_request_parses() {
        let json = r#"{
            "stops": [
                {"id": "1", "name": "Lyon", "coordinate": {"lat": 45.76, "lng": 4.84}, "role": "start"},
                {"id": "2", "name": "Nice", "coordinate": {"lat": 43.7, "lng": 7.27}, "role": "end"}
            ],
            "crossing_id": "dover-calais"
        }"#;
        let req: PlanItineraryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.stops.len(), 2);
        assert_eq!(req.stops[0].role, StopRole::Start);
        assert_eq!(req.crossing_id.as_deref(), Some("dover-calais"));
        assert!(req.settings.start_date.is_none());
    }

    #[test]
    fn plan_response_rounds_limits() {
        let stops = vec![
            Stop::new("1", "Lyon", Coordinate::new(45.76, 4.84).unwrap(), StopRole::Start),
            Stop::new("2", "Nice", Coordinate::new(43.7, 7.27).unwrap(), StopRole::End),
        ];
        let settings = TripSettings {
            season: Some(Season::Spring),
            ..TripSettings::default()
        };
        let trip = plan_trip(&PlanRequest::new(stops).with_settings(settings)).unwrap();
        let response = PlanItineraryResponse::from_trip(trip, None);
        assert_eq!(response.limits.max_daily_distance_km, 270.0);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["season"], "spring");
        assert!(json["crossing"].is_null());
        assert_eq!(json["itinerary"]["stages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn ranked_result_uses_travel_direction() {
        let table = CrossingTable::bundled().unwrap();
        let paris = Coordinate::new(48.85, 2.35).unwrap();
        let london = Coordinate::new(51.5, -0.1).unwrap();
        let ranked = table.rank(paris, london, None);
        let dover_calais = ranked
            .iter()
            .find(|r| r.crossing.id == "dover-calais")
            .unwrap();

        let result = RankedCrossingResult::from_ranked(dover_calais);
        assert_eq!(result.embark.country, "FR");
        assert_eq!(result.disembark.country, "GB");
        assert_eq!(result.duration_mins, 90);
    }

    #[test]
    fn rank_request_defaults_preference() {
        let req: RankCrossingsRequest = serde_json::from_str(
            r#"{"origin": {"lat": 51.5, "lng": -0.1}, "destination": {"lat": 48.85, "lng": 2.35}}"#,
        )
        .unwrap();
        assert_eq!(req.preference, CrossingPreference::Any);
        assert!(req.vehicle.is_none());
    }

    #[test]
    fn error_response_shape() {
        let body = ErrorResponse {
            error: "Add at least two stops to build a plan".into(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"error":"Add at least two stops to build a plan"}"#
        );
    }
}
