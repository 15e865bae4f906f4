//! The itinerary planning engine.
//!
//! Given an ordered list of stops, a vehicle and trip settings, the
//! planner splits the route into daily stages, rates how realistic each
//! day and the whole trip are, plans breaks within each day and produces
//! travel recommendations.
//!
//! Every operation is a pure function of its inputs.

mod assemble;
mod config;
mod feasibility;
mod limits;
mod recommend;
mod segment;
mod stops;


pub use assemble::{PlanRequest, PlannedTrip, Planner, TripSettings, plan_trip, plan_trip_with};
pub use config::PlannerConfig;
pub use feasibility::{
    StageAssessment, TripAssessment, TripContext, TripMetrics, score_stage, score_trip,
};
pub use limits::{
    DrivingLimits, compute_limits, season_multiplier, size_multiplier, style_multipliers,
};
pub use recommend::{RULES, Rule, RuleContext, evaluate, generate};
pub use segment::{segment, segment_with};
pub use stops::plan_stops;
