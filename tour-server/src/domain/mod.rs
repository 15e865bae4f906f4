//! Domain types for the touring itinerary planner.
//!
//! This module contains the core value types the planning engine consumes
//! and produces. Types that carry invariants check them at construction,
//! so code that receives them can trust their validity.

mod coordinate;
mod error;
mod itinerary;
mod recommendation;
mod season;
mod stop;
mod vehicle;

pub use coordinate::Coordinate;
pub use error::ValidationError;
pub use itinerary::{DailyStage, FeasibilityRating, Itinerary, PlannedStop, PlannedStopKind};
pub use recommendation::{PlanningRecommendation, Priority, RecommendationType};
pub use season::{DrivingStyle, Season, StyleLimits};
pub use stop::{Stop, StopRole, validate_stops};
pub use vehicle::{VehicleCategory, VehicleProfile};
