//! Web layer for the touring itinerary planner.
//!
//! JSON endpoints for driving limits, itinerary planning and crossing
//! selection.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
