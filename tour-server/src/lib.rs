//! Touring itinerary planner server.
//!
//! Plans multi-day road trips for motorhomes, caravans and campervans:
//! splits a route into daily stages within the vehicle's driving limits,
//! rates each day and the whole trip, and picks a sea crossing when the
//! route runs between the UK or Ireland and mainland Europe.

pub mod crossings;
pub mod domain;
pub mod geo;
pub mod planner;
pub mod web;
