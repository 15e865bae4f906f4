//! Greedy segmentation of a route into daily stages.
//!
//! Legs are packed into days in order. A leg that would push the current
//! day over the distance limit starts a new day instead. There is no
//! lookahead or rebalancing, so the final day can be much shorter than
//! the others. A single leg longer than the limit becomes a day on its
//! own and is left for the feasibility scorer to flag.

use crate::domain::{DailyStage, FeasibilityRating, Stop, ValidationError, validate_stops};
use crate::geo::{DistanceProvider, GreatCircle};

use super::limits::DrivingLimits;

/// Split `stops` into daily stages using great-circle leg distances.
///
/// # Errors
///
/// Returns [`ValidationError::InsufficientStops`] for fewer than two stops
/// and [`ValidationError::CoordinateOutOfRange`] for an invalid location.
pub fn segment(stops: &[Stop], limits: &DrivingLimits) -> Result<Vec<DailyStage>, ValidationError> {
    segment_with(stops, limits, &GreatCircle)
}

/// Split `stops` into daily stages using distances from `distances`.
pub fn segment_with<D: DistanceProvider>(
    stops: &[Stop],
    limits: &DrivingLimits,
    distances: &D,
) -> Result<Vec<DailyStage>, ValidationError> {
    validate_stops(stops)?;

    let legs = distances.legs_km(stops);
    let mut stages = Vec::new();

    // Index into `stops` where the current day starts
    let mut day_start = 0;
    let mut day_km = 0.0;

    for (i, &leg_km) in legs.iter().enumerate() {
        let day_has_legs = i > day_start;
        if day_has_legs && day_km + leg_km > limits.max_daily_distance_km {
            stages.push(close_day(
                stages.len() + 1,
                &stops[day_start..=i],
                day_km,
                limits,
            ));
            day_start = i;
            day_km = 0.0;
        }
        day_km += leg_km;
    }

    stages.push(close_day(
        stages.len() + 1,
        &stops[day_start..],
        day_km,
        limits,
    ));

    Ok(stages)
}

/// Build an unannotated stage from the stops it covers (at least two).
///
/// Rating and score are provisional until the feasibility scorer runs.
fn close_day(day: usize, stops: &[Stop], distance_km: f64, limits: &DrivingLimits) -> DailyStage {
    let last = stops.len() - 1;
    DailyStage {
        day: day as u32,
        start: stops[0].clone(),
        end: stops[last].clone(),
        distance_km,
        driving_hours: limits.driving_hours(distance_km),
        date: None,
        rating: FeasibilityRating::Excellent,
        score: 100.0,
        waypoints: stops[1..last].to_vec(),
        planned_stops: Vec::new(),
        warnings: Vec::new(),
        recommendations: Vec::new(),
    }
}
