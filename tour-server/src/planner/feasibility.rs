//! Feasibility scoring for stages and whole trips.
//!
//! A stage is rated by the ratio of its distance to the daily limit. A
//! trip starts at 100 points and loses points for long average legs,
//! harsh seasons, large vehicles, long durations and arctic latitudes.

use serde::Serialize;

use crate::domain::{DailyStage, FeasibilityRating, Season, VehicleProfile};

use super::config::PlannerConfig;
use super::limits::DrivingLimits;

/// Verdict on a single day of driving.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageAssessment {
    pub rating: FeasibilityRating,
    pub score: f64,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Verdict on a whole trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripAssessment {
    pub rating: FeasibilityRating,
    pub score: f64,
    pub warnings: Vec<String>,
}

/// Aggregate figures the trip scorer and recommendation rules work from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TripMetrics {
    pub total_distance_km: f64,
    /// Legs between consecutive stops
    pub leg_count: u32,
    /// Driving days plus rest days
    pub total_days: u32,
    /// Northernmost latitude on the route
    pub max_latitude: f64,
}

impl TripMetrics {
    /// Compute metrics from segmented stages and a rest-day count.
    pub fn from_stages(stages: &[DailyStage], rest_days: u32) -> Self {
        let max_latitude = stages
            .iter()
            .flat_map(|s| {
                std::iter::once(&s.start)
                    .chain(s.waypoints.iter())
                    .chain(std::iter::once(&s.end))
            })
            .map(|stop| stop.coordinate.lat())
            .fold(f64::NEG_INFINITY, f64::max);

        Self {
            total_distance_km: stages.iter().map(|s| s.distance_km).sum(),
            leg_count: stages.iter().map(|s| s.leg_count() as u32).sum(),
            total_days: stages.len() as u32 + rest_days,
            max_latitude,
        }
    }

    /// Mean distance per leg.
    ///
    /// Depends only on the stops, not on how the legs were packed into
    /// days, so it grows whenever any leg grows.
    pub fn average_leg_km(&self) -> f64 {
        if self.leg_count == 0 {
            0.0
        } else {
            self.total_distance_km / self.leg_count as f64
        }
    }
}

/// What the trip is being planned with.
#[derive(Debug, Clone, Copy)]
pub struct TripContext<'a> {
    pub limits: &'a DrivingLimits,
    pub season: Season,
    pub vehicle: &'a VehicleProfile,
    pub config: &'a PlannerConfig,
}

/// Points lost for a planned-to-allowed distance ratio.
fn distance_penalty(ratio: f64) -> f64 {
    if ratio > 1.2 {
        40.0
    } else if ratio > 1.0 {
        20.0
    } else if ratio > 0.9 {
        10.0
    } else {
        0.0
    }
}

fn distance_ratio(km: f64, limits: &DrivingLimits) -> f64 {
    if limits.max_daily_distance_km > 0.0 {
        km / limits.max_daily_distance_km
    } else {
        f64::INFINITY
    }
}

/// Score one day of driving against the limits.
pub fn score_stage(stage: &DailyStage, limits: &DrivingLimits) -> StageAssessment {
    let ratio = distance_ratio(stage.distance_km, limits);
    let rating = FeasibilityRating::from_ratio(ratio);
    let score = (100.0 - distance_penalty(ratio)).clamp(0.0, 100.0);

    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();

    match rating {
        FeasibilityRating::Challenging => warnings.push(format!(
            "Long day: {:.0} km is close to the {:.0} km daily limit",
            stage.distance_km, limits.max_daily_distance_km
        )),
        FeasibilityRating::Unrealistic => {
            warnings.push(format!(
                "{:.0} km exceeds the {:.0} km daily limit",
                stage.distance_km, limits.max_daily_distance_km
            ));
            if stage.leg_count() == 1 {
                recommendations.push(format!(
                    "Add an overnight stop between {} and {}",
                    stage.start.name, stage.end.name
                ));
            }
        }
        FeasibilityRating::Excellent | FeasibilityRating::Good => {}
    }

    if stage.driving_hours > limits.max_daily_driving_hours {
        warnings.push(format!(
            "Driving time of {:.1} h exceeds the recommended {:.1} h",
            stage.driving_hours, limits.max_daily_driving_hours
        ));
    }

    if stage.driving_hours > limits.recommended_break_interval_hours {
        recommendations.push(format!(
            "Take a break at least every {:.1} hours of driving",
            limits.recommended_break_interval_hours
        ));
    }

    StageAssessment {
        rating,
        score,
        warnings,
        recommendations,
    }
}

/// Score a whole trip.
///
/// The score is always within `[0, 100]`. The distance penalty compares
/// the mean leg with the daily limit; with the stops held fixed the
/// score never increases as total distance grows.
pub fn score_trip(metrics: &TripMetrics, context: &TripContext<'_>) -> TripAssessment {
    let config = context.config;
    let mut score = 100.0;
    let mut warnings = Vec::new();

    let ratio = distance_ratio(metrics.average_leg_km(), context.limits);
    score -= distance_penalty(ratio);
    if ratio > 1.0 {
        warnings.push("Daily distances exceed recommended limits".to_string());
    } else if ratio > 0.9 {
        warnings.push("Daily distances are close to recommended limits".to_string());
    }

    match context.season {
        Season::Winter => {
            score -= 15.0;
            warnings.push("Winter travel conditions apply".to_string());
        }
        Season::Autumn => {
            score -= 5.0;
            warnings.push("Autumn weather and shorter days may slow travel".to_string());
        }
        Season::Spring | Season::Summer => {}
    }

    if context.vehicle.length_m > config.large_vehicle_length_m {
        score -= 10.0;
        warnings.push(format!(
            "Vehicles over {:.0} m face road and campsite restrictions",
            config.large_vehicle_length_m
        ));
    }

    if metrics.total_days > config.very_long_trip_days {
        score -= 10.0;
        warnings.push(format!(
            "Trips over {} days are tiring; plan extra rest days",
            config.very_long_trip_days
        ));
    } else if metrics.total_days > config.long_trip_days {
        score -= 5.0;
        warnings.push(format!(
            "Trips over {} days benefit from regular rest days",
            config.long_trip_days
        ));
    }

    if metrics.max_latitude > config.arctic_latitude {
        score -= 15.0;
        warnings.push("Route reaches arctic latitudes".to_string());
    }

    let score = f64::clamp(score, 0.0, 100.0);

    TripAssessment {
        rating: FeasibilityRating::from_score(score),
        score,
        warnings,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::VehicleCategory;
    use proptest::prelude::*;

    fn any_season() -> impl Strategy<Value = Season> {
        prop_oneof![
            Just(Season::Spring),
            Just(Season::Summer),
            Just(Season::Autumn),
            Just(Season::Winter),
        ]
    }

    fn assess(km: f64, days: u32, lat: f64, len: f64, season: Season) -> TripAssessment {
        let config = PlannerConfig::default();
        let limits = DrivingLimits {
            max_daily_distance_km: 300.0,
            max_daily_driving_hours: 6.0,
            recommended_break_interval_hours: 2.0,
            average_speed_kmh: 70.0,
        };
        let vehicle = VehicleProfile::new(VehicleCategory::Motorhome, len, 3500.0);
        score_trip(
            &TripMetrics {
                total_distance_km: km,
                leg_count: days,
                total_days: days,
                max_latitude: lat,
            },
            &TripContext {
                limits: &limits,
                season,
                vehicle: &vehicle,
                config: &config,
            },
        )
    }

    proptest! {
        /// Score always lies in [0, 100]
        #[test]
        fn score_bounded(
            km in 0.0f64..100_000.0,
            days in 1u32..60,
            lat in -90.0f64..90.0,
            len in 2.0f64..20.0,
            season in any_season(),
        ) {
            let a = assess(km, days, lat, len, season);
            prop_assert!((0.0..=100.0).contains(&a.score));
        }

        /// More distance over the same legs never raises the score
        #[test]
        fn monotonic_in_distance(
            km in 0.0f64..20_000.0,
            extra in 0.0f64..5_000.0,
            days in 1u32..40,
            season in any_season(),
        ) {
            let shorter = assess(km, days, 50.0, 7.0, season);
            let longer = assess(km + extra, days, 50.0, 7.0, season);
            prop_assert!(longer.score <= shorter.score);
        }
    }
}
