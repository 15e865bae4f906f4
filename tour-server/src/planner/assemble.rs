//! Itinerary assembly.
//!
//! Runs the whole pipeline for one set of inputs: limits, segmentation,
//! stage scoring, stop planning, trip scoring and recommendations. The
//! result is a fresh value; callers recompute rather than patch it.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::crossings::{CrossingPreference, needs_crossing};
use crate::domain::{
    DailyStage, DrivingStyle, Itinerary, PlanningRecommendation, Season, Stop, ValidationError,
    VehicleProfile,
};
use crate::geo::{DistanceProvider, GreatCircle};

use super::config::PlannerConfig;
use super::feasibility::{TripContext, TripMetrics, score_stage, score_trip};
use super::limits::{DrivingLimits, compute_limits};
use super::recommend::generate;
use super::segment::segment_with;
use super::stops::plan_stops;

/// Traveller preferences that shape the plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TripSettings {
    /// First day of driving
    pub start_date: Option<NaiveDate>,
    /// Explicit season; derived from `start_date` when absent
    pub season: Option<Season>,
    pub driving_style: DrivingStyle,
    /// A rest day after every this many driving days
    pub rest_day_frequency: Option<u32>,
    pub crossing_preference: CrossingPreference,
}

/// Everything needed to plan one trip.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// Ordered stops, first is the start and last the end
    pub stops: Vec<Stop>,
    /// Vehicle; a default motorhome is assumed when absent
    pub vehicle: Option<VehicleProfile>,
    pub settings: TripSettings,
}

impl PlanRequest {
    /// Create a request with default settings and no vehicle.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self {
            stops,
            vehicle: None,
            settings: TripSettings::default(),
        }
    }

    pub fn with_vehicle(mut self, vehicle: VehicleProfile) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    pub fn with_settings(mut self, settings: TripSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// The output of a planning pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedTrip {
    pub itinerary: Itinerary,
    pub recommendations: Vec<PlanningRecommendation>,
    /// Limits the itinerary was planned against
    pub limits: DrivingLimits,
    /// Season the limits were derived for
    pub season: Season,
    pub vehicle: VehicleProfile,
}

/// Trip planner.
///
/// Borrows its distance source and configuration; holds no state between
/// calls.
pub struct Planner<'a, D: DistanceProvider> {
    distances: &'a D,
    config: &'a PlannerConfig,
}

impl<'a, D: DistanceProvider> Planner<'a, D> {
    /// Create a planner.
    pub fn new(distances: &'a D, config: &'a PlannerConfig) -> Self {
        Self { distances, config }
    }

    /// Plan a trip.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the request has fewer than two
    /// stops or an out-of-range coordinate. No partial plan is produced.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlannedTrip, ValidationError> {
        let settings = &request.settings;
        let vehicle = request.vehicle.clone().unwrap_or_default();
        let season = Season::resolve(settings.season, settings.start_date);
        let limits = compute_limits(&vehicle, season, settings.driving_style);

        let mut stages = segment_with(&request.stops, &limits, self.distances)?;

        let rest_days = rest_days(stages.len() as u32, settings.rest_day_frequency);
        let last = stages.len() - 1;
        for (i, stage) in stages.iter_mut().enumerate() {
            annotate(stage, i == last, &limits, settings, self.config);
        }

        let metrics = TripMetrics::from_stages(&stages, rest_days);
        let assessment = score_trip(
            &metrics,
            &TripContext {
                limits: &limits,
                season,
                vehicle: &vehicle,
                config: self.config,
            },
        );

        let requires_crossing = match (request.stops.first(), request.stops.last()) {
            (Some(first), Some(last)) => needs_crossing(first.coordinate, last.coordinate),
            _ => false,
        };

        let itinerary = Itinerary {
            total_days: metrics.total_days,
            total_distance_km: metrics.total_distance_km,
            total_driving_hours: stages.iter().map(|s| s.driving_hours).sum(),
            stages,
            rest_days,
            rating: assessment.rating,
            score: assessment.score,
            warnings: assessment.warnings,
            requires_crossing,
        };

        let recommendations = generate(&itinerary, &metrics, season, &vehicle, self.config);

        tracing::debug!(
            stops = request.stops.len(),
            days = itinerary.total_days,
            distance_km = itinerary.total_distance_km,
            score = itinerary.score,
            rating = %itinerary.rating,
            recommendations = recommendations.len(),
            "planned trip"
        );

        Ok(PlannedTrip {
            itinerary,
            recommendations,
            limits,
            season,
            vehicle,
        })
    }
}

/// Plan a trip with great-circle distances and default configuration.
///
/// # Examples
///
/// ```
/// use tour_server::domain::{Coordinate, Stop, StopRole};
/// use tour_server::planner::{PlanRequest, plan_trip};
///
/// let stops = vec![
///     Stop::new("1", "Lyon", Coordinate::new(45.76, 4.84).unwrap(), StopRole::Start),
///     Stop::new("2", "Avignon", Coordinate::new(43.95, 4.81).unwrap(), StopRole::End),
/// ];
/// let trip = plan_trip(&PlanRequest::new(stops)).unwrap();
/// assert_eq!(trip.itinerary.stages.len(), 1);
/// ```
pub fn plan_trip(request: &PlanRequest) -> Result<PlannedTrip, ValidationError> {
    plan_trip_with(request, &GreatCircle)
}

/// Plan a trip with the given distance source and default configuration.
pub fn plan_trip_with<D: DistanceProvider>(
    request: &PlanRequest,
    distances: &D,
) -> Result<PlannedTrip, ValidationError> {
    let config = PlannerConfig::default();
    Planner::new(distances, &config).plan(request)
}

/// Score the stage, plan its stops and date it.
fn annotate(
    stage: &mut DailyStage,
    is_last: bool,
    limits: &DrivingLimits,
    settings: &TripSettings,
    config: &PlannerConfig,
) {
    let assessment = score_stage(stage, limits);
    stage.rating = assessment.rating;
    stage.score = assessment.score;
    stage.warnings = assessment.warnings;
    stage.recommendations = assessment.recommendations;
    stage.planned_stops = plan_stops(stage, is_last, config);
    stage.date = settings
        .start_date
        .and_then(|start| stage_date(start, stage.day, settings.rest_day_frequency));
}

/// Rest days taken between `driving_days` days of driving.
fn rest_days(driving_days: u32, frequency: Option<u32>) -> u32 {
    match frequency {
        Some(every) if every > 0 && driving_days > 0 => (driving_days - 1) / every,
        _ => 0,
    }
}

/// Calendar date of a driving day, counting rest days taken before it.
fn stage_date(start: NaiveDate, day: u32, frequency: Option<u32>) -> Option<NaiveDate> {
    let offset = (day - 1) + rest_days(day, frequency);
    start.checked_add_days(Days::new(u64::from(offset)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rest_day_counts() {
        assert_eq!(rest_days(1, Some(3)), 0);
        assert_eq!(rest_days(3, Some(3)), 0);
        assert_eq!(rest_days(4, Some(3)), 1);
        assert_eq!(rest_days(7, Some(3)), 2);
        assert_eq!(rest_days(10, None), 0);
        assert_eq!(rest_days(10, Some(0)), 0);
        assert_eq!(rest_days(0, Some(2)), 0);
    }

    #[test]
    fn dates_skip_rest_days() {
        let start = date(2024, 5, 1);
        assert_eq!(stage_date(start, 1, Some(2)), Some(date(2024, 5, 1)));
        assert_eq!(stage_date(start, 2, Some(2)), Some(date(2024, 5, 2)));
        // Rest day on the 3rd
        assert_eq!(stage_date(start, 3, Some(2)), Some(date(2024, 5, 4)));
        assert_eq!(stage_date(start, 4, Some(2)), Some(date(2024, 5, 5)));
        assert_eq!(stage_date(start, 5, Some(2)), Some(date(2024, 5, 7)));
    }

    #[test]
    fn dates_without_rest_days_are_consecutive() {
        let start = date(2024, 12, 30);
        assert_eq!(stage_date(start, 3, None), Some(date(2025, 1, 1)));
    }

    #[test]
    fn settings_deserialize_with_defaults() {
        let s: TripSettings = serde_json::from_str("{}").unwrap();
        assert!(s.start_date.is_none());
        assert_eq!(s.driving_style, DrivingStyle::Moderate);
        assert_eq!(s.crossing_preference, CrossingPreference::Any);

        let s: TripSettings = serde_json::from_str(
            r#"{"start_date": "2024-09-14", "driving_style": "relaxed", "rest_day_frequency": 3}"#,
        )
        .unwrap();
        assert_eq!(s.start_date, Some(date(2024, 9, 14)));
        assert_eq!(s.driving_style, DrivingStyle::Relaxed);
        assert_eq!(s.rest_day_frequency, Some(3));
    }
}
