//! Itinerary types.
//!
//! An `Itinerary` is the root output of the planning engine: an ordered
//! list of daily stages plus trip-level totals and a feasibility verdict.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Stop;

/// Four-tier verdict on how realistic a stage or trip is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeasibilityRating {
    Excellent,
    Good,
    Challenging,
    Unrealistic,
}

impl FeasibilityRating {
    /// Rate a planned-to-allowed distance ratio.
    ///
    /// ≤0.7 is excellent, ≤0.9 good, ≤1.1 challenging, anything above
    /// unrealistic.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 0.7 {
            FeasibilityRating::Excellent
        } else if ratio <= 0.9 {
            FeasibilityRating::Good
        } else if ratio <= 1.1 {
            FeasibilityRating::Challenging
        } else {
            FeasibilityRating::Unrealistic
        }
    }

    /// Rate a 0–100 feasibility score.
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            FeasibilityRating::Excellent
        } else if score >= 70.0 {
            FeasibilityRating::Good
        } else if score >= 50.0 {
            FeasibilityRating::Challenging
        } else {
            FeasibilityRating::Unrealistic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeasibilityRating::Excellent => "excellent",
            FeasibilityRating::Good => "good",
            FeasibilityRating::Challenging => "challenging",
            FeasibilityRating::Unrealistic => "unrealistic",
        }
    }
}

impl fmt::Display for FeasibilityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a stop planned within a driving day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlannedStopKind {
    Lunch,
    Rest,
    Overnight,
}

/// A recommended pause within a day's drive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedStop {
    /// What the stop is for
    pub kind: PlannedStopKind,
    /// Recommended length of the stop
    pub duration_mins: u32,
    /// Driving hours into the stage at which to stop
    pub after_driving_hours: f64,
    /// Short justification shown to the traveller
    pub reason: String,
}

/// One day of driving.
///
/// Created by the segmenter, then annotated by the feasibility scorer and
/// stop planner before the itinerary is assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyStage {
    /// 1-based day number among driving days
    pub day: u32,
    /// Where the day starts
    pub start: Stop,
    /// Where the day ends
    pub end: Stop,
    /// Kilometres driven
    pub distance_km: f64,
    /// Hours behind the wheel
    pub driving_hours: f64,
    /// Calendar date, when the trip has a start date
    pub date: Option<NaiveDate>,
    /// Feasibility rating of this day
    pub rating: FeasibilityRating,
    /// Feasibility score of this day, 0–100
    pub score: f64,
    /// Interior waypoints passed during the day
    pub waypoints: Vec<Stop>,
    /// Planned meal, rest and overnight stops
    pub planned_stops: Vec<PlannedStop>,
    /// Problems with this day
    pub warnings: Vec<String>,
    /// Suggestions for this day
    pub recommendations: Vec<String>,
}

impl DailyStage {
    /// Number of legs driven on this day.
    pub fn leg_count(&self) -> usize {
        self.waypoints.len() + 1
    }
}

/// A complete day-by-day trip plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itinerary {
    /// Driving days, in order
    pub stages: Vec<DailyStage>,
    /// Driving days plus rest days
    pub total_days: u32,
    /// Sum of stage distances
    pub total_distance_km: f64,
    /// Sum of stage driving hours
    pub total_driving_hours: f64,
    /// Designated rest days between driving days
    pub rest_days: u32,
    /// Trip-level feasibility rating
    pub rating: FeasibilityRating,
    /// Trip-level feasibility score, 0–100
    pub score: f64,
    /// Trip-level problems
    pub warnings: Vec<String>,
    /// Whether the first and last stops sit on opposite sides of a sea crossing
    pub requires_crossing: bool,
}

impl Itinerary {
    /// Number of driving days.
    pub fn driving_days(&self) -> u32 {
        self.stages.len() as u32
    }

    /// Mean distance per driving day.
    pub fn average_daily_distance_km(&self) -> f64 {
        if self.stages.is_empty() {
            0.0
        } else {
            self.total_distance_km / self.stages.len() as f64
        }
    }

    /// Iterate over every stop the itinerary visits, in order.
    ///
    /// Shared endpoints between consecutive stages are yielded once.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        let first = self.stages.first().map(|s| &s.start);
        first.into_iter().chain(
            self.stages
                .iter()
                .flat_map(|s| s.waypoints.iter().chain(std::iter::once(&s.end))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_thresholds() {
        assert_eq!(FeasibilityRating::from_ratio(0.0), FeasibilityRating::Excellent);
        assert_eq!(FeasibilityRating::from_ratio(0.7), FeasibilityRating::Excellent);
        assert_eq!(FeasibilityRating::from_ratio(0.71), FeasibilityRating::Good);
        assert_eq!(FeasibilityRating::from_ratio(0.9), FeasibilityRating::Good);
        assert_eq!(FeasibilityRating::from_ratio(0.95), FeasibilityRating::Challenging);
        assert_eq!(FeasibilityRating::from_ratio(1.1), FeasibilityRating::Challenging);
        assert_eq!(FeasibilityRating::from_ratio(1.11), FeasibilityRating::Unrealistic);
    }

    #[test]
    fn score_thresholds() {
        assert_eq!(FeasibilityRating::from_score(100.0), FeasibilityRating::Excellent);
        assert_eq!(FeasibilityRating::from_score(85.0), FeasibilityRating::Excellent);
        assert_eq!(FeasibilityRating::from_score(84.9), FeasibilityRating::Good);
        assert_eq!(FeasibilityRating::from_score(70.0), FeasibilityRating::Good);
        assert_eq!(FeasibilityRating::from_score(50.0), FeasibilityRating::Challenging);
        assert_eq!(FeasibilityRating::from_score(49.0), FeasibilityRating::Unrealistic);
    }

    #[test]
    fn ratings_order_from_best_to_worst() {
        assert!(FeasibilityRating::Excellent < FeasibilityRating::Good);
        assert!(FeasibilityRating::Challenging < FeasibilityRating::Unrealistic);
    }

    #[test]
    fn rating_display() {
        assert_eq!(FeasibilityRating::Challenging.to_string(), "challenging");
        assert_eq!(
            serde_json::to_string(&FeasibilityRating::Unrealistic).unwrap(),
            "\"unrealistic\""
        );
    }
}
