//! In-stage stop planning.
//!
//! Rule-based: a lunch break for days over the lunch threshold, extra
//! rest stops for days over the rest threshold, and an overnight stop at
//! the end of every day except the last.

use crate::domain::{DailyStage, PlannedStopKind, PlannedStop};

use super::config::PlannerConfig;

/// Plan the stops within one day of driving.
///
/// Entries are ordered by when they occur in the drive.
pub fn plan_stops(stage: &DailyStage, is_last: bool, config: &PlannerConfig) -> Vec<PlannedStop> {
    let hours = stage.driving_hours;
    let mut stops = Vec::new();

    let mut lunch_at = 0.0;
    if hours > config.lunch_after_hours {
        lunch_at = hours / 2.0;
        stops.push(PlannedStop {
            kind: PlannedStopKind::Lunch,
            duration_mins: config.lunch_mins,
            after_driving_hours: lunch_at,
            reason: format!(
                "Over {:.0} hours of driving; stop for a proper meal",
                config.lunch_after_hours
            ),
        });
    }

    if hours > config.rest_after_hours {
        let over = hours - config.rest_after_hours;
        let count = (over / config.rest_every_hours).ceil() as u32;
        let remaining = hours - lunch_at;
        for k in 1..=count {
            stops.push(PlannedStop {
                kind: PlannedStopKind::Rest,
                duration_mins: config.rest_mins,
                after_driving_hours: lunch_at + remaining * f64::from(k) / f64::from(count + 1),
                reason: format!(
                    "{:.1} hours of driving is a long day; rest to stay alert",
                    hours
                ),
            });
        }
    }

    if !is_last {
        stops.push(PlannedStop {
            kind: PlannedStopKind::Overnight,
            duration_mins: config.overnight_mins,
            after_driving_hours: hours,
            reason: format!("Overnight at {} before day {}", stage.end.name, stage.day + 1),
        });
    }

    stops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, FeasibilityRating, Stop, StopRole};

    fn stage(hours: f64) -> DailyStage {
        let stop = |name: &str| {
            Stop::new(name, name, Coordinate::new(47.0, 8.0).unwrap(), StopRole::Intermediate)
        };
        DailyStage {
            day: 3,
            start: stop("Lucerne"),
            end: stop("Como"),
            distance_km: hours * 70.0,
            driving_hours: hours,
            date: None,
            rating: FeasibilityRating::Excellent,
            score: 100.0,
            waypoints: vec![],
            planned_stops: vec![],
            warnings: vec![],
            recommendations: vec![],
        }
    }

    fn kinds(stops: &[PlannedStop]) -> Vec<PlannedStopKind> {
        stops.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn short_day_gets_only_overnight() {
        let stops = plan_stops(&stage(3.0), false, &PlannerConfig::default());
        assert_eq!(kinds(&stops), vec![PlannedStopKind::Overnight]);
        assert_eq!(stops[0].duration_mins, 600);
        assert_eq!(stops[0].after_driving_hours, 3.0);
        assert_eq!(stops[0].reason, "Overnight at Como before day 4");
    }

    #[test]
    fn last_day_has_no_overnight() {
        let stops = plan_stops(&stage(3.0), true, &PlannerConfig::default());
        assert!(stops.is_empty());
    }

    #[test]
    fn lunch_after_four_hours() {
        let stops = plan_stops(&stage(5.0), true, &PlannerConfig::default());
        assert_eq!(kinds(&stops), vec![PlannedStopKind::Lunch]);
        assert_eq!(stops[0].duration_mins, 60);
        assert_eq!(stops[0].after_driving_hours, 2.5);
    }

    #[test]
    fn exactly_four_hours_needs_no_lunch() {
        let stops = plan_stops(&stage(4.0), true, &PlannerConfig::default());
        assert!(stops.is_empty());
    }

    #[test]
    fn rest_stops_scale_with_hours_over_threshold() {
        let config = PlannerConfig::default();

        let stops = plan_stops(&stage(7.0), true, &config);
        assert_eq!(kinds(&stops), vec![PlannedStopKind::Lunch, PlannedStopKind::Rest]);

        let stops = plan_stops(&stage(10.5), false, &config);
        assert_eq!(
            kinds(&stops),
            vec![
                PlannedStopKind::Lunch,
                PlannedStopKind::Rest,
                PlannedStopKind::Rest,
                PlannedStopKind::Rest,
                PlannedStopKind::Overnight,
            ]
        );
        assert!(stops.iter().filter(|s| s.kind == PlannedStopKind::Rest).all(|s| s.duration_mins == 30));
    }

    #[test]
    fn stops_are_in_driving_order() {
        let stops = plan_stops(&stage(12.0), false, &PlannerConfig::default());
        for pair in stops.windows(2) {
            assert!(pair[0].after_driving_hours <= pair[1].after_driving_hours);
        }
        assert!(stops.iter().all(|s| s.after_driving_hours <= 12.0));
    }
}
