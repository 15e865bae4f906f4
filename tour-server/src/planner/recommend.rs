//! Rule-based travel recommendations.
//!
//! Each rule pairs a predicate with a builder. Rules are evaluated in
//! table order and every rule that applies contributes one
//! recommendation; rules never suppress each other and the output is not
//! re-sorted by priority.

use crate::domain::{
    FeasibilityRating, Itinerary, PlanningRecommendation, Priority, RecommendationType, Season,
    VehicleProfile,
};

use super::config::PlannerConfig;
use super::feasibility::TripMetrics;

/// Everything a rule may inspect.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub itinerary: &'a Itinerary,
    pub metrics: &'a TripMetrics,
    pub season: Season,
    pub vehicle: &'a VehicleProfile,
    pub config: &'a PlannerConfig,
}

/// A recommendation rule.
pub struct Rule {
    /// Short identifier, used in logs
    pub name: &'static str,
    pub applies: fn(&RuleContext<'_>) -> bool,
    pub build: fn(&RuleContext<'_>) -> PlanningRecommendation,
}

/// The rules, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "large-vehicle",
        applies: large_vehicle,
        build: large_vehicle_advice,
    },
    Rule {
        name: "heavy-vehicle",
        applies: heavy_vehicle,
        build: heavy_vehicle_advice,
    },
    Rule {
        name: "winter",
        applies: winter,
        build: winter_advice,
    },
    Rule {
        name: "summer-heat",
        applies: summer,
        build: summer_advice,
    },
    Rule {
        name: "shoulder-season",
        applies: shoulder_season,
        build: shoulder_season_advice,
    },
    Rule {
        name: "long-average-day",
        applies: long_average_day,
        build: long_average_day_advice,
    },
    Rule {
        name: "unrealistic-day",
        applies: has_unrealistic_day,
        build: unrealistic_day_advice,
    },
    Rule {
        name: "no-rest-days",
        applies: long_trip_without_rest,
        build: no_rest_days_advice,
    },
    Rule {
        name: "fuel-budget",
        applies: long_distance,
        build: fuel_budget_advice,
    },
    Rule {
        name: "sea-crossing",
        applies: needs_crossing,
        build: crossing_advice,
    },
    Rule {
        name: "arctic",
        applies: arctic,
        build: arctic_advice,
    },
];

/// Evaluate every rule against the assembled plan.
pub fn generate(
    itinerary: &Itinerary,
    metrics: &TripMetrics,
    season: Season,
    vehicle: &VehicleProfile,
    config: &PlannerConfig,
) -> Vec<PlanningRecommendation> {
    let ctx = RuleContext {
        itinerary,
        metrics,
        season,
        vehicle,
        config,
    };
    evaluate(RULES, &ctx)
}

/// Evaluate an arbitrary rule table.
pub fn evaluate(rules: &[Rule], ctx: &RuleContext<'_>) -> Vec<PlanningRecommendation> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| {
            tracing::trace!(rule = rule.name, "recommendation rule fired");
            (rule.build)(ctx)
        })
        .collect()
}

fn recommendation(
    kind: RecommendationType,
    priority: Priority,
    title: &str,
    description: String,
    action: &str,
    impact: &str,
) -> PlanningRecommendation {
    PlanningRecommendation {
        kind,
        priority,
        title: title.to_string(),
        description,
        action: action.to_string(),
        impact: impact.to_string(),
    }
}

fn large_vehicle(ctx: &RuleContext<'_>) -> bool {
    ctx.vehicle.length_m > ctx.config.large_vehicle_length_m
}

fn large_vehicle_advice(ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Safety,
        Priority::High,
        "Check road restrictions",
        format!(
            "At {:.1} m your vehicle is barred from some mountain passes, old town centres and smaller campsites.",
            ctx.vehicle.length_m
        ),
        "Check length limits on passes and book pitches that accept large vehicles",
        "Avoids forced detours and turned-away arrivals",
    )
}

fn heavy_vehicle(ctx: &RuleContext<'_>) -> bool {
    ctx.vehicle.weight_kg > ctx.config.heavy_vehicle_weight_kg
}

fn heavy_vehicle_advice(ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Safety,
        Priority::Medium,
        "Heavy vehicle rules apply",
        format!(
            "Above {:.0} kg many countries apply lower speed limits, weight-based tolls and overtaking bans.",
            ctx.config.heavy_vehicle_weight_kg
        ),
        "Register for distance-based tolls where required and check your licence category",
        "Avoids fines and toll penalties",
    )
}

fn winter(ctx: &RuleContext<'_>) -> bool {
    ctx.season == Season::Winter
}

fn winter_advice(_ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Season,
        Priority::High,
        "Prepare for winter driving",
        "Daily limits have been reduced for short daylight hours and winter roads; some passes and campsites close.".to_string(),
        "Fit winter tyres, carry snow chains and protect the water system from freezing",
        "Keeps the vehicle usable and legal in snow conditions",
    )
}

fn summer(ctx: &RuleContext<'_>) -> bool {
    ctx.season == Season::Summer
}

fn summer_advice(_ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Comfort,
        Priority::Medium,
        "Plan around the heat",
        "Summer afternoons in southern Europe regularly exceed 35 °C and popular campsites fill early.".to_string(),
        "Drive early in the morning and book campsites with shade ahead of time",
        "Cooler, safer driving and a guaranteed pitch",
    )
}

fn shoulder_season(ctx: &RuleContext<'_>) -> bool {
    matches!(ctx.season, Season::Spring | Season::Autumn)
}

fn shoulder_season_advice(ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Timing,
        Priority::Low,
        "Check campsite opening dates",
        format!(
            "Many campsites close outside the main season; in {} some will not yet be open or have already closed.",
            ctx.season
        ),
        "Confirm opening dates for each overnight stop",
        "Avoids arriving at a closed site late in the day",
    )
}

fn long_average_day(ctx: &RuleContext<'_>) -> bool {
    ctx.itinerary.average_daily_distance_km() > ctx.config.long_average_day_km
}

fn long_average_day_advice(ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Comfort,
        Priority::Medium,
        "Add rest days",
        format!(
            "You are averaging {:.0} km per driving day.",
            ctx.itinerary.average_daily_distance_km()
        ),
        "Add a rest day every few driving days",
        "Reduces fatigue and leaves time to enjoy the stops",
    )
}

fn has_unrealistic_day(ctx: &RuleContext<'_>) -> bool {
    ctx.itinerary
        .stages
        .iter()
        .any(|s| s.rating == FeasibilityRating::Unrealistic)
}

fn unrealistic_day_advice(ctx: &RuleContext<'_>) -> PlanningRecommendation {
    let days: Vec<String> = ctx
        .itinerary
        .stages
        .iter()
        .filter(|s| s.rating == FeasibilityRating::Unrealistic)
        .map(|s| s.day.to_string())
        .collect();
    recommendation(
        RecommendationType::Safety,
        Priority::High,
        "Split overlong days",
        format!("Day {} exceeds the daily driving limit.", days.join(", ")),
        "Add an intermediate overnight stop on these days",
        "Brings every day within a safe driving distance",
    )
}

fn long_trip_without_rest(ctx: &RuleContext<'_>) -> bool {
    ctx.metrics.total_days > ctx.config.long_trip_days && ctx.itinerary.rest_days == 0
}

fn no_rest_days_advice(ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Comfort,
        Priority::Medium,
        "Schedule rest days",
        format!(
            "{} consecutive driving days with no break.",
            ctx.itinerary.driving_days()
        ),
        "Set a rest-day frequency in the trip settings",
        "Keeps the trip enjoyable over several weeks",
    )
}

fn long_distance(ctx: &RuleContext<'_>) -> bool {
    ctx.metrics.total_distance_km > ctx.config.long_trip_km
}

fn fuel_budget_advice(ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Cost,
        Priority::Medium,
        "Budget for fuel and tolls",
        format!(
            "{:.0} km is a long way; fuel and motorway tolls will be a large part of the trip cost.",
            ctx.metrics.total_distance_km
        ),
        "Compare toll and toll-free routes and fill up in lower-priced countries",
        "Lowers running costs",
    )
}

fn needs_crossing(ctx: &RuleContext<'_>) -> bool {
    ctx.itinerary.requires_crossing
}

fn crossing_advice(_ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Route,
        Priority::Medium,
        "Book your sea crossing",
        "The route crosses between the UK or Ireland and mainland Europe.".to_string(),
        "Compare ferry and tunnel options and book early for vehicle space",
        "Secures a sailing that fits the itinerary",
    )
}

fn arctic(ctx: &RuleContext<'_>) -> bool {
    ctx.metrics.max_latitude > ctx.config.arctic_latitude
}

fn arctic_advice(ctx: &RuleContext<'_>) -> PlanningRecommendation {
    recommendation(
        RecommendationType::Route,
        Priority::High,
        "Prepare for arctic conditions",
        format!(
            "The route reaches {:.1}° N, where services are sparse and weather changes quickly.",
            ctx.metrics.max_latitude
        ),
        "Carry spare fuel, food and warm clothing; check ferry and road opening times",
        "Keeps you self-sufficient on remote northern roads",
    )
}
