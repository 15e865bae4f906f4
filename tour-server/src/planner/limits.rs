//! Daily driving limits.
//!
//! Limits start from a per-category base table and are scaled by season,
//! vehicle length and driving style. All multipliers compose
//! multiplicatively.

use serde::Serialize;

use crate::domain::{DrivingStyle, Season, VehicleCategory, VehicleProfile};

/// How far and how long a vehicle should drive in one day.
///
/// Values are kept at full precision; use [`DrivingLimits::rounded`] for
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrivingLimits {
    pub max_daily_distance_km: f64,
    pub max_daily_driving_hours: f64,
    pub recommended_break_interval_hours: f64,
    pub average_speed_kmh: f64,
}

impl DrivingLimits {
    /// Whole kilometres and one-decimal hours.
    pub fn rounded(&self) -> Self {
        Self {
            max_daily_distance_km: self.max_daily_distance_km.round(),
            max_daily_driving_hours: round1(self.max_daily_driving_hours),
            recommended_break_interval_hours: round1(self.recommended_break_interval_hours),
            average_speed_kmh: self.average_speed_kmh.round(),
        }
    }

    /// Hours needed to drive `km` at the average speed.
    pub fn driving_hours(&self, km: f64) -> f64 {
        km / self.average_speed_kmh
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Unscaled limits for a vehicle category.
#[derive(Debug, Clone, Copy)]
struct BaseLimits {
    km: f64,
    hours: f64,
    speed_kmh: f64,
    break_every_hours: f64,
}

fn base_limits(category: VehicleCategory) -> BaseLimits {
    match category {
        VehicleCategory::Campervan => BaseLimits {
            km: 350.0,
            hours: 7.0,
            speed_kmh: 75.0,
            break_every_hours: 2.5,
        },
        VehicleCategory::Motorhome => BaseLimits {
            km: 300.0,
            hours: 6.0,
            speed_kmh: 70.0,
            break_every_hours: 2.0,
        },
        // Also the fallback for unrecognised categories
        VehicleCategory::Caravan => BaseLimits {
            km: 250.0,
            hours: 5.5,
            speed_kmh: 65.0,
            break_every_hours: 2.0,
        },
    }
}

/// Multiplier applied to distance and hours for a season.
pub fn season_multiplier(season: Season) -> f64 {
    match season {
        Season::Summer => 1.0,
        Season::Spring => 0.9,
        Season::Autumn => 0.85,
        Season::Winter => 0.7,
    }
}

/// Multiplier applied to distance and hours for a vehicle length.
pub fn size_multiplier(length_m: f64) -> f64 {
    if length_m > 8.0 {
        0.8
    } else if length_m > 7.0 {
        0.9
    } else {
        1.0
    }
}

/// Distance and hour multipliers for a driving style, relative to moderate.
pub fn style_multipliers(style: DrivingStyle) -> (f64, f64) {
    let reference = DrivingStyle::Moderate.base_limits();
    let limits = style.base_limits();
    (
        limits.max_km_per_day / reference.max_km_per_day,
        limits.max_hours / reference.max_hours,
    )
}

/// Compute the daily driving limits for a vehicle, season and style.
///
/// # Examples
///
/// ```
/// use tour_server::domain::{DrivingStyle, Season, VehicleCategory, VehicleProfile};
/// use tour_server::planner::compute_limits;
///
/// let van = VehicleProfile::new(VehicleCategory::Motorhome, 6.5, 3500.0);
/// let limits = compute_limits(&van, Season::Summer, DrivingStyle::Moderate);
/// assert_eq!(limits.max_daily_distance_km, 300.0);
/// ```
pub fn compute_limits(
    vehicle: &VehicleProfile,
    season: Season,
    style: DrivingStyle,
) -> DrivingLimits {
    let base = base_limits(vehicle.category);
    let common = season_multiplier(season) * size_multiplier(vehicle.length_m);
    let (style_km, style_hours) = style_multipliers(style);

    let break_every = if season == Season::Winter {
        base.break_every_hours.min(1.5)
    } else {
        base.break_every_hours
    };

    DrivingLimits {
        max_daily_distance_km: base.km * common * style_km,
        max_daily_driving_hours: base.hours * common * style_hours,
        recommended_break_interval_hours: break_every,
        average_speed_kmh: base.speed_kmh,
    }
}
