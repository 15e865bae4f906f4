//! Planner configuration.

/// Thresholds used by the stop planner, the feasibility scorer and the
/// recommendation rules.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Driving hours after which a lunch break is planned.
    pub lunch_after_hours: f64,

    /// Length of a lunch break (minutes).
    pub lunch_mins: u32,

    /// Driving hours after which extra rest stops are planned.
    pub rest_after_hours: f64,

    /// One rest stop per this many started hours beyond `rest_after_hours`.
    pub rest_every_hours: f64,

    /// Length of a rest stop (minutes).
    pub rest_mins: u32,

    /// Length of an overnight stop (minutes).
    pub overnight_mins: u32,

    /// Vehicles longer than this (metres) are penalised and warned about.
    pub large_vehicle_length_m: f64,

    /// Vehicles heavier than this (kilograms) get heavy-vehicle advice.
    pub heavy_vehicle_weight_kg: f64,

    /// Stops north of this latitude (degrees) count as arctic.
    pub arctic_latitude: f64,

    /// Average daily distance (km) above which rest days are recommended.
    pub long_average_day_km: f64,

    /// Trips longer than this many days get a small penalty.
    pub long_trip_days: u32,

    /// Trips longer than this many days get a larger penalty.
    pub very_long_trip_days: u32,

    /// Total distance (km) above which fuel budgeting is recommended.
    pub long_trip_km: f64,
}

impl PlannerConfig {
    /// Create a configuration with the given stop-planner parameters and
    /// default scoring thresholds.
    pub fn new(
        lunch_after_hours: f64,
        lunch_mins: u32,
        rest_after_hours: f64,
        rest_every_hours: f64,
        rest_mins: u32,
        overnight_mins: u32,
    ) -> Self {
        Self {
            lunch_after_hours,
            lunch_mins,
            rest_after_hours,
            rest_every_hours,
            rest_mins,
            overnight_mins,
            ..Self::default()
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            lunch_after_hours: 4.0,
            lunch_mins: 60,
            rest_after_hours: 6.0,
            rest_every_hours: 2.0,
            rest_mins: 30,
            overnight_mins: 600, // 10 hours
            large_vehicle_length_m: 8.0,
            heavy_vehicle_weight_kg: 3500.0,
            arctic_latitude: 65.0,
            long_average_day_km: 350.0,
            long_trip_days: 14,
            very_long_trip_days: 21,
            long_trip_km: 3000.0,
        }
    }
}
