//! Ranking crossings by estimated travel time.
//!
//! The estimate is the great-circle drive from the origin to the port,
//! plus the crossing itself, plus the drive from the far port to the
//! destination. Road legs assume a flat average speed.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, VehicleProfile};
use crate::geo::distance_km;

use super::region::{Region, classify};
use super::table::{ChannelCrossing, CrossingMode, CrossingTable, Terminal};

/// Average road speed assumed for drives to and from the ports (km/h).
pub const ROAD_SPEED_KMH: f64 = 80.0;

/// The traveller's preferred way across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossingPreference {
    #[default]
    Any,
    Ferry,
    Tunnel,
}

impl CrossingPreference {
    /// Whether a crossing of this mode is acceptable.
    pub fn allows(&self, mode: CrossingMode) -> bool {
        match self {
            CrossingPreference::Any => true,
            CrossingPreference::Ferry => mode == CrossingMode::Ferry,
            CrossingPreference::Tunnel => mode == CrossingMode::Tunnel,
        }
    }
}

/// A crossing with its estimated door-to-door time for one trip.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCrossing<'a> {
    pub crossing: &'a ChannelCrossing,
    /// True when the trip uses the crossing from arrival to departure
    pub reversed: bool,
    /// Great-circle km from the origin to the embarkation terminal
    pub drive_to_port_km: f64,
    /// Great-circle km from the disembarkation terminal to the destination
    pub drive_from_port_km: f64,
    /// Road time plus crossing time
    pub estimated_hours: f64,
}

impl<'a> RankedCrossing<'a> {
    /// Evaluate one crossing for a trip from `origin` to `destination`.
    pub fn evaluate(crossing: &'a ChannelCrossing, origin: Coordinate, destination: Coordinate) -> Self {
        let reversed = is_reversed(crossing, origin);
        let (embark, disembark) = if reversed {
            (&crossing.arrival, &crossing.departure)
        } else {
            (&crossing.departure, &crossing.arrival)
        };

        let drive_to_port_km = distance_km(origin, embark.coordinate);
        let drive_from_port_km = distance_km(disembark.coordinate, destination);
        let estimated_hours =
            (drive_to_port_km + drive_from_port_km) / ROAD_SPEED_KMH + crossing.duration_hours();

        Self {
            crossing,
            reversed,
            drive_to_port_km,
            drive_from_port_km,
            estimated_hours,
        }
    }

    /// Terminal where the vehicle boards.
    pub fn origin_terminal(&self) -> &'a Terminal {
        if self.reversed {
            &self.crossing.arrival
        } else {
            &self.crossing.departure
        }
    }

    /// Terminal where the vehicle leaves.
    pub fn destination_terminal(&self) -> &'a Terminal {
        if self.reversed {
            &self.crossing.departure
        } else {
            &self.crossing.arrival
        }
    }
}

/// Whether the origin is on the crossing's arrival side.
///
/// Uses the origin's region when it has one; otherwise the nearer
/// terminal is taken as the origin side.
fn is_reversed(crossing: &ChannelCrossing, origin: Coordinate) -> bool {
    match classify(origin) {
        region @ (Region::UkIreland | Region::Mainland) => crossing.departure.side() != region,
        Region::Other => {
            distance_km(origin, crossing.arrival.coordinate)
                < distance_km(origin, crossing.departure.coordinate)
        }
    }
}

/// Rank crossings by estimated total travel time, fastest first.
///
/// With a vehicle, crossings that cannot carry it are removed before
/// ranking. The sort is stable: equal estimates keep table order.
pub fn rank<'a>(
    crossings: &'a [ChannelCrossing],
    origin: Coordinate,
    destination: Coordinate,
    vehicle: Option<&VehicleProfile>,
) -> Vec<RankedCrossing<'a>> {
    let mut ranked: Vec<RankedCrossing<'a>> = crossings
        .iter()
        .filter(|c| vehicle.is_none_or(|v| c.accepts(v)))
        .map(|c| RankedCrossing::evaluate(c, origin, destination))
        .collect();

    ranked.sort_by(|a, b| a.estimated_hours.total_cmp(&b.estimated_hours));
    ranked
}

/// Keep only crossings matching a mode preference, preserving order.
pub fn apply_preference(
    ranked: Vec<RankedCrossing<'_>>,
    preference: CrossingPreference,
) -> Vec<RankedCrossing<'_>> {
    ranked
        .into_iter()
        .filter(|r| preference.allows(r.crossing.mode))
        .collect()
}

impl CrossingTable {
    /// Rank this table's crossings for a trip.
    pub fn rank(
        &self,
        origin: Coordinate,
        destination: Coordinate,
        vehicle: Option<&VehicleProfile>,
    ) -> Vec<RankedCrossing<'_>> {
        rank(self.all(), origin, destination, vehicle)
    }
}
