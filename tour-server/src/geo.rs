//! Great-circle distances between stops.
//!
//! The engine does not call a road-routing backend. Leg distances come
//! from a [`DistanceProvider`]: by default the haversine great-circle
//! distance, optionally overridden leg-by-leg with routed distances the
//! caller already has.

use crate::domain::{Coordinate, Stop};

/// Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine great-circle distance between two coordinates, in kilometres.
///
/// # Examples
///
/// ```
/// use tour_server::domain::Coordinate;
/// use tour_server::geo::distance_km;
///
/// let london = Coordinate::new(51.5, -0.1).unwrap();
/// let paris = Coordinate::new(48.85, 2.35).unwrap();
/// let d = distance_km(london, paris);
/// assert!((d - 340.0).abs() < 10.0);
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let delta_lat = (b.lat() - a.lat()).to_radians();
    let delta_lng = (b.lng() - a.lng()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

/// Source of leg distances for segmentation.
///
/// This abstraction lets a caller with routed distances substitute them
/// without the engine needing network access.
pub trait DistanceProvider {
    /// Distance in kilometres of the leg between two consecutive stops.
    fn leg_km(&self, from: &Stop, to: &Stop) -> f64;

    /// Distances of every consecutive leg in `stops`.
    fn legs_km(&self, stops: &[Stop]) -> Vec<f64> {
        stops
            .windows(2)
            .map(|pair| self.leg_km(&pair[0], &pair[1]))
            .collect()
    }
}

/// Great-circle leg distances.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircle;

impl DistanceProvider for GreatCircle {
    fn leg_km(&self, from: &Stop, to: &Stop) -> f64 {
        distance_km(from.coordinate, to.coordinate)
    }
}

impl<D: DistanceProvider + ?Sized> DistanceProvider for &D {
    fn leg_km(&self, from: &Stop, to: &Stop) -> f64 {
        (**self).leg_km(from, to)
    }
}

/// Routed distances keyed by the ids of a leg's endpoints.
///
/// Legs without a routed distance fall back to great-circle.
#[derive(Debug, Clone, Default)]
pub struct RoutedLegs {
    routed: std::collections::HashMap<(String, String), f64>,
}

impl RoutedLegs {
    /// Create an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the routed distance from one stop to the next.
    pub fn insert(&mut self, from_id: impl Into<String>, to_id: impl Into<String>, km: f64) {
        self.routed.insert((from_id.into(), to_id.into()), km);
    }

    /// Number of routed legs recorded.
    pub fn len(&self) -> usize {
        self.routed.len()
    }

    /// Returns true if no routed legs are recorded.
    pub fn is_empty(&self) -> bool {
        self.routed.is_empty()
    }
}

impl DistanceProvider for RoutedLegs {
    fn leg_km(&self, from: &Stop, to: &Stop) -> f64 {
        self.routed
            .get(&(from.id.clone(), to.id.clone()))
            .copied()
            .unwrap_or_else(|| GreatCircle.leg_km(from, to))
    }
}
