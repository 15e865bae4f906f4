//! Geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A point on the Earth's surface in signed decimal degrees.
///
/// `Coordinate::new` enforces the valid ranges; `Coordinate::unchecked`
/// exists for the bundled reference data, whose values are checked when
/// the table is loaded.
///
/// # Examples
///
/// ```
/// use tour_server::domain::Coordinate;
///
/// let paris = Coordinate::new(48.85, 2.35).unwrap();
/// assert_eq!(paris.lat(), 48.85);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, -181.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Create a coordinate, validating lat ∈ [-90, 90] and lng ∈ [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        let coord = Self { lat, lng };
        coord.validate()?;
        Ok(coord)
    }

    /// Create a coordinate without range checks.
    pub const fn unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check the coordinate lies within the valid ranges.
    ///
    /// Deserialized coordinates bypass `new`, so callers accepting
    /// external input should validate them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let lat_ok = self.lat.is_finite() && (-90.0..=90.0).contains(&self.lat);
        let lng_ok = self.lng.is_finite() && (-180.0..=180.0).contains(&self.lng);
        if lat_ok && lng_ok {
            Ok(())
        } else {
            Err(ValidationError::CoordinateOutOfRange {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}
