//! Which side of the sea barrier a point is on.
//!
//! Classification uses fixed bounding boxes. They are deliberately coarse:
//! the UK/Ireland box also catches a thin strip of the French coast north
//! of 49.9° and west of 1.8° E.

use serde::Serialize;

use crate::domain::Coordinate;

/// A coarse geographic region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    /// Great Britain, Ireland and nearby islands
    UkIreland,
    /// Continental Europe
    Mainland,
    /// Anywhere else
    Other,
}

/// Axis-aligned latitude/longitude box, inclusive.
struct BoundingBox {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl BoundingBox {
    fn contains(&self, c: Coordinate) -> bool {
        (self.min_lat..=self.max_lat).contains(&c.lat())
            && (self.min_lng..=self.max_lng).contains(&c.lng())
    }
}

const GREAT_BRITAIN: BoundingBox = BoundingBox {
    min_lat: 49.9,
    max_lat: 60.9,
    min_lng: -8.2,
    max_lng: 1.8,
};

const IRELAND: BoundingBox = BoundingBox {
    min_lat: 51.4,
    max_lat: 55.4,
    min_lng: -10.5,
    max_lng: -5.9,
};

const EUROPE: BoundingBox = BoundingBox {
    min_lat: 35.0,
    max_lat: 72.0,
    min_lng: -10.0,
    max_lng: 40.0,
};

/// Classify a coordinate.
pub fn classify(c: Coordinate) -> Region {
    if GREAT_BRITAIN.contains(c) || IRELAND.contains(c) {
        Region::UkIreland
    } else if EUROPE.contains(c) {
        Region::Mainland
    } else {
        Region::Other
    }
}

/// Whether travelling between `a` and `b` requires a sea crossing.
///
/// True only when one end is in the UK/Ireland and the other on the
/// mainland, in either order.
///
/// # Examples
///
/// ```
/// use tour_server::crossings::needs_crossing;
/// use tour_server::domain::Coordinate;
///
/// let london = Coordinate::new(51.5, -0.1).unwrap();
/// let paris = Coordinate::new(48.85, 2.35).unwrap();
/// assert!(needs_crossing(london, paris));
/// assert!(!needs_crossing(paris, paris));
/// ```
pub fn needs_crossing(a: Coordinate, b: Coordinate) -> bool {
    matches!(
        (classify(a), classify(b)),
        (Region::UkIreland, Region::Mainland) | (Region::Mainland, Region::UkIreland)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn classifies_cities() {
        assert_eq!(classify(c(51.5, -0.1)), Region::UkIreland); // London
        assert_eq!(classify(c(55.95, -3.19)), Region::UkIreland); // Edinburgh
        assert_eq!(classify(c(53.35, -6.26)), Region::UkIreland); // Dublin
        assert_eq!(classify(c(51.9, -8.47)), Region::UkIreland); // Cork
        assert_eq!(classify(c(48.85, 2.35)), Region::Mainland); // Paris
        assert_eq!(classify(c(52.52, 13.4)), Region::Mainland); // Berlin
        assert_eq!(classify(c(71.17, 25.78)), Region::Mainland); // North Cape
        assert_eq!(classify(c(40.71, -74.0)), Region::Other); // New York
        assert_eq!(classify(c(33.9, 10.0)), Region::Other); // Tunisia
    }

    #[test]
    fn london_paris_needs_crossing() {
        assert!(needs_crossing(c(51.5, -0.1), c(48.85, 2.35)));
    }

    #[test]
    fn same_side_needs_no_crossing() {
        assert!(!needs_crossing(c(51.5, -0.1), c(53.48, -2.24))); // London–Manchester
        assert!(!needs_crossing(c(48.85, 2.35), c(41.39, 2.17))); // Paris–Barcelona
    }

    #[test]
    fn outside_regions_need_no_crossing() {
        assert!(!needs_crossing(c(51.5, -0.1), c(40.71, -74.0)));
        assert!(!needs_crossing(c(40.71, -74.0), c(48.85, 2.35)));
    }
}
