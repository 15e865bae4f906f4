//! Route stops.

use serde::{Deserialize, Serialize};

use super::{Coordinate, ValidationError};

/// The position a stop occupies in the caller's route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopRole {
    /// First stop of the trip
    Start,
    /// Any stop between the first and last
    Intermediate,
    /// Last stop of the trip
    End,
}

/// A named point on the route.
///
/// Stops are owned by the caller's ordered sequence. The engine never
/// mutates one; it clones them into the stages it builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    /// Caller-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Location
    pub coordinate: Coordinate,
    /// Position in the route
    pub role: StopRole,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Stop {
    /// Create a stop without notes.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinate: Coordinate,
        role: StopRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate,
            role,
            notes: None,
        }
    }

    /// Returns a copy of this stop carrying the given notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Returns a copy of this stop with a different role.
    pub fn with_role(mut self, role: StopRole) -> Self {
        self.role = role;
        self
    }
}

/// Check an ordered stop sequence is plannable.
///
/// Requires at least two stops, each with an in-range coordinate.
pub fn validate_stops(stops: &[Stop]) -> Result<(), ValidationError> {
    if stops.len() < 2 {
        return Err(ValidationError::InsufficientStops(stops.len()));
    }
    stops.iter().try_for_each(|s| s.coordinate.validate())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(id: &str, lat: f64, lng: f64) -> Stop {
        Stop::new(
            id,
            id,
            Coordinate::new(lat, lng).unwrap(),
            StopRole::Intermediate,
        )
    }

    #[test]
    fn builder_methods() {
        let s = stop("lyon", 45.76, 4.84)
            .with_notes("market on Sunday")
            .with_role(StopRole::End);
        assert_eq!(s.notes.as_deref(), Some("market on Sunday"));
        assert_eq!(s.role, StopRole::End);
    }

    #[test]
    fn validate_requires_two_stops() {
        assert_eq!(
            validate_stops(&[]),
            Err(ValidationError::InsufficientStops(0))
        );
        assert_eq!(
            validate_stops(&[stop("a", 0.0, 0.0)]),
            Err(ValidationError::InsufficientStops(1))
        );
        assert!(validate_stops(&[stop("a", 0.0, 0.0), stop("b", 1.0, 1.0)]).is_ok());
    }

    #[test]
    fn validate_rejects_bad_coordinates() {
        let mut bad = stop("b", 0.0, 0.0);
        bad.coordinate = Coordinate::unchecked(0.0, 200.0);
        assert!(matches!(
            validate_stops(&[stop("a", 0.0, 0.0), bad]),
            Err(ValidationError::CoordinateOutOfRange { .. })
        ));
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&StopRole::Intermediate).unwrap(),
            "\"intermediate\""
        );
        let s: Stop = serde_json::from_str(
            r#"{"id":"1","name":"Calais","coordinate":{"lat":50.95,"lng":1.85},"role":"start"}"#,
        )
        .unwrap();
        assert_eq!(s.role, StopRole::Start);
        assert!(s.notes.is_none());
    }
}
