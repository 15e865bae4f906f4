//! Domain error types.
//!
//! These errors represent input validation failures in the planning
//! engine. They are distinct from HTTP and data-loading errors.

/// Validation failures that prevent a plan from being built.
///
/// A validation error is fatal to the current computation: the engine
/// never returns a partial plan alongside one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Fewer than two stops were supplied
    #[error("insufficient stops: need at least 2, got {0}")]
    InsufficientStops(usize),

    /// Latitude or longitude outside the valid range
    #[error("coordinate out of range: ({lat}, {lng})")]
    CoordinateOutOfRange { lat: f64, lng: f64 },
}

impl ValidationError {
    /// A plain, actionable message suitable for showing to a traveller.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::InsufficientStops(_) => {
                "Add at least two stops to build a plan".to_string()
            }
            ValidationError::CoordinateOutOfRange { lat, lng } => format!(
                "The location ({lat}, {lng}) is not on the map. Check the stop coordinates."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InsufficientStops(1);
        assert_eq!(err.to_string(), "insufficient stops: need at least 2, got 1");

        let err = ValidationError::CoordinateOutOfRange {
            lat: 91.0,
            lng: 0.5,
        };
        assert_eq!(err.to_string(), "coordinate out of range: (91, 0.5)");
    }

    #[test]
    fn user_messages() {
        assert_eq!(
            ValidationError::InsufficientStops(0).user_message(),
            "Add at least two stops to build a plan"
        );
        assert!(
            ValidationError::CoordinateOutOfRange {
                lat: -100.0,
                lng: 0.0
            }
            .user_message()
            .contains("-100")
        );
    }
}
