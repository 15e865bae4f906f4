//! Crossing table error types.

use crate::domain::ValidationError;

/// Errors that can occur when loading the crossing table.
#[derive(Debug, thiserror::Error)]
pub enum CrossingError {
    /// The table is not valid JSON for the expected shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The table contains no crossings
    #[error("crossing table is empty")]
    Empty,

    /// Two crossings share an id
    #[error("duplicate crossing id: {0}")]
    DuplicateId(String),

    /// A terminal has an invalid location
    #[error("crossing {id} has an invalid terminal: {source}")]
    InvalidTerminal {
        id: String,
        #[source]
        source: ValidationError,
    },

    /// A crossing has a zero duration
    #[error("crossing {0} has no duration")]
    MissingDuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(CrossingError::Empty.to_string(), "crossing table is empty");
        assert_eq!(
            CrossingError::DuplicateId("dover-calais".into()).to_string(),
            "duplicate crossing id: dover-calais"
        );
        let err = CrossingError::InvalidTerminal {
            id: "x".into(),
            source: ValidationError::CoordinateOutOfRange {
                lat: 95.0,
                lng: 0.0,
            },
        };
        assert_eq!(
            err.to_string(),
            "crossing x has an invalid terminal: coordinate out of range: (95, 0)"
        );
    }
}
