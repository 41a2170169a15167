//! Ingestion error types.
//!
//! These represent violations of the build-phase contract: every stop a
//! bus or distance record references must already have been added. They
//! abort the build; query-time absences are `Option`s, never errors.

/// Errors raised while populating the catalogue or building the network.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IngestError {
    /// A bus route references a stop that was never added
    #[error("bus {bus} references unknown stop {stop}")]
    UnknownStopInRoute { bus: String, stop: String },

    /// A distance record references a stop that was never added
    #[error("distance record references unknown stop {stop}")]
    UnknownStopInDistance { stop: String },

    /// A bus route must visit at least one stop
    #[error("bus {bus} has an empty stop sequence")]
    EmptyRoute { bus: String },

    /// Bus velocity must be positive
    #[error("bus velocity must be positive, got {velocity}")]
    InvalidVelocity { velocity: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = IngestError::UnknownStopInRoute {
            bus: "297".to_string(),
            stop: "Biryulyovo".to_string(),
        };
        assert_eq!(err.to_string(), "bus 297 references unknown stop Biryulyovo");

        let err = IngestError::UnknownStopInDistance {
            stop: "Universam".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "distance record references unknown stop Universam"
        );

        let err = IngestError::EmptyRoute {
            bus: "828".to_string(),
        };
        assert_eq!(err.to_string(), "bus 828 has an empty stop sequence");

        let err = IngestError::InvalidVelocity { velocity: -1.0 };
        assert_eq!(err.to_string(), "bus velocity must be positive, got -1");
    }
}
