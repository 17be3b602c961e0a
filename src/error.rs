//! Error types shared across the tracker.

/// Numeric form fields, named the way the form labels them
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Field {
    Distance,
    Duration,
    Cadence,
    #[strum(to_string = "Elevation gain")]
    Elevation,
}

/// Rejected workout input. Nothing is created or mutated when this is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must be a number")]
    NotANumber(Field),

    #[error("{0} must be a finite number")]
    NotFinite(Field),

    #[error("{0} must be positive")]
    Negative(Field),

    #[error("{0} must be greater than zero")]
    Zero(Field),

    #[error("Invalid coordinates: {lat}, {lng}")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("Workout id must not be empty")]
    EmptyId,
}

/// Key-value store failures
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why the starting position could not be resolved
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeolocationError {
    #[error("no position available (pass --at LAT,LNG or set \"home\" in the config)")]
    Unavailable,

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

/// Outcome of submitting the workout form
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("the form is not open")]
    FormClosed,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_name_the_field() {
        assert_eq!(
            ValidationError::Negative(Field::Distance).to_string(),
            "Distance must be positive"
        );
        assert_eq!(
            ValidationError::Zero(Field::Duration).to_string(),
            "Duration must be greater than zero"
        );
        assert_eq!(
            ValidationError::NotANumber(Field::Elevation).to_string(),
            "Elevation gain must be a number"
        );
    }

    #[test]
    fn quota_message_includes_sizes() {
        let err = StorageError::QuotaExceeded {
            needed: 10,
            quota: 4,
        };
        assert_eq!(
            err.to_string(),
            "storage quota exceeded: 10 bytes needed, 4 allowed"
        );
    }
}
