//! Error types for EventRater
//!
//! All errors use thiserror for structured error handling.
//! Validation errors carry the message shown to the user verbatim.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Event not found: {0}")]
    EventNotFound(u32),

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("{0}")]
    Generic(String),
}

/// Form validation failures, worded for the person filling the form in
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingFields,

    #[error("Name must be {max} characters or less.")]
    NameTooLong { max: usize },

    #[error("Ratings must be between {min} and {max}.")]
    RatingOutOfRange { min: u8, max: u8 },
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            ValidationError::NameTooLong { max: 20 }.to_string(),
            "Name must be 20 characters or less."
        );
    }

    #[test]
    fn test_validation_passes_through_app_error() {
        let err: AppError = ValidationError::MissingFields.into();
        assert_eq!(err.to_string(), "Please fill in all fields.");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            "\"Please fill in all fields.\""
        );
    }
}
