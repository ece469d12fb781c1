//! Input validation for the add and edit forms

use crate::config::MAX_EVENT_NAME_LENGTH;
use crate::error::ValidationError;

/// Names are limited to `MAX_EVENT_NAME_LENGTH` characters
pub fn is_valid_name(name: &str) -> bool {
    name.chars().count() <= MAX_EVENT_NAME_LENGTH
}

/// Check the required fields of an event form.
///
/// Missing fields are reported before an over-long name.
pub fn validate_event_fields(name: &str, address: &str) -> Result<(), ValidationError> {
    if name.is_empty() || address.is_empty() {
        return Err(ValidationError::MissingFields);
    }

    if !is_valid_name(name) {
        return Err(ValidationError::NameTooLong {
            max: MAX_EVENT_NAME_LENGTH,
        });
    }

    Ok(())
}
