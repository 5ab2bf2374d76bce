use uuid::Uuid;

use crate::server::{error::AppError, validation::FieldError};

pub const INVALID_ID: &str = "Invalid ID format";
pub const INVALID_COURSE_ID: &str = "Invalid course ID format";
pub const INVALID_UNIVERSITY_ID: &str = "Invalid university ID format";
pub const INVALID_COURSE_TYPE_ID: &str = "Invalid course type ID format";

/// Parses an entity identifier taken from a path or query parameter.
///
/// # Arguments
/// - `value` - The raw parameter value
/// - `field` - Parameter name reported on failure
/// - `message` - Message reported on failure
///
/// # Returns
/// - `Ok(Uuid)` - Successfully parsed identifier
/// - `Err(AppError::InvalidIdentifier)` - The value is not a well-formed ID
pub fn parse_id(value: &str, field: &str, message: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value.trim())
        .map_err(|_| AppError::InvalidIdentifier(FieldError::new(field, message)))
}
