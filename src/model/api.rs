use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope wrapping every payload returned by the API.
///
/// `count` is only present on list responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(data.len()),
            data: Some(data),
        }
    }
}

/// Error envelope. Field-level violations go in `errors`, everything else in `error`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldErrorDto>>,
}

impl ErrorDto {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            errors: None,
        }
    }

    pub fn fields(errors: Vec<FieldErrorDto>) -> Self {
        Self {
            success: false,
            error: None,
            errors: Some(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Serializes to `{}`; returned as `data` by delete endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmptyDto {}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
