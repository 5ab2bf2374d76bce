use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::model::{course_type::CourseTypeDto, university::UniversityDto};

/// Course with its references left as identifiers.
///
/// Returned by course creation only; every other course endpoint responds with
/// `PopulatedCourseDto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: Uuid,
    pub name: String,
    pub course_type: Uuid,
    pub universities: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Course with its course type and universities expanded.
///
/// `course_type` is `null` when the referenced course type no longer exists, and
/// universities that no longer exist are left out of `universities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedCourseDto {
    pub id: Uuid,
    pub name: String,
    pub course_type: Option<CourseTypeDto>,
    pub universities: Vec<UniversityDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    pub name: Option<String>,
    /// Course type ID.
    pub course_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    pub name: Option<String>,
    /// Course type ID.
    pub course_type: Option<String>,
}

/// Query parameters accepted by `GET /api/courses`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CourseFilterDto {
    /// Case-insensitive substring of the course name.
    pub name: Option<String>,
    /// Exact course type ID.
    pub course_type: Option<String>,
}
